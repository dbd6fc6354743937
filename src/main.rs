use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use tagtint::highlighting::{highlight, highlight_with, unescape};
use tagtint::loading;
use tagtint::output;
use tagtint::problem::{concise_loading_error, concise_template_error};
use tagtint::rendering::{Identity, Terminal, STYLESHEET};

fn filename_arg(purpose: &'static str) -> Arg {
    Arg::new("filename")
        .required(true)
        .help(purpose)
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("tagtint")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Colourize HTML source for display.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what each pass is doing to standard error."),
        )
        .subcommand(
            Command::new("highlight")
                .about("Annotate HTML source with <span> markers for each token")
                .arg(
                    Arg::new("wrap")
                        .long("wrap")
                        .action(ArgAction::SetTrue)
                        .help("Wrap the result in <pre><code> for direct inclusion in a page."),
                )
                .arg(filename_arg(
                    "The file containing the HTML you want to colourize, or '-' for standard input.",
                )),
        )
        .subcommand(
            Command::new("page")
                .about("Produce a standalone HTML page showing the colourized source")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .action(ArgAction::Set)
                        .help("Title for the page. Defaults to the filename."),
                )
                .arg(filename_arg(
                    "The file containing the HTML you want to show, or '-' for standard input.",
                )),
        )
        .subcommand(
            Command::new("show")
                .about("Preview the colourized source in the terminal")
                .after_help("Entities &lt; and &gt; already present in the source are shown as < and >.")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(filename_arg(
                    "The file containing the HTML you want to preview, or '-' for standard input.",
                )),
        )
        .subcommand(Command::new("stylesheet").about("Print the default CSS for the highlight classes"))
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("highlight", submatches)) => {
            let source = read_source(submatches);
            let result = highlight(&source);

            if submatches.get_flag("wrap") {
                println!("{}", output::wrap(&result));
            } else {
                println!("{}", result);
            }
        }
        Some(("page", submatches)) => {
            let filename = filename_of(submatches);
            let source = read_source(submatches);

            let title = match submatches.get_one::<String>("title") {
                Some(title) => title.clone(),
                None if filename.to_str() == Some("-") => "stdin".to_string(),
                None => filename
                    .display()
                    .to_string(),
            };

            match output::page(&title, &highlight(&source)) {
                Ok(page) => print!("{}", page),
                Err(error) => {
                    eprintln!("{}", concise_template_error(&error));
                    std::process::exit(1);
                }
            }
        }
        Some(("show", submatches)) => {
            let source = read_source(submatches);

            let result = if submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal()
            {
                highlight_with(&Terminal, &source)
            } else {
                debug!("Output is not a terminal; writing plain text");
                unescape(&highlight_with(&Identity, &source))
            };

            println!("{}", result);
        }
        Some(("stylesheet", _)) => {
            print!("{}", STYLESHEET);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: tagtint [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename_of(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => Path::new("-"),
    }
}

/// Load the named file, bailing out with a message if it can't be read.
fn read_source(submatches: &ArgMatches) -> String {
    let filename = filename_of(submatches);
    debug!("Reading {}", filename.display());

    match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            eprintln!("{}", "Unable to continue.".dimmed());
            std::process::exit(1);
        }
    }
}
