//! Error reporting for the command line

use owo_colors::OwoColorize;

use crate::loading::LoadingError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

/// Format a failure to fill in the page template
pub fn concise_template_error(error: &tinytemplate::error::Error) -> String {
    format!(
        "{}: {}",
        "error".bright_red(),
        error
            .to_string()
            .bold()
    )
}
