//! Indentation normalization

/// Remove leading blank lines and trailing whitespace, then strip the
/// indentation common to every non-blank line. Relative indentation between
/// lines is preserved. Only spaces and tabs count as indentation.
pub fn dedent(text: &str) -> String {
    let text = crate::compile!(r"\A\s*\n").replace(text, "");
    let text = crate::compile!(r"\s+\z").replace(&text, "");

    let lines: Vec<&str> = text
        .split('\n')
        .collect();

    let smallest = lines
        .iter()
        .filter(|line| {
            !line
                .trim()
                .is_empty()
        })
        .map(|line| indent_width(line))
        .min();

    let smallest = match smallest {
        Some(width) => width,
        None => return String::new(),
    };

    lines
        .iter()
        .map(|line| strip_indent(line, smallest))
        .collect::<Vec<&str>>()
        .join("\n")
}

fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Length of the run of spaces and tabs at the start of the line.
fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|&c| is_indent(c))
        .count()
}

/// Drop up to `limit` leading spaces or tabs. Lines with less indentation
/// than that (blank ones, typically) lose what they have.
fn strip_indent(line: &str, limit: usize) -> &str {
    let count = line
        .chars()
        .take(limit)
        .take_while(|&c| is_indent(c))
        .count();
    // spaces and tabs are single bytes
    &line[count..]
}
