//! Colouring of plain text sitting between tags

use regex::Captures;

use crate::rendering::{Render, Syntax};

const COMMENT_OPEN: &str = "&lt;!--";

/// Wrap each run of text found between a `&gt;` and the following `&lt;`.
/// Runs that are only whitespace are left as they are, as are runs whose
/// closing `&lt;` begins a comment. The brackets themselves stay outside
/// the marker.
pub fn colour_text(renderer: &impl Render, text: &str) -> String {
    crate::compile!(r"(&gt;)([^&]+?)(&lt;)")
        .replace_all(text, |caps: &Captures| {
            let content = &caps[2];

            if content
                .trim()
                .is_empty()
                || precedes_comment(text, &caps[0])
            {
                return caps[0].to_string();
            }

            format!(
                "{}{}{}",
                &caps[1],
                renderer.style(Syntax::Text, content),
                &caps[3]
            )
        })
        .into_owned()
}

/// Whether the closing `&lt;` of this run is the start of a comment. The run
/// is located by its first identical occurrence in the text, not by where
/// this particular match sits, and only a fixed window of characters from
/// its closing `&lt;` is examined.
fn precedes_comment(text: &str, run: &str) -> bool {
    match text.find(run) {
        // every run ends with the four bytes of `&lt;`
        Some(start) => text[start + run.len() - 4..].starts_with(COMMENT_OPEN),
        None => false,
    }
}
