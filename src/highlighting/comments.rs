//! Colouring of HTML comments

use crate::rendering::{Render, Syntax};

/// Wrap each `&lt;!-- ... --&gt;` span, delimiters included, as a comment.
/// The first closing sequence ends a comment.
pub fn colour_comments(renderer: &impl Render, text: &str) -> String {
    crate::compile!(r"(?s)&lt;!--.*?--&gt;")
        .replace_all(text, |caps: &regex::Captures| {
            renderer.style(Syntax::Comment, &caps[0])
        })
        .into_owned()
}
