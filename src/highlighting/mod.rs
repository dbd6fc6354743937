//! Colourizing HTML source
//!
//! The work happens as a fixed sequence of passes over the text. Indentation
//! is normalized, angle brackets are escaped to entities, and then comments,
//! text runs, and tags (with their attributes) are coloured in that order.
//! Every pass after escaping finds structure only by its `&lt;` and `&gt;`
//! entities, so the raw `<span>` markup added by earlier passes is never
//! mistaken for source.
//!
//! Comments go first so that text and tag colouring see them already
//! wrapped. This does not stop tag-shaped text inside a comment from being
//! coloured as a tag later on.

use tracing::debug;

use crate::rendering::{Html, Render};

mod attributes;
mod comments;
mod escape;
mod normalize;
mod tags;
mod text;

pub use attributes::{colour_attributes, Attribute};
pub use comments::colour_comments;
pub use escape::{escape, unescape};
pub use normalize::dedent;
pub use tags::{colour_tags, Tag};
pub use text::colour_text;

/// Colourize raw HTML source with `<span class="...">` markers.
pub fn highlight(source: &str) -> String {
    highlight_with(&Html, source)
}

/// Colourize raw HTML source, applying the given renderer to each token.
/// Never fails; input the patterns do not recognize passes through as is.
pub fn highlight_with(renderer: &impl Render, source: &str) -> String {
    debug!("Highlighting {} bytes", source.len());

    let text = dedent(source);
    let text = escape(&text);
    let text = colour_comments(renderer, &text);
    let text = colour_text(renderer, &text);
    let text = colour_tags(renderer, &text);

    renderer.finish(text)
}
