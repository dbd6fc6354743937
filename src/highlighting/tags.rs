//! Colouring of tag structure

use regex::{Captures, Regex};
use tracing::debug;

use super::attributes::colour_attributes;
use crate::rendering::{Render, Syntax};

/// The parts of one escaped tag, from `&lt;` through to `&gt;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'i> {
    /// `&lt;` or, for end tags, `&lt;/`
    pub opening: &'i str,
    pub name: &'i str,
    /// Everything between the name and the closing bracket, uncoloured
    pub attributes: &'i str,
    pub self_closing: Option<&'i str>,
    pub closing: &'i str,
}

impl<'i> Tag<'i> {
    fn from_captures(caps: &Captures<'i>) -> Option<Tag<'i>> {
        Some(Tag {
            opening: caps
                .get(1)?
                .as_str(),
            name: caps
                .get(2)?
                .as_str(),
            attributes: caps
                .get(3)?
                .as_str(),
            self_closing: caps
                .get(4)
                .map(|m| m.as_str())
                .filter(|slash| !slash.is_empty()),
            closing: caps
                .get(5)?
                .as_str(),
        })
    }

    fn render(&self, renderer: &impl Render) -> String {
        let mut result = renderer.style(Syntax::Tag, self.opening);
        result.push_str(&renderer.style(Syntax::TagName, self.name));
        result.push_str(&colour_attributes(renderer, self.attributes));
        if let Some(slash) = self.self_closing {
            result.push_str(&renderer.style(Syntax::Tag, slash));
        }
        result.push_str(&renderer.style(Syntax::Tag, self.closing));
        result
    }
}

// The attribute region is lazy so that the first closing bracket ends the
// tag; that same laziness lets a trailing slash fall to the self-closing
// group rather than the attributes.
fn pattern() -> &'static Regex {
    crate::compile!(r"(&lt;/?)([a-zA-Z0-9-]+)((?s:.*?))(/?)(&gt;)")
}

/// Colour every escaped tag in `text`: brackets, name, attributes and any
/// self-closing slash each get their own marker.
pub fn colour_tags(renderer: &impl Render, text: &str) -> String {
    let mut count = 0usize;

    let result = pattern()
        .replace_all(text, |caps: &Captures| match Tag::from_captures(caps) {
            Some(tag) => {
                count += 1;
                tag.render(renderer)
            }
            None => caps[0].to_string(),
        })
        .into_owned();

    debug!("Coloured {} tag{}", count, if count == 1 { "" } else { "s" });

    result
}
