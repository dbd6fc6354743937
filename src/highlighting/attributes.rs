//! Colouring of attributes inside a tag

use regex::{Captures, Regex};

use crate::rendering::{Render, Syntax};

/// One `name=value` occurrence within a tag's attribute region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'i> {
    pub spacing: &'i str,
    pub name: &'i str,
    pub equals: &'i str,
    /// Quoted value, quote characters included.
    pub value: Option<&'i str>,
}

impl<'i> Attribute<'i> {
    fn from_captures(caps: &Captures<'i>) -> Option<Attribute<'i>> {
        Some(Attribute {
            spacing: caps
                .get(1)?
                .as_str(),
            name: caps
                .get(2)?
                .as_str(),
            equals: caps
                .get(3)?
                .as_str(),
            value: caps
                .get(4)
                .map(|m| m.as_str()),
        })
    }

    fn render(&self, renderer: &impl Render) -> String {
        let mut result = String::from(self.spacing);
        result.push_str(&renderer.style(Syntax::AttributeName, self.name));
        result.push_str(&renderer.style(Syntax::EqualSign, self.equals));
        if let Some(value) = self.value {
            result.push_str(&renderer.style(Syntax::AttributeValue, value));
        }
        result
    }
}

// leading whitespace, name, equal sign, optional quoted value
fn pattern() -> &'static Regex {
    crate::compile!(r#"(\s+)([a-zA-Z:-]+)(=)("[^"]*"|'[^']*')?"#)
}

/// Colour every attribute with an equal sign in `attributes`, the raw text
/// between a tag's name and its closing bracket. Attributes without `=` are
/// not recognized and pass through untouched.
pub fn colour_attributes(renderer: &impl Render, attributes: &str) -> String {
    pattern()
        .replace_all(attributes, |caps: &Captures| match Attribute::from_captures(caps) {
            Some(attribute) => attribute.render(renderer),
            None => caps[0].to_string(),
        })
        .into_owned()
}
