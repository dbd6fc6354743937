//! Span markers for embedding colourized HTML source in web pages

use super::syntax::{Render, Syntax};

/// Wrap each fragment in `<span class="...">`, the class coming from
/// [`Syntax::class`]. Stylesheets bind colours to those classes.
pub struct Html;

impl Render for Html {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        format!(r#"<span class="{}">{}</span>"#, syntax.class(), content)
    }
}

/// Default colours for the seven token classes, plus the whitespace and font
/// settings for the `pre` block the output is wrapped in.
pub const STYLESHEET: &str = r#"pre {
  white-space: pre;
  font-family: "Inconsolata", monospace;
}
.highlight-tag {
  color: #999999;
}
.highlight-tag-name {
  color: #3465a4;
  font-weight: bold;
}
.highlight-attribute-name {
  color: #8f5902;
}
.highlight-attribute-value {
  color: #4e9a06;
}
.highlight-comment {
  color: #888a85;
  font-style: italic;
}
.highlight-equal-sign {
  color: #cc0000;
}
.highlight-text {
  color: #2e3436;
}
"#;
