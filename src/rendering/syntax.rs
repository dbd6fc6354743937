//! Token kinds recognized when colourizing HTML source

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Tag, // angle brackets, closing and self-closing slashes
    TagName,
    AttributeName,
    AttributeValue,
    Comment,
    EqualSign,
    Text,
}

impl Syntax {
    /// Every token kind the pipeline can produce.
    pub const ALL: [Syntax; 7] = [
        Syntax::Tag,
        Syntax::TagName,
        Syntax::AttributeName,
        Syntax::AttributeValue,
        Syntax::Comment,
        Syntax::EqualSign,
        Syntax::Text,
    ];

    /// The CSS class a stylesheet binds to this kind of token.
    pub const fn class(self) -> &'static str {
        match self {
            Syntax::Tag => "highlight-tag",
            Syntax::TagName => "highlight-tag-name",
            Syntax::AttributeName => "highlight-attribute-name",
            Syntax::AttributeValue => "highlight-attribute-value",
            Syntax::Comment => "highlight-comment",
            Syntax::EqualSign => "highlight-equal-sign",
            Syntax::Text => "highlight-text",
        }
    }
}

/// Trait for different rendering backends (the no-op no-markup one, HTML
/// span markers for web pages, ANSI escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;

    /// Last chance to adjust the fully coloured text. The text arriving here
    /// still carries `&lt;` and `&gt;` in place of angle brackets.
    fn finish(&self, text: String) -> String {
        text
    }
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
