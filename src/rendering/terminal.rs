//! Renderer for previewing colourized HTML in a terminal

use owo_colors::OwoColorize;

use super::syntax::{Render, Syntax};
use crate::highlighting::unescape;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output. Entities are decoded at the end so the terminal shows
/// real angle brackets.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Tag => content // punctuation.definition.tag - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Syntax::TagName => content // entity.name.tag - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::AttributeName => content // entity.other.attribute-name - #8f5902 (brown)
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .to_string(),
            Syntax::AttributeValue => content // string.quoted - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Comment => content // comment.block.html - #888a85 (grey) italic
                .color(owo_colors::Rgb(0x88, 0x8a, 0x85))
                .italic()
                .to_string(),
            Syntax::EqualSign => content // punctuation.separator - #cc0000 (red)
                .color(owo_colors::Rgb(0xcc, 0x00, 0x00))
                .to_string(),
            Syntax::Text => content
                .bright_white()
                .to_string(),
        }
    }

    fn finish(&self, text: String) -> String {
        unescape(&text)
    }
}
