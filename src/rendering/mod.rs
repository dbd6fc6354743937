//! Backends that turn token kinds into markup

mod html;
mod syntax;
mod terminal;

pub use html::{Html, STYLESHEET};
pub use syntax::{Identity, Render, Syntax};
pub use terminal::Terminal;
