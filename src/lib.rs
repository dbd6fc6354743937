//! Colourize HTML source text as annotated markup for display.

pub mod highlighting;
pub mod loading;
pub mod output;
pub mod problem;
mod regex;
pub mod rendering;
