//! Lazily compiled regular expressions shared by the colouring stages.

mod cache;
