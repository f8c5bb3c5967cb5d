//! Command handlers for the Tarn CLI.

mod lex;

pub use lex::{lex_files, LexArgs, LexReport};
