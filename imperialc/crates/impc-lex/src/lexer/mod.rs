//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace skipping and comment tokens
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String literal lexing and escapes
//! - `operator` - Operator, punctuation and invalid-character handling

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
