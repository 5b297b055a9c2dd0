//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization via an explicit character-level state machine
//! - Recognition of keywords, identifiers, integer constants, and operators
//! - One-character lookahead for the `*`/`**` and `=`/`==` pairs
//! - Registration of newly seen identifiers in the symbol table
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
