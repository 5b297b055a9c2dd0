//! Error types and error handling for the lexer.
//!
//! This module defines the error types used by the scanning pass.
//! It includes:
//!
//! - Error structures with source position information
//! - The fatal dangling-operator scan error
//! - An internal-consistency error for unclassifiable lexemes
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
