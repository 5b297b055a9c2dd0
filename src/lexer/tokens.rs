use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::ErrorImpl, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map
    };

    pub static ref FIXED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Equals);
        map.insert("*", TokenKind::Star);
        map.insert("**", TokenKind::DoubleStar);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("/", TokenKind::Slash);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert(";", TokenKind::Semicolon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntConst,
    Identifier,

    Assign,     // =
    Equals,     // ==
    Star,       // *
    DoubleStar, // **

    Plus,
    Dash,
    Slash,
    OpenParen,
    CloseParen,
    Semicolon,

    /// Catch-all for any other single character, keyed by its own text.
    Other(char),

    // Reserved
    Int,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Other(c) => write!(f, "{}", c),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// True iff `word` belongs to the fixed keyword set of the source language.
///
/// Only meaningful for alphanumeric/underscore runs; the scanner uses it
/// to decide identifier-vs-keyword.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains_key(word)
}

/// Maps raw lexeme text to its token kind.
///
/// Total over every lexeme the scanner can extract: reserved words, the
/// fixed-form operators and punctuation, alphanumeric/underscore runs,
/// digit runs, and arbitrary single characters. Anything else means the
/// scanner handed over a lexeme it should never have produced, which is
/// reported as an internal-consistency error rather than bad input.
pub fn classify(lexeme: &str) -> Result<TokenKind, ErrorImpl> {
    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        return Ok(*kind);
    }

    if let Some(kind) = FIXED_LOOKUP.get(lexeme) {
        return Ok(*kind);
    }

    let fail = || ErrorImpl::UnclassifiableLexeme {
        lexeme: lexeme.to_string(),
    };

    let mut chars = lexeme.chars();
    let first = match chars.next() {
        Some(first) => first,
        None => return Err(fail()),
    };

    if first.is_alphabetic() || first == '_' {
        if chars.all(|c| c.is_alphanumeric() || c == '_') {
            Ok(TokenKind::Identifier)
        } else {
            Err(fail())
        }
    } else if first.is_ascii_digit() {
        if chars.all(|c| c.is_ascii_digit()) {
            Ok(TokenKind::IntConst)
        } else {
            Err(fail())
        }
    } else if chars.next().is_none() {
        Ok(TokenKind::Other(first))
    } else {
        Err(fail())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({})", self.kind, value),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{}", self);
    }
}
