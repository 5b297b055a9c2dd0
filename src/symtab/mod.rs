//! Symbol table module.
//!
//! This module contains the identifier registry populated during lexical
//! analysis. It handles:
//!
//! - Insert-if-absent registration keyed by identifier text
//! - First-seen ordering of entries
//! - Lookup of entries for later compiler phases

pub mod symtab;

#[cfg(test)]
mod tests;
