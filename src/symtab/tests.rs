//! Unit tests for the symbol table.

use crate::symtab::symtab::SymbolTable;

#[test]
fn test_add_and_get() {
    let mut table = SymbolTable::new();
    table.add("result");

    assert!(table.has("result"));
    assert_eq!(table.get("result").unwrap().get_text(), "result");
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_add_is_idempotent() {
    let mut table = SymbolTable::new();
    table.add("a");
    table.add("a");
    table.add("a");

    assert_eq!(table.len(), 1);
}

#[test]
fn test_first_seen_order() {
    let mut table = SymbolTable::new();
    table.add("c");
    table.add("a");
    table.add("b");
    table.add("a");

    let names: Vec<&str> = table.entries().map(|entry| entry.get_text()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_empty_table() {
    let table = SymbolTable::new();

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(!table.has("anything"));
}

#[test]
fn test_add_returns_entry() {
    let mut table = SymbolTable::new();
    let entry = table.add("x");

    assert_eq!(entry.get_text(), "x");
}
