use std::collections::HashMap;

/// One entry per distinct identifier. Only the text is known at lexing
/// time; later compiler phases attach their own attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    text: String,
}

impl SymbolTableEntry {
    pub fn get_text(&self) -> &str {
        &self.text
    }
}

/// Registry of identifier names, populated incrementally as identifiers
/// are first seen. Insertion is idempotent: registering the same name
/// twice neither duplicates nor disturbs the entry, and entries keep
/// their first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    lookup: HashMap<String, usize>,
    entries: Vec<SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            lookup: HashMap::new(),
            entries: vec![],
        }
    }

    /// Inserts `text` if absent and returns the entry either way.
    pub fn add(&mut self, text: &str) -> &SymbolTableEntry {
        let index = match self.lookup.get(text) {
            Some(index) => *index,
            None => {
                let index = self.entries.len();
                self.entries.push(SymbolTableEntry {
                    text: String::from(text),
                });
                self.lookup.insert(String::from(text), index);
                index
            }
        };

        &self.entries[index]
    }

    pub fn get(&self, text: &str) -> Option<&SymbolTableEntry> {
        self.lookup.get(text).map(|index| &self.entries[*index])
    }

    pub fn has(&self, text: &str) -> bool {
        self.lookup.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolTableEntry> {
        self.entries.iter()
    }
}
