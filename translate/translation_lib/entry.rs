//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Translation entries and files
//!
//! A `TranslationFile` keeps its entries twice: in file order, duplicates
//! included, and indexed by key. A key may legitimately occur several times
//! (several master files merged into one PO file, or the same source key
//! listed in two PO blocks). Structurally identical entries under one key are
//! indexed only once.

use std::collections::HashMap;

/// One localizable unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TranslationEntry {
    /// Stable identifier
    pub key: String,
    /// Current text (source text in a master file, translation otherwise)
    pub value: String,
    /// Source text this entry was translated from
    pub source_value: String,
    /// Disambiguation of identical source texts
    pub context: String,
    /// Value was preceded by a single quote
    pub leftquote: bool,
    /// Value was followed by a single quote
    pub rightquote: bool,
    /// Spaces before the value, outside the quotes
    pub leftspaces: usize,
    /// Spaces after the value, outside the quotes
    pub rightspaces: usize,
}

/// The entry every empty source text translates to; also the PO header record
pub static EMPTY_ENTRY: TranslationEntry = TranslationEntry::empty();

impl TranslationEntry {
    /// Create an entry with only a key
    pub fn new<S: Into<String>>(key: S) -> Self {
        TranslationEntry {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Entry with empty key and value
    pub const fn empty() -> Self {
        TranslationEntry {
            key: String::new(),
            value: String::new(),
            source_value: String::new(),
            context: String::new(),
            leftquote: false,
            rightquote: false,
            leftspaces: 0,
            rightspaces: 0,
        }
    }
}

impl std::fmt::Display for TranslationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' [{}] = '{}'", self.key, self.context, self.value)
    }
}

/// Ordered multi-map of translation entries
#[derive(Debug, Clone, Default)]
pub struct TranslationFile {
    /// Indexes into `entries_in_order`, by key
    entries: HashMap<String, Vec<usize>>,
    /// All entries as encountered, duplicates included
    entries_in_order: Vec<TranslationEntry>,
}

impl TranslationFile {
    pub fn new() -> Self {
        TranslationFile::default()
    }

    /// Add an entry. Never rejects; duplicate keys are kept.
    pub fn append(&mut self, entry: TranslationEntry) {
        let index = self.entries_in_order.len();
        let indexed = self.entries.entry(entry.key.clone()).or_default();
        if !indexed.iter().any(|&i| self.entries_in_order[i] == entry) {
            indexed.push(index);
        }
        self.entries_in_order.push(entry);
    }

    /// Distinct entries stored under `key`, in order of first appearance
    pub fn get(&self, key: &str) -> Option<impl Iterator<Item = &TranslationEntry> + '_> {
        self.entries
            .get(key)
            .map(|indexes| indexes.iter().map(move |&i| &self.entries_in_order[i]))
    }

    /// Number of distinct entries stored under `key`
    pub fn count(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, Vec::len)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in file order
    pub fn iter(&self) -> std::slice::Iter<'_, TranslationEntry> {
        self.entries_in_order.iter()
    }

    /// Number of entries in file order, duplicates included
    pub fn len(&self) -> usize {
        self.entries_in_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries_in_order.is_empty()
    }
}

impl<'a> IntoIterator for &'a TranslationFile {
    type Item = &'a TranslationEntry;
    type IntoIter = std::slice::Iter<'a, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
