//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Key to translation lookup
//!
//! The same key may have several translations, e.g. when several master
//! files were merged into one PO file. The source text the translation was
//! made from then decides which one belongs to a given master entry.

use crate::translation_lib::entry::{TranslationEntry, TranslationFile, EMPTY_ENTRY};
use crate::translation_lib::error::{Candidate, TranslationError};

impl TranslationFile {
    /// Find the translation of `master_entry` in this file.
    ///
    /// Empty source texts always translate to the empty entry.
    pub fn get_translated_entry(
        &self,
        master_entry: &TranslationEntry,
    ) -> Result<&TranslationEntry, TranslationError> {
        if master_entry.value.is_empty() {
            return Ok(&EMPTY_ENTRY);
        }

        let key = master_entry.key.trim();
        let mut entries = match self.get(key) {
            Some(entries) => entries,
            None => {
                return Err(TranslationError::MissingTranslation {
                    key: key.to_string(),
                    source_text: master_entry.value.clone(),
                })
            }
        };

        if self.count(key) == 1 {
            if let Some(entry) = entries.next() {
                return Ok(entry);
            }
        }

        // Entries agreeing on the translated text count once
        let mut matching: Vec<&TranslationEntry> = Vec::new();
        for entry in entries.filter(|e| e.source_value == master_entry.value) {
            if !matching.iter().any(|m| m.value == entry.value) {
                matching.push(entry);
            }
        }

        match matching.as_slice() {
            [entry] => Ok(*entry),
            _ => Err(TranslationError::AmbiguousTranslation {
                key: key.to_string(),
                source_text: master_entry.value.clone(),
                candidates: self
                    .get(key)
                    .into_iter()
                    .flatten()
                    .map(|e| Candidate {
                        value: e.value.clone(),
                        source_text: e.source_value.clone(),
                    })
                    .collect(),
            }),
        }
    }
}
