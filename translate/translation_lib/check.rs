//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Duplicate key report for master files

use std::collections::HashMap;

use crate::translation_lib::entry::{TranslationEntry, TranslationFile};

/// Keys occurring more than once, split by whether their source texts agree
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DuplicateReport<'a> {
    /// Repeated keys whose occurrences all have the same text
    pub single_source: Vec<Vec<&'a TranslationEntry>>,
    /// Repeated keys with differing texts
    pub multiple_sources: Vec<Vec<&'a TranslationEntry>>,
}

impl<'a> DuplicateReport<'a> {
    /// Collect repeated keys in order of their first occurrence
    pub fn new(file: &'a TranslationFile) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut by_key: HashMap<&str, Vec<&TranslationEntry>> = HashMap::new();
        for entry in file {
            let occurrences = by_key.entry(entry.key.as_str()).or_default();
            if occurrences.is_empty() {
                order.push(&entry.key);
            }
            occurrences.push(entry);
        }

        let mut report = DuplicateReport::default();
        for key in order {
            let occurrences = by_key.remove(key).unwrap_or_default();
            if occurrences.len() < 2 {
                continue;
            }
            if occurrences.iter().all(|e| e.value == occurrences[0].value) {
                report.single_source.push(occurrences);
            } else {
                report.multiple_sources.push(occurrences);
            }
        }
        report
    }

    pub fn is_ok(&self) -> bool {
        self.single_source.is_empty() && self.multiple_sources.is_empty()
    }
}

impl std::fmt::Display for DuplicateReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            return writeln!(f, "File is OK.");
        }

        writeln!(
            f,
            "The following keys occur multiple times in the file, but with the same source text:"
        )?;
        for group in &self.single_source {
            writeln!(f, "  {}: '{}'", group[0].key, group[0].value)?;
        }

        writeln!(
            f,
            "The following keys occur multiple times in the file with different source text:"
        )?;
        for group in &self.multiple_sources {
            let values: Vec<String> = group.iter().map(|e| format!("'{}'", e.value)).collect();
            writeln!(f, "  {}: {}", group[0].key, values.join(", "))?;
        }
        Ok(())
    }
}
