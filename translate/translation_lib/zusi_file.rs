//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Zusi translation file reader and writers
//!
//! A Zusi translation file holds one record per line:
//!
//! ```text
//! KEY = VALUE
//! ```
//!
//! The separator is exactly `" = "` (first occurrence). Lines without it are
//! ignored. The value may be padded with spaces and wrapped in single quotes;
//! both are recorded as entry metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::translation_lib::codeset::Codeset;
use crate::translation_lib::entry::{TranslationEntry, TranslationFile};
use crate::translation_lib::error::TranslationError;
use crate::translation_lib::shortcut::{add_shortcut, Shortcuts};

/// Line terminator of written files
pub const LINE_END: &str = "\r\n";

/// Record separator between key and value
pub const SEPARATOR: &str = " = ";

/// Keys containing this keep their leading spaces in the canonical output
const PADDED_KEY_MARKER: &str = "Streckenvorschau";

/// Whether the key names a UI caption, where `&` marks a keyboard shortcut
pub fn is_caption_key(key: &str) -> bool {
    key.contains("Caption") || key.contains("Text")
}

/// Remove every `&` that is neither preceded nor followed by another `&`
pub fn strip_shortcuts(value: &str) -> String {
    static AMPERSANDS: OnceLock<Regex> = OnceLock::new();
    let re = AMPERSANDS.get_or_init(|| Regex::new("&+").unwrap());
    re.replace_all(value, |caps: &regex::Captures<'_>| {
        let run = &caps[0];
        if run.len() == 1 {
            String::new()
        } else {
            run.to_string()
        }
    })
    .into_owned()
}

/// Parse one line into an entry, without context
pub fn parse_line(line: &str, strip: bool) -> Option<TranslationEntry> {
    let line = line.trim_matches(|c| c == '\r' || c == '\n');
    let (key, raw) = line.split_once(SEPARATOR)?;

    let trimmed = raw.trim_start_matches(' ');
    let leftspaces = raw.len() - trimmed.len();
    let value = trimmed.trim_end_matches(' ');
    let rightspaces = trimmed.len() - value.len();

    let leftquote = value.starts_with('\'');
    let rightquote = value.len() > 1 && value.ends_with('\'');
    let mut value = value;
    if leftquote {
        value = &value[1..];
    }
    if rightquote {
        value = &value[..value.len() - 1];
    }

    let value = if strip && is_caption_key(key) {
        strip_shortcuts(value)
    } else {
        value.to_string()
    };

    Some(TranslationEntry {
        key: key.to_string(),
        source_value: value.clone(),
        value,
        context: String::new(),
        leftquote,
        rightquote,
        leftspaces,
        rightspaces,
    })
}

impl TranslationFile {
    /// Append all records of a Zusi file.
    ///
    /// `contexts` maps keys to their disambiguation context. With `strip`,
    /// shortcut markers are removed from caption values.
    pub fn read_from_zusi(
        &mut self,
        content: &str,
        contexts: &HashMap<String, String>,
        strip: bool,
    ) -> &mut Self {
        for line in content.split('\n') {
            if let Some(mut entry) = parse_line(line, strip) {
                if let Some(context) = contexts.get(&entry.key) {
                    entry.context = context.clone();
                }
                self.append(entry);
            }
        }
        self
    }
}

/// Format one entry with its quoting and padding restored
pub fn format_entry(entry: &TranslationEntry) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        entry.key,
        SEPARATOR,
        " ".repeat(entry.leftspaces),
        if entry.leftquote { "'" } else { "" },
        entry.value,
        if entry.rightquote { "'" } else { "" },
        " ".repeat(entry.rightspaces),
    )
}

/// Write entries in file order with their quoting and padding restored
pub fn write_zusi(file: &TranslationFile) -> String {
    let mut out = String::new();
    for entry in file {
        out.push_str(&format_entry(entry));
        out.push_str(LINE_END);
    }
    out
}

/// Format one line of a generated translation file.
///
/// Quotes and trailing spaces are never written. Leading spaces of the
/// master entry survive only for track preview keys.
pub fn format_translated_line(master_entry: &TranslationEntry, value: &str) -> String {
    let mut line = format!("{}{}", master_entry.key, SEPARATOR);
    if master_entry.key.contains(PADDED_KEY_MARKER) {
        line.push_str(&" ".repeat(master_entry.leftspaces));
    }
    line.push_str(value);
    line
}

/// Write the translation of every master entry, in master order.
///
/// Captions listed in `shortcuts` get their marker inserted. Every line must
/// be representable in `codeset`.
pub fn write_translated_zusi(
    master: &TranslationFile,
    translation: &TranslationFile,
    shortcuts: &Shortcuts,
    codeset: Codeset,
) -> Result<String, TranslationError> {
    let mut out = String::new();
    for master_entry in master {
        let translated = translation.get_translated_entry(master_entry)?;
        let value = match shortcuts.get(&master_entry.key) {
            Some(&letter) => add_shortcut(&translated.value, letter).ok_or_else(|| {
                TranslationError::InfeasibleShortcut {
                    key: master_entry.key.clone(),
                    value: translated.value.clone(),
                }
            })?,
            None => translated.value.clone(),
        };
        codeset.check(&master_entry.key, &value)?;
        out.push_str(&format_translated_line(master_entry, &value));
        out.push_str(LINE_END);
    }
    Ok(out)
}
