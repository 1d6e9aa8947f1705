//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .po (Portable Object) reader and writer for Zusi translations
//!
//! Only the subset of the format written by this tool is understood:
//! - `#. :src: KEY` - extracted comment naming a Zusi key; a block may carry
//!   several of them when several keys share one source text
//! - `msgctxt "context"` - message context (optional)
//! - `msgid "original"` - source text
//! - `msgstr "translation"` - translation
//! - `"..."` - continuation of the previous string
//! - blank line - end of block
//!
//! The only escape sequence is `\"`. The block with an empty msgid is the
//! header and carries no translation data.

use std::collections::HashMap;

use crate::translation_lib::entry::{TranslationEntry, TranslationFile, EMPTY_ENTRY};
use crate::translation_lib::error::{ExportConflict, TranslationError};
use crate::translation_lib::zusi_file::LINE_END;

/// Comment prefix naming the Zusi key of a block
pub const SOURCE_KEY_PREFIX: &str = "#. :src: ";

/// Metadata line written into the header msgstr
pub const HEADER_CONTENT_TYPE: &str = "Content-Type: text/plain; charset=UTF-8";

/// Escape a string for a PO literal
pub fn escape_po(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Undo [`escape_po`]
pub fn unescape_po(s: &str) -> String {
    s.replace("\\\"", "\"")
}

/// Contents of a quoted literal, quotes removed
fn literal(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    unescape_po(s)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Idle,
    MsgId,
    MsgCtxt,
    MsgStr,
}

/// Block being read
#[derive(Debug)]
struct Block {
    mode: Mode,
    msgid: String,
    msgctxt: String,
    msgstr: String,
    /// Keys from `#. :src:` comments, in order
    keys: Vec<String>,
}

impl Block {
    fn new() -> Self {
        Block {
            mode: Mode::Idle,
            msgid: String::new(),
            msgctxt: String::new(),
            msgstr: String::new(),
            keys: Vec::new(),
        }
    }

    /// Append the block's entries to `file` and reset.
    fn flush(&mut self, file: &mut TranslationFile) {
        for key in self.keys.drain(..) {
            let mut entry = TranslationEntry::new(key);
            // The header block (empty msgid) carries no translation
            if !self.msgid.is_empty() {
                entry.context = self.msgctxt.clone();
                entry.value = self.msgstr.clone();
                entry.source_value = self.msgid.clone();
            }
            file.append(entry);
        }
        *self = Block::new();
    }

    fn current_string(&mut self) -> Option<&mut String> {
        match self.mode {
            Mode::Idle => None,
            Mode::MsgId => Some(&mut self.msgid),
            Mode::MsgCtxt => Some(&mut self.msgctxt),
            Mode::MsgStr => Some(&mut self.msgstr),
        }
    }
}

impl TranslationFile {
    /// Append one entry per `#. :src:` comment of a PO file.
    pub fn read_from_po(&mut self, content: &str) -> &mut Self {
        let mut block = Block::new();

        for line in content.split('\n') {
            let line = line.trim_matches(|c| c == '\r' || c == '\n');

            if line.starts_with('#') {
                if let Some(key) = line.strip_prefix(SOURCE_KEY_PREFIX) {
                    block.keys.push(key.to_string());
                }
            } else if let Some(rest) = line.strip_prefix("msgid") {
                block.msgid = literal(rest);
                block.mode = Mode::MsgId;
            } else if let Some(rest) = line.strip_prefix("msgctxt") {
                block.msgctxt = literal(rest);
                block.mode = Mode::MsgCtxt;
            } else if let Some(rest) = line.strip_prefix("msgstr") {
                block.msgstr = literal(rest);
                block.mode = Mode::MsgStr;
            } else if line.starts_with('"') {
                let value = literal(line);
                if let Some(current) = block.current_string() {
                    current.push_str(&value);
                }
            } else if line.is_empty() {
                block.flush(self);
            }
        }

        // The last block need not end with a blank line
        block.flush(self);
        self
    }
}

/// What a PO export writes into msgstr
#[derive(Debug, Clone, Copy)]
pub enum PoExport<'a> {
    /// Empty translations (.pot)
    Template,
    /// Translations taken from an existing Zusi translation
    Translation(&'a TranslationFile),
}

/// Master entries sharing one source text and context
struct Group<'a> {
    value: &'a str,
    context: &'a str,
    members: Vec<&'a TranslationEntry>,
}

/// Group master entries by (value, context), groups and keys in order of first appearance
fn group_entries(master: &TranslationFile) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    // The header group comes first and collects the entries without text
    groups.push(Group {
        value: "",
        context: "",
        members: Vec::new(),
    });
    index.insert(("", ""), 0);

    for entry in master {
        let key = (entry.value.as_str(), entry.context.as_str());
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                value: key.0,
                context: key.1,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        // A repeated key contributes only its first occurrence
        let members = &mut groups[idx].members;
        if !members.iter().any(|m| m.key == entry.key) {
            members.push(entry);
        }
    }

    groups
}

/// Existing translation shared by all members of a group.
///
/// Members missing from `existing` are skipped; no translated member yields an
/// empty translation. Disagreeing members are recorded in `conflicts`.
fn existing_translation(
    group: &Group<'_>,
    existing: &TranslationFile,
    conflicts: &mut Vec<ExportConflict>,
) -> Result<Option<String>, TranslationError> {
    let mut translations: Vec<(String, Vec<String>)> = Vec::new();

    for member in &group.members {
        let translated = if member.value.is_empty() {
            &EMPTY_ENTRY
        } else if existing.contains_key(member.key.trim()) {
            existing.get_translated_entry(member)?
        } else {
            continue;
        };
        match translations.iter_mut().find(|(v, _)| *v == translated.value) {
            Some((_, keys)) => keys.push(member.key.clone()),
            None => translations.push((translated.value.clone(), vec![member.key.clone()])),
        }
    }

    if translations.len() > 1 {
        conflicts.push(ExportConflict {
            source_text: group.value.to_string(),
            context: group.context.to_string(),
            keys: group.members.iter().map(|m| m.key.clone()).collect(),
            translations,
        });
        return Ok(None);
    }
    Ok(Some(translations.pop().map(|(v, _)| v).unwrap_or_default()))
}

/// Write a PO file from a master file.
///
/// Keys sharing source text and context are merged into one block. The header
/// block comes first. All export conflicts are collected before failing.
pub fn write_po(master: &TranslationFile, export: PoExport<'_>) -> Result<String, TranslationError> {
    let mut out = String::new();
    let mut conflicts = Vec::new();

    for (n, group) in group_entries(master).iter().enumerate() {
        let msgstr = match export {
            PoExport::Template => String::new(),
            PoExport::Translation(existing) => {
                match existing_translation(group, existing, &mut conflicts)? {
                    Some(msgstr) => msgstr,
                    None => continue,
                }
            }
        };

        for member in &group.members {
            out.push_str(&format!("{}{}{}", SOURCE_KEY_PREFIX, member.key, LINE_END));
        }
        if !group.context.is_empty() {
            out.push_str(&format!("msgctxt \"{}\"{}", escape_po(group.context), LINE_END));
        }
        out.push_str(&format!("msgid \"{}\"{}", escape_po(group.value), LINE_END));
        out.push_str(&format!("msgstr \"{}\"{}", escape_po(&msgstr), LINE_END));
        if n == 0 {
            out.push_str(&format!("\"{}\\n\"{}", HEADER_CONTENT_TYPE, LINE_END));
        }
        out.push_str(LINE_END);
    }

    if conflicts.is_empty() {
        Ok(out)
    } else {
        Err(TranslationError::ExportAmbiguity(conflicts))
    }
}
