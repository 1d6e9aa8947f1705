//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Shortcut group file
//!
//! One key per line; a blank line ends a group. Keys of one group are
//! shown together and must get distinct shortcuts.

/// Keys sharing one shortcut namespace, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutGroup {
    keys: Vec<String>,
}

impl ShortcutGroup {
    pub fn new() -> Self {
        ShortcutGroup::default()
    }

    /// Add a key; a key already in the group is ignored
    pub fn insert(&mut self, key: &str) {
        if !self.contains(key) {
            self.keys.push(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Parse a shortcut group file
pub fn read_shortcut_groups(content: &str) -> Vec<ShortcutGroup> {
    let mut groups = Vec::new();
    let mut current = ShortcutGroup::new();

    for line in content.lines() {
        let line = line.trim_matches(|c| c == ' ' || c == '\r' || c == '\n');
        if !line.is_empty() {
            current.insert(line);
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
