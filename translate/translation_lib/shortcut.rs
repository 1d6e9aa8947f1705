//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Keyboard shortcut assignment for translated captions
//!
//! In a caption, `&` marks the following character as keyboard shortcut and
//! `&&` stands for a literal ampersand. Captions on the same dialog form a
//! shortcut group and must all get different letters.
//!
//! Finding the letters is an instance of the assignment problem: the
//! translated texts of a group are matched to the letters occurring in them
//! so that the total cost is minimal. A letter costs [`INFEASIBLE`] when it
//! does not occur in the text; otherwise the cost reflects how good the
//! position is (start of a word, upper case, reuse of a previous shortcut).

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::translation_lib::assignment::{self, Cost};
use crate::translation_lib::entry::{TranslationEntry, TranslationFile};
use crate::translation_lib::error::TranslationError;
use crate::translation_lib::groups::ShortcutGroup;
use crate::translation_lib::zusi_file::is_caption_key;

/// Cost of a letter that does not occur in the text
pub const INFEASIBLE: Cost = 9999;

/// Characters after which a new word starts
const WORD_SEPARATORS: &[char] = &[' ', '-', '_', '+'];

/// Lowercased character following the first shortcut marker, if any
pub fn get_shortcut(s: &str) -> Option<char> {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.next() {
            Some('&') => continue,
            Some(next) => return Some(next.to_ascii_lowercase()),
            None => return None,
        }
    }
    None
}

/// Cost of using the character at `pos` as shortcut
fn shortcut_weight(
    chars: &[char],
    pos: usize,
    source_shortcut: Option<char>,
    existing_shortcut: Option<char>,
) -> Cost {
    let c = chars[pos];
    let lower = c.to_ascii_lowercase();
    let word_start = pos == 0 || WORD_SEPARATORS.contains(&chars[pos - 1]);

    let mut weight = match (word_start, c.is_lowercase()) {
        (true, false) => 500,
        (true, true) => 600,
        (false, false) => 700,
        (false, true) => 800,
    };
    // Prefer digits and symbols the source text also uses as shortcut
    if let Some(source) = source_shortcut {
        if !source.is_ascii_lowercase() && lower == source {
            weight -= 500;
        }
    }
    // Avoid punctuation unless nothing else is left
    if !lower.is_ascii_lowercase() && Some(lower) != source_shortcut {
        weight += 500;
    }
    if Some(lower) == existing_shortcut {
        weight = 0;
    }
    weight + (pos / 10) as Cost
}

/// Lowest cost of `letter` over all of its positions in `chars`
fn min_shortcut_weight(
    chars: &[char],
    letter: char,
    source_shortcut: Option<char>,
    existing_shortcut: Option<char>,
) -> Cost {
    (0..chars.len())
        .filter(|&pos| chars[pos].to_ascii_lowercase() == letter)
        .map(|pos| shortcut_weight(chars, pos, source_shortcut, existing_shortcut))
        .min()
        .unwrap_or(INFEASIBLE)
}

/// Insert `&` before the best occurrence of `shortcut` in `s`
pub fn add_shortcut(s: &str, shortcut: char) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut best: Option<(usize, Cost)> = None;
    for pos in (0..chars.len()).filter(|&pos| chars[pos].to_ascii_lowercase() == shortcut) {
        let weight = shortcut_weight(&chars, pos, None, None);
        // On equal weight the earlier position wins
        if best.map_or(true, |(_, min)| weight < min) {
            best = Some((pos, weight));
        }
    }

    let (pos, _) = best?;
    let mut result: String = chars[..pos].iter().collect();
    result.push('&');
    result.extend(&chars[pos..]);
    Some(result)
}

/// A caption of a group that needs a shortcut
#[derive(Debug)]
struct Candidate<'a> {
    key: &'a str,
    translated: &'a TranslationEntry,
    source_shortcut: char,
    existing_shortcut: Option<char>,
}

/// Assigned shortcut letters by key
pub type Shortcuts = HashMap<String, char>;

/// Assign shortcut letters to the captions of all groups.
///
/// Captions are master entries of a group whose key names a caption and
/// whose source text carries a shortcut. `existing` is a previous translation;
/// its shortcuts are kept where possible.
pub fn generate_shortcuts(
    groups: &[ShortcutGroup],
    master: &TranslationFile,
    translation: &TranslationFile,
    existing: &TranslationFile,
) -> Result<Shortcuts, TranslationError> {
    let mut result = Shortcuts::new();

    if !existing.is_empty() {
        info!("Reusing shortcuts from existing translation as much as possible");
    }

    for group in groups {
        let candidates = collect_candidates(group, master, translation, existing)?;
        if candidates.is_empty() {
            continue;
        }

        let letters: Vec<char> = candidates
            .iter()
            .flat_map(|c| c.translated.value.chars())
            .map(|c| c.to_ascii_lowercase())
            .filter(|&c| c != ' ')
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();

        let matrix: Vec<Vec<Cost>> = candidates
            .iter()
            .map(|candidate| {
                let chars: Vec<char> = candidate.translated.value.chars().collect();
                letters
                    .iter()
                    .map(|&letter| {
                        min_shortcut_weight(
                            &chars,
                            letter,
                            Some(candidate.source_shortcut),
                            candidate.existing_shortcut,
                        )
                    })
                    .collect()
            })
            .collect();

        let pairs = assignment::compute(&matrix);
        let mut assigned = vec![false; candidates.len()];
        for &(row, col) in &pairs {
            if matrix[row][col] < INFEASIBLE {
                assigned[row] = true;
                result.insert(candidates[row].key.to_string(), letters[col]);
            }
        }

        if let Some(row) = assigned.iter().position(|&done| !done) {
            let candidate = &candidates[row];
            return Err(TranslationError::InfeasibleShortcut {
                key: candidate.key.to_string(),
                value: candidate.translated.value.clone(),
            });
        }

        debug!(
            "assigned shortcuts {}",
            candidates
                .iter()
                .map(|c| format!("{}={}", c.key, result[c.key]))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(result)
}

fn collect_candidates<'a>(
    group: &'a ShortcutGroup,
    master: &'a TranslationFile,
    translation: &'a TranslationFile,
    existing: &'a TranslationFile,
) -> Result<Vec<Candidate<'a>>, TranslationError> {
    let mut candidates = Vec::new();

    for key in group.keys() {
        // '&' is only a shortcut marker in UI captions
        if !is_caption_key(key) {
            continue;
        }
        let Some(master_entries) = master.get(key) else {
            continue;
        };
        for master_entry in master_entries {
            let Some(source_shortcut) = get_shortcut(&master_entry.value) else {
                continue;
            };
            let translated = translation.get_translated_entry(master_entry)?;
            let existing_shortcut = existing
                .get_translated_entry(master_entry)
                .ok()
                .and_then(|e| get_shortcut(&e.value));
            candidates.push(Candidate {
                key: &master_entry.key,
                translated,
                source_shortcut,
                existing_shortcut,
            });
        }
    }

    Ok(candidates)
}
