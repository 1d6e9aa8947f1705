//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Error type shared by all translation operations
//!
//! Every fatal condition of a conversion run is a variant of
//! [`TranslationError`]. Variants carry the structured details (keys, values,
//! candidates) and leave formatting and exit status mapping to the caller.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::translation_lib::codeset::Codeset;

/// Exit status for an unresolvable PO export ambiguity
pub const EXIT_EXPORT_AMBIGUITY: i32 = 3;

/// Exit status for every other fatal error
pub const EXIT_FAILURE: i32 = 1;

/// One possible translation of an ambiguous key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Translated text
    pub value: String,
    /// Source text the translation was made from
    pub source_text: String,
}

/// A merged PO export group whose member keys disagree on the existing translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConflict {
    /// Source text shared by all member keys
    pub source_text: String,
    /// Context shared by all member keys
    pub context: String,
    /// Member keys in master file order
    pub keys: Vec<String>,
    /// Distinct existing translations, each with the keys carrying it
    pub translations: Vec<(String, Vec<String>)>,
}

impl fmt::Display for ExportConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Error: {} translations found for text '{}', context '{}', with the following set of keys:",
            self.translations.len(),
            self.source_text,
            self.context
        )?;
        for key in &self.keys {
            writeln!(f, "  {}", key)?;
        }
        if !self.translations.is_empty() {
            writeln!(f, "Possible translations:")?;
            for (translation, keys) in &self.translations {
                writeln!(f, "  '{}'", translation)?;
                for key in keys {
                    writeln!(f, "    {}", key)?;
                }
            }
        }
        Ok(())
    }
}

/// Errors that abort a conversion run
#[derive(thiserror::Error, Debug)]
pub enum TranslationError {
    /// A key required by the master file has no translation
    #[error("Key '{key}' not found in PO file (original text: '{source_text}')")]
    MissingTranslation { key: String, source_text: String },

    /// A key has several translations and the source text does not pick one
    #[error(
        "Ambiguous translation for key '{key}', original text '{source_text}': {}",
        format_candidates(.candidates)
    )]
    AmbiguousTranslation {
        key: String,
        source_text: String,
        candidates: Vec<Candidate>,
    },

    /// Merged PO groups with more than one distinct existing translation
    #[error("{}", format_conflicts(.0))]
    ExportAmbiguity(Vec<ExportConflict>),

    /// No letter of the translated text is free within its shortcut group
    #[error("No conflict-free shortcut could be found for {value} (translation of key {key})")]
    InfeasibleShortcut { key: String, value: String },

    /// Output text not representable in the output codeset
    #[error("{key} = '{value}' cannot be written in the specified output encoding {codeset}")]
    Encoding {
        key: String,
        value: String,
        codeset: Codeset,
    },

    /// Output line not representable in the output file's codeset
    #[error("{}:{line}: '{text}' cannot be written in the specified output encoding {codeset}", .path.display())]
    UnencodableLine {
        path: PathBuf,
        line: usize,
        text: String,
        codeset: Codeset,
    },

    /// Input bytes not valid in the input codeset
    #[error("{}: invalid {codeset} input at byte offset {offset}", .path.display())]
    Decode {
        path: PathBuf,
        codeset: Codeset,
        offset: usize,
    },

    /// Malformed line in an auxiliary input file
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Files, read/write errors
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TranslationError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TranslationError::ExportAmbiguity(_) => EXIT_EXPORT_AMBIGUITY,
            _ => EXIT_FAILURE,
        }
    }
}

fn format_candidates(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("translation '{}', original text '{}'", c.value, c.source_text))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_conflicts(conflicts: &[ExportConflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("")
        .trim_end()
        .to_string()
}
