//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Codeset handling for input and output files
//!
//! Zusi translation files are traditionally stored in a Windows single-byte
//! codeset, PO files in UTF-8. A file argument may carry its codeset as a
//! suffix: `deutsch.txt@ISO-8859-1`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::translation_lib::error::TranslationError;

/// Windows-1252 code points for the bytes 0x80..=0x9F (None: undefined)
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Supported file codesets
#[derive(EnumString, EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(ascii_case_insensitive)]
pub enum Codeset {
    #[default]
    #[strum(to_string = "UTF-8", serialize = "UTF8")]
    Utf8,
    #[strum(
        to_string = "ISO-8859-1",
        serialize = "ISO8859-1",
        serialize = "LATIN1",
        serialize = "LATIN-1"
    )]
    Latin1,
    #[strum(to_string = "WINDOWS-1252", serialize = "CP1252")]
    Windows1252,
    #[strum(to_string = "ASCII", serialize = "US-ASCII")]
    Ascii,
}

impl Codeset {
    /// Decode file contents. On failure, returns the offending byte offset.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, usize> {
        match self {
            Codeset::Utf8 => {
                let (skipped, bytes) = match bytes.strip_prefix(b"\xEF\xBB\xBF") {
                    Some(rest) => (3, rest),
                    None => (0, bytes),
                };
                match std::str::from_utf8(bytes) {
                    Ok(s) => Ok(s.to_string()),
                    Err(e) => Err(skipped + e.valid_up_to()),
                }
            }
            Codeset::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Codeset::Windows1252 => bytes
                .iter()
                .enumerate()
                .map(|(pos, &b)| match b {
                    0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize].ok_or(pos),
                    _ => Ok(b as char),
                })
                .collect(),
            Codeset::Ascii => bytes
                .iter()
                .enumerate()
                .map(|(pos, &b)| if b.is_ascii() { Ok(b as char) } else { Err(pos) })
                .collect(),
        }
    }

    /// Encode a single character, if representable
    fn encode_char(&self, c: char, out: &mut Vec<u8>) -> bool {
        match self {
            Codeset::Utf8 => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                true
            }
            Codeset::Latin1 => match u8::try_from(u32::from(c)) {
                Ok(b) => {
                    out.push(b);
                    true
                }
                Err(_) => false,
            },
            Codeset::Windows1252 => {
                let code = u32::from(c);
                if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                    out.push(code as u8);
                    return true;
                }
                match CP1252_HIGH.iter().position(|&m| m == Some(c)) {
                    Some(idx) => {
                        out.push(0x80 + idx as u8);
                        true
                    }
                    None => false,
                }
            }
            Codeset::Ascii => {
                if c.is_ascii() {
                    out.push(c as u8);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Encode text. On failure, returns the first character that cannot be represented.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, char> {
        let mut out = Vec::with_capacity(text.len());
        for c in text.chars() {
            if !self.encode_char(c, &mut out) {
                return Err(c);
            }
        }
        Ok(out)
    }

    /// Whether every character of `text` is representable
    pub fn can_encode(&self, text: &str) -> bool {
        let mut scratch = Vec::with_capacity(4);
        text.chars().all(|c| {
            scratch.clear();
            self.encode_char(c, &mut scratch)
        })
    }

    /// Check that a `key = value` pair can be written, naming it otherwise
    pub fn check(&self, key: &str, value: &str) -> Result<(), TranslationError> {
        if self.can_encode(key) && self.can_encode(value) {
            Ok(())
        } else {
            Err(TranslationError::Encoding {
                key: key.to_string(),
                value: value.to_string(),
                codeset: *self,
            })
        }
    }
}

/// A file argument with its codeset, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub codeset: Codeset,
}

impl FileSpec {
    pub fn new<P: Into<PathBuf>>(path: P, codeset: Codeset) -> Self {
        FileSpec {
            path: path.into(),
            codeset,
        }
    }

    /// Read and decode the whole file
    pub fn read_to_string(&self) -> Result<String, TranslationError> {
        let bytes = fs::read(&self.path).map_err(|source| TranslationError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.codeset
            .decode(&bytes)
            .map_err(|offset| TranslationError::Decode {
                path: self.path.clone(),
                codeset: self.codeset,
                offset,
            })
    }

    /// Encode and write the whole file
    pub fn write_str(&self, text: &str) -> Result<(), TranslationError> {
        let bytes = self.codeset.encode(text).map_err(|c| {
            let (index, line) = text
                .lines()
                .enumerate()
                .find(|(_, l)| l.contains(c))
                .unwrap_or_default();
            TranslationError::UnencodableLine {
                path: self.path.clone(),
                line: index + 1,
                text: line.to_string(),
                codeset: self.codeset,
            }
        })?;
        fs::write(&self.path, bytes).map_err(|source| TranslationError::Io {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FromStr for FileSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('@') {
            // '@' inside a directory name is part of the path
            Some((_, name)) if name.contains(std::path::is_separator) => {
                Ok(FileSpec::new(s, Codeset::default()))
            }
            Some((path, name)) => {
                let codeset = Codeset::from_str(name.trim_matches('"'))
                    .map_err(|_| format!("unknown encoding: {}", name))?;
                Ok(FileSpec::new(path, codeset))
            }
            None => Ok(FileSpec::new(s, Codeset::default())),
        }
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
