//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Context file: `KEY CONTEXT` per line
//!
//! Blank lines and lines starting with `#` are skipped. The context is the
//! rest of the line after the first space and may itself contain spaces.

use std::collections::HashMap;
use std::path::Path;

use crate::translation_lib::error::TranslationError;

/// Add the key to context mappings of `content` to `contexts`.
///
/// Later files override earlier ones for the same key.
pub fn read_context_file(
    content: &str,
    path: &Path,
    contexts: &mut HashMap<String, String>,
) -> Result<(), TranslationError> {
    for (lineno, line) in content.split('\n').enumerate() {
        if line.trim_matches(|c| c == ' ' || c == '\r' || c == '\n').is_empty()
            || line.starts_with('#')
        {
            continue;
        }
        let line = line.trim_matches(|c| c == '\r' || c == '\n');
        let Some((key, context)) = line.split_once(' ') else {
            return Err(TranslationError::Parse {
                path: path.to_path_buf(),
                line: lineno + 1,
                message: format!("expected KEY CONTEXT, found '{}'", line),
            });
        };
        contexts.insert(key.to_string(), context.to_string());
    }
    Ok(())
}
