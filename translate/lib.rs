//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! zusi-translate library
//!
//! Conversion between Zusi translation files and gettext PO files:
//! - zusi2pot/zusi2po: Zusi master (and translation) to .pot/.po
//! - po2zusi: .po back to a Zusi translation, with keyboard shortcuts
//! - checkzusi: duplicate key report for master files

pub mod translation_lib;
