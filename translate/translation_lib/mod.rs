//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Zusi translation library
//!
//! This module provides the Zusi and PO file codecs, the lookup of
//! translations by key and source text, and the assignment of keyboard
//! shortcuts to translated captions.

pub mod assignment;
pub mod check;
pub mod codeset;
pub mod context;
pub mod entry;
pub mod error;
pub mod groups;
pub mod po_file;
pub mod resolve;
pub mod shortcut;
pub mod zusi_file;
