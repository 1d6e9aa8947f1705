//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! zusi-trans - convert Zusi translation files to and from PO files
//!
//! Modes:
//! - zusi2pot: master file to PO template
//! - zusi2po: master file and existing translation to PO file
//! - po2zusi: master file and PO file to Zusi translation
//! - checkzusi: report keys occurring more than once in the master files

use std::collections::HashMap;
use std::process::exit;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zusi_translate::translation_lib::{
    check::DuplicateReport,
    codeset::FileSpec,
    context::read_context_file,
    entry::TranslationFile,
    error::TranslationError,
    groups::{read_shortcut_groups, ShortcutGroup},
    po_file::{write_po, PoExport},
    shortcut::generate_shortcuts,
    zusi_file::write_translated_zusi,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Create a PO template from the master file
    #[value(name = "zusi2pot")]
    Zusi2Pot,
    /// Create a PO file from the master file and an existing translation
    #[value(name = "zusi2po")]
    Zusi2Po,
    /// Create a Zusi translation from the master file and a PO file
    #[value(name = "po2zusi")]
    Po2Zusi,
    /// Report duplicate keys in the master files
    #[value(name = "checkzusi")]
    CheckZusi,
}

#[derive(Parser)]
#[command(version, about = "zusi-trans - convert Zusi translation files to and from PO")]
struct Args {
    #[arg(value_enum, help = "Conversion to perform")]
    mode: Mode,

    #[arg(short, long, required = true, num_args = 1.., action = ArgAction::Append,
          help = "Master Zusi file(s), optionally suffixed with @ENCODING")]
    master: Vec<FileSpec>,

    #[arg(short, long, help = "Existing Zusi translation file")]
    translation: Option<FileSpec>,

    #[arg(short, long, help = "PO file containing the translation")]
    po_file: Option<FileSpec>,

    #[arg(short, long, num_args = 1.., action = ArgAction::Append,
          help = "Context file(s) mapping keys to a disambiguation context")]
    context: Vec<FileSpec>,

    #[arg(short, long, help = "Shortcut group file")]
    shortcut_groups: Option<FileSpec>,

    #[arg(short, long, help = "Output file")]
    out: Option<FileSpec>,

    #[arg(long, help = "Remove shortcut markers from captions of the master file")]
    strip_shortcuts: bool,
}

impl Args {
    /// Combinations clap cannot express by itself
    fn validate(&self) {
        fn fail(kind: ErrorKind, msg: &str) -> ! {
            Args::command().error(kind, msg).exit()
        }

        match self.mode {
            Mode::Zusi2Po if self.translation.is_none() => fail(
                ErrorKind::MissingRequiredArgument,
                "zusi2po requires an existing translation (--translation)",
            ),
            Mode::Po2Zusi if self.po_file.is_none() => fail(
                ErrorKind::MissingRequiredArgument,
                "po2zusi requires a PO file (--po-file)",
            ),
            Mode::Po2Zusi if self.master.len() > 1 => fail(
                ErrorKind::TooManyValues,
                "po2zusi accepts exactly one master file",
            ),
            _ => {}
        }

        if self.mode != Mode::CheckZusi && self.out.is_none() {
            fail(
                ErrorKind::MissingRequiredArgument,
                "an output file (--out) is required",
            );
        }

        if self.strip_shortcuts && !matches!(self.mode, Mode::Zusi2Pot | Mode::Zusi2Po) {
            fail(
                ErrorKind::ArgumentConflict,
                "--strip-shortcuts is only valid for zusi2pot and zusi2po",
            );
        }
    }
}

fn read_zusi(
    spec: &FileSpec,
    contexts: &HashMap<String, String>,
    strip: bool,
    file: &mut TranslationFile,
) -> Result<(), TranslationError> {
    let content = spec.read_to_string()?;
    file.read_from_zusi(&content, contexts, strip);
    Ok(())
}

fn run(args: &Args) -> Result<(), TranslationError> {
    let mut contexts = HashMap::new();
    for spec in &args.context {
        info!("Reading context file {}", spec);
        read_context_file(&spec.read_to_string()?, spec.path(), &mut contexts)?;
    }

    let mut master = TranslationFile::new();
    for spec in &args.master {
        info!("Reading master translation file {}", spec);
        read_zusi(spec, &contexts, args.strip_shortcuts, &mut master)?;
    }

    if args.mode == Mode::CheckZusi {
        print!("{}", DuplicateReport::new(&master));
        return Ok(());
    }

    let groups: Vec<ShortcutGroup> = match &args.shortcut_groups {
        Some(spec) => {
            info!("Reading shortcut group file {}", spec);
            read_shortcut_groups(&spec.read_to_string()?)
        }
        None => Vec::new(),
    };

    let mut existing = TranslationFile::new();
    if let Some(spec) = &args.translation {
        info!("Reading existing translation file {}", spec);
        read_zusi(spec, &HashMap::new(), false, &mut existing)?;
    }

    let Some(out) = &args.out else {
        return Ok(());
    };

    let text = match args.mode {
        Mode::Zusi2Pot => write_po(&master, PoExport::Template)?,
        Mode::Zusi2Po => write_po(&master, PoExport::Translation(&existing))?,
        Mode::Po2Zusi => {
            let mut po = TranslationFile::new();
            if let Some(spec) = &args.po_file {
                info!("Reading PO file {}", spec);
                po.read_from_po(&spec.read_to_string()?);
            }
            let shortcuts = generate_shortcuts(&groups, &master, &po, &existing)?;
            write_translated_zusi(&master, &po, &shortcuts, out.codeset)?
        }
        Mode::CheckZusi => return Ok(()),
    };

    info!("Writing {}", out);
    out.write_str(&text)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.validate();

    if let Err(e) = run(&args) {
        eprintln!("zusi-trans: {}", e);
        exit(e.exit_code());
    }
}
