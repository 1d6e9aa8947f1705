//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use pretty_assertions::assert_eq;

use crate::common::{args, run_test, run_usage_error, TestPlan, Workspace};

const MASTER: &str = "OpenCaption = &Open\r\nSaveCaption = &Save\r\nTitle = Editor\r\n";

const PO: &str = "msgid \"\"\r\n\
                  msgstr \"\"\r\n\
                  \"Content-Type: text/plain; charset=UTF-8\\n\"\r\n\
                  \r\n\
                  #. :src: OpenCaption\r\n\
                  msgid \"Open\"\r\n\
                  msgstr \"Laden\"\r\n\
                  \r\n\
                  #. :src: SaveCaption\r\n\
                  msgid \"Save\"\r\n\
                  msgstr \"Speichern\"\r\n\
                  \r\n\
                  #. :src: Title\r\n\
                  msgid \"Editor\"\r\n\
                  msgstr \"Bearbeiter\"\r\n";

fn po2zusi(ws: &Workspace, out: &str, extra: &[&str], expected_err: &str, code: i32) {
    let mut argv = args(&[
        "po2zusi",
        "-m",
        ws.path("master.txt").to_str().unwrap(),
        "-p",
        ws.path("de.po").to_str().unwrap(),
        "-o",
        out,
    ]);
    argv.extend(args(extra));
    run_test(TestPlan {
        args: argv,
        expected_out: String::new(),
        expected_err: expected_err.to_string(),
        expected_exit_code: code,
    });
}

#[test]
fn test_po2zusi_without_groups() {
    let ws = Workspace::new();
    ws.file("master.txt", MASTER);
    ws.file("de.po", PO);
    let out = ws.path("out.txt");
    po2zusi(&ws, out.to_str().unwrap(), &[], "", 0);

    assert_eq!(
        ws.read("out.txt"),
        "OpenCaption = Laden\r\nSaveCaption = Speichern\r\nTitle = Bearbeiter\r\n"
    );
}

#[test]
fn test_po2zusi_assigns_shortcuts() {
    let ws = Workspace::new();
    ws.file("master.txt", MASTER);
    ws.file("de.po", PO);
    let groups = ws.file("groups.txt", "OpenCaption\r\nSaveCaption\r\nTitle\r\n\r\n");
    let out = ws.path("out.txt");
    po2zusi(&ws, out.to_str().unwrap(), &["-s", &groups], "", 0);

    assert_eq!(
        ws.read("out.txt"),
        "OpenCaption = &Laden\r\nSaveCaption = &Speichern\r\nTitle = Bearbeiter\r\n"
    );
}

#[test]
fn test_po2zusi_reuses_existing_shortcuts() {
    let ws = Workspace::new();
    ws.file("master.txt", MASTER);
    ws.file("de.po", PO);
    let groups = ws.file("groups.txt", "OpenCaption\r\nSaveCaption\r\n");
    let existing = ws.file("old.txt", "OpenCaption = La&den\r\n");
    let out = ws.path("out.txt");
    po2zusi(&ws, out.to_str().unwrap(), &["-s", &groups, "-t", &existing], "", 0);

    assert_eq!(
        ws.read("out.txt"),
        "OpenCaption = La&den\r\nSaveCaption = &Speichern\r\nTitle = Bearbeiter\r\n"
    );
}

#[test]
fn test_po2zusi_infeasible_shortcut() {
    let ws = Workspace::new();
    ws.file("master.txt", "ACaption = &Yes\r\nBCaption = &No\r\n");
    ws.file(
        "de.po",
        "#. :src: ACaption\r\nmsgid \"Yes\"\r\nmsgstr \"J\"\r\n\r\n\
         #. :src: BCaption\r\nmsgid \"No\"\r\nmsgstr \"J\"\r\n",
    );
    let groups = ws.file("groups.txt", "ACaption\r\nBCaption\r\n");
    let out = ws.path("out.txt");
    let mut argv = args(&[
        "po2zusi",
        "-m",
        ws.path("master.txt").to_str().unwrap(),
        "-p",
        ws.path("de.po").to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    argv.extend(args(&["-s", &groups]));
    crate::common::run_test_with_checker(&argv, |output| {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("zusi-trans: No conflict-free shortcut could be found for J"));
        assert_eq!(output.status.code(), Some(1));
    });
    assert!(!ws.exists("out.txt"));
}

#[test]
fn test_po2zusi_track_preview_padding() {
    let ws = Workspace::new();
    ws.file("master.txt", "StreckenvorschauInfo =   'Line'  \r\nOther =   'Text'\r\n");
    ws.file(
        "de.po",
        "#. :src: StreckenvorschauInfo\r\nmsgid \"Line\"\r\nmsgstr \"Strecke\"\r\n\r\n\
         #. :src: Other\r\nmsgid \"Text\"\r\nmsgstr \"Inhalt\"\r\n",
    );
    let out = ws.path("out.txt");
    po2zusi(&ws, out.to_str().unwrap(), &[], "", 0);

    assert_eq!(
        ws.read("out.txt"),
        "StreckenvorschauInfo =   Strecke\r\nOther = Inhalt\r\n"
    );
}

#[test]
fn test_po2zusi_latin1_output() {
    let ws = Workspace::new();
    ws.file("master.txt", "Title = Size\r\n");
    ws.file("de.po", "#. :src: Title\r\nmsgid \"Size\"\r\nmsgstr \"Größe\"\r\n");
    let out = format!("{}@ISO-8859-1", ws.path("out.txt").display());
    po2zusi(&ws, &out, &[], "", 0);

    assert_eq!(ws.read_bytes("out.txt"), b"Title = Gr\xf6\xdfe\r\n");
}

#[test]
fn test_po2zusi_unencodable_output() {
    let ws = Workspace::new();
    ws.file("master.txt", "Title = Open\r\n");
    ws.file("de.po", "#. :src: Title\r\nmsgid \"Open\"\r\nmsgstr \"Öffnen\"\r\n");
    let out = format!("{}@ASCII", ws.path("out.txt").display());
    po2zusi(
        &ws,
        &out,
        &[],
        "zusi-trans: Title = 'Öffnen' cannot be written in the specified output encoding ASCII\n",
        1,
    );
    assert!(!ws.exists("out.txt"));
}

#[test]
fn test_po2zusi_missing_key() {
    let ws = Workspace::new();
    ws.file("master.txt", "Title = Editor\r\nHint = Help\r\n");
    ws.file("de.po", "#. :src: Title\r\nmsgid \"Editor\"\r\nmsgstr \"Bearbeiter\"\r\n");
    let out = ws.path("out.txt");
    po2zusi(
        &ws,
        out.to_str().unwrap(),
        &[],
        "zusi-trans: Key 'Hint' not found in PO file (original text: 'Help')\n",
        1,
    );
    assert!(!ws.exists("out.txt"));
}

#[test]
fn test_po2zusi_ambiguous_key() {
    let ws = Workspace::new();
    ws.file("master.txt", "Title = Editor\r\n");
    ws.file(
        "de.po",
        "#. :src: Title\r\nmsgid \"Edit\"\r\nmsgstr \"Bearbeiten\"\r\n\r\n\
         #. :src: Title\r\nmsgid \"Editing\"\r\nmsgstr \"Bearbeitung\"\r\n",
    );
    let out = ws.path("out.txt");
    po2zusi(
        &ws,
        out.to_str().unwrap(),
        &[],
        "zusi-trans: Ambiguous translation for key 'Title', original text 'Editor': \
         translation 'Bearbeiten', original text 'Edit', \
         translation 'Bearbeitung', original text 'Editing'\n",
        1,
    );
}

#[test]
fn test_po2zusi_single_master_only() {
    let ws = Workspace::new();
    let a = ws.file("a.txt", "A = B\r\n");
    let b = ws.file("b.txt", "C = D\r\n");
    let po = ws.file("de.po", "");
    let out = ws.path("out.txt");
    run_usage_error(
        &args(&["po2zusi", "-m", &a, &b, "-p", &po, "-o", out.to_str().unwrap()]),
        "po2zusi accepts exactly one master file",
    );
}

#[test]
fn test_po2zusi_rejects_strip_shortcuts() {
    let ws = Workspace::new();
    let master = ws.file("master.txt", "A = B\r\n");
    let po = ws.file("de.po", "");
    let out = ws.path("out.txt");
    run_usage_error(
        &args(&["po2zusi", "-m", &master, "-p", &po, "-o", out.to_str().unwrap(), "--strip-shortcuts"]),
        "--strip-shortcuts is only valid for zusi2pot and zusi2po",
    );
}

#[test]
fn test_po2zusi_requires_po_file() {
    let ws = Workspace::new();
    let master = ws.file("master.txt", "A = B\r\n");
    let out = ws.path("out.txt");
    run_usage_error(
        &args(&["po2zusi", "-m", &master, "-o", out.to_str().unwrap()]),
        "po2zusi requires a PO file (--po-file)",
    );
}
