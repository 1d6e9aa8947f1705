//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::common::{args, run_test, TestPlan, Workspace};

#[test]
fn test_checkzusi_ok() {
    let ws = Workspace::new();
    let master = ws.file("master.txt", "A = Open\r\nB = Open\r\n");
    run_test(TestPlan {
        args: args(&["checkzusi", "-m", &master]),
        expected_out: "File is OK.\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_checkzusi_duplicates_across_files() {
    let ws = Workspace::new();
    let a = ws.file("a.txt", "A = Open\r\nB = Save\r\nC = Close\r\n");
    let b = ws.file("b.txt", "B = Store\r\nA = Open\r\n");
    run_test(TestPlan {
        args: args(&["checkzusi", "-m", &a, &b]),
        expected_out: "The following keys occur multiple times in the file, but with the same source text:\n\
                       \x20 A: 'Open'\n\
                       The following keys occur multiple times in the file with different source text:\n\
                       \x20 B: 'Save', 'Store'\n"
            .to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_checkzusi_repeated_master_option() {
    let ws = Workspace::new();
    let a = ws.file("a.txt", "A = Open\r\n");
    let b = ws.file("b.txt", "A = Open\r\n");
    run_test(TestPlan {
        args: args(&["checkzusi", "-m", &a, "-m", &b]),
        expected_out: "The following keys occur multiple times in the file, but with the same source text:\n\
                       \x20 A: 'Open'\n\
                       The following keys occur multiple times in the file with different source text:\n"
            .to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}
