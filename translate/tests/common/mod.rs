//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

pub struct TestPlan {
    pub args: Vec<String>,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Run zusi-trans with logging disabled, so stderr only carries errors
pub fn run_test_base(args: &[String]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zusi-trans"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run zusi-trans")
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.args);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

pub fn run_test_with_checker<F: FnMut(&Output)>(args: &[String], mut checker: F) {
    let output = run_test_base(args);
    checker(&output);
}

/// Expect a usage error from argument validation
pub fn run_usage_error(args: &[String], message: &str) {
    run_test_with_checker(args, |output| {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(message), "unexpected stderr: {}", stderr);
        assert_eq!(output.status.code(), Some(2));
    });
}

/// Input and output files of one test run
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().expect("Unable to create temporary directory"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name`, returning its path as argument string
    pub fn file(&self, name: &str, content: impl AsRef<[u8]>) -> String {
        let path = self.path(name);
        fs::write(&path, content).expect("Unable to write test input");
        path_arg(&path)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Unable to read output")
    }

    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).expect("Unable to read output")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}

pub fn path_arg(path: &Path) -> String {
    path.to_str().expect("temporary path is UTF-8").to_string()
}

pub fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
