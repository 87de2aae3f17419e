//! Test support utilities for sealconf integration tests.
//!
//! Provides a scratch directory for config files and helper commands for the
//! `sealconf` binary.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use sealconf::{KeyResolver, MockEnv, Resolver};
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated: child processes get their key through
/// `.env()` and the library gets it through a [`MockEnv`], so tests can run in
/// parallel.
pub struct Test {
    /// Temporary directory for config files
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a config file into the temp directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write config file");
        path
    }

    /// Path inside the temp directory, whether or not the file exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Resolver for the test program with the given variables and no fallback key.
pub fn resolver(vars: &[(&str, &str)]) -> Resolver<MockEnv, KeyResolver> {
    Resolver::new()
        .with_env(MockEnv::from_pairs(vars.iter().copied()))
        .with_keys(KeyResolver::for_program(PROGRAM).without_fallback())
}

/// Resolver for the test program keyed with [`GOOD_KEY`].
pub fn keyed(vars: &[(&str, &str)]) -> Resolver<MockEnv, KeyResolver> {
    let mut all = vec![(KEY_VAR, GOOD_KEY)];
    all.extend_from_slice(vars);
    resolver(&all)
}
