//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sealconf command isolated from the caller's environment.
    ///
    /// Returns a Command with:
    /// - `SEALCONF_KEY` and `SEALCONF_LOG` removed
    /// - `NO_COLOR` set so stderr is plain text
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sealconf").expect("failed to find sealconf binary");
        cmd.env_remove("SEALCONF_KEY");
        cmd.env_remove("SEALCONF_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `sealconf encrypt --key <key> -- <plaintext>`.
    pub fn encrypt(&self, plaintext: &str, key: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--key", key, "--", plaintext])
            .output()
            .expect("failed to run sealconf encrypt")
    }

    /// Shortcut for `sealconf decrypt --key <key> -- <token>`.
    ///
    /// Tokens may start with `-`, hence the separator.
    pub fn decrypt(&self, token: &str, key: &str) -> Output {
        self.cmd()
            .args(["decrypt", "--key", key, "--", token])
            .output()
            .expect("failed to run sealconf decrypt")
    }

    /// Shortcut for `sealconf decrypt` with no key argument.
    pub fn decrypt_keyless(&self, token: &str) -> Output {
        self.cmd()
            .args(["decrypt", "--", token])
            .output()
            .expect("failed to run sealconf decrypt")
    }

    /// Shortcut for `sealconf keygen`.
    pub fn keygen(&self) -> Output {
        self.cmd()
            .arg("keygen")
            .output()
            .expect("failed to run sealconf keygen")
    }

    /// Shortcut for `sealconf keygen --json`.
    pub fn keygen_json(&self) -> Output {
        self.cmd()
            .args(["keygen", "--json"])
            .output()
            .expect("failed to run sealconf keygen --json")
    }
}
