//! Command helper methods for Test.

use super::Test;
use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::Path;

impl Test {
    /// Create a vaulttool command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - `VAULTTOOL_CONFIG` and `VAULTTOOL_LOG` removed
    /// - `NO_COLOR` set so output can be matched as plain text
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaulttool").expect("failed to find vaulttool binary");
        cmd.env_remove("VAULTTOOL_CONFIG");
        cmd.env_remove("VAULTTOOL_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `vaulttool --config <path>`.
    pub fn read(&self, config: &Path) -> Assert {
        self.cmd().arg("--config").arg(config).assert()
    }

    /// Run `vaulttool --config <path> --json`.
    pub fn read_json(&self, config: &Path) -> Assert {
        self.cmd()
            .arg("--config")
            .arg(config)
            .arg("--json")
            .assert()
    }

    /// Run `vaulttool --config <path> --secrets <path> --write`.
    pub fn write(&self, config: &Path, secrets: &Path) -> Assert {
        self.cmd()
            .arg("--config")
            .arg(config)
            .arg("--secrets")
            .arg(secrets)
            .arg("--write")
            .assert()
    }
}
