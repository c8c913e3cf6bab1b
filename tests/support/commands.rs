//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envseed command pointed at the sandbox.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the temp directory
    /// - ENVSEED_HOSTS_FILE set to the sandboxed hosts file
    /// - NO_COLOR set so output is plain text
    /// - sudo ownership variables cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envseed").expect("failed to find envseed binary");
        cmd.current_dir(self.dir.path());
        cmd.env("ENVSEED_HOSTS_FILE", self.hosts_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ENVSEED_OUTPUT_DIR");
        cmd.env_remove("ENVSEED_LOG");
        cmd.env_remove("SUDO_UID");
        cmd.env_remove("SUDO_GID");
        cmd
    }

    /// Shortcut for `envseed <hostname>`.
    pub fn run(&self, hostname: &str) -> Output {
        self.cmd()
            .arg(hostname)
            .output()
            .expect("failed to run envseed")
    }

    /// Run with extra arguments after the hostname.
    pub fn run_with(&self, hostname: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg(hostname)
            .args(args)
            .output()
            .expect("failed to run envseed")
    }
}
