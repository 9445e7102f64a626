//! Shared testing utilities for wxdesk CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const RECORD_7: &str = r#"{"id":7,"timestamp":"2024-05-01T00:00:00Z","city":"Oslo","country":"Norway","temperature":20,"humidity":60,"pressure":1000,"wind_speed":5,"weather_status":"Clear"}"#;

/// Testing harness providing an isolated home directory and a fake store.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment whose config points at a fresh mock store.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        let ctx = Self { root, server };

        fs::create_dir_all(ctx.state_dir()).expect("Failed to create state directory");
        ctx.write_config(&format!(
            "[store]\nbase_url = \"{}\"\ntimeout_secs = 2\n",
            ctx.server.url()
        ));
        ctx
    }

    /// Absolute path to the emulated home directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding config.toml and session.json.
    pub fn state_dir(&self) -> PathBuf {
        self.home().join(".wxdesk")
    }

    pub fn session_file(&self) -> PathBuf {
        self.state_dir().join("session.json")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.state_dir().join("config.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `wxdesk` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wxdesk").expect("Failed to locate wxdesk binary");
        cmd.env("HOME", self.home())
            .env("WXDESK_HOME", self.home())
            .env_remove("WXDESK_CONFIG")
            .env_remove("WXDESK_LOG");
        cmd
    }

    /// Log in with the default admin credentials.
    pub fn login_as_admin(&self) {
        self.cli().args(["login", "-u", "admin", "-p", "admin"]).assert().success();
    }

    /// Write a role attribute that has already expired.
    pub fn write_expired_session(&self) {
        fs::write(
            self.session_file(),
            r#"{"attributes":[{"name":"X-User-Role","value":"admin","path":"/","expires_at":"2000-01-01T00:00:00Z"}]}"#,
        )
        .expect("Failed to write session file");
    }
}
