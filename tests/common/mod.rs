//! Common test utilities for hummingbird integration tests.
//!
//! Provides `TestEnv`, an isolated recipe directory plus settings file, so
//! tests never read `~/.recipe` or the user's settings.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

pub const DEPLOYMENT_CONF: &str = "env = staging
#debug = true
services = [

    auth-service,
    #billing-service,

]

";

pub const OVERRIDES_CONF: &str = "overrides {
feature.flag = on
payments {
    provider = stripe
}
}
";

/// A temporary recipe directory with both configuration files.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("recipe")).unwrap();
        std::fs::write(root.path().join("settings.yaml"), "audit_log: true\n").unwrap();

        let env = Self { root };
        env.write("deployment.conf", DEPLOYMENT_CONF);
        env.write("overrides.conf", OVERRIDES_CONF);
        env
    }

    /// Get a Command for the hummingbird binary bound to this environment.
    ///
    /// Uses per-command environment variables for parallel safety.
    pub fn hb(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hummingbird"));
        cmd.env("HUMMINGBIRD_RECIPE_DIR", self.recipe_dir());
        cmd.env("HUMMINGBIRD_SETTINGS", self.root.path().join("settings.yaml"));
        cmd.env_remove("HUMMINGBIRD_LOG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn recipe_dir(&self) -> PathBuf {
        self.root.path().join("recipe")
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.recipe_dir().join(name), content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.recipe_dir().join(name)).unwrap()
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
