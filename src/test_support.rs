use crate::context::ConsoleContext;
use tempfile::TempDir;

/// `deployment.conf` in canonical form: rendering it reproduces the text.
pub(crate) const DEPLOYMENT_SAMPLE: &str = "env = staging
#debug = true
jvm.opts = -Xmx2g -Dfile.encoding=UTF-8
services = [

    auth-service,
    #billing-service,

]

region = eu-west-1
";

/// `overrides.conf` in canonical form.
pub(crate) const OVERRIDES_SAMPLE: &str = "overrides {
feature.flag = on
#feature.beta = off
payments {
    provider = stripe
}
hosts = [
    a.internal,
    #b.internal,
]
}
";

/// A temporary recipe directory holding both sample files.
pub(crate) fn create_recipe_dir() -> (TempDir, ConsoleContext) {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("deployment.conf"), DEPLOYMENT_SAMPLE).unwrap();
    std::fs::write(temp_dir.path().join("overrides.conf"), OVERRIDES_SAMPLE).unwrap();

    let ctx = ConsoleContext::from_recipe_dir(temp_dir.path());
    (temp_dir, ctx)
}

/// Sets an environment variable for the guard's lifetime.
///
/// The environment is process-global; tests using this must be `#[serial]`.
pub(crate) struct EnvGuard {
    name: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(name: &'static str, value: &str) -> Self {
        let original = std::env::var(name).ok();
        // SAFETY: callers are serialized, so no other test thread reads the environment.
        unsafe { std::env::set_var(name, value) };
        Self { name, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::set`.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }
}
