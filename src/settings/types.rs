//! Default values for console settings.

use crate::conf::{DEPLOYMENT_FILE, OVERRIDES_FILE};

/// Files shown and edited by the console, in display order.
pub fn default_config_files() -> Vec<String> {
    vec![DEPLOYMENT_FILE.to_string(), OVERRIDES_FILE.to_string()]
}

/// Files whose entries live inside an `overrides { }` wrapper.
pub fn default_wrapped_files() -> Vec<String> {
    vec![OVERRIDES_FILE.to_string()]
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    3001
}

pub(crate) fn default_true() -> bool {
    true
}
