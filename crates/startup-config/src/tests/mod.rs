mod log_level;

use std::collections::HashMap;
use std::path::Path;

use tempfile::TempDir;

/// Temp config directory with an optional `config.toml`.
pub(crate) struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub(crate) fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn with_toml(contents: &str) -> Self {
        let config_dir = Self::empty();
        std::fs::write(config_dir.path().join(crate::CONFIG_FILENAME), contents).unwrap();
        config_dir
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Override lookup backed by a fixed map instead of the process environment.
pub(crate) fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}
