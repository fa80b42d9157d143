//! Config file locations and writing

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Per-directory config file, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".nygames/config.toml";

impl Config {
    /// Global config file (`~/.nygames/config.toml`)
    pub fn global_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(LOCAL_CONFIG_PATH)
    }

    /// Config file `init` writes for a working directory
    pub fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_PATH)
    }
}

/// Replace `path` with `content`, creating parent directories.
///
/// Writers serialize on a `.lock` sibling; readers only ever see the old file
/// or the complete new one.
pub fn write_config_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let lock_path = path.with_extension("toml.lock");
    let lock = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("Failed to open {}", lock_path.display()))?;
    lock.lock_exclusive()
        .with_context(|| format!("Failed to lock {}", lock_path.display()))?;

    let staged = path.with_extension("toml.new");
    let mut file =
        File::create(&staged).with_context(|| format!("Failed to create {}", staged.display()))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_data())
        .with_context(|| format!("Failed to write {}", staged.display()))?;

    fs::rename(&staged, path)
        .with_context(|| format!("Failed to replace {}", path.display()))
}
