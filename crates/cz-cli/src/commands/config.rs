use std::path::{Path, PathBuf};

use anyhow::Context;
use cz_config::{CzConfig, PROJECT_CONFIG_PATH};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{Notice, notify, output};

/// Handle `cz config show`.
pub fn show(config: &CzConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    output(config, flags.format)
}

/// Handle `cz config init`.
pub fn init(global: bool, force: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = if global {
        CzConfig::global_config_path()
            .context("could not determine the user config directory")?
    } else {
        PathBuf::from(PROJECT_CONFIG_PATH)
    };
    write_default(&path, force)?;
    notify(
        &Notice::new(format!("Wrote default configuration to {}", path.display())),
        flags,
    )
}

fn write_default(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Re-run with --force to overwrite it.",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, CzConfig::default_toml()?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
