use std::path::Path;

use dass_cli::config::{Dass21Config, save_config};

/// Write a default config file, refusing to clobber an existing one
/// unless `force` is set.
pub fn execute(path: Option<&Path>, force: bool) -> eyre::Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => dass_cli::config::default_config_path()?,
    };
    if target.exists() && !force {
        eyre::bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    let written = save_config(&Dass21Config::default(), Some(&target))?;
    println!("Wrote {}", written.display());
    Ok(())
}
