use crate::services::SyncConfig;
use anyhow::Result;
use std::path::Path;

/// Create the default configuration file
pub fn execute_init(config_path: &Path, force: bool) -> Result<()> {
    let config = SyncConfig::init(config_path, force)?;

    println!("✅ {} created successfully", config_path.display());
    println!("   - basePath: {}", config.base_path);
    println!("   - region: {}", config.region);
    println!("   - environments: {}", config.environments().join(", "));
    Ok(())
}
