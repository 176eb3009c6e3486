use anyhow::Result;

use folio_core::AppConfig;

pub fn run(config: &AppConfig, path_only: bool, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    if !path.exists() {
        println!("# No config file at {}, showing defaults\n", path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
