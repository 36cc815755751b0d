use anyhow::Result;

use showreel_core::AppConfig;

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    tracing::info!(path = %path.display(), "Wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}
