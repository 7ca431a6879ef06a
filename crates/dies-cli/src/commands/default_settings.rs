use anyhow::Result;
use dies_core::ChipSettings;

pub fn print_default_settings() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ChipSettings::default())?);
    Ok(())
}
