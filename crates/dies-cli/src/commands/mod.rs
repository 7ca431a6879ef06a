pub mod chip_target;
pub mod default_settings;
