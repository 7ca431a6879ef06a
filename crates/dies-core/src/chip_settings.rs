use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Tunable parameters for the indirect chip-and-chase evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[typeshare]
pub struct ChipSettings {
    /// Minimum area of a chip target triangle, in m².
    pub min_chip_tri_area: f64,
    /// Minimum length of every edge of a chip target triangle, in m.
    pub min_chip_tri_edge_len: f64,
    /// Minimum interior angle at every vertex of a chip target triangle, in degrees.
    #[serde(default)]
    pub min_chip_tri_vertex_angle: f64,
    /// Fraction of the ball-to-target distance to actually chip, in (0, 1].
    pub chip_cherry_power_downscale: f64,
    /// Maximum distance the ball may be chipped, in m.
    pub max_chip_power: f64,
    /// Margin kept between the chip target area and the field boundary, in m.
    pub chip_target_area_inset: f64,
}

impl Default for ChipSettings {
    fn default() -> Self {
        Self {
            min_chip_tri_area: 0.5,
            min_chip_tri_edge_len: 0.8,
            min_chip_tri_vertex_angle: 20.0,
            chip_cherry_power_downscale: 0.85,
            max_chip_power: 8.0,
            chip_target_area_inset: 0.3,
        }
    }
}

impl ChipSettings {
    /// Check that every parameter is finite and within its allowed range.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("min_chip_tri_area", self.min_chip_tri_area),
            ("min_chip_tri_edge_len", self.min_chip_tri_edge_len),
            ("min_chip_tri_vertex_angle", self.min_chip_tri_vertex_angle),
            ("chip_target_area_inset", self.chip_target_area_inset),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be finite and non-negative, got {}", name, value);
            }
        }

        let downscale = self.chip_cherry_power_downscale;
        if !(downscale > 0.0 && downscale <= 1.0) {
            bail!(
                "chip_cherry_power_downscale must be in (0, 1], got {}",
                downscale
            );
        }
        if !self.max_chip_power.is_finite() || self.max_chip_power <= 0.0 {
            bail!(
                "max_chip_power must be finite and positive, got {}",
                self.max_chip_power
            );
        }

        Ok(())
    }

    /// Load the chip settings from a file, or store the default settings if the
    /// file does not exist.
    ///
    /// Fails if the file exists but cannot be read, parsed or validated, or if
    /// writing the defaults fails.
    pub fn load_or_insert(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let settings: Self = serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse chip settings {}", path.display()))?;
                settings
                    .validate()
                    .with_context(|| format!("Invalid chip settings in {}", path.display()))?;
                Ok(settings)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No chip settings at {}, writing defaults", path.display());
                let settings = Self::default();
                settings.store(path)?;
                Ok(settings)
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read chip settings {}", path.display())),
        }
    }

    /// Store the chip settings in the given file.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write chip settings {}", path.display()))
    }
}
