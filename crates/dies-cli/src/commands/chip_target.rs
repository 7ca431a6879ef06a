use std::{fs, path::Path};

use anyhow::{Context, Result};
use dies_core::{ChipSettings, TeamFrame};
use dies_evaluation::{evaluate_indirect_chip, ChipTargetEvaluation};

/// Loads a frame and the chip settings, runs the evaluation and prints the result
/// as JSON on stdout.
pub fn chip_target(settings_file: &Path, frame_file: &Path) -> Result<()> {
    let settings = ChipSettings::load_or_insert(settings_file)?;
    let frame = load_frame(frame_file)?;
    tracing::debug!(
        "Loaded frame with {} opponents from {}",
        frame.opp_players.len(),
        frame_file.display()
    );

    let evaluation = evaluate_indirect_chip(&frame, &settings);
    log_evaluation(&evaluation);

    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn load_frame(path: &Path) -> Result<TeamFrame> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frame {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse frame {}", path.display()))
}

fn log_evaluation(evaluation: &ChipTargetEvaluation) {
    match evaluation.target {
        Some(target) => tracing::info!(
            "Chip target at ({:.3}, {:.3}) from {} open triangles",
            target.x,
            target.y,
            evaluation.in_bounds_count
        ),
        None => tracing::info!(
            "No chip target: {} candidates, {} open, {} in bounds",
            evaluation.candidate_count,
            evaluation.open_count,
            evaluation.in_bounds_count
        ),
    }
}
