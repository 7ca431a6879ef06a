//! Target selection for the indirect chip-and-chase: find the biggest patch of
//! open space between the opponents and chip the ball towards it.
//!
//! The evaluation runs as a fixed pipeline over a single [`TeamFrame`]:
//!
//! 1. [`all_candidate_triangles`] between the opponent field players and the
//!    enemy half's corners
//! 2. [`open_triangles`] drops triangles with an opponent (goalkeeper included)
//!    inside
//! 3. [`remove_out_of_bounds_triangles`] drops triangles centered outside the
//!    [`ChipTargetArea`]
//! 4. [`largest_valid_triangle`] picks the winner
//! 5. [`project_chip_target`] turns its centroid into the chip target
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! calls.

mod candidates;
mod open_space;
mod projection;
mod selection;
mod target_area;

pub use candidates::*;
pub use open_space::*;
pub use projection::*;
pub use selection::*;
pub use target_area::*;

use dies_core::{ChipSettings, TeamFrame, Triangle, Vector2};
use serde::Serialize;

/// Result of one run of the indirect chip evaluation, with the number of
/// triangles that made it through each stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChipTargetEvaluation {
    pub candidate_count: usize,
    pub open_count: usize,
    pub in_bounds_count: usize,
    pub best_triangle: Option<Triangle>,
    pub target: Option<Vector2>,
}

/// Runs the full indirect chip evaluation on `frame`.
///
/// A frame without a ball or without field geometry yields an empty evaluation.
pub fn evaluate_indirect_chip(frame: &TeamFrame, settings: &ChipSettings) -> ChipTargetEvaluation {
    let (Some(ball), Some(field)) = (frame.ball.as_ref(), frame.field_geom.as_ref()) else {
        log::debug!("Skipping indirect chip evaluation: no ball or field geometry");
        return ChipTargetEvaluation::default();
    };
    let ball_position = ball.position.xy();

    let candidates = all_candidate_triangles(&frame.opp_field_player_positions(), field);
    let open = open_triangles(&candidates, &frame.opp_positions());
    let area = ChipTargetArea::new(field, ball_position, settings.chip_target_area_inset);
    let in_bounds = remove_out_of_bounds_triangles(&open, &area);

    let best_triangle =
        largest_valid_triangle(&in_bounds, &TriangleThresholds::from_settings(settings));
    let target = project_chip_target(
        best_triangle.as_ref(),
        ball_position,
        settings.chip_cherry_power_downscale,
        settings.max_chip_power,
    );

    log::debug!(
        "Indirect chip: {} candidates, {} open, {} in bounds, target {:?}",
        candidates.len(),
        open.len(),
        in_bounds.len(),
        target
    );
    if let Some(best) = &best_triangle {
        let (center, area) = triangle_center_and_area(best);
        log::trace!("Best chip triangle {:?}: center {:?}, area {:.3}", best, center, area);
    }

    ChipTargetEvaluation {
        candidate_count: candidates.len(),
        open_count: open.len(),
        in_bounds_count: in_bounds.len(),
        best_triangle,
        target,
    }
}

/// Finds the point to chip the ball to for an indirect chip-and-chase, if there
/// is any usable open space.
pub fn find_indirect_chip_target(frame: &TeamFrame, settings: &ChipSettings) -> Option<Vector2> {
    evaluate_indirect_chip(frame, settings).target
}

/// Picks the chip target from triangles that have already been filtered.
///
/// Only the selection and projection stages run.
pub fn find_indirect_chip_target_from_triangles(
    triangles: &[Triangle],
    ball_position: Vector2,
    settings: &ChipSettings,
) -> Option<Vector2> {
    let best = largest_valid_triangle(triangles, &TriangleThresholds::from_settings(settings));
    project_chip_target(
        best.as_ref(),
        ball_position,
        settings.chip_cherry_power_downscale,
        settings.max_chip_power,
    )
}
