use dies_core::{Triangle, Vector2};

/// Turns the winning triangle into the point the ball should be chipped to.
///
/// The ball-to-centroid distance is multiplied by `power_downscale` so the ball
/// lands short of the open space and rolls into it, then capped at
/// `max_chip_power`. Returns `None` without a triangle. If the centroid is on the
/// ball there is no direction to chip in and the ball position is returned.
pub fn project_chip_target(
    triangle: Option<&Triangle>,
    ball: Vector2,
    power_downscale: f64,
    max_chip_power: f64,
) -> Option<Vector2> {
    let target = triangle?.centroid();
    let displacement = target - ball;

    let Some(direction) = displacement.try_normalize(0.0) else {
        log::debug!("Chip target coincides with the ball, not moving it");
        return Some(ball);
    };

    let distance = (displacement.norm() * power_downscale).min(max_chip_power);
    Some(ball + direction * distance)
}
