use dies_core::{FieldGeometry, Triangle, Vector2};
use serde::Serialize;

/// Corners of the area a chip may target: from the ball's x up to the enemy goal
/// line, and between the touch lines, all pulled in by `inset`.
///
/// Ordered as (ball x, negative y), (ball x, positive y), (goal x, negative y),
/// (goal x, positive y).
pub fn chip_target_area_corners(field: &FieldGeometry, ball: Vector2, inset: f64) -> [Vector2; 4] {
    let ball_x = ball.x;
    let field_x = field.enemy_goal_center().x - inset;
    let neg_field_y = field.enemy_corner_neg().y + inset;
    let pos_field_y = field.enemy_corner_pos().y - inset;

    [
        Vector2::new(ball_x, neg_field_y),
        Vector2::new(ball_x, pos_field_y),
        Vector2::new(field_x, neg_field_y),
        Vector2::new(field_x, pos_field_y),
    ]
}

/// Axis aligned rectangle spanned by the chip target area corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChipTargetArea {
    pub min: Vector2,
    pub max: Vector2,
}

impl ChipTargetArea {
    pub fn new(field: &FieldGeometry, ball: Vector2, inset: f64) -> Self {
        Self::from_corners(&chip_target_area_corners(field, ball, inset))
    }

    /// The bounding box of `corners`. Works regardless of which way the field
    /// axes point.
    pub fn from_corners(corners: &[Vector2]) -> Self {
        let mut min = Vector2::repeat(f64::INFINITY);
        let mut max = Vector2::repeat(f64::NEG_INFINITY);
        for corner in corners {
            min = min.inf(corner);
            max = max.sup(corner);
        }
        Self { min, max }
    }

    /// Whether `point` is inside the area or on its boundary.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Keeps the triangles whose centroid lies in `area`, in input order.
pub fn remove_out_of_bounds_triangles(
    triangles: &[Triangle],
    area: &ChipTargetArea,
) -> Vec<Triangle> {
    triangles
        .iter()
        .filter(|t| area.contains(t.centroid()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_target_area_corners() {
        let field = FieldGeometry::default();
        let inset = 0.3;
        let corners = chip_target_area_corners(&field, Vector2::zeros(), inset);

        let field_x = 4.5 - inset;
        let neg_field_y = -3.0 + inset;
        let pos_field_y = 3.0 - inset;
        assert_eq!(
            corners,
            [
                Vector2::new(0.0, neg_field_y),
                Vector2::new(0.0, pos_field_y),
                Vector2::new(field_x, neg_field_y),
                Vector2::new(field_x, pos_field_y),
            ]
        );
    }

    #[test]
    fn test_area_is_normalized() {
        // A ball past the inset goal line flips the x range
        let field = FieldGeometry::default();
        let area = ChipTargetArea::new(&field, Vector2::new(4.4, 0.0), 0.3);
        assert_eq!(area.min, Vector2::new(4.5 - 0.3, -3.0 + 0.3));
        assert_eq!(area.max, Vector2::new(4.4, 3.0 - 0.3));

        let flipped =
            ChipTargetArea::from_corners(&[Vector2::new(1.0, 2.0), Vector2::new(-1.0, -2.0)]);
        assert_eq!(flipped.min, Vector2::new(-1.0, -2.0));
        assert_eq!(flipped.max, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let area = ChipTargetArea::from_corners(&[Vector2::new(0.0, -1.0), Vector2::new(2.0, 1.0)]);
        assert!(area.contains(Vector2::new(0.0, 0.0)));
        assert!(area.contains(Vector2::new(2.0, 1.0)));
        assert!(area.contains(Vector2::new(1.0, -1.0)));
        assert!(!area.contains(Vector2::new(-1e-9, 0.0)));
        assert!(!area.contains(Vector2::new(1.0, 1.0 + 1e-9)));
    }

    #[test]
    fn test_keeps_triangles_centered_on_ball_line() {
        let field = FieldGeometry::default();
        let area = ChipTargetArea::new(&field, Vector2::zeros(), 0.3);

        let t1 = Triangle::new(
            Vector2::new(-0.5, -0.5),
            Vector2::new(0.0, 0.5),
            Vector2::new(0.5, -0.5),
        );
        let t2 = Triangle::new(
            Vector2::new(-1.0, -1.0),
            Vector2::new(0.0, 0.75f64.sqrt()),
            Vector2::new(1.0, -1.0),
        );
        assert_eq!(remove_out_of_bounds_triangles(&[t1, t2], &area), vec![t1, t2]);
    }

    #[test]
    fn test_drops_triangles_behind_ball() {
        let field = FieldGeometry::default();
        let area = ChipTargetArea::new(&field, Vector2::new(1.0, 0.0), 0.3);

        let behind = Triangle::new(
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(0.5, -1.0),
        );
        let ahead = Triangle::new(
            Vector2::new(2.0, 0.0),
            Vector2::new(3.0, 1.0),
            Vector2::new(3.0, -1.0),
        );
        let outside_touch_line = Triangle::new(
            Vector2::new(2.0, 2.5),
            Vector2::new(3.0, 3.0),
            Vector2::new(2.5, 3.0),
        );
        assert_eq!(
            remove_out_of_bounds_triangles(&[behind, ahead, outside_touch_line], &area),
            vec![ahead]
        );
    }
}
