use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::Vector2;

/// Maximum radius of a robot, in m.
pub const PLAYER_RADIUS: f64 = 0.09;

/// The field geometry, in team coordinates: `+x` always points at the enemy goal
/// and the center of the field is the origin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[typeshare]
pub struct FieldGeometry {
    /// Field length (distance between goal lines) in m
    pub field_length: f64,
    /// Field width (distance between touch lines) in m
    pub field_width: f64,
    /// Goal width (distance inner edges of goal posts) in m
    pub goal_width: f64,
    /// Goal depth (distance from outer goal line edge to inner goal back) in m
    pub goal_depth: f64,
    /// Boundary width (distance from touch/goal line centers to boundary walls) in m
    pub boundary_width: f64,
    /// Depth of the penalty area, measured from the goal line, in m
    pub penalty_area_depth: f64,
    /// Width of the penalty area in m
    pub penalty_area_width: f64,
}

impl FieldGeometry {
    /// Center of the enemy goal line.
    pub fn enemy_goal_center(&self) -> Vector2 {
        Vector2::new(self.field_length / 2.0, 0.0)
    }

    /// Center of our own goal line.
    pub fn own_goal_center(&self) -> Vector2 {
        Vector2::new(-self.field_length / 2.0, 0.0)
    }

    /// The corner on the enemy goal line with positive y.
    pub fn enemy_corner_pos(&self) -> Vector2 {
        Vector2::new(self.field_length / 2.0, self.field_width / 2.0)
    }

    /// The corner on the enemy goal line with negative y.
    pub fn enemy_corner_neg(&self) -> Vector2 {
        Vector2::new(self.field_length / 2.0, -self.field_width / 2.0)
    }
}

impl Default for FieldGeometry {
    /// Division B field.
    fn default() -> Self {
        Self {
            field_length: 9.0,
            field_width: 6.0,
            goal_width: 1.0,
            goal_depth: 0.18,
            boundary_width: 0.3,
            penalty_area_depth: 1.0,
            penalty_area_width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corners() {
        let field = FieldGeometry::default();
        assert_eq!(field.enemy_goal_center(), Vector2::new(4.5, 0.0));
        assert_eq!(field.own_goal_center(), Vector2::new(-4.5, 0.0));
        assert_eq!(field.enemy_corner_pos(), Vector2::new(4.5, 3.0));
        assert_eq!(field.enemy_corner_neg(), Vector2::new(4.5, -3.0));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "field_length": 12.0,
            "field_width": 9.0,
            "goal_width": 1.8,
            "goal_depth": 0.18,
            "boundary_width": 0.3,
            "penalty_area_depth": 1.8,
            "penalty_area_width": 3.6
        }"#;
        let field: FieldGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(field.enemy_corner_neg(), Vector2::new(6.0, -4.5));
    }
}
