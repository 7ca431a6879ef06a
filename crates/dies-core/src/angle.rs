use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::Vector2;

/// Tolerance used when comparing angles, in radians.
pub const ANGLE_TOLERANCE: f64 = 1e-5;

/// An angle in radians, always in (-pi, pi]. This type supports safe arithmetic
/// operations:
///
/// ```ignore
/// # use dies_core::Angle;
/// let a = Angle::from_degrees(90.0);
/// let b = Angle::from_degrees(45.0);
/// let c = a - b;
/// assert_eq!(c.degrees(), 45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialOrd, Serialize, Deserialize)]
#[typeshare(serialized_as = "f64")]
pub struct Angle(f64);

impl Angle {
    /// Create a new angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Angle(wrap_angle(radians))
    }

    /// Create a new angle from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// The orientation of a vector, measured counter-clockwise from +x.
    ///
    /// The zero vector has orientation `0`.
    pub fn of_vector(v: Vector2) -> Self {
        Self::from_radians(v.y.atan2(v.x))
    }

    /// Compute the smallest signed counter-clockwise angle from point a to point b.
    pub fn between_points(a: Vector2, b: Vector2) -> Self {
        Self::of_vector(b - a)
    }

    /// The signed angle at `vertex` swept from the ray towards `a` to the ray
    /// towards `b`.
    ///
    /// Take `.abs()` for the unsigned interior angle; the result is then in
    /// `[0, pi]`.
    pub fn vertex(a: Vector2, vertex: Vector2, b: Vector2) -> Self {
        Self::of_vector(a - vertex) - Self::of_vector(b - vertex)
    }

    /// Get the angle in radians.
    pub fn radians(&self) -> f64 {
        self.0
    }

    /// Get the angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    /// Get the absolute value of the angle, in radians
    pub fn abs(&self) -> f64 {
        self.0.abs()
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Angle::from_radians(self.0 + other.0)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Angle::from_radians(self.0 - other.0)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::from_radians(0.0)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        let diff: f64 = (self.radians() - other.radians()).abs();
        !(ANGLE_TOLERANCE..=(2.0 * PI - ANGLE_TOLERANCE)).contains(&diff)
    }
}

fn wrap_angle(angle: f64) -> f64 {
    let mut angle = angle % (2.0 * PI);
    if angle <= -PI {
        angle += 2.0 * PI;
    } else if angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}
