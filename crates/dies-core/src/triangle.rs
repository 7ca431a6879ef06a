use serde::{Deserialize, Serialize};

use crate::{Angle, Vector2};

/// A triangle given by three vertices.
///
/// The vertex order is kept exactly as constructed so results stay reproducible,
/// but none of the geometric queries depend on it. Equality is exact
/// component-wise equality of the vertices, in order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle([Vector2; 3]);

impl Triangle {
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2) -> Self {
        Self([p0, p1, p2])
    }

    pub fn vertices(&self) -> &[Vector2; 3] {
        &self.0
    }

    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Vector2 {
        let [p0, p1, p2] = self.0;
        Vector2::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0)
    }

    /// Signed area, positive when the vertices wind counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let [p0, p1, p2] = self.0;
        0.5 * ((p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y))
    }

    /// Area via the shoelace formula. Zero for collinear vertices.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Edge lengths `|p1 - p0|`, `|p2 - p0|` and `|p2 - p1|`.
    pub fn edge_lengths(&self) -> [f64; 3] {
        let [p0, p1, p2] = self.0;
        [(p1 - p0).norm(), (p2 - p0).norm(), (p2 - p1).norm()]
    }

    /// Unsigned interior angles at `p0`, `p1` and `p2`, in radians.
    pub fn interior_angles(&self) -> [f64; 3] {
        let [p0, p1, p2] = self.0;
        [
            Angle::vertex(p1, p0, p2).abs(),
            Angle::vertex(p0, p1, p2).abs(),
            Angle::vertex(p0, p2, p1).abs(),
        ]
    }

    /// Moves every vertex `margin` towards the centroid.
    ///
    /// A vertex sitting on the centroid has no direction to move in and is left
    /// where it is.
    pub fn shrink_towards_centroid(&self, margin: f64) -> Triangle {
        let center = self.centroid();
        Triangle(self.0.map(|p| match (center - p).try_normalize(0.0) {
            Some(dir) => p + dir * margin,
            None => p,
        }))
    }

    /// Whether `point` lies strictly inside the triangle.
    ///
    /// Points on an edge or a vertex are not contained, and neither is anything
    /// for a degenerate triangle. Works for either winding.
    pub fn contains_strict(&self, point: Vector2) -> bool {
        let [p0, p1, p2] = self.0;
        let d0 = cross(p1 - p0, point - p0);
        let d1 = cross(p2 - p1, point - p1);
        let d2 = cross(p0 - p2, point - p2);

        (d0 > 0.0 && d1 > 0.0 && d2 > 0.0) || (d0 < 0.0 && d1 < 0.0 && d2 < 0.0)
    }
}

impl std::ops::Index<usize> for Triangle {
    type Output = Vector2;

    fn index(&self, index: usize) -> &Vector2 {
        &self.0[index]
    }
}

impl From<[Vector2; 3]> for Triangle {
    fn from(vertices: [Vector2; 3]) -> Self {
        Self(vertices)
    }
}

fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn equilateral_ish() -> Triangle {
        Triangle::new(
            Vector2::new(-1.0, -1.0),
            Vector2::new(0.0, 0.75f64.sqrt()),
            Vector2::new(1.0, -1.0),
        )
    }

    #[test]
    fn test_centroid_and_area() {
        let t = equilateral_ish();
        assert_eq!(
            t.centroid(),
            Vector2::new(0.0, (-1.0 + 0.75f64.sqrt() - 1.0) / 3.0)
        );
        assert_relative_eq!(t.area(), 0.5 * (2.0 * (1.0 + 0.75f64.sqrt())), epsilon = 1e-12);
    }

    #[test]
    fn test_area_ignores_winding() {
        let t = equilateral_ish();
        let reversed = Triangle::new(t[2], t[1], t[0]);
        assert!(t.signed_area() < 0.0);
        assert!(reversed.signed_area() > 0.0);
        assert_eq!(t.area(), reversed.area());
    }

    #[test]
    fn test_collinear_has_zero_area() {
        let t = Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        );
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn test_edge_lengths() {
        let t = Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(0.0, 4.0),
        );
        assert_eq!(t.edge_lengths(), [3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_interior_angles_sum_to_pi() {
        let t = Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(0.0, 4.0),
        );
        let [a0, a1, a2] = t.interior_angles();
        assert_relative_eq!(a0.to_degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(a0 + a1 + a2, std::f64::consts::PI, epsilon = 1e-9);
    }

    #[test]
    fn test_shrink_moves_each_vertex_by_margin() {
        let t = equilateral_ish();
        let shrunk = t.shrink_towards_centroid(0.1);
        for i in 0..3 {
            assert_relative_eq!((shrunk[i] - t[i]).norm(), 0.1, epsilon = 1e-12);
            assert!((shrunk[i] - t.centroid()).norm() < (t[i] - t.centroid()).norm());
        }
    }

    #[test]
    fn test_shrink_degenerate_point_triangle() {
        let p = Vector2::new(1.5, -2.0);
        let t = Triangle::new(p, p, p);
        assert_eq!(t.shrink_towards_centroid(0.5), t);
    }

    #[test]
    fn test_contains_strict() {
        let t = Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 2.0),
        );
        assert!(t.contains_strict(Vector2::new(0.5, 0.5)));
        assert!(!t.contains_strict(Vector2::new(2.0, 2.0)));
        // Edges and vertices are outside
        assert!(!t.contains_strict(Vector2::new(1.0, 0.0)));
        assert!(!t.contains_strict(Vector2::new(1.0, 1.0)));
        assert!(!t.contains_strict(Vector2::new(0.0, 0.0)));

        let clockwise = Triangle::new(t[0], t[2], t[1]);
        assert!(clockwise.contains_strict(Vector2::new(0.5, 0.5)));
    }

    #[test]
    fn test_degenerate_contains_nothing() {
        let t = Triangle::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
        );
        assert!(!t.contains_strict(Vector2::new(1.0, 0.0)));
        assert!(!t.contains_strict(Vector2::new(1.0, 0.1)));
    }
}
