use dies_core::{ChipSettings, Triangle, Vector2};

/// Minimum size and shape a triangle needs to be worth chipping into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriangleThresholds {
    /// Minimum area, in m²
    pub min_area: f64,
    /// Minimum length of each edge, in m
    pub min_edge_len: f64,
    /// Minimum interior angle at each vertex, in degrees
    pub min_vertex_angle: f64,
}

impl TriangleThresholds {
    pub fn new(min_area: f64, min_edge_len: f64) -> Self {
        Self {
            min_area,
            min_edge_len,
            min_vertex_angle: 0.0,
        }
    }

    pub fn with_min_vertex_angle(self, degrees: f64) -> Self {
        Self {
            min_vertex_angle: degrees,
            ..self
        }
    }

    pub fn from_settings(settings: &ChipSettings) -> Self {
        Self::new(settings.min_chip_tri_area, settings.min_chip_tri_edge_len)
            .with_min_vertex_angle(settings.min_chip_tri_vertex_angle)
    }

    /// Whether `triangle` passes every threshold. Zero-area triangles never do.
    pub fn is_valid(&self, triangle: &Triangle) -> bool {
        self.is_valid_with_area(triangle, triangle.area())
    }

    fn is_valid_with_area(&self, triangle: &Triangle, area: f64) -> bool {
        area > 0.0
            && area >= self.min_area
            && triangle
                .edge_lengths()
                .iter()
                .all(|len| *len >= self.min_edge_len)
            && triangle
                .interior_angles()
                .iter()
                .all(|angle| angle.to_degrees() >= self.min_vertex_angle)
    }
}

pub fn triangle_center_and_area(triangle: &Triangle) -> (Vector2, f64) {
    (triangle.centroid(), triangle.area())
}

/// The largest triangle that passes `thresholds`, or `None` if none does.
///
/// Ties on area go to the triangle that comes last in `triangles`.
pub fn largest_valid_triangle(
    triangles: &[Triangle],
    thresholds: &TriangleThresholds,
) -> Option<Triangle> {
    let mut largest: Option<(Triangle, f64)> = None;
    for triangle in triangles {
        let area = triangle.area();
        if !thresholds.is_valid_with_area(triangle, area) {
            continue;
        }
        if largest.map_or(true, |(_, largest_area)| area >= largest_area) {
            largest = Some((*triangle, area));
        }
    }
    largest.map(|(triangle, _)| triangle)
}
