use dies_core::{Triangle, Vector2, PLAYER_RADIUS};

/// How many robot radii each vertex is pulled towards the centroid before
/// checking for opponents inside a triangle.
pub const OPEN_TRIANGLE_SHRINK_FACTOR: f64 = 2.5;

/// Keeps only the triangles with no opponent inside them.
///
/// Each triangle is first shrunk by [`OPEN_TRIANGLE_SHRINK_FACTOR`] robot radii
/// so the robots standing on its vertices do not count as inside. The
/// containment test is strict: an opponent exactly on an edge of the shrunk
/// triangle does not close it. Surviving triangles are returned unshrunk, in
/// input order.
pub fn open_triangles(triangles: &[Triangle], opp_positions: &[Vector2]) -> Vec<Triangle> {
    let margin = OPEN_TRIANGLE_SHRINK_FACTOR * PLAYER_RADIUS;
    triangles
        .iter()
        .filter(|t| {
            let shrunk = t.shrink_towards_centroid(margin);
            !opp_positions.iter().any(|p| shrunk.contains_strict(*p))
        })
        .copied()
        .collect()
}
