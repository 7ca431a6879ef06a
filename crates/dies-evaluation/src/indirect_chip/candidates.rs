use dies_core::{FieldGeometry, Triangle, Vector2};

/// The four fixed points added to the opponents when building candidate
/// triangles: both enemy corners and their projections onto the halfway line.
pub fn boundary_points(field: &FieldGeometry) -> [Vector2; 4] {
    let corner_neg = field.enemy_corner_neg();
    let corner_pos = field.enemy_corner_pos();
    [
        corner_neg,
        corner_pos,
        Vector2::new(0.0, corner_pos.y),
        Vector2::new(0.0, corner_neg.y),
    ]
}

/// Every triangle with vertices drawn from the given opponent positions plus
/// the [`boundary_points`].
///
/// Triangles are emitted for each index triple `i < j < k` in ascending order,
/// so for `m` opponents the result has exactly `C(m + 4, 3)` entries.
pub fn all_candidate_triangles(opp_positions: &[Vector2], field: &FieldGeometry) -> Vec<Triangle> {
    let points: Vec<Vector2> = opp_positions
        .iter()
        .copied()
        .chain(boundary_points(field))
        .collect();
    let n = points.len();

    let mut triangles = Vec::with_capacity(n * n.saturating_sub(1) * n.saturating_sub(2) / 6);
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                triangles.push(Triangle::new(points[i], points[j], points[k]));
            }
        }
    }
    triangles
}
