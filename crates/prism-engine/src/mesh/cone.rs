use std::f32::consts::TAU;

use super::ShapeMesh;

/// Segment count used when a caller asks for zero segments.
pub const DEFAULT_CONE_SEGMENTS: u32 = 10;

/// Highest accepted segment count.
///
/// Positions are `segments + 2`, which keeps every index below the `Uint16`
/// strip primitive-restart value.
pub const MAX_CONE_SEGMENTS: u32 = 65_533;

/// Builds the stock cone: a unit-radius base circle in the XY plane centered
/// at the origin, apex one unit up +Z.
///
/// The index stream carries two fans of `segments + 1` entries sharing the
/// ring: the base around its center vertex, then the flank around the apex.
/// A `segments` of 0 falls back to [`DEFAULT_CONE_SEGMENTS`]; oversized
/// requests are capped at [`MAX_CONE_SEGMENTS`].
pub fn cone(segments: u32) -> ShapeMesh {
    let segments = if segments == 0 {
        DEFAULT_CONE_SEGMENTS
    } else {
        segments.min(MAX_CONE_SEGMENTS)
    };

    let mut positions = Vec::with_capacity(segments as usize + 2);
    positions.push([0.0, 0.0, 0.0]);

    for i in 0..segments {
        let theta = TAU * i as f32 / segments as f32;
        positions.push([theta.cos(), theta.sin(), 0.0]);
    }

    let apex = segments as u16 + 1;
    positions.push([0.0, 0.0, 1.0]);

    // Base fan, then flank fan; both walk the same ring.
    let mut indices = Vec::with_capacity(2 * (segments as usize + 1));
    indices.push(0);
    indices.extend(1..=segments as u16);
    indices.push(apex);
    indices.extend(1..=segments as u16);

    ShapeMesh::from_parts(positions, indices)
        .expect("cone indices stay within the generated positions")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn positions_are_center_ring_apex() {
        let mesh = cone(8);
        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.positions()[0], [0.0, 0.0, 0.0]);
        assert_eq!(mesh.positions()[9], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn ring_lies_on_the_unit_circle() {
        let mesh = cone(16);
        for p in &mesh.positions()[1..17] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
            assert_eq!(p[2], 0.0);
        }
    }

    #[test]
    fn first_ring_vertex_sits_at_angle_zero() {
        let mesh = cone(4);
        let p = mesh.positions()[1];
        assert!((p[0] - 1.0).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
    }

    // ── halves ────────────────────────────────────────────────────────────

    #[test]
    fn halves_each_carry_segments_plus_one_indices() {
        let mesh = cone(350);
        let [base, flank] = mesh.halves();
        assert_eq!(base.len(), 351);
        assert_eq!(flank.len(), 351);
        assert_eq!(base.end, flank.start);
    }

    #[test]
    fn base_fan_anchors_on_the_center_vertex() {
        let mesh = cone(6);
        let [base, _] = mesh.halves();
        assert_eq!(mesh.indices()[base.start as usize], 0);
    }

    #[test]
    fn flank_fan_anchors_on_the_apex_vertex() {
        let mesh = cone(6);
        let [_, flank] = mesh.halves();
        let apex = (mesh.vertex_count() - 1) as u16;
        assert_eq!(mesh.indices()[flank.start as usize], apex);
    }

    #[test]
    fn both_fans_walk_the_same_ring() {
        let mesh = cone(5);
        let [base, flank] = mesh.halves();
        let ring_a = &mesh.indices()[base.start as usize + 1..base.end as usize];
        let ring_b = &mesh.indices()[flank.start as usize + 1..flank.end as usize];
        assert_eq!(ring_a, ring_b);
    }

    // ── segment bounds ────────────────────────────────────────────────────

    #[test]
    fn zero_segments_falls_back_to_the_default() {
        let mesh = cone(0);
        assert_eq!(mesh.vertex_count() as u32, DEFAULT_CONE_SEGMENTS + 2);
    }

    #[test]
    fn oversized_request_is_capped() {
        let mesh = cone(u32::MAX);
        assert_eq!(mesh.vertex_count() as u32, MAX_CONE_SEGMENTS + 2);
    }
}
