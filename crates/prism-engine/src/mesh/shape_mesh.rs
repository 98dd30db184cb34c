use std::ops::Range;

use anyhow::{bail, ensure, Result};

/// Immutable vertex/index geometry for one shape.
///
/// Invariants (validated in [`ShapeMesh::from_parts`]):
/// - the index count is even, so the stream splits into two equal halves
/// - every index, in both halves, references an existing position
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    positions: Vec<[f32; 3]>,
    indices: Vec<u16>,
}

impl ShapeMesh {
    /// Builds a mesh from raw parts, validating the half-draw invariants.
    pub fn from_parts(positions: Vec<[f32; 3]>, indices: Vec<u16>) -> Result<Self> {
        ensure!(
            indices.len() % 2 == 0,
            "index count {} cannot split into two draw halves",
            indices.len()
        );

        let vertex_count = positions.len();
        if let Some(&bad) = indices.iter().find(|&&i| usize::from(i) >= vertex_count) {
            bail!("index {bad} out of range for {vertex_count} positions");
        }

        Ok(Self { positions, indices })
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the two index ranges drawn per frame, in draw order.
    ///
    /// The first half starts at 0, the second at the half offset; together
    /// they cover the whole index stream.
    pub fn halves(&self) -> [Range<u32>; 2] {
        let half = (self.indices.len() / 2) as u32;
        [0..half, half..half * 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> ShapeMesh {
        let positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        ShapeMesh::from_parts(positions, vec![0, 1, 2, 3]).unwrap()
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn odd_index_count_is_rejected() {
        let err = ShapeMesh::from_parts(vec![[0.0; 3]; 3], vec![0, 1, 2]).unwrap_err();
        assert!(err.to_string().contains("two draw halves"));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = ShapeMesh::from_parts(vec![[0.0; 3]; 2], vec![0, 5]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn out_of_range_index_in_the_second_half_is_rejected() {
        let positions = vec![[0.0; 3]; 4];
        assert!(ShapeMesh::from_parts(positions, vec![0, 1, 2, 9]).is_err());
    }

    #[test]
    fn empty_mesh_is_valid() {
        let mesh = ShapeMesh::from_parts(Vec::new(), Vec::new()).unwrap();
        assert_eq!(mesh.index_count(), 0);
        let [a, b] = mesh.halves();
        assert!(a.is_empty() && b.is_empty());
    }

    // ── halves ────────────────────────────────────────────────────────────

    #[test]
    fn halves_split_the_stream_at_the_midpoint() {
        let mesh = quad();
        let [first, second] = mesh.halves();
        assert_eq!(first, 0..2);
        assert_eq!(second, 2..4);
    }

    #[test]
    fn halves_cover_every_index_exactly_once() {
        let mesh = quad();
        let [first, second] = mesh.halves();
        assert_eq!(first.len() + second.len(), mesh.index_count());
        assert_eq!(first.end, second.start);
        assert_eq!(second.end as usize, mesh.index_count());
    }
}
