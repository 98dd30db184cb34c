use super::ShapeMesh;

/// Corner positions of the half-unit cube: front ring then back ring, each
/// ring enumerated in the same top-left to bottom-left order.
const CORNERS: [[f32; 3]; 8] = [
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, -0.5, -0.5],
];

/// Builds the stock cube: eight corners indexed in enumeration order.
///
/// The two index halves are the front and back rings, so the halved draw
/// renders one four-vertex strip per ring. Both rings wind clockwise as seen
/// from +Z.
pub fn cube() -> ShapeMesh {
    let indices = (0..CORNERS.len() as u16).collect();
    ShapeMesh::from_parts(CORNERS.to_vec(), indices)
        .expect("cube corner table matches its index stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_corners_indexed_in_order() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.indices(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn halves_are_the_front_and_back_rings() {
        let mesh = cube();
        let [front, back] = mesh.halves();
        assert_eq!((front.start, front.end), (0, 4));
        assert_eq!((back.start, back.end), (4, 8));
    }

    #[test]
    fn rings_sit_on_opposite_z_planes() {
        let mesh = cube();
        for p in &mesh.positions()[0..4] {
            assert_eq!(p[2], 0.5);
        }
        for p in &mesh.positions()[4..8] {
            assert_eq!(p[2], -0.5);
        }
    }

    #[test]
    fn corners_span_the_half_unit_cube() {
        let mesh = cube();
        for p in mesh.positions() {
            for c in p {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }
}
