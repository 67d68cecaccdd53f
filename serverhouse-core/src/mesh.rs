//! Unit cube mesh drawn by the WebGL2 backend.

/// Cube spanning `[-1, 1]` on every axis, four vertices per face so that
/// each face gets its own normal and texture coordinates.
pub struct CubeMesh;

impl CubeMesh {
    pub const FACES: usize = 6;
    pub const VERTEX_COUNT: usize = 24;
    pub const INDEX_COUNT: usize = 36;

    /// xyz per vertex; faces in order front, back, top, bottom, right, left.
    #[rustfmt::skip]
    pub const POSITIONS: [f32; 72] = [
        -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,   1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,
        -1.0, -1.0, -1.0,  -1.0,  1.0, -1.0,   1.0,  1.0, -1.0,   1.0, -1.0, -1.0,
        -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,   1.0,  1.0,  1.0,   1.0,  1.0, -1.0,
        -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0,
         1.0, -1.0, -1.0,   1.0,  1.0, -1.0,   1.0,  1.0,  1.0,   1.0, -1.0,  1.0,
        -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,  -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,
    ];

    #[rustfmt::skip]
    pub const NORMALS: [f32; 72] = [
         0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,
         0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,
         0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,
         0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,
         1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,
        -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,
    ];

    #[rustfmt::skip]
    pub const TEX_COORDS: [f32; 48] = [
        0.0, 0.0,   1.0, 0.0,   1.0, 1.0,   0.0, 1.0,
        1.0, 0.0,   1.0, 1.0,   0.0, 1.0,   0.0, 0.0,
        0.0, 1.0,   0.0, 0.0,   1.0, 0.0,   1.0, 1.0,
        1.0, 1.0,   0.0, 1.0,   0.0, 0.0,   1.0, 0.0,
        1.0, 0.0,   1.0, 1.0,   0.0, 1.0,   0.0, 0.0,
        0.0, 0.0,   1.0, 0.0,   1.0, 1.0,   0.0, 1.0,
    ];

    /// Two triangles per face: `4f + [0, 1, 2, 0, 2, 3]`.
    pub const INDICES: [u16; 36] = Self::build_indices();

    const fn build_indices() -> [u16; 36] {
        let mut indices = [0u16; 36];
        let pattern = [0u16, 1, 2, 0, 2, 3];
        let mut face = 0;
        while face < Self::FACES {
            let mut k = 0;
            while k < 6 {
                indices[face * 6 + k] = (face * 4) as u16 + pattern[k];
                k += 1;
            }
            face += 1;
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lengths_agree() {
        assert_eq!(CubeMesh::POSITIONS.len(), CubeMesh::VERTEX_COUNT * 3);
        assert_eq!(CubeMesh::NORMALS.len(), CubeMesh::VERTEX_COUNT * 3);
        assert_eq!(CubeMesh::TEX_COORDS.len(), CubeMesh::VERTEX_COUNT * 2);
        assert_eq!(CubeMesh::INDICES.len(), CubeMesh::INDEX_COUNT);
    }

    #[test]
    fn indices_follow_face_pattern() {
        assert_eq!(&CubeMesh::INDICES[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&CubeMesh::INDICES[30..], &[20, 21, 22, 20, 22, 23]);
        assert!(CubeMesh::INDICES
            .iter()
            .all(|&i| (i as usize) < CubeMesh::VERTEX_COUNT));
    }

    #[test]
    fn vertices_lie_on_their_face_plane() {
        // Each vertex's position along its normal must be exactly 1
        for v in 0..CubeMesh::VERTEX_COUNT {
            let p = &CubeMesh::POSITIONS[v * 3..v * 3 + 3];
            let n = &CubeMesh::NORMALS[v * 3..v * 3 + 3];
            let dot: f32 = p.iter().zip(n).map(|(a, b)| a * b).sum();
            assert_eq!(dot, 1.0, "vertex {v} is off its face");
        }
    }

    #[test]
    fn normals_are_unit_axes() {
        for n in CubeMesh::NORMALS.chunks(3) {
            let len: f32 = n.iter().map(|c| c * c).sum();
            assert_eq!(len, 1.0);
        }
    }
}
