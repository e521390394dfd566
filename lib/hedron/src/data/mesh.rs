pub mod primitive;

use primitive::{
    attribute::{Normal, Position},
    Mode,
};

/// Read access to the per-vertex data of a mesh.
///
/// `positions()[i]` and `normals()[i]` describe the same vertex. Implementors *should* return
/// slices of equal length; consumers are expected to check.
pub trait SourceMesh {
    fn positions(&self) -> &[Position];
    fn normals(&self) -> &[Normal];

    /// The number of vertices, as determined by the position attribute.
    #[inline]
    fn vertex_count(&self) -> usize {
        self.positions().len()
    }
}

impl<M: SourceMesh + ?Sized> SourceMesh for &M {
    #[inline]
    fn positions(&self) -> &[Position] {
        (**self).positions()
    }

    #[inline]
    fn normals(&self) -> &[Normal] {
        (**self).normals()
    }
}

/// A set of vertices with position & normal attributes, optionally joined into primitives by an
/// index list.
///
/// # Characteristics
///
/// * If `indices` is empty, the primitives are equivalent to indices `[0, 1, 2, 3, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    mode: Mode,
    positions: Vec<Position>,
    normals: Vec<Normal>,
    indices: Vec<u32>,
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new(Mode::Triangles)
    }
}

impl MeshData {
    #[inline]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Construct a mesh from parallel attribute lists.
    pub fn from_attributes(
        mode: Mode,
        positions: Vec<Position>,
        normals: Vec<Normal>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            mode,
            positions,
            normals,
            indices,
        }
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, position: Position, normal: Normal) -> usize {
        let index = self.positions.len();
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    pub fn push_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl SourceMesh for MeshData {
    #[inline]
    fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    fn normals(&self) -> &[Normal] {
        &self.normals
    }
}
