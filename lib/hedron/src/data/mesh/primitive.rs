pub mod attribute;

/// The method by which vertices are interpreted as topological primitives.
///
/// Discriminants match the glTF `mesh.primitive.mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}
