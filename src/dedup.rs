//! Vertex deduplication.
//!
//! Two vertices are duplicates iff their positions are *exactly* equal, component by component.
//! There is no epsilon: positions differing only in their least-significant bit stay distinct,
//! `-0.0` and `0.0` are merged, and a position containing NaN never matches anything.

use hedron::{Normal, Position, SourceMesh};

use crate::Error;

/// Parallel lists of unique vertex positions & their normals, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexList {
    positions: Vec<Position>,
    normals: Vec<Normal>,
}

impl VertexList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The position & normal of the `i`th unique vertex.
    #[inline]
    pub fn get(&self, i: usize) -> Option<(&Position, &Normal)> {
        Some((self.positions.get(i)?, self.normals.get(i)?))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Position, &Normal)> + '_ {
        self.positions.iter().zip(self.normals.iter())
    }

    /// Whether `position` is already present.
    #[inline]
    pub fn contains(&self, position: &Position) -> bool {
        self.positions.iter().any(|p| p == position)
    }

    /// Append a vertex without checking for duplicates.
    pub(crate) fn push_unchecked(&mut self, position: Position, normal: Normal) {
        self.positions.push(position);
        self.normals.push(normal);
    }
}

impl SourceMesh for VertexList {
    #[inline]
    fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    fn normals(&self) -> &[Normal] {
        &self.normals
    }
}

/// Reduce parallel position/normal lists to their first-occurring unique positions.
///
/// Runs in O(n²); intended for offline preparation of small to medium meshes.
///
/// # Errors
/// * `positions.len() != normals.len()`
#[tracing::instrument(skip_all, fields(vertices = positions.len()))]
pub fn deduplicate(positions: &[Position], normals: &[Normal]) -> Result<VertexList, Error> {
    if positions.len() != normals.len() {
        return Err(Error::AttributeLengthMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let mut res = VertexList::new();
    for (p, n) in positions.iter().zip(normals) {
        if !res.contains(p) {
            res.push_unchecked(*p, *n);
        }
    }

    tracing::debug!(unique = res.len(), "deduplicated vertices");
    Ok(res)
}

/// [deduplicate] the vertices of a [SourceMesh].
#[inline]
pub fn deduplicate_mesh<M: SourceMesh + ?Sized>(mesh: &M) -> Result<VertexList, Error> {
    deduplicate(mesh.positions(), mesh.normals())
}
