//! Template meshes: line-list grids instanced once per filament.
//!
//! For `F` filaments of `S` segments, vertex `i·S + j` sits at `(i/F, j/S, 0)` and is joined to
//! vertex `i·S + j + 1` for every `j < S - 1`. No line crosses from one filament to the next.

mod segment;
pub use segment::*;

use hedron::{
    primitive::attribute::{AttributeComponent, AttributeComponentType, AttributeType},
    Buffer, BufferLayout, BufferType, Mode, Position,
};
use nalgebra::point;
use wig_common::ArrayIndex;

use crate::Error;

/// A line-list mesh of fixed grid topology.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMesh<Idx: ArrayIndex = u32> {
    filaments: usize,
    segments: SegmentCount,
    vertices: Vec<Position>,
    indices: Vec<Idx>,
}

impl<Idx: ArrayIndex> TemplateMesh<Idx> {
    pub const NAME: &'static str = "Wig Template";

    /// Construct the template grid for `filament_count` filaments.
    ///
    /// # Errors
    /// * `filament_count == 0`; there's no foundation to build against
    /// * the largest vertex index doesn't fit in `Idx`
    #[tracing::instrument(skip_all, fields(filaments = filament_count, segments = segments.get()))]
    pub fn build(filament_count: usize, segments: SegmentCount) -> Result<Self, Error> {
        if filament_count == 0 {
            return Err(Error::NotInitialized);
        }

        let length = segments.get() as usize;
        let overflow = |vertices| Error::IndexOverflow {
            vertices,
            max: Idx::max_index(),
        };
        let vcount = filament_count
            .checked_mul(length)
            .ok_or_else(|| overflow(usize::MAX))?;
        if vcount - 1 > Idx::max_index() {
            return Err(overflow(vcount));
        }
        let index = |i: usize| Idx::from_index(i).ok_or_else(|| overflow(vcount));

        let mut vertices = Vec::with_capacity(vcount);
        let mut indices = Vec::with_capacity(filament_count * (length - 1) * 2);

        for i1 in 0..filament_count {
            let u = i1 as f32 / filament_count as f32;

            for i2 in 0..length {
                let v = i2 as f32 / length as f32;
                vertices.push(point![u, v, 0.0]);
            }

            for i2 in 0..length - 1 {
                let i = i1 * length + i2;
                indices.push(index(i)?);
                indices.push(index(i + 1)?);
            }
        }

        tracing::debug!(
            vertices = vertices.len(),
            indices = indices.len(),
            "built template mesh"
        );
        Ok(Self {
            filaments: filament_count,
            segments,
            vertices,
            indices,
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        Mode::Lines
    }

    #[inline]
    pub fn filament_count(&self) -> usize {
        self.filaments
    }

    #[inline]
    pub fn segment_count(&self) -> SegmentCount {
        self.segments
    }

    #[inline]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over each line as a pair of vertex indices.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = (Idx, Idx)> + '_ {
        self.indices.chunks_exact(2).map(|l| (l[0], l[1]))
    }
}

impl<Idx: ArrayIndex + AttributeComponentType> TemplateMesh<Idx> {
    /// Pack the mesh into GPU-ready buffers, discarding the CPU-side copy.
    pub fn into_buffers(self) -> Result<MeshBuffers, Error> {
        let mut vertices = Buffer::with_capacity(
            BufferLayout::new(BufferType::Array, AttributeType::Vec3, AttributeComponent::F32),
            self.vertices.len(),
        );
        for v in &self.vertices {
            vertices.push_point3(v);
        }

        let mut indices = Buffer::with_capacity(
            BufferLayout::new(BufferType::ElementArray, AttributeType::Scalar, Idx::COMPONENT),
            self.indices.len(),
        );
        for i in self.indices {
            indices.push_index(i)?;
        }

        Ok(MeshBuffers {
            mode: Mode::Lines,
            filaments: self.filaments,
            segments: self.segments,
            vertices,
            indices,
        })
    }
}

/// A [TemplateMesh] after upload: only the packed buffers remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshBuffers {
    pub mode: Mode,
    pub filaments: usize,
    pub segments: SegmentCount,
    pub vertices: Buffer,
    pub indices: Buffer,
}

impl MeshBuffers {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}
