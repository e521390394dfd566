//! Foundation images: unique vertices packed one per column into a two-row float texture.
//!
//! | row | texel `i`               |
//! |-----|-------------------------|
//! | 0   | `(x, y, z, 1)`          |
//! | 1   | `(nx, ny, nz, 0)`       |
//!
//! The alpha channel lets a consumer tell positions from normals.

mod descriptor;
pub use descriptor::*;

use hedron::{Buffer, Normal, Position, Rgba};
use nalgebra::{point, vector};

use crate::{dedup::VertexList, Error};

/// Number of texel rows in a foundation image.
pub const FOUNDATION_HEIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoundationRow {
    Position = 0,
    Normal = 1,
}

/// The encoded position/normal texture serving as per-filament root data.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationImage {
    width: u32,
    /// Row-major; row 0 first.
    texels: Vec<Rgba>,
}

impl FoundationImage {
    pub const NAME: &'static str = "Wig Foundation";

    /// Pack each vertex of `vertices` into its own column.
    ///
    /// # Errors
    /// * `vertices` is empty
    /// * `vertices.len()` exceeds the maximum texture width
    #[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
    pub fn encode(vertices: &VertexList) -> Result<Self, Error> {
        if vertices.is_empty() {
            return Err(Error::EmptyFoundation);
        }
        let width =
            u32::try_from(vertices.len()).map_err(|_| Error::FoundationTooWide(vertices.len()))?;

        let mut texels = Vec::with_capacity(vertices.len() * FOUNDATION_HEIGHT);
        texels.extend(vertices.iter().map(|(p, _)| vector![p.x, p.y, p.z, 1.0]));
        texels.extend(vertices.iter().map(|(_, n)| vector![n.x, n.y, n.z, 0.0]));

        tracing::debug!(width, "encoded foundation");
        Ok(Self { width, texels })
    }

    /// The number of columns, which is also the number of filaments.
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        FOUNDATION_HEIGHT
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    pub fn descriptor(&self) -> TextureDescriptor {
        TextureDescriptor::exact(self.width, FOUNDATION_HEIGHT as u32)
    }

    /// All texels, row-major.
    #[inline]
    pub fn texels(&self) -> &[Rgba] {
        &self.texels
    }

    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Option<&Rgba> {
        if x >= self.width() || y >= FOUNDATION_HEIGHT {
            return None;
        }
        self.texels.get(y * self.width() + x)
    }

    #[inline]
    pub fn row(&self, row: FoundationRow) -> &[Rgba] {
        let start = row as usize * self.width();
        &self.texels[start..start + self.width()]
    }

    /// The position stored in column `i`.
    pub fn position(&self, i: usize) -> Option<Position> {
        self.texel(i, FoundationRow::Position as usize)
            .map(|t| point![t.x, t.y, t.z])
    }

    /// The normal stored in column `i`.
    pub fn normal(&self, i: usize) -> Option<Normal> {
        self.texel(i, FoundationRow::Normal as usize).map(|t| t.xyz())
    }

    /// Recover the encoded vertices.
    pub fn decode(&self) -> VertexList {
        let mut res = VertexList::with_capacity(self.width());
        for (p, n) in self
            .row(FoundationRow::Position)
            .iter()
            .zip(self.row(FoundationRow::Normal))
        {
            res.push_unchecked(point![p.x, p.y, p.z], n.xyz());
        }
        res
    }

    /// Pack the texels as little-endian RGBA32F, ready to be uploaded.
    pub fn to_buffer(&self) -> Buffer {
        let mut buf = Buffer::with_capacity(self.descriptor().format.layout(), self.texels.len());
        for t in &self.texels {
            buf.push_vector4(t);
        }
        buf
    }
}
