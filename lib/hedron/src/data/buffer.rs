use std::ops::Deref;

use nalgebra::{Point3, Vector4};
use wig_common::ArrayIndex;

use crate::primitive::attribute::{AttributeComponent, AttributeType};

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("cannot pack index {0} as {1:?}")]
    IndexComponent(usize, AttributeComponent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Vertex attribute data
    Array,
    /// Index data
    ElementArray,
    /// Texel data
    Texture,
}

/// How the elements of a [Buffer] are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferLayout {
    pub target: BufferType,
    pub ty: AttributeType,
    pub comp: AttributeComponent,
}

impl BufferLayout {
    #[inline]
    pub const fn new(target: BufferType, ty: AttributeType, comp: AttributeComponent) -> Self {
        Self { target, ty, comp }
    }

    /// Size of a single element, in bytes.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.ty.size_bytes(self.comp)
    }
}

/// A little-endian data blob which can be sent to the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    layout: BufferLayout,
    data: Vec<u8>,
}

impl Buffer {
    #[inline]
    pub fn new(layout: BufferLayout) -> Self {
        Self {
            layout,
            data: Vec::new(),
        }
    }

    /// Construct an empty buffer with room for `count` elements.
    #[inline]
    pub fn with_capacity(layout: BufferLayout, count: usize) -> Self {
        Self {
            layout,
            data: Vec::with_capacity(count * layout.stride()),
        }
    }

    #[inline]
    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The number of whole elements in this buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.layout.stride()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn push_f32(&mut self, v: f32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn push_point3(&mut self, p: &Point3<f32>) {
        debug_assert_eq!(self.layout.ty, AttributeType::Vec3);
        for c in p.iter() {
            self.push_f32(*c);
        }
    }

    pub fn push_vector4(&mut self, v: &Vector4<f32>) {
        debug_assert_eq!(self.layout.ty, AttributeType::Vec4);
        for c in v.iter() {
            self.push_f32(*c);
        }
    }

    /// Append an index, narrowed to this buffer's component type.
    pub fn push_index<Idx: ArrayIndex>(&mut self, index: Idx) -> Result<(), BufferError> {
        let wide: usize = index.as_();
        let comp = self.layout.comp;
        match comp {
            AttributeComponent::U8 => {
                let v = u8::try_from(wide).map_err(|_| BufferError::IndexComponent(wide, comp))?;
                self.data.push(v);
            }
            AttributeComponent::U16 => {
                let v = u16::try_from(wide).map_err(|_| BufferError::IndexComponent(wide, comp))?;
                self.data.extend_from_slice(&v.to_le_bytes());
            }
            AttributeComponent::U32 => {
                let v = u32::try_from(wide).map_err(|_| BufferError::IndexComponent(wide, comp))?;
                self.data.extend_from_slice(&v.to_le_bytes());
            }
            _ => return Err(BufferError::IndexComponent(wide, comp)),
        }
        Ok(())
    }
}

impl Deref for Buffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
