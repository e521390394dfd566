use hedron::{
    primitive::attribute::{AttributeComponent, AttributeType},
    BufferLayout, BufferType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Four 32-bit float channels.
    Rgba32Float,
}

impl TextureFormat {
    pub const fn layout(self) -> BufferLayout {
        match self {
            TextureFormat::Rgba32Float => BufferLayout::new(
                BufferType::Texture,
                AttributeType::Vec4,
                AttributeComponent::F32,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Nearest texel; no interpolation.
    Point,
    Bilinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    Clamp,
    Repeat,
}

/// How a texture is to be created & sampled by its consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub filter: FilterMode,
    pub wrap: WrapMode,
    pub mip_levels: u32,
}

impl TextureDescriptor {
    /// Point-sampled, clamped, single-mip float texture; every texel reads back exactly as written.
    pub const fn exact(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: TextureFormat::Rgba32Float,
            filter: FilterMode::Point,
            wrap: WrapMode::Clamp,
            mip_levels: 1,
        }
    }
}
