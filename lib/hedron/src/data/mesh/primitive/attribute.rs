use nalgebra::{Point3, Vector3, Vector4};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Normal,
    Texcoord(u32),
    Color(u32),
}

/// The inner components of an [AttributeType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeComponent {
    U8,
    U16,
    U32,
    I8,
    I16,
    F32,
}

impl AttributeComponent {
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::U8 => size_of::<u8>(),
            AttributeComponent::U16 => size_of::<u16>(),
            AttributeComponent::U32 => size_of::<u32>(),
            AttributeComponent::I8 => size_of::<i8>(),
            AttributeComponent::I16 => size_of::<i16>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }
}

/// The shape of a value stored in a vertex or texel stream.
///
/// Values taken from the [glTF specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Scalar => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    pub const fn size_bytes(self, comp: AttributeComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

/// Maps a primitive type to its [AttributeComponent].
pub trait AttributeComponentType {
    const COMPONENT: AttributeComponent;
}

macro_rules! impl_attr_comp_type {
    ($Target:ident: $comp:expr) => {
        impl AttributeComponentType for $Target {
            const COMPONENT: AttributeComponent = $comp;
        }
    };
}

impl_attr_comp_type!(u8: AttributeComponent::U8);
impl_attr_comp_type!(u16: AttributeComponent::U16);
impl_attr_comp_type!(u32: AttributeComponent::U32);
impl_attr_comp_type!(i8: AttributeComponent::I8);
impl_attr_comp_type!(i16: AttributeComponent::I16);
impl_attr_comp_type!(f32: AttributeComponent::F32);

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;
/// A single RGBA texel.
pub type Rgba = Vector4<f32>;

// packed buffers assume nalgebra's types are laid out as plain float arrays
static_assertions::const_assert_eq!(
    std::mem::size_of::<Position>(),
    AttributeType::Vec3.size_bytes(AttributeComponent::F32)
);
static_assertions::const_assert_eq!(
    std::mem::size_of::<Normal>(),
    AttributeType::Vec3.size_bytes(AttributeComponent::F32)
);
static_assertions::const_assert_eq!(
    std::mem::size_of::<Rgba>(),
    AttributeType::Vec4.size_bytes(AttributeComponent::F32)
);
