//! Mesh data shared between the `wig` asset tools: vertex attribute types, source mesh access,
//! and packed buffers ready for upload.

#[cfg(feature = "deserialize")]
pub mod de;

mod data;
pub use data::*;
