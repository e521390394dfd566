//! # See Also
//!
//! * [SourceMesh]
//! * [Buffer]

mod buffer;
mod mesh;

pub use buffer::*;
pub use mesh::*;

pub use mesh::primitive::{
    attribute::{Normal, Position, Rgba},
    Mode,
};
