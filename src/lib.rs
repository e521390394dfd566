//! Preparation of filament assets for instanced hair/fur rendering.
//!
//! A source mesh is reduced to its unique vertices, which are packed into a two-row float
//! [FoundationImage] (one column per filament). A [TemplateMesh] of line strips, one per filament,
//! is then built against the foundation's width and instanced by the renderer.
//!
//! [WigTemplate] owns both and enforces their lifecycle; the free functions in [dedup],
//! [foundation], and [template] are the same steps as pure transforms.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod asset;
pub mod dedup;
mod error;
pub mod foundation;
pub mod template;

pub use asset::*;
pub use error::*;

pub use dedup::{deduplicate, deduplicate_mesh, VertexList};
pub use foundation::FoundationImage;
pub use template::{MeshBuffers, SegmentCount, TemplateMesh};

pub use hedron::{MeshData, Normal, Position, SourceMesh};
