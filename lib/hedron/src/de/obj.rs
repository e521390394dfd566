//! Utilities for reading [Wavefront OBJ](https://en.wikipedia.org/wiki/Wavefront_.obj_file) files
//! as [MeshData].
//!
//! # Notes
//!
//! * OBJ faces index positions & normals separately; these are re-indexed so that each vertex has
//!   exactly one position and one normal.
//! * Every model in the file is merged into a single triangle mesh, in file order.
//! * Materials are ignored.

use std::path::Path;

use nalgebra::{point, vector};

use crate::{primitive::attribute::AttributeUsage, MeshData, Mode, SourceMesh};

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error(transparent)]
    Load(#[from] tobj::LoadError),
    #[error("model {model:?} is missing its {attribute:?} attribute")]
    MissingAttribute {
        model: String,
        attribute: AttributeUsage,
    },
    #[error("merged mesh exceeds {} vertices", u32::MAX)]
    TooManyVertices,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load every model in an OBJ file into one [MeshData].
#[tracing::instrument(skip_all, fields(path = ?path.as_ref()))]
pub fn load(path: impl AsRef<Path>) -> Result<MeshData, ObjError> {
    let (models, _materials) = tobj::load_obj(path.as_ref(), &load_options())?;
    tracing::debug!(models = models.len(), "loaded OBJ document");
    merge_models(&models)
}

/// Merge already-parsed OBJ models into one [MeshData].
pub fn merge_models(models: &[tobj::Model]) -> Result<MeshData, ObjError> {
    let mut res = MeshData::new(Mode::Triangles);
    for model in models {
        let mesh = &model.mesh;
        let count = mesh.positions.len() / 3;
        if mesh.normals.len() != mesh.positions.len() {
            return Err(ObjError::MissingAttribute {
                model: model.name.clone(),
                attribute: AttributeUsage::Normal,
            });
        }
        tracing::trace!(
            name = model.name.as_str(),
            vertices = count,
            indices = mesh.indices.len(),
            "merging OBJ model"
        );

        let base = u32::try_from(res.vertex_count()).map_err(|_| ObjError::TooManyVertices)?;
        for (p, n) in mesh
            .positions
            .chunks_exact(3)
            .zip(mesh.normals.chunks_exact(3))
        {
            res.push_vertex(point![p[0], p[1], p[2]], vector![n[0], n[1], n[2]]);
        }
        for &i in &mesh.indices {
            res.push_index(base.checked_add(i).ok_or(ObjError::TooManyVertices)?);
        }
    }
    Ok(res)
}
