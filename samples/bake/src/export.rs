use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use wig::{FoundationImage, TemplateMesh};

use crate::BakeError;

/// Write a foundation as an uncompressed `R32G32B32A32_FLOAT` DDS texture, row 0 first.
#[tracing::instrument(skip(foundation), fields(width = foundation.width()))]
pub fn write_foundation_dds(path: &Path, foundation: &FoundationImage) -> Result<(), BakeError> {
    let desc = foundation.descriptor();
    let params = NewDxgiParams {
        height: desc.height,
        width: desc.width,
        depth: None,
        format: DxgiFormat::R32G32B32A32_Float,
        mipmap_levels: Some(desc.mip_levels),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Straight,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = foundation.to_buffer().into_bytes();
    dds.write(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// Write a template mesh as a Wavefront OBJ made of `l` (line) elements.
#[tracing::instrument(skip(mesh), fields(vertices = mesh.vertex_count()))]
pub fn write_template_obj(path: &Path, mesh: &TemplateMesh) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "o {}", mesh.name())?;
    for v in mesh.vertices() {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    // OBJ indices are 1-based
    for (a, b) in mesh.lines() {
        writeln!(out, "l {} {}", a + 1, b + 1)?;
    }
    out.flush()
}
