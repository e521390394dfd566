use clap::Parser;
use wig::{SegmentCount, SourceMesh, WigTemplate};

mod cli;
mod export;

use cli::Cli;

#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Obj(#[from] hedron::de::obj::ObjError),
    #[error(transparent)]
    Dds(#[from] ddsfile::Error),
    #[error(transparent)]
    Wig(#[from] wig::Error),
}

fn bake(cli: &Cli) -> Result<(), BakeError> {
    let source = hedron::de::obj::load(&cli.input)?;
    tracing::info!(
        path = ?cli.input,
        vertices = source.vertex_count(),
        "loaded source mesh"
    );

    let mut template = WigTemplate::with_segment_count(SegmentCount::new(cli.segments));
    let mesh = template.initialize(&source)?;
    tracing::info!(
        filaments = mesh.filament_count(),
        segments = mesh.segment_count().get(),
        vertices = mesh.vertex_count(),
        lines = mesh.lines().len(),
        "built template mesh"
    );

    if let Some(path) = &cli.template_out {
        export::write_template_obj(path, mesh)?;
        tracing::info!(?path, "wrote template mesh");
    }

    if let Some(foundation) = template.foundation() {
        let path = cli.foundation_path();
        export::write_foundation_dds(&path, foundation)?;
        tracing::info!(?path, width = foundation.width(), "wrote foundation");
    }

    if let Some(buffers) = template.take_mesh_buffers()? {
        tracing::debug!(
            vertex_bytes = buffers.vertices.as_slice().len(),
            index_bytes = buffers.indices.as_slice().len(),
            "packed template buffers"
        );
    }

    Ok(())
}

pub fn main() -> Result<(), BakeError> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);
    bake(&cli).inspect_err(|e| tracing::error!("{e}"))
}
