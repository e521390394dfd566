use hedron::BufferError;

/// Errors related to preparing [WigTemplates](crate::WigTemplate).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Attempted to initialize a template which already holds a foundation")]
    AlreadyInitialized,
    #[error("Attempted to build a template mesh before the template was initialized")]
    NotInitialized,
    #[error("Source mesh attributes are misaligned: {positions} positions, {normals} normals")]
    AttributeLengthMismatch { positions: usize, normals: usize },
    #[error("Cannot encode a foundation from zero vertices")]
    EmptyFoundation,
    #[error("Cannot encode {0} vertices; a foundation is at most u32::MAX texels wide")]
    FoundationTooWide(usize),
    #[error("Template mesh needs {vertices} vertices, but its largest representable index is {max}")]
    IndexOverflow { vertices: usize, max: usize },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
