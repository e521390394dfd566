use hedron::{primitive::attribute::AttributeComponentType, SourceMesh};
use wig_common::ArrayIndex;

use crate::{
    dedup::deduplicate_mesh,
    foundation::FoundationImage,
    template::{MeshBuffers, SegmentCount, TemplateMesh},
    Error,
};

/// Lifecycle of a [WigTemplate].
///
/// `Uninitialized → Initialized → MeshBuilt`; a built mesh may be rebuilt or uploaded any number of
/// times without leaving `MeshBuilt`, and nothing returns to `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateState {
    /// No foundation yet.
    Uninitialized,
    /// Foundation present; no template mesh built yet.
    Initialized,
    /// Foundation present & template mesh built (and possibly uploaded).
    MeshBuilt,
}

/// A foundation image together with the template mesh built against it.
///
/// `Idx` is the index type of the template mesh; narrow types bound the number of filaments.
#[derive(Debug, Clone)]
pub struct WigTemplate<Idx: ArrayIndex = u32> {
    segments: SegmentCount,
    foundation: Option<FoundationImage>,
    mesh: Option<TemplateMesh<Idx>>,
    built: bool,
}

impl<Idx: ArrayIndex> Default for WigTemplate<Idx> {
    fn default() -> Self {
        Self {
            segments: SegmentCount::default(),
            foundation: None,
            mesh: None,
            built: false,
        }
    }
}

impl WigTemplate {
    /// Construct an uninitialized template with the default segment count.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_segment_count(segments: SegmentCount) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }
}

impl<Idx: ArrayIndex> WigTemplate<Idx> {

    pub fn state(&self) -> TemplateState {
        match (&self.foundation, self.built) {
            (None, _) => TemplateState::Uninitialized,
            (Some(_), false) => TemplateState::Initialized,
            (Some(_), true) => TemplateState::MeshBuilt,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.foundation.is_some()
    }

    #[inline]
    pub fn segment_count(&self) -> SegmentCount {
        self.segments
    }

    /// The number of filaments; the width of the foundation, if there is one.
    #[inline]
    pub fn filament_count(&self) -> Option<usize> {
        self.foundation.as_ref().map(FoundationImage::width)
    }

    #[inline]
    pub fn foundation(&self) -> Option<&FoundationImage> {
        self.foundation.as_ref()
    }

    /// The CPU-side template mesh; `None` before initialization & after upload.
    #[inline]
    pub fn mesh(&self) -> Option<&TemplateMesh<Idx>> {
        self.mesh.as_ref()
    }

    /// Deduplicate & encode `source` into this template's foundation, then build the initial
    /// template mesh.
    ///
    /// Initialization happens once. On failure, `self` is left unchanged.
    ///
    /// # Errors
    /// * [Error::AlreadyInitialized] if `self` already holds a foundation
    /// * any error from deduplication, encoding, or building the mesh
    #[tracing::instrument(skip_all, fields(vertices = source.vertex_count()))]
    pub fn initialize<M: SourceMesh + ?Sized>(
        &mut self,
        source: &M,
    ) -> Result<&TemplateMesh<Idx>, Error> {
        if self.foundation.is_some() {
            tracing::error!(
                filaments = self.filament_count(),
                "already initialized; refusing to overwrite foundation"
            );
            return Err(Error::AlreadyInitialized);
        }

        let vertices = deduplicate_mesh(source)?;
        let foundation = FoundationImage::encode(&vertices)?;
        let mesh = TemplateMesh::build(foundation.width(), self.segments)?;

        tracing::debug!(
            filaments = foundation.width(),
            segments = self.segments.get(),
            "initialized template"
        );
        self.foundation = Some(foundation);
        Ok(self.commit_mesh(mesh))
    }

    /// Replace the template mesh with one freshly built from the foundation width & current
    /// segment count.
    ///
    /// # Errors
    /// * [Error::NotInitialized] if there's no foundation yet
    pub fn rebuild_mesh(&mut self) -> Result<&TemplateMesh<Idx>, Error> {
        let mesh = self.build_mesh(self.segments)?;
        Ok(self.commit_mesh(mesh))
    }

    /// Clamp & store a new segment count, rebuilding the mesh if initialized and the clamped value
    /// differs from the current one (or the mesh has been uploaded). Returns the stored value.
    ///
    /// If the rebuild fails, neither the segment count nor the mesh change.
    pub fn set_segment_count(&mut self, requested: u32) -> Result<SegmentCount, Error> {
        let segments = SegmentCount::new(requested);
        if segments == self.segments && self.mesh.is_some() {
            return Ok(segments);
        }
        if self.is_initialized() {
            let mesh = self.build_mesh(segments)?;
            self.commit_mesh(mesh);
        }
        self.segments = segments;
        Ok(segments)
    }

    fn build_mesh(&self, segments: SegmentCount) -> Result<TemplateMesh<Idx>, Error> {
        let filaments = self.filament_count().ok_or(Error::NotInitialized)?;
        tracing::trace!(filaments, segments = segments.get(), "building template mesh");
        TemplateMesh::build(filaments, segments)
    }

    fn commit_mesh(&mut self, mesh: TemplateMesh<Idx>) -> &TemplateMesh<Idx> {
        self.built = true;
        self.mesh.insert(mesh)
    }
}

impl<Idx: ArrayIndex + AttributeComponentType> WigTemplate<Idx> {
    /// Upload the template mesh, dropping its CPU-side copy. The template stays
    /// [TemplateState::MeshBuilt]. Returns `None` if no mesh has been built since the last upload.
    pub fn take_mesh_buffers(&mut self) -> Result<Option<MeshBuffers>, Error> {
        self.mesh.take().map(TemplateMesh::into_buffers).transpose()
    }
}
