/// The number of vertices along each filament of a template mesh, clamped to
/// [MIN](Self::MIN)..=[MAX](Self::MAX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentCount(u32);

impl SegmentCount {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 64;
    pub const DEFAULT: u32 = 8;

    /// Clamp a requested segment count into the supported range.
    #[inline]
    pub const fn new(requested: u32) -> Self {
        if requested < Self::MIN {
            Self(Self::MIN)
        } else if requested > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(requested)
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of line segments along one filament.
    #[inline]
    pub const fn lines(self) -> u32 {
        self.0 - 1
    }
}

impl Default for SegmentCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<u32> for SegmentCount {
    #[inline]
    fn from(requested: u32) -> Self {
        Self::new(requested)
    }
}

impl From<SegmentCount> for u32 {
    #[inline]
    fn from(value: SegmentCount) -> Self {
        value.0
    }
}

impl std::fmt::Display for SegmentCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
