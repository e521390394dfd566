use wig_common::ArrayIndex;

/// Index range checks used when packing mesh index buffers.
#[test]
fn narrow_index_range() {
    assert_eq!(u8::max_index(), 255);
    assert_eq!(u16::max_index(), 65_535);
    assert_eq!(u16::from_index(65_535), Some(65_535));
    assert_eq!(u16::from_index(65_536), None);
    assert_eq!(u32::from_index(0), Some(0));
}

#[test]
fn usize_is_unbounded() {
    assert_eq!(usize::max_index(), usize::MAX);
    assert_eq!(usize::from_index(usize::MAX), Some(usize::MAX));
}
