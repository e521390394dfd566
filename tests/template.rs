use hedron::{
    primitive::attribute::{AttributeComponent, AttributeType},
    BufferType, Mode,
};
use nalgebra::point;
use quickcheck_macros::quickcheck;
use wig::{Error, SegmentCount, TemplateMesh};

#[test]
fn segment_clamping() {
    assert_eq!(SegmentCount::new(0).get(), 3);
    assert_eq!(SegmentCount::new(1).get(), 3);
    assert_eq!(SegmentCount::new(3).get(), 3);
    assert_eq!(SegmentCount::new(10).get(), 10);
    assert_eq!(SegmentCount::new(64).get(), 64);
    assert_eq!(SegmentCount::new(1000).get(), 64);
    assert_eq!(SegmentCount::default().get(), 8);
    assert_eq!(SegmentCount::from(2).lines(), 2);
}

#[test]
fn grid_layout() {
    let mesh = TemplateMesh::<u32>::build(2, SegmentCount::new(4)).unwrap();
    assert_eq!(mesh.mode(), Mode::Lines);
    assert_eq!(mesh.name(), "Wig Template");
    assert_eq!(mesh.filament_count(), 2);
    assert_eq!(
        mesh.vertices(),
        &[
            point![0.0, 0.0, 0.0],
            point![0.0, 0.25, 0.0],
            point![0.0, 0.5, 0.0],
            point![0.0, 0.75, 0.0],
            point![0.5, 0.0, 0.0],
            point![0.5, 0.25, 0.0],
            point![0.5, 0.5, 0.0],
            point![0.5, 0.75, 0.0],
        ]
    );
    assert_eq!(mesh.indices(), &[0, 1, 1, 2, 2, 3, 4, 5, 5, 6, 6, 7]);
}

#[test]
fn clamped_before_building() {
    let low = TemplateMesh::<u32>::build(5, SegmentCount::new(1)).unwrap();
    assert_eq!(low.segment_count().get(), 3);
    assert_eq!(low.vertex_count(), 15);

    let high = TemplateMesh::<u32>::build(5, SegmentCount::new(1000)).unwrap();
    assert_eq!(high.segment_count().get(), 64);
    assert_eq!(high.vertex_count(), 320);
}

#[test]
fn no_filaments() {
    assert!(matches!(
        TemplateMesh::<u32>::build(0, SegmentCount::default()),
        Err(Error::NotInitialized)
    ));
}

#[test]
fn narrow_index_overflow() {
    // 1024 * 64 = 65536 vertices; the last index is 65535, which still fits
    assert!(TemplateMesh::<u16>::build(1024, SegmentCount::new(64)).is_ok());
    assert!(matches!(
        TemplateMesh::<u16>::build(1025, SegmentCount::new(64)),
        Err(Error::IndexOverflow {
            vertices: 65_600,
            max: 65_535
        })
    ));
    assert!(matches!(
        TemplateMesh::<u8>::build(100, SegmentCount::new(3)),
        Err(Error::IndexOverflow { .. })
    ));
}

#[test]
fn upload() {
    let mesh = TemplateMesh::<u16>::build(3, SegmentCount::new(5)).unwrap();
    let bufs = mesh.into_buffers().unwrap();
    assert_eq!(bufs.mode, Mode::Lines);
    assert_eq!(bufs.vertex_count(), 15);
    assert_eq!(bufs.index_count(), 24);

    let vl = bufs.vertices.layout();
    assert_eq!(vl.target, BufferType::Array);
    assert_eq!((vl.ty, vl.comp), (AttributeType::Vec3, AttributeComponent::F32));
    assert_eq!(bufs.vertices.as_slice().len(), 15 * 12);

    let il = bufs.indices.layout();
    assert_eq!(il.target, BufferType::ElementArray);
    assert_eq!(il.comp, AttributeComponent::U16);
    assert_eq!(bufs.indices.as_slice().len(), 24 * 2);
    assert_eq!(&bufs.indices[0..4], &[0, 0, 1, 0]);
}

#[quickcheck]
fn counts(filaments: u8, segments: u8) -> bool {
    let f = filaments as usize + 1;
    let s = SegmentCount::new(segments as u32);
    let n = s.get() as usize;
    let mesh = TemplateMesh::<u32>::build(f, s).unwrap();
    mesh.vertex_count() == f * n
        && mesh.index_count() == f * (n - 1) * 2
        && mesh.lines().len() == f * (n - 1)
}

#[quickcheck]
fn lines_stay_within_filaments(filaments: u8, segments: u8) -> bool {
    let f = filaments as usize % 32 + 1;
    let s = SegmentCount::new(segments as u32);
    let n = s.get();
    let mesh = TemplateMesh::<u32>::build(f, s).unwrap();
    let within = mesh.lines().all(|(a, b)| b == a + 1 && a / n == b / n);
    within
}
