use nalgebra::{point, vector};
use quickcheck_macros::quickcheck;
use wig::{deduplicate, deduplicate_mesh, Error, Normal, Position, SourceMesh};

fn attrs(raw: &[(i8, i8, i8)]) -> (Vec<Position>, Vec<Normal>) {
    raw.iter()
        .enumerate()
        .map(|(i, &(x, y, z))| {
            (
                point![x as f32 * 0.5, y as f32, z as f32],
                vector![0.0, 0.0, i as f32],
            )
        })
        .unzip()
}

#[test]
fn keeps_first_occurrence() {
    let positions = vec![
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![0.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
        point![1.0, 0.0, 0.0],
    ];
    let normals = vec![
        vector![0.0, 0.0, 1.0],
        vector![0.0, 1.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 0.0, -1.0],
        vector![-1.0, 0.0, 0.0],
    ];
    let res = deduplicate(&positions, &normals).unwrap();
    assert_eq!(res.len(), 3);
    assert_eq!(
        res.positions(),
        &[positions[0], positions[1], positions[3]]
    );
    // duplicates never replace the first normal
    assert_eq!(res.normals(), &[normals[0], normals[1], normals[3]]);
}

#[test]
fn exact_equality_only() {
    let a = 0.1f32;
    let b = f32::from_bits(a.to_bits() + 1);
    assert_ne!(a, b);
    let positions = vec![point![a, 0.0, 0.0], point![b, 0.0, 0.0]];
    let normals = vec![Normal::z(); 2];
    assert_eq!(deduplicate(&positions, &normals).unwrap().len(), 2);
}

#[test]
fn signed_zero_and_nan() {
    let positions = vec![
        point![0.0, 0.0, 0.0],
        point![-0.0, 0.0, 0.0],
        point![f32::NAN, 0.0, 0.0],
        point![f32::NAN, 0.0, 0.0],
    ];
    let normals = vec![Normal::y(); 4];
    // -0.0 == 0.0, and NaN is never equal to anything
    assert_eq!(deduplicate(&positions, &normals).unwrap().len(), 3);
}

#[test]
fn empty_input() {
    let res = deduplicate(&[], &[]).unwrap();
    assert!(res.is_empty());
}

#[test]
fn misaligned_attributes() {
    let positions = vec![Position::origin(); 3];
    let normals = vec![Normal::z(); 2];
    assert!(matches!(
        deduplicate(&positions, &normals),
        Err(Error::AttributeLengthMismatch {
            positions: 3,
            normals: 2
        })
    ));
}

#[quickcheck]
fn never_grows(raw: Vec<(i8, i8, i8)>) -> bool {
    let (p, n) = attrs(&raw);
    deduplicate(&p, &n).unwrap().len() <= p.len()
}

#[quickcheck]
fn idempotent(raw: Vec<(i8, i8, i8)>) -> bool {
    let (p, n) = attrs(&raw);
    let once = deduplicate(&p, &n).unwrap();
    let twice = deduplicate_mesh(&once).unwrap();
    once == twice
}

#[quickcheck]
fn first_occurrence_order(raw: Vec<(i8, i8, i8)>) -> bool {
    let (p, n) = attrs(&raw);
    let res = deduplicate(&p, &n).unwrap();

    // every unique position, in the order it first appears in the input
    let mut expected: Vec<usize> = Vec::new();
    for (i, pos) in p.iter().enumerate() {
        if !expected.iter().any(|&e| p[e] == *pos) {
            expected.push(i);
        }
    }

    res.len() == expected.len()
        && res
            .iter()
            .zip(expected)
            .all(|((rp, rn), e)| *rp == p[e] && *rn == n[e])
}
