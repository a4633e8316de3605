#![allow(non_snake_case)]
use super::arrays::*;
use super::ordstat::partition;
use super::*;
use crate::algebra::*;
use std::cell::Cell;

// tests some of the private functions of the solve path and the
// order statistic selector.  Configured as submodule from mod.rs
// to expose internals.

fn test_factors_3x3() -> LuFactors<f64> {
    // PAQ = LU with
    //
    // L =            U =
    //[1.0   ⋅    ⋅ ] [2.0  1.0    ⋅ ]
    //[2.0  1.0   ⋅ ] [ ⋅   3.0  -1.0]
    //[ ⋅  -1.0  1.0] [ ⋅    ⋅    4.0]
    //
    // rperm = [2,0,1], cperm = [1,2,0], so that
    //
    // A =
    //[ 5.0   ⋅   -3.0]
    //[  ⋅   2.0   1.0]
    //[-1.0  4.0   5.0]
    LuFactors::new(
        3,
        vec![2., 2., 1., 3., -1., -1., 4.],
        vec![0, 1, 0, 1, 2, 1, 2],
        vec![1, 4, 7],
        vec![0, 2, 5, 7],
        vec![2, 0, 1],
        vec![1, 2, 0],
    )
}

fn test_matrix_3x3() -> CscMatrix<f64> {
    CscMatrix::from_dense(&[
        vec![5., 0., -3.],
        vec![0., 2., 1.],
        vec![-1., 4., 5.],
    ])
}

#[test]
fn test_check_format() {
    let F = test_factors_3x3();
    assert!(F.check_format().is_ok());
    assert_eq!(F.nnz(), 7);
}

#[test]
fn test_check_format_bad_diagonal() {
    // diagonal of U column 1 is not stored last
    let mut F = test_factors_3x3();
    F.lurow.swap(2, 3);
    F.lu.swap(2, 3);
    assert_eq!(
        F.check_format(),
        Err(FactorFormatError::BadDiagonal { column: 1 })
    );
}

#[test]
fn test_check_format_bad_rows() {
    // L entry on the diagonal
    let mut F = test_factors_3x3();
    F.lurow[1] = 0;
    assert_eq!(F.check_format(), Err(FactorFormatError::BadRowval));

    // U entry below the diagonal
    let mut F = test_factors_3x3();
    F.lurow[5] = 2;
    assert!(F.check_format().is_err());
}

#[test]
fn test_check_format_bad_offsets() {
    let mut F = test_factors_3x3();
    F.lcolst[1] = 6;
    assert_eq!(F.check_format(), Err(FactorFormatError::BadColptr));
}

#[test]
fn test_check_format_bad_perm() {
    let mut F = test_factors_3x3();
    F.rperm = vec![2, 0, 2]; //repeated index
    assert_eq!(F.check_format(), Err(FactorFormatError::InvalidPermutation));

    let mut F = test_factors_3x3();
    F.cperm = vec![1, 3, 0]; //index too big
    assert_eq!(F.check_format(), Err(FactorFormatError::InvalidPermutation));
}

#[test]
fn test_from_one_based() {
    let F = LuFactors::from_one_based(
        3,
        &[0., 2., 2., 1., 3., -1., -1., 4.],
        &[0, 1, 2, 1, 2, 3, 2, 3],
        &[0, 2, 5, 8],
        &[0, 1, 3, 6, 8],
        &[0, 3, 1, 2],
        &[0, 2, 3, 1],
    );
    assert_eq!(F, test_factors_3x3());

    // upper sentinel omitted
    let G = LuFactors::from_one_based(
        3,
        &[0., 2., 2., 1., 3., -1., -1., 4.],
        &[0, 1, 2, 1, 2, 3, 2, 3],
        &[0, 2, 5, 8],
        &[0, 1, 3, 6],
        &[0, 3, 1, 2],
        &[0, 2, 3, 1],
    );
    assert_eq!(G, F);
}

#[test]
fn test_lower_upper() {
    let F = test_factors_3x3();
    let L = F.lower();
    let U = F.upper();
    assert!(L.check_format().is_ok());
    assert!(U.check_format().is_ok());

    assert_eq!(L.get_entry((1, 0)), 2.);
    assert_eq!(L.get_entry((2, 1)), -1.);
    assert_eq!(L.get_entry((2, 2)), 1.);
    assert_eq!(L.get_entry((0, 2)), 0.);

    assert_eq!(U.get_entry((0, 0)), 2.);
    assert_eq!(U.get_entry((1, 2)), -1.);
    assert_eq!(U.get_entry((2, 2)), 4.);
    assert_eq!(U.get_entry((2, 0)), 0.);
}

#[test]
fn test_lsolve_usolve() {
    let F = test_factors_3x3();
    let b = vec![-4., 7., 22.];

    let mut y = vec![0.; 3];
    lsolve(&F, &b, &mut y).unwrap();
    assert_eq!(y, vec![7., 8., 4.]);

    let mut x = vec![0.; 3];
    usolve(&F, &mut y, &mut x).unwrap();
    assert_eq!(x, vec![1., 2., 3.]);
}

#[test]
fn test_lusolve() {
    let F = test_factors_3x3();
    let A = test_matrix_3x3();
    let xsol = vec![1., 2., 3.];

    let mut b = vec![0.; 3];
    A.gemv(&mut b, &xsol, 1., 0.);
    assert_eq!(b, vec![-4., 7., 22.]);

    lusolve(&F, &mut b).unwrap();
    assert!(b.norm_inf_diff(&xsol) <= 1e-14);
}

#[test]
fn test_lusolve_identity() {
    let n = 4;
    let F = LuFactors::new(
        n,
        vec![1.; n],
        (0..n).collect(),
        (1..=n).collect(),
        (0..=n).collect(),
        (0..n).collect(),
        (0..n).collect(),
    );
    assert!(F.check_format().is_ok());
    assert_eq!(F.lower(), CscMatrix::identity(n));
    assert_eq!(F.upper(), CscMatrix::identity(n));

    let mut x = vec![3., -1., 0., 2.];
    lusolve(&F, &mut x).unwrap();
    assert_eq!(x, vec![3., -1., 0., 2.]);
}

#[test]
fn test_lusolve_zero_pivot() {
    let mut F = test_factors_3x3();
    F.lu[3] = 0.; // U[1,1]

    let mut x = vec![-4., 7., 22.];
    assert_eq!(
        lusolve(&F, &mut x),
        Err(LuSolveError::SingularFactor { column: 1 })
    );
}

#[test]
fn test_lusolve_missing_pivot() {
    // empty U column 0
    let F = LuFactors::new(
        2,
        vec![1.],
        vec![1],
        vec![0, 1],
        vec![0, 0, 1],
        vec![0, 1],
        vec![0, 1],
    );
    let mut x = vec![1., 1.];
    assert_eq!(
        lusolve(&F, &mut x),
        Err(LuSolveError::SingularFactor { column: 0 })
    );
}

#[test]
fn test_lusolve_bad_dimension() {
    let F = test_factors_3x3();
    let mut x = vec![1., 2.];
    assert_eq!(
        lusolve(&F, &mut x),
        Err(LuSolveError::IncompatibleDimension)
    );
}

#[test]
fn test_rng_sequence() {
    let mut rng = OrdStatRng::default();
    assert_eq!(rng.state(), 0);
    assert_eq!(rng.next_state(), 150889);
    assert_eq!(rng.next_state(), 626063);
    assert_eq!(rng.next_state(), 665022);

    // reseeding replays the sequence
    let mut rng = OrdStatRng::new(714025);
    assert_eq!(rng.next_state(), 150889);
}

#[test]
fn test_partition() {
    let mut a = [4., 7., 1., 4., 9., 2., 4., 0.];
    let (p, r) = (0, a.len() - 1);
    let j = partition(&mut a, p, r);

    assert!(p <= j && j < r);
    assert!(a[..=j].iter().all(|&v| v <= 4.));
    assert!(a[j + 1..].iter().all(|&v| v >= 4.));
}

#[test]
fn test_kth_smallest() {
    let mut rng = OrdStatRng::default();
    let mut a = [5., 1., 4., 2., 8.];
    assert_eq!(kth_smallest(&mut a, 3, &mut rng).unwrap(), 4.);

    // short ranges never draw from the generator
    assert_eq!(rng.state(), 0);

    // rank zero behaves as rank one
    let mut a = [5., 1., 4., 2., 8.];
    assert_eq!(kth_smallest(&mut a, 0, &mut rng).unwrap(), 1.);
}

#[test]
fn test_kth_smallest_long() {
    let mut rng = OrdStatRng::default();
    let orig: Vec<f64> = (0..20).map(|i| ((i * 7) % 20) as f64).collect();

    for k in 1..=20 {
        let mut a = orig.clone();
        assert_eq!(kth_smallest(&mut a, k, &mut rng).unwrap(), (k - 1) as f64);
    }
    assert_ne!(rng.state(), 0);
}

#[test]
fn test_kth_smallest_pivot_threshold() {
    // 8 entries is below the random pivot threshold
    let mut rng = OrdStatRng::default();
    let mut a = [3., 8., 1., 6., 2., 7., 4., 5.];
    assert_eq!(kth_smallest(&mut a, 4, &mut rng).unwrap(), 4.);
    assert_eq!(rng.state(), 0);

    // 9 entries draws a pivot on the first pass
    let mut a = [3., 8., 1., 6., 2., 7., 4., 5., 9.];
    assert_eq!(kth_smallest(&mut a, 4, &mut rng).unwrap(), 4.);
    assert_ne!(rng.state(), 0);
}

#[test]
fn test_kth_smallest_bad_rank() {
    let mut rng = OrdStatRng::default();
    let mut a = [5., 1., 4., 2., 8.];
    assert_eq!(
        kth_smallest(&mut a, 6, &mut rng),
        Err(SelectError::InvalidArgument { k: 6, n: 5 })
    );
    assert_eq!(a, [5., 1., 4., 2., 8.]);

    let mut a: [f64; 0] = [];
    assert!(kth_smallest(&mut a, 0, &mut rng).is_err());
}

#[test]
fn test_copy_within_overlap() {
    // shift a block one place to the right inside the same buffer
    let orig = [1, 2, 3, 4, 5, 0];

    let mut expected = orig;
    let tmp = orig[0..5].to_vec();
    expected[1..6].copy_from_slice(&tmp);

    let mut buf = orig;
    copy_within_dir(&mut buf, 0, 1, 5, CopyDirection::for_move(0, 1));
    assert_eq!(buf, expected);

    // the wrong direction smears the first element across the block
    let mut buf = orig;
    copy_within_dir(&mut buf, 0, 1, 5, CopyDirection::Ascending);
    assert_eq!(buf, [1, 1, 1, 1, 1, 1]);
    assert_ne!(buf, expected);
}

#[test]
fn test_copy_within_overlap_left() {
    let orig = [0., 1., 2., 3., 4.];

    let mut buf = orig;
    copy_within_dir(&mut buf, 1, 0, 4, CopyDirection::for_move(1, 0));
    assert_eq!(buf, [1., 2., 3., 4., 4.]);

    let mut buf = orig;
    copy_within_dir(&mut buf, 1, 0, 4, CopyDirection::Descending);
    assert_eq!(buf, [4., 4., 4., 4., 4.]);
}

#[test]
fn test_copy_dir_and_fill() {
    let a = [1, 2, 3, 4];
    let mut b = [0; 5];
    copy_dir(&a, &mut b, 3, CopyDirection::Descending);
    assert_eq!(b, [1, 2, 3, 0, 0]);

    fill(&mut b, 2, 9);
    assert_eq!(b, [9, 9, 3, 0, 0]);
}

#[test]
fn test_count_rows() {
    let rows = [1, 3, 3, 2, 1, 1];
    let mut rowcnt = [7; 6];
    count_rows(&rows, rows.len(), &mut rowcnt);
    assert_eq!(rowcnt, [0, 3, 1, 2, 7, 7]);

    // rows below the maximum that never appear are cleared
    let rows = [4, 0, 4, 9];
    let mut rowcnt = [5; 6];
    count_rows(&rows, 3, &mut rowcnt);
    assert_eq!(rowcnt, [1, 0, 0, 0, 2, 5]);
}

#[test]
fn test_same_storage() {
    let a = vec![1., 2., 3.];
    let b = a.clone();
    assert!(same_storage(&a, &a));
    assert!(!same_storage(&a, &b));
    assert!(!same_storage(&a[..2], &a));
}

#[test]
fn test_probe_equivalence() {
    let mut a = vec![1.5, 2., 3.];
    let b = a.clone();

    let acells = Cell::from_mut(&mut a[..]).as_slice_of_cells();
    let bcells: Vec<Cell<f64>> = b.iter().map(|&v| Cell::new(v)).collect();

    assert!(probe_equivalence(acells, acells));
    assert!(!probe_equivalence(acells, &bcells));
    assert!(!probe_equivalence(&acells[..0], acells));

    // probed value is restored
    assert_eq!(acells[0].get(), 1.5);
    assert_eq!(a, vec![1.5, 2., 3.]);
}

#[test]
#[should_panic]
fn test_count_rows_count_too_long() {
    let rows = [0, 1];
    let mut rowcnt = [0; 4];
    count_rows(&rows, 3, &mut rowcnt);
}

#[test]
#[should_panic]
fn test_fill_too_long() {
    let mut a = [0; 3];
    fill(&mut a, 4, 1);
}

#[test]
#[should_panic]
fn test_copy_dir_too_long() {
    let a = [1, 2];
    let mut b = [0; 4];
    copy_dir(&a, &mut b, 3, CopyDirection::Ascending);
}
