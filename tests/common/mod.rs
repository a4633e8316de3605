#![allow(non_snake_case)]
#![allow(dead_code)]

use lufact::algebra::CscMatrix;
use lufact::lufact::LuFactors;
use rand::prelude::*;

// Dense Gaussian elimination with partial pivoting on AQ, packed
// into sparse factor storage.  Only used to produce test factors.
pub fn dense_lu(A: &[Vec<f64>], cperm: &[usize]) -> LuFactors<f64> {
    let n = A.len();

    // M = AQ
    let mut M: Vec<Vec<f64>> = A
        .iter()
        .map(|row| cperm.iter().map(|&c| row[c]).collect())
        .collect();

    // order[k] = row of A moved to pivot position k
    let mut order: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let piv = (k..n)
            .max_by(|&a, &b| M[a][k].abs().partial_cmp(&M[b][k].abs()).unwrap())
            .unwrap();
        M.swap(k, piv);
        order.swap(k, piv);

        for i in k + 1..n {
            let l = M[i][k] / M[k][k];
            M[i][k] = l;
            for j in k + 1..n {
                M[i][j] -= l * M[k][j];
            }
        }
    }

    let mut rperm = vec![0; n];
    for (k, &i) in order.iter().enumerate() {
        rperm[i] = k;
    }

    let mut lu = Vec::new();
    let mut lurow = Vec::new();
    let mut lcolst = Vec::new();
    let mut ucolst = Vec::new();

    for j in 0..n {
        ucolst.push(lu.len());
        for (i, row) in M.iter().enumerate().take(j) {
            if row[j] != 0.0 {
                lurow.push(i);
                lu.push(row[j]);
            }
        }
        lurow.push(j);
        lu.push(M[j][j]);

        lcolst.push(lu.len());
        for (i, row) in M.iter().enumerate().skip(j + 1) {
            if row[j] != 0.0 {
                lurow.push(i);
                lu.push(row[j]);
            }
        }
    }
    ucolst.push(lu.len());

    LuFactors::new(n, lu, lurow, lcolst, ucolst, rperm, cperm.to_vec())
}

// random sparse matrix with a boosted diagonal, so that it is
// comfortably nonsingular
pub fn random_matrix(n: usize, density: f64, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut A = vec![vec![0.0; n]; n];
    for (i, row) in A.iter_mut().enumerate() {
        for (j, a) in row.iter_mut().enumerate() {
            if i == j {
                *a = (n as f64) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            } else if rng.gen_bool(density) {
                *a = rng.gen_range(-1.0..1.0);
            }
        }
    }
    A
}

pub fn random_perm(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    p.shuffle(rng);
    p
}

pub fn to_csc(A: &[Vec<f64>]) -> CscMatrix<f64> {
    CscMatrix::from_dense(A)
}
