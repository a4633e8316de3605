use crate::algebra::FloatT;
use thiserror::Error;

/// Error codes returnable from [`kth_smallest`](kth_smallest)

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("Rank {k} is outside the valid range for {n} values")]
    InvalidArgument { k: usize, n: usize },
}

// parameters of the pivot generator recurrence
const RNG_MULTIPLIER: u64 = 1366;
const RNG_INCREMENT: u64 = 150889;
const RNG_MODULUS: u64 = 714025;

// ranges with fewer entries than this use the leftmost pivot
const RANDOM_PIVOT_MIN_LEN: usize = 9;

/// Linear congruential generator used to draw quickselect pivots.
///
/// Produces the sequence `state = (1366 * state + 150889) mod 714025`.
/// Each selector call site owns its generator, so independent callers
/// never share state.  Seeding with the same value reproduces the same
/// pivot sequence.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdStatRng {
    state: u64,
}

impl OrdStatRng {
    /// Generator with the given seed.  The seed is reduced modulo 714025.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % RNG_MODULUS,
        }
    }

    /// current generator state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator and returns the new state.
    pub fn next_state(&mut self) -> u64 {
        self.state = (RNG_MULTIPLIER * self.state + RNG_INCREMENT) % RNG_MODULUS;
        self.state
    }

    // random offset within a range of length len > 0
    fn next_offset(&mut self, len: usize) -> usize {
        (self.next_state() % len as u64) as usize
    }
}

/// Returns the `k`-th smallest entry of `a`, with `k` counted from 1.
///
/// `k == 0` is accepted and treated as `k == 1`.  Selection is done in
/// place by randomized quickselect with Hoare partitioning, so the
/// contents of `a` are permuted on return.
///
/// Fails with [`SelectError::InvalidArgument`] if `a` is empty or
/// `k > a.len()`, in which case `a` is not modified.
///
/// __Example usage__ :
///
/// ```no_run
/// use lufact::lufact::{kth_smallest, OrdStatRng};
///
/// let mut rng = OrdStatRng::default();
/// let mut a = [5., 1., 4., 2., 8.];
/// assert_eq!(kth_smallest(&mut a, 3, &mut rng).unwrap(), 4.);
/// ```

pub fn kth_smallest<T: FloatT>(a: &mut [T], k: usize, rng: &mut OrdStatRng) -> Result<T, SelectError> {
    let n = a.len();
    if n == 0 || k > n {
        return Err(SelectError::InvalidArgument { k, n });
    }

    // zero based target index
    let target = k.max(1) - 1;

    let (mut p, mut r) = (0, n - 1);

    while p < r {
        if r - p + 1 >= RANDOM_PIVOT_MIN_LEN {
            let q = p + rng.next_offset(r - p + 1);
            a.swap(p, q);
        }

        let j = partition(a, p, r);

        if j < target {
            p = j + 1;
        } else {
            r = j;
        }
    }

    Ok(a[p])
}

// Hoare partition of a[p..=r] around the pivot a[p].  Returns j such
// that every entry of a[p..=j] is <= the pivot and every entry of
// a[j+1..=r] is >= the pivot, with p <= j < r.
pub(crate) fn partition<T: FloatT>(a: &mut [T], p: usize, r: usize) -> usize {
    let x = a[p];
    let (mut i, mut j) = (p, r);

    loop {
        while a[j] > x {
            j -= 1;
        }
        while a[i] < x {
            i += 1;
        }
        if i >= j {
            return j;
        }
        a.swap(i, j);
        i += 1;
        j -= 1;
    }
}
