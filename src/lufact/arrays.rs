//! Block copy, fill and counting helpers on flat buffers.
//!
//! These are used by the factorization stage when compacting and growing
//! its packed storage.  None of them allocate.

use crate::algebra::FloatT;
use std::cell::Cell;

/// Traversal order for block copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// low to high index.  Safe for overlapping moves toward lower addresses.
    Ascending,
    /// high to low index.  Safe for overlapping moves toward higher addresses.
    Descending,
}

impl CopyDirection {
    /// The direction that makes a move of a block from offset `src` to
    /// offset `dst` within one buffer overlap safe.
    pub fn for_move(src: usize, dst: usize) -> Self {
        if dst > src {
            CopyDirection::Descending
        } else {
            CopyDirection::Ascending
        }
    }
}

/// Copies `len` elements from `a` to `b`, visiting indices in the order
/// given by `dir`.
///
/// # Panics
/// Panics if `len` exceeds the length of `a` or of `b`.
pub fn copy_dir<T: Copy>(a: &[T], b: &mut [T], len: usize, dir: CopyDirection) {
    let (a, b) = (&a[..len], &mut b[..len]);
    match dir {
        CopyDirection::Ascending => {
            for i in 0..len {
                b[i] = a[i];
            }
        }
        CopyDirection::Descending => {
            for i in (0..len).rev() {
                b[i] = a[i];
            }
        }
    }
}

/// Copies `len` elements within `buf` from offset `src` to offset `dst`,
/// visiting indices in the order given by `dir`.
///
/// No overlap detection is done.  If the two ranges overlap, the caller
/// must pick the direction that reads each source element before it is
/// overwritten, i.e. [`CopyDirection::for_move`](CopyDirection::for_move).
/// The other direction corrupts the copied block.
///
/// # Panics
/// Panics if either range extends past the end of `buf`.
pub fn copy_within_dir<T: Copy>(
    buf: &mut [T],
    src: usize,
    dst: usize,
    len: usize,
    dir: CopyDirection,
) {
    assert!(src + len <= buf.len() && dst + len <= buf.len());
    match dir {
        CopyDirection::Ascending => {
            for i in 0..len {
                buf[dst + i] = buf[src + i];
            }
        }
        CopyDirection::Descending => {
            for i in (0..len).rev() {
                buf[dst + i] = buf[src + i];
            }
        }
    }
}

/// Sets the first `len` entries of `a` to `val`.
///
/// # Panics
/// Panics if `len > a.len()`.
pub fn fill<T: Copy>(a: &mut [T], len: usize, val: T) {
    a[..len].fill(val);
}

/// Row histogram of a sparse pattern.
///
/// Counts the occurrences of each row index among the first `count`
/// entries of `rows`, writing `rowcnt[r]` for every `r` up to the largest
/// index seen.  Rows at or below that maximum that never occur are set
/// to zero.  Entries of `rowcnt` above the maximum are left untouched.
///
/// # Panics
/// Panics if `count > rows.len()`, or if `rowcnt` is too short for the
/// largest row index.
pub fn count_rows(rows: &[usize], count: usize, rowcnt: &mut [usize]) {
    // one past the highest row cleared so far
    let mut cleared = 0;

    for &k in &rows[..count] {
        if k >= cleared {
            rowcnt[cleared..=k].fill(0);
            cleared = k + 1;
        }
        rowcnt[k] += 1;
    }
}

/// True if `a` and `b` are views of the same storage, i.e. they start at
/// the same address and have the same length.
pub fn same_storage<T>(a: &[T], b: &[T]) -> bool {
    std::ptr::eq(a, b)
}

/// Mutate and probe aliasing test on shared mutable buffers.
///
/// Writes two different sentinel values into `a[0]` in turn and checks
/// that `b[0]` observes each one.  The original value of `a[0]` is
/// restored before returning.  Returns `false` for empty inputs.
///
/// This is a heuristic.  It only inspects the first element, so views
/// that overlap elsewhere are not detected.  Prefer
/// [`same_storage`](same_storage) wherever references are available.
pub fn probe_equivalence<T: FloatT>(a: &[Cell<T>], b: &[Cell<T>]) -> bool {
    let (Some(a0), Some(b0)) = (a.first(), b.first()) else {
        return false;
    };

    let saved = a0.get();
    let mut aliased = true;

    for sentinel in [T::zero(), T::one()] {
        a0.set(sentinel);
        if b0.get() != sentinel {
            aliased = false;
            break;
        }
    }

    a0.set(saved);
    aliased
}
