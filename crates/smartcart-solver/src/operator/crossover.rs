//! Ordered crossover (OX).

use rand::Rng;

use crate::error::SearchError;

/// Recombines two permutations in place.
///
/// Two distinct cut points `lo < hi` are drawn. Each child keeps its own
/// parent's slice `[lo, hi]` and fills the remaining positions, starting
/// after `hi` and wrapping around, with the missing genes in the order they
/// appear in the other parent (also read from after `hi`). Both children stay
/// permutations of `[0, n)`.
///
/// Slices shorter than two genes are left untouched.
///
/// # Errors
///
/// Returns [`SearchError::LengthMismatch`] if the parents differ in length
/// and [`SearchError::IndexOutOfRange`] if a gene is not below the length.
/// Neither parent is modified on error.
pub fn ordered_crossover<R: Rng + ?Sized>(
    first: &mut [usize],
    second: &mut [usize],
    rng: &mut R,
) -> Result<(), SearchError> {
    let size = first.len();
    if second.len() != size {
        return Err(SearchError::LengthMismatch {
            expected: size,
            actual: second.len(),
        });
    }
    if size < 2 {
        return Ok(());
    }

    let a = rng.random_range(0..size);
    let mut b = rng.random_range(0..size - 1);
    if b >= a {
        b += 1;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };

    let child1 = ox_child(first, second, lo, hi)?;
    let child2 = ox_child(second, first, lo, hi)?;
    first.copy_from_slice(&child1);
    second.copy_from_slice(&child2);
    Ok(())
}

/// Builds one child: `keep[lo..=hi]` stays in place and the remaining
/// positions, from `hi + 1` wrapping around, take the genes missing from that
/// slice in the order `fill` lists them, also read from `hi + 1`.
pub(super) fn ox_child(
    keep: &[usize],
    fill: &[usize],
    lo: usize,
    hi: usize,
) -> Result<Vec<usize>, SearchError> {
    let size = keep.len();
    let out_of_range = |index| SearchError::IndexOutOfRange { index, len: size };

    let mut kept = vec![false; size];
    for &gene in &keep[lo..=hi] {
        *kept.get_mut(gene).ok_or_else(|| out_of_range(gene))? = true;
    }

    let mut child = keep.to_vec();
    let mut pos = (hi + 1) % size;
    for offset in 0..size {
        let gene = fill[(hi + 1 + offset) % size];
        if !*kept.get(gene).ok_or_else(|| out_of_range(gene))? {
            child[pos] = gene;
            pos = (pos + 1) % size;
        }
    }
    Ok(child)
}
