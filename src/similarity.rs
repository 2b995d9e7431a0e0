//! Sequence-matcher similarity (Ratcliff/Obershelp).
//!
//! The ratio of two sequences is `2*M / T`, where `T` is the total number of
//! elements in both and `M` is the number of elements covered by the matching
//! blocks: the longest common contiguous block is found first, then the same
//! search recurses into the pieces to its left and to its right. Ties between
//! equally long blocks go to the one that starts earliest in `a`, then in `b`.
//!
//! Elements are Unicode scalar values. There is no junk heuristic.

use smallvec::SmallVec;

type Chars = SmallVec<[char; 32]>;

/// Similarity ratio in `[0, 1]`. Two empty strings are identical (`1.0`).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Chars = a.chars().collect();
    let b: Chars = b.chars().collect();
    ratio_of(&a, &b)
}

/// Upper bound on [`ratio`] from the lengths alone.
pub fn real_quick_ratio(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    score(la.min(lb), la + lb)
}

/// Upper bound on [`ratio`] from the multiset of characters, ignoring order.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let mut pool: SmallVec<[(char, usize); 32]> = SmallVec::new();
    let mut lb = 0;
    for c in b.chars() {
        lb += 1;
        match pool.iter_mut().find(|(k, _)| *k == c) {
            Some((_, n)) => *n += 1,
            None => pool.push((c, 1)),
        }
    }

    let mut la = 0;
    let mut common = 0;
    for c in a.chars() {
        la += 1;
        if let Some((_, n)) = pool.iter_mut().find(|(k, _)| *k == c) {
            if *n > 0 {
                *n -= 1;
                common += 1;
            }
        }
    }
    score(common, la + lb)
}

fn ratio_of(a: &[char], b: &[char]) -> f64 {
    score(matching_chars(a, b), a.len() + b.len())
}

#[inline]
fn score(matches: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}

/// Total size of all matching blocks between `a` and `b`.
pub(crate) fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue: SmallVec<[(usize, usize, usize, usize); 8]> = SmallVec::new();
    queue.push((0, a.len(), 0, b.len()));

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside `a[alo..ahi]` and
/// `b[blo..bhi]`, as `(i, j, k)`. Returns `(alo, blo, 0)` when nothing matches.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

    // prev[j + 1] / next[j + 1]: length of the common block ending at b[j]
    // for the previous / current row of a. Index `blo` is never written.
    let mut prev: SmallVec<[usize; 32]> = SmallVec::from_elem(0, b.len() + 1);
    let mut next: SmallVec<[usize; 32]> = SmallVec::from_elem(0, b.len() + 1);

    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j] + 1 } else { 0 };
            next[j + 1] = k;
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        std::mem::swap(&mut prev, &mut next);
    }

    (best_i, best_j, best_k)
}
