//! Random sampling helpers over collections.
//!
//! All helpers draw from an injected [`Rng`] so that callers can make sampling
//! reproducible with a seeded generator.

use std::hash::Hash;

use indexmap::IndexSet;
use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};

/// Returns a random subset of `items`.
///
/// Duplicates in `items` count once. With `Some(count)` the subset holds
/// `min(count, distinct items)` elements; with `None` its size is drawn uniformly from
/// `0..=distinct items`.
///
/// # Examples
///
/// ```rust
/// use loopless::utils::sample::random_subset;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let subset = random_subset(1..=10, Some(4), &mut rng);
///
/// assert_eq!(subset.len(), 4);
/// assert!(subset.iter().all(|value| (1..=10).contains(value)));
/// ```
pub fn random_subset<T, I, R>(items: I, count: Option<usize>, rng: &mut R) -> IndexSet<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let pool: IndexSet<T> = items.into_iter().collect();
    let amount = count
        .unwrap_or_else(|| rng.gen_range(0..=pool.len()))
        .min(pool.len());

    pool.into_iter()
        .choose_multiple(rng, amount)
        .into_iter()
        .collect()
}

/// Returns two random elements of `items`, which may be the same element.
///
/// # Returns
///
/// `None` when `items` is empty.
pub fn random_pair<T, R>(items: &[T], rng: &mut R) -> Option<(T, T)>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let u = items.choose(rng)?;
    let v = items.choose(rng)?;
    Some((u.clone(), v.clone()))
}

/// Returns two distinct random elements of `items`.
///
/// # Returns
///
/// `None` when `items` holds fewer than two distinct values.
pub fn random_distinct_pair<T, R>(items: &[T], rng: &mut R) -> Option<(T, T)>
where
    T: Clone + Hash + Eq,
    R: Rng + ?Sized,
{
    let distinct: IndexSet<&T> = items.iter().collect();
    distinct_pair(&distinct, rng).map(|(u, v)| (u.clone(), v.clone()))
}

/// Returns `count` pairs of distinct elements of `items`.
///
/// The two elements of each pair differ, but the same pair may be drawn more than once.
/// With `None` the number of pairs is drawn uniformly from `1..=s(s - 1) / 2`, where `s`
/// is the number of distinct values.
///
/// # Returns
///
/// An empty vector when `items` holds fewer than two distinct values.
pub fn random_distinct_pairs<T, R>(items: &[T], count: Option<usize>, rng: &mut R) -> Vec<(T, T)>
where
    T: Clone + Hash + Eq,
    R: Rng + ?Sized,
{
    let distinct: IndexSet<&T> = items.iter().collect();
    let size = distinct.len();
    if size < 2 {
        return Vec::new();
    }

    let amount = count.unwrap_or_else(|| rng.gen_range(1..=size * (size - 1) / 2));
    (0..amount)
        .filter_map(|_| distinct_pair(&distinct, rng))
        .map(|(u, v)| (u.clone(), v.clone()))
        .collect()
}

fn distinct_pair<'a, T, R>(distinct: &IndexSet<&'a T>, rng: &mut R) -> Option<(&'a T, &'a T)>
where
    T: Hash + Eq,
    R: Rng + ?Sized,
{
    let size = distinct.len();
    if size < 2 {
        return None;
    }

    let first = rng.gen_range(0..size);
    let mut second = rng.gen_range(0..size - 1);
    if second >= first {
        second += 1;
    }
    Some((*distinct.get_index(first)?, *distinct.get_index(second)?))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_random_subset_clamps_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for (count, expected) in [(0, 0), (3, 3), (5, 5), (9, 5)] {
            let subset = random_subset(1..=5, Some(count), &mut rng);
            assert_eq!(subset.len(), expected);
            assert!(subset.iter().all(|value| (1..=5).contains(value)));
        }
    }

    #[test]
    fn test_random_subset_random_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let subset = random_subset(["a", "b", "c", "c"], None, &mut rng);
            assert!(subset.len() <= 3);
        }
    }

    #[test]
    fn test_random_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(random_pair::<u8, _>(&[], &mut rng), None);
        assert_eq!(random_pair(&[7], &mut rng), Some((7, 7)));

        let (u, v) = random_pair(&[1, 2, 3], &mut rng).unwrap();
        assert!((1..=3).contains(&u) && (1..=3).contains(&v));
    }

    #[test]
    fn test_random_distinct_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        assert_eq!(random_distinct_pair(&[4, 4, 4], &mut rng), None);
        for _ in 0..50 {
            let (u, v) = random_distinct_pair(&[1, 1, 2], &mut rng).unwrap();
            assert_ne!(u, v);
        }
    }

    #[test]
    fn test_random_distinct_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert!(random_distinct_pairs(&['x'], Some(3), &mut rng).is_empty());

        let pairs = random_distinct_pairs(&['a', 'b', 'c'], Some(10), &mut rng);
        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|(u, v)| u != v));

        let unsized_pairs = random_distinct_pairs(&[1, 2, 3, 4], None, &mut rng);
        assert!((1..=6).contains(&unsized_pairs.len()));
    }
}
