//! Random draw

use rand::seq::IndexedRandom;
use rand::Rng;

/// One element of `candidates`, uniformly at random; `None` when empty.
/// Repeats across draws are allowed.
pub fn pick<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
