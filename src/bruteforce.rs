//! The O(n·m) reference baseline: scan the full Cartesian product of two
//! triangle sets and short-circuit on the first positive. `Octree` and
//! `SpatialHashMap` exist to avoid paying this cost on large meshes, but
//! this module is what they are checked against.

use crate::geometry::Triangle;
use crate::narrow_phase;

/// Scans every pair `(a[i], b[j])` with `predicate`, short-circuiting on
/// the first pair it accepts.
pub fn primes_intersect(
    a: &[Triangle],
    b: &[Triangle],
    predicate: impl Fn(&Triangle, &Triangle) -> bool,
) -> bool {
    a.iter().any(|ta| b.iter().any(|tb| predicate(ta, tb)))
}

/// `primes_intersect` with this crate's default narrow-phase predicate.
pub fn bruteforce_collides(a: &[Triangle], b: &[Triangle]) -> bool {
    primes_intersect(a, b, narrow_phase::intersects)
}

#[cfg(test)]
#[path = "bruteforce_tests.rs"]
mod tests;
