//! Fixed-depth spatial hash map over a triangle set, used as an
//! alternative to `Octree` for accelerating collision queries.

use crate::bruteforce::primes_intersect;
use crate::error::{CollisionError, Result};
use crate::geometry::{Aabb, Triangle, Vertex, DEPTH_LIMIT};
use crate::narrow_phase;

/// Number of hash buckets.
pub const TABLE_SIZE: i64 = 100;
/// Divides the center coordinate before it's scaled by a per-axis prime.
pub const CELL_SIZE: f64 = 100.0;
const P1: f64 = 131.0;
const P2: f64 = 97.0;
const P3: f64 = 137.0;

/// Maps leaf-box centers to bucket indices and groups triangles by bucket.
/// Built once per dataset at a caller-chosen subdivision depth; never
/// updated incrementally.
pub struct SpatialHashMap {
    levels: u32,
    buckets: Vec<Option<Vec<Triangle>>>,
}

impl SpatialHashMap {
    /// Builds a hash map over `triangles`, subdividing `levels` deep.
    ///
    /// # Panics (debug builds only)
    /// Panics if `levels` exceeds `DEPTH_LIMIT`.
    pub fn new(triangles: Vec<Triangle>, levels: u32) -> SpatialHashMap {
        debug_assert!(
            levels <= DEPTH_LIMIT,
            "SpatialHashMap::new requires levels <= DEPTH_LIMIT"
        );
        Self::build(triangles, levels)
    }

    /// Fallible counterpart of `new`.
    pub fn try_new(triangles: Vec<Triangle>, levels: u32) -> Result<SpatialHashMap> {
        if levels > DEPTH_LIMIT {
            crate::collide_error!(
                "trimesh_collide::spatial_hash",
                "rejected subdivision level {} (max {})",
                levels,
                DEPTH_LIMIT
            );
            return Err(CollisionError::InvalidSubdivisionLevel {
                levels,
                max: DEPTH_LIMIT,
            });
        }

        Ok(Self::build(triangles, levels))
    }

    fn build(triangles: Vec<Triangle>, levels: u32) -> SpatialHashMap {
        let mut buckets: Vec<Option<Vec<Triangle>>> = vec![None; TABLE_SIZE as usize];
        if !triangles.is_empty() {
            let vertices: Vec<Vertex> = triangles.iter().flat_map(|t| t.vertices()).collect();
            let root = Aabb::from_points(&vertices);
            for leaf in root.split(levels, &triangles) {
                insert_leaf(&mut buckets, &leaf);
            }
        }
        crate::collide_debug!(
            "trimesh_collide::spatial_hash",
            "built hash map over {} triangles at {} levels",
            triangles.len(),
            levels
        );

        SpatialHashMap { levels, buckets }
    }

    /// True if any triangle in `triangles` intersects any triangle already
    /// indexed by this map, using the default narrow-phase predicate.
    pub fn collides(&self, triangles: &[Triangle]) -> bool {
        self.collides_with(triangles, narrow_phase::intersects)
    }

    /// Like `collides`, but with a caller-supplied narrow-phase predicate.
    pub fn collides_with(
        &self,
        triangles: &[Triangle],
        predicate: impl Fn(&Triangle, &Triangle) -> bool,
    ) -> bool {
        if triangles.is_empty() {
            return false;
        }
        crate::collide_trace!(
            "trimesh_collide::spatial_hash",
            "query over {} triangles at {} levels",
            triangles.len(),
            self.levels
        );
        let vertices: Vec<Vertex> = triangles.iter().flat_map(|t| t.vertices()).collect();
        let root = Aabb::from_points(&vertices);

        for leaf in root.split(self.levels, triangles) {
            if leaf.members().is_empty() {
                continue;
            }
            let bucket_index = bucket_index(leaf.center());
            if let Some(bucket) = &self.buckets[bucket_index] {
                if primes_intersect(bucket, leaf.members(), &predicate) {
                    crate::collide_debug!(
                        "trimesh_collide::spatial_hash",
                        "bucket {} reported a hit",
                        bucket_index
                    );
                    return true;
                }
            }
        }
        false
    }
}

fn insert_leaf(buckets: &mut [Option<Vec<Triangle>>], leaf: &Aabb) {
    if leaf.members().is_empty() {
        return;
    }
    let index = bucket_index(leaf.center());
    match &mut buckets[index] {
        Some(existing) => existing.extend_from_slice(leaf.members()),
        slot @ None => *slot = Some(leaf.members().to_vec()),
    }
}

/// `(⌊cx/CELL_SIZE·P1⌋ ⊕ ⌊cy/CELL_SIZE·P2⌋ ⊕ ⌊cz/CELL_SIZE·P3⌋) mod TABLE_SIZE`,
/// with truncation toward zero and a C-style signed remainder — this is
/// not a bijective hash, and collisions across unrelated regions of space
/// are expected and tolerated by construction, not a defect to fix. The
/// final `rem_euclid` only folds a possibly-negative C-style remainder
/// into a valid `Vec` index; it does not change which leaves land in the
/// same bucket as one another.
fn bucket_index(center: Vertex) -> usize {
    let cx = (center.x() / CELL_SIZE * P1) as i64;
    let cy = (center.y() / CELL_SIZE * P2) as i64;
    let cz = (center.z() / CELL_SIZE * P3) as i64;
    let combined = (cx ^ cy ^ cz) % TABLE_SIZE;
    combined.rem_euclid(TABLE_SIZE) as usize
}

#[cfg(test)]
#[path = "spatial_hash_tests.rs"]
mod tests;
