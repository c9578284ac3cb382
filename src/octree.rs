//! Adaptive octree over a triangle set, used to accelerate
//! `Octree::collides` against another octree without visiting every pair
//! of triangles.

use crate::bruteforce::primes_intersect;
use crate::error::{CollisionError, Result};
use crate::geometry::{Aabb, Triangle, Vertex, DEPTH_LIMIT};
use crate::narrow_phase;

/// Below this many candidate triangles, a node is treated as a leaf:
/// descending further is not worth the extra bounding-box tests.
pub const MIN_MEMBERS: usize = 25;

/// A node materializes a child octant only if doing so narrows the
/// candidate set meaningfully — fewer than 90% of the parent's members —
/// and the candidate set is still large enough, relative to the whole
/// tree, to be worth a dedicated node.
const CHILD_BAND_PARENT_FRACTION: f64 = 0.9;
const CHILD_BAND_ROOT_FRACTION: f64 = 0.00025;

/// An octree node: its bounding volume, the triangles assigned to it, and
/// up to eight child nodes. Children are value-owned (`Box<Octree>`, not a
/// raw pointer), and built eagerly at construction time rather than cached
/// lazily behind interior mutability — by the time `collides` runs, the
/// whole tree already exists and a traversal only ever borrows it.
pub struct Octree {
    bounds: Aabb,
    members: Vec<Triangle>,
    level: u32,
    children: [Option<Box<Octree>>; 8],
}

impl Octree {
    /// Builds an octree over `triangles`.
    ///
    /// # Panics (debug builds only)
    /// Panics if `triangles` is empty.
    pub fn new(triangles: Vec<Triangle>) -> Octree {
        debug_assert!(
            !triangles.is_empty(),
            "Octree::new requires a non-empty triangle set"
        );
        let root_member_count = triangles.len();
        Self::build(triangles, 0, root_member_count)
    }

    /// Fallible counterpart of `new`.
    pub fn try_new(triangles: Vec<Triangle>) -> Result<Octree> {
        if triangles.is_empty() {
            return Err(CollisionError::EmptyTriangleSet);
        }
        let root_member_count = triangles.len();
        Ok(Self::build(triangles, 0, root_member_count))
    }

    fn build(members: Vec<Triangle>, level: u32, root_member_count: usize) -> Octree {
        let vertices: Vec<Vertex> = members.iter().flat_map(|t| t.vertices()).collect();
        let bounds = Aabb::from_points(&vertices);
        let children = Self::build_children(&bounds, &members, level, root_member_count);
        Octree {
            bounds,
            members,
            level,
            children,
        }
    }

    fn build_children(
        bounds: &Aabb,
        members: &[Triangle],
        level: u32,
        root_member_count: usize,
    ) -> [Option<Box<Octree>>; 8] {
        let mut out: [Option<Box<Octree>>; 8] = Default::default();
        if level >= DEPTH_LIMIT || members.len() < MIN_MEMBERS {
            return out;
        }

        for (octant, child_bounds) in bounds.children().into_iter().enumerate() {
            let Some(child_bounds) = child_bounds else {
                continue;
            };
            let candidates: Vec<Triangle> = members
                .iter()
                .copied()
                .filter(|t| child_bounds.contains_triangle(t))
                .collect();
            let count = candidates.len() as f64;
            let narrows_parent = count < CHILD_BAND_PARENT_FRACTION * members.len() as f64;
            let worth_a_node = count > CHILD_BAND_ROOT_FRACTION * root_member_count as f64;
            if narrows_parent && worth_a_node {
                crate::collide_trace!(
                    "trimesh_collide::octree",
                    "level {} octant {} materialized with {} of {} candidates",
                    level,
                    octant,
                    candidates.len(),
                    members.len()
                );
                out[octant] = Some(Box::new(Self::build(
                    candidates,
                    level + 1,
                    root_member_count,
                )));
            } else {
                crate::collide_trace!(
                    "trimesh_collide::octree",
                    "level {} octant {} pruned ({} of {} candidates)",
                    level,
                    octant,
                    candidates.len(),
                    members.len()
                );
            }
        }
        out
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn members(&self) -> &[Triangle] {
        &self.members
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// True if `self` and `other` contain any pair of intersecting
    /// triangles, using this crate's default narrow-phase predicate.
    pub fn collides(&self, other: &Octree) -> bool {
        self.collides_with(other, narrow_phase::intersects)
    }

    /// Like `collides`, but with a caller-supplied narrow-phase predicate
    /// in place of the default.
    ///
    /// Traversal is an explicit stack of `(node, node)` pairs rather than
    /// two interleaved pops, so a stack with one pair left behaves the
    /// same as a stack with ten: each iteration pops exactly one pair,
    /// classifies it by which side(s) have children, and pushes its
    /// replacements.
    pub fn collides_with(
        &self,
        other: &Octree,
        predicate: impl Fn(&Triangle, &Triangle) -> bool,
    ) -> bool {
        crate::collide_trace!(
            "trimesh_collide::octree",
            "dual-tree query: {} vs {} root members",
            self.members.len(),
            other.members.len()
        );
        let mut stack: Vec<(&Octree, &Octree)> = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if !a.bounds.intersects(&b.bounds) {
                continue;
            }

            match (a.has_children(), b.has_children()) {
                (false, false) => {
                    if primes_intersect(&a.members, &b.members, &predicate) {
                        crate::collide_debug!(
                            "trimesh_collide::octree",
                            "leaf pair at level {}/{} reported a hit",
                            a.level,
                            b.level
                        );
                        return true;
                    }
                }
                (true, false) => {
                    for child in a.children.iter().flatten() {
                        stack.push((child, b));
                    }
                }
                (false, true) => {
                    for child in b.children.iter().flatten() {
                        stack.push((a, child));
                    }
                }
                (true, true) => {
                    for ca in a.children.iter().flatten() {
                        for cb in b.children.iter().flatten() {
                            stack.push((ca, cb));
                        }
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
