use std::cell::OnceCell;
use std::collections::VecDeque;

use crate::geometry::{Triangle, Vertex};

/// Maximum octree/split depth below the root. A node at this level never
/// materializes children.
pub const DEPTH_LIMIT: u32 = 5;

/// Corner-index bit for the +x half (RIGHT).
const RIGHT: u8 = 0b100;
/// Corner-index bit for the +y half (TOP).
const TOP: u8 = 0b010;
/// Corner-index bit for the +z half (FRONT).
const FRONT: u8 = 0b001;

/// An axis-aligned bounding box, stored as its eight corners indexed by a
/// 3-bit key (bit 2 = RIGHT/+x, bit 1 = TOP/+y, bit 0 = FRONT/+z). Corner 0
/// is the all-low corner, corner 7 the all-high corner.
///
/// Center and children are computed lazily and cached; both are pure
/// functions of the corners and level, so caching them behind `OnceCell`
/// rather than a raw pointer avoids the aliasing hazards a back-pointer
/// would introduce during a dual-tree traversal.
#[derive(Debug, Clone)]
pub struct Aabb {
    corners: [Vertex; 8],
    level: u32,
    center: OnceCell<Vertex>,
    children: OnceCell<[Option<Box<Aabb>>; 8]>,
    /// Triangles assigned to this box. Only meaningful for the leaves
    /// produced by `split`; always empty for octree nodes, which keep
    /// their own member list separately.
    members: Vec<Triangle>,
}

impl Aabb {
    /// Builds the smallest AABB enclosing `vertices`, at level 0.
    ///
    /// # Panics (debug builds only)
    /// Panics if `vertices` is empty; an empty point set has no bounds.
    pub fn from_points(vertices: &[Vertex]) -> Aabb {
        debug_assert!(!vertices.is_empty(), "cannot bound an empty vertex set");
        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min = Vertex::new(
                min.x().min(v.x()),
                min.y().min(v.y()),
                min.z().min(v.z()),
            );
            max = Vertex::new(
                max.x().max(v.x()),
                max.y().max(v.y()),
                max.z().max(v.z()),
            );
        }
        Aabb::from_corners(Self::corners_from_extent(min, max), 0)
    }

    /// Builds an AABB directly from its eight corners, without recomputing
    /// them from a point set.
    pub fn from_corners(corners: [Vertex; 8], level: u32) -> Aabb {
        Aabb {
            corners,
            level,
            center: OnceCell::new(),
            children: OnceCell::new(),
            members: Vec::new(),
        }
    }

    fn corners_from_extent(min: Vertex, max: Vertex) -> [Vertex; 8] {
        let mut corners = [min; 8];
        for (i, slot) in corners.iter_mut().enumerate() {
            let i = i as u8;
            let x = if i & RIGHT != 0 { max.x() } else { min.x() };
            let y = if i & TOP != 0 { max.y() } else { min.y() };
            let z = if i & FRONT != 0 { max.z() } else { min.z() };
            *slot = Vertex::new(x, y, z);
        }
        corners
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn corners(&self) -> &[Vertex; 8] {
        &self.corners
    }

    /// Triangles assigned to this box by `split`. Empty for octree nodes.
    pub fn members(&self) -> &[Triangle] {
        &self.members
    }

    fn with_members(mut self, members: Vec<Triangle>) -> Self {
        self.members = members;
        self
    }

    /// Midpoint of the box, cached after first call.
    pub fn center(&self) -> Vertex {
        *self.center.get_or_init(|| {
            let lo = self.corners[0];
            let x = (lo.x() + self.corners[RIGHT as usize].x()) / 2.0;
            let y = (lo.y() + self.corners[TOP as usize].y()) / 2.0;
            let z = (lo.z() + self.corners[FRONT as usize].z()) / 2.0;
            Vertex::new(x, y, z)
        })
    }

    /// Closed-interval membership: `vertex` is contained if it lies within
    /// `[min, max]` on every axis.
    pub fn contains(&self, vertex: Vertex) -> bool {
        let lo = self.corners[0];
        let hi = self.corners[7];
        vertex.x() >= lo.x()
            && vertex.x() <= hi.x()
            && vertex.y() >= lo.y()
            && vertex.y() <= hi.y()
            && vertex.z() >= lo.z()
            && vertex.z() <= hi.z()
    }

    /// A triangle is contained if any one of its vertices is — a coarse,
    /// intentionally cheap test used for bucketing, not exact clipping.
    pub fn contains_triangle(&self, triangle: &Triangle) -> bool {
        triangle.vertices().iter().any(|&v| self.contains(v))
    }

    /// Corner-membership test in both directions: true if any corner of
    /// `self` lies inside `other`, or any corner of `other` lies inside
    /// `self`. This misses the case of two boxes interpenetrating with no
    /// corner of either inside the other (e.g. two boxes crossing like a
    /// plus sign along one axis); that incompleteness is carried over from
    /// this crate's origins rather than upgraded to a full interval-overlap
    /// test, since the octree/hash-map traversal above it is built and
    /// tested against this exact predicate.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.corners.iter().any(|&c| other.contains(c))
            || other.corners.iter().any(|&c| self.contains(c))
    }

    fn octant_bounds(&self, octant: u8) -> Aabb {
        let lo = self.corners[0];
        let hi = self.corners[7];
        let mid = self.center();

        let (x_lo, x_hi) = if octant & RIGHT != 0 {
            (mid.x(), hi.x())
        } else {
            (lo.x(), mid.x())
        };
        let (y_lo, y_hi) = if octant & TOP != 0 {
            (mid.y(), hi.y())
        } else {
            (lo.y(), mid.y())
        };
        let (z_lo, z_hi) = if octant & FRONT != 0 {
            (mid.z(), hi.z())
        } else {
            (lo.z(), mid.z())
        };

        let corners = Self::corners_from_extent(
            Vertex::new(x_lo, y_lo, z_lo),
            Vertex::new(x_hi, y_hi, z_hi),
        );
        Aabb::from_corners(corners, self.level + 1)
    }

    /// The eight geometric octants of this box, indexed the same way as
    /// `corners`. Returns all `None` once `level` has reached
    /// `DEPTH_LIMIT` — there is no level beyond it to descend into.
    pub fn children(&self) -> [Option<&Aabb>; 8] {
        let cached = self.children.get_or_init(|| {
            if self.level >= DEPTH_LIMIT {
                Default::default()
            } else {
                let mut out: [Option<Box<Aabb>>; 8] = Default::default();
                for (octant, slot) in out.iter_mut().enumerate() {
                    *slot = Some(Box::new(self.octant_bounds(octant as u8)));
                }
                out
            }
        });
        let mut refs: [Option<&Aabb>; 8] = [None; 8];
        for (slot, child) in refs.iter_mut().zip(cached.iter()) {
            *slot = child.as_deref();
        }
        refs
    }

    /// Iteratively subdivides this box down to `target_level`, bucketing
    /// `triangles` into each resulting leaf by `contains_triangle`. A
    /// triangle straddling an octant boundary is assigned to every leaf
    /// whose region contains one of its vertices, so triangles may be
    /// duplicated across the returned leaves. Traversal is breadth-first
    /// over an explicit queue rather than recursive, matching this crate's
    /// preference for explicit work-stacks in spatial traversals.
    pub fn split(&self, target_level: u32, triangles: &[Triangle]) -> Vec<Aabb> {
        let mut leaves = Vec::new();
        let mut queue: VecDeque<(Aabb, Vec<Triangle>)> = VecDeque::new();
        queue.push_back((
            Aabb::from_corners(self.corners, self.level),
            triangles.to_vec(),
        ));

        while let Some((node, members)) = queue.pop_front() {
            if node.level >= target_level {
                leaves.push(node.with_members(members));
                continue;
            }
            for octant in 0..8u8 {
                let child = node.octant_bounds(octant);
                let child_members: Vec<Triangle> = members
                    .iter()
                    .copied()
                    .filter(|t| child.contains_triangle(t))
                    .collect();
                queue.push_back((child, child_members));
            }
        }

        leaves
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
