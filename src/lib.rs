/*!
# trimesh_collide

Core of a triangle-mesh collision detection library: an adaptive octree
and a fixed-depth spatial hash map, both built over axis-aligned bounding
boxes, plus a narrow-phase triangle-triangle intersection predicate. Given
two triangle sets in ℝ³, answers one question — do they intersect.

## Architecture

- **`geometry`**: `Vertex`, `Triangle`, `Aabb` — the data model everything
  else is built on.
- **`narrow_phase`**: the default triangle-triangle intersection test.
  Every broad-phase structure takes a predicate, so this is a default,
  not a mandate.
- **`octree`**: `Octree`, an adaptive spatial index with lazily-pruned
  children, queried via a dual-tree stack traversal.
- **`spatial_hash`**: `SpatialHashMap`, a fixed-depth alternative to the
  octree.
- **`bruteforce`**: the O(n·m) reference baseline, `primes_intersect` and
  `bruteforce_collides`.

Acceleration structures here are single-query-session: build one, ask it
one question, drop it. None of them support incremental updates.
*/

// Error handling module
pub mod error;

// Logging module
pub mod log;

// Vertex / Triangle / Aabb
pub mod geometry;

// Default narrow-phase predicate
pub mod narrow_phase;

// Adaptive octree acceleration structure
pub mod octree;

// Fixed-depth spatial hash map acceleration structure
pub mod spatial_hash;

// O(n*m) reference baseline
pub mod bruteforce;

// Re-export error types at crate root
pub use error::{CollisionError, Result};

// Re-export the geometry primitives
pub use geometry::{Aabb, Triangle, Vertex};

// Re-export the acceleration structures
pub use octree::Octree;
pub use spatial_hash::SpatialHashMap;

// Re-export the reference baseline
pub use bruteforce::{bruteforce_collides, primes_intersect};

// Re-export math library
pub use glam;
