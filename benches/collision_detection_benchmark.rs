//! Compares the brute-force reference baseline against the octree and the
//! spatial hash map across increasing mesh sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trimesh_collide::{bruteforce_collides, Octree, SpatialHashMap, Triangle, Vertex};

fn cube_triangles(min: (f64, f64, f64), size: f64) -> Vec<Triangle> {
    let c = |bx: f64, by: f64, bz: f64| -> Vertex {
        Vertex::new(min.0 + bx * size, min.1 + by * size, min.2 + bz * size)
    };

    let c000 = c(0.0, 0.0, 0.0);
    let c100 = c(1.0, 0.0, 0.0);
    let c010 = c(0.0, 1.0, 0.0);
    let c001 = c(0.0, 0.0, 1.0);
    let c110 = c(1.0, 1.0, 0.0);
    let c101 = c(1.0, 0.0, 1.0);
    let c011 = c(0.0, 1.0, 1.0);
    let c111 = c(1.0, 1.0, 1.0);

    let quad = |a: Vertex, b: Vertex, c: Vertex, d: Vertex, out: &mut Vec<Triangle>| {
        out.push(Triangle::new(a, b, c));
        out.push(Triangle::new(a, c, d));
    };

    let mut tris = Vec::with_capacity(12);
    quad(c000, c100, c110, c010, &mut tris);
    quad(c001, c101, c111, c011, &mut tris);
    quad(c000, c100, c101, c001, &mut tris);
    quad(c010, c110, c111, c011, &mut tris);
    quad(c000, c010, c011, c001, &mut tris);
    quad(c100, c110, c111, c101, &mut tris);
    tris
}

/// A grid of `n^3` small cubes, spread out so most pairs of triangles from
/// the two generated meshes are nowhere near each other.
fn grid_mesh(n: usize, spacing: f64, offset: (f64, f64, f64)) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(n * n * n * 12);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                triangles.extend(cube_triangles(
                    (
                        offset.0 + x as f64 * spacing,
                        offset.1 + y as f64 * spacing,
                        offset.2 + z as f64 * spacing,
                    ),
                    1.0,
                ));
            }
        }
    }
    triangles
}

fn benchmark_collides(c: &mut Criterion) {
    let mut group = c.benchmark_group("collides_overlapping_meshes");

    for &n in &[2usize, 3, 4, 5] {
        let a = grid_mesh(n, 2.0, (0.0, 0.0, 0.0));
        let b = grid_mesh(n, 2.0, (1.0, 1.0, 1.0));
        let triangle_count = a.len();

        group.bench_with_input(
            BenchmarkId::new("bruteforce", triangle_count),
            &(a.clone(), b.clone()),
            |bencher, (a, b)| {
                bencher.iter(|| black_box(bruteforce_collides(black_box(a), black_box(b))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("octree", triangle_count),
            &(a.clone(), b.clone()),
            |bencher, (a, b)| {
                bencher.iter(|| {
                    let tree_a = Octree::new(a.clone());
                    let tree_b = Octree::new(b.clone());
                    black_box(tree_a.collides(&tree_b))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("spatial_hash", triangle_count),
            &(a, b),
            |bencher, (a, b)| {
                bencher.iter(|| {
                    let map = SpatialHashMap::new(a.clone(), 3);
                    black_box(map.collides(b))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_collides);
criterion_main!(benches);
