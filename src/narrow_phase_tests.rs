use crate::geometry::{Triangle, Vertex};
use crate::narrow_phase::intersects;

fn tri(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64)) -> Triangle {
    Triangle::new(a.into(), b.into(), c.into())
}

#[test]
fn test_disjoint_triangles_do_not_intersect() {
    let a = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    let b = tri((10.0, 10.0, 10.0), (11.0, 10.0, 10.0), (10.0, 11.0, 10.0));
    assert!(!intersects(&a, &b));
    assert!(!intersects(&b, &a));
}

#[test]
fn test_crossing_triangles_intersect() {
    // Two triangles piercing each other through the z=0 plane.
    let a = tri((-1.0, -1.0, -1.0), (1.0, -1.0, -1.0), (0.0, 1.0, 1.0));
    let b = tri((-1.0, 0.0, 1.0), (1.0, 0.0, 1.0), (0.0, 0.0, -1.0));
    assert!(intersects(&a, &b));
    assert!(intersects(&b, &a));
}

#[test]
fn test_parallel_planes_do_not_intersect() {
    let a = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    let b = tri((0.0, 0.0, 5.0), (1.0, 0.0, 5.0), (0.0, 1.0, 5.0));
    assert!(!intersects(&a, &b));
}

#[test]
fn test_coplanar_overlapping_triangles_intersect() {
    let a = tri((0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0));
    let b = tri((1.0, 1.0, 0.0), (5.0, 1.0, 0.0), (1.0, 5.0, 0.0));
    assert!(intersects(&a, &b));
}

#[test]
fn test_coplanar_disjoint_triangles_do_not_intersect() {
    let a = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    let b = tri((10.0, 10.0, 0.0), (11.0, 10.0, 0.0), (10.0, 11.0, 0.0));
    assert!(!intersects(&a, &b));
}

#[test]
fn test_one_triangle_fully_inside_coplanar_other() {
    let outer = tri((0.0, 0.0, 0.0), (10.0, 0.0, 0.0), (0.0, 10.0, 0.0));
    let inner = tri((1.0, 1.0, 0.0), (2.0, 1.0, 0.0), (1.0, 2.0, 0.0));
    assert!(intersects(&outer, &inner));
    assert!(intersects(&inner, &outer));
}

#[test]
fn test_shared_vertex_counts_as_touching() {
    let a = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    let b = tri((0.0, 0.0, 0.0), (-1.0, 0.0, 0.0), (0.0, -1.0, 0.0));
    assert!(intersects(&a, &b));
}

#[test]
fn test_identical_triangles_intersect() {
    let a = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
    assert!(intersects(&a, &a));
}
