//! Default triangle-triangle intersection predicate.
//!
//! `Octree`, `SpatialHashMap`, and `primes_intersect` treat the narrow-phase
//! test as an external collaborator: every collision query accepts a
//! predicate, and `intersects` below is merely the bundled default so the
//! crate is usable without a separate geometry kernel dependency. It is a
//! direct port of Möller's 1997 "A Fast Triangle-Triangle Intersection
//! Test" (plane separation followed by a 1D interval overlap along the two
//! triangles' line of intersection, with a 2D fallback for the coplanar
//! case).

use glam::DVec3;

use crate::geometry::Triangle;

const EPS: f64 = 1e-9;

/// True if triangles `a` and `b` intersect (including touching at a point
/// or edge, and the coplanar/overlapping case).
pub fn intersects(a: &Triangle, b: &Triangle) -> bool {
    let v0 = a.v0.as_dvec3();
    let v1 = a.v1.as_dvec3();
    let v2 = a.v2.as_dvec3();
    let u0 = b.v0.as_dvec3();
    let u1 = b.v1.as_dvec3();
    let u2 = b.v2.as_dvec3();

    let n1 = (v1 - v0).cross(v2 - v0);
    let d1 = -n1.dot(v0);

    let du0 = clamp_near_zero(n1.dot(u0) + d1);
    let du1 = clamp_near_zero(n1.dot(u1) + d1);
    let du2 = clamp_near_zero(n1.dot(u2) + d1);
    let du0du1 = du0 * du1;
    let du0du2 = du0 * du2;

    if du0du1 > 0.0 && du0du2 > 0.0 {
        // All of u on the same side of plane(v), strictly: no intersection.
        return false;
    }

    let n2 = (u1 - u0).cross(u2 - u0);
    let d2 = -n2.dot(u0);

    let dv0 = clamp_near_zero(n2.dot(v0) + d2);
    let dv1 = clamp_near_zero(n2.dot(v1) + d2);
    let dv2 = clamp_near_zero(n2.dot(v2) + d2);
    let dv0dv1 = dv0 * dv1;
    let dv0dv2 = dv0 * dv2;

    if dv0dv1 > 0.0 && dv0dv2 > 0.0 {
        return false;
    }

    let line_dir = n1.cross(n2);
    let axis = dominant_axis(line_dir);

    let vp = (component(v0, axis), component(v1, axis), component(v2, axis));
    let up = (component(u0, axis), component(u1, axis), component(u2, axis));

    let interval_v = match compute_interval(vp, (dv0, dv1, dv2), dv0dv1, dv0dv2) {
        Some(range) => range,
        None => return coplanar_intersects(n1, [v0, v1, v2], [u0, u1, u2]),
    };
    let interval_u = match compute_interval(up, (du0, du1, du2), du0du1, du0du2) {
        Some(range) => range,
        None => return coplanar_intersects(n1, [v0, v1, v2], [u0, u1, u2]),
    };

    let (v_lo, v_hi) = sorted(interval_v);
    let (u_lo, u_hi) = sorted(interval_u);
    v_hi >= u_lo && u_hi >= v_lo
}

fn clamp_near_zero(x: f64) -> f64 {
    if x.abs() < EPS {
        0.0
    } else {
        x
    }
}

fn sorted((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn dominant_axis(v: DVec3) -> usize {
    let abs = v.abs();
    if abs.x >= abs.y && abs.x >= abs.z {
        0
    } else if abs.y >= abs.z {
        1
    } else {
        2
    }
}

fn component(v: DVec3, axis: usize) -> f64 {
    match axis {
        0 => v.x,
        1 => v.y,
        _ => v.z,
    }
}

/// Finds the interval a triangle's projected vertices carve out along the
/// line of intersection of the two triangles' planes, given the signed
/// distances of those same vertices to the *other* triangle's plane.
/// Returns `None` when all three distances are zero, signaling the two
/// triangles are coplanar.
fn compute_interval(
    vv: (f64, f64, f64),
    d: (f64, f64, f64),
    d0d1: f64,
    d0d2: f64,
) -> Option<(f64, f64)> {
    let (vv0, vv1, vv2) = vv;
    let (d0, d1, d2) = d;

    if d0d1 > 0.0 {
        Some(isect(vv2, vv0, vv1, d2, d0, d1))
    } else if d0d2 > 0.0 {
        Some(isect(vv1, vv0, vv2, d1, d0, d2))
    } else if d1 * d2 > 0.0 || d0 != 0.0 {
        Some(isect(vv0, vv1, vv2, d0, d1, d2))
    } else if d1 != 0.0 {
        Some(isect(vv1, vv0, vv2, d1, d0, d2))
    } else if d2 != 0.0 {
        Some(isect(vv2, vv0, vv1, d2, d0, d1))
    } else {
        None
    }
}

fn isect(vv0: f64, vv1: f64, vv2: f64, d0: f64, d1: f64, d2: f64) -> (f64, f64) {
    let i0 = vv0 + (vv1 - vv0) * d0 / (d0 - d1);
    let i1 = vv0 + (vv2 - vv0) * d0 / (d0 - d2);
    (i0, i1)
}

fn coplanar_intersects(n1: DVec3, v: [DVec3; 3], u: [DVec3; 3]) -> bool {
    let drop_axis = dominant_axis(n1);
    let (i0, i1) = match drop_axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let proj = |p: DVec3| (component(p, i0), component(p, i1));
    let v2 = [proj(v[0]), proj(v[1]), proj(v[2])];
    let u2 = [proj(u[0]), proj(u[1]), proj(u[2])];
    triangles_overlap_2d(v2, u2)
}

fn triangles_overlap_2d(v: [(f64, f64); 3], u: [(f64, f64); 3]) -> bool {
    for i in 0..3 {
        let a0 = v[i];
        let a1 = v[(i + 1) % 3];
        for j in 0..3 {
            let b0 = u[j];
            let b1 = u[(j + 1) % 3];
            if segments_intersect_2d(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    point_in_triangle_2d(v[0], u) || point_in_triangle_2d(u[0], v)
}

fn orient(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn segments_intersect_2d(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64), p4: (f64, f64)) -> bool {
    let d1 = orient(p3, p4, p1);
    let d2 = orient(p3, p4, p2);
    let d3 = orient(p1, p2, p3);
    let d4 = orient(p1, p2, p4);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

fn point_in_triangle_2d(p: (f64, f64), t: [(f64, f64); 3]) -> bool {
    let d1 = orient(p, t[0], t[1]);
    let d2 = orient(p, t[1], t[2]);
    let d3 = orient(p, t[2], t[0]);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[cfg(test)]
#[path = "narrow_phase_tests.rs"]
mod tests;
