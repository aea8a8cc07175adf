/*

    Ray-primitive intersection utilities for the diagram renderer:
    triangle intersection for the cuboid faces and closest-approach
    distances for the arrow shaft, arrow tip and axis guides.

    @date: 28 Nov, 2025
    @author: bartu
*/

use crate::interval::Interval;
use crate::numeric::{approx_zero, Float, Vector3};
use crate::ray::Ray;

pub fn tri_normal(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> Vector3 {
    // WARNING: Assumes triangle corners are given in counter clockwise order
    //
    //    v1
    //  /    \
    // v2 —— v3
    //
    let left = v1 - v2;
    let right = v3 - v2;
    let normal = right.cross(left).normalize();

    debug_assert!(normal.is_normalized());
    normal
}

/// Möller-Trumbore ray/triangle test. Returns ray-t of the hit if it
/// falls inside the given interval.
///
/// WARNING: Assumes the interval has incorporated a relevant epsilon,
/// e.g. [0.0001, inf] instead of [0.0, inf], otherwise hits right at
/// the ray origin may flicker from floating point error.
pub fn moller_trumbore_intersection(
    ray: &Ray,
    t_interval: &Interval,
    corners: &[Vector3; 3],
) -> Option<Float> {
    //
    //     a (pivot)
    //    / \
    //  b  -  c
    //
    let [tri_pivot, tri_left, tri_right] = *corners;
    let edge_ab = tri_left - tri_pivot;
    let edge_ac = tri_right - tri_pivot;

    // Scalar triple product https://youtu.be/fK1RPmF_zjQ
    debug_assert!(ray.direction.is_normalized());
    let perp = ray.direction.cross(edge_ac);
    let determinant: Float = perp.dot(edge_ab);
    if approx_zero(determinant) {
        return None; // Ray parallel to the triangle plane
    }

    let inverse_determinant = 1.0 as Float / determinant;
    let dist = ray.origin - tri_pivot;
    let barycentric_u = dist.dot(perp) * inverse_determinant;
    if !(0.0..=1.0).contains(&barycentric_u) {
        return None;
    }
    let another_perp = dist.cross(edge_ab);
    let barycentric_v = ray.direction.dot(another_perp) * inverse_determinant;
    if (barycentric_v < 0.0) || ((barycentric_u + barycentric_v) > 1.0) {
        return None;
    }

    // Get ray t
    let t = edge_ac.dot(another_perp) * inverse_determinant;
    if !t_interval.contains(t) {
        return None;
    }
    Some(t)
}

/// Closest approach between a ray and the segment [a, b].
/// Returns (ray t, segment parameter in [0,1], distance).
pub fn ray_segment_distance(ray: &Ray, a: Vector3, b: Vector3) -> (Float, Float, Float) {
    let seg = b - a;
    let w = ray.origin - a;

    let uu = ray.direction.dot(ray.direction); // 1 for normalized rays
    let uv = ray.direction.dot(seg);
    let vv = seg.dot(seg);
    let uw = ray.direction.dot(w);
    let vw = seg.dot(w);

    let denominator = uu * vv - uv * uv;
    let mut seg_t = if approx_zero(denominator) {
        // Parallel lines, any segment point gives the same distance
        0.0
    } else {
        (uu * vw - uv * uw) / denominator
    };

    // Clamp onto the segment, then re-project the ray parameter onto
    // the clamped point and clamp it to the forward half line
    seg_t = seg_t.clamp(0.0, 1.0);
    let mut ray_t = (a + seg * seg_t - ray.origin).dot(ray.direction) / uu;
    ray_t = ray_t.max(0.0);
    seg_t = if vv > 0.0 {
        ((ray.at(ray_t) - a).dot(seg) / vv).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let distance = ray.at(ray_t).distance(a + seg * seg_t);
    (ray_t, seg_t, distance)
}

/// Distance from a point to the segment [a, b].
pub fn point_segment_distance(p: Vector3, a: Vector3, b: Vector3) -> Float {
    let seg = b - a;
    let vv = seg.dot(seg);
    if approx_zero(vv) {
        return p.distance(a);
    }
    let t = ((p - a).dot(seg) / vv).clamp(0.0, 1.0);
    p.distance(a + seg * t)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::approx_eq;

    #[test]
    fn test_head_on_triangle_hit() {
        let corners = [
            Vector3::new(0.0, 1.0, -5.0),
            Vector3::new(-1.0, -1.0, -5.0),
            Vector3::new(1.0, -1.0, -5.0),
        ];
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        let t = moller_trumbore_intersection(&ray, &Interval::positive(1e-6), &corners)
            .expect("ray through the triangle center must hit");
        assert!(approx_eq(t, 5.0));
    }

    #[test]
    fn test_miss_outside_triangle() {
        let corners = [
            Vector3::new(0.0, 1.0, -5.0),
            Vector3::new(-1.0, -1.0, -5.0),
            Vector3::new(1.0, -1.0, -5.0),
        ];
        let ray = Ray::new(Vector3::new(3.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(moller_trumbore_intersection(&ray, &Interval::positive(1e-6), &corners).is_none());
    }

    #[test]
    fn test_hit_behind_origin_is_rejected() {
        let corners = [
            Vector3::new(0.0, 1.0, 5.0),
            Vector3::new(-1.0, -1.0, 5.0),
            Vector3::new(1.0, -1.0, 5.0),
        ];
        // Triangle sits behind the ray
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert!(moller_trumbore_intersection(&ray, &Interval::positive(1e-6), &corners).is_none());
    }

    #[test]
    fn test_ray_segment_distance_perpendicular() {
        // Ray along +x at height y=1, segment along z at the origin
        let ray = Ray::new(Vector3::new(-5.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let (ray_t, seg_t, dist) =
            ray_segment_distance(&ray, Vector3::new(0.0, 0.0, -2.0), Vector3::new(0.0, 0.0, 2.0));
        assert!(approx_eq(dist, 1.0));
        assert!(approx_eq(ray_t, 5.0));
        assert!(approx_eq(seg_t, 0.5));
    }

    #[test]
    fn test_ray_segment_distance_clamps_to_endpoint() {
        let ray = Ray::new(Vector3::new(10.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -1.0));
        let (_, seg_t, dist) =
            ray_segment_distance(&ray, Vector3::ZERO, Vector3::new(4.0, 0.0, 0.0));
        assert!(approx_eq(seg_t, 1.0)); // nearest segment point is the b endpoint
        assert!(approx_eq(dist, 6.0));
    }

    #[test]
    fn test_point_segment_distance() {
        let a = Vector3::ZERO;
        let b = Vector3::new(10.0, 0.0, 0.0);
        assert!(approx_eq(point_segment_distance(Vector3::new(5.0, 3.0, 0.0), a, b), 3.0));
        assert!(approx_eq(point_segment_distance(Vector3::new(-4.0, 0.0, 0.0), a, b), 4.0));
    }

    #[test]
    fn test_tri_normal_direction() {
        let n = tri_normal(
            &Vector3::new(0.0, 1.0, 0.0),
            &Vector3::new(-1.0, 0.0, 0.0),
            &Vector3::new(1.0, 0.0, 0.0),
        );
        assert!(approx_eq(n.dot(Vector3::new(0.0, 0.0, 1.0)).abs(), 1.0));
    }
}
