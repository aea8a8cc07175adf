

use crate::numeric::{Float, Vector3};


#[derive(Debug)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        debug_assert!(direction.is_normalized());
        Self {
            origin,
            direction,
        }
    }

    #[inline]
    pub fn at(&self, t: Float) -> Vector3 {
        self.origin + self.direction * t // r(t) = o + dt
    }
}


// Smaller ray_t means closer to the ray origin, which for primary
// rays is the camera; the renderer keeps the record with minimal t.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub hit_point: Vector3,
    pub normal: Vector3,
    pub ray_t: Float,
}

impl Hit {
    pub fn new(hit_point: Vector3, normal: Vector3, ray_t: Float) -> Self {
        Self {
            hit_point,
            normal,
            ray_t,
        }
    }
}
