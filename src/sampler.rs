

use rand::random;

use crate::numeric::Float;

//////////////////////////////////////////////////////////////////////////
/// SAMPLING UTILS
//////////////////////////////////////////////////////////////////////////

/// Uniform sample in [0, 1).
pub fn random_float() -> Float {
    random::<Float>()
}

/// Sub-pixel jitter offsets in [-0.5, 0.5), for antialiasing the
/// diagram edges.
pub fn square_jitter() -> (Float, Float) {
    (random_float() - 0.5, random_float() - 0.5)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_stays_inside_pixel() {
        for _ in 0..1000 {
            let (jx, jy) = square_jitter();
            assert!((-0.5..0.5).contains(&jx));
            assert!((-0.5..0.5).contains(&jy));
        }
    }
}
