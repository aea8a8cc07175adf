/*

This is intended to quickly import commonly used modules across
the induction planner crate.

@date: 21 Nov, 2025
@author: bartu
*/

// Almost every module uses tracing, so I'm adding it here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::Serialize;

pub use crate::numeric::*;
pub use crate::sampler::random_float;
