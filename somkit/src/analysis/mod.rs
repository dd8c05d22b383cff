//! This module contains read-only analysis of a trained map: component planes, feature plane
//! distances for external clustering and model fitting statistics.

mod features;
pub use self::features::*;

mod plane;
pub use self::plane::*;

mod statistics;
pub use self::statistics::*;
