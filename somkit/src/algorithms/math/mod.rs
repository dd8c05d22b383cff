//! This module contains vector arithmetic, descriptive statistics and distance metrics.

mod distance;
pub use self::distance::*;

mod statistics;
pub use self::statistics::*;

mod vector;
pub use self::vector::*;
