//! This module contains the core algorithms: vector math and the self-organizing map itself.

pub mod math;
pub mod som;
