//! Provides a self-organizing map: a fixed grid of prototype vectors arranged on a lattice.

mod grid;
pub use self::grid::*;

mod lattice;
pub use self::lattice::*;

mod model;
pub use self::model::*;

mod neighborhood;
pub use self::neighborhood::*;

mod state;
pub use self::state::*;
