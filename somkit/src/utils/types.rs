/// Alias to a scalar floating type.
///
/// NOTE: `f64` is used everywhere as prototype updates accumulate many small increments and
/// `f32` loses precision on long training runs.
pub type Float = f64;
