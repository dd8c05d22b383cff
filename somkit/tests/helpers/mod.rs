
pub mod som;
pub mod utils;
