//! Data types for highlights and rendered grids.

mod highlight;
mod rendered;

pub use highlight::*;
pub use rendered::*;
