//! Rendering of coordinate grids.
//!
//! - `pass`: pure render pass producing cells plus pending inherited
//!   highlights
//! - `html`: markup for the browser container and the CLI

pub mod html;
mod pass;

pub use pass::{render_pass, RenderPass};
