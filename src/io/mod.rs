//! Output utilities for triangulation results.

mod svg;

pub use svg::{edges_to_svg_path, triangulation_to_svg};
