//! Floating-point geometric value types.

mod circle2;
mod edge2;
mod edge_set;
mod point2;
mod vec2;

pub use circle2::Circle2;
pub use edge2::Edge2;
pub use edge_set::{edges_touching, neighbors_of, EdgeSet};
pub use point2::Point2;
pub use vec2::Vec2;
