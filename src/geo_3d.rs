mod vector;
mod edge;
mod face;
mod sampling;

// Re-export the geometry types
pub use vector::Vector3;
pub use edge::Edge;
pub use face::{
    Face,
    FaceError,
};
pub use sampling::{
    GridMode,
    PointKind,
    SampledPoint,
};
