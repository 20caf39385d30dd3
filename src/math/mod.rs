pub mod scalar;
pub mod vector;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Fixed-size vector of any dimension.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;
