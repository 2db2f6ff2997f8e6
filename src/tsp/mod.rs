//! Euclidean TSP problem instances.
//!
//! A problem instance is a fixed list of 2D points plus the cyclic tour
//! length function the GA minimizes. The engine only sees the
//! [`TspProblem`] trait; [`TspInstance`] is the point-list implementation.
//!
//! # Key Types
//!
//! - [`Point`]: immutable 2D coordinate pair
//! - [`TspProblem`]: size, tour length, random tour
//! - [`TspInstance`]: concrete instance with uniform and circular layouts

mod instance;
mod point;

pub use instance::{TspInstance, TspProblem};
pub use point::Point;
