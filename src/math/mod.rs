//! The vector and quaternion value types, plus the angle helpers they use.

pub mod angle;
mod quaternion;
mod vector;

pub use quaternion::Quaternion;
pub use vector::Vector;
