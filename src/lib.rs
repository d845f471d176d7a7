//! Mutable 3D vector and quaternion value types.
//!
//! ```
//! use quatern::{Quaternion, Vector};
//!
//! let mut v = Vector::new(3.0, 4.0, 0.0);
//! assert!((v.magnitude() - 5.0).abs() < 1e-12);
//! v.normalise().unwrap();
//!
//! let q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
//! let p = Quaternion::multiplication(&q, &Quaternion::conjugate(&q));
//! assert_eq!(p, Quaternion::identity());
//! ```
//!
//! Every operation that divides by a magnitude returns
//! [`Error::ZeroMagnitude`] instead of producing NaN or infinity.

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{Quaternion, Vector};
