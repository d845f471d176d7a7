use crate::error::{Error, Result};

/// A mutable quaternion `w + xi + yj + zk`.
///
/// No unit-norm invariant is enforced; call [`normalise`] when a rotation
/// quaternion is needed.
///
/// [`normalise`]: #method.normalise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Constructs a new quaternion from its scalar part `w` and its
    /// imaginary parts `x`, `y`, `z`.
    #[inline(always)]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    #[inline(always)]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Returns the Hamilton product `q1 · q2`.
    ///
    /// The product is associative but not commutative, so operand order
    /// matters.
    pub fn multiplication(q1: &Self, q2: &Self) -> Self {
        Self {
            w: q2.w * q1.w - q2.x * q1.x - q2.y * q1.y - q2.z * q1.z,
            x: q2.w * q1.x + q2.x * q1.w - q2.y * q1.z + q2.z * q1.y,
            y: q2.w * q1.y + q2.x * q1.z + q2.y * q1.w - q2.z * q1.x,
            z: q2.w * q1.z - q2.x * q1.y + q2.y * q1.x + q2.z * q1.w,
        }
    }

    /// Returns `q` with its imaginary parts negated.
    #[inline(always)]
    pub fn conjugate(q: &Self) -> Self {
        Self::new(q.w, -q.x, -q.y, -q.z)
    }

    /// Returns the multiplicative inverse `conjugate(q) / |q|²`.
    pub fn inverse(q: &Self) -> Result<Self> {
        let mag = q.magnitude();
        if mag == 0.0 {
            return Err(Error::zero_magnitude("Quaternion::inverse"));
        }
        // Two divisions by |q| instead of one by |q|², which may overflow.
        let Quaternion { w, x, y, z } = Self::conjugate(q);
        Ok(Self::new(w / mag / mag, x / mag / mag, y / mag / mag, z / mag / mag))
    }

    /// Returns an independent quaternion holding the same components.
    #[inline(always)]
    pub fn copy(&self) -> Self {
        *self
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Calculates the Euclidean norm, without overflow or underflow in
    /// the intermediate squares.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(libm::hypot(self.w, self.x), libm::hypot(self.y, self.z))
    }

    #[inline(always)]
    pub fn magnitude_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scales the quaternion to unit magnitude.
    ///
    /// Fails with [`Error::ZeroMagnitude`] for the zero quaternion, which
    /// is left untouched.
    pub fn normalise(&mut self) -> Result<()> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(Error::zero_magnitude("Quaternion::normalise"));
        }
        self.w /= mag;
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
        Ok(())
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline(always)]
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self { w, x, y, z }
    }
}

/// `a * b` is `Quaternion::multiplication(&a, &b)`.
impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiplication(&self, &rhs)
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}
