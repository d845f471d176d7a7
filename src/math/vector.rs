use crate::error::{Error, Result};

use super::angle::deg_to_rad;

/// A mutable 3-dimensional vector.
///
/// Represents a displacement or a direction. The in-place operations
/// ([`add`], [`normalise`], the rotations, ...) mutate the receiver,
/// everything else returns a fresh value.
///
/// [`add`]: #method.add
/// [`normalise`]: #method.normalise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Constructs a new 3-dimensional vector using the provided values.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns an independent vector holding the same components.
    #[inline(always)]
    pub fn copy(&self) -> Self {
        *self
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Adds `other` to this vector, component by component.
    #[inline(always)]
    pub fn add(&mut self, other: &Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    /// Subtracts `other` from this vector, component by component.
    #[inline(always)]
    pub fn sub(&mut self, other: &Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }

    /// Calculates the Euclidean length of the vector.
    ///
    /// Uses `hypot` so that components near the ends of the `f64` range
    /// neither overflow nor underflow when squared.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(libm::hypot(self.x, self.y), self.z)
    }

    /// Calculates the squared magnitude of the vector.
    ///
    /// May overflow to infinity for components above roughly `1e154`.
    #[inline(always)]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot_product(self)
    }

    /// Scales the vector to unit length.
    ///
    /// Fails with [`Error::ZeroMagnitude`] for the zero vector, which is
    /// left untouched.
    pub fn normalise(&mut self) -> Result<()> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(Error::zero_magnitude("Vector::normalise"));
        }
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
        Ok(())
    }

    /// Calculates the dot product between two 3-dimensional vectors.
    #[inline(always)]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates `cos θ` for the angle θ between the two vectors,
    /// i.e. `a·b / (|a| |b|)`.
    ///
    /// The result is not clamped, so rounding may push it marginally
    /// outside `[-1, 1]`.
    pub fn cos_theta_angle_diff(&self, other: &Self) -> Result<f64> {
        let (mag, other_mag) = (self.magnitude(), other.magnitude());
        if mag == 0.0 || other_mag == 0.0 {
            return Err(Error::zero_magnitude("Vector::cos_theta_angle_diff"));
        }
        // Dividing before the dot product keeps the products in range.
        let a = Self::new(self.x / mag, self.y / mag, self.z / mag);
        let b = Self::new(other.x / other_mag, other.y / other_mag, other.z / other_mag);
        Ok(a.dot_product(&b))
    }

    /// Calculates the cross product between two 3-dimensional vectors.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Offsets each component by the matching delta.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Multiplies each component by the matching factor.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.x *= sx;
        self.y *= sy;
        self.z *= sz;
    }

    pub fn scale_uniform(&mut self, s: f64) {
        self.scale(s, s, s);
    }

    /// Rotates the vector about the X axis by `rad` radians.
    pub fn rotate_x(&mut self, rad: f64) {
        let (sin, cos) = libm::sincos(rad);
        let y = self.y * cos - self.z * sin;
        self.z = self.y * sin + self.z * cos;
        self.y = y;
    }

    /// Rotates the vector about the Y axis by `rad` radians.
    pub fn rotate_y(&mut self, rad: f64) {
        let (sin, cos) = libm::sincos(rad);
        let z = self.z * cos - self.x * sin;
        self.x = self.z * sin + self.x * cos;
        self.z = z;
    }

    /// Rotates the vector about the Z axis by `rad` radians.
    pub fn rotate_z(&mut self, rad: f64) {
        let (sin, cos) = libm::sincos(rad);
        let x = self.x * cos - self.y * sin;
        self.y = self.x * sin + self.y * cos;
        self.x = x;
    }

    pub fn rotate_x_deg(&mut self, deg: f64) {
        self.rotate_x(deg_to_rad(deg));
    }

    pub fn rotate_y_deg(&mut self, deg: f64) {
        self.rotate_y(deg_to_rad(deg));
    }

    pub fn rotate_z_deg(&mut self, deg: f64) {
        self.rotate_z(deg_to_rad(deg));
    }
}

impl From<[f64; 3]> for Vector {
    #[inline(always)]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        Vector::add(self, &rhs);
    }
}

impl std::ops::Add for Vector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::ops::SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        Vector::sub(self, &rhs);
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(mut self, s: f64) -> Self {
        self.scale_uniform(s);
        self
    }
}

impl std::ops::Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "⟨{}, {}, {}⟩", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vector, b: Vector) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn add_mutates_receiver_only() {
        let mut a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        a.add(&b);
        assert_eq!(a, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b, Vector::new(4.0, 5.0, 6.0));

        a.sub(&b);
        assert_eq!(a, Vector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn magnitude_and_normalise() {
        let mut v = Vector::new(3.0, 4.0, 0.0);
        assert_abs_diff_eq!(v.magnitude(), 5.0, epsilon = 1e-12);
        assert_eq!(v.magnitude_squared(), 25.0);

        v.normalise().unwrap();
        assert_vec_eq(v, Vector::new(0.6, 0.8, 0.0));
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn normalise_zero_vector_fails_and_keeps_value() {
        let mut v = Vector::zeros();
        let err = v.normalise().unwrap_err();
        assert_eq!(
            err,
            Error::ZeroMagnitude {
                operation: "Vector::normalise"
            }
        );
        assert_eq!(v, Vector::zeros());
    }

    #[test]
    fn normalise_extreme_magnitudes() {
        for &c in [1e200, -1e200, 1e-200, f64::MAX, 5e-324].iter() {
            let mut v = Vector::new(c, 0.0, 0.0);
            assert!(v.magnitude() > 0.0 && v.magnitude().is_finite());
            v.normalise().unwrap();
            assert_vec_eq(v, Vector::new(c.signum(), 0.0, 0.0));
        }

        let mut v = Vector::new(1e200, 1e200, 1e200);
        v.normalise().unwrap();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.x, 1.0 / 3f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn cos_theta_extreme_magnitudes() {
        let big = Vector::new(1e200, 0.0, 0.0);
        let tiny = Vector::new(0.0, 1e-200, 0.0);
        assert_abs_diff_eq!(big.cos_theta_angle_diff(&big).unwrap(), 1.0);
        assert_abs_diff_eq!(tiny.cos_theta_angle_diff(&tiny).unwrap(), 1.0);
        assert_eq!(big.cos_theta_angle_diff(&tiny).unwrap(), 0.0);

        // |a|·|b| underflows to zero here, but neither vector is zero.
        let a = Vector::new(1e-200, 0.0, 0.0);
        let b = Vector::new(1e-200, 1e-200, 0.0);
        assert_abs_diff_eq!(
            a.cos_theta_angle_diff(&b).unwrap(),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-15
        );
    }

    #[test]
    fn cos_theta_of_perpendicular_and_parallel() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let b = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(a.dot_product(&b), 0.0);
        assert_eq!(a.cos_theta_angle_diff(&b).unwrap(), 0.0);

        let c = Vector::new(2.0, 0.0, 0.0);
        assert_abs_diff_eq!(a.cos_theta_angle_diff(&c).unwrap(), 1.0);
        assert_abs_diff_eq!(a.cos_theta_angle_diff(&-c).unwrap(), -1.0);
    }

    #[test]
    fn cos_theta_with_zero_vector_fails() {
        let a = Vector::new(1.0, 2.0, 3.0);
        assert!(matches!(
            a.cos_theta_angle_diff(&Vector::zeros()),
            Err(Error::ZeroMagnitude { .. })
        ));
        assert!(Vector::zeros().cos_theta_angle_diff(&a).is_err());
    }

    #[test]
    fn cross_is_right_handed() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector::new(0.0, 0.0, -1.0));

        let d = Vector::new(1.0, 2.0, 3.0);
        let e = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(d.cross(&e), Vector::new(-3.0, 6.0, -3.0));
        assert_eq!(d.dot_product(&e), 32.0);
    }

    #[test]
    fn translate_and_scale() {
        let mut v = Vector::new(1.0, 1.0, 1.0);
        v.translate(1.0, -2.0, 0.5);
        assert_eq!(v, Vector::new(2.0, -1.0, 1.5));
        v.scale(2.0, 3.0, 4.0);
        assert_eq!(v, Vector::new(4.0, -3.0, 6.0));
        v.scale_uniform(0.5);
        assert_eq!(v, Vector::new(2.0, -1.5, 3.0));
    }

    #[test]
    fn quarter_turns_follow_right_hand_rule() {
        let mut v = Vector::new(1.0, 0.0, 0.0);
        v.rotate_z_deg(90.0);
        assert_vec_eq(v, Vector::new(0.0, 1.0, 0.0));

        v.rotate_x_deg(90.0);
        assert_vec_eq(v, Vector::new(0.0, 0.0, 1.0));

        v.rotate_y_deg(90.0);
        assert_vec_eq(v, Vector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let mut v = Vector::new(1.0, -2.0, 3.0);
        let before = v.magnitude();
        v.rotate_x(0.3);
        v.rotate_y(-1.1);
        v.rotate_z(2.7);
        assert_abs_diff_eq!(v.magnitude(), before, epsilon = 1e-12);
    }

    #[test]
    fn operators() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * a, Vector::new(3.0, 6.0, 9.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn conversions_and_display() {
        let v = Vector::from([1.5, -2.0, 0.0]);
        assert_eq!(v.to_array(), [1.5, -2.0, 0.0]);
        assert_eq!(v.to_string(), "⟨1.5, -2, 0⟩");
    }
}
