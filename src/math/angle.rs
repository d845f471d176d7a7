//! Conversions between degrees and radians.

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Converts an angle in degrees to radians.
#[inline(always)]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

/// Converts an angle in radians to degrees.
#[inline(always)]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}
