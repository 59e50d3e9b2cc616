#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Rounds `x` to `digits` decimal places.
#[inline]
pub fn round_to(x: f64, digits: u8) -> f64 {
    let scale = libm::pow(10.0, digits as f64);
    libm::round(x * scale) / scale
}
