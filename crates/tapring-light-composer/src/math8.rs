/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// Never reaches the input value at full scale, use [`fade8`] when `255` must be identity.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Multiply an 8-bit value by `level / 255`
///
/// `fade8(v, 255) == v` and `fade8(v, 0) == 0`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade8(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

/// Share of `total` items covered by `percent` (0-100), rounded up
///
/// Any non-zero percentage lights at least one item.
#[inline]
pub const fn percent_of(percent: u8, total: usize) -> usize {
    let percent = if percent > 100 { 100 } else { percent as usize };
    (percent * total).div_ceil(100)
}
