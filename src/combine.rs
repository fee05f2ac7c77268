//! Per-pixel combination: channel-wise saturating division of RGB565 values.

pub const RED_MASK: u16 = 0xF800;
pub const GREEN_MASK: u16 = 0x07E0;
pub const BLUE_MASK: u16 = 0x001F;

pub const RED_SHIFT: u16 = 11;
pub const GREEN_SHIFT: u16 = 5;

pub const RED_MAX: u8 = 31;
pub const GREEN_MAX: u8 = 63;
pub const BLUE_MAX: u8 = 31;

/// Packed value the sweep substitutes when an input lookup fails.
/// Collides with a legitimate low-intensity pixel; accepted as-is.
pub const NO_DATA: u16 = 255;

/// Fixed light color (r=31, g=63, b=31) written wherever data was missing.
pub const LIGHT_PIXEL: u16 = pack(RED_MAX, GREEN_MAX, BLUE_MAX);

/// Packs three channel values into one RGB565 word.
/// Out-of-range bits are masked off.
#[inline]
#[must_use]
pub const fn pack(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16) << RED_SHIFT) & RED_MASK
        | ((g as u16) << GREEN_SHIFT) & GREEN_MASK
        | (b as u16) & BLUE_MASK
}

/// Unpacks an RGB565 word into (red, green, blue) channel values.
#[inline]
#[must_use]
pub const fn unpack(pixel: u16) -> (u8, u8, u8) {
    (
        ((pixel & RED_MASK) >> RED_SHIFT) as u8,
        ((pixel & GREEN_MASK) >> GREEN_SHIFT) as u8,
        (pixel & BLUE_MASK) as u8,
    )
}

/// Integer division saturating to `max` when the divisor is zero or the
/// quotient would not fit the channel width. Total over all inputs.
#[inline]
#[must_use]
pub const fn saturating_div(a: u8, b: u8, max: u8) -> u8 {
    if b == 0 {
        return max;
    }
    let q = a / b;
    if q > max { max } else { q }
}

/// Divides `a` by `b` channel by channel.
///
/// Either input equal to [`NO_DATA`] means "nothing at this position"; the
/// result is then the fixed [`LIGHT_PIXEL`] and no division happens.
#[inline]
#[must_use]
pub const fn combine(a: u16, b: u16) -> u16 {
    if a == NO_DATA || b == NO_DATA {
        return LIGHT_PIXEL;
    }

    let (ar, ag, ab) = unpack(a);
    let (br, bg, bb) = unpack(b);

    pack(
        saturating_div(ar, br, RED_MAX),
        saturating_div(ag, bg, GREEN_MAX),
        saturating_div(ab, bb, BLUE_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_masks() {
        assert_eq!(pack(31, 0, 0), RED_MASK);
        assert_eq!(pack(0, 63, 0), GREEN_MASK);
        assert_eq!(pack(0, 0, 31), BLUE_MASK);
        assert_eq!(unpack(0xFFFF), (31, 63, 31));
        assert_eq!(unpack(0x0000), (0, 0, 0));
    }

    #[test]
    fn test_light_pixel_is_all_channels_max() {
        assert_eq!(LIGHT_PIXEL, 0xFFFF);
    }

    #[test]
    fn test_zero_divisor_saturates() {
        assert_eq!(saturating_div(17, 0, RED_MAX), 31);
        assert_eq!(saturating_div(0, 0, GREEN_MAX), 63);

        // one zero channel saturates only that channel
        let a = pack(10, 20, 30);
        let b = pack(2, 0, 3);
        assert_eq!(unpack(combine(a, b)), (5, 63, 10));
    }

    #[test]
    fn test_exact_floor_division() {
        let a = pack(30, 45, 28);
        let b = pack(4, 9, 7);
        assert_eq!(unpack(combine(a, b)), (7, 5, 4));
    }

    #[test]
    fn test_no_data_sentinel_yields_light_pixel() {
        assert_eq!(combine(NO_DATA, pack(1, 1, 1)), LIGHT_PIXEL);
        assert_eq!(combine(pack(1, 1, 1), NO_DATA), LIGHT_PIXEL);
        assert_eq!(combine(NO_DATA, NO_DATA), LIGHT_PIXEL);
    }

    #[test]
    fn test_combine_is_total() {
        // every divisor channel zero still produces a value
        assert_eq!(combine(pack(31, 63, 31), 0), LIGHT_PIXEL);
    }
}
