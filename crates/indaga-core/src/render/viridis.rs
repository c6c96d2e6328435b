//! Viridis colour gradient.

/// Viridis sampled at 0.0, 0.1, ..., 1.0.
const STOPS: [[u8; 3]; 11] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x24, 0x75],
    [0x41, 0x44, 0x87],
    [0x35, 0x5f, 0x8d],
    [0x2a, 0x78, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x22, 0xa8, 0x84],
    [0x44, 0xbf, 0x70],
    [0x7a, 0xd1, 0x51],
    [0xbd, 0xdf, 0x26],
    [0xfd, 0xe7, 0x25],
];

/// Colour at position `t` in `[0, 1]`; out-of-range values are clamped.
pub(crate) fn at(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (STOPS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    if lower >= STOPS.len() - 1 {
        return STOPS[STOPS.len() - 1];
    }
    let frac = scaled - lower as f64;
    let (a, b) = (STOPS[lower], STOPS[lower + 1]);
    let mut out = [0u8; 3];
    for (channel, slot) in out.iter_mut().enumerate() {
        let value = f64::from(a[channel]) + (f64::from(b[channel]) - f64::from(a[channel])) * frac;
        *slot = value.round() as u8;
    }
    out
}

/// Colour for bar `rank` of `total`, at position `rank / total`.
pub(crate) fn for_rank(rank: usize, total: usize) -> [u8; 3] {
    if total == 0 {
        return STOPS[0];
    }
    at(rank as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(at(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(at(1.0), [0xfd, 0xe7, 0x25]);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(at(-3.0), at(0.0));
        assert_eq!(at(7.0), at(1.0));
        assert_eq!(at(f64::NAN), at(0.0));
    }

    #[test]
    fn interpolates_between_stops() {
        // Halfway between the first two stops.
        assert_eq!(at(0.05), [70, 19, 101]);
    }

    #[test]
    fn rank_zero_is_the_start_colour() {
        assert_eq!(for_rank(0, 20), at(0.0));
        assert_eq!(for_rank(10, 20), at(0.5));
        assert_eq!(for_rank(0, 0), at(0.0));
    }
}
