//! Colour helpers. Scene colours are authored as sRGB hex and stored linear.

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` sRGB hex to linear RGB.
pub fn srgb_hex(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

/// HSL (all components in [0, 1]) to linear RGB.
pub fn hsl(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let rgb = if s == 0.0 {
        [l, l, l]
    } else {
        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        ]
    };
    rgb.map(srgb_to_linear)
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_extremes() {
        assert_eq!(srgb_hex(0x000000), [0.0, 0.0, 0.0]);
        assert_eq!(srgb_hex(0xffffff), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn pure_red_from_hsl() {
        let [r, g, b] = hsl(0.0, 1.0, 0.5);
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6 && b.abs() < 1e-6);
    }
}
