//! Colorimetric conversions between device RGB and the classic color models.
//!
//! Every space type carries f64 channels in the space's natural range plus an
//! alpha in `[0, 1]` that passes through conversions untouched. Quantization
//! to bytes happens only at the [`Rgba8`] ends, so a `u8 -> space -> u8`
//! round-trip stays within one unit of rounding error per channel.

use crate::foundation::core::Rgba8;

/// Hue/saturation/lightness.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Hue/saturation/value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsv {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value, `[0, 1]`.
    pub v: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Subtractive cyan/magenta/yellow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cmy {
    /// Cyan, `[0, 1]`.
    pub c: f64,
    /// Magenta, `[0, 1]`.
    pub m: f64,
    /// Yellow, `[0, 1]`.
    pub y: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Subtractive cyan/magenta/yellow/key with undercolor removal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cmyk {
    /// Cyan, `[0, 1]`.
    pub c: f64,
    /// Magenta, `[0, 1]`.
    pub m: f64,
    /// Yellow, `[0, 1]`.
    pub y: f64,
    /// Key (black), `[0, 1]`.
    pub k: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// CIE XYZ tristimulus values relative to the sRGB/D65 reference.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Xyz {
    /// X tristimulus, nominally `[0, 0.9505]`.
    pub x: f64,
    /// Y tristimulus (luminance), `[0, 1]`.
    pub y: f64,
    /// Z tristimulus, nominally `[0, 1.089]`.
    pub z: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// CIE L\*a\*b\* relative to the D65 white point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lab {
    /// Lightness L\*, `[0, 100]`.
    pub l: f64,
    /// Green-red opponent a\*, approximately `[-128, 127]`.
    pub a_star: f64,
    /// Blue-yellow opponent b\*, approximately `[-128, 127]`.
    pub b_star: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Digital luma/chroma per BT.601, full range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YCbCr {
    /// Luma, `[0, 255]`.
    pub y: f64,
    /// Blue-difference chroma, `[0, 255]`, centered on 128.
    pub cb: f64,
    /// Red-difference chroma, `[0, 255]`, centered on 128.
    pub cr: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Analog PAL luma/chroma.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Yuv {
    /// Luma, `[0, 1]`.
    pub y: f64,
    /// U chroma, approximately `[-0.436, 0.436]`.
    pub u: f64,
    /// V chroma, approximately `[-0.615, 0.615]`.
    pub v: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Analog NTSC luma/chroma.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Yiq {
    /// Luma, `[0, 1]`.
    pub y: f64,
    /// In-phase chroma, approximately `[-0.5957, 0.5957]`.
    pub i: f64,
    /// Quadrature chroma, approximately `[-0.5226, 0.5226]`.
    pub q: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

/// Analog component luma/chroma per BT.601.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YPbPr {
    /// Luma, `[0, 1]`.
    pub y: f64,
    /// Blue-difference chroma, `[-0.5, 0.5]`.
    pub pb: f64,
    /// Red-difference chroma, `[-0.5, 0.5]`.
    pub pr: f64,
    /// Alpha, `[0, 1]`.
    pub a: f64,
}

fn unit_channels(c: Rgba8) -> (f64, f64, f64, f64) {
    (
        f64::from(c.r) / 255.0,
        f64::from(c.g) / 255.0,
        f64::from(c.b) / 255.0,
        f64::from(c.a) / 255.0,
    )
}

fn quantize_unit(r: f64, g: f64, b: f64, a: f64) -> Rgba8 {
    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    Rgba8 {
        r: to_u8(r),
        g: to_u8(g),
        b: to_u8(b),
        a: to_u8(a),
    }
}

/// Hue angle in degrees from the channel extrema, 0 for achromatic input.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / delta % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let deg = h * 60.0;
    if deg < 0.0 { deg + 360.0 } else { deg }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// IEC 61966-2-1 sRGB companding.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

// CIE standard thresholds and the D65 reference white of sRGB.
const CIE_EPSILON: f64 = 216.0 / 24389.0;
const CIE_KAPPA: f64 = 24389.0 / 27.0;
const D65_WHITE: [f64; 3] = [0.950_47, 1.0, 1.088_83];

impl Rgba8 {
    /// Convert to hue/saturation/lightness.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b, a) = unit_channels(self);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsl {
            h: hue_degrees(r, g, b, max, delta),
            s,
            l,
            a,
        }
    }

    /// Convert to hue/saturation/value.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b, a) = unit_channels(self);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h: hue_degrees(r, g, b, max, delta),
            s,
            v: max,
            a,
        }
    }

    /// Convert to the CMY complement.
    pub fn to_cmy(self) -> Cmy {
        let (r, g, b, a) = unit_channels(self);
        Cmy {
            c: 1.0 - r,
            m: 1.0 - g,
            y: 1.0 - b,
            a,
        }
    }

    /// Convert to CMYK with undercolor removal.
    ///
    /// Pure black maps to `(0, 0, 0, 1)`; the chromatic channels are left at
    /// zero rather than divided by the vanishing `1 - k`.
    pub fn to_cmyk(self) -> Cmyk {
        let Cmy { c, m, y, a } = self.to_cmy();
        let k = c.min(m).min(y);
        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
                a,
            };
        }
        Cmyk {
            c: (c - k) / (1.0 - k),
            m: (m - k) / (1.0 - k),
            y: (y - k) / (1.0 - k),
            k,
            a,
        }
    }

    /// Convert to CIE XYZ (sRGB primaries, D65 white).
    pub fn to_xyz(self) -> Xyz {
        let (r, g, b, a) = unit_channels(self);
        let r = srgb_to_linear(r);
        let g = srgb_to_linear(g);
        let b = srgb_to_linear(b);
        Xyz {
            x: 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b,
            y: 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b,
            z: 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b,
            a,
        }
    }

    /// Convert to CIE L\*a\*b\* (D65 white).
    pub fn to_lab(self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert to BT.601 full-range digital luma/chroma.
    pub fn to_ycbcr(self) -> YCbCr {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);
        YCbCr {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b,
            cr: 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b,
            a: f64::from(self.a) / 255.0,
        }
    }

    /// Convert to analog PAL luma/chroma.
    pub fn to_yuv(self) -> Yuv {
        let (r, g, b, a) = unit_channels(self);
        Yuv {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            u: -0.147_13 * r - 0.288_86 * g + 0.436 * b,
            v: 0.615 * r - 0.514_99 * g - 0.100_01 * b,
            a,
        }
    }

    /// Convert to analog NTSC luma/chroma.
    pub fn to_yiq(self) -> Yiq {
        let (r, g, b, a) = unit_channels(self);
        Yiq {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            i: 0.595_716 * r - 0.274_453 * g - 0.321_263 * b,
            q: 0.211_456 * r - 0.522_591 * g + 0.311_135 * b,
            a,
        }
    }

    /// Convert to analog component luma/chroma per BT.601.
    pub fn to_ypbpr(self) -> YPbPr {
        let (r, g, b, a) = unit_channels(self);
        YPbPr {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            pb: -0.168_736 * r - 0.331_264 * g + 0.5 * b,
            pr: 0.5 * r - 0.418_688 * g - 0.081_312 * b,
            a,
        }
    }
}

impl Hsl {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        let h = (self.h % 360.0 + 360.0) % 360.0 / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return quantize_unit(l, l, l, self.a);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        quantize_unit(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            self.a,
        )
    }
}

impl Hsv {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        let h = (self.h % 360.0 + 360.0) % 360.0 / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        if s == 0.0 {
            return quantize_unit(v, v, v, self.a);
        }

        let sextant = (h.floor() as i32).rem_euclid(6);
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sextant {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        quantize_unit(r, g, b, self.a)
    }
}

impl Cmy {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        quantize_unit(1.0 - self.c, 1.0 - self.m, 1.0 - self.y, self.a)
    }
}

impl Cmyk {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        let k = self.k.clamp(0.0, 1.0);
        if k >= 1.0 {
            return quantize_unit(0.0, 0.0, 0.0, self.a);
        }
        quantize_unit(
            (1.0 - self.c.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - self.m.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - self.y.clamp(0.0, 1.0)) * (1.0 - k),
            self.a,
        )
    }
}

impl Xyz {
    /// Convert to CIE L\*a\*b\* (D65 white).
    pub fn to_lab(self) -> Lab {
        fn f(t: f64) -> f64 {
            if t > CIE_EPSILON {
                t.cbrt()
            } else {
                (CIE_KAPPA * t + 16.0) / 116.0
            }
        }

        let fx = f(self.x / D65_WHITE[0]);
        let fy = f(self.y / D65_WHITE[1]);
        let fz = f(self.z / D65_WHITE[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a_star: 500.0 * (fx - fy),
            b_star: 200.0 * (fy - fz),
            a: self.a,
        }
    }

    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        let r = 3.240_454_2 * self.x - 1.537_138_5 * self.y - 0.498_531_4 * self.z;
        let g = -0.969_266_0 * self.x + 1.876_010_8 * self.y + 0.041_556_0 * self.z;
        let b = 0.055_643_4 * self.x - 0.204_025_9 * self.y + 1.057_225_2 * self.z;
        quantize_unit(
            linear_to_srgb(r.clamp(0.0, 1.0)),
            linear_to_srgb(g.clamp(0.0, 1.0)),
            linear_to_srgb(b.clamp(0.0, 1.0)),
            self.a,
        )
    }
}

impl Lab {
    /// Convert to CIE XYZ (D65 white).
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a_star / 500.0;
        let fz = fy - self.b_star / 200.0;

        fn inv_f(t: f64) -> f64 {
            let t3 = t * t * t;
            if t3 > CIE_EPSILON {
                t3
            } else {
                (116.0 * t - 16.0) / CIE_KAPPA
            }
        }

        let yr = if self.l > CIE_KAPPA * CIE_EPSILON {
            let t = (self.l + 16.0) / 116.0;
            t * t * t
        } else {
            self.l / CIE_KAPPA
        };

        Xyz {
            x: inv_f(fx) * D65_WHITE[0],
            y: yr * D65_WHITE[1],
            z: inv_f(fz) * D65_WHITE[2],
            a: self.a,
        }
    }

    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        self.to_xyz().to_rgba8()
    }
}

impl YCbCr {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        let cb = self.cb - 128.0;
        let cr = self.cr - 128.0;
        quantize_unit(
            (self.y + 1.402 * cr) / 255.0,
            (self.y - 0.344_136 * cb - 0.714_136 * cr) / 255.0,
            (self.y + 1.772 * cb) / 255.0,
            self.a,
        )
    }
}

impl Yuv {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        quantize_unit(
            self.y + 1.139_83 * self.v,
            self.y - 0.394_65 * self.u - 0.580_60 * self.v,
            self.y + 2.032_11 * self.u,
            self.a,
        )
    }
}

impl Yiq {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        quantize_unit(
            self.y + 0.9563 * self.i + 0.6210 * self.q,
            self.y - 0.2721 * self.i - 0.6474 * self.q,
            self.y - 1.1070 * self.i + 1.7046 * self.q,
            self.a,
        )
    }
}

impl YPbPr {
    /// Convert back to device RGB.
    pub fn to_rgba8(self) -> Rgba8 {
        quantize_unit(
            self.y + 1.402 * self.pr,
            self.y - 0.344_136 * self.pb - 0.714_136 * self.pr,
            self.y + 1.772 * self.pb,
            self.a,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/spaces.rs"]
mod tests;
