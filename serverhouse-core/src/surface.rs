use serde::{Deserialize, Serialize};

/// Canvas size as laid out by CSS plus the device pixel ratio, measured by
/// the caller and handed to backends on construction and on resize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width: sanitize_len(css_width),
            css_height: sanitize_len(css_height),
            device_pixel_ratio,
        }
    }

    /// Ratio actually applied; unusable values mean 1.
    pub fn dpr(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Backing-store width in device pixels.
    pub fn backing_width(&self) -> u32 {
        (self.css_width * self.dpr()).floor() as u32
    }

    /// Backing-store height in device pixels.
    pub fn backing_height(&self) -> u32 {
        (self.css_height * self.dpr()).floor() as u32
    }

    /// Width over height of the backing store, 1 when empty.
    pub fn aspect(&self) -> f32 {
        let (w, h) = (self.backing_width(), self.backing_height());
        if w == 0 || h == 0 {
            1.0
        } else {
            w as f32 / h as f32
        }
    }

    pub fn is_empty(&self) -> bool {
        self.backing_width() == 0 || self.backing_height() == 0
    }

    /// Absolute 2D context transform `(a, b, c, d, e, f)` mapping CSS pixels
    /// to device pixels. Applied with `setTransform`, so repeating it never
    /// compounds the scale.
    pub fn css_to_device_transform(&self) -> [f64; 6] {
        let dpr = self.dpr();
        [dpr, 0.0, 0.0, dpr, 0.0, 0.0]
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

fn sanitize_len(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
