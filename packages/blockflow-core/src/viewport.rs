use crate::error::ConfigError;

/// Padding added below the laid-out content when deriving the minimum scene
/// height.
pub const MIN_HEIGHT_PADDING: f32 = 75.0;

/// Viewport dimensions in raw pixels (`w`, `h`), halves (`w2`, `h2`), and
/// device-independent pixels (`wr`, `hr`), plus the content-driven minimum
/// height. Halves and DIP values are always derived through `new`, never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
    pub w2: f32,
    pub h2: f32,
    pub wr: f32,
    pub hr: f32,
    pub min_height: f32,
}

impl Size {
    pub fn new(w: f32, h: f32, device_pixel_ratio: f32) -> Self {
        Self {
            w,
            h,
            w2: w / 2.0,
            h2: h / 2.0,
            wr: w / device_pixel_ratio,
            hr: h / device_pixel_ratio,
            min_height: 0.0,
        }
    }

    /// Dimensions the renderer surface should take: full DIP width, and the
    /// DIP height raised to the minimum scene height when content overflows.
    pub fn render_size(&self) -> (f32, f32) {
        (self.wr, self.hr.max(self.min_height))
    }
}

/// Owns the size state and the device pixel ratio. Seeded from the initial
/// width/height before any block exists; `resize` falls back to the
/// last-known dimensions when a side is omitted.
#[derive(Debug, Clone)]
pub struct Viewport {
    size: Size,
    device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0) {
            return Err(ConfigError::NonPositiveWidth(width));
        }
        if !(height > 0.0) {
            return Err(ConfigError::NonPositiveHeight(height));
        }
        if !(device_pixel_ratio > 0.0) {
            return Err(ConfigError::NonPositiveDevicePixelRatio(
                device_pixel_ratio,
            ));
        }
        Ok(Self {
            size: Size::new(width, height, device_pixel_ratio),
            device_pixel_ratio,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    pub fn resize(&mut self, width: Option<f32>, height: Option<f32>) {
        let w = width.unwrap_or(self.size.w);
        let h = height.unwrap_or(self.size.h);
        let min_height = self.size.min_height;
        self.size = Size::new(w, h, self.device_pixel_ratio);
        self.size.min_height = min_height;
        tracing::debug!(w, h, wr = self.size.wr, hr = self.size.hr, "viewport resized");
    }

    /// Records the content height produced by the last layout pass; the
    /// minimum scene height is the content plus fixed padding, never below
    /// the raw viewport height (see `Size::render_size`).
    pub fn set_content_height(&mut self, content_height: f32) {
        self.size.min_height = content_height + MIN_HEIGHT_PADDING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_derives_halves_and_dip() {
        let size = Size::new(400.0, 300.0, 2.0);
        assert_eq!(size.w2, 200.0);
        assert_eq!(size.h2, 150.0);
        assert_eq!(size.wr, 200.0);
        assert_eq!(size.hr, 150.0);
    }

    #[test]
    fn render_size_honors_min_height() {
        let mut viewport = Viewport::new(400.0, 300.0, 1.0).unwrap();
        assert_eq!(viewport.size().render_size(), (400.0, 300.0));
        viewport.set_content_height(500.0);
        assert_eq!(viewport.size().render_size(), (400.0, 575.0));
    }

    #[test]
    fn resize_falls_back_to_last_known() {
        let mut viewport = Viewport::new(400.0, 300.0, 1.0).unwrap();
        viewport.resize(Some(800.0), None);
        assert_eq!(viewport.size().w, 800.0);
        assert_eq!(viewport.size().h, 300.0);
        viewport.resize(None, None);
        assert_eq!(viewport.size().w, 800.0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(matches!(
            Viewport::new(0.0, 300.0, 1.0),
            Err(ConfigError::NonPositiveWidth(_))
        ));
        assert!(matches!(
            Viewport::new(400.0, -1.0, 1.0),
            Err(ConfigError::NonPositiveHeight(_))
        ));
        assert!(matches!(
            Viewport::new(400.0, 300.0, 0.0),
            Err(ConfigError::NonPositiveDevicePixelRatio(_))
        ));
    }
}
