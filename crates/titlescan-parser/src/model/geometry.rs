//! Frame geometry value types.

/// Frame size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when the scanner reported a usable frame size.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel aspect ratio as reported by the scanner (`num/den`).
///
/// A zero component means the ratio was not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelAspect {
    /// Numerator.
    pub num: u32,
    /// Denominator.
    pub den: u32,
}

impl PixelAspect {
    /// Create a new pixel aspect ratio.
    pub fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// The ratio as a float, if both components are known.
    pub fn ratio(&self) -> Option<f64> {
        if self.num == 0 || self.den == 0 {
            return None;
        }
        Some(f64::from(self.num) / f64::from(self.den))
    }

    /// True for square pixels.
    pub fn is_square(&self) -> bool {
        self.num != 0 && self.num == self.den
    }
}

impl std::fmt::Display for PixelAspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Black-border margins in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cropping {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Cropping {
    /// Create a crop region in scanner order: top, bottom, left, right.
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// True when no border is cropped.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Total pixels removed from the width.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total pixels removed from the height.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// True when the margins leave a non-empty picture inside `frame`.
    pub fn fits_within(&self, frame: Resolution) -> bool {
        self.horizontal() < frame.width && self.vertical() < frame.height
    }

    /// Frame size left after cropping, saturating at zero.
    pub fn apply(&self, frame: Resolution) -> Resolution {
        Resolution::new(
            frame.width.saturating_sub(self.horizontal()),
            frame.height.saturating_sub(self.vertical()),
        )
    }
}

impl std::fmt::Display for Cropping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}/{}", self.top, self.bottom, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_aspect_ratio() {
        assert_eq!(PixelAspect::new(1, 1).ratio(), Some(1.0));
        assert!(PixelAspect::new(1, 1).is_square());
        assert!(!PixelAspect::new(64, 45).is_square());
        assert_eq!(PixelAspect::default().ratio(), None);
        assert!(!PixelAspect::default().is_square());
    }

    #[test]
    fn test_crop_apply() {
        let frame = Resolution::new(720, 576);
        let crop = Cropping::new(72, 70, 0, 2);
        assert_eq!(crop.apply(frame), Resolution::new(718, 434));
        assert!(crop.fits_within(frame));
    }

    #[test]
    fn test_crop_out_of_range() {
        let frame = Resolution::new(720, 480);
        let crop = Cropping::new(300, 300, 0, 0);
        assert!(!crop.fits_within(frame));
        assert_eq!(crop.apply(frame), Resolution::new(720, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
        assert_eq!(PixelAspect::new(32, 27).to_string(), "32/27");
        assert_eq!(Cropping::new(0, 0, 10, 10).to_string(), "0/0/10/10");
        assert!(Cropping::default().is_zero());
    }
}
