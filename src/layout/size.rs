use crate::widgets::Insets;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// A size that places no constraint on either axis
    pub const fn unbounded() -> Self {
        Self {
            width: f32::INFINITY,
            height: f32::INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Remove insets from both axes, never going below zero
    pub fn shrunk_by(&self, insets: Insets) -> Self {
        Self {
            width: (self.width - insets.horizontal()).max(0.0),
            height: (self.height - insets.vertical()).max(0.0),
        }
    }

    /// Add insets to both axes
    pub fn grown_by(&self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal(),
            height: self.height + insets.vertical(),
        }
    }

    /// Component-wise minimum
    pub fn min(&self, other: Size) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_new() {
        let size = Size::new(100.0, 50.0);
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 50.0);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(Size::new(-5.0, 10.0).is_empty());
        assert!(!Size::new(10.0, 10.0).is_empty());
    }

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::zero());
    }

    #[test]
    fn test_shrunk_by_clamps_at_zero() {
        let insets = Insets::all(15.0);
        assert_eq!(Size::new(100.0, 50.0).shrunk_by(insets), Size::new(70.0, 20.0));
        assert_eq!(Size::new(20.0, 10.0).shrunk_by(insets), Size::zero());
    }

    #[test]
    fn test_shrunk_by_keeps_unbounded() {
        let inner = Size::unbounded().shrunk_by(Insets::all(15.0));
        assert_eq!(inner.width, f32::INFINITY);
        assert_eq!(inner.height, f32::INFINITY);
    }

    #[test]
    fn test_grown_by() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Size::new(10.0, 10.0).grown_by(insets), Size::new(16.0, 14.0));
    }

    #[test]
    fn test_min() {
        assert_eq!(
            Size::new(10.0, 40.0).min(Size::new(20.0, 30.0)),
            Size::new(10.0, 30.0)
        );
    }
}
