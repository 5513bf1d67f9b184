#![forbid(unsafe_code)]

//! Geometric primitives.

/// An axis-aligned rectangle in viewport coordinates.
///
/// Origin is the viewport's top-left corner; `top` grows downward and `left`
/// grows rightward. Values are CSS pixels and may be fractional or negative
/// (an element scrolled partly out of view has a negative `top`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top edge (inclusive).
    pub top: f64,
    /// Left edge (inclusive).
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal centre.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical centre.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has no area (including negative or NaN extents).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check that every component is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, left: f64, top: f64) -> bool {
        left >= self.left && left < self.right() && top >= self.top && top < self.bottom()
    }

    /// Same rectangle moved by `(dy, dx)`.
    #[inline]
    #[must_use]
    pub fn translate(&self, dy: f64, dx: f64) -> Self {
        Self::new(self.top + dy, self.left + dx, self.width, self.height)
    }

    /// Check that this rectangle lies entirely within `[0, size]` on both axes.
    pub fn fits_within(&self, size: Size) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom() <= size.height
            && self.right() <= size.width
    }
}

/// A width/height pair, used for panel sizes and the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is empty until it has strictly positive width and height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // Written as negations so NaN counts as empty.
        !(self.width > 0.0) || !(self.height > 0.0)
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        rect.size()
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}
