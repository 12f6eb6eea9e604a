use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelRectError {
    #[error("pixel rect must be at least 2x2 cells: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive grid of cells laid over a complex region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        let max_extent = i64::from(i32::MAX);
        if width < 2 || height < 2 || width > max_extent || height > max_extent {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Grid anchored at the origin with `width` columns and `height` rows.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let too_large = |n: u32| i32::try_from(n).is_err();
        if width < 2 || height < 2 || too_large(width) || too_large(height) {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Every cell in row-major order, bounds inclusive.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Self {
            top_left,
            bottom_right,
        } = *self;

        (top_left.y..=bottom_right.y)
            .flat_map(move |y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
    }
}
