use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the grid with corners (x: {}, y: {}) and (x: {}, y: {})",
        .point.x,
        .point.y,
        .pixel_rect.top_left().x,
        .pixel_rect.top_left().y,
        .pixel_rect.bottom_right().x,
        .pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps a grid cell onto the complex region so that the corner cells land
/// exactly on the region's corners.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_y = f64::from(pixel_position.y - pixel_rect.top_left().y);

    Ok(complex_rect.point_at(
        relative_x / f64::from(pixel_rect.width() - 1),
        relative_y / f64::from(pixel_rect.height() - 1),
    ))
}
