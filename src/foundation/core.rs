pub use kurbo::{Affine, Point, Rect, Vec2};

/// Rotation/flip transform of a box, applied about the box centre.
///
/// `flip_x` mirrors across the vertical axis, `flip_y` across the horizontal axis. The flip is
/// applied before the rotation, matching how a browser composes `rotate()` with `scale(-1, 1)`
/// when both are written in the same `transform` declaration.
pub fn box_transform(bounds: Rect, rotation_deg: f64, flip_x: bool, flip_y: bool) -> Affine {
    let center = bounds.center().to_vec2();
    let sx = if flip_x { -1.0 } else { 1.0 };
    let sy = if flip_y { -1.0 } else { 1.0 };
    Affine::translate(center)
        * Affine::rotate(rotation_deg.to_radians())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-center)
}

/// Bounds of a box from its top-left corner and size.
pub fn box_bounds(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
