use crate::Rect;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// 3D tilt for a card under the pointer at client coordinates `(x, y)`.
pub fn tilt_transform(rect: Rect, x: f64, y: f64) -> String {
    let local_x = x - rect.left;
    let local_y = y - rect.top;
    let rotate_x = (local_y - rect.height / 2.0) / 20.0;
    let rotate_y = (rect.width / 2.0 - local_x) / 20.0;
    format!(
        "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-10px)"
    )
}
