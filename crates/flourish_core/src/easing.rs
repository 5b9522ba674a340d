/// Exponential ease-out curve shared by every page animation.
///
/// Maps linear progress in `[0, 1]` to decelerating motion. Exactly 1.0
/// at full progress, so the final frame of an animation always lands on
/// its target value.
pub fn ease_out_expo(x: f64) -> f64 {
    if x >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}
