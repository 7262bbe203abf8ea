/// Ease-out-cubic: fast start, decelerating into the target.
///
/// Input is clamped to `[0, 1]`, so `ease_out_cubic(0) == 0` and
/// `ease_out_cubic(1) == 1` exactly.
#[inline]
pub fn ease_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

/// Linear progress of `elapsed` through `duration`, clamped to `[0, 1]`.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
}
