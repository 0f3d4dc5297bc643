//! Mapping between video time, frame numbers, and per-frame risk series.
//!
//! Backend frames are 1-based; `riskTimeline[i]` holds the score of frame `i + 1`.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

pub use capture::format_timestamp;

/// Parse an `m:ss` (or `h:mm:ss`) offset into seconds.
pub fn parse_timestamp(text: &str) -> Option<f64> {
    let mut total: u64 = 0;
    let mut parts = 0;
    for part in text.trim().split(':') {
        let value: u64 = part.parse().ok()?;
        if parts > 0 && value >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
        parts += 1;
    }
    if !(2..=3).contains(&parts) {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(total as f64)
}

/// 1-based frame shown at `seconds` for a video at `fps`.
pub fn frame_at(seconds: f64, fps: u32) -> u64 {
    if fps == 0 || !seconds.is_finite() || seconds <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (seconds * f64::from(fps)).floor() as u64;
    index + 1
}

/// Start time of a 1-based frame.
pub fn time_of_frame(frame: u64, fps: u32) -> f64 {
    if fps == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let index = frame.saturating_sub(1) as f64;
    index / f64::from(fps)
}

/// Risk value for the frame at `seconds`, clamped to the series bounds.
pub fn risk_at(timeline: &[u32], seconds: f64, fps: u32) -> Option<u32> {
    let last = timeline.len().checked_sub(1)?;
    let index = usize::try_from(frame_at(seconds, fps) - 1).unwrap_or(usize::MAX);
    timeline.get(index.min(last)).copied()
}

/// Position of `seconds` within `duration`, clamped to 0..=1.
pub fn fraction_of(seconds: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !seconds.is_finite() {
        return 0.0;
    }
    (seconds / duration).clamp(0.0, 1.0)
}

/// Reduce a series to at most `max_points` buckets, keeping each bucket's peak
/// so short spikes stay visible on narrow charts.
pub fn downsample_peaks(values: &[u32], max_points: usize) -> Vec<u32> {
    if max_points == 0 {
        return Vec::new();
    }
    if values.len() <= max_points {
        return values.to_vec();
    }
    let bucket = values.len().div_ceil(max_points);
    values
        .chunks(bucket)
        .map(|chunk| chunk.iter().copied().max().unwrap_or(0))
        .collect()
}
