use crate::model::{FLICK_MIN_DISTANCE, FlickDirection};

use super::history::TouchHistory;

/// Classifies a released touch from the first and last sample of its window.
/// Returns `None` for taps/holds: too few samples or too short a stroke.
pub fn classify(history: &TouchHistory) -> Option<FlickDirection> {
    if history.len() < 2 {
        return None;
    }
    let start = history.first()?.position;
    let end = history.last()?.position;
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.hypot(dy) < FLICK_MIN_DISTANCE {
        return None;
    }
    direction_for_degrees(dy.atan2(dx).to_degrees())
}

/// Buckets a screen-space heading (y down) in degrees.
/// Ranges share their edges; the first match wins, so ±45 is right and ±135 is down/left.
pub fn direction_for_degrees(deg: f64) -> Option<FlickDirection> {
    if (-45.0..=45.0).contains(&deg) {
        Some(FlickDirection::Right)
    } else if (45.0..=135.0).contains(&deg) {
        Some(FlickDirection::Down)
    } else if deg >= 135.0 || deg <= -135.0 {
        Some(FlickDirection::Left)
    } else if (-135.0..=-45.0).contains(&deg) {
        Some(FlickDirection::Up)
    } else {
        None
    }
}
