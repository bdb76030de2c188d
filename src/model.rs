//! Core data types shared by the tracker, the browser adapter and the host.

use serde::{Deserialize, Serialize};

/// Number of angular lanes around the playfield.
pub const LANE_COUNT: u32 = 60;
/// Samples kept per touch.
pub const HISTORY_CAPACITY: usize = 20;
/// Minimum first-to-last displacement (px) for a release to count as a flick.
pub const FLICK_MIN_DISTANCE: f64 = 30.0;

/// Monotonic timestamp in milliseconds (`performance.now()` in the browser).
pub type Millis = f64;

/// Identifier assigned to a touch by the input source.
pub type TouchId = i32;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the canvas the touches land on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Polar coordinates around the playfield center. Angle 0 points straight up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// Radians in [0, 2π).
    pub angle: f64,
    /// Pixels from the center.
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Move,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlickDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One timestamped position in a touch's history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub position: Point,
    pub time: Millis,
}

/// Facts about one touch handed to the judge on every phase transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeEvent {
    pub id: TouchId,
    pub lane: u32,
    pub distance: f64,
    pub phase: Phase,
    /// Only ever set on `Phase::End`.
    pub flick_direction: Option<FlickDirection>,
    pub start_time: Millis,
}

/// Host preferences persisted across sessions. Gesture thresholds are fixed constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Minimum level forwarded to the browser console.
    pub log_level: String,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl GestureSettings {
    /// Parses `log_level`, falling back to `Info` for anything unrecognised.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Level handed to the console logger at startup; `off` still installs it at `Error`.
    pub fn console_level(&self) -> log::Level {
        self.level_filter().to_level().unwrap_or(log::Level::Error)
    }
}
