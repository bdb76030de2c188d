// Playfield geometry: client -> canvas -> polar -> lane
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::model::{LANE_COUNT, Playfield, Point, Polar};

/// Bounding rectangle of the canvas in client space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
}

pub fn client_to_canvas(client_x: f64, client_y: f64, rect: CanvasRect) -> Point {
    Point::new(client_x - rect.left, client_y - rect.top)
}

/// Converts a canvas-local pixel to polar coordinates around the canvas center.
/// The quarter turn puts angle 0 straight up, like a clock face.
pub fn to_polar(p: Point, field: Playfield) -> Polar {
    let c = field.center();
    let dx = p.x - c.x;
    let dy = p.y - c.y;
    let distance = dx.hypot(dy);
    let mut angle = dy.atan2(dx) + FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }
    Polar { angle, distance }
}

/// Maps a normalized angle to its lane. Winding is reversed so lane 0 starts at angle 0.
pub fn angle_to_lane(angle: f64) -> u32 {
    let sector = TAU / LANE_COUNT as f64;
    let raw = (angle / sector).floor() as i64;
    (LANE_COUNT as i64 - raw).rem_euclid(LANE_COUNT as i64) as u32
}
