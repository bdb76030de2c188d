use std::collections::HashMap;

use log::{debug, trace};

use crate::model::{
    FlickDirection, JudgeEvent, LANE_COUNT, Millis, Phase, Playfield, Point, TouchId,
};

use super::flick;
use super::history::TouchHistory;
use super::judge::{Dispatcher, Judge};
use super::polar::{angle_to_lane, to_polar};

/// Current facts of one pressed touch.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchState {
    pub id: TouchId,
    pub position: Point,
    pub angle: f64,
    pub distance: f64,
    pub lane: u32,
    pub start_time: Millis,
}

impl TouchState {
    fn locate(&mut self, position: Point, field: Playfield) {
        let polar = to_polar(position, field);
        self.position = position;
        self.angle = polar.angle;
        self.distance = polar.distance;
        self.lane = angle_to_lane(polar.angle);
    }
}

/// A touch and its history live and die together.
#[derive(Clone, Debug)]
pub struct TrackedTouch {
    pub state: TouchState,
    pub history: TouchHistory,
}

/// Owns every pressed touch on the playfield and reports transitions to the judge.
#[derive(Debug)]
pub struct TouchTracker {
    field: Playfield,
    touches: HashMap<TouchId, TrackedTouch>,
    dispatcher: Dispatcher,
}

impl TouchTracker {
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            touches: HashMap::new(),
            dispatcher: Dispatcher::default(),
        }
    }

    pub fn playfield(&self) -> Playfield {
        self.field
    }

    /// Takes effect on the next start/move; active touches keep their last lane until then.
    pub fn resize(&mut self, field: Playfield) {
        self.field = field;
    }

    pub fn register_judge(&mut self, judge: impl Judge + 'static) {
        self.dispatcher.register(Box::new(judge));
    }

    pub fn clear_judge(&mut self) {
        self.dispatcher.clear();
    }

    pub fn on_touch_start(&mut self, id: TouchId, position: Point, now: Millis) {
        let mut state = TouchState {
            id,
            position,
            angle: 0.0,
            distance: 0.0,
            lane: 0,
            start_time: now,
        };
        state.locate(position, self.field);
        let history = TouchHistory::new(position, now);
        debug!(
            "touch {id} start lane={} distance={:.1}",
            state.lane, state.distance
        );
        if self
            .touches
            .insert(id, TrackedTouch { state, history })
            .is_some()
        {
            debug!("touch {id} restarted before it ended");
        }
        self.dispatch(id, Phase::Start, None);
    }

    /// Ignored when `id` is not pressed.
    pub fn on_touch_move(&mut self, id: TouchId, position: Point, now: Millis) {
        let Some(touch) = self.touches.get_mut(&id) else {
            trace!("touch {id} move ignored: not active");
            return;
        };
        touch.state.locate(position, self.field);
        touch.history.push(position, now);
        trace!("touch {id} move lane={}", touch.state.lane);
        self.dispatch(id, Phase::Move, None);
    }

    /// Classifies and reports the release, then forgets the touch. Safe to call for any id.
    pub fn on_touch_end(&mut self, id: TouchId, now: Millis) {
        if let Some(touch) = self.touches.get(&id) {
            let flick = flick::classify(&touch.history);
            debug!(
                "touch {id} end after {:.0}ms flick={flick:?}",
                now - touch.state.start_time
            );
            self.dispatch(id, Phase::End, flick);
        }
        self.touches.remove(&id);
    }

    pub fn on_touch_cancel(&mut self, id: TouchId, now: Millis) {
        self.on_touch_end(id, now);
    }

    pub fn touch(&self, id: TouchId) -> Option<&TrackedTouch> {
        self.touches.get(&id)
    }

    pub fn touch_lane(&self, id: TouchId) -> Option<u32> {
        self.touches.get(&id).map(|t| t.state.lane)
    }

    pub fn touch_distance(&self, id: TouchId) -> Option<f64> {
        self.touches.get(&id).map(|t| t.state.distance)
    }

    pub fn active_count(&self) -> usize {
        self.touches.len()
    }

    /// Whether the touch sits in the `width`-lane window anchored at `lane`.
    /// Window bounds use the same reversed numbering as `angle_to_lane`.
    pub fn is_touching_lane(&self, id: TouchId, lane: u32, width: u32) -> bool {
        let Some(touch_lane) = self.touch_lane(id) else {
            return false;
        };
        if width >= LANE_COUNT {
            return true;
        }
        let n = LANE_COUNT as i64;
        // Euclidean modulo: lane + width > 60 wraps instead of going negative like JS `%`.
        let start = (n - lane as i64 - width as i64).rem_euclid(n);
        let end = (n - lane as i64).rem_euclid(n);
        let t = touch_lane as i64;
        if start < end {
            t >= start && t < end
        } else {
            t >= start || t < end
        }
    }

    fn dispatch(&mut self, id: TouchId, phase: Phase, flick_direction: Option<FlickDirection>) {
        if !self.dispatcher.has_judge() {
            return;
        }
        let Some(touch) = self.touches.get(&id) else {
            return;
        };
        let event = JudgeEvent {
            id,
            lane: touch.state.lane,
            distance: touch.state.distance,
            phase,
            flick_direction,
            start_time: touch.state.start_time,
        };
        self.dispatcher.dispatch(&event);
    }
}
