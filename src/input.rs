//! Browser touch events -> `TouchTracker`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, TouchEvent};

use crate::model::{Millis, Playfield, Point, TouchId};
use crate::state::{CanvasRect, TouchTracker, client_to_canvas};

pub type SharedTracker = Rc<RefCell<TouchTracker>>;

type TouchClosure = Closure<dyn FnMut(TouchEvent)>;

/// DOM touch event types the canvas listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawTouchKind {
    Start,
    Move,
    End,
    Cancel,
}

impl RawTouchKind {
    pub const ALL: [RawTouchKind; 4] = [Self::Start, Self::Move, Self::End, Self::Cancel];

    pub fn event_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
            Self::Cancel => "touchcancel",
        }
    }
}

/// Feeds one event's changed touches to the tracker in the order the browser listed them.
pub fn apply_batch(
    tracker: &mut TouchTracker,
    kind: RawTouchKind,
    batch: &[(TouchId, Point)],
    now: Millis,
) {
    for &(id, pos) in batch {
        match kind {
            RawTouchKind::Start => tracker.on_touch_start(id, pos, now),
            RawTouchKind::Move => tracker.on_touch_move(id, pos, now),
            RawTouchKind::End => tracker.on_touch_end(id, now),
            RawTouchKind::Cancel => tracker.on_touch_cancel(id, now),
        }
    }
}

/// `performance.now()`, or wall-clock ms when the Performance API is missing.
pub fn now_millis() -> Millis {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn canvas_rect(canvas: &HtmlCanvasElement) -> CanvasRect {
    let r = canvas.get_bounding_client_rect();
    CanvasRect {
        left: r.left(),
        top: r.top(),
    }
}

pub fn playfield_of(canvas: &HtmlCanvasElement) -> Playfield {
    Playfield::new(canvas.width() as f64, canvas.height() as f64)
}

fn changed_touches(e: &TouchEvent, rect: CanvasRect) -> Vec<(TouchId, Point)> {
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            let pos = client_to_canvas(t.client_x() as f64, t.client_y() as f64, rect);
            (t.identifier(), pos)
        })
        .collect()
}

/// Live touch listeners on a canvas. Dropping it detaches them.
pub struct TouchBindings {
    canvas: HtmlCanvasElement,
    listeners: Vec<(RawTouchKind, TouchClosure)>,
}

impl TouchBindings {
    pub fn attach(canvas: &HtmlCanvasElement, tracker: SharedTracker) -> Result<Self, JsValue> {
        let mut bindings = Self {
            canvas: canvas.clone(),
            listeners: Vec::with_capacity(RawTouchKind::ALL.len()),
        };
        for kind in RawTouchKind::ALL {
            let cb = {
                let canvas_tc = canvas.clone();
                let tracker_tc = tracker.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let now = now_millis();
                    let batch = changed_touches(&e, canvas_rect(&canvas_tc));
                    let mut t = tracker_tc.borrow_mut();
                    // canvas.width/height may have changed since the last event
                    let field = playfield_of(&canvas_tc);
                    if t.playfield() != field {
                        t.resize(field);
                    }
                    apply_batch(&mut t, kind, &batch, now);
                }) as Box<dyn FnMut(_)>)
            };
            canvas.add_event_listener_with_callback(kind.event_name(), cb.as_ref().unchecked_ref())?;
            bindings.listeners.push((kind, cb));
        }
        log::debug!("touch listeners attached");
        Ok(bindings)
    }
}

impl Drop for TouchBindings {
    fn drop(&mut self) {
        for (kind, cb) in &self.listeners {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(kind.event_name(), cb.as_ref().unchecked_ref());
        }
        log::debug!("touch listeners detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JudgeEvent, Phase};

    fn tracker() -> (TouchTracker, Rc<RefCell<Vec<JudgeEvent>>>) {
        let mut t = TouchTracker::new(Playfield::new(300.0, 300.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        t.register_judge(move |e: &JudgeEvent| sink.borrow_mut().push(e.clone()));
        (t, seen)
    }

    #[test]
    fn batch_is_processed_in_order() {
        let (mut t, seen) = tracker();
        let batch = [(2, Point::new(150.0, 20.0)), (1, Point::new(280.0, 150.0))];
        apply_batch(&mut t, RawTouchKind::Start, &batch, 10.0);
        assert_eq!(t.active_count(), 2);
        let ids: Vec<TouchId> = seen.borrow().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn cancel_acts_like_end() {
        let (mut t, seen) = tracker();
        apply_batch(&mut t, RawTouchKind::Start, &[(5, Point::new(150.0, 50.0))], 0.0);
        apply_batch(&mut t, RawTouchKind::Cancel, &[(5, Point::new(0.0, 0.0))], 30.0);
        assert_eq!(t.active_count(), 0);
        assert_eq!(seen.borrow().last().map(|e| e.phase), Some(Phase::End));
    }

    #[test]
    fn event_names() {
        let names: Vec<&str> = RawTouchKind::ALL.iter().map(|k| k.event_name()).collect();
        assert_eq!(names, ["touchstart", "touchmove", "touchend", "touchcancel"]);
    }
}
