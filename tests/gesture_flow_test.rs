//! Full touch lifecycles through the tracker with a recording judge.

use std::cell::RefCell;
use std::rc::Rc;

use ring_touch::model::{FlickDirection, JudgeEvent, Phase, Playfield, Point};
use ring_touch::state::TouchTracker;

type Recorded = Rc<RefCell<Vec<JudgeEvent>>>;

fn tracker_with_judge(field: Playfield) -> (TouchTracker, Recorded) {
    let mut tracker = TouchTracker::new(field);
    let seen: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    tracker.register_judge(move |ev: &JudgeEvent| sink.borrow_mut().push(ev.clone()));
    (tracker, seen)
}

#[test]
fn tap_above_center_reports_start_and_end() {
    let (mut tracker, seen) = tracker_with_judge(Playfield::new(320.0, 240.0));
    tracker.on_touch_start(0, Point::new(160.0, 110.0), 1000.0);
    tracker.on_touch_end(0, 1090.0);

    let events = seen.borrow();
    assert_eq!(events.len(), 2);
    let (start, end) = (&events[0], &events[1]);
    assert_eq!(start.phase, Phase::Start);
    assert_eq!(end.phase, Phase::End);
    assert_eq!(start.lane, 0);
    assert_eq!(end.lane, start.lane);
    assert!((start.distance - 10.0).abs() < 1e-9);
    assert!((end.distance - 10.0).abs() < 1e-9);
    assert_eq!(end.flick_direction, None);
    assert_eq!(start.start_time, 1000.0);
    assert_eq!(end.start_time, 1000.0);
    assert_eq!(tracker.active_count(), 0);
}

#[test]
fn swipe_right_is_flicked_on_release() {
    let (mut tracker, seen) = tracker_with_judge(Playfield::new(400.0, 400.0));
    tracker.on_touch_start(3, Point::new(100.0, 200.0), 0.0);
    for step in 1..=10 {
        tracker.on_touch_move(3, Point::new(100.0 + step as f64 * 10.0, 200.0), step as f64 * 8.0);
    }
    tracker.on_touch_end(3, 90.0);

    let events = seen.borrow();
    assert_eq!(events.len(), 12);
    assert!(events[1..11].iter().all(|e| e.phase == Phase::Move));
    assert!(events[..11].iter().all(|e| e.flick_direction.is_none()));
    let last = events.last().unwrap();
    assert_eq!(last.phase, Phase::End);
    assert_eq!(last.flick_direction, Some(FlickDirection::Right));
}

#[test]
fn long_drag_flick_uses_only_recent_window() {
    let (mut tracker, seen) = tracker_with_judge(Playfield::new(400.0, 400.0));
    // 100 px up, then 25 samples crawling back down; the up stroke falls out of the window
    tracker.on_touch_start(1, Point::new(200.0, 200.0), 0.0);
    tracker.on_touch_move(1, Point::new(200.0, 100.0), 5.0);
    for i in 0..25 {
        tracker.on_touch_move(1, Point::new(200.0, 100.0 + i as f64 * 2.0), 10.0 + i as f64);
    }
    assert_eq!(tracker.touch(1).unwrap().history.len(), 20);
    assert_eq!(tracker.touch(1).unwrap().history.origin(), Point::new(200.0, 200.0));
    tracker.on_touch_end(1, 50.0);

    let end = seen.borrow().last().cloned().unwrap();
    assert_eq!(end.flick_direction, Some(FlickDirection::Down));
}

#[test]
fn concurrent_touches_are_independent() {
    let (mut tracker, seen) = tracker_with_judge(Playfield::new(200.0, 200.0));
    tracker.on_touch_start(1, Point::new(100.0, 20.0), 0.0);
    tracker.on_touch_start(2, Point::new(96.0, 180.0), 2.0);
    assert_eq!(tracker.active_count(), 2);
    assert_eq!(tracker.touch_lane(1), Some(0));
    assert_eq!(tracker.touch_lane(2), Some(30));

    tracker.on_touch_end(1, 10.0);
    assert_eq!(tracker.touch_lane(1), None);
    assert_eq!(tracker.touch_lane(2), Some(30));
    tracker.on_touch_move(1, Point::new(0.0, 0.0), 12.0);

    let ids: Vec<(i32, Phase)> = seen.borrow().iter().map(|e| (e.id, e.phase)).collect();
    assert_eq!(ids, vec![(1, Phase::Start), (2, Phase::Start), (1, Phase::End)]);
}

#[test]
fn no_judge_still_tracks() {
    let mut tracker = TouchTracker::new(Playfield::new(100.0, 100.0));
    tracker.on_touch_start(9, Point::new(50.0, 10.0), 0.0);
    tracker.on_touch_move(9, Point::new(90.0, 52.0), 5.0);
    assert!(tracker.is_touching_lane(9, 15, 1));
    tracker.on_touch_end(9, 10.0);
    assert_eq!(tracker.active_count(), 0);
}

#[test]
fn cleared_judge_stops_receiving() {
    let (mut tracker, seen) = tracker_with_judge(Playfield::new(100.0, 100.0));
    tracker.on_touch_start(1, Point::new(50.0, 10.0), 0.0);
    tracker.clear_judge();
    tracker.on_touch_end(1, 5.0);
    assert_eq!(seen.borrow().len(), 1);
}
