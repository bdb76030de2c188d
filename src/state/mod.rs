pub mod flick;
pub mod history;
pub mod judge;
pub mod polar;
pub mod tracker;

pub use flick::classify;
pub use history::TouchHistory;
pub use judge::{Dispatcher, Judge};
pub use polar::{CanvasRect, angle_to_lane, client_to_canvas, to_polar};
pub use tracker::{TouchState, TouchTracker, TrackedTouch};
