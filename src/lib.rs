//! Multi-touch input for a circular rhythm-game playfield.
//!
//! Touches are mapped to one of 60 lanes around the canvas center, tracked with a short
//! positional history, classified as flicks on release, and reported to a registered judge.

pub mod input;
pub mod model;
pub mod state;
pub mod util;
