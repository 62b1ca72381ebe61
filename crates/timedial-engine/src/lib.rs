//! timedial engine crate.
//!
//! Renderer-agnostic pieces shared by the UI layer and hosts: geometry,
//! colors, draw lists, text measurement, the tick source, and logging.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
