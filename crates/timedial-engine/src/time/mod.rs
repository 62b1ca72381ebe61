//! Time subsystem.
//!
//! Provides a cancellable periodic tick source without coupling to a runtime.
//! Intended usage:
//! - the host owns the loop and calls `poll(now)` whenever it wakes
//! - widgets react to the returned `Tick` and repaint

mod ticker;

pub use ticker::{Tick, Ticker, TickerState};
