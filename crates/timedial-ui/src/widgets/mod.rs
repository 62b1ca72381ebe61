pub mod time_indicator;

pub use time_indicator::{IndicatorFrame, TimeIndicator};
