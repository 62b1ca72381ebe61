//! Timedial UI: the time indicator widget on top of `timedial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use timedial_ui::prelude::*;
//!
//! let mut scene = UiScene::new(MonospaceMeasure::default());
//! let mut indicator = TimeIndicator::from_config(&load_config());
//! indicator.start(Instant::now());
//!
//! // In your host loop:
//! if indicator.tick(Instant::now()) {
//!     let (_, draw_list) = scene.frame(&indicator, Constraints::unbounded());
//!     // Pass draw_list to your renderer.
//! }
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`](widget::Widget) to compose the indicator with your own
//! content; painting goes through [`Painter`](painter::Painter) into a
//! renderer-agnostic `DrawList`.

pub mod config;
pub mod constraints;
pub mod layout;
pub mod painter;
pub mod scene;
pub mod style;
pub mod widget;
pub mod widgets;

pub use widgets::TimeIndicator;

/// Everything needed to build and host an indicator.
pub mod prelude {
    pub use crate::config::{load_config, load_or_default, ConfigError, DisplaySetting, IndicatorConfig};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::layout::{layout_tokens, IndicatorLayout, LayoutCell};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::style::{FontWeight, IndicatorStyle};
    pub use crate::widget::Widget;
    pub use crate::widgets::{IndicatorFrame, TimeIndicator};

    pub use timedial_engine::coords::{CornerRadii, Rect, Vec2};
    pub use timedial_engine::paint::Color;
    pub use timedial_engine::scene::{DrawCmd, DrawList};
    pub use timedial_engine::text::{FontId, FontSystem, MonospaceMeasure, TextMeasure, TextStyle};
    pub use timedial_format::{DisplayMode, Token};
}
