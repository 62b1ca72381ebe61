use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        match self {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn as_rounded_rect(&self) -> Option<&RoundedRectCmd> {
        match self {
            DrawCmd::RoundedRect(r) => Some(r),
            _ => None,
        }
    }
}
