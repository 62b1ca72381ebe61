use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};
use crate::text::TextStyle;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub style: TextStyle,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, style: TextStyle, origin: Vec2) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), style, origin }));
    }
}
