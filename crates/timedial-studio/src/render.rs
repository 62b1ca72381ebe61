//! Draw-list → ANSI truecolor line.

use std::fmt::Write as _;
use std::io::{self, Write};

use timedial_engine::paint::Color;
use timedial_engine::scene::{DrawCmd, DrawList};

const RESET: &str = "\x1b[0m";

struct Segment<'a> {
    x: f32,
    text: &'a str,
    fg: Color,
    bg: Option<Color>,
}

/// Formats the text commands of `list` left to right on one line.
///
/// A rounded rect colors the background of the text command that follows it.
pub fn render_line(list: &DrawList) -> String {
    let mut segments = Vec::new();
    let mut pending_bg = None;

    for cmd in list.cmds() {
        match cmd {
            DrawCmd::RoundedRect(r) => pending_bg = Some(r.color),
            DrawCmd::Text(t) => segments.push(Segment {
                x: t.origin.x,
                text: &t.text,
                fg: t.style.color,
                bg: pending_bg.take(),
            }),
        }
    }
    segments.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut line = String::new();
    for seg in segments {
        let [r, g, b, _] = seg.fg.to_srgb_u8();
        let _ = write!(line, "\x1b[38;2;{r};{g};{b}m");
        match seg.bg {
            Some(bg) => {
                let [r, g, b, _] = bg.to_srgb_u8();
                let _ = write!(line, "\x1b[48;2;{r};{g};{b}m {} ", seg.text);
            }
            None => line.push_str(seg.text),
        }
        line.push_str(RESET);
    }
    line
}

/// Rewrites the current terminal line in place.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, list: &DrawList) -> io::Result<()> {
        write!(self.out, "\r\x1b[2K{}", render_line(list))?;
        self.out.flush()
    }

    /// Moves past the rendered line.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}
