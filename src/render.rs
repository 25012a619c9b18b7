//! Terminal rendering of highlighted segments
//!
//! Writes segments as ANSI-styled text through crossterm. Any `Write`
//! sink works, so output can go to stdout or into a buffer.

use std::io::Write;

use crossterm::{
    queue,
    style::{
        self as term, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};

use crate::error::Result;
use crate::syntax::{Color, Segment, Style};

/// Map a palette color to the terminal color crossterm emits
fn term_color(color: Color) -> term::Color {
    match color {
        Color::Default => term::Color::Reset,
        Color::Black => term::Color::Black,
        Color::Red => term::Color::DarkRed,
        Color::Green => term::Color::DarkGreen,
        Color::Yellow => term::Color::DarkYellow,
        Color::Blue => term::Color::DarkBlue,
        Color::Magenta => term::Color::DarkMagenta,
        Color::Cyan => term::Color::DarkCyan,
        Color::White => term::Color::Grey,
        Color::BrightBlack => term::Color::DarkGrey,
        Color::BrightRed => term::Color::Red,
        Color::BrightGreen => term::Color::Green,
        Color::BrightYellow => term::Color::Yellow,
        Color::BrightBlue => term::Color::Blue,
        Color::BrightMagenta => term::Color::Magenta,
        Color::BrightCyan => term::Color::Cyan,
        Color::BrightWhite => term::Color::White,
    }
}

/// Queue the attribute changes for a style
fn apply_style<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(term_color(style.fg)))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(term_color(style.bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Write segments with their styles, resetting after each styled run
pub fn render<W: Write>(out: &mut W, segments: &[Segment<'_>]) -> Result<()> {
    for segment in segments {
        if segment.style.is_default() {
            queue!(out, Print(segment.text))?;
            continue;
        }
        apply_style(out, &segment.style)?;
        queue!(out, Print(segment.text), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

/// Write one `category<TAB>start<TAB>text` line per segment, text debug-escaped
pub fn dump<W: Write>(out: &mut W, segments: &[Segment<'_>]) -> Result<()> {
    for segment in segments {
        writeln!(out, "{}\t{}\t{:?}", segment.token_type.name(), segment.start, segment.text)?;
    }
    out.flush()?;
    Ok(())
}
