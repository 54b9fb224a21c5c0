//! Stack capture and caller lookup.
//!
//! Frames come from [`std::backtrace::Backtrace`]. Its text form is not a
//! stable format, so parsing is best-effort: a frame whose location line is
//! missing or unreadable keeps `None` for file and line.

use std::backtrace::Backtrace;
use std::fmt::{self, Write};

use crate::inspect::escape_html;

/// One stack frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Symbol name of the function.
    pub function: String,
    /// Source file, when known.
    pub file: Option<String>,
    /// Source line, when known.
    pub line: Option<u32>,
}

impl Frame {
    /// Creates a frame without location.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            file: None,
            line: None,
        }
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        if let Some(file) = &self.file {
            write!(f, " - called in {file}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}

/// Symbol of [`capture`] as it appears in a parsed backtrace.
const CAPTURE_SYMBOL: &str = "toolbox_debug::backtrace::capture";

/// Captures the current stack, innermost frame first.
///
/// Capture is forced regardless of `RUST_BACKTRACE`. Frames of the capture
/// machinery itself are dropped, so the first frame is the function that
/// called `capture`.
#[must_use]
#[inline(never)]
pub fn capture() -> Vec<Frame> {
    strip_capture_frames(parse(&Backtrace::force_capture().to_string()))
}

/// Drops every frame up to and including the last [`capture`] frame.
///
/// Frames are kept as-is when no capture frame is found.
fn strip_capture_frames(mut frames: Vec<Frame>) -> Vec<Frame> {
    if let Some(last) = frames
        .iter()
        .rposition(|frame| frame.function.starts_with(CAPTURE_SYMBOL))
    {
        frames.drain(..=last);
    }
    frames
}

/// Parses the text form of a backtrace.
///
/// ```
/// let frames = toolbox_debug::backtrace::parse(
///     "   0: shop::checkout\n             at ./src/checkout.rs:42:9\n   1: main\n",
/// );
/// assert_eq!(frames[0].file.as_deref(), Some("./src/checkout.rs"));
/// assert_eq!(frames[0].line, Some(42));
/// assert_eq!(frames[1].file, None);
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut().filter(|f| f.file.is_none()) {
                let (file, number) = split_location(location);
                frame.file = Some(file.to_string());
                frame.line = number;
            }
        } else if let Some((index, function)) = line.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(Frame::new(function.trim()));
            }
        }
    }
    frames
}

/// Splits `path:line:column` into path and line.
fn split_location(location: &str) -> (&str, Option<u32>) {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next();
    let middle = parts.next();
    let rest = parts.next();
    match (rest, middle, last) {
        (Some(file), Some(line), Some(_column)) if line.parse::<u32>().is_ok() => {
            (file, line.parse().ok())
        }
        _ => match location.rsplit_once(':') {
            Some((file, line)) if line.parse::<u32>().is_ok() => (file, line.parse().ok()),
            _ => (location, None),
        },
    }
}

/// Renders frames as a markup table of file, function and line.
///
/// `strip_prefix` is removed from the front of each file path.
#[must_use]
pub fn render_table(frames: &[Frame], strip_prefix: Option<&str>) -> String {
    let mut out = String::from("<table>\n");
    out.push_str("<tr><th>File</th><th>Function</th><th>Line</th></tr>\n");
    for frame in frames {
        let file = frame.file.as_deref().unwrap_or("");
        let file = strip_prefix
            .and_then(|prefix| file.strip_prefix(prefix))
            .unwrap_or(file);
        let line = frame.line.map(|l| l.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{line}</td></tr>",
            escape_html(file),
            escape_html(&frame.function)
        );
    }
    out.push_str("</table>");
    out
}

/// Finds the first frame whose file contains `search`, ignoring case.
///
/// Frames with files under `ignore_prefix` are skipped.
#[must_use]
pub fn find_frame<'a>(
    frames: &'a [Frame],
    search: &str,
    ignore_prefix: Option<&str>,
) -> Option<&'a Frame> {
    let needle = search.to_lowercase();
    frames.iter().find(|frame| {
        let Some(file) = frame.file.as_deref() else {
            return false;
        };
        if ignore_prefix.is_some_and(|prefix| file.starts_with(prefix)) {
            return false;
        }
        file.to_lowercase().contains(&needle)
    })
}
