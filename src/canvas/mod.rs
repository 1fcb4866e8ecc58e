//! Markup canvas for accumulating SVG fragments
//!
//! Each drawing call serializes one element and appends it to the canvas
//! buffer. The buffer only ever grows; read it with [`MarkupCanvas::markup`].
//! No root `<svg>` element is emitted, the caller wraps the fragments.

pub mod config;
pub mod markup;
pub mod path;

pub use config::{CanvasConfig, ConfigError};
pub use path::{path_to_d, InvalidPathPoint, PathPoint};

use std::borrow::Cow;
use std::fmt;

use crate::style::StyleMap;

use markup::{css_stringify, escape_xml};

/// Append-only builder of SVG element fragments
#[derive(Debug, Clone, Default)]
pub struct MarkupCanvas {
    config: CanvasConfig,
    buffer: String,
}

impl MarkupCanvas {
    /// Create an empty canvas with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty canvas with the given configuration
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The markup accumulated so far
    pub fn markup(&self) -> &str {
        &self.buffer
    }

    /// Consume the canvas and return its markup
    pub fn into_markup(self) -> String {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Draw a line segment from `(x0, y0)` to `(x1, y1)`
    ///
    /// Note the argument order: both x coordinates come first, then both
    /// y coordinates.
    pub fn draw_line(&mut self, x0: f64, x1: f64, y0: f64, y1: f64, classes: &str) {
        let fragment = format!(
            "<line{}{}{}{}{} />",
            self.attr("x1", x0),
            self.attr("x2", x1),
            self.attr("y1", y0),
            self.attr("y2", y1),
            self.attr("class", classes)
        );
        self.append("line", fragment);
    }

    /// Draw a text label positioned at `(x, y)`
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, classes: &str) {
        let fragment = format!(
            "<text{}{}{}>{}</text>",
            self.attr("x", x),
            self.attr("y", y),
            self.attr("class", classes),
            self.text_content(text)
        );
        self.append("text", fragment);
    }

    /// Draw a path through `points`, lifting the pen at each gap
    pub fn draw_path(&mut self, points: &[PathPoint], classes: &str, style: Option<&StyleMap>) {
        let fragment = format!(
            "<path{}{}{} />",
            self.attr("class", classes),
            self.attr("style", css_stringify(style)),
            self.attr("d", path_to_d(points))
        );
        self.append("path", fragment);
    }

    /// Draw a circular point marker centered at `(x, y)`
    pub fn draw_point(&mut self, x: f64, y: f64, point_size: f64, classes: &str) {
        let fragment = format!(
            "<circle{}{}{}{} />",
            self.attr("cx", x),
            self.attr("cy", y),
            self.attr("r", point_size),
            self.attr("class", classes)
        );
        self.append("circle", fragment);
    }

    /// Draw a rectangle with its top-left corner at `(x, y)`
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, classes: &str) {
        let fragment = format!(
            "<rect{}{}{}{}{} />",
            self.attr("x", x),
            self.attr("y", y),
            self.attr("width", width),
            self.attr("height", height),
            self.attr("class", classes)
        );
        self.append("rect", fragment);
    }

    fn attr(&self, name: &str, value: impl fmt::Display) -> String {
        if self.config.escape {
            markup::escaped_attr(name, value)
        } else {
            markup::attr(name, value)
        }
    }

    fn text_content<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.escape {
            Cow::Owned(escape_xml(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn append(&mut self, element: &'static str, fragment: String) {
        tracing::trace!(element, bytes = fragment.len(), "append fragment");
        self.buffer.push_str(&fragment);
    }
}

impl fmt::Display for MarkupCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
