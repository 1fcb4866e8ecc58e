//! Markup Canvas - an append-only SVG fragment builder
//!
//! Drawing calls (lines, text labels, paths, point markers, rectangles) are
//! serialized in call order into a single markup string, ready to be
//! embedded in a larger document.
//!
//! # Example
//!
//! ```rust
//! use markup_canvas::{style_map, MarkupCanvas, PathPoint};
//!
//! let mut canvas = MarkupCanvas::new();
//! canvas.draw_line(0.0, 100.0, 50.0, 50.0, "axis");
//!
//! let points = [
//!     PathPoint::new(0.0, 0.0),
//!     PathPoint::new(1.0, 1.0),
//!     PathPoint::Gap,
//!     PathPoint::new(3.0, 3.0),
//! ];
//! let style = style_map([("stroke", "red")]);
//! canvas.draw_path(&points, "series", Some(&style));
//!
//! assert!(canvas.markup().contains("d='M0 0 L1 1 M3 3'"));
//! ```

pub mod canvas;
pub mod script;
pub mod style;

pub use canvas::{CanvasConfig, ConfigError, InvalidPathPoint, MarkupCanvas, PathPoint};
pub use script::{DrawCommand, Script, ScriptError};
pub use style::{style_map, StyleMap, StyleValue};

/// Render a TOML drawing script to markup
///
/// # Example
///
/// ```rust
/// use markup_canvas::render;
///
/// let markup = render(r#"
///     [[draw]]
///     kind = "rect"
///     x = 0
///     y = 0
///     width = 10
///     height = 10
///     class = "bg"
/// "#).unwrap();
///
/// assert_eq!(markup, "<rect x='0' y='0' width='10' height='10' class='bg' />");
/// ```
pub fn render(source: &str) -> Result<String, ScriptError> {
    let script = Script::parse(source)?;
    Ok(script.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_line() {
        let markup = render(
            r#"
            [[draw]]
            kind = "line"
            x0 = 1
            x1 = 2
            y0 = 3
            y1 = 4
            class = "c"
        "#,
        )
        .unwrap();
        assert_eq!(markup, "<line x1='1' x2='2' y1='3' y2='4' class='c' />");
    }

    #[test]
    fn test_render_respects_canvas_table() {
        let markup = render(
            r#"
            [canvas]
            escape = true

            [[draw]]
            kind = "text"
            x = 0
            y = 0
            text = "a & b"
        "#,
        )
        .unwrap();
        assert!(markup.contains(">a &amp; b</text>"));
    }

    #[test]
    fn test_render_parse_error() {
        let result = render("[[draw]]\nkind = 3");
        assert!(matches!(result, Err(ScriptError::ParseError(_))));
    }
}
