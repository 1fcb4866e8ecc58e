//! Drawing scripts: a TOML list of drawing calls replayed onto a canvas
//!
//! ```toml
//! [canvas]
//! escape = false
//!
//! [[draw]]
//! kind = "line"
//! x0 = 0
//! x1 = 100
//! y0 = 50
//! y1 = 50
//! class = "axis"
//!
//! [[draw]]
//! kind = "path"
//! points = [[0, 0], [1, 1], [], [3, 3]]
//! class = "series"
//! style = { stroke = "red" }
//! ```
//!
//! An empty point (`[]`) in a path is a gap.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::canvas::{CanvasConfig, MarkupCanvas, PathPoint};
use crate::style::StyleMap;

/// Errors that can occur when loading a drawing script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read drawing script: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse drawing script TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A single drawing call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum DrawCommand {
    Line {
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        #[serde(default, rename = "class")]
        classes: String,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        #[serde(default, rename = "class")]
        classes: String,
    },
    Path {
        #[serde(default)]
        points: Vec<PathPoint>,
        #[serde(default, rename = "class")]
        classes: String,
        #[serde(default)]
        style: Option<StyleMap>,
    },
    Point {
        x: f64,
        y: f64,
        size: f64,
        #[serde(default, rename = "class")]
        classes: String,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default, rename = "class")]
        classes: String,
    },
}

impl DrawCommand {
    /// Issue this call against a canvas
    pub fn apply(&self, canvas: &mut MarkupCanvas) {
        match self {
            DrawCommand::Line {
                x0,
                x1,
                y0,
                y1,
                classes,
            } => canvas.draw_line(*x0, *x1, *y0, *y1, classes),
            DrawCommand::Text { x, y, text, classes } => canvas.draw_text(*x, *y, text, classes),
            DrawCommand::Path {
                points,
                classes,
                style,
            } => canvas.draw_path(points, classes, style.as_ref()),
            DrawCommand::Point {
                x,
                y,
                size,
                classes,
            } => canvas.draw_point(*x, *y, *size, classes),
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                classes,
            } => canvas.draw_rect(*x, *y, *width, *height, classes),
        }
    }
}

/// A parsed drawing script
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Canvas options from the `[canvas]` table
    #[serde(default, rename = "canvas")]
    pub config: CanvasConfig,

    /// Drawing calls from the `[[draw]]` array, in document order
    #[serde(default, rename = "draw")]
    pub commands: Vec<DrawCommand>,
}

impl Script {
    /// Load a script from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load a script from a TOML string
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    /// Replay every drawing call onto `canvas`, in order
    pub fn replay(&self, canvas: &mut MarkupCanvas) {
        tracing::debug!(commands = self.commands.len(), "replaying drawing script");
        for command in &self.commands {
            command.apply(canvas);
        }
    }

    /// Replay onto a fresh canvas configured from the script and return the markup
    pub fn render(&self) -> String {
        let mut canvas = MarkupCanvas::with_config(self.config.clone());
        self.replay(&mut canvas);
        canvas.into_markup()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content)
    }
}
