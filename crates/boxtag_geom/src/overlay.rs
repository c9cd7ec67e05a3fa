//! Drawable overlay description.
//!
//! The editor never paints pixels. It hands an `Overlay` to whatever
//! presentation layer is hosting it, which draws the items in order.

use crate::{Color, Path, Point};

/// Text styling for a label item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub color: Color,
    /// Background fill behind the text
    pub background: Color,
    /// Background corner radius
    pub corner_radius: f32,
}

/// A shape that can be drawn as an overlay on the photo.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    /// A stroked outline path.
    Outline {
        /// Path in container space
        path: Path,
    },
    /// A circle (corner handle).
    Circle {
        /// Center in container space
        center: Point,
        /// Radius in container units
        radius: f32,
    },
    /// A text label in a fixed frame.
    Label {
        /// Top-left of the label frame
        origin: Point,
        /// Frame width
        width: f32,
        /// Frame height
        height: f32,
        /// Label text
        text: String,
        /// Text styling
        style: TextStyle,
    },
}

/// An overlay item with shape and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayItem {
    /// The shape to draw
    pub shape: OverlayShape,
    /// Stroke color
    pub stroke: Color,
    /// Fill color (transparent for outlines)
    pub fill: Color,
    /// Stroke width
    pub stroke_width: f32,
}

impl OverlayItem {
    /// Create a new overlay item with no fill.
    pub fn new(shape: OverlayShape, stroke: Color, stroke_width: f32) -> Self {
        Self {
            shape,
            stroke,
            fill: Color::TRANSPARENT,
            stroke_width,
        }
    }

    /// Set the fill color.
    pub fn filled(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Whether drawing this item would paint anything.
    pub fn is_visible(&self) -> bool {
        match &self.shape {
            OverlayShape::Label { .. } => true,
            _ => self.fill.is_visible() || (self.stroke.is_visible() && self.stroke_width > 0.0),
        }
    }
}

/// A collection of overlay items to render, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Items to render
    pub items: Vec<OverlayItem>,
}

impl Overlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the overlay.
    pub fn push(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    /// Check if the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverlayItem> {
        self.items.iter()
    }
}
