use crate::utils::KtpError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One pixel-space corner of a detected text box. Detector JSON omits zero
/// coordinates, so both default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }
}

/// A recognized text fragment with its bounding quadrilateral.
///
/// Vertices run clockwise from the top-left corner: top-left, top-right,
/// bottom-right, bottom-left. Every geometric helper below relies on that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub vertices: [Vertex; 4],
}

impl TextItem {
    pub fn new(text: impl Into<String>, vertices: [Vertex; 4]) -> Self {
        TextItem {
            text: text.into(),
            vertices,
        }
    }

    /// Builds an item from a polygon of arbitrary length, rejecting anything
    /// that is not a quadrilateral.
    pub fn from_polygon(text: impl Into<String>, points: &[(i32, i32)]) -> Result<Self, KtpError> {
        let text = text.into();
        match points {
            [a, b, c, d] => Ok(TextItem::new(
                text,
                [
                    Vertex::new(a.0, a.1),
                    Vertex::new(b.0, b.1),
                    Vertex::new(c.0, c.1),
                    Vertex::new(d.0, d.1),
                ],
            )),
            _ => Err(KtpError::InputError(format!(
                "Text box for '{}' has {} vertices, expected 4",
                text,
                points.len()
            ))),
        }
    }

    /// Axis-aligned box from its top-left corner and size
    pub fn from_rect(text: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        TextItem::new(
            text,
            [
                Vertex::new(x, y),
                Vertex::new(x + width, y),
                Vertex::new(x + width, y + height),
                Vertex::new(x, y + height),
            ],
        )
    }

    pub fn top_left(&self) -> Vertex {
        self.vertices[0]
    }

    pub fn left_x(&self) -> i32 {
        self.vertices[0].x
    }

    /// Height of the left edge (top-left to bottom-left)
    pub fn left_height(&self) -> f64 {
        self.vertices[3].y as f64 - self.vertices[0].y as f64
    }

    pub fn left_mid_y(&self) -> f64 {
        (self.vertices[0].y as f64 + self.vertices[3].y as f64) / 2.0
    }

    /// Mean of the right and left edge heights
    pub fn mean_height(&self) -> f64 {
        let right = self.vertices[2].y as f64 - self.vertices[1].y as f64;
        (right + self.left_height()) / 2.0
    }

    /// All four x-coordinates, ascending
    pub fn sorted_xs(&self) -> [i32; 4] {
        let mut xs = [
            self.vertices[0].x,
            self.vertices[1].x,
            self.vertices[2].x,
            self.vertices[3].x,
        ];
        xs.sort_unstable();
        xs
    }
}

// Detector output as found on disk, before the vertex count is checked
#[derive(Deserialize)]
struct RawItem {
    text: String,
    vertices: Vec<Vertex>,
}

/// Reads a JSON array of text items
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<TextItem>, KtpError> {
    let data = std::fs::read_to_string(path)?;
    let raw: Vec<RawItem> = serde_json::from_str(&data)?;

    raw.into_iter()
        .map(|item| {
            let points: Vec<(i32, i32)> = item.vertices.iter().map(|v| (v.x, v.y)).collect();
            TextItem::from_polygon(item.text, &points)
        })
        .collect()
}
