/*

    Declare the diagram Scene: effective cuboid extents for the
    chosen orientation, its eight vertices and six quad faces,
    the machine induction arrow, and the annotation texts.

    Built fresh per rendering call, discarded after the diagram
    is produced. Serialized to JSON next to the rendered image
    so downstream tooling can consume the same geometry.

    @date: 26 Nov, 2025
    @author: bartu
*/

use crate::error::InductError;
use crate::item::ItemDims;
use crate::orientation::OrientationCategory;
use crate::prelude::*;
use crate::wrap::wrap;

/// Annotation wrap width in columns, matches the operator display.
pub const LABEL_WRAP_COLUMNS: usize = 40;

/// Fraction of the longest extent added around the cuboid when
/// framing the diagram axes.
pub const AXIS_MARGIN_RATIO: Float = 0.2;

/// The six quad faces as vertex indices into `Scene::vertices`.
pub const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4], // Bottom face
    [1, 2, 6, 5], // Front face
    [2, 3, 7, 6], // Top face
    [3, 0, 4, 7], // Back face
    [0, 1, 2, 3], // Left face
    [4, 5, 6, 7], // Right face
];

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Effective (x, y, z) extents after the orientation permutation
    pub extents: Vector3,
    pub vertices: [Vector3; 8],
    pub faces: [[usize; 4]; 6],
    /// Machine induction direction, drawn as an arrow from the origin
    pub induct_direction: Vector3,
    /// Anchor point for the induction annotation
    pub induct_anchor: Vector3,
    /// Orientation label, pre-wrapped at LABEL_WRAP_COLUMNS
    pub label: String,
    pub title: String,
}

impl Scene {

    /// Derive the diagram for the classified orientation.
    ///
    /// Sideline has no induction path at all and therefore no diagram;
    /// asking for one is an error rather than a guessed visualization.
    pub fn build(dims: &ItemDims, category: OrientationCategory) -> Result<Self, InductError> {
        let ItemDims { length, width, height } = *dims;

        let (extents, induct_direction, induct_anchor, label) = match category {
            OrientationCategory::Sideline => {
                return Err(InductError::UnrecognizedCategory {
                    category: category.name(),
                });
            }
            OrientationCategory::StandTall => {
                // Largest dimension stands vertically (y), the remaining
                // two fill x and z in length, width, height order
                let (x, y, z) = if length >= width && length >= height {
                    (width, length, height)
                } else if width >= length && width >= height {
                    (length, width, height)
                } else {
                    (length, height, width)
                };
                (
                    Vector3::new(x, y, z),
                    Vector3::new(0.0, y, 0.0), // Induct along y-axis from 0 -> y
                    Vector3::new(0.0, y / 2.0, 0.0),
                    "Stand-Tall Orientation (Induct Vertically, Centered and Back)",
                )
            }
            OrientationCategory::StandardSmall => {
                // Small items keep the given orientation explicitly
                let (x, y, z) = (length, height, width);
                (
                    Vector3::new(x, y, z),
                    Vector3::new(x, 0.0, 0.0), // Horizontal induction direction
                    Vector3::new(x / 2.0, 0.0, 0.0),
                    "Lay Flat, Centered in Bag (Induct Horizontally - Place to the Back)",
                )
            }
            OrientationCategory::StandardDefault => {
                // Lay flat, longest raw dimension becomes the primary
                // (induction) axis and the flatter remaining side faces down
                let (x, rest_a, rest_b) = if length >= width && length >= height {
                    (length, width, height)
                } else if width >= length && width >= height {
                    (width, length, height)
                } else {
                    (height, length, width)
                };
                let (y, z) = (rest_a.min(rest_b), rest_a.max(rest_b));
                (
                    Vector3::new(x, y, z),
                    Vector3::new(x, 0.0, 0.0), // Longest side direction induction
                    Vector3::new(x / 2.0, 0.0, 0.0),
                    "Lay Flat with Longest Side as Primary Axis (Induct Horizontally - Longest Side First, Place Centered and Back)",
                )
            }
        };

        let title = if category == OrientationCategory::StandTall {
            "Stand Tall"
        } else {
            "Standard"
        };
        debug!("Effective extents for {} are {:?}", category.name(), extents);

        Ok(Self {
            extents,
            vertices: cuboid_vertices(&extents),
            faces: CUBOID_FACES,
            induct_direction,
            induct_anchor,
            label: wrap(label, LABEL_WRAP_COLUMNS),
            title: title.to_string(),
        })
    }

    /// Shared upper bound of all three diagram axes, with margin.
    pub fn axis_limit(&self) -> Float {
        self.extents.max_element() * (1.0 + AXIS_MARGIN_RATIO)
    }

    pub fn center(&self) -> Vector3 {
        self.extents / 2.0
    }

    /// World-space corners of one face, in quad winding order.
    pub fn face_corners(&self, face: usize) -> [Vector3; 4] {
        self.faces[face].map(|i| self.vertices[i])
    }
}

/// Standard axis-aligned cuboid with one corner at the origin.
fn cuboid_vertices(extents: &Vector3) -> [Vector3; 8] {
    let (x, y, z) = (extents.x, extents.y, extents.z);
    [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(x, 0.0, 0.0),
        Vector3::new(x, y, 0.0),
        Vector3::new(0.0, y, 0.0),
        Vector3::new(0.0, 0.0, z),
        Vector3::new(x, 0.0, z),
        Vector3::new(x, y, z),
        Vector3::new(0.0, y, z),
    ]
}
