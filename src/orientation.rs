/*

    Orientation classifier: map item dimensions to one of the
    four induction categories via threshold rules.

    Thresholds come from the induction machine constraints:
    items with length + height over 14" cannot be inducted at all,
    the 12"-14" band stands tall, everything else lays flat.

    @date: 23 Nov, 2025
    @author: bartu
*/

use std::fmt;

use crate::item::ItemDims;

/// The four induction categories. StandardSmall and StandardDefault
/// currently read out the same recommendation text but are reached by
/// different rules; keep them as distinct variants so the texts can
/// diverge with a one-line change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationCategory {
    Sideline,
    StandTall,
    StandardSmall,
    StandardDefault,
}

impl OrientationCategory {

    /// Short identifier, used in logs and error reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sideline => "Sideline",
            Self::StandTall => "Stand-Tall",
            Self::StandardSmall => "Standard-Small",
            Self::StandardDefault => "Standard-Default",
        }
    }

    /// The operator-facing recommendation line.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Sideline => {
                "Sideline: Item exceeds dimensions for standard induction. Do not induct."
            }
            Self::StandTall => {
                "Stand-Tall: Position with longest side standing vertically, centered, all the way to the back of the bag"
            }
            // WARNING: Both Standard variants share this text, do not merge the variants
            Self::StandardSmall | Self::StandardDefault => {
                "Standard: Lay flat with longest side as primary axis, place centered and all the way back"
            }
        }
    }
}

impl fmt::Display for OrientationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recommendation())
    }
}

/// Classify an item for induction. First match wins; width does not
/// participate in the stand-tall sum.
pub fn classify(dims: &ItemDims) -> OrientationCategory {
    let length_height_sum = dims.length + dims.height;

    if length_height_sum > 14.0 {
        return OrientationCategory::Sideline; // Hard rejection, not an orientation
    }
    if (12.0..=14.0).contains(&length_height_sum) {
        OrientationCategory::StandTall
    } else if dims.length + dims.width + dims.height < 12.0 {
        OrientationCategory::StandardSmall
    } else {
        // General lay flat rule for larger items
        OrientationCategory::StandardDefault
    }
}
