/*

    Area-minimizing selector: evaluate the three axis-pair
    footprints and report the pairing with the smallest area.

    Purely informational, the orientation classifier does not
    consume this result.

    @date: 23 Nov, 2025
    @author: bartu
*/

use std::fmt;

use crate::item::ItemDims;
use crate::numeric::Float;

/// One of the three axis pairings of a rectangular item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    LengthWidth,
    LengthHeight,
    WidthHeight,
}

impl Pairing {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LengthWidth => "Length x Width",
            Self::LengthHeight => "Length x Height",
            Self::WidthHeight => "Width x Height",
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Return the pairing with the strictly smallest footprint area.
/// Candidates are evaluated in declaration order and ties keep the
/// earliest pairing, so equal products resolve deterministically.
pub fn select_min_area(dims: &ItemDims) -> (Pairing, Float) {
    let candidates = [
        (Pairing::LengthWidth, dims.length * dims.width),
        (Pairing::LengthHeight, dims.length * dims.height),
        (Pairing::WidthHeight, dims.width * dims.height),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best
}
