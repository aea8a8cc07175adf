/*

    Item dimensions as read from the operator, plus parsing of a
    single prompt answer. The three dimensions are trusted to be
    finite positive reals in a consistent unit (inches); only the
    "can this be parsed at all" concern lives here.

    @date: 22 Nov, 2025
    @author: bartu
*/

use crate::error::InductError;
use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDims {
    pub length: Float,
    pub width: Float,
    pub height: Float,
}

impl ItemDims {
    pub fn new(length: Float, width: Float, height: Float) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// A single prompt can answer with a number or ask for the help screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAnswer {
    Help,
    Value(Float),
}

/// Parse one raw prompt line. The help keyword is case-insensitive and
/// surrounding whitespace is ignored, mirroring the operator tool's
/// input loop. Anything else must be a floating point literal.
pub fn parse_prompt_answer(raw: &str) -> Result<PromptAnswer, InductError> {
    let cleaned = raw.trim().to_lowercase();
    if cleaned == "help" {
        return Ok(PromptAnswer::Help);
    }
    cleaned
        .parse::<Float>()
        .map(PromptAnswer::Value)
        .map_err(|_| InductError::InvalidDimensionInput {
            input: cleaned,
        })
}
