use log::{debug, warn};

use crate::expression::Expression;
use crate::parser::errors::ParseError;

/// Operator tiers from lowest to highest precedence
const PRECEDENCE_TIERS: [&[char]; 3] = [&['+', '-'], &['*', '/'], &['^']];

/// Parse a flat infix expression such as `3+4*2` into a tree.
///
/// Within each level the text is split at the rightmost operator of the
/// lowest tier present, so additive operators end up closest to the root
/// and earlier operators of the same tier nest on the left.
///
/// # Errors
///
/// Returns an error if:
/// * The input is empty
/// * An operator has no operand on one of its sides
/// * A segment between operators is not a run of ASCII digits
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", text);

    if text.is_empty() {
        warn!("Expression is empty");
        return Err(ParseError::EmptyInput);
    }

    let expr = parse_segment(text, 0)?;
    debug!("Parsed tree: {}", expr);
    Ok(expr)
}

/// `offset` is where `segment` starts in the original text.
fn parse_segment(segment: &str, offset: usize) -> Result<Expression, ParseError> {
    if segment.is_empty() {
        warn!("Missing operand at position {}", offset);
        return Err(ParseError::EmptyOperand { position: offset });
    }

    for tier in PRECEDENCE_TIERS {
        if let Some((index, symbol)) = segment
            .char_indices()
            .rev()
            .find(|(_, c)| tier.contains(c))
        {
            debug!(
                "Splitting '{}' at '{}' (position {})",
                segment,
                symbol,
                offset + index
            );

            let left = parse_segment(&segment[..index], offset)?;
            let right = parse_segment(&segment[index + 1..], offset + index + 1)?;
            return Ok(Expression::operator(symbol, left, right));
        }
    }

    parse_literal(segment, offset)
}

fn parse_literal(segment: &str, offset: usize) -> Result<Expression, ParseError> {
    let invalid = || ParseError::InvalidLiteral {
        literal: segment.to_string(),
        position: offset,
    };

    if !segment.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Invalid number literal '{}' at position {}",
            segment, offset
        );
        return Err(invalid());
    }

    let value = segment.parse::<f64>().map_err(|_| invalid())?;
    debug!("Converted '{}' to {}", segment, value);
    Ok(Expression::constant(value))
}
