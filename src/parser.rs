//! Request Parser
//!
//! Extracts the operand pair from a request according to its declared
//! content type. Operand parsing never depends on which operation was asked for.

use crate::error::ParseError;
use crate::models::{MathRequest, OperandPair};

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

// == Content Category ==
/// Body formats we know how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    /// `application/json` object with numeric `x` and `y`
    Structured,
    /// `application/x-www-form-urlencoded` pairs in the body or query string
    FormEncoded,
}

impl ContentCategory {
    /// Maps a `Content-Type` header value to a category.
    ///
    /// Media-type parameters such as `charset` are ignored and matching is
    /// case-insensitive.
    pub fn from_content_type(content_type: Option<&str>) -> Result<Self, ParseError> {
        let raw = content_type.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(ParseError::missing_content_type());
        }

        let media_type = raw.split(';').next().unwrap_or_default().trim();
        if media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
            Ok(Self::Structured)
        } else if media_type.eq_ignore_ascii_case(FORM_MEDIA_TYPE) {
            Ok(Self::FormEncoded)
        } else {
            Err(ParseError::unsupported_content_type(raw))
        }
    }
}

// == Raw Input ==
/// The parts of an inbound request the parser reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput<'a> {
    /// Request body bytes
    pub body: &'a [u8],
    /// URL query string without the leading `?`
    pub query: Option<&'a str>,
}

// == Parse ==
/// Decodes the operand pair from `input` using the strategy for `category`.
pub fn parse(category: ContentCategory, input: RawInput<'_>) -> Result<OperandPair, ParseError> {
    match category {
        ContentCategory::Structured => parse_json(input.body),
        ContentCategory::FormEncoded => parse_form(input.body, input.query),
    }
}

/// Resolves the category from a header value, then parses.
pub fn parse_request(
    content_type: Option<&str>,
    input: RawInput<'_>,
) -> Result<OperandPair, ParseError> {
    parse(ContentCategory::from_content_type(content_type)?, input)
}

fn parse_json(body: &[u8]) -> Result<OperandPair, ParseError> {
    serde_json::from_slice::<MathRequest>(body)
        .map(OperandPair::from)
        .map_err(|e| ParseError::MalformedBody(format!("json decode error: {e}")))
}

fn parse_form(body: &[u8], query: Option<&str>) -> Result<OperandPair, ParseError> {
    let mut pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| ParseError::MalformedBody(format!("parse request form failed: {e}")))?;

    // Body values take precedence over the query string.
    if let Some(query) = query {
        let query_pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|e| ParseError::MalformedBody(format!("parse request query failed: {e}")))?;
        pairs.extend(query_pairs);
    }

    let x = form_operand(&pairs, "x")?;
    let y = form_operand(&pairs, "y")?;
    Ok(OperandPair::new(x, y))
}

fn form_operand(pairs: &[(String, String)], field: &'static str) -> Result<f64, ParseError> {
    let raw = pairs
        .iter()
        .find(|(name, _)| name == field)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| ParseError::InvalidOperand {
            field,
            reason: "missing".to_string(),
        })?;

    raw.parse().map_err(|e| ParseError::InvalidOperand {
        field,
        reason: format!("{raw:?}: {e}"),
    })
}
