//! Color literal parsing.
//!
//! Accepted forms (case-insensitive, surrounding whitespace ignored):
//! * `#rrggbb` or `rrggbb`
//! * `#rgb`, each digit doubled (the `#` is required)
//! * `rgb(r, g, b)` with decimal channels in `0..=255`
//!
//! Anything else is an [`InvalidColorFormat`]. Nothing is clamped or
//! partially accepted.

use crate::color::Rgb;
use crate::error::{FormatIssue, InvalidColorFormat};

/// Parse a hex or `rgb(...)` color literal.
///
/// ```
/// use shadegen::{parse, Rgb};
///
/// assert_eq!(parse("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
/// assert_eq!(parse(" RGB(34, 139, 230) ").unwrap(), Rgb::new(34, 139, 230));
/// assert!(parse("rgb(300,0,0)").is_err());
/// ```
pub fn parse(input: &str) -> Result<Rgb, InvalidColorFormat> {
    parse_literal(input.trim()).map_err(|issue| {
        tracing::debug!(
            input = log_excerpt(input),
            len = input.len(),
            %issue,
            "rejected color input"
        );
        InvalidColorFormat::new(input, issue)
    })
}

/// Longest prefix of a rejected input that is written to the log.
const LOG_EXCERPT_CHARS: usize = 64;

fn log_excerpt(input: &str) -> &str {
    match input.char_indices().nth(LOG_EXCERPT_CHARS) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

fn parse_literal(s: &str) -> Result<Rgb, FormatIssue> {
    if s.is_empty() {
        return Err(FormatIssue::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb(") {
        let args = rest.strip_suffix(')').ok_or(FormatIssue::InvalidFunction)?;
        return parse_rgb_args(args);
    }

    // Bare hex must be the full six digits; `abc` or `bad` are not colors.
    if s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return match s.len() {
            6 => parse_hex(s),
            _ => Err(FormatIssue::InvalidLength),
        };
    }

    Err(FormatIssue::Unrecognized)
}

fn nibble(c: u8) -> Result<u8, FormatIssue> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(FormatIssue::InvalidHex),
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, FormatIssue> {
    match hex.as_bytes() {
        &[r, g, b] => Ok(Rgb::new(
            nibble(r)? * 17,
            nibble(g)? * 17,
            nibble(b)? * 17,
        )),
        &[r1, r0, g1, g0, b1, b0] => {
            let byte = |hi: u8, lo: u8| -> Result<u8, FormatIssue> {
                Ok((nibble(hi)? << 4) | nibble(lo)?)
            };
            Ok(Rgb::new(byte(r1, r0)?, byte(g1, g0)?, byte(b1, b0)?))
        }
        _ => Err(FormatIssue::InvalidLength),
    }
}

fn parse_rgb_args(args: &str) -> Result<Rgb, FormatIssue> {
    let mut channels = [0u8; 3];
    let mut parts = args.split(',');

    for slot in &mut channels {
        let token = parts.next().ok_or(FormatIssue::InvalidFunction)?.trim();
        *slot = parse_channel(token)?;
    }
    if parts.next().is_some() {
        return Err(FormatIssue::InvalidFunction);
    }

    Ok(Rgb::from(channels))
}

fn parse_channel(token: &str) -> Result<u8, FormatIssue> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatIssue::InvalidFunction);
    }
    // Only overflow can fail once the token is all digits.
    token.parse::<u8>().map_err(|_| FormatIssue::OutOfRange)
}
