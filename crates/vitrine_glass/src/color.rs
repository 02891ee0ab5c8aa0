//! `rgb()` / `rgba()` color strings
//!
//! The engine keeps its colors as CSS strings so they can be handed to the
//! host untouched. This module parses just enough of the functional notation
//! to read and rewrite the alpha channel.
//!
//! ```rust
//! use vitrine_glass::color::{extract_alpha, with_alpha};
//!
//! let c = with_alpha("rgba(255, 255, 255, 0.1)", 0.42);
//! assert_eq!(c, "rgba(255, 255, 255, 0.42)");
//! assert_eq!(extract_alpha(&c), 0.42);
//! ```

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    error::ParseError as NomParseError,
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, preceded},
    Finish, IResult,
};
use thiserror::Error;
use tracing::trace;

/// Alpha reported for colors that carry no alpha component
pub const DEFAULT_ALPHA: f32 = 0.25;

/// Color string parse failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not `rgb(...)` / `rgba(...)` functional notation
    #[error("invalid color `{0}`: expected rgb(r, g, b) or rgba(r, g, b, a)")]
    Syntax(String),

    /// Functional notation with fewer than three components
    #[error("invalid color `{0}`: expected at least 3 components, found {1}")]
    TooFewComponents(String, usize),
}

/// A parsed `rgba(...)` color
///
/// Channels keep the numbers exactly as written (usually 0-255); alpha is
/// `None` for the three-component `rgb()` form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: Option<f32>,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Alpha channel, or [`DEFAULT_ALPHA`] when the color has none
    pub fn alpha(&self) -> f32 {
        self.a.unwrap_or(DEFAULT_ALPHA)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = Some(alpha);
        self
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (_, values) = all_consuming(parse_components::<nom::error::Error<&str>>)(trimmed)
            .finish()
            .map_err(|_| ColorParseError::Syntax(s.to_string()))?;

        // nom's float also reads `nan` / `inf`, which are not CSS numbers
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ColorParseError::Syntax(s.to_string()));
        }

        match values.as_slice() {
            [r, g, b] => Ok(Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: None,
            }),
            [r, g, b, a, ..] => Ok(Rgba::new(*r, *g, *b, *a)),
            _ => Err(ColorParseError::TooFewComponents(
                s.to_string(),
                values.len(),
            )),
        }
    }
}

impl fmt::Display for Rgba {
    /// Always renders the four-component `rgba()` form
    ///
    /// Numbers use the shortest representation that parses back to the same
    /// `f32`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha()
        )
    }
}

/// Rewrite the alpha channel of an `rgb()`/`rgba()` string
///
/// Strings that do not parse are returned unchanged.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    match color.parse::<Rgba>() {
        Ok(rgba) => rgba.with_alpha(alpha).to_string(),
        Err(err) => {
            trace!("with_alpha passthrough: {}", err);
            color.to_string()
        }
    }
}

/// Read the alpha channel of an `rgb()`/`rgba()` string
///
/// Returns [`DEFAULT_ALPHA`] when the string has no alpha or does not parse.
pub fn extract_alpha(color: &str) -> f32 {
    color
        .parse::<Rgba>()
        .map(|rgba| rgba.alpha())
        .unwrap_or(DEFAULT_ALPHA)
}

/// `rgb(` or `rgba(`, then comma separated numbers, then `)`
fn parse_components<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Vec<f32>, E> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = opt(tag_no_case("a"))(input)?;
    let (input, _) = multispace0(input)?;
    delimited(
        char('('),
        separated_list1(
            preceded(multispace0, char(',')),
            preceded(multispace0, float),
        ),
        preceded(multispace0, char(')')),
    )(input)
}
