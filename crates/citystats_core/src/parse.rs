//! Line parser for the `name,state,population` input format.
//!
//! # Responsibility
//! - Turn one raw input line into a `City` or a classified drop.
//! - Keep the silent vs. reported drop rules in one place.
//!
//! # Invariants
//! - Blank lines and wrong field counts never produce a diagnostic.
//! - A population without digits, or one that overflows, is always
//!   reported through `ParseError`.
//! - Surviving cities keep the relative order of their input lines.

use crate::model::city::{City, Population};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

const FIELD_SEPARATOR: char = ',';
const THOUSANDS_GROUP_LEN: usize = 3;

/// Population parse failure for a line that had the right field count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Population field contains no ASCII digit at all.
    NoDigits { line: String },
    /// Digits do not fit the population integer type.
    OutOfRange { line: String, digits: String },
}

impl ParseError {
    /// Raw input line that was rejected.
    pub fn line(&self) -> &str {
        match self {
            Self::NoDigits { line } => line,
            Self::OutOfRange { line, .. } => line,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDigits { line } => write!(f, "population has no digits in line `{line}`"),
            Self::OutOfRange { line, digits } => {
                write!(f, "population `{digits}` is out of range in line `{line}`")
            }
        }
    }
}

impl Error for ParseError {}

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or whitespace-only line.
    Blank,
    /// Line does not split into exactly three fields. Dropped silently.
    WrongFieldCount,
    /// Three fields, but the population could not be parsed.
    Rejected(ParseError),
    City(City),
}

/// A rejected line with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub error: ParseError,
}

/// Result of parsing a whole sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLines {
    /// Successfully parsed cities in input order.
    pub cities: Vec<City>,
    /// One entry per line rejected for its population field.
    pub rejected: Vec<RejectedLine>,
}

/// Parses one raw input line.
///
/// # Contract
/// - Field 1 and 2 are trimmed into `name` and `state`.
/// - Every non-digit character is stripped from field 3 before parsing.
/// - Comma-separated pieces after field 3 that are exactly three digits
///   are read as thousands groups of the population, so
///   `Springfield, IL, 1,200` is still a three-field line.
pub fn parse_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Blank;
    }

    let Some((name, state, population_field)) = split_fields(line) else {
        return LineOutcome::WrongFieldCount;
    };

    match parse_population(population_field) {
        Ok(population) => LineOutcome::City(City::new(name.trim(), state.trim(), population)),
        Err(PopulationFailure::NoDigits) => LineOutcome::Rejected(ParseError::NoDigits {
            line: line.to_string(),
        }),
        Err(PopulationFailure::OutOfRange(digits)) => {
            LineOutcome::Rejected(ParseError::OutOfRange {
                line: line.to_string(),
                digits,
            })
        }
    }
}

/// Parses every line, keeping cities and rejections in input order.
pub fn parse_lines<'a, I>(lines: I) -> ParsedLines
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = ParsedLines::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            LineOutcome::Blank => {}
            LineOutcome::WrongFieldCount => {
                trace!("event=line_skip module=parse reason=field_count line_number={line_number}");
            }
            LineOutcome::Rejected(error) => {
                parsed.rejected.push(RejectedLine { line_number, error });
            }
            LineOutcome::City(city) => parsed.cities.push(city),
        }
    }

    parsed
}

enum PopulationFailure {
    NoDigits,
    OutOfRange(String),
}

fn parse_population(field: &str) -> Result<Population, PopulationFailure> {
    let digits = NON_DIGIT_RE.replace_all(field, "");
    if digits.is_empty() {
        return Err(PopulationFailure::NoDigits);
    }
    digits
        .parse::<Population>()
        .map_err(|_| PopulationFailure::OutOfRange(digits.into_owned()))
}

fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    let mut pieces = line.splitn(3, FIELD_SEPARATOR);
    let name = pieces.next()?;
    let state = pieces.next()?;
    let population = pieces.next()?;

    let mut groups = population.split(FIELD_SEPARATOR);
    let head = groups.next().unwrap_or_default();
    let mut continuation = groups.peekable();
    if continuation.peek().is_none() {
        return Some((name, state, population));
    }

    let head_ends_in_digit = head
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit());
    if head_ends_in_digit && continuation.all(is_thousands_group) {
        Some((name, state, population))
    } else {
        None
    }
}

fn is_thousands_group(piece: &str) -> bool {
    let trimmed = piece.trim();
    trimmed.len() == THOUSANDS_GROUP_LEN && trimmed.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, parse_lines, split_fields, LineOutcome, ParseError};
    use crate::model::city::City;

    #[test]
    fn parse_line_trims_name_and_state() {
        assert_eq!(
            parse_line("  Little Rock ,  AR , 202591"),
            LineOutcome::City(City::new("Little Rock", "AR", 202_591))
        );
    }

    #[test]
    fn parse_line_strips_non_digit_characters_from_population() {
        assert_eq!(
            parse_line("Fayetteville,AR, ~93.9k people"),
            LineOutcome::City(City::new("Fayetteville", "AR", 939))
        );
    }

    #[test]
    fn parse_line_accepts_thousands_separators() {
        assert_eq!(
            parse_line("Chicago, IL, 2,700,000"),
            LineOutcome::City(City::new("Chicago", "IL", 2_700_000))
        );
    }

    #[test]
    fn parse_line_skips_blank_lines() {
        assert_eq!(parse_line(""), LineOutcome::Blank);
        assert_eq!(parse_line(" \t "), LineOutcome::Blank);
    }

    #[test]
    fn parse_line_drops_wrong_field_counts() {
        assert_eq!(parse_line("Austin,TX"), LineOutcome::WrongFieldCount);
        assert_eq!(parse_line("Austin"), LineOutcome::WrongFieldCount);
        assert_eq!(parse_line("Austin,TX,961855,extra"), LineOutcome::WrongFieldCount);
        assert_eq!(parse_line("Austin,TX,abc,123"), LineOutcome::WrongFieldCount);
    }

    #[test]
    fn parse_line_rejects_population_without_digits() {
        assert_eq!(
            parse_line("Austin,TX,abc"),
            LineOutcome::Rejected(ParseError::NoDigits {
                line: "Austin,TX,abc".to_string(),
            })
        );
        assert!(matches!(parse_line("Austin,TX,"), LineOutcome::Rejected(_)));
    }

    #[test]
    fn parse_line_rejects_overflowing_population() {
        let line = "Nowhere,XX,99999999999999999999999";
        match parse_line(line) {
            LineOutcome::Rejected(err) => {
                assert_eq!(err.line(), line);
                assert!(err.to_string().contains("out of range"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn split_fields_keeps_population_groups_together() {
        assert_eq!(
            split_fields("Springfield, IL, 1,200"),
            Some(("Springfield", " IL", " 1,200"))
        );
        assert_eq!(split_fields("a,b,1,20"), None);
    }

    #[test]
    fn parse_lines_reports_rejections_with_line_numbers() {
        let parsed = parse_lines(["Austin,TX,961855", "", "Austin,TX", "Waco,TX,n/a"]);

        assert_eq!(parsed.cities, vec![City::new("Austin", "TX", 961_855)]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 4);
        assert_eq!(parsed.rejected[0].error.line(), "Waco,TX,n/a");
    }
}
