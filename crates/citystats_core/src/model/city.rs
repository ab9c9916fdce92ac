//! City record model.
//!
//! # Responsibility
//! - Hold one parsed `name,state,population` input line.
//!
//! # Invariants
//! - `name` and `state` are already trimmed.
//! - Records with an unparsable population are never constructed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Population count of one city.
pub type Population = u64;

/// One city record loaded from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name, compared case-sensitively when grouping.
    pub name: String,
    /// State code, expected to be a 2-letter code but not validated.
    pub state: String,
    pub population: Population,
}

impl City {
    /// Creates a city record from already-normalized fields.
    pub fn new(name: impl Into<String>, state: impl Into<String>, population: Population) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            population,
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}: {}", self.name, self.state, self.population)
    }
}

#[cfg(test)]
mod tests {
    use super::City;

    #[test]
    fn display_lists_name_state_and_raw_population() {
        let city = City::new("Little Rock", "AR", 202_591);
        assert_eq!(city.to_string(), "Little Rock, AR: 202591");
    }
}
