//! Per-state reports: largest cities and smallest city of each state.

use super::grouping::group_by;
use super::{rank_by_population, write_section_title};
use crate::model::city::City;
use std::io::{self, Write};

const EMPTY_REPOSITORY_MESSAGE: &str = "No cities loaded";

/// Largest cities of one state, most populous first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCities<'a> {
    pub state: &'a str,
    pub cities: Vec<&'a City>,
}

/// Least populous city of one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateLowest<'a> {
    pub state: &'a str,
    pub city: &'a City,
}

/// Returns up to `limit` most populous cities for every state.
///
/// # Contract
/// - States appear in first-encounter input order.
/// - Within a state, ties keep input order.
/// - A state with fewer than `limit` cities lists all of them.
pub fn top_cities_by_state(cities: &[City], limit: usize) -> Vec<StateCities<'_>> {
    group_by(cities, |city| city.state.as_str())
        .into_iter()
        .map(|(state, members)| {
            let mut ranked = rank_by_population(members);
            ranked.truncate(limit);
            StateCities {
                state,
                cities: ranked,
            }
        })
        .collect()
}

/// Returns the least populous city for every state.
///
/// On a population tie the first city in input order wins.
pub fn lowest_city_by_state(cities: &[City]) -> Vec<StateLowest<'_>> {
    group_by(cities, |city| city.state.as_str())
        .into_iter()
        .filter_map(|(state, members)| {
            members
                .into_iter()
                .min_by_key(|city| city.population)
                .map(|city| StateLowest { state, city })
        })
        .collect()
}

pub fn write_top_cities_by_state(
    cities: &[City],
    limit: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    write_section_title(out, &top_cities_title(limit))?;

    let groups = top_cities_by_state(cities, limit);
    if groups.is_empty() {
        return writeln!(out, "{EMPTY_REPOSITORY_MESSAGE}");
    }

    for group in groups {
        writeln!(out)?;
        writeln!(out, "{}:", group.state)?;
        for city in group.cities {
            writeln!(out, "  {city}")?;
        }
    }
    Ok(())
}

fn top_cities_title(limit: usize) -> String {
    match limit {
        3 => "Top Three Cities by State".to_string(),
        n => format!("Top {n} Cities by State"),
    }
}

pub fn write_lowest_city_by_state(cities: &[City], out: &mut impl Write) -> io::Result<()> {
    write_section_title(out, "Lowest Population City by State")?;

    let lowest = lowest_city_by_state(cities);
    if lowest.is_empty() {
        return writeln!(out, "{EMPTY_REPOSITORY_MESSAGE}");
    }

    for entry in lowest {
        writeln!(out, "{}: {}", entry.state, entry.city)?;
    }
    Ok(())
}
