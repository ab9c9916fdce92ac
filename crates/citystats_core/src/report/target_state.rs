//! Reports focused on a single target state.

use super::format::{format_population, state_display_name};
use super::{rank_by_population, write_section_title};
use crate::model::city::City;
use std::io::{self, Write};

/// Position of one city in the national population ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalRank<'a> {
    pub city: &'a City,
    /// 1-based rank among all loaded cities.
    pub rank: usize,
}

/// Returns cities whose state equals `state` exactly, most populous first.
pub fn cities_in_state<'a>(cities: &'a [City], state: &str) -> Vec<&'a City> {
    rank_by_population(cities.iter().filter(|city| city.state == state))
}

/// Ranks all cities nationally and returns the best-ranked city of `state`.
///
/// Ties in the national ordering keep input order, so the rank is
/// deterministic for a given input. Returns `None` when no city matches.
pub fn largest_city_national_rank<'a>(cities: &'a [City], state: &str) -> Option<NationalRank<'a>> {
    rank_by_population(cities)
        .into_iter()
        .enumerate()
        .find(|(_, city)| city.state == state)
        .map(|(index, city)| NationalRank {
            city,
            rank: index + 1,
        })
}

pub fn write_cities_in_state(cities: &[City], state: &str, out: &mut impl Write) -> io::Result<()> {
    let state_name = state_display_name(state);
    write_section_title(out, &format!("Cities in {state_name}"))?;

    let matches = cities_in_state(cities, state);
    if matches.is_empty() {
        return writeln!(out, "No cities found in {state_name}");
    }

    writeln!(out, "Found {} cities in {state_name}:", matches.len())?;
    for city in matches {
        writeln!(out, "{city}")?;
    }
    Ok(())
}

pub fn write_largest_city_national_rank(
    cities: &[City],
    state: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let state_name = state_display_name(state);
    write_section_title(out, &format!("{state_name} Largest City National Rank"))?;

    match largest_city_national_rank(cities, state) {
        Some(NationalRank { city, rank }) => writeln!(
            out,
            "{}, {} ranks #{} nationally with population: {}",
            city.name,
            city.state,
            rank,
            format_population(city.population)
        ),
        None => writeln!(out, "No city found in {state_name}"),
    }
}
