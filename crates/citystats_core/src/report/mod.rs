//! Population reports over a loaded `CityRepository`.
//!
//! # Responsibility
//! - Compute the five report views as plain data.
//! - Render each view as a titled, contiguous text section.
//!
//! # Invariants
//! - Reports never mutate the repository and never depend on each other.
//! - Descending population orderings are stable: ties keep input order.
//! - Every section prints its title, plus an explicit line when empty.

pub mod by_state;
pub mod format;
pub mod grouping;
pub mod shared_names;
pub mod target_state;

use crate::config::ReportConfig;
use crate::model::city::City;
use crate::repo::city_repo::CityRepository;
use log::debug;
use std::io::{self, Write};

pub use by_state::{
    lowest_city_by_state, top_cities_by_state, write_lowest_city_by_state,
    write_top_cities_by_state, StateCities, StateLowest,
};
pub use shared_names::{cities_sharing_names, write_cities_sharing_names, NameGroup};
pub use target_state::{
    cities_in_state, largest_city_national_rank, write_cities_in_state,
    write_largest_city_national_rank, NationalRank,
};

/// Writes all five report sections in their fixed order.
///
/// Each section is written completely before the next one starts.
pub fn write_all_reports(
    repo: &CityRepository,
    config: &ReportConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    let cities = repo.cities();
    debug!(
        "event=report_run module=report status=start cities={} target_state={} top_n={}",
        cities.len(),
        config.target_state,
        config.top_n
    );

    write_top_cities_by_state(cities, config.top_n, out)?;
    write_lowest_city_by_state(cities, out)?;
    write_cities_sharing_names(cities, out)?;
    write_cities_in_state(cities, &config.target_state, out)?;
    write_largest_city_national_rank(cities, &config.target_state, out)?;

    debug!("event=report_run module=report status=ok");
    Ok(())
}

pub(crate) fn write_section_title(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {title} ===")
}

/// Sorts by population descending; `sort_by` is stable so ties keep the
/// order they were given in.
pub(crate) fn rank_by_population<'a, I>(cities: I) -> Vec<&'a City>
where
    I: IntoIterator<Item = &'a City>,
{
    let mut ranked: Vec<&City> = cities.into_iter().collect();
    ranked.sort_by(|a, b| b.population.cmp(&a.population));
    ranked
}
