//! Cities whose name appears on more than one record.

use super::grouping::group_by;
use super::write_section_title;
use crate::model::city::City;
use std::io::{self, Write};

/// All records sharing one exact, case-sensitive city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup<'a> {
    pub name: &'a str,
    /// Members in input order. Always at least two.
    pub cities: Vec<&'a City>,
}

/// Returns every name used by two or more records.
///
/// Singleton names are omitted entirely. Groups appear in first-encounter
/// order of their name.
pub fn cities_sharing_names(cities: &[City]) -> Vec<NameGroup<'_>> {
    group_by(cities, |city| city.name.as_str())
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(name, members)| NameGroup {
            name,
            cities: members,
        })
        .collect()
}

pub fn write_cities_sharing_names(cities: &[City], out: &mut impl Write) -> io::Result<()> {
    write_section_title(out, "Cities Sharing Names")?;

    let groups = cities_sharing_names(cities);
    if groups.is_empty() {
        return writeln!(out, "No shared city names found");
    }

    for group in groups {
        writeln!(out)?;
        writeln!(out, "{}:", group.name)?;
        for city in group.cities {
            writeln!(out, "  {city}")?;
        }
    }
    Ok(())
}
