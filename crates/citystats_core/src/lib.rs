//! Core logic for citystats: parse a flat city file and report on it.
//! This crate owns every parsing and reporting rule; the CLI only wires it.

pub mod config;
pub mod logging;
pub mod model;
pub mod parse;
pub mod repo;
pub mod report;

pub use config::ReportConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::city::{City, Population};
pub use parse::{parse_line, parse_lines, LineOutcome, ParseError, ParsedLines, RejectedLine};
pub use repo::city_repo::{CityRepository, LoadDiagnostic};
pub use report::format::{format_population, state_display_name};
pub use report::{
    cities_in_state, cities_sharing_names, largest_city_national_rank, lowest_city_by_state,
    top_cities_by_state, write_all_reports, NameGroup, NationalRank, StateCities, StateLowest,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
