use citystats_core::{
    cities_sharing_names, largest_city_national_rank, top_cities_by_state, write_all_reports,
    City, CityRepository, ReportConfig,
};
use std::collections::HashMap;

const SPRINGFIELD_INPUT: &str = "Springfield, IL, 1,200\n\
                                 Springfield, MO, 2,500\n\
                                 Chicago, IL, 2,700,000\n";

fn render(repo: &CityRepository, config: &ReportConfig) -> String {
    let mut out = Vec::new();
    write_all_reports(repo, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn config_for(state: &str) -> ReportConfig {
    ReportConfig {
        target_state: state.to_string(),
        ..ReportConfig::default()
    }
}

#[test]
fn springfield_scenario_groups_ranks_and_orders() {
    let repo = CityRepository::from_text(SPRINGFIELD_INPUT);
    assert!(repo.diagnostics().is_empty());
    assert_eq!(repo.len(), 3);

    let shared = cities_sharing_names(repo.cities());
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].name, "Springfield");
    assert_eq!(shared[0].cities.len(), 2);

    let top = top_cities_by_state(repo.cities(), 3);
    let illinois = top.iter().find(|group| group.state == "IL").unwrap();
    let names: Vec<&str> = illinois.cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Chicago", "Springfield"]);

    let rank = largest_city_national_rank(repo.cities(), "MO").unwrap();
    assert_eq!(rank.city.name, "Springfield");
    assert_eq!(rank.rank, 2);
}

#[test]
fn springfield_scenario_full_output() {
    let repo = CityRepository::from_text(SPRINGFIELD_INPUT);

    let expected = "\n=== Top Three Cities by State ===\n\
                    \nIL:\n  Chicago, IL: 2700000\n  Springfield, IL: 1200\n\
                    \nMO:\n  Springfield, MO: 2500\n\
                    \n=== Lowest Population City by State ===\n\
                    IL: Springfield, IL: 1200\n\
                    MO: Springfield, MO: 2500\n\
                    \n=== Cities Sharing Names ===\n\
                    \nSpringfield:\n  Springfield, IL: 1200\n  Springfield, MO: 2500\n\
                    \n=== Cities in Missouri ===\n\
                    Found 1 cities in Missouri:\n\
                    Springfield, MO: 2500\n\
                    \n=== Missouri Largest City National Rank ===\n\
                    Springfield, MO ranks #2 nationally with population: 2,500\n";

    assert_eq!(render(&repo, &config_for("MO")), expected);
}

#[test]
fn empty_input_prints_every_header_with_empty_result_line() {
    let repo = CityRepository::from_text("");
    assert!(repo.diagnostics().is_empty());

    let expected = "\n=== Top Three Cities by State ===\n\
                    No cities loaded\n\
                    \n=== Lowest Population City by State ===\n\
                    No cities loaded\n\
                    \n=== Cities Sharing Names ===\n\
                    No shared city names found\n\
                    \n=== Cities in Arkansas ===\n\
                    No cities found in Arkansas\n\
                    \n=== Arkansas Largest City National Rank ===\n\
                    No city found in Arkansas\n";

    assert_eq!(render(&repo, &ReportConfig::default()), expected);
}

#[test]
fn rendering_is_deterministic_across_runs() {
    let input = "Rogers,AR,69908\nConway,AR,64134\nTulsa,OK,413066\nRogers,MN,13295\n\
                 Norman,OK,128026\nBentonville,AR,54164\nEnid,OK,50308\nLawton,OK,90381\n";

    let first = render(&CityRepository::from_text(input), &ReportConfig::default());
    let second = render(&CityRepository::from_text(input), &ReportConfig::default());

    assert_eq!(first, second);
}

#[test]
fn top_cities_length_is_min_of_three_and_state_size() {
    let cities: Vec<City> = (0..7)
        .map(|i| City::new(format!("OK{i}"), "OK", (i * 37 % 11) as u64))
        .chain((0..2).map(|i| City::new(format!("DE{i}"), "DE", i as u64)))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for city in &cities {
        *counts.entry(city.state.as_str()).or_default() += 1;
    }

    for group in top_cities_by_state(&cities, 3) {
        assert_eq!(group.cities.len(), counts[group.state].min(3));
        assert!(group
            .cities
            .windows(2)
            .all(|pair| pair[0].population >= pair[1].population));
    }
}

#[test]
fn shared_name_groups_cover_exactly_repeated_names() {
    let repo = CityRepository::from_text(
        "Franklin,TN,85000\nDover,DE,39000\nFranklin,MA,33000\nSalem,OR,175000\n\
         Franklin,WI,36000\nSalem,MA,44000\nParis,TX,24000\n",
    );

    let groups = cities_sharing_names(repo.cities());

    let names: Vec<&str> = groups.iter().map(|group| group.name).collect();
    assert_eq!(names, vec!["Franklin", "Salem"]);
    assert!(groups.iter().all(|group| group.cities.len() >= 2));
    assert_eq!(groups[0].cities.len(), 3);
}

#[test]
fn national_rank_is_one_plus_count_of_larger_cities() {
    let repo = CityRepository::from_text(
        "Tulsa,OK,413066\nLittle Rock,AR,202591\nMemphis,TN,633104\nFort Smith,AR,89142\n",
    );

    let rank = largest_city_national_rank(repo.cities(), "AR").unwrap();
    let larger = repo
        .cities()
        .iter()
        .filter(|city| city.population > rank.city.population)
        .count();

    assert_eq!(rank.city.name, "Little Rock");
    assert_eq!(rank.rank, larger + 1);
}
