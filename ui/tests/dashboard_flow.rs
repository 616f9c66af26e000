//! Fixture-driven test of the whole data pipeline: parse → filter →
//! aggregate → export, the same path the dashboard view walks per render.

use ui::data::aggregate::{self, Summary};
use ui::data::export::filtered_csv;
use ui::data::filter::{FilterOptions, FilterState};
use ui::data::loader::parse_dataset;
use ui::data::SalaryRecord;

const FIXTURE: &str = "\
ano,senioridade,contrato,tamanho_empresa,cargo,remoto,residencia_iso3,usd
2020,junior,full-time,M,Data Scientist,remoto,BRA,45000
2020,senior,full-time,L,Data Scientist,presencial,USA,160000
2020,pleno,contract,S,Data Analyst,hibrido,PRT,58000
2021,junior,full-time,M,Data Engineer,remoto,BRA,52000
2021,senior,full-time,L,Data Scientist,remoto,USA,175000
2021,senior,contract,M,Data Analyst,presencial,DEU,70000
2021,pleno,full-time,L,Data Engineer,remoto,USA,120000
";

fn dataset() -> Vec<SalaryRecord> {
    parse_dataset(FIXTURE).expect("fixture parses")
}

#[test]
fn selecting_one_year_keeps_exactly_that_years_rows() {
    let records = dataset();
    let options = FilterOptions::from_records(&records);
    let mut state = FilterState::select_all(&options);
    state.years = [2020].into_iter().collect();

    let filtered = state.apply(&records);

    assert!(filtered.iter().all(|r| r.year == 2020));
    let in_source = records.iter().filter(|r| r.year == 2020).count();
    assert_eq!(filtered.len(), in_source);
}

#[test]
fn zero_match_combination_yields_an_empty_dashboard() {
    let records = dataset();
    let options = FilterOptions::from_records(&records);
    let mut state = FilterState::select_all(&options);
    // junior + contract + L never co-occur in the fixture.
    state.seniorities = ["junior".to_string()].into_iter().collect();
    state.contracts = ["contract".to_string()].into_iter().collect();
    state.company_sizes = ["L".to_string()].into_iter().collect();

    let filtered = state.apply(&records);
    assert!(filtered.is_empty());

    let summary = Summary::from_records(&filtered);
    assert_eq!(summary.row_count, 0);
    assert_eq!(summary.mean_usd, None);
    assert_eq!(summary.distinct_titles, 0);

    assert!(aggregate::top_titles_by_mean(&filtered, 10).is_empty());
    assert!(aggregate::histogram(&filtered, 30).is_empty());
    assert!(aggregate::remote_breakdown(&filtered).is_empty());
    assert!(aggregate::country_means(&filtered, "Data Scientist").is_empty());
}

#[test]
fn all_selected_filters_reproduce_the_source() {
    let records = dataset();
    let options = FilterOptions::from_records(&records);
    let state = FilterState::select_all(&options);

    assert!(state.is_exhaustive(&options));
    assert_eq!(state.apply(&records), records);
}

#[test]
fn export_of_a_filtered_view_round_trips() {
    let records = dataset();
    let options = FilterOptions::from_records(&records);
    let mut state = FilterState::select_all(&options);
    state.years = [2021].into_iter().collect();
    state.seniorities = ["senior".to_string()].into_iter().collect();

    let filtered = state.apply(&records);
    assert_eq!(filtered.len(), 2);

    let bytes = filtered_csv(&filtered).expect("export serializes");
    let text = String::from_utf8(bytes).expect("export is UTF-8");
    let reparsed = parse_dataset(&text).expect("export re-parses");
    assert_eq!(reparsed, filtered);
}

#[test]
fn country_chart_input_tracks_only_the_spotlight_title() {
    let records = dataset();
    let means = aggregate::country_means(&records, "Data Scientist");

    // USA mean over 160k and 175k; BRA only the 45k row.
    assert_eq!(
        means,
        vec![("USA".to_string(), 167_500.0), ("BRA".to_string(), 45_000.0)]
    );
}
