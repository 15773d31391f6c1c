use worldcup_dashboard::core::aggregate::win_summaries;
use worldcup_dashboard::core::handlers::{country_wins_text, year_result_text};
use worldcup_dashboard::{default_resolver, CountryLookup, Dashboard, RecordStore};

#[test]
fn test_aggregate_covers_every_recorded_win() {
    let store = RecordStore::new();
    let summaries = win_summaries(&store, &default_resolver());

    assert_eq!(summaries.len(), 8);
    let total: usize = summaries.iter().map(|s| s.wins).sum();
    assert_eq!(total, 22);
}

#[test]
fn test_resolver_handles_dissolved_states() {
    assert_eq!(default_resolver().lookup("Czechoslovakia"), Some("CZE"));
}

#[test]
fn test_country_selection_flow() {
    let store = RecordStore::new();

    assert_eq!(country_wins_text(&store, None), "");
    assert_eq!(
        country_wins_text(&store, Some("Brazil")),
        "Brazil has won the World Cup 5 time(s)."
    );
    assert_eq!(
        country_wins_text(&store, Some("Germany")),
        "Germany has won the World Cup 4 time(s)."
    );
}

#[test]
fn test_year_selection_flow() {
    let store = RecordStore::new();

    assert_eq!(year_result_text(&store, None), "");
    assert_eq!(
        year_result_text(&store, Some(2022)),
        "In 2022, Argentina won the World Cup. Runner-up: France."
    );
    assert_eq!(year_result_text(&store, Some(2023)), "No data for that year.");
}

#[test]
fn test_dashboard_context_builds_from_store() {
    let dashboard = Dashboard::new(RecordStore::new()).unwrap();

    assert_eq!(dashboard.store().records().len(), 22);
    assert_eq!(dashboard.summaries().len(), 8);

    // Dropdown sources stay consistent with the summary rows.
    let winners = dashboard.store().winners();
    assert_eq!(winners.len(), dashboard.summaries().len());
    let years = dashboard.store().years();
    assert_eq!(years.len(), 22);
    assert!(years.windows(2).all(|w| w[0] < w[1]));
}
