use crate::core::store::RecordStore;

/// Shown when a year lookup finds no record. The dropdown only offers years
/// that exist, so this is a defensive path, not an expected one.
pub const NO_DATA_MESSAGE: &str = "No data for that year.";

/// Country dropdown callback: empty output until a selection is made.
pub fn country_wins_text(store: &RecordStore, selection: Option<&str>) -> String {
    match selection {
        None => String::new(),
        Some(country) => {
            let wins = store.wins_for(country);
            format!("{} has won the World Cup {} time(s).", country, wins)
        }
    }
}

/// Year dropdown callback: empty output until a selection is made, a fixed
/// message when the selected year has no record.
pub fn year_result_text(store: &RecordStore, selection: Option<u16>) -> String {
    match selection {
        None => String::new(),
        Some(year) => match store.result_for(year) {
            None => NO_DATA_MESSAGE.to_string(),
            Some(record) => format!(
                "In {}, {} won the World Cup. Runner-up: {}.",
                record.year, record.winner, record.runner_up
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_handler_without_selection() {
        let store = RecordStore::new();
        assert_eq!(country_wins_text(&store, None), "");
    }

    #[test]
    fn test_country_handler_formats_win_count() {
        let store = RecordStore::new();
        assert_eq!(
            country_wins_text(&store, Some("Brazil")),
            "Brazil has won the World Cup 5 time(s)."
        );
        assert_eq!(
            country_wins_text(&store, Some("Germany")),
            "Germany has won the World Cup 4 time(s)."
        );
        assert_eq!(
            country_wins_text(&store, Some("Spain")),
            "Spain has won the World Cup 1 time(s)."
        );
    }

    #[test]
    fn test_year_handler_without_selection() {
        let store = RecordStore::new();
        assert_eq!(year_result_text(&store, None), "");
    }

    #[test]
    fn test_year_handler_formats_final_result() {
        let store = RecordStore::new();
        assert_eq!(
            year_result_text(&store, Some(2022)),
            "In 2022, Argentina won the World Cup. Runner-up: France."
        );
        assert_eq!(
            year_result_text(&store, Some(1930)),
            "In 1930, Uruguay won the World Cup. Runner-up: Argentina."
        );
    }

    #[test]
    fn test_year_handler_reports_missing_year() {
        let store = RecordStore::new();
        assert_eq!(year_result_text(&store, Some(2023)), NO_DATA_MESSAGE);
        assert_eq!(year_result_text(&store, Some(1942)), NO_DATA_MESSAGE);
    }
}
