use serde::Serialize;

/// One tournament edition: the year plus the two finalists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    pub year: u16,
    pub winner: &'static str,
    pub runner_up: &'static str,
}

/// Per-country win count, annotated with the resolved territory code.
/// Rows without a code stay in the data; they just cannot be shaded on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryWinSummary {
    pub country: &'static str,
    pub wins: usize,
    pub iso_code: Option<&'static str>,
}
