use serde_json::json;

use crate::core::store::RecordStore;
use crate::domain::model::CountryWinSummary;
use crate::utils::error::Result;

pub const PAGE_HEADING: &str = "FIFA World Cup Dashboard";
pub const MAP_TITLE: &str = "FIFA World Cup Wins by Country";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__HEADING__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 2rem; }
  h1 { text-align: center; }
  select { min-width: 16rem; display: block; margin-top: 0.5rem; }
  .lookup { margin-top: 2rem; }
  .lookup-output { margin-top: 20px; font-weight: bold; min-height: 1.2em; }
</style>
</head>
<body>
<h1>__HEADING__</h1>
<div id="wins-map"></div>
<div class="lookup">
  <label for="country-dropdown">Select a country to see how many times it has won:</label>
  <select id="country-dropdown">
    <option value=""></option>
__COUNTRY_OPTIONS__
  </select>
  <div id="country-win-output" class="lookup-output"></div>
</div>
<div class="lookup">
  <label for="year-dropdown">Select a year to view the final result:</label>
  <select id="year-dropdown">
    <option value=""></option>
__YEAR_OPTIONS__
  </select>
  <div id="year-result-output" class="lookup-output"></div>
</div>
<script>
const figure = __FIGURE__;
Plotly.newPlot("wins-map", figure.data, figure.layout, { responsive: true });

function bindLookup(selectId, outputId, endpoint, param) {
  const select = document.getElementById(selectId);
  const output = document.getElementById(outputId);
  select.addEventListener("change", async () => {
    const value = select.value;
    const url =
      value === "" ? endpoint : endpoint + "?" + param + "=" + encodeURIComponent(value);
    const body = await fetch(url).then((res) => res.json());
    output.textContent = body.text;
  });
}

bindLookup("country-dropdown", "country-win-output", "/api/country", "country");
bindLookup("year-dropdown", "year-result-output", "/api/year", "year");
</script>
</body>
</html>
"#;

/// Choropleth figure for the win table. Rows without a territory code carry
/// nothing plotly could shade, so they are left out of the trace; their
/// summary rows and dropdown entries are unaffected.
fn figure_json(summaries: &[CountryWinSummary]) -> serde_json::Value {
    let mut locations = Vec::new();
    let mut wins = Vec::new();
    let mut names = Vec::new();
    for row in summaries {
        if let Some(code) = row.iso_code {
            locations.push(code);
            wins.push(row.wins);
            names.push(row.country);
        }
    }

    json!({
        "data": [{
            "type": "choropleth",
            "locations": locations,
            "z": wins,
            "text": names,
            "colorscale": "Blues",
            // plotly.js ships "Blues" dark-to-light; reverse so more wins = darker
            "reversescale": true,
            "colorbar": { "title": { "text": "Wins" } }
        }],
        "layout": {
            "title": { "text": MAP_TITLE },
            "geo": { "showframe": false, "showcoastlines": true }
        }
    })
}

fn country_options_html(store: &RecordStore) -> String {
    store
        .winners()
        .iter()
        .map(|country| format!("    <option value=\"{0}\">{0}</option>", country))
        .collect::<Vec<_>>()
        .join("\n")
}

fn year_options_html(store: &RecordStore) -> String {
    store
        .years()
        .iter()
        .map(|year| format!("    <option value=\"{0}\">{0}</option>", year))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the complete dashboard page. Called once at startup; the result
/// is cached in the dashboard context and served as-is.
pub fn render_page(store: &RecordStore, summaries: &[CountryWinSummary]) -> Result<String> {
    let figure = serde_json::to_string(&figure_json(summaries))?;

    Ok(PAGE_TEMPLATE
        .replace("__HEADING__", PAGE_HEADING)
        .replace("__FIGURE__", &figure)
        .replace("__COUNTRY_OPTIONS__", &country_options_html(store))
        .replace("__YEAR_OPTIONS__", &year_options_html(store)))
}
