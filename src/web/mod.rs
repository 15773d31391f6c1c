pub mod page;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::core::aggregate::win_summaries;
use crate::core::handlers::{country_wins_text, year_result_text, NO_DATA_MESSAGE};
use crate::core::resolver::default_resolver;
use crate::core::store::RecordStore;
use crate::domain::model::CountryWinSummary;
use crate::utils::error::Result;

/// Everything the routes read: record table, derived win summary, and the
/// pre-rendered page. Built once in `main`, immutable afterwards, shared
/// behind an `Arc` — concurrent requests only ever read.
pub struct Dashboard {
    store: RecordStore,
    summaries: Vec<CountryWinSummary>,
    page: String,
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Result<Self> {
        let resolver = default_resolver();
        let summaries = win_summaries(&store, &resolver);
        let page = page::render_page(&store, &summaries)?;
        Ok(Self {
            store,
            summaries,
            page,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn summaries(&self) -> &[CountryWinSummary] {
        &self.summaries
    }
}

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/country", get(country_lookup))
        .route("/api/year", get(year_lookup))
        .with_state(dashboard)
}

pub async fn serve(dashboard: Arc<Dashboard>, config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("🌍 Dashboard listening on http://{}", addr);

    axum::serve(listener, router(dashboard)).await?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct LookupAnswer {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CountryQuery {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YearQuery {
    year: Option<String>,
}

async fn index(State(dashboard): State<Arc<Dashboard>>) -> Html<String> {
    Html(dashboard.page.clone())
}

async fn country_lookup(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<CountryQuery>,
) -> Json<LookupAnswer> {
    let selection = query.country.as_deref().filter(|name| !name.is_empty());
    tracing::debug!(?selection, "country lookup");

    let text = country_wins_text(dashboard.store(), selection);
    Json(LookupAnswer { text })
}

async fn year_lookup(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<YearQuery>,
) -> Json<LookupAnswer> {
    let selection = query.year.as_deref().filter(|year| !year.is_empty());
    tracing::debug!(?selection, "year lookup");

    // Missing/empty is the no-selection state; an unparseable year gets the
    // same fixed message as a year with no record, never an error status.
    let text = match selection {
        None => year_result_text(dashboard.store(), None),
        Some(raw) => match raw.parse::<u16>() {
            Ok(year) => year_result_text(dashboard.store(), Some(year)),
            Err(_) => NO_DATA_MESSAGE.to_string(),
        },
    };
    Json(LookupAnswer { text })
}
