pub mod client;
pub mod parse;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::scholarships::dto::ScholarshipOut;
use crate::state::AppState;
use client::{CompletionClient, SuggestError};

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    pub country: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/fetch-scholarships", post(fetch_scholarships))
}

/// Fixed item served whenever the provider is unconfigured or unusable.
pub fn fallback_suggestions() -> Vec<ScholarshipOut> {
    vec![ScholarshipOut {
        name: "Demo Scholarship".into(),
        provider: "Example Foundation".into(),
        deadline: "unknown".into(),
        url: "https://example.org/scholarship".into(),
    }]
}

fn suggestion_prompt(country: &str) -> String {
    format!(
        "List 8 legitimate scholarships for students in {country}. \
         Return ONLY JSON array of objects with fields: name, provider, deadline, url. \
         Deadlines as YYYY-MM-DD or 'unknown'. URLs must be real."
    )
}

pub async fn suggest_for_country(
    client: &dyn CompletionClient,
    country: &str,
) -> Result<Vec<ScholarshipOut>, SuggestError> {
    let text = client.complete(&suggestion_prompt(country)).await?;
    Ok(parse::parse_candidate_list(&text)?)
}

/// Never fails: any provider problem degrades to the fallback list.
#[instrument(skip(state))]
pub async fn fetch_scholarships(
    State(state): State<AppState>,
    Json(query): Json<CountryQuery>,
) -> Json<Vec<ScholarshipOut>> {
    let items = match &state.suggester {
        Some(client) => match suggest_for_country(client.as_ref(), &query.country).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "suggestion provider failed; serving fallback");
                fallback_suggestions()
            }
        },
        None => fallback_suggestions(),
    };
    Json(items)
}
