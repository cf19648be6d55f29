use crate::config::settings::ClientSettings;
use crate::domain::models::{LeagueSettingsResponse, ScoreboardResponse};
use crate::errors::classify_response;
use crate::http::RateLimitedClient;
use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// ESPN fantasy football API client
pub struct EspnClient {
    client: RateLimitedClient,
    base_url: String,
}

impl EspnClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = RateLimitedClient::new(settings)?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
        })
    }

    /// Fetch teams, records and schedules for a league season
    pub async fn fetch_league_settings(
        &mut self,
        league_id: i64,
        year: i32,
    ) -> Result<LeagueSettingsResponse> {
        info!("Fetching settings for league {} ({})", league_id, year);
        let params = Self::league_params(league_id, year);
        self.fetch("leagueSettings", &params).await
    }

    /// Fetch the scoreboard for `week`, or the current week when `None`
    pub async fn fetch_scoreboard(
        &mut self,
        league_id: i64,
        year: i32,
        week: Option<u32>,
    ) -> Result<ScoreboardResponse> {
        info!("Fetching scoreboard for league {} week {:?}", league_id, week);
        let mut params = Self::league_params(league_id, year);
        if let Some(week) = week {
            params.push(("matchupPeriodId", week.to_string()));
        }
        self.fetch("scoreboard", &params).await
    }

    async fn fetch<T: DeserializeOwned>(
        &mut self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, resource);
        let response = self.client.get(&url, params).await?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", resource))?;

        decode_response(status, &text)
            .with_context(|| format!("Failed to fetch {}", resource))
    }

    fn league_params(league_id: i64, year: i32) -> Vec<(&'static str, String)> {
        vec![
            ("leagueId", league_id.to_string()),
            ("seasonId", year.to_string()),
        ]
    }
}

/// Classify the status first, then map the body onto `T`
pub fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T> {
    let body: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) if status != 200 => {
            warn!("Non-JSON body with status {}: {}", status, e);
            Value::Null
        }
        Err(e) => return Err(e).context("Failed to parse response JSON"),
    };

    classify_response(status, &body)?;

    serde_json::from_value(body).context("Failed to map response JSON")
}
