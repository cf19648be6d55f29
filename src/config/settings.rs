use log::info;

const ENDPOINT_ENV_VAR: &str = "ESPNFF_ENDPOINT";

#[derive(Debug, Clone, PartialEq)]
pub struct RankingSettings {
    /// Share of one dominance point given to the best points-per-game average
    pub points_tiebreak_weight: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            points_tiebreak_weight: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub rate_limit_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 100,
            user_agent: "espnff/0.1".to_string(),
            timeout_secs: 30,
            api_base_url: "http://games.espn.com/ffl/api/v2/".to_string(),
        }
    }
}

impl ClientSettings {
    /// Defaults, with the base URL taken from `ESPNFF_ENDPOINT` when set
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            info!("Using API endpoint from {}: {}", ENDPOINT_ENV_VAR, endpoint);
            settings.api_base_url = with_trailing_slash(endpoint);
        }
        settings
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub ranking: RankingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            client: ClientSettings::from_env(),
            ranking: RankingSettings::default(),
        }
    }
}
