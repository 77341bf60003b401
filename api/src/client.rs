use crate::riot::{
    AccountDto, ChampionMasteryDto, CurrentGameInfo, LeagueEntryDto, MatchDto, SummonerDto,
};
use crate::routing::{RoutingCluster, platform_route};
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// `{route}` is replaced by a platform or continental routing value.
pub const RIOT_HOST_TEMPLATE: &str = "https://{route}.api.riotgames.com";
const AUTH_HEADER: &str = "X-Riot-Token";
const MATCH_HISTORY_COUNT: u32 = 10;

/// Riot Games API client. Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct RiotApi {
    client: Client,
    api_key: String,
    host_template: String,
    timeout: Duration,
}

#[derive(Debug)]
pub enum ApiError {
    /// Riot answered with a non-success status.
    Upstream { status: u16, body: String, url: String },
    Network(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    /// A field the request pipeline cannot continue without was absent.
    MissingField(&'static str),
    Other(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Upstream { status, body, url } => {
                write!(f, "Upstream error {status} for {url}: {body}")
            }
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::MissingField(field) => write!(f, "Missing field in response: {field}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Parsing(e, _) => Some(e),
            _ => None,
        }
    }
}

impl RiotApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("lol-edge/0.1 (profile aggregation backend)")
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            host_template: RIOT_HOST_TEMPLATE.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Point the client at another host, e.g. a local stub. A template without
    /// `{route}` sends every routing value to the same host.
    pub fn with_host(mut self, host_template: impl Into<String>) -> Self {
        self.host_template = host_template.into();
        self
    }

    // -----------------------------------------------------------------------
    // Account-V1 (always served from the europe cluster)
    // -----------------------------------------------------------------------

    pub async fn resolve_identity(&self, game_name: &str, tag_line: &str) -> ApiResult<AccountDto> {
        let url = self.endpoint(
            RoutingCluster::Europe.as_str(),
            &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        )?;
        self.get(url).await
    }

    // -----------------------------------------------------------------------
    // Platform-routed endpoints
    // -----------------------------------------------------------------------

    pub async fn fetch_profile(&self, puuid: &str, platform: &str) -> ApiResult<SummonerDto> {
        let url = self.endpoint(
            platform_route(platform),
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )?;
        self.get(url).await
    }

    pub async fn fetch_ranked_entries(
        &self,
        summoner_id: &str,
        platform: &str,
    ) -> ApiResult<Vec<LeagueEntryDto>> {
        let url = self.endpoint(
            platform_route(platform),
            &["lol", "league", "v4", "entries", "by-summoner", summoner_id],
        )?;
        self.get(url).await
    }

    pub async fn fetch_masteries(
        &self,
        puuid: &str,
        platform: &str,
    ) -> ApiResult<Vec<ChampionMasteryDto>> {
        let url = self.endpoint(
            platform_route(platform),
            &["lol", "champion-mastery", "v4", "champion-masteries", "by-puuid", puuid],
        )?;
        self.get(url).await
    }

    /// Riot signals "not in game" with a 404, which surfaces here as `ApiError::Upstream`.
    pub async fn fetch_live_game(&self, puuid: &str, platform: &str) -> ApiResult<CurrentGameInfo> {
        let url = self.endpoint(
            platform_route(platform),
            &["lol", "spectator", "v5", "active-games", "by-puuid", puuid],
        )?;
        self.get(url).await
    }

    // -----------------------------------------------------------------------
    // Match-V5 (continental routing)
    // -----------------------------------------------------------------------

    pub async fn list_match_ids(&self, puuid: &str, route: RoutingCluster) -> ApiResult<Vec<String>> {
        let mut url = self.endpoint(
            route.as_str(),
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )?;
        url.query_pairs_mut()
            .append_pair("count", &MATCH_HISTORY_COUNT.to_string());
        self.get(url).await
    }

    pub async fn fetch_match_detail(&self, match_id: &str, route: RoutingCluster) -> ApiResult<MatchDto> {
        let url = self.endpoint(route.as_str(), &["lol", "match", "v5", "matches", match_id])?;
        self.get(url).await
    }

    fn endpoint(&self, route: &str, segments: &[&str]) -> ApiResult<Url> {
        let base = self.host_template.replace("{route}", route);
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::Other(format!("invalid host {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Other(format!("host cannot carry a path: {base}")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let label = url.to_string();
        debug!("GET {label}");

        let response = self
            .client
            .get(url)
            .header(AUTH_HEADER, &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, label.clone()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream { status: status.as_u16(), body, url: label });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, label))
    }
}
