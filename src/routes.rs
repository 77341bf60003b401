use crate::server::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{debug, error, warn};
use riot_api::{AggregatedProfile, ApiError, CurrentGameInfo, MatchDto, account_route, profile};
use serde::{Deserialize, Serialize};

const MISSING_SUMMONER_PARAMS: &str = "Missing parameters: name, tag, region required.";
const MISSING_LIVE_GAME_PARAMS: &str = "Missing puuid or region";
const UPSTREAM_FAILURE: &str = "Failed to fetch data from Riot API.";
const INTERNAL_FAILURE: &str = "Internal server error occurred.";

#[derive(Debug, Deserialize)]
pub struct SummonerQuery {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LiveGameQuery {
    pub puuid: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummonerResponse {
    pub profile: AggregatedProfile,
    pub matches: Vec<MatchDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameResponse {
    pub active_game: Option<CurrentGameInfo>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug)]
pub enum HandlerError {
    InvalidRequest(&'static str),
    /// Riot rejected a call the response cannot do without.
    Upstream(ApiError),
    Internal(ApiError),
}

impl From<ApiError> for HandlerError {
    fn from(e: ApiError) -> Self {
        if matches!(e, ApiError::Upstream { .. }) {
            HandlerError::Upstream(e)
        } else {
            HandlerError::Internal(e)
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            HandlerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HandlerError::Upstream(e) => {
                error!("[HTTP Error] {e}");
                (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE)
            }
            HandlerError::Internal(e) => {
                error!("[Internal Error] {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_FAILURE)
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Query values that are present but empty count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "LoL Edge Backend is running!" }))
}

pub async fn summoner(
    State(state): State<AppState>,
    Query(query): Query<SummonerQuery>,
) -> Result<Json<SummonerResponse>, HandlerError> {
    let (Some(name), Some(tag), Some(region)) =
        (present(query.name), present(query.tag), present(query.region))
    else {
        return Err(HandlerError::InvalidRequest(MISSING_SUMMONER_PARAMS));
    };

    let response = aggregate_summoner(&state, &name, &tag, &region).await?;
    Ok(Json(response))
}

/// Identity, profile and ranked lookups are required; masteries and matches degrade.
async fn aggregate_summoner(
    state: &AppState,
    name: &str,
    tag: &str,
    region: &str,
) -> Result<SummonerResponse, ApiError> {
    let account = state.api.resolve_identity(name, tag).await?;
    let puuid = account.puuid.ok_or(ApiError::MissingField("puuid"))?;
    let route = account_route(region);
    debug!("resolved {name}#{tag} to {puuid}, match routing via {route}");

    let summoner = state.api.fetch_profile(&puuid, region).await?;
    let summoner_id = summoner.id.as_deref().ok_or(ApiError::MissingField("id"))?;
    let ranked = state.api.fetch_ranked_entries(summoner_id, region).await?;

    let masteries = match state.api.fetch_masteries(&puuid, region).await {
        Ok(masteries) => masteries,
        Err(e) => {
            warn!("champion mastery fetch failed: {e}");
            Vec::new()
        }
    };

    let mut profile = profile::merge(&summoner, &ranked, &masteries);
    profile.riot_id = Some(format!("{name}#{tag}"));
    profile.tag_line = Some(tag.to_owned());

    let matches = state
        .api
        .resolve_matches(&puuid, route, &state.fallback_matches)
        .await;

    Ok(SummonerResponse { profile, matches })
}

pub async fn live_game(
    State(state): State<AppState>,
    Query(query): Query<LiveGameQuery>,
) -> Result<Json<LiveGameResponse>, HandlerError> {
    let (Some(puuid), Some(region)) = (present(query.puuid), present(query.region)) else {
        return Err(HandlerError::InvalidRequest(MISSING_LIVE_GAME_PARAMS));
    };

    // Riot answers 404 when the player is not in a game; any failure means "no game".
    let active_game = match state.api.fetch_live_game(&puuid, &region).await {
        Ok(game) => Some(game),
        Err(e) => {
            warn!("[Live Error] {e}");
            None
        }
    };

    Ok(Json(LiveGameResponse { active_game }))
}

#[cfg(test)]
mod tests {
    use crate::server::{AppState, build_router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mockito::{Matcher, Mock, Server};
    use riot_api::{MatchDto, RiotApi};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn state(host: String) -> AppState {
        let fallback: Vec<MatchDto> = serde_json::from_value(json!([
            { "metadata": { "matchId": "FAKE_1" }, "info": { "participants": [{ "puuid": "X" }] } },
            { "metadata": { "matchId": "FAKE_2" } }
        ]))
        .unwrap();
        AppState {
            api: RiotApi::new("test-key").with_host(host),
            fallback_matches: Arc::new(fallback),
        }
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn mock_json(server: &mut Server, path: &str, status: usize, body: Value) -> Mock {
        server
            .mock("GET", path)
            .match_header("X-Riot-Token", "test-key")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Identity and profile lookups for Faker#EUW (puuid P1, summoner S1).
    async fn mock_identity_and_profile(server: &mut Server) -> Vec<Mock> {
        vec![
            mock_json(
                server,
                "/riot/account/v1/accounts/by-riot-id/Faker/EUW",
                200,
                json!({ "puuid": "P1", "gameName": "Faker", "tagLine": "EUW" }),
            )
            .await,
            mock_json(
                server,
                "/lol/summoner/v4/summoners/by-puuid/P1",
                200,
                json!({ "id": "S1", "puuid": "P1", "summonerLevel": 100, "profileIconId": 29 }),
            )
            .await,
        ]
    }

    async fn mock_required(server: &mut Server) -> Vec<Mock> {
        let mut mocks = mock_identity_and_profile(server).await;
        mocks.push(
            mock_json(
                server,
                "/lol/league/v4/entries/by-summoner/S1",
                200,
                json!([{ "queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "rank": "II",
                         "leaguePoints": 40, "wins": 10, "losses": 5 }]),
            )
            .await,
        );
        mocks
    }

    async fn mock_matches(server: &mut Server) -> Vec<Mock> {
        vec![
            server
                .mock("GET", "/lol/match/v5/matches/by-puuid/P1/ids")
                .match_query(Matcher::UrlEncoded("count".into(), "10".into()))
                .with_status(200)
                .with_body(r#"["M1"]"#)
                .create_async()
                .await,
            mock_json(
                server,
                "/lol/match/v5/matches/M1",
                200,
                json!({ "metadata": { "matchId": "M1" },
                        "info": { "gameMode": "CLASSIC", "participants": [{ "puuid": "P1" }] } }),
            )
            .await,
        ]
    }

    #[tokio::test]
    async fn home_reports_running() {
        let (status, body) = get_json(build_router(state("http://127.0.0.1:1".into())), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "LoL Edge Backend is running!" }));
    }

    #[tokio::test]
    async fn summoner_without_tag_is_rejected() {
        let app = build_router(state("http://127.0.0.1:1".into()));
        let (status, body) = get_json(app, "/summoner?name=Faker&region=euw1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing parameters: name, tag, region required." }));
    }

    #[tokio::test]
    async fn empty_parameter_counts_as_missing() {
        let app = build_router(state("http://127.0.0.1:1".into()));
        let (status, _) = get_json(app, "/summoner?name=Faker&tag=EUW&region=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn summoner_aggregates_profile_and_matches() {
        let mut server = Server::new_async().await;
        let _required = mock_required(&mut server).await;
        let _mastery = mock_json(
            &mut server,
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/P1",
            200,
            json!([{ "championId": 1, "championPoints": 500, "championLevel": 7 }]),
        )
        .await;
        let _matches = mock_matches(&mut server).await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::OK);

        let profile = &body["profile"];
        assert_eq!(profile["id"], "S1");
        assert_eq!(profile["summonerLevel"], 100);
        assert_eq!(profile["riotId"], "Faker#EUW");
        assert_eq!(profile["tagLine"], "EUW");
        assert_eq!(profile["rankedSolo"]["tier"], "GOLD");
        assert_eq!(profile["rankedSolo"]["winRate"], 66.7);
        assert!(profile["rankedFlex"].is_null());
        assert_eq!(profile["topChampions"], json!([
            { "championId": 1, "championPoints": 500, "championLevel": 7 }
        ]));

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["metadata"]["matchId"], "M1");
        assert_eq!(matches[0]["userPuuid"], "P1");
    }

    #[tokio::test]
    async fn mastery_failure_degrades_to_no_champions() {
        let mut server = Server::new_async().await;
        let _required = mock_required(&mut server).await;
        let _mastery = mock_json(
            &mut server,
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/P1",
            500,
            json!({}),
        )
        .await;
        let _matches = mock_matches(&mut server).await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["topChampions"], json!([]));
        assert_eq!(body["profile"]["rankedSolo"]["wins"], 10);
    }

    #[tokio::test]
    async fn match_outage_serves_fallback_matches() {
        let mut server = Server::new_async().await;
        let _required = mock_required(&mut server).await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::OK);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["metadata"]["matchId"], "FAKE_1");
        assert_eq!(matches[0]["userPuuid"], "P1");
    }

    #[tokio::test]
    async fn identity_not_found_is_bad_gateway() {
        let mut server = Server::new_async().await;
        let _identity = mock_json(
            &mut server,
            "/riot/account/v1/accounts/by-riot-id/Nobody/EUW",
            404,
            json!({ "status": { "message": "Data not found", "status_code": 404 } }),
        )
        .await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Nobody&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "Failed to fetch data from Riot API." }));
    }

    #[tokio::test]
    async fn ranked_failure_is_bad_gateway() {
        let mut server = Server::new_async().await;
        let _lookups = mock_identity_and_profile(&mut server).await;
        let _ranked = mock_json(
            &mut server,
            "/lol/league/v4/entries/by-summoner/S1",
            503,
            json!({}),
        )
        .await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Failed to fetch data from Riot API.");
    }

    #[tokio::test]
    async fn profile_without_summoner_id_is_internal_error() {
        let mut server = Server::new_async().await;
        let _identity = mock_json(
            &mut server,
            "/riot/account/v1/accounts/by-riot-id/Faker/EUW",
            200,
            json!({ "puuid": "P1" }),
        )
        .await;
        let _profile = mock_json(
            &mut server,
            "/lol/summoner/v4/summoners/by-puuid/P1",
            200,
            json!({ "puuid": "P1" }),
        )
        .await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error occurred." }));
    }

    #[tokio::test]
    async fn unreachable_riot_is_internal_error() {
        let app = build_router(state("http://127.0.0.1:1".into()));
        let (status, _) = get_json(app, "/summoner?name=Faker&tag=EUW&region=euw1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn live_game_not_found_is_null() {
        let mut server = Server::new_async().await;
        let _live = mock_json(
            &mut server,
            "/lol/spectator/v5/active-games/by-puuid/P1",
            404,
            json!({ "status": { "message": "Data not found", "status_code": 404 } }),
        )
        .await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/livegame?puuid=P1&region=euw1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "activeGame": null }));
    }

    #[tokio::test]
    async fn live_game_is_passed_through() {
        let mut server = Server::new_async().await;
        let _live = mock_json(
            &mut server,
            "/lol/spectator/v5/active-games/by-puuid/P1",
            200,
            json!({ "gameId": 42, "gameMode": "CLASSIC", "gameQueueConfigId": 420 }),
        )
        .await;

        let app = build_router(state(server.url()));
        let (status, body) = get_json(app, "/livegame?puuid=P1&region=euw1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["activeGame"]["gameId"], 42);
        assert_eq!(body["activeGame"]["gameQueueConfigId"], 420);
    }

    #[tokio::test]
    async fn live_game_without_region_is_rejected() {
        let app = build_router(state("http://127.0.0.1:1".into()));
        let (status, body) = get_json(app, "/livegame?puuid=P1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing puuid or region" }));
    }
}
