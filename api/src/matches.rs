use crate::client::{ApiError, ApiResult, RiotApi};
use crate::riot::MatchDto;
use crate::routing::RoutingCluster;
use log::{debug, warn};
use std::path::Path;

const FALLBACK_MATCHES_JSON: &str = include_str!("../fake_matches.json");

impl RiotApi {
    /// Fetch the player's recent matches, best effort.
    ///
    /// Fallback chain:
    /// 1) Match-V5 id listing, then one detail fetch per id; failed fetches are skipped.
    /// 2) `fallback` in its entirety when no detail could be fetched (including when
    ///    the listing itself failed).
    ///
    /// Every returned match is stamped with `puuid` and has a non-empty participant list.
    pub async fn resolve_matches(
        &self,
        puuid: &str,
        route: RoutingCluster,
        fallback: &[MatchDto],
    ) -> Vec<MatchDto> {
        let ids = match self.list_match_ids(puuid, route).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!("match id listing failed for {puuid}: {e}");
                Vec::new()
            }
        };
        debug!("match ids for {puuid}: {ids:?}");

        let mut matches = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.fetch_match_detail(id, route).await {
                Ok(m) => matches.push(m),
                Err(e) => warn!("match {id} fetch failed: {e}"),
            }
        }

        if matches.is_empty() {
            warn!("no match details for {puuid}, serving fallback matches");
            matches = fallback.to_vec();
        }

        stamp_and_filter(matches, puuid)
    }
}

fn stamp_and_filter(matches: Vec<MatchDto>, puuid: &str) -> Vec<MatchDto> {
    matches
        .into_iter()
        .map(|mut m| {
            m.user_puuid = Some(puuid.to_owned());
            m
        })
        .filter(MatchDto::has_participants)
        .collect()
}

/// Load the sample match dataset served when live match data is unavailable.
///
/// Reads `path` when given, otherwise the sample compiled into the crate.
pub fn load_fallback_matches(path: Option<&Path>) -> ApiResult<Vec<MatchDto>> {
    let Some(path) = path else {
        return serde_json::from_str(FALLBACK_MATCHES_JSON)
            .map_err(|e| ApiError::Other(format!("invalid embedded fallback matches: {e}")));
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| ApiError::Other(format!("could not read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| ApiError::Other(format!("invalid fallback matches at {}: {e}", path.display())))
}
