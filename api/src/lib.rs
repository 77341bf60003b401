pub mod client;
pub mod matches;
pub mod profile;
pub mod riot;
pub mod routing;
pub mod summary;

pub use client::{ApiError, ApiResult, RiotApi};
pub use matches::load_fallback_matches;
pub use riot::{CurrentGameInfo, MatchDto};
pub use routing::{RoutingCluster, account_route, platform_route};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Domain types: the payload the frontend consumes, independent of Riot wire format
// ---------------------------------------------------------------------------

/// Profile, ranked standing and top masteries merged into one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedProfile {
    pub summoner_name: Option<String>,
    pub summoner_level: Option<u32>,
    pub profile_icon_id: Option<u32>,
    pub puuid: Option<String>,
    /// Encrypted summoner id.
    pub id: Option<String>,
    pub ranked_solo: Option<RankedView>,
    pub ranked_flex: Option<RankedView>,
    pub top_champions: Vec<MasteryView>,
    /// "name#tag", filled in by the request handler.
    pub riot_id: Option<String>,
    pub tag_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedView {
    pub tier: String,
    pub rank: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64, // percent, one decimal
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryView {
    pub champion_id: Option<u64>,
    pub champion_points: Option<u64>,
    pub champion_level: Option<u32>,
}

/// Ranked queues the profile tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedQueue {
    Solo,
    Flex,
}

impl RankedQueue {
    pub fn from_queue_type(queue_type: &str) -> Option<Self> {
        match queue_type {
            "RANKED_SOLO_5x5" => Some(RankedQueue::Solo),
            "RANKED_FLEX_SR" => Some(RankedQueue::Flex),
            _ => None,
        }
    }
}

/// Compact, per-player view of a single match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverview {
    pub match_id: String,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    pub kda: f64,
    pub game_mode: String,
    pub role: String,
    pub time_played: u64, // seconds
}
