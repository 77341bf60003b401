//! Riot API raw wire types: serde shapes for deserializing Riot responses.
//! Every field is optional: the merger and resolver decide what a missing field means.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Account-V1
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ---------------------------------------------------------------------------
// Summoner-V4 / League-V4 / Champion-Mastery-V4
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id, still required by League-V4.
    pub id: Option<String>,
    pub puuid: Option<String>,
    pub name: Option<String>,
    pub summoner_level: Option<u32>,
    pub profile_icon_id: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: Option<String>, // "RANKED_SOLO_5x5", "RANKED_FLEX_SR", "CHERRY", ...
    pub tier: Option<String>,
    pub rank: Option<String>, // division: "I".."IV"
    pub league_points: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: Option<u64>,
    pub champion_points: Option<u64>,
    pub champion_level: Option<u32>,
}

// ---------------------------------------------------------------------------
// Match-V5
// ---------------------------------------------------------------------------

/// A match as returned by Match-V5. Only the fields the backend inspects are
/// typed; the rest is carried through untouched for the frontend.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct MatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MatchMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<MatchInfo>,
    /// Whose perspective this match is viewed from. Stamped by the resolver.
    #[serde(rename = "userPuuid", default, skip_serializing_if = "Option::is_none")]
    pub user_puuid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatchDto {
    pub fn participants(&self) -> &[Participant] {
        self.info
            .as_ref()
            .and_then(|i| i.participants.as_deref())
            .unwrap_or_default()
    }

    /// A match is usable only if it carries a non-empty participant list.
    pub fn has_participants(&self) -> bool {
        !self.participants().is_empty()
    }

    pub fn match_id(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.match_id.as_deref())
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_duration: Option<u64>, // seconds
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Spectator-V5
// ---------------------------------------------------------------------------

/// Current game info. Passed through to the frontend as-is.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
