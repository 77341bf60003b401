use crate::MatchOverview;
use crate::riot::MatchDto;
use log::warn;

/// Reduce a full match to the requesting player's line.
///
/// Returns `None` when the player is not among the participants or the
/// match lacks any field the overview needs.
pub fn summarize_match(m: &MatchDto, puuid: &str) -> Option<MatchOverview> {
    let info = m.info.as_ref()?;
    let participant = m
        .participants()
        .iter()
        .find(|p| p.puuid.as_deref() == Some(puuid))?;

    let kills = participant.kills?;
    let deaths = participant.deaths?;
    let assists = participant.assists?;

    Some(MatchOverview {
        match_id: m.match_id()?.to_owned(),
        champion_name: participant.champion_name.clone()?,
        kills,
        deaths,
        assists,
        win: participant.win?,
        kda: kda(kills, deaths, assists),
        game_mode: info.game_mode.clone()?,
        role: participant.team_position.clone()?,
        time_played: info.game_duration?,
    })
}

/// Summarize every match, skipping the ones that cannot be reduced.
pub fn summarize_matches(matches: &[MatchDto], puuid: &str) -> Vec<MatchOverview> {
    matches
        .iter()
        .filter_map(|m| {
            let overview = summarize_match(m, puuid);
            if overview.is_none() {
                warn!(
                    "failed to summarize match {}",
                    m.match_id().unwrap_or("<unknown>")
                );
            }
            overview
        })
        .collect()
}

/// (kills + assists) / deaths, with zero deaths counted as one. Two decimals, ties to even.
fn kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    let ratio = f64::from(kills + assists) / f64::from(deaths.max(1));
    (ratio * 100.0).round_ties_even() / 100.0
}
