use crate::riot::{ChampionMasteryDto, LeagueEntryDto, SummonerDto};
use crate::{AggregatedProfile, MasteryView, RankedQueue, RankedView};

const TOP_CHAMPION_COUNT: usize = 3;

/// Combine profile, ranked entries and champion masteries into one record.
///
/// Never fails: missing upstream fields surface as `None` or empty lists.
pub fn merge(
    profile: &SummonerDto,
    ranked_entries: &[LeagueEntryDto],
    masteries: &[ChampionMasteryDto],
) -> AggregatedProfile {
    let mut merged = AggregatedProfile {
        summoner_name: profile.name.clone(),
        summoner_level: profile.summoner_level,
        profile_icon_id: profile.profile_icon_id,
        puuid: profile.puuid.clone(),
        id: profile.id.clone(),
        ..Default::default()
    };

    // Later entries for the same queue overwrite earlier ones.
    for entry in ranked_entries {
        let Some(queue) = entry.queue_type.as_deref().and_then(RankedQueue::from_queue_type) else {
            continue;
        };
        let Some(view) = ranked_view(entry) else {
            log::debug!("skipping incomplete {queue:?} ranked entry");
            continue;
        };
        match queue {
            RankedQueue::Solo => merged.ranked_solo = Some(view),
            RankedQueue::Flex => merged.ranked_flex = Some(view),
        }
    }

    merged.top_champions = masteries
        .iter()
        .take(TOP_CHAMPION_COUNT)
        .map(|m| MasteryView {
            champion_id: m.champion_id,
            champion_points: m.champion_points,
            champion_level: m.champion_level,
        })
        .collect();

    merged
}

fn ranked_view(entry: &LeagueEntryDto) -> Option<RankedView> {
    let wins = entry.wins?;
    let losses = entry.losses?;
    Some(RankedView {
        tier: entry.tier.clone()?,
        rank: entry.rank.clone()?,
        league_points: entry.league_points?,
        wins,
        losses,
        win_rate: win_rate(wins, losses),
    })
}

/// Win percentage rounded half-to-even to one decimal; 0 when no games were played.
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let total = u64::from(wins) + u64::from(losses);
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(wins) / total as f64 * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}
