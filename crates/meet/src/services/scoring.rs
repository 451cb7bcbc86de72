use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::ScoringConfig;
use crate::dto::results::{
    ClubStanding, CohortStanding, EventResult, RankedParticipant, ResultsResponse,
    SwimmerStanding,
};
use crate::error::Result;
use crate::models::{AgeGroup, EntryRef, Event, Gender, PointsOwner, RaceTime, Scoreable};
use crate::repository::MeetStore;

use super::listing::{club_name, roster_names, swimmer_info};

/// Swimmers listed per (age group, gender) in the championship standings.
pub const CHAMPIONSHIP_PLACES: usize = 5;

/// One entrant as the ranking sees it.
#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub entry: EntryRef,
    pub time: RaceTime,
    pub recorded: Option<String>,
    pub owner: PointsOwner,
}

#[derive(Debug, Clone)]
pub struct RankedRow {
    pub entry: EntryRef,
    pub position: usize,
    pub time: RaceTime,
    pub recorded: Option<String>,
    pub owner: PointsOwner,
    pub medal: Option<String>,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct EventRanking {
    pub rows: Vec<RankedRow>,
    pub points_awarded: bool,
}

/// Orders one event's entrants and decides medals and points.
///
/// Rows keep their input order on equal times. Medals go to the first
/// `medals_awarded` positions whatever their time; points only to medal
/// holders with a finishing time. Points are withheld from the whole event
/// when the points guard trips: fewer entrants than `points_guard_position`,
/// or the entrant at that position is absent or did not finish.
pub fn rank_event(mut rows: Vec<ScoreRow>, relay: bool, config: &ScoringConfig) -> EventRanking {
    rows.sort_by_key(|row| row.time);

    let guard = config.points_guard_position;
    let points_awarded =
        guard == 0 || rows.get(guard - 1).is_some_and(|row| !row.time.is_sentinel());

    let cutoff = config.medals_awarded(relay);
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let medal = (index < cutoff).then(|| (index + 1).to_string());
            let points = match &medal {
                Some(medal) if points_awarded && row.time.is_finished() => {
                    config.points_for(relay, medal).unwrap_or(0)
                }
                _ => 0,
            };
            RankedRow {
                entry: row.entry,
                position: index + 1,
                time: row.time,
                recorded: row.recorded,
                owner: row.owner,
                medal,
                points,
            }
        })
        .collect();

    EventRanking {
        rows,
        points_awarded,
    }
}

/// Full results pass over a fixed snapshot of recorded times.
///
/// Club totals and medals are cleared first and rebuilt from scratch, so
/// running the pass twice yields the same totals. An unreadable time or a
/// dangling reference only affects its own entry; it is reported in the
/// event's warnings and the pass continues.
pub fn compute_results(store: &mut MeetStore, config: &ScoringConfig) -> Result<ResultsResponse> {
    store.reset_club_points();
    store.clear_medals();

    let events: Vec<Event> = store.list_events().into_iter().cloned().collect();
    let mut swimmer_points: BTreeMap<i32, u32> = BTreeMap::new();
    let mut event_results = Vec::with_capacity(events.len());

    for event in &events {
        let mut warnings = Vec::new();

        let rows = if event.relay {
            score_rows(event, store.relay_entries_for_event(event.event_id), &mut warnings)
        } else if event.is_final_round() {
            score_rows(event, store.final_entries_for_event(event.event_id), &mut warnings)
        } else {
            score_rows(event, store.individual_entries_for_event(event.event_id), &mut warnings)
        };

        let ranking = rank_event(rows, event.relay, config);

        let mut participants = Vec::with_capacity(ranking.rows.len());
        for row in ranking.rows {
            if let Err(e) = apply_row(store, &row, &mut swimmer_points) {
                warn!(event_id = event.event_id, entry = ?row.entry, "Skipping entry: {}", e);
                warnings.push(format!("{:?}: {}", row.entry, e));
                continue;
            }
            participants.push(participant(store, row));
        }

        if !ranking.points_awarded && !participants.is_empty() {
            info!(
                event_id = event.event_id,
                "Points withheld: too few valid finishers"
            );
        }

        event_results.push(EventResult {
            event_id: event.event_id,
            name: event.name.clone(),
            age_group: event.age_group,
            gender: event.gender,
            relay: event.relay,
            scoring_mode: event.scoring_mode,
            points_awarded: ranking.points_awarded,
            participants,
            warnings,
        });
    }

    let championship_standings = championship_standings(store, config, &swimmer_points);
    let club_standings = club_standings(store);

    info!(
        events = event_results.len(),
        clubs = club_standings.len(),
        "Computed results"
    );

    Ok(ResultsResponse {
        events: event_results,
        championship_standings,
        club_standings,
    })
}

fn score_rows<'a, T: Scoreable + 'a>(
    event: &Event,
    entries: Vec<&'a T>,
    warnings: &mut Vec<String>,
) -> Vec<ScoreRow> {
    entries
        .into_iter()
        .map(|entry| {
            let time = RaceTime::from_recorded(entry.recorded_time()).unwrap_or_else(|e| {
                warn!(
                    event_id = event.event_id,
                    entry = ?entry.entry_ref(),
                    "Ranking entry as untimed: {}", e
                );
                warnings.push(format!("{:?}: {}", entry.entry_ref(), e));
                RaceTime::NotTimed
            });
            ScoreRow {
                entry: entry.entry_ref(),
                time,
                recorded: entry.recorded_time().map(str::to_string),
                owner: entry.points_owner(),
            }
        })
        .collect()
}

/// Writes the medal back to the entry and credits its points.
fn apply_row(
    store: &mut MeetStore,
    row: &RankedRow,
    swimmer_points: &mut BTreeMap<i32, u32>,
) -> Result<()> {
    store.scoreable_mut(row.entry)?.set_medal(row.medal.clone());

    if row.points == 0 {
        return Ok(());
    }

    match row.owner {
        PointsOwner::Club(club_id) => store.add_club_points(club_id, row.points)?,
        PointsOwner::Swimmer(swimmer_id) => {
            let club_id = store.find_swimmer(swimmer_id)?.club_id;
            store.add_club_points(club_id, row.points)?;
            *swimmer_points.entry(swimmer_id).or_default() += row.points;
        }
    }
    Ok(())
}

fn participant(store: &MeetStore, row: RankedRow) -> RankedParticipant {
    let (club_id, swimmer, roster) = match row.owner {
        PointsOwner::Club(club_id) => {
            let roster = store
                .find_relay_entry(row.entry.id())
                .map(|r| roster_names(store, &r.roster))
                .unwrap_or_default();
            (club_id, None, roster)
        }
        PointsOwner::Swimmer(swimmer_id) => match store.find_swimmer(swimmer_id) {
            Ok(swimmer) => (swimmer.club_id, Some(swimmer_info(store, swimmer)), Vec::new()),
            Err(_) => (0, None, Vec::new()),
        },
    };

    RankedParticipant {
        entry: row.entry,
        position: row.position,
        time: row.recorded,
        medal: row.medal,
        points: row.points,
        club_id,
        club_name: club_name(store, club_id),
        swimmer,
        roster,
    }
}

/// Top swimmers of each (age group, gender) cohort by points earned in this
/// pass. Equal points rank by swimmer id.
fn championship_standings(
    store: &MeetStore,
    config: &ScoringConfig,
    swimmer_points: &BTreeMap<i32, u32>,
) -> Vec<CohortStanding> {
    let mut cohorts: BTreeMap<(AgeGroup, Gender), Vec<(i32, u32)>> = BTreeMap::new();
    for (&swimmer_id, &points) in swimmer_points {
        if let Ok(swimmer) = store.find_swimmer(swimmer_id) {
            cohorts
                .entry(swimmer.cohort())
                .or_default()
                .push((swimmer_id, points));
        }
    }

    cohorts
        .into_iter()
        .map(|((age_group, gender), mut tally)| {
            tally.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            tally.truncate(CHAMPIONSHIP_PLACES);

            let standings = tally
                .into_iter()
                .enumerate()
                .filter_map(|(i, (swimmer_id, points))| {
                    let swimmer = store.find_swimmer(swimmer_id).ok()?;
                    Some(SwimmerStanding {
                        rank: i + 1,
                        points,
                        swimmer: swimmer_info(store, swimmer),
                    })
                })
                .collect();

            CohortStanding {
                age_group,
                age_group_label: config.age_group_labels.get(&age_group).cloned(),
                gender,
                standings,
            }
        })
        .collect()
}

/// All clubs by total points, highest first; equal totals by name.
fn club_standings(store: &MeetStore) -> Vec<ClubStanding> {
    let mut clubs = store.list_clubs();
    clubs.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });

    clubs
        .into_iter()
        .enumerate()
        .map(|(i, club)| ClubStanding {
            rank: i + 1,
            club_id: club.club_id,
            name: club.name.clone(),
            total_points: club.total_points,
        })
        .collect()
}
