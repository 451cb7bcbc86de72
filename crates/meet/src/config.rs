use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{MeetError, Result};
use crate::models::AgeGroup;

/// Medal and points rules for a results pass.
///
/// Medal ranks are string keys (`"1"`, `"2"`, ...) so they match the points
/// tables directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Number of ranked places awarded in individual events.
    pub medals_awarded_individual: usize,
    pub medals_awarded_relay: usize,
    pub medal_points: BTreeMap<String, u32>,
    pub relay_medal_points: BTreeMap<String, u32>,
    /// Maximum individual (non-relay) events per swimmer, by age group.
    pub age_group_event_caps: BTreeMap<AgeGroup, usize>,
    /// 1-based finishing position checked before an event awards points.
    /// The event awards nothing when it has fewer entrants than this, or when
    /// the entrant at this position is absent or did not finish.
    pub points_guard_position: usize,
    pub age_group_labels: BTreeMap<AgeGroup, String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            medals_awarded_individual: 3,
            medals_awarded_relay: 3,
            medal_points: points_table(&[5, 3, 1]),
            relay_medal_points: points_table(&[10, 6, 2]),
            age_group_event_caps: BTreeMap::from([
                (AgeGroup(1), 5),
                (AgeGroup(2), 5),
                (AgeGroup(3), 4),
                (AgeGroup(4), 3),
            ]),
            points_guard_position: 3,
            age_group_labels: BTreeMap::from([
                (AgeGroup(1), "Under 19".to_string()),
                (AgeGroup(2), "Under 17".to_string()),
                (AgeGroup(3), "Under 14".to_string()),
                (AgeGroup(4), "Under 11".to_string()),
            ]),
        }
    }
}

fn points_table(points: &[u32]) -> BTreeMap<String, u32> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1).to_string(), *p))
        .collect()
}

impl ScoringConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        for key in self.medal_points.keys().chain(self.relay_medal_points.keys()) {
            if key.parse::<usize>().map_or(true, |rank| rank == 0) {
                return Err(MeetError::ConstraintViolation(format!(
                    "points table key '{}' is not a 1-based rank",
                    key
                )));
            }
        }
        Ok(())
    }

    pub fn medals_awarded(&self, relay: bool) -> usize {
        if relay {
            self.medals_awarded_relay
        } else {
            self.medals_awarded_individual
        }
    }

    pub fn points_for(&self, relay: bool, medal: &str) -> Option<u32> {
        let table = if relay {
            &self.relay_medal_points
        } else {
            &self.medal_points
        };
        table.get(medal).copied()
    }

    pub fn event_cap(&self, age_group: AgeGroup) -> Option<usize> {
        self.age_group_event_caps.get(&age_group).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = ScoringConfig::from_json(
            r#"{ "medals_awarded_individual": 2, "medal_points": { "1": 5, "2": 3 } }"#,
        )
        .unwrap();

        assert_eq!(config.medals_awarded_individual, 2);
        assert_eq!(config.points_for(false, "2"), Some(3));
        assert_eq!(config.points_for(false, "3"), None);
        assert_eq!(config.medals_awarded_relay, 3);
        assert_eq!(config.event_cap(AgeGroup(3)), Some(4));
    }

    #[test]
    fn test_age_group_keys_parse_from_strings() {
        let config =
            ScoringConfig::from_json(r#"{ "age_group_event_caps": { "1": 6, "5": 2 } }"#).unwrap();
        assert_eq!(config.event_cap(AgeGroup(1)), Some(6));
        assert_eq!(config.event_cap(AgeGroup(5)), Some(2));
        assert_eq!(config.event_cap(AgeGroup(2)), None);
    }

    #[test]
    fn test_rejects_non_rank_points_keys() {
        let result = ScoringConfig::from_json(r#"{ "medal_points": { "gold": 5 } }"#);
        assert!(matches!(result, Err(MeetError::ConstraintViolation(_))));
    }
}
