use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::models::RawStateStat;
use crate::domain::{Coordinate, Metric};
use crate::geo::GeoEntry;

/// A statewise record joined with its geocode entry.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedState {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub active: u64,
    pub confirmed: u64,
    pub recovered: u64,
    pub deaths: u64,
    #[serde(skip)]
    pub last_updated: String,
}

impl EnrichedState {
    pub const fn count(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Active => self.active,
            Metric::Confirmed => self.confirmed,
            Metric::Recovered => self.recovered,
            Metric::Deaths => self.deaths,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Result of joining a feed snapshot with the geocode table.
///
/// `dropped` counts records that produced no enriched entry, either because
/// no geo entry matched their code or because the code already appeared
/// earlier in the snapshot.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub states: Vec<EnrichedState>,
    pub dropped: usize,
}

/// Inner join of statewise records with the geocode table, keyed by state
/// code. Order-preserving over the raw input; the lookup map is built once
/// from the table. Every output code is unique within the snapshot.
pub fn join_states(raw: &[RawStateStat], table: &[GeoEntry]) -> JoinOutcome {
    let index: HashMap<&str, &GeoEntry> = table.iter().map(|entry| (entry.code, entry)).collect();

    let mut states = Vec::with_capacity(raw.len());
    let mut seen: HashSet<&str> = HashSet::with_capacity(raw.len());
    let mut dropped = 0;

    for stat in raw {
        let Some(geo) = index.get(stat.statecode.as_str()) else {
            dropped += 1;
            continue;
        };
        if !seen.insert(stat.statecode.as_str()) {
            dropped += 1;
            continue;
        }
        states.push(EnrichedState {
            code: stat.statecode.clone(),
            name: geo.name.to_string(),
            lat: geo.lat,
            lng: geo.lng,
            active: stat.active,
            confirmed: stat.confirmed,
            recovered: stat.recovered,
            deaths: stat.deaths,
            last_updated: stat.lastupdatedtime.clone(),
        });
    }

    JoinOutcome { states, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [GeoEntry; 2] = [
        GeoEntry { code: "MH", name: "Maharashtra", lat: 19.7, lng: 75.7 },
        GeoEntry { code: "DL", name: "Delhi", lat: 28.7041, lng: 77.1025 },
    ];

    fn stat(code: &str, active: u64, confirmed: u64, recovered: u64, deaths: u64) -> RawStateStat {
        RawStateStat {
            statecode: code.to_string(),
            active,
            confirmed,
            recovered,
            deaths,
            lastupdatedtime: String::new(),
        }
    }

    #[test]
    fn join_inherits_geo_fields_and_counts_unchanged() {
        let raw = [stat("MH", 40, 100, 55, 5)];
        let outcome = join_states(&raw, &TABLE);

        assert_eq!(outcome.states.len(), 1);
        assert_eq!(outcome.dropped, 0);

        let mh = &outcome.states[0];
        assert_eq!(mh.code, "MH");
        assert_eq!(mh.name, "Maharashtra");
        assert!((mh.lat - 19.7).abs() < f64::EPSILON);
        assert!((mh.lng - 75.7).abs() < f64::EPSILON);
        assert_eq!(mh.count(Metric::Active), 40);
        assert_eq!(mh.count(Metric::Confirmed), 100);
        assert_eq!(mh.count(Metric::Recovered), 55);
        assert_eq!(mh.count(Metric::Deaths), 5);
    }

    #[test]
    fn records_without_geo_entry_are_dropped_and_counted() {
        let raw = [stat("MH", 1, 1, 0, 0), stat("ZZ", 9, 9, 9, 9), stat("DL", 2, 2, 0, 0)];
        let outcome = join_states(&raw, &TABLE);

        let codes: Vec<&str> = outcome.states.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["MH", "DL"]);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn join_preserves_raw_order() {
        let raw = [stat("DL", 0, 0, 0, 0), stat("MH", 0, 0, 0, 0)];
        let outcome = join_states(&raw, &TABLE);
        let codes: Vec<&str> = outcome.states.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["DL", "MH"]);
    }

    #[test]
    fn duplicate_codes_keep_first_occurrence() {
        let raw = [stat("MH", 1, 1, 1, 1), stat("MH", 2, 2, 2, 2)];
        let outcome = join_states(&raw, &TABLE);

        assert_eq!(outcome.states.len(), 1);
        assert_eq!(outcome.states[0].active, 1);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn join_is_idempotent() {
        let raw = [stat("MH", 40, 100, 55, 5), stat("DL", 10, 20, 8, 2)];
        let first = join_states(&raw, &TABLE);

        // Re-joining the already-enriched snapshot yields the same records,
        // no duplication.
        let rejoined: Vec<RawStateStat> = first
            .states
            .iter()
            .map(|s| stat(&s.code, s.active, s.confirmed, s.recovered, s.deaths))
            .collect();
        let second = join_states(&rejoined, &TABLE);

        assert_eq!(second.states.len(), first.states.len());
        assert_eq!(second.dropped, 0);
        for (a, b) in first.states.iter().zip(second.states.iter()) {
            assert_eq!(a.code, b.code);
            assert_eq!(a.confirmed, b.confirmed);
        }
    }

    #[test]
    fn empty_feed_joins_to_empty_outcome() {
        let outcome = join_states(&[], &TABLE);
        assert!(outcome.states.is_empty());
        assert_eq!(outcome.dropped, 0);
    }
}
