use serde::{Deserialize, Deserializer, Serialize};

/// The parts of the upstream JSON document this dashboard consumes.
///
/// Unknown fields are ignored; the feed carries more (`tested`,
/// `key_values`) than the dashboard renders.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    pub statewise: Vec<RawStateStat>,
    #[serde(default)]
    pub cases_time_series: Vec<TimeSeriesEntry>,
}

/// One `statewise` record as returned by the feed.
///
/// The live feed serializes every count as a JSON string ("1234"), so the
/// count fields accept either strings or integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStateStat {
    pub statecode: String,
    #[serde(deserialize_with = "count_field")]
    pub active: u64,
    #[serde(deserialize_with = "count_field")]
    pub confirmed: u64,
    #[serde(deserialize_with = "count_field")]
    pub recovered: u64,
    #[serde(deserialize_with = "count_field")]
    pub deaths: u64,
    #[serde(default)]
    pub lastupdatedtime: String,
}

/// One national `cases_time_series` entry, consumed by the chart widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    #[serde(default)]
    pub dateymd: String,
    #[serde(default, deserialize_with = "count_field")]
    pub dailyconfirmed: u64,
    #[serde(default, deserialize_with = "count_field")]
    pub dailyrecovered: u64,
    #[serde(default, deserialize_with = "count_field")]
    pub dailydeceased: u64,
    #[serde(default, deserialize_with = "count_field")]
    pub totalconfirmed: u64,
    #[serde(default, deserialize_with = "count_field")]
    pub totalrecovered: u64,
    #[serde(default, deserialize_with = "count_field")]
    pub totaldeceased: u64,
}

impl TimeSeriesEntry {
    /// Cumulative active cases have no column of their own in the feed.
    pub const fn total_active(&self) -> u64 {
        self.totalconfirmed
            .saturating_sub(self.totalrecovered)
            .saturating_sub(self.totaldeceased)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Number(u64),
    Text(String),
}

/// Accepts `1234`, `"1234"`, and the feed's occasional `""` (treated as 0).
fn count_field<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match CountRepr::deserialize(deserializer)? {
        CountRepr::Number(value) => Ok(value),
        CountRepr::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(0)
            } else {
                trimmed.parse().map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_deserialize_from_strings() {
        let json = r#"{
            "statewise": [
                {
                    "statecode": "MH",
                    "active": "40",
                    "confirmed": "100",
                    "recovered": "55",
                    "deaths": "5",
                    "lastupdatedtime": "28/08/2021 09:30:00"
                }
            ],
            "cases_time_series": []
        }"#;

        let document: FeedDocument = serde_json::from_str(json).unwrap();
        let stat = &document.statewise[0];
        assert_eq!(stat.statecode, "MH");
        assert_eq!(stat.active, 40);
        assert_eq!(stat.confirmed, 100);
        assert_eq!(stat.recovered, 55);
        assert_eq!(stat.deaths, 5);
    }

    #[test]
    fn counts_deserialize_from_numbers_and_blanks() {
        let json = r#"{
            "statewise": [
                {"statecode": "DL", "active": 10, "confirmed": "", "recovered": "3", "deaths": 0}
            ]
        }"#;

        let document: FeedDocument = serde_json::from_str(json).unwrap();
        let stat = &document.statewise[0];
        assert_eq!(stat.active, 10);
        assert_eq!(stat.confirmed, 0);
        assert_eq!(stat.recovered, 3);
        assert!(stat.lastupdatedtime.is_empty());
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let json = r#"{
            "statewise": [
                {"statecode": "DL", "active": "n/a", "confirmed": "1", "recovered": "1", "deaths": "1"}
            ]
        }"#;

        assert!(serde_json::from_str::<FeedDocument>(json).is_err());
    }

    #[test]
    fn total_active_is_derived_and_never_underflows() {
        let entry = TimeSeriesEntry {
            dateymd: "2020-03-01".to_string(),
            dailyconfirmed: 0,
            dailyrecovered: 0,
            dailydeceased: 0,
            totalconfirmed: 100,
            totalrecovered: 70,
            totaldeceased: 10,
        };
        assert_eq!(entry.total_active(), 20);

        let inconsistent = TimeSeriesEntry {
            totalrecovered: 200,
            ..entry
        };
        assert_eq!(inconsistent.total_active(), 0);
    }
}
