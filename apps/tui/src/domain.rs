use serde::{Deserialize, Serialize};

/// The four tracked case categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Active,
    Confirmed,
    Recovered,
    Deaths,
}

impl Metric {
    pub const ALL: [Self; 4] = [Self::Active, Self::Confirmed, Self::Recovered, Self::Deaths];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Confirmed => "confirmed",
            Self::Recovered => "recovered",
            Self::Deaths => "deaths",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Confirmed),
            2 => Some(Self::Recovered),
            3 => Some(Self::Deaths),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "confirmed" => Some(Self::Confirmed),
            "recovered" => Some(Self::Recovered),
            "deaths" => Some(Self::Deaths),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Confirmed => "Confirmed",
            Self::Recovered => "Recovered",
            Self::Deaths => "Deaths",
        }
    }
}

/// A latitude/longitude pair, the unit the map widget is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_round_trips_through_parse() {
        for metric in Metric::ALL {
            assert_eq!(Metric::parse(metric.as_str()), Some(metric));
        }
        assert_eq!(Metric::parse("Recovered "), Some(Metric::Recovered));
        assert_eq!(Metric::parse("cases"), None);
    }

    #[test]
    fn metric_indices_match_card_order() {
        for (index, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(Metric::from_index(index), Some(*metric));
        }
        assert_eq!(Metric::from_index(4), None);
    }
}
