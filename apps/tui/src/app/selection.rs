use thiserror::Error;

use crate::domain::{Coordinate, Metric};
use crate::feed::EnrichedState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown state code: {0}")]
    UnknownStateCode(String),
}

/// Which state and metric the dashboard is focused on.
///
/// Fields are private so the map center can never drift from the selected
/// state's coordinates. When the enriched list is empty there is no
/// selection and no center; nothing forces an index-0 access.
#[derive(Debug, Clone)]
pub struct Selection {
    selected: Option<String>,
    metric: Metric,
    map_center: Option<Coordinate>,
}

impl Selection {
    pub const fn empty() -> Self {
        Self {
            selected: None,
            metric: Metric::Active,
            map_center: None,
        }
    }

    /// Default selection for a fresh snapshot: the first enriched state in
    /// feed order, or the explicit empty state when the join produced
    /// nothing.
    pub fn from_states(states: &[EnrichedState]) -> Self {
        states.first().map_or_else(Self::empty, |first| Self {
            selected: Some(first.code.clone()),
            metric: Metric::Active,
            map_center: Some(first.coordinate()),
        })
    }

    /// Selects a state by code and recomputes the map center in the same
    /// step. Codes absent from the snapshot are rejected.
    pub fn select_state(
        &mut self,
        code: &str,
        states: &[EnrichedState],
    ) -> Result<(), SelectionError> {
        let state = states
            .iter()
            .find(|state| state.code == code)
            .ok_or_else(|| SelectionError::UnknownStateCode(code.to_string()))?;

        self.selected = Some(state.code.clone());
        self.map_center = Some(state.coordinate());
        Ok(())
    }

    pub fn select_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    pub fn selected_code(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub const fn metric(&self) -> Metric {
        self.metric
    }

    pub const fn map_center(&self) -> Option<Coordinate> {
        self.map_center
    }

    pub fn selected_state<'a>(&self, states: &'a [EnrichedState]) -> Option<&'a EnrichedState> {
        let code = self.selected.as_deref()?;
        states.iter().find(|state| state.code == code)
    }

    /// Position of the selected state within the snapshot.
    pub fn selected_index(&self, states: &[EnrichedState]) -> Option<usize> {
        let code = self.selected.as_deref()?;
        states.iter().position(|state| state.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<EnrichedState> {
        vec![
            EnrichedState {
                code: "TT".to_string(),
                name: "India".to_string(),
                lat: 24.070_541,
                lng: 83.003_948,
                active: 400,
                confirmed: 1000,
                recovered: 550,
                deaths: 50,
                last_updated: String::new(),
            },
            EnrichedState {
                code: "MH".to_string(),
                name: "Maharashtra".to_string(),
                lat: 19.7,
                lng: 75.7,
                active: 40,
                confirmed: 100,
                recovered: 55,
                deaths: 5,
                last_updated: String::new(),
            },
        ]
    }

    #[test]
    fn default_selection_is_first_state_with_its_center() {
        let states = states();
        let selection = Selection::from_states(&states);

        assert_eq!(selection.selected_code(), Some("TT"));
        assert_eq!(
            selection.map_center(),
            Some(Coordinate::new(24.070_541, 83.003_948))
        );
        assert_eq!(selection.metric(), Metric::Active);
    }

    #[test]
    fn empty_snapshot_yields_explicit_no_selection() {
        let selection = Selection::from_states(&[]);
        assert_eq!(selection.selected_code(), None);
        assert_eq!(selection.map_center(), None);
        assert!(selection.selected_state(&[]).is_none());
    }

    #[test]
    fn select_state_moves_map_center_atomically() {
        let states = states();
        let mut selection = Selection::from_states(&states);

        selection.select_state("MH", &states).unwrap();
        assert_eq!(selection.selected_code(), Some("MH"));
        assert_eq!(selection.map_center(), Some(Coordinate::new(19.7, 75.7)));
    }

    #[test]
    fn unknown_code_is_rejected_without_touching_state() {
        let states = states();
        let mut selection = Selection::from_states(&states);

        let err = selection.select_state("ZZ", &states).unwrap_err();
        assert_eq!(err, SelectionError::UnknownStateCode("ZZ".to_string()));
        assert_eq!(selection.selected_code(), Some("TT"));
        assert_eq!(
            selection.map_center(),
            Some(Coordinate::new(24.070_541, 83.003_948))
        );
    }

    #[test]
    fn select_metric_changes_only_the_metric() {
        let states = states();
        let mut selection = Selection::from_states(&states);
        let center_before = selection.map_center();

        selection.select_metric(Metric::Deaths);
        assert_eq!(selection.metric(), Metric::Deaths);
        assert_eq!(selection.selected_code(), Some("TT"));
        assert_eq!(selection.map_center(), center_before);
    }
}
