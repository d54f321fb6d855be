//! Calculator session state
//!
//! One explicit state object per client instead of module-level globals:
//! the current UI state plus the result on display.
//!
//! ```text
//! Idle ──begin_edit──▶ Editing ──submit──▶ Submitting ──ok──▶ Showing
//!   ▲                     ▲                     │               │
//!   │                     └──────── invalid ────┘               │
//!   └────────────────────────── reset ◀─────────────────────────┘
//! ```

use std::collections::VecDeque;

use serde::Serialize;
use thiserror::Error;

use crate::calculator::{self, CalculatorOptions, ValidationError};
use crate::models::{CalculatorResult, MealPlanRow, RawCalculatorInput};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum UiState {
    Idle,
    Editing,
    Submitting,
    Showing(Box<CalculatorResult>),
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Editing => "editing",
            UiState::Submitting => "submitting",
            UiState::Showing(_) => "showing",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("No calculation yet. Run calculate_macros first")]
    NoResult,
}

/// How many recent state names a session remembers
pub const RECENT_STATES: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    state: UiState,
    recent: VecDeque<&'static str>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            state: UiState::Idle,
            recent: VecDeque::from([UiState::Idle.name()]),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Names of the states most recently entered, oldest first
    pub fn recent_states(&self) -> Vec<&'static str> {
        self.recent.iter().copied().collect()
    }

    /// Result currently on display
    pub fn last_result(&self) -> Option<&CalculatorResult> {
        match &self.state {
            UiState::Showing(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    /// Open the form for editing; a shown result is discarded
    pub fn begin_edit(&mut self) -> Result<(), SessionError> {
        match self.state {
            UiState::Idle | UiState::Showing(_) => {
                self.transition(UiState::Editing);
                Ok(())
            }
            _ => Err(self.invalid("edit")),
        }
    }

    /// Validate and calculate
    ///
    /// On success the session shows the new result; on rejection it returns
    /// to editing so the form can be corrected.
    pub fn submit(
        &mut self,
        raw: &RawCalculatorInput,
        options: &CalculatorOptions,
    ) -> Result<&CalculatorResult, SessionError> {
        if matches!(self.state, UiState::Submitting) {
            return Err(self.invalid("submit"));
        }
        self.transition(UiState::Submitting);

        match calculator::calculate_raw(raw, options) {
            Ok(result) => {
                self.transition(UiState::Showing(Box::new(result)));
                self.last_result().ok_or(SessionError::NoResult)
            }
            Err(e) => {
                self.transition(UiState::Editing);
                Err(e.into())
            }
        }
    }

    /// Meal plan for the result on display
    pub fn meal_plan(&self, options: &CalculatorOptions) -> Result<Vec<MealPlanRow>, SessionError> {
        let result = self.last_result().ok_or(SessionError::NoResult)?;
        Ok(calculator::meal_plan_for(result, options))
    }

    pub fn reset(&mut self) {
        self.transition(UiState::Idle);
    }

    fn transition(&mut self, next: UiState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "session transition");
        if self.recent.len() == RECENT_STATES {
            self.recent.pop_front();
        }
        self.recent.push_back(next.name());
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(age: u32) -> RawCalculatorInput {
        RawCalculatorInput {
            weight: Some(70.0.into()),
            height: Some(175.0.into()),
            age: Some(age.into()),
            sex: Some("male".into()),
            activity: Some(1.55.into()),
            goal: Some("maintain".into()),
            weight_unit: None,
            height_unit: None,
        }
    }

    #[test]
    fn test_starts_idle() {
        let session = CalculatorSession::new();
        assert_eq!(session.state(), &UiState::Idle);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_successful_submit_shows_result() {
        let mut session = CalculatorSession::new();
        session.begin_edit().unwrap();
        let protein = session.submit(&form(30), &CalculatorOptions::default()).unwrap().macros.protein;
        assert_eq!(protein, 77);
        assert_eq!(session.state().name(), "showing");
        assert_eq!(session.meal_plan(&CalculatorOptions::default()).unwrap().len(), 5);
    }

    #[test]
    fn test_rejected_submit_returns_to_editing() {
        let mut session = CalculatorSession::new();
        let err = session.submit(&form(0), &CalculatorOptions::default()).unwrap_err();
        assert!(matches!(err, SessionError::Validation(ValidationError::NotPositive { .. })));
        assert_eq!(session.state(), &UiState::Editing);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_rejected_submit_drops_previous_result() {
        let mut session = CalculatorSession::new();
        session.submit(&form(30), &CalculatorOptions::default()).unwrap();
        assert!(session.submit(&form(0), &CalculatorOptions::default()).is_err());
        assert_eq!(
            session.meal_plan(&CalculatorOptions::default()),
            Err(SessionError::NoResult)
        );
    }

    #[test]
    fn test_illegal_transitions() {
        let mut session = CalculatorSession {
            state: UiState::Submitting,
            recent: VecDeque::new(),
        };
        assert_eq!(
            session.begin_edit(),
            Err(SessionError::InvalidTransition { action: "edit", state: "submitting" })
        );
        assert!(matches!(
            session.submit(&form(30), &CalculatorOptions::default()),
            Err(SessionError::InvalidTransition { action: "submit", .. })
        ));

        let mut session = CalculatorSession::new();
        session.begin_edit().unwrap();
        assert!(session.begin_edit().is_err());
    }

    #[test]
    fn test_recent_states_follow_the_form() {
        let mut session = CalculatorSession::new();
        session.begin_edit().unwrap();
        session.submit(&form(30), &CalculatorOptions::default()).unwrap();
        assert_eq!(session.recent_states(), vec!["idle", "editing", "submitting", "showing"]);

        for _ in 0..RECENT_STATES {
            session.reset();
        }
        assert_eq!(session.recent_states(), vec!["idle"; RECENT_STATES]);
    }

    #[test]
    fn test_reset() {
        let mut session = CalculatorSession::new();
        session.submit(&form(30), &CalculatorOptions::default()).unwrap();
        session.begin_edit().unwrap();
        assert!(session.last_result().is_none());
        session.reset();
        assert_eq!(session.state(), &UiState::Idle);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(UiState::Editing).unwrap();
        assert_eq!(json, serde_json::json!({"state": "editing"}));
    }
}
