//! Data-driven game balance
//!
//! The knobs that are policy rather than physics live here, so a frontend
//! (or a JSON file pointed to by `DINO_TUNING`) can adjust them without
//! touching the simulation.

use serde::{Deserialize, Serialize};

/// Balance knobs applied at session construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Probability that a spawn produces a ground hazard; the remainder are
    /// flyers. Earlier revisions of the game shipped both an even split and
    /// a heavy flyer skew, so this is a weight, not a constant.
    pub hazard_weight: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self { hazard_weight: 0.5 }
    }
}

impl Tuning {
    /// Assert the invariants a well-formed tuning must satisfy. Violations
    /// are programming errors, not runtime conditions to recover from.
    pub fn validate(&self) {
        assert!(
            (0.0..=1.0).contains(&self.hazard_weight),
            "hazard_weight must be a probability, got {}",
            self.hazard_weight
        );
    }

    /// Load overrides from the file named by `DINO_TUNING`, falling back to
    /// defaults when the variable is unset or the file is unreadable.
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var("DINO_TUNING") else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) => {
                    tuning.validate();
                    log::info!("loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("ignoring unreadable tuning file {path}: {err}");
                Self::default()
            }
        }
    }
}
