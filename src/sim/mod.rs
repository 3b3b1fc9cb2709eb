//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, integer tick counters only
//! - Seeded RNG only, owned by the session
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::obstacle_hits_player;
pub use obstacle::{spawn_interval, Obstacle, ObstacleKind, ObstacleStream};
pub use rect::Rect;
pub use state::{night_for_score, speed_for_score, GamePhase, GameState, Player, ScoreBoard};
pub use tick::{tick, TickInput};
