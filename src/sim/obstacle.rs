//! Obstacles and the stream that owns them
//!
//! Two families of obstacle approach the player from the right: ground
//! hazards (cacti of varying height sitting on the ground line) and flyers
//! (birds at one of a few fixed altitudes). The `ObstacleStream` owns every
//! live obstacle, spawns new ones on a cadence derived from the game speed,
//! and reaps the ones that have scrolled off the left edge.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::*;
use crate::ground_top;
use crate::tuning::Tuning;

/// Obstacle variant. Determines the silhouette and which evasive pose (if
/// any) clears the obstacle; see `collision` for the rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Cactus on the ground line
    Hazard,
    /// Bird; `wing_up` is a cosmetic animation phase with no gameplay effect
    Flyer { wing_up: bool, flap_ticks: u32 },
}

/// A single obstacle scrolling leftward
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed before the game-speed bonus
    pub base_speed: f32,
}

impl Obstacle {
    /// A ground hazard of the given height, resting on the ground line at
    /// the spawn edge
    pub fn hazard(height: f32) -> Self {
        Self {
            kind: ObstacleKind::Hazard,
            pos: Vec2::new(OBSTACLE_SPAWN_X, ground_top(height)),
            size: Vec2::new(HAZARD_WIDTH, height),
            base_speed: OBSTACLE_BASE_SPEED,
        }
    }

    /// A flyer at the given altitude (top edge y), at the spawn edge
    pub fn flyer(altitude: f32) -> Self {
        Self {
            kind: ObstacleKind::Flyer {
                wing_up: false,
                flap_ticks: 0,
            },
            pos: Vec2::new(OBSTACLE_SPAWN_X, altitude),
            size: Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
            base_speed: OBSTACLE_BASE_SPEED,
        }
    }

    /// Advance one tick leftward. The step grows with the game speed, so x
    /// strictly decreases while the obstacle is alive.
    pub fn advance(&mut self, game_speed: u32) {
        self.pos.x -= self.base_speed + game_speed as f32 * OBSTACLE_SPEED_SCALE;

        if let ObstacleKind::Flyer {
            ref mut wing_up,
            ref mut flap_ticks,
        } = self.kind
        {
            *flap_ticks += 1;
            if flap_ticks.is_multiple_of(WING_FLAP_INTERVAL) {
                *wing_up = !*wing_up;
            }
        }
    }

    /// Flyers at or below the low-altitude threshold are jump-clearable;
    /// always false for ground hazards
    pub fn is_low_flying(&self) -> bool {
        matches!(self.kind, ObstacleKind::Flyer { .. }) && self.pos.y >= LOW_FLYER_ALTITUDE
    }

    /// Hitbox
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Spawn cadence in ticks for a given game speed. Faster games spawn more
/// often, floored so the field never saturates.
pub fn spawn_interval(game_speed: u32) -> u64 {
    (80_i64 - game_speed as i64 * 2).max(20) as u64
}

/// Owner of every live obstacle
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new obstacle if the cadence fires this tick. The hazard/flyer
    /// split is the tunable weight; flyer altitude and hazard height are
    /// drawn uniformly from their discrete sets.
    pub fn spawn(
        &mut self,
        frame_count: u64,
        game_speed: u32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        if !frame_count.is_multiple_of(spawn_interval(game_speed)) {
            return;
        }

        let obstacle = if rng.random_bool(tuning.hazard_weight) {
            let height = HAZARD_HEIGHTS[rng.random_range(0..HAZARD_HEIGHTS.len())];
            Obstacle::hazard(height)
        } else {
            let altitude = FLYER_ALTITUDES[rng.random_range(0..FLYER_ALTITUDES.len())];
            Obstacle::flyer(altitude)
        };
        log::debug!(
            "spawn {:?} at y={} (frame {}, speed {})",
            obstacle.kind,
            obstacle.pos.y,
            frame_count,
            game_speed
        );
        self.obstacles.push(obstacle);
    }

    /// Advance every live obstacle one tick
    pub fn advance(&mut self, game_speed: u32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(game_speed);
        }
    }

    /// Drop obstacles that have scrolled past the off-screen margin. Runs
    /// after position updates and before collision testing each tick.
    pub fn reap(&mut self) {
        self.obstacles.retain(|o| o.pos.x >= OBSTACLE_REAP_X);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Test helper and escape hatch for frontends that script sequences
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_hazard_rests_on_ground() {
        for &height in &HAZARD_HEIGHTS {
            let hazard = Obstacle::hazard(height);
            assert_eq!(hazard.bounds().bottom(), GROUND_LEVEL);
            assert_eq!(hazard.pos.x, OBSTACLE_SPAWN_X);
        }
    }

    #[test]
    fn test_low_flying_threshold() {
        assert!(Obstacle::flyer(320.0).is_low_flying());
        assert!(Obstacle::flyer(310.0).is_low_flying());
        assert!(!Obstacle::flyer(300.0).is_low_flying());
        assert!(!Obstacle::hazard(80.0).is_low_flying());
    }

    #[test]
    fn test_wing_flap_toggles_every_interval() {
        let mut flyer = Obstacle::flyer(280.0);
        let mut phases = Vec::new();
        for _ in 0..(WING_FLAP_INTERVAL * 2) {
            flyer.advance(0);
            if let ObstacleKind::Flyer { wing_up, .. } = flyer.kind {
                phases.push(wing_up);
            }
        }
        // Four ticks unchanged, toggled on the fifth, toggled back on the tenth
        assert_eq!(
            phases,
            vec![false, false, false, false, true, true, true, true, true, false]
        );
    }

    #[test]
    fn test_spawn_interval_floor() {
        assert_eq!(spawn_interval(0), 80);
        assert_eq!(spawn_interval(5), 70);
        assert_eq!(spawn_interval(12), 56);
        // The floor only binds for speeds beyond the normal clamp
        assert_eq!(spawn_interval(40), 20);
    }

    #[test]
    fn test_spawn_cadence() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut stream = ObstacleStream::new();

        // Interval at speed 5 is 70: frame 0 fires, 1..=69 do not, 70 fires
        stream.spawn(0, 5, &tuning, &mut rng);
        assert_eq!(stream.len(), 1);
        for frame in 1..70 {
            stream.spawn(frame, 5, &tuning, &mut rng);
        }
        assert_eq!(stream.len(), 1);
        stream.spawn(70, 5, &tuning, &mut rng);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_spawn_weight_extremes() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut stream = ObstacleStream::new();

        let all_hazards = Tuning { hazard_weight: 1.0 };
        for frame in 0..10 {
            stream.spawn(frame * 80, 0, &all_hazards, &mut rng);
        }
        assert!(stream
            .obstacles()
            .iter()
            .all(|o| o.kind == ObstacleKind::Hazard));

        stream.clear();
        let all_flyers = Tuning { hazard_weight: 0.0 };
        for frame in 0..10 {
            stream.spawn(frame * 80, 0, &all_flyers, &mut rng);
        }
        assert!(stream
            .obstacles()
            .iter()
            .all(|o| matches!(o.kind, ObstacleKind::Flyer { .. })));
    }

    #[test]
    fn test_reap_threshold() {
        let mut stream = ObstacleStream::new();
        let mut gone = Obstacle::hazard(40.0);
        gone.pos.x = OBSTACLE_REAP_X - 1.0;
        let mut kept = Obstacle::flyer(280.0);
        kept.pos.x = OBSTACLE_REAP_X + 1.0;
        stream.push(gone);
        stream.push(kept.clone());

        stream.reap();
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.obstacles()[0].pos, kept.pos);
    }

    proptest! {
        #[test]
        fn prop_advance_strictly_decreases_x(speed in 0u32..=12, steps in 1usize..64) {
            let mut obstacle = Obstacle::hazard(40.0);
            let mut last_x = obstacle.pos.x;
            for _ in 0..steps {
                obstacle.advance(speed);
                prop_assert!(obstacle.pos.x < last_x);
                last_x = obstacle.pos.x;
            }
        }

        #[test]
        fn prop_advance_step_monotone_in_speed(lo in 0u32..=12, hi in 0u32..=12) {
            prop_assume!(lo <= hi);
            let mut slow = Obstacle::flyer(300.0);
            let mut fast = Obstacle::flyer(300.0);
            slow.advance(lo);
            fast.advance(hi);
            // The faster game moves obstacles at least as far left
            prop_assert!(fast.pos.x <= slow.pos.x);
        }
    }
}
