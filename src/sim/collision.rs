//! Collision resolution between obstacles and the player
//!
//! The base test is a strict AABB overlap. Flyers add asymmetric evasion
//! rules on top: a low-flying bird is cleared by jumping over it, a high
//! bird by ducking under it - never the other way around. The altitude of
//! the bird decides which pose the player must be in.

use super::obstacle::{Obstacle, ObstacleKind};
use super::state::Player;
use crate::consts::DUCK_CLEARANCE;

/// Does this obstacle hit the player this tick?
pub fn obstacle_hits_player(obstacle: &Obstacle, player: &Player) -> bool {
    let player_box = player.bounds();
    let obstacle_box = obstacle.bounds();

    if matches!(obstacle.kind, ObstacleKind::Flyer { .. }) {
        if obstacle.is_low_flying() {
            // Jumping clears a low flyer once the player's feet are above it
            if player.jumping && player_box.bottom() <= obstacle_box.top() {
                return false;
            }
        } else if player.ducking && player_box.bottom() <= obstacle_box.top() + DUCK_CLEARANCE {
            // Ducking slips under a high flyer with some clearance slack
            return false;
        }
    }

    player_box.overlaps(&obstacle_box)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ground_top;
    use glam::Vec2;

    /// A player frozen in an arbitrary pose; collision is a pure function of
    /// the geometry, so unreachable poses are fair game here
    fn player_at(y: f32, jumping: bool, ducking: bool) -> Player {
        Player {
            pos: Vec2::new(PLAYER_X, y),
            velocity_y: 0.0,
            jumping,
            ducking,
        }
    }

    fn over_player(mut obstacle: Obstacle) -> Obstacle {
        obstacle.pos.x = PLAYER_X;
        obstacle
    }

    #[test]
    fn test_hazard_uses_plain_aabb() {
        let hazard = over_player(Obstacle::hazard(40.0));
        let grounded = player_at(ground_top(PLAYER_HEIGHT), false, false);
        assert!(obstacle_hits_player(&hazard, &grounded));

        // High enough in a jump, the boxes no longer intersect
        let airborne = player_at(ground_top(PLAYER_HEIGHT) - 120.0, true, false);
        assert!(!obstacle_hits_player(&hazard, &airborne));

        // Off to the side, no contact regardless of pose
        let mut far = Obstacle::hazard(40.0);
        far.pos.x = PLAYER_X + 300.0;
        assert!(!obstacle_hits_player(&far, &grounded));
    }

    #[test]
    fn test_low_flyer_cleared_only_by_jumping() {
        let flyer = over_player(Obstacle::flyer(320.0));
        assert!(flyer.is_low_flying());

        // Feet at the bird's top edge while jumping: evaded
        let jumper = player_at(320.0 - PLAYER_HEIGHT, true, false);
        assert!(!obstacle_hits_player(&flyer, &jumper));

        // Same geometry but not jumping: the evasion rule does not apply
        let faller = player_at(320.0 - PLAYER_HEIGHT + 10.0, false, false);
        assert!(obstacle_hits_player(&flyer, &faller));

        // Jumping but feet still below the bird's top: clipped
        let low_jumper = player_at(320.0 - PLAYER_HEIGHT + 10.0, true, false);
        assert!(obstacle_hits_player(&flyer, &low_jumper));

        // Ducking under a low flyer does not help
        let ducker = player_at(ground_top(PLAYER_HEIGHT_DUCK), false, true);
        assert!(obstacle_hits_player(&flyer, &ducker));
    }

    #[test]
    fn test_high_flyer_cleared_only_by_ducking() {
        let flyer = over_player(Obstacle::flyer(300.0));
        assert!(!flyer.is_low_flying());

        // Overlapping boxes, ducking, bottom within the clearance slack: evaded
        let ducker = player_at(300.0 - PLAYER_HEIGHT_DUCK + DUCK_CLEARANCE, false, true);
        assert!(ducker.bounds().overlaps(&flyer.bounds()));
        assert!(!obstacle_hits_player(&flyer, &ducker));

        // Same geometry standing: collision
        let stander = player_at(300.0 - PLAYER_HEIGHT_DUCK + DUCK_CLEARANCE, false, false);
        assert!(obstacle_hits_player(&flyer, &stander));

        // Ducking but too deep into the bird: the slack runs out
        let deep = player_at(300.0 - PLAYER_HEIGHT_DUCK + DUCK_CLEARANCE + 5.0, false, true);
        assert!(obstacle_hits_player(&flyer, &deep));

        // Jumping through a high flyer is not an evasion
        let jumper = player_at(300.0 - PLAYER_HEIGHT_DUCK + DUCK_CLEARANCE, true, false);
        assert!(obstacle_hits_player(&flyer, &jumper));
    }

    #[test]
    fn test_grounded_duck_passes_under_high_flyer() {
        // The reachable case: a ducking player on the ground never intersects
        // a flyer at the highest altitude band in the first place
        let flyer = over_player(Obstacle::flyer(280.0));
        let ducker = player_at(ground_top(PLAYER_HEIGHT_DUCK), false, true);
        assert!(!obstacle_hits_player(&flyer, &ducker));

        // Standing, the taller box clips the bird
        let stander = player_at(ground_top(PLAYER_HEIGHT), false, false);
        assert!(obstacle_hits_player(&flyer, &stander));
    }
}
