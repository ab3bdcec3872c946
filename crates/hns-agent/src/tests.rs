//! Unit tests for agent types.

#[cfg(test)]
mod action_tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Action;

    #[test]
    fn index_roundtrip() {
        for (i, &action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), action);
        }
    }

    #[test]
    fn out_of_range_index_is_idle() {
        assert_eq!(Action::from_index(99), Action::Idle);
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Action::default(), Action::Idle);
    }

    #[test]
    fn movement_bearings() {
        assert_eq!(Action::Forward.movement_bearing(), Some(0.0));
        assert_eq!(Action::Backward.movement_bearing(), Some(PI));
        assert_eq!(Action::StrafeLeft.movement_bearing(), Some(FRAC_PI_2));
        assert_eq!(Action::StrafeRight.movement_bearing(), Some(-FRAC_PI_2));
        assert_eq!(Action::Idle.movement_bearing(), None);
        assert_eq!(Action::TurnLeft.movement_bearing(), None);
        assert_eq!(Action::PlaceObstacle.movement_bearing(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Action::StrafeLeft.to_string(), "strafe-left");
        assert_eq!(Action::PlaceObstacle.to_string(), "place-obstacle");
    }
}

#[cfg(test)]
mod state_tests {
    use hns_core::{AgentId, Pose, Vec2};

    use crate::{AgentState, AgentTraits, AgentType};

    fn traits() -> AgentTraits {
        AgentTraits { speed: 2.5, vision_range: 8.0, fov_degrees: 100.0, turn_rate: 4.7 }
    }

    #[test]
    fn fov_conversion() {
        let t = traits();
        assert!((t.fov_radians() - 100f32.to_radians()).abs() < 1e-6);
        assert!((t.half_fov() - 50f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn spawn_starts_alive_and_still() {
        let pose = Pose::new(Vec2::new(3.0, 4.0), 1.0);
        let a = AgentState::spawn(AgentId(0), AgentType::Hider, traits(), pose, 2);
        assert!(a.alive);
        assert_eq!(a.velocity, Vec2::ZERO);
        assert_eq!(a.placements_remaining, 2);
        assert_eq!(a.placement_cooldown, 0.0);
        assert_eq!(a.position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn placement_gating() {
        let pose = Pose::new(Vec2::ZERO, 0.0);
        let mut hider = AgentState::spawn(AgentId(0), AgentType::Hider, traits(), pose, 1);
        assert!(hider.can_place());

        hider.placement_cooldown = 0.5;
        assert!(!hider.can_place(), "cooldown pending");

        hider.placement_cooldown = 0.0;
        hider.placements_remaining = 0;
        assert!(!hider.can_place(), "budget exhausted");

        let seeker = AgentState::spawn(AgentId(1), AgentType::Seeker, traits(), pose, 5);
        assert!(!seeker.can_place(), "seekers never place");

        let mut dead = AgentState::spawn(AgentId(2), AgentType::Hider, traits(), pose, 1);
        dead.alive = false;
        assert!(!dead.can_place(), "corpses never place");
    }
}
