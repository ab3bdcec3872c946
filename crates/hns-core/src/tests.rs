//! Unit tests for hns-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ObstacleId(100) > ObstacleId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ObstacleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::geo::{clamp_to_arena, normalize_angle, relative_bearing};
    use crate::{Pose, Vec2};

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a.add(b), Vec2::new(4.0, 1.0));
        assert_eq!(a.sub(b), Vec2::new(-2.0, 3.0));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn from_heading_is_unit() {
        for h in [0.0, 0.7, FRAC_PI_2, PI, 5.1] {
            let v = Vec2::from_heading(h);
            assert!((v.length() - 1.0).abs() < 1e-6, "heading {h}");
        }
    }

    #[test]
    fn normalize_wraps_into_zero_tau() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn relative_bearing_signed() {
        // Target 90° left of a 0-heading observer.
        assert!((relative_bearing(FRAC_PI_2, 0.0) - FRAC_PI_2).abs() < 1e-6);
        // Target 90° right.
        assert!((relative_bearing(-FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < 1e-6);
        // Wrap-around: observer at 350°, target at 10° → +20°.
        let d = relative_bearing(10f32.to_radians(), 350f32.to_radians());
        assert!((d - 20f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn relative_bearing_half_open_at_pi() {
        // Directly behind resolves to +π, not −π.
        assert!((relative_bearing(PI, 0.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn heading_to_points_at_target() {
        let from = Vec2::new(1.0, 1.0);
        let to = Vec2::new(1.0, 3.0);
        assert!((from.heading_to(to) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn clamping() {
        let p = clamp_to_arena(Vec2::new(-2.0, 30.0), 25.0, 25.0);
        assert_eq!(p, Vec2::new(0.0, 25.0));
        let q = clamp_to_arena(Vec2::new(5.0, 5.0), 25.0, 25.0);
        assert_eq!(q, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn pose_normalizes_heading() {
        let p = Pose::new(Vec2::ZERO, -FRAC_PI_2);
        assert!((p.heading - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u32);
    }

    #[test]
    fn advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod rng {
    use crate::EpisodeRng;

    #[test]
    fn deterministic_same_seed_string() {
        let mut r1 = EpisodeRng::from_seed_str("episode-1234");
        let mut r2 = EpisodeRng::from_seed_str("episode-1234");
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seed_strings_diverge() {
        let mut r1 = EpisodeRng::from_seed_str("alpha");
        let mut r2 = EpisodeRng::from_seed_str("beta");
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b, "distinct seeds should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = EpisodeRng::from_seed_u64(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..25.0);
            assert!((0.0..25.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = EpisodeRng::from_seed_u64(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
