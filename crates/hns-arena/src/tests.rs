//! Unit tests for the obstacle model, ray casting, and arena generation.

#[cfg(test)]
mod raycast_tests {
    use hns_core::{ObstacleId, Vec2};

    use crate::raycast::{cast_ray, collides, point_in_obstacle};
    use crate::Obstacle;

    fn boxed(id: u32, min: (f32, f32), max: (f32, f32)) -> Obstacle {
        Obstacle {
            id: ObstacleId(id),
            min: Vec2::new(min.0, min.1),
            max: Vec2::new(max.0, max.1),
        }
    }

    #[test]
    fn ray_hits_facing_edge() {
        let obs = [boxed(0, (2.0, -1.0), (3.0, 1.0))];
        let hit = cast_ray(Vec2::ZERO, 0.0, 10.0, &obs);
        assert!(hit.hit);
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert_eq!(hit.obstacle, Some(ObstacleId(0)));
        let p = hit.point.unwrap();
        assert!((p.x - 2.0).abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn unobstructed_ray_reports_max_range() {
        let obs = [boxed(0, (2.0, 2.0), (3.0, 3.0))];
        let hit = cast_ray(Vec2::ZERO, 0.0, 7.5, &obs);
        assert!(!hit.hit);
        assert_eq!(hit.distance, 7.5);
        assert_eq!(hit.obstacle, None);
        assert_eq!(hit.point, None);
    }

    #[test]
    fn hit_beyond_range_is_a_miss() {
        let obs = [boxed(0, (20.0, -1.0), (21.0, 1.0))];
        let hit = cast_ray(Vec2::ZERO, 0.0, 10.0, &obs);
        assert!(!hit.hit);
        assert_eq!(hit.distance, 10.0);
    }

    #[test]
    fn nearest_of_two_obstacles_wins() {
        let obs = [
            boxed(0, (5.0, -1.0), (6.0, 1.0)),
            boxed(1, (2.0, -1.0), (3.0, 1.0)),
        ];
        let hit = cast_ray(Vec2::ZERO, 0.0, 10.0, &obs);
        assert_eq!(hit.obstacle, Some(ObstacleId(1)));
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn grazing_ray_above_box_misses() {
        // Ray travels along y = 1.5; box top is y = 1.0.
        let obs = [boxed(0, (2.0, -1.0), (3.0, 1.0))];
        let hit = cast_ray(Vec2::new(0.0, 1.5), 0.0, 10.0, &obs);
        assert!(!hit.hit);
    }

    #[test]
    fn diagonal_ray_hits() {
        let obs = [boxed(0, (2.0, 2.0), (4.0, 4.0))];
        let heading = std::f32::consts::FRAC_PI_4;
        let hit = cast_ray(Vec2::ZERO, heading, 10.0, &obs);
        assert!(hit.hit);
        // Entry point is the (2, 2) corner, 2√2 away.
        assert!((hit.distance - 2.0 * 2f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn point_containment_is_closed() {
        let obs = boxed(0, (1.0, 1.0), (2.0, 2.0));
        assert!(point_in_obstacle(Vec2::new(1.0, 1.0), &obs)); // corner inclusive
        assert!(point_in_obstacle(Vec2::new(1.5, 2.0), &obs)); // edge inclusive
        assert!(!point_in_obstacle(Vec2::new(0.999, 1.5), &obs));
    }

    #[test]
    fn collides_over_collection() {
        let obs = [
            boxed(0, (1.0, 1.0), (2.0, 2.0)),
            boxed(1, (5.0, 5.0), (6.0, 6.0)),
        ];
        assert!(collides(Vec2::new(5.5, 5.5), &obs));
        assert!(!collides(Vec2::new(3.0, 3.0), &obs));
    }
}

#[cfg(test)]
mod arena_tests {
    use hns_core::{EpisodeRng, ObstacleId, Pose, Vec2};

    use crate::{Arena, ObstacleSpec};

    #[test]
    fn generation_is_deterministic() {
        let mut r1 = EpisodeRng::from_seed_str("gen-seed");
        let mut r2 = EpisodeRng::from_seed_str("gen-seed");
        let a = Arena::generate(25.0, 25.0, 0.5, &mut r1);
        let b = Arena::generate(25.0, 25.0, 0.5, &mut r2);
        assert_eq!(a.static_obstacles(), b.static_obstacles());
    }

    #[test]
    fn generation_count_and_bounds() {
        let mut rng = EpisodeRng::from_seed_str("bounds");
        let arena = Arena::generate(25.0, 25.0, 0.73, &mut rng);
        assert_eq!(arena.static_obstacles().len(), 7); // floor(0.73 * 10)
        for obs in arena.static_obstacles() {
            assert!(obs.min.x >= 0.0 && obs.min.y >= 0.0);
            assert!(obs.max.x <= 25.0 && obs.max.y <= 25.0);
            assert!((1.0..4.0).contains(&obs.width()));
            assert!((1.0..4.0).contains(&obs.height()));
        }
    }

    #[test]
    fn layout_overrides_generation() {
        let layout = [
            ObstacleSpec::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)),
            ObstacleSpec::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 5.0)),
        ];
        let arena = Arena::from_layout(10.0, 10.0, &layout);
        assert_eq!(arena.static_obstacles().len(), 2);
        assert_eq!(arena.static_obstacles()[0].id, ObstacleId(0));
        assert_eq!(arena.static_obstacles()[1].id, ObstacleId(1));
    }

    #[test]
    fn placed_ids_continue_after_static() {
        let layout = [ObstacleSpec::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))];
        let mut arena = Arena::from_layout(10.0, 10.0, &layout);
        let placed = arena.place(ObstacleSpec::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)));
        assert_eq!(placed.id, ObstacleId(1));
        assert_eq!(arena.placed_obstacles().len(), 1);
        assert_eq!(arena.occluder_count(), 2);
    }

    #[test]
    fn placement_blocks_immediately() {
        let mut arena = Arena::empty(10.0, 10.0);
        let p = Vec2::new(5.5, 5.5);
        assert!(!arena.blocked(p));
        arena.place(ObstacleSpec::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)));
        assert!(arena.blocked(p));
    }

    #[test]
    fn footprint_crosses_line_of_travel() {
        let arena = Arena::empty(10.0, 10.0);
        // Facing +x: the wall's long side must run along y.
        let pose = Pose::new(Vec2::new(5.0, 5.0), 0.0);
        let spec = arena.placement_footprint(&pose);
        let w = spec.max.x - spec.min.x;
        let h = spec.max.y - spec.min.y;
        assert!((w - 0.5).abs() < 1e-5, "width {w}");
        assert!((h - 1.5).abs() < 1e-5, "height {h}");
        // Centered one unit ahead.
        assert!((spec.min.x - 5.75).abs() < 1e-5);
    }

    #[test]
    fn footprint_vertical_heading_lays_wall_across_y_travel() {
        let arena = Arena::empty(10.0, 10.0);
        let pose = Pose::new(Vec2::new(5.0, 5.0), std::f32::consts::FRAC_PI_2);
        let spec = arena.placement_footprint(&pose);
        assert!(((spec.max.x - spec.min.x) - 1.5).abs() < 1e-5);
        assert!(((spec.max.y - spec.min.y) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn footprint_clamped_at_arena_edge() {
        let arena = Arena::empty(10.0, 10.0);
        let pose = Pose::new(Vec2::new(9.9, 5.0), 0.0);
        let spec = arena.placement_footprint(&pose);
        assert!(spec.max.x <= 10.0);
        assert!(spec.min.x <= spec.max.x);
    }

    #[test]
    fn cast_sees_both_collections() {
        let layout = [ObstacleSpec::new(Vec2::new(6.0, -1.0), Vec2::new(7.0, 1.0))];
        let mut arena = Arena::from_layout(10.0, 10.0, &layout);
        arena.place(ObstacleSpec::new(Vec2::new(2.0, -1.0), Vec2::new(3.0, 1.0)));
        let hit = arena.cast(Vec2::ZERO, 0.0, 10.0);
        // The placed wall is nearer than the static one.
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert_eq!(hit.obstacle, Some(ObstacleId(1)));
    }
}
