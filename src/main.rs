//! Headless demo: hide-and-seek on a camera-bounded field
//!
//! Spawns a field of obstacles, then runs a fixed-timestep loop where one
//! agent hides from another that drifts across the field. Positions are
//! logged once a second; set `RUST_LOG=info` to watch.

use movement_ai::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything wall avoidance can run into: arena walls plus the obstacles
struct WorldGeometry<'a> {
    walls: RectWalls,
    obstacles: SphereSetCaster<'a>,
}

impl RayCaster for WorldGeometry<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let wall = self.walls.cast_ray(origin, direction, max_distance);
        let sphere = self.obstacles.cast_ray(origin, direction, max_distance);

        match (wall, sphere) {
            (Some(a), Some(b)) => Some(if a.distance <= b.distance { a } else { b }),
            (hit, None) => hit,
            (None, hit) => hit,
        }
    }
}

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return;
    }

    log::info!("Starting hide-and-seek demo");

    // Top-down camera defines the playable rectangle
    let camera = Camera::look_at(Vec3::new(0.0, 14.0, 0.0), Vec3::ZERO, Vec3::Z);
    let bounds = ViewBounds::at_depth(&camera, 14.0);

    let mut hider = AgentBody::new(Vec3::new(-4.0, 0.0, -3.0), 0.5);
    let mut target = AgentBody::new(Vec3::new(4.0, 0.0, 3.0), 0.5);

    // Keep the spawn field clear around both starting positions
    let mut agents = AgentSet::new();
    let mut spawner = Spawner::new(
        config.spawner.clone(),
        SpawnArea::from_view(&bounds, GroundPlane::Xz),
    )
    .with_avoid_zones(vec![
        AvoidZone {
            position: hider.position,
            radius: 2.0,
        },
        AvoidZone {
            position: target.position,
            radius: 2.0,
        },
    ]);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    spawner.populate(&mut agents, &mut rng);
    log::info!("Placed {} obstacles", spawner.active().len());

    let mut registry = SpawnerRegistry::new();
    registry.insert(config.hide_unit.spawner_name.clone(), spawner);

    let steering = SteeringBasics::new(config.steering);
    let evade = Evade::new(config.evade, steering.clone());
    let hide = Hide::new(config.hide, steering.clone(), evade);
    let wall_avoidance = WallAvoidance::new(config.wall_avoidance, steering.clone());
    let mut hide_unit = HideUnit::new(
        config.hide_unit.clone(),
        steering.clone(),
        hide,
        wall_avoidance,
    );

    hide_unit.resolve(&registry, Some(&target));
    if hide_unit.state() != UnitState::Ready {
        eprintln!("Hide unit failed to resolve its collaborators");
        return;
    }

    let target_unit = GoDirectionUnit::new(Vec3::new(-1.0, 0.0, 0.4), steering);
    let boundary = WrapBoundary::from_view(&bounds, GroundPlane::Xz);
    let geometry = WorldGeometry {
        walls: RectWalls::from_view(&bounds, GroundPlane::Xz),
        obstacles: SphereSetCaster::new(&agents),
    };

    const DT: f32 = 0.02;
    for tick in 0u32..1500 {
        target_unit.fixed_tick(&mut target, DT);
        target.integrate(DT);
        boundary.apply(&mut target);

        hide_unit.fixed_tick(
            &mut hider,
            Some(&target),
            &registry,
            &agents,
            &geometry,
            DT,
        );
        hider.integrate(DT);
        boundary.apply(&mut hider);

        if tick % 50 == 0 {
            log::info!(
                "t={:>5.1}s hider=({:6.2}, {:6.2}) target=({:6.2}, {:6.2}) hiding_spot={:?}",
                tick as f32 * DT,
                hider.position.x,
                hider.position.z,
                target.position.x,
                target.position.z,
                hide_unit.last_hiding_spot().map(|s| (s.x, s.z)),
            );
        }
    }

    log::info!("Demo finished");
}
