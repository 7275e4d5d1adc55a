//! Headless collision demo
//!
//! Drops a handful of balls onto a static floor with a trigger zone in the
//! middle and logs every collision event. Bounces are applied here, from the
//! enter events, since the engine itself only detects contacts.
//!
//! Usage: `collision_demo [config.toml|config.ron]`

use std::cell::Cell;
use std::rc::Rc;

use frame_engine::foundation::logging;
use frame_engine::prelude::*;
use rand::Rng;

const FIXED_STEP: f32 = 1.0 / 60.0;
const SIMULATED_FRAMES: u64 = 600;
const BALL_COUNT: usize = 8;
const RESTITUTION: f32 = 0.6;

struct CollisionDemo {
    world: World,
    physics: CollisionManager,
    timer: Timer,
    visualizer: CollisionDebugVisualizer,
    floor: ColliderHandle,
    zone_visits: Rc<Cell<u32>>,
}

impl CollisionDemo {
    fn new(config: &ApplicationConfig) -> Result<Self, PhysicsError> {
        let mut world = World::new();
        let mut physics = CollisionManager::with_config(&config.physics);
        
        // balls pass through each other
        physics.set_layer_collision(CollisionLayers::DEBRIS, CollisionLayers::DEBRIS, false)?;
        
        let floor_entity = world.spawn("floor", Transform::from_position(Vec3::new(0.0, -0.5, 0.0)));
        let floor = physics.attach(
            &mut world,
            floor_entity,
            Collider::aabb(Vec3::new(20.0, 1.0, 20.0))
                .with_layer(CollisionLayers::ENVIRONMENT)
                .as_static(),
        )?;
        
        let zone_visits = Rc::new(Cell::new(0));
        let mut zone = Collider::aabb(Vec3::new(4.0, 2.0, 4.0))
            .with_layer(CollisionLayers::TRIGGER)
            .as_trigger()
            .as_static();
        let visits = Rc::clone(&zone_visits);
        zone.set_on_collision_enter(move |info| {
            visits.set(visits.get() + 1);
            log::info!("Zone entered by {:?}", info.other);
        });
        let zone_entity = world.spawn("zone", Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
        physics.attach(&mut world, zone_entity, zone)?;
        
        let mut rng = rand::thread_rng();
        for i in 0..BALL_COUNT {
            let position = Vec3::new(
                rng.gen_range(-6.0..6.0),
                rng.gen_range(3.0..10.0),
                rng.gen_range(-6.0..6.0),
            );
            let ball = world.spawn(format!("ball_{i}"), Transform::from_position(position));
            
            let mut body = RigidBody::new();
            body.set_mass(rng.gen_range(0.5..2.0));
            body.drag = 0.001;
            world.add_rigid_body(ball, body);
            
            physics.attach(
                &mut world,
                ball,
                Collider::sphere(rng.gen_range(0.25..0.75)).with_layer(CollisionLayers::DEBRIS),
            )?;
        }
        
        log::info!(
            "Scene ready: {} objects, {} colliders",
            world.object_count(),
            physics.collider_count()
        );
        
        Ok(Self {
            world,
            physics,
            timer: Timer::with_max_delta(config.time.max_delta_time),
            visualizer: CollisionDebugVisualizer::new(),
            floor,
            zone_visits,
        })
    }
    
    fn step(&mut self) {
        self.timer.advance(FIXED_STEP);
        let dt = self.timer.delta_time();
        
        self.world.integrate_rigid_bodies(self.physics.gravity(), dt);
        self.physics.update(&mut self.world);
        
        self.bounce_off_floor();
        
        self.physics.draw_debug(&self.world, &mut self.visualizer);
        self.visualizer.update(dt);
    }
    
    /// Reflect the vertical velocity of every ball that just landed
    fn bounce_off_floor(&mut self) {
        let landed: Vec<Entity> = self
            .physics
            .frame_events()
            .iter()
            .filter(|event| event.kind == CollisionEventKind::Enter)
            .filter_map(|event| event.pair.other(self.floor))
            .filter_map(|ball| self.world.collider(ball).and_then(Collider::owner))
            .collect();
        
        for ball in landed {
            if let Some(body) = self.world.rigid_body_mut(ball) {
                if body.velocity.y < 0.0 {
                    let impulse = -body.velocity.y * body.mass() * (1.0 + RESTITUTION);
                    body.add_impulse(Vec3::new(0.0, impulse, 0.0));
                    log::debug!("Ball {ball:?} bounced (impulse {impulse:.2})");
                }
            }
        }
    }
    
    fn run(&mut self) {
        let stopwatch = Stopwatch::start_new();
        let mut events = [0usize; 3];
        
        while self.timer.frame_count() < SIMULATED_FRAMES {
            self.step();
            
            for event in self.physics.frame_events() {
                let slot = match event.kind {
                    CollisionEventKind::Enter => 0,
                    CollisionEventKind::Stay => 1,
                    CollisionEventKind::Exit => 2,
                };
                events[slot] += 1;
            }
            
            if self.timer.frame_count() % 120 == 0 {
                log::info!(
                    "t={:.1}s: {} active pairs, {} debug shapes",
                    self.timer.total_time(),
                    self.physics.active_pairs().count(),
                    self.visualizer.shapes().len()
                );
            }
        }
        
        log::info!(
            "Simulated {} frames in {:.2} ms: {} enter, {} stay, {} exit, {} zone visits",
            self.timer.frame_count(),
            stopwatch.elapsed_millis(),
            events[0],
            events[1],
            events[2],
            self.zone_visits.get()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default_filter("info");
    
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            ApplicationConfig::load_from_file(&path)?
        }
        None => ApplicationConfig::default(),
    };
    
    let mut demo = CollisionDemo::new(&config)?;
    demo.run();
    demo.physics.shutdown();
    
    Ok(())
}
