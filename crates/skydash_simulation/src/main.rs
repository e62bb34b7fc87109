//! Headless симуляция SKYDASH
//!
//! Поднимает контроллер без рендера: пол с уступом, игрок, seeded кольцо
//! врагов и скриптованный input (сход с уступа, прыжок, dash, атака).
//!
//! Usage: `skydash_simulation [config.ron]`

use std::path::Path;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;
use skydash_simulation::combat::enemy_bundle;
use skydash_simulation::physics::ground_slab_bundle;
use skydash_simulation::*;

const TICK_COUNT: u32 = 300;
const ENEMY_COUNT: usize = 6;

/// Один шаг сценария: на каком tick что прислать
enum ScriptStep {
    Stick(Vec2),
    Press(InputButton),
    Release(InputButton),
}

fn script() -> Vec<(u32, ScriptStep)> {
    use InputButton::{Attack, Jump};
    use ScriptStep::*;

    vec![
        // Идём вперёд к краю верхней платформы
        (5, Stick(Vec2::new(0.0, 1.0))),
        // Прыжок сразу после схода с уступа (coyote window)
        (30, Press(Jump)),
        (38, Release(Jump)),
        (60, Stick(Vec2::ZERO)),
        // Double tap прыжка → dash
        (120, Press(Jump)),
        (122, Release(Jump)),
        (128, Press(Jump)),
        (130, Release(Jump)),
        // Атака ближайшего врага
        (200, Press(Attack)),
        (202, Release(Attack)),
    ]
}

fn main() {
    let seed = 42;
    println!("Starting SKYDASH headless simulation (seed: {})", seed);

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Config error: {}", error);
                std::process::exit(1);
            }
        },
        None => SkydashConfig::default(),
    };

    let mut app = create_headless_app(seed);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP))
        .insert_resource(config.tuning.clone())
        .add_plugins(SimulationPlugin);

    let player = spawn_world(&mut app, &config);
    let script = script();

    for tick in 0..TICK_COUNT {
        for (_, step) in script.iter().filter(|(at, _)| *at == tick) {
            let world = app.world_mut();
            match step {
                ScriptStep::Stick(axis) => {
                    world.send_event(MoveStick {
                        entity: player,
                        axis: *axis,
                    });
                }
                ScriptStep::Press(button) => {
                    world.send_event(ButtonEvent::pressed(player, *button));
                }
                ScriptStep::Release(button) => {
                    world.send_event(ButtonEvent::released(player, *button));
                }
            }
        }

        app.update();

        if tick % 25 == 0 {
            print_summary(&mut app, player, tick);
        }
    }

    println!("Simulation complete!");
}

/// Верхняя платформа (top y = 0), нижний пол (top y = -3), игрок, враги
fn spawn_world(app: &mut App, config: &SkydashConfig) -> Entity {
    let world = app.world_mut();

    world.spawn(ground_slab_bundle(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(10.0, 0.5, 10.0),
    ));
    world.spawn(ground_slab_bundle(
        Vec3::new(0.0, -3.5, 0.0),
        Vec3::new(50.0, 0.5, 50.0),
    ));

    let player = world
        .spawn(player_bundle(
            Vec3::new(0.0, 0.0, 8.0),
            &config.tuning,
            &config.weapon,
        ))
        .id();

    // Кольцо врагов вокруг точки приземления (seeded jitter)
    let ring_center = Vec3::new(0.0, -3.0, 14.0);
    let positions: Vec<Vec3> = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        (0..ENEMY_COUNT)
            .map(|index| {
                let angle = index as f32 / ENEMY_COUNT as f32 * std::f32::consts::TAU
                    + rng.rng.gen_range(-0.2..0.2);
                let radius = rng.rng.gen_range(3.0..8.0);
                ring_center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
            })
            .collect()
    };

    for position in positions {
        world.spawn(enemy_bundle(position, 0.5));
    }

    log_info(&format!(
        "🌍 World ready: player {:?}, {} enemies",
        player, ENEMY_COUNT
    ));

    player
}

fn print_summary(app: &mut App, player: Entity, tick: u32) {
    let world = app.world_mut();
    let mut query = world.query::<(&Transform, &AnimationState, &MovementLock, &CharacterKinematics)>();

    let Ok((transform, animation, lock, kinematics)) = query.get(world, player) else {
        return;
    };

    println!(
        "Tick {}: pos {:.2?}, grounded {}, jumps {}, lock {:?}, speed {:.2}",
        tick,
        transform.translation,
        animation.grounded,
        kinematics.jump_count,
        lock.owner(),
        animation.speed
    );
}
