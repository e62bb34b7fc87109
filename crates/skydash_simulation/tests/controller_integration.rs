//! Controller integration tests
//!
//! Полный App (SimulationPlugin) в headless режиме, один `app.update()` =
//! ровно один fixed tick 0.02s.
//!
//! Проверяем:
//! - coyote jump после схода с уступа
//! - buffered jump в tick приземления
//! - dash: 5 ticks под lock'ом
//! - double activation → dash вместо атаки
//! - cancel, индикаторы целей

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skydash_simulation::combat::enemy_bundle;
use skydash_simulation::physics::ground_slab_bundle;
use skydash_simulation::*;

/// Копит события типа `E` за весь прогон
#[derive(Resource)]
struct Recorded<E: Event>(Vec<E>);

impl<E: Event> Default for Recorded<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record<E: Event + Clone>(mut reader: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(reader.read().cloned());
}

/// Helper: App с контроллером и записью событий
fn create_controller_app(tuning: ControllerTuning) -> App {
    let mut app = create_headless_app(42);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP))
        .insert_resource(tuning)
        .add_plugins(SimulationPlugin)
        .init_resource::<Recorded<ManeuverFinished>>()
        .init_resource::<Recorded<AttackCompleted>>()
        .init_resource::<Recorded<DoubleActivation>>()
        .add_systems(
            FixedUpdate,
            (
                record::<ManeuverFinished>,
                record::<AttackCompleted>,
                record::<DoubleActivation>,
            )
                .in_set(SimulationSet::Cleanup),
        );

    // Первый update идёт с нулевой delta — fixed tick не срабатывает
    app.update();
    app
}

/// Пол 20x20, верхняя грань на y = 0
fn spawn_floor(app: &mut App) {
    app.world_mut().spawn(ground_slab_bundle(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(10.0, 0.5, 10.0),
    ));
}

fn spawn_test_player(app: &mut App, position: Vec3, weapon: WeaponConfig) -> Entity {
    let tuning = app.world().resource::<ControllerTuning>().clone();
    app.world_mut()
        .spawn(player_bundle(position, &tuning, &weapon))
        .id()
}

fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
}

fn kinematics(app: &App, entity: Entity) -> CharacterKinematics {
    app.world()
        .get::<CharacterKinematics>(entity)
        .cloned()
        .unwrap_or_default()
}

fn lock(app: &App, entity: Entity) -> MovementLock {
    app.world()
        .get::<MovementLock>(entity)
        .copied()
        .unwrap_or_default()
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .map(|transform| transform.translation)
        .unwrap_or(Vec3::NAN)
}

#[test]
fn test_coyote_jump_after_walking_off_ledge() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::new(9.0, 0.0, 0.0), WeaponConfig::default());

    // Вправо (+X) к краю пола
    send(
        &mut app,
        MoveStick {
            entity: player,
            axis: Vec2::new(1.0, 0.0),
        },
    );

    let mut left_ground = false;
    for _ in 0..60 {
        app.update();
        let contact = app.world().get::<GroundContact>(player).copied().unwrap_or_default();
        if !contact.grounded {
            left_ground = true;
            break;
        }
    }
    assert!(left_ground, "player must walk off the ledge");
    assert_eq!(kinematics(&app, player).jump_count, 0);

    // Следующий tick — всё ещё внутри coyote window
    send(&mut app, ButtonEvent::pressed(player, InputButton::Jump));
    app.update();

    let state = kinematics(&app, player);
    assert_eq!(state.jump_count, 1, "coyote jump honoured");
    assert_eq!(state.jump_buffer_timer, 0.0);
    assert!(!state.started_falling, "no fall before the ascent");

    let before = position(&app, player).y;
    app.update();
    assert!(position(&app, player).y > before, "ascending after the jump");

    let animation = app.world().get::<AnimationState>(player).copied().unwrap_or_default();
    assert!(animation.jumping);
    assert!(!animation.grounded);
}

#[test]
fn test_buffered_jump_fires_on_landing_tick() {
    // Один прыжок: падение съедает его, air jump'а нет, press ждёт в buffer
    let tuning = ControllerTuning {
        max_jumps: 1,
        ..Default::default()
    };
    let mut app = create_controller_app(tuning);
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::new(0.0, 1.0, 0.0), WeaponConfig::default());

    let mut pressed_at = None;
    let mut jumped_at = None;

    for tick in 0..60 {
        if pressed_at.is_none() && position(&app, player).y < 0.6 {
            send(&mut app, ButtonEvent::pressed(player, InputButton::Jump));
            pressed_at = Some(tick);
        }

        app.update();

        let state = kinematics(&app, player);
        if state.vertical_velocity > 0.0 {
            assert!(state.grounded_last_tick, "jump must come from the ground, not mid-air");
            assert_eq!(state.jump_count, 1);
            jumped_at = Some(tick);
            break;
        }
    }

    let (Some(pressed_at), Some(jumped_at)) = (pressed_at, jumped_at) else {
        panic!("buffered jump never fired (pressed: {pressed_at:?})");
    };
    assert!(jumped_at > pressed_at, "press happened past the coyote window");
    assert!(jumped_at - pressed_at <= 7, "buffer window is 0.15s");
}

#[test]
fn test_double_jump_from_button_events() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    app.update();

    send(&mut app, ButtonEvent::pressed(player, InputButton::Jump));
    app.update();
    assert_eq!(kinematics(&app, player).jump_count, 1);

    // Release на подъёме (jump cut), второй press через 0.5s — вне double click окна
    for _ in 1..20 {
        app.update();
    }
    send(&mut app, ButtonEvent::released(player, InputButton::Jump));
    for _ in 20..25 {
        app.update();
    }
    send(&mut app, ButtonEvent::pressed(player, InputButton::Jump));
    app.update();

    let state = kinematics(&app, player);
    assert_eq!(state.jump_count, 2, "air jump honoured");
    assert_eq!(state.vertical_velocity, ControllerTuning::default().jump_impulse);
    assert!(app.world().resource::<Recorded<DoubleActivation>>().0.is_empty());
    assert!(!lock(&app, player).is_locked(), "no dash from the second press");
}

#[test]
fn test_dash_holds_lock_for_exactly_five_ticks() {
    // 5 / (10 × 5) = 0.1s
    let tuning = ControllerTuning {
        dash_power: 10.0,
        dash_distance: 5.0,
        move_speed: 5.0,
        ..Default::default()
    };
    let mut app = create_controller_app(tuning);
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());

    // Встаём на пол
    app.update();
    assert!(kinematics(&app, player).can_dash);

    send(&mut app, DashIntent { entity: player });
    for tick in 1..=4 {
        app.update();
        assert_eq!(lock(&app, player).owner(), Some(LockOwner::Dash), "tick {tick}");
    }

    app.update();
    assert!(!lock(&app, player).is_locked(), "released right after the 5th tick");
    assert!((position(&app, player).z - 5.0).abs() < 1e-3);

    let finished = &app.world().resource::<Recorded<ManeuverFinished>>().0;
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].kind, ManeuverKind::Dash);
    assert!(!finished[0].cancelled);
}

#[test]
fn test_dash_blocks_jump_until_finished() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    app.update();

    send(&mut app, DashIntent { entity: player });
    app.update();
    send(&mut app, ButtonEvent::pressed(player, InputButton::Jump));
    app.update();

    assert_eq!(kinematics(&app, player).jump_count, 0, "locked: no jump");
    assert!(position(&app, player).y.abs() < 1e-4);
}

#[test]
fn test_attack_double_press_dashes_instead_of_second_attack() {
    let tuning = ControllerTuning {
        double_click_time: 0.5,
        ..Default::default()
    };
    let mut app = create_controller_app(tuning);
    app.insert_resource(InputBindings {
        jump_double: DoubleActivationAction::Dash,
        attack_double: DoubleActivationAction::Dash,
    });
    spawn_floor(&mut app);

    // Bash 20 m/s, цель в 2м → lunge 0.1s
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    app.world_mut().spawn(enemy_bundle(Vec3::new(0.0, 0.0, 2.0), 0.5));
    app.update();

    // t = 0: первое нажатие — обычная атака
    send(&mut app, ButtonEvent::pressed(player, InputButton::Attack));
    app.update();
    assert_eq!(lock(&app, player).owner(), Some(LockOwner::Attack));

    send(&mut app, ButtonEvent::released(player, InputButton::Attack));
    for _ in 1..15 {
        app.update();
    }
    assert!(!lock(&app, player).is_locked(), "lunge finished");

    // t = 0.3: второе нажатие внутри окна 0.5
    send(&mut app, ButtonEvent::pressed(player, InputButton::Attack));
    app.update();

    let doubles = &app.world().resource::<Recorded<DoubleActivation>>().0;
    assert_eq!(doubles.len(), 1);
    assert_eq!(doubles[0].button, InputButton::Attack);

    assert_eq!(
        lock(&app, player).owner(),
        Some(LockOwner::Dash),
        "double activation routed to dash"
    );

    let completed = &app.world().resource::<Recorded<AttackCompleted>>().0;
    assert_eq!(completed.len(), 1, "second press never reached the attack path");
    assert_eq!(completed[0].attacker, player);
    assert_eq!(completed[0].damage, 10);
}

#[test]
fn test_attack_without_targets_is_dropped() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    // Враг вне attack_range
    app.world_mut().spawn(enemy_bundle(Vec3::new(0.0, 0.0, 30.0), 0.5));
    app.update();

    send(&mut app, ButtonEvent::pressed(player, InputButton::Attack));
    app.update();

    assert!(!lock(&app, player).is_locked());
    let active = app.world().get::<ActiveManeuver>(player).copied().unwrap_or_default();
    assert!(!active.is_attacking());
}

#[test]
fn test_cancel_releases_lock_in_same_tick() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    app.update();

    send(&mut app, DashIntent { entity: player });
    app.update();
    assert!(lock(&app, player).is_locked());

    send(&mut app, CancelManeuver { entity: player });
    app.update();

    assert!(!lock(&app, player).is_locked());
    let finished = &app.world().resource::<Recorded<ManeuverFinished>>().0;
    assert_eq!(finished.len(), 1);
    assert!(finished[0].cancelled);
}

#[test]
fn test_indicators_track_nearest_targets() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);

    // Без игрока пул пуст
    app.world_mut().spawn(enemy_bundle(Vec3::new(0.0, 0.0, 2.0), 0.5));
    app.update();
    assert!(app.world().resource::<TargetIndicatorPool>().markers().is_empty());

    let player = spawn_test_player(&mut app, Vec3::ZERO, WeaponConfig::default());
    for z in [4.0, 6.0, 8.0, 3.0] {
        app.world_mut().spawn(enemy_bundle(Vec3::new(1.0, 0.0, z), 0.5));
    }
    app.update();

    assert_eq!(app.world().resource::<BoundPlayer>().get(), Some(player));
    // target_count = 3
    assert_eq!(app.world().resource::<TargetIndicatorPool>().markers().len(), 3);

    // Игрок пропал → маркеры снимаются
    app.world_mut().despawn(player);
    app.update();
    assert!(!app.world().resource::<BoundPlayer>().is_bound());
    assert!(app.world().resource::<TargetIndicatorPool>().markers().is_empty());
}

#[test]
fn test_zero_target_count_shows_no_indicators() {
    let mut app = create_controller_app(ControllerTuning::default());
    spawn_floor(&mut app);
    spawn_test_player(
        &mut app,
        Vec3::ZERO,
        WeaponConfig {
            target_count: 0,
            ..Default::default()
        },
    );
    app.world_mut().spawn(enemy_bundle(Vec3::new(0.0, 0.0, 2.0), 0.5));

    app.update();

    assert!(app.world().resource::<TargetIndicatorPool>().markers().is_empty());
}

#[test]
fn test_bundled_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/skydash.ron");

    let config = load_config(&path).expect("bundled config must be valid");

    assert_eq!(config.tuning, ControllerTuning::default());
    assert_eq!(config.weapon, WeaponConfig::default());
}
