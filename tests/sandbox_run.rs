use lunge::app::SandboxApp;
use lunge::components::PlayerStateId;
use lunge::config::GameConfig;

fn bundled_config() -> GameConfig {
    GameConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sandbox.toml")).unwrap()
}

#[test]
fn bundled_script_visits_every_state() {
    let config = bundled_config();
    let ticks = config.simulation.ticks;
    let mut app = SandboxApp::new(config).unwrap();
    let summary = app.run(ticks);

    let visited = |state: PlayerStateId| summary.transitions.iter().any(|t| t.to == state);
    for state in PlayerStateId::ALL {
        if state != PlayerStateId::Idle {
            assert!(visited(state), "{state:?} never entered");
        }
    }

    assert_eq!(summary.max_combo_step, 3);
    let deferred: Vec<_> = summary.transitions.iter().filter(|t| t.deferred).collect();
    assert_eq!(deferred.len(), 2);
    assert!(deferred
        .iter()
        .all(|t| t.from == PlayerStateId::BasicAttack && t.to == PlayerStateId::BasicAttack));

    assert_eq!(summary.final_state, Some(PlayerStateId::Idle));
    assert_eq!(summary.final_position.y, 0.0);
    assert_eq!(summary.ticks_in_state.values().sum::<u64>(), ticks);
}

#[test]
fn player_never_passes_through_the_wall() {
    let config = bundled_config();
    let limit = config.level.walls[0].x - config.physics.body_half_width;
    let mut app = SandboxApp::new(config).unwrap();
    for _ in 0..420 {
        app.step();
        assert!(app.player_position().x <= limit + 1e-4);
    }
}

#[test]
fn no_input_keeps_the_player_idle() {
    let config = GameConfig::from_toml_str("[simulation]\nticks = 120\n").unwrap();
    let mut app = SandboxApp::new(config).unwrap();
    let summary = app.run(120);

    assert!(summary.transitions.is_empty());
    assert_eq!(summary.final_state, Some(PlayerStateId::Idle));
    assert_eq!(summary.final_position, glam::Vec2::ZERO);
    assert_eq!(app.clock().tick, 120);
}

#[test]
fn walking_off_a_ledge_falls() {
    let text = r#"
        [level]
        spawn = [0.0, 0.0]

        [[level.platforms]]
        left = -1.0
        right = 1.0
        y = 0.0

        [[input]]
        from = 0
        to = 60
        move_x = 1.0
    "#;
    let config = GameConfig::from_toml_str(text).unwrap();
    let mut app = SandboxApp::new(config).unwrap();
    let summary = app.run(60);

    let path: Vec<_> = summary.transitions.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        path,
        [
            (PlayerStateId::Idle, PlayerStateId::Move),
            (PlayerStateId::Move, PlayerStateId::Fall),
        ]
    );
    assert!(summary.final_position.y < 0.0);
}

#[test]
fn empty_attack_table_is_rejected_before_spawning() {
    let text = "[player.attack]\nattack_velocity = []\n";
    assert!(GameConfig::from_toml_str(text).is_err());

    let mut config = GameConfig::default();
    config.player.attack.attack_velocity.clear();
    assert!(SandboxApp::new(config).is_err());
}

#[test]
fn player_can_walk_away_from_a_wall() {
    let text = r#"
        [level]
        spawn = [5.0, 0.0]

        [[input]]
        from = 0
        to = 30
        move_x = 1.0

        [[input]]
        from = 30
        to = 150
        move_x = -1.0
    "#;
    let config = GameConfig::from_toml_str(text).unwrap();
    let mut app = SandboxApp::new(config).unwrap();

    app.run(30);
    let at_wall = app.player_position().x;
    assert!(at_wall > 5.3);
    assert_eq!(app.active_state(), Some(PlayerStateId::Idle));

    app.run(120);
    assert!(app.player_position().x < at_wall - 5.0);
    assert_eq!(app.active_state(), Some(PlayerStateId::Move));
}

#[test]
fn partial_trigger_table_is_rejected() {
    let text = "[animation.trigger_times]\nbasicAttack = 0.3\n";
    assert!(GameConfig::from_toml_str(text).is_err());

    let mut config = GameConfig::default();
    config.animation.trigger_times.remove("jumpAttackTrigger");
    assert!(SandboxApp::new(config).is_err());
}
