//! Per-frame simulation tick
//!
//! One call advances the game by exactly one step. There is no delta time:
//! the host calls `tick` once per animation frame.

use super::collision::first_overlap;
use super::particles;
use super::state::{GameEvent, GameState, Obstacle, RunPhase};
use crate::consts::*;

/// Named input actions recorded between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start/restart button. Ignored while a run is in progress.
    Start,
    /// Space, click or tap: start, jump or restart depending on the phase
    Press,
}

/// Actions recorded since the last tick, applied in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// Apply one action against the run state machine
pub fn apply_action(state: &mut GameState, action: Action) {
    match (state.phase, action) {
        (RunPhase::Idle | RunPhase::Ended, _) => {
            state.reset_run();
            log::info!("Run started");
        }
        (RunPhase::Running, Action::Press) => jump(state),
        (RunPhase::Running, Action::Start) => {}
    }
}

/// Jump if grounded; a no-op while airborne
fn jump(state: &mut GameState) {
    if state.player.jump(JUMP_POWER) {
        let origin = state.player.base();
        particles::spawn_burst(&mut state.particles, origin, &mut state.rng);
        state.events.push(GameEvent::Jumped);
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &action in &input.actions {
        apply_action(state, action);
    }

    if state.is_running() {
        state.run_ticks += 1;
        state.player.integrate(GRAVITY, GROUND_Y);
        update_obstacles(state);
        particles::update(&mut state.particles);
        check_collisions(state);
    }

    // Scenery keeps moving on the idle and game-over screens too
    for cloud in &mut state.clouds {
        cloud.drift(&mut state.rng);
    }
}

/// Spawn on schedule, scroll, retire off-field obstacles and ramp speed
fn update_obstacles(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer as f64 >= state.spawn_interval {
        state.obstacles.push(Obstacle::at_right_edge());
        state.spawn_timer = 0;
        state.spawn_interval = (state.spawn_interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_FLOOR);
    }

    let speed = state.speed as f32;
    let before = state.obstacles.len();
    state.obstacles.retain_mut(|o| {
        o.pos.x -= speed;
        !o.is_off_field()
    });
    let cleared = (before - state.obstacles.len()) as u64;
    if cleared > 0 {
        state.score += cleared * OBSTACLE_SCORE;
        state.events.push(GameEvent::ScoreChanged(state.score));
    }

    state.speed += SPEED_INCREMENT;
}

fn check_collisions(state: &mut GameState) {
    let player = state.player.rect();
    if first_overlap(&player, state.obstacles.iter().map(Obstacle::rect)).is_some() {
        state.phase = RunPhase::Ended;
        state.events.push(GameEvent::RunEnded { score: state.score });
        log::info!("Run ended: score {} after {} ticks", state.score, state.run_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn press() -> TickInput {
        TickInput::new([Action::Press])
    }

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &press());
        state.drain_events();
        state
    }

    /// Run until the player has settled on the ground
    fn grounded_state(seed: u64) -> GameState {
        let mut state = running_state(seed);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.bottom(), GROUND_Y);
        state
    }

    #[test]
    fn test_idle_press_starts_run() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.run_ticks, 0);

        tick(&mut state, &press());
        assert_eq!(state.phase, RunPhase::Running);
        assert!(state.started);
        assert_eq!(state.run_ticks, 1);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_start_button_ignored_while_running() {
        let mut state = grounded_state(2);
        let ticks = state.run_ticks;
        tick(&mut state, &TickInput::new([Action::Start]));
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.run_ticks, ticks + 1);
        assert!(!state.events.contains(&GameEvent::RunStarted));
    }

    #[test]
    fn test_grounded_jump() {
        let mut state = grounded_state(3);
        apply_action(&mut state, Action::Press);
        assert_eq!(state.player.vel_y, JUMP_POWER);
        assert!(state.player.airborne);
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_airborne_jump_is_noop() {
        let mut state = grounded_state(4);
        tick(&mut state, &press());
        let vel = state.player.vel_y;
        let count = state.particles.len();

        apply_action(&mut state, Action::Press);
        assert_eq!(state.player.vel_y, vel);
        assert_eq!(state.particles.len(), count);
    }

    #[test]
    fn test_jump_lands_again() {
        let mut state = grounded_state(5);
        tick(&mut state, &press());
        assert!(state.player.airborne);
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.player.airborne);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.player.bottom(), GROUND_Y);
    }

    #[test]
    fn test_first_spawn_at_interval() {
        let mut state = running_state(6);
        // The starting tick already counted once
        for _ in 1..149 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.obstacles.is_empty());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP);
        assert_eq!(state.obstacles[0].pos.y, GROUND_Y - OBSTACLE_SIZE);
        // Spawned and scrolled in the same tick
        assert!(state.obstacles[0].pos.x < FIELD_WIDTH);
    }

    #[test]
    fn test_speed_ramps() {
        let mut state = running_state(7);
        assert!((state.speed - (BASE_SPEED + SPEED_INCREMENT)).abs() < 1e-6);
        for _ in 0..99 {
            tick(&mut state, &TickInput::default());
        }
        assert!((state.speed - (BASE_SPEED + 100.0 * SPEED_INCREMENT)).abs() < 1e-4);
    }

    #[test]
    fn test_offscreen_obstacles_score() {
        let mut state = grounded_state(8);
        state.obstacles.push(Obstacle {
            pos: Vec2::new(-29.0, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        });
        state.obstacles.push(Obstacle {
            pos: Vec2::new(400.0, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        });
        state.obstacles.push(Obstacle {
            pos: Vec2::new(-28.5, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        });
        state.drain_events();

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 2 * OBSTACLE_SCORE);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].pos.x > 390.0);
        assert_eq!(state.drain_events(), vec![GameEvent::ScoreChanged(20)]);
    }

    #[test]
    fn test_removal_preserves_order() {
        let mut state = grounded_state(9);
        for x in [-40.0, 300.0, -35.0, 500.0, 700.0] {
            state.obstacles.push(Obstacle {
                pos: Vec2::new(x, GROUND_Y - OBSTACLE_SIZE),
                size: OBSTACLE_SIZE,
            });
        }
        tick(&mut state, &TickInput::default());
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs.len(), 3);
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_collision_ends_run_and_freezes() {
        let mut state = grounded_state(10);
        state.score = 40;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(PLAYER_X + 20.0, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        });
        state.drain_events();

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Ended);
        assert_eq!(state.drain_events(), vec![GameEvent::RunEnded { score: 40 }]);

        let player_pos = state.player.pos;
        let obstacle_x = state.obstacles[0].pos.x;
        let speed = state.speed;
        let cloud_x = state.clouds[0].pos.x;
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.obstacles[0].pos.x, obstacle_x);
        assert_eq!(state.speed, speed);
        assert_eq!(state.score, 40);
        assert!(state.events.is_empty());
        // Clouds still drift
        assert_ne!(state.clouds[0].pos.x, cloud_x);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = grounded_state(11);
        state.obstacles.push(Obstacle {
            pos: Vec2::new(PLAYER_X, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        });
        state.score = 90;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Ended);

        tick(&mut state, &press());
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert_eq!(state.spawn_timer, 1);
        assert!((state.speed - (BASE_SPEED + SPEED_INCREMENT)).abs() < 1e-6);
        assert!(!state.player.airborne);
    }

    /// Drop a spike onto the player and tick once
    fn crash(state: &mut GameState) {
        state.obstacles.push(Obstacle {
            pos: state.player.pos,
            size: OBSTACLE_SIZE,
        });
        tick(state, &TickInput::default());
        assert_eq!(state.phase, RunPhase::Ended);
        state.drain_events();
    }

    #[test]
    fn test_start_button_restarts_ended_run() {
        let mut state = grounded_state(13);
        tick(&mut state, &press());
        assert!(!state.particles.is_empty());
        state.score = 50;
        state.spawn_interval = 120.0;
        crash(&mut state);

        tick(&mut state, &TickInput::new([Action::Start]));
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert_eq!(state.spawn_timer, 1);
        assert_eq!(state.run_ticks, 1);
        assert!(!state.player.airborne);
        assert_eq!(state.player.pos.x, PLAYER_X);
        assert_eq!(state.player.vel_y, GRAVITY);
        assert!((state.player.pos.y - (PLAYER_START_Y + GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_presses_in_one_frame_apply_in_order() {
        let mut state = grounded_state(14);
        crash(&mut state);

        // Restart, then jump off the fresh start position
        tick(&mut state, &TickInput::new([Action::Press, Action::Press]));
        assert_eq!(state.phase, RunPhase::Running);
        assert!(state.player.airborne);
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::RunStarted, GameEvent::Jumped]
        );
    }

    #[test]
    fn test_start_after_press_in_same_frame_is_ignored() {
        let mut state = grounded_state(16);
        crash(&mut state);

        tick(&mut state, &TickInput::new([Action::Press, Action::Start]));
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
        assert_eq!(state.run_ticks, 1);
    }

    #[test]
    fn test_speed_ramp_exact_over_long_run() {
        let mut state = running_state(15);
        for _ in 1..36_000 {
            state.obstacles.clear();
            tick(&mut state, &TickInput::default());
        }
        let expected = BASE_SPEED + 36_000.0 * SPEED_INCREMENT;
        assert!((state.speed - expected).abs() < 1e-9);
    }

    #[test]
    fn test_clouds_drift_while_idle() {
        let mut state = GameState::new(12);
        let before: Vec<f32> = state.clouds.iter().map(|c| c.pos.x).collect();
        tick(&mut state, &TickInput::default());
        for (cloud, x) in state.clouds.iter().zip(before) {
            assert!(cloud.pos.x < x || cloud.pos.x == FIELD_WIDTH);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        let schedule = [true, false, false, true, false, true, false, false];
        for i in 0..600 {
            let input = if schedule[i % schedule.len()] {
                press()
            } else {
                TickInput::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.particles.len(), b.particles.len());
        assert_eq!(a.player.pos, b.player.pos);
    }

    proptest! {
        #[test]
        fn prop_ground_clamp(seed in any::<u64>(), presses in prop::collection::vec(any::<bool>(), 1..400)) {
            let mut state = GameState::new(seed);
            for p in presses {
                tick(&mut state, &if p { press() } else { TickInput::default() });
                prop_assert!(state.player.bottom() <= GROUND_Y + 1e-3);
                if state.player.bottom() == GROUND_Y && state.is_running() {
                    prop_assert_eq!(state.player.vel_y, 0.0);
                    prop_assert!(!state.player.airborne);
                }
            }
        }

        #[test]
        fn prop_spawn_interval_floor(ticks in 1usize..20_000) {
            let mut state = running_state(0);
            // Keep the run alive: obstacles are cleared before they can reach the player
            for _ in 0..ticks {
                state.obstacles.clear();
                tick(&mut state, &TickInput::default());
                prop_assert!(state.spawn_interval >= SPAWN_INTERVAL_FLOOR);
            }
        }

        #[test]
        fn prop_score_monotonic(seed in any::<u64>(), presses in prop::collection::vec(any::<bool>(), 1..1500)) {
            let mut state = GameState::new(seed);
            let mut last = state.score;
            for p in presses {
                let was_running = state.is_running();
                tick(&mut state, &if p { press() } else { TickInput::default() });
                for event in state.drain_events() {
                    if event == GameEvent::RunStarted {
                        last = 0;
                    }
                }
                if was_running && state.score != last {
                    prop_assert_eq!((state.score - last) % OBSTACLE_SCORE, 0);
                }
                prop_assert!(state.score >= last);
                last = state.score;
            }
        }
    }
}
