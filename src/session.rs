//! Game session controller
//!
//! Drives one playthrough: spawns a level's entities from the catalog,
//! runs the per-tick simulation (input, patrols, coin bobbing, physics,
//! contact outcomes), and keeps the session bookkeeping (score, lives,
//! current level). Level advances loop back through Loading inside the
//! same playing scene; running out of lives or levels is reported to the
//! scene machine as a transition request.
//!
//! Everything here is an expected gameplay event. There is no error path
//! in the simulation; the only "failure" (a missing level definition) is
//! the designed victory signal.

use macroquad::prelude::{vec2, Vec2, GOLD, GREEN, YELLOW};

use crate::audio::Cue;
use crate::catalog::{LevelCatalog, LevelDefinition};
use crate::game::components::tuning;
use crate::game::event::ContactKind;
use crate::game::physics::{self, EnemyContact};
use crate::game::{Entity, Events, World};
use crate::input::InputSnapshot;

/// Score/lives/level bookkeeping for one playthrough. Persists across
/// level transitions; reset to `{0, 3, 1}` only by an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub score: u32,
    pub lives: i32,
    pub current_level: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: tuning::STARTING_LIVES,
            current_level: 1,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scene transitions the session can request from the scene machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    GameOver,
    Victory,
}

/// Where the session is in its Loading -> Active cycle. Death and
/// completion are immediate transition requests, never a retained state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Active,
}

/// Actions that can be scheduled against the global clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledAction {
    /// Re-enter Loading for the (already incremented) current level
    ReloadLevel,
}

/// A delayed action, fired once its time arrives. Kept in schedule order
/// and drained deterministically once per tick; scene teardown discards
/// the whole queue.
#[derive(Debug, Clone, Copy)]
struct ScheduledEvent {
    at: f64,
    action: ScheduledAction,
}

/// One playing session, from the first Loading until death or victory.
pub struct Session {
    state: SessionState,
    world: World,
    events: Events,
    phase: Phase,
    player_start: Vec2,
    scheduled: Vec<ScheduledEvent>,
    /// Goal already touched this level; ignore further goal contacts
    /// while the reload is pending
    goal_pending: bool,
    cues: Vec<Cue>,
}

impl Session {
    /// Start a session with the given bookkeeping (fresh unless the
    /// caller carried one over). The first tick performs the load.
    pub fn new(state: SessionState) -> Self {
        Self {
            state,
            world: World::new(),
            events: Events::new(),
            phase: Phase::Loading,
            player_start: Vec2::ZERO,
            scheduled: Vec::new(),
            goal_pending: false,
            cues: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Give the bookkeeping back on teardown (for the final-score
    /// screens).
    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Cues emitted since the last drain, for the shell to forward to
    /// the audio output.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Camera target: horizontal center tracks the player, vertical
    /// stays fixed.
    pub fn camera_target(&self) -> Vec2 {
        let x = self
            .world
            .player()
            .and_then(|p| self.world.positions.get(p))
            .map(|pos| pos.0.x)
            .unwrap_or(tuning::SCREEN_W * 0.5);
        vec2(x, tuning::SCREEN_H * 0.5)
    }

    /// Whether the player currently shows the jump pose (for rendering).
    pub fn player_airborne_anim(&self) -> bool {
        self.world
            .player()
            .and_then(|p| self.world.players.get(p))
            .map(|p| p.airborne_anim)
            .unwrap_or(false)
    }

    /// Run one simulation tick. `now` is the global clock in seconds,
    /// `dt` the tick delta. Returns a scene transition request when the
    /// session ends this tick.
    pub fn tick(
        &mut self,
        catalog: &LevelCatalog,
        input: &InputSnapshot,
        now: f64,
        dt: f32,
    ) -> Option<SceneRequest> {
        // Fire due scheduled actions first, in schedule order.
        let mut due = Vec::new();
        self.scheduled.retain(|ev| {
            if ev.at <= now {
                due.push(ev.action);
                false
            } else {
                true
            }
        });
        for action in due {
            match action {
                ScheduledAction::ReloadLevel => self.phase = Phase::Loading,
            }
        }

        if self.phase == Phase::Loading {
            return self.load_current_level(catalog);
        }

        self.tick_active(input, now, dt)
    }

    /// Fetch and spawn the current level, or report victory when the
    /// catalog has no more content.
    fn load_current_level(&mut self, catalog: &LevelCatalog) -> Option<SceneRequest> {
        // Previous level's entities (and any pending despawns or
        // scheduled actions) are fully discarded before spawning.
        self.world.clear();
        self.events.clear_all();
        self.scheduled.clear();
        self.goal_pending = false;

        let def = match catalog.get(self.state.current_level) {
            Some(def) => def,
            // All levels complete: victory, with zero entities spawned.
            None => return Some(SceneRequest::Victory),
        };

        self.spawn_level(def);
        self.phase = Phase::Active;
        None
    }

    fn spawn_level(&mut self, def: &LevelDefinition) {
        self.player_start = def.player_start.to_vec2();
        self.world.spawn_player(self.player_start);

        for platform in &def.platforms {
            self.world.spawn_platform(platform.pos.to_vec2());
        }
        for enemy in &def.enemies {
            self.world
                .spawn_enemy(enemy.pos.to_vec2(), enemy.dir, enemy.speed);
        }
        for (index, coin) in def.coins.iter().enumerate() {
            let phase = index as f32 * tuning::FLOAT_PHASE_STEP;
            self.world.spawn_coin(coin.pos.to_vec2(), phase);
        }
        self.world.spawn_goal(def.goal.to_vec2());
    }

    fn tick_active(&mut self, input: &InputSnapshot, now: f64, dt: f32) -> Option<SceneRequest> {
        self.apply_player_input(input, dt);
        self.tick_patrols(dt);
        self.tick_coin_float(now);

        physics::apply_gravity(&mut self.world, dt);
        physics::integrate(&mut self.world, dt);
        physics::resolve_platforms(&mut self.world, dt);
        self.settle_landing_anim();

        physics::detect_contacts(&self.world, &mut self.events);
        if let Some(request) = self.consume_contacts(now) {
            return Some(request);
        }
        if let Some(request) = self.check_fall_off_world() {
            return Some(request);
        }

        self.world.tick_lifetimes(dt);
        self.world.flush_despawns();
        self.events.clear_all();
        None
    }

    fn apply_player_input(&mut self, input: &InputSnapshot, dt: f32) {
        let player = match self.world.player() {
            Some(p) => p,
            None => return,
        };

        let dir = (input.right as i8 - input.left as i8) as f32;
        if dir != 0.0 {
            if let Some(pos) = self.world.positions.get_mut(player) {
                pos.0.x += dir * tuning::PLAYER_SPEED * dt;
            }
        }

        if input.jump_pressed && physics::jump(&mut self.world, player, tuning::JUMP_FORCE) {
            self.cues.push(Cue::Jump);
            if let Some(marker) = self.world.players.get_mut(player) {
                marker.airborne_anim = true;
            }
        }
    }

    /// Enemies patrol horizontally and reverse at fixed screen-space
    /// margins. The bounds are deliberately screen-relative, not
    /// world-relative, even though the camera scrolls.
    fn tick_patrols(&mut self, dt: f32) {
        let patrolling: Vec<u32> = self.world.patrols.iter().map(|(idx, _)| idx).collect();
        for idx in patrolling {
            let entity = self.world.handle(idx);
            let patrol = match self.world.patrols.get(entity).copied() {
                Some(p) => p,
                None => continue,
            };

            let mut reverse = false;
            if let Some(pos) = self.world.positions.get_mut(entity) {
                pos.0.x += patrol.dir * patrol.speed * dt;
                if pos.0.x <= tuning::PATROL_MARGIN
                    || pos.0.x >= tuning::SCREEN_W - tuning::PATROL_MARGIN
                {
                    reverse = true;
                }
            }
            if reverse {
                if let Some(p) = self.world.patrols.get_mut(entity) {
                    p.dir = -p.dir;
                }
            }
        }
    }

    /// Coins bob around their spawn height as a function of the global
    /// clock and their per-coin phase.
    fn tick_coin_float(&mut self, now: f64) {
        let t = now as f32;
        let floating: Vec<(u32, f32, f32)> = self
            .world
            .coins
            .iter()
            .map(|(idx, coin)| (idx, coin.base_y, coin.phase))
            .collect();
        for (idx, base_y, phase) in floating {
            let entity = self.world.handle(idx);
            if let Some(pos) = self.world.positions.get_mut(entity) {
                pos.0.y = base_y + (t * tuning::FLOAT_RATE + phase).sin() * tuning::FLOAT_AMPLITUDE;
            }
        }
    }

    /// Swap back to the standing pose once the player lands.
    fn settle_landing_anim(&mut self) {
        let player = match self.world.player() {
            Some(p) => p,
            None => return,
        };
        let grounded = self
            .world
            .bodies
            .get(player)
            .map(|b| b.grounded)
            .unwrap_or(false);
        if grounded {
            if let Some(marker) = self.world.players.get_mut(player) {
                marker.airborne_anim = false;
            }
        }
    }

    fn consume_contacts(&mut self, now: f64) -> Option<SceneRequest> {
        let contacts: Vec<_> = self.events.contacts.drain().collect();
        for contact in contacts {
            if !self.world.is_alive(contact.other) {
                continue;
            }
            match contact.kind {
                ContactKind::Enemy => {
                    if let Some(request) = self.handle_enemy_contact(contact.subject, contact.other)
                    {
                        return Some(request);
                    }
                }
                ContactKind::Coin => self.handle_coin_pickup(contact.other),
                ContactKind::Goal => self.handle_goal_reached(now),
            }
        }
        None
    }

    fn handle_enemy_contact(&mut self, player: Entity, enemy: Entity) -> Option<SceneRequest> {
        let player_y = self.world.positions.get(player)?.0.y;
        let enemy_pos = self.world.positions.get(enemy)?.0;

        match physics::classify_enemy_contact(player_y, enemy_pos.y) {
            EnemyContact::Stomp => {
                self.world.despawn(enemy);
                // Half-height bounce off the defeated enemy
                if let Some(vel) = self.world.velocities.get_mut(player) {
                    vel.0.y = -(tuning::JUMP_FORCE * tuning::STOMP_BOUNCE_FACTOR);
                }
                if let Some(body) = self.world.bodies.get_mut(player) {
                    body.grounded = false;
                }
                self.state.score += tuning::STOMP_SCORE;
                self.world
                    .spawn_floating_text(enemy_pos, "+100", YELLOW, 20.0, 50.0, 1.0, 0.5);
                self.cues.push(Cue::EnemyDefeat);
                None
            }
            EnemyContact::Hit => self.lose_life(),
        }
    }

    fn handle_coin_pickup(&mut self, coin: Entity) {
        let pos = match self.world.positions.get(coin) {
            Some(p) => p.0,
            None => return,
        };
        self.world.despawn(coin);
        self.state.score += tuning::COIN_SCORE;
        self.world
            .spawn_floating_text(pos, "+50", GOLD, 16.0, 30.0, 0.8, 0.4);
        self.world.spawn_burst(pos, 12.0, GOLD, 0.3, 0.2);
        self.cues.push(Cue::Coin);
    }

    fn handle_goal_reached(&mut self, now: f64) {
        if self.goal_pending {
            return;
        }
        self.goal_pending = true;

        self.state.current_level += 1;
        self.state.score += tuning::GOAL_SCORE;
        self.cues.push(Cue::LevelComplete);

        // Banner roughly at the camera center
        let banner_pos = vec2(self.camera_target().x, tuning::SCREEN_H * 0.5);
        self.world.spawn_floating_text(
            banner_pos,
            "LEVEL COMPLETE!",
            GREEN,
            32.0,
            0.0,
            2.0,
            1.0,
        );

        self.scheduled.push(ScheduledEvent {
            at: now + tuning::LEVEL_RELOAD_DELAY,
            action: ScheduledAction::ReloadLevel,
        });
    }

    /// Shared life-loss branch for enemy hits and falling off the world:
    /// decrement lives, then either respawn in place or end the session.
    fn lose_life(&mut self) -> Option<SceneRequest> {
        self.state.lives -= 1;
        if self.state.lives <= 0 {
            self.cues.push(Cue::GameOver);
            return Some(SceneRequest::GameOver);
        }
        self.respawn_player();
        None
    }

    fn respawn_player(&mut self) {
        let player = match self.world.player() {
            Some(p) => p,
            None => return,
        };
        if let Some(pos) = self.world.positions.get_mut(player) {
            pos.0 = self.player_start;
        }
        if let Some(vel) = self.world.velocities.get_mut(player) {
            vel.0 = Vec2::ZERO;
        }
        if let Some(body) = self.world.bodies.get_mut(player) {
            body.grounded = false;
        }
        if let Some(marker) = self.world.players.get_mut(player) {
            marker.airborne_anim = false;
        }
    }

    fn check_fall_off_world(&mut self) -> Option<SceneRequest> {
        let player = self.world.player()?;
        let y = self.world.positions.get(player)?.0.y;
        if y > tuning::SCREEN_H + tuning::FALL_MARGIN {
            return self.lose_life();
        }
        None
    }
}

#[cfg(test)]
impl Session {
    /// Overwrite the bookkeeping mid-session (test setup only).
    pub(crate) fn force_state_for_test(&mut self, state: SessionState) {
        self.state = state;
    }

    /// Drop the player to a given height (test setup only).
    pub(crate) fn place_player_for_test(&mut self, y: f32) {
        if let Some(player) = self.world.player() {
            if let Some(pos) = self.world.positions.get_mut(player) {
                pos.0.y = y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn catalog() -> LevelCatalog {
        LevelCatalog::load().expect("bundled levels must parse")
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    /// A session that has completed its first Loading tick for level 1.
    fn active_session() -> (Session, LevelCatalog) {
        let catalog = catalog();
        let mut session = Session::new(SessionState::new());
        assert_eq!(session.tick(&catalog, &idle(), 0.0, DT), None);
        assert_eq!(session.phase, Phase::Active);
        (session, catalog)
    }

    /// Entity handle of the first live enemy.
    fn first_enemy(session: &Session) -> Entity {
        let idx = session.world.enemies.iter().next().map(|(i, _)| i).unwrap();
        session.world.handle(idx)
    }

    fn first_coin(session: &Session) -> Entity {
        let idx = session.world.coins.iter().next().map(|(i, _)| i).unwrap();
        session.world.handle(idx)
    }

    fn goal_entity(session: &Session) -> Entity {
        let idx = session.world.goals.iter().next().map(|(i, _)| i).unwrap();
        session.world.handle(idx)
    }

    fn place_player(session: &mut Session, pos: Vec2) {
        let player = session.world.player().unwrap();
        session.world.positions.get_mut(player).unwrap().0 = pos;
    }

    /// Level 1 spawns: 1 player + 20 platforms + 2 enemies + 4 coins + 1 goal.
    #[test]
    fn test_loading_spawns_level_one() {
        let (session, _) = active_session();
        assert_eq!(session.world.entity_count(), 28);
        assert_eq!(session.world.players.count(), 1);
        assert_eq!(session.world.platforms.count(), 20);
        assert_eq!(session.world.enemies.count(), 2);
        assert_eq!(session.world.coins.count(), 4);
        assert_eq!(session.world.goals.count(), 1);
    }

    #[test]
    fn test_missing_level_is_victory_with_no_entities() {
        let catalog = catalog();
        let mut session = Session::new(SessionState {
            score: 700,
            lives: 2,
            current_level: 4,
        });

        let request = session.tick(&catalog, &idle(), 0.0, DT);
        assert_eq!(request, Some(SceneRequest::Victory));
        assert_eq!(session.world.entity_count(), 0);
        // Bookkeeping untouched by the victory transition itself
        assert_eq!(session.state.score, 700);
    }

    #[test]
    fn test_stomp_defeats_enemy_and_scores() {
        let (mut session, catalog) = active_session();
        let enemy = first_enemy(&session);
        let enemy_pos = session.world.positions.get(enemy).unwrap().0;

        // Well above the enemy's center, still overlapping
        place_player(&mut session, enemy_pos - vec2(0.0, 30.0));
        let request = session.tick(&catalog, &idle(), 0.1, DT);

        assert_eq!(request, None);
        assert!(!session.world.is_alive(enemy));
        assert_eq!(session.state.score, tuning::STOMP_SCORE);
        assert_eq!(session.state.lives, 3);
        assert!(session.drain_cues().contains(&Cue::EnemyDefeat));
        // Bounce impulse applied
        let player = session.world.player().unwrap();
        assert!(session.world.velocities.get(player).unwrap().0.y < 0.0);
    }

    #[test]
    fn test_hit_costs_life_and_respawns_in_place() {
        let (mut session, catalog) = active_session();
        let enemy = first_enemy(&session);
        let enemy_pos = session.world.positions.get(enemy).unwrap().0;

        // Level with the enemy: a hit, not a stomp
        place_player(&mut session, enemy_pos + vec2(5.0, 0.0));
        let request = session.tick(&catalog, &idle(), 0.1, DT);

        assert_eq!(request, None);
        assert!(session.world.is_alive(enemy));
        assert_eq!(session.state.lives, 2);
        assert_eq!(session.state.score, 0);

        let player = session.world.player().unwrap();
        assert_eq!(
            session.world.positions.get(player).unwrap().0,
            session.player_start
        );
    }

    #[test]
    fn test_three_hits_reach_game_over_with_score_intact() {
        let (mut session, catalog) = active_session();
        session.state.score = 150;
        let enemy = first_enemy(&session);

        let mut request = None;
        let mut expected_lives = 3;
        for i in 0..3 {
            let enemy_pos = session.world.positions.get(enemy).unwrap().0;
            place_player(&mut session, enemy_pos + vec2(5.0, 0.0));
            request = session.tick(&catalog, &idle(), 0.1 + i as f64, DT);
            expected_lives -= 1;
            assert_eq!(session.state.lives, expected_lives);
        }

        assert_eq!(request, Some(SceneRequest::GameOver));
        assert_eq!(session.state.lives, 0);
        assert_eq!(session.state.score, 150);
        assert!(session.drain_cues().contains(&Cue::GameOver));
    }

    #[test]
    fn test_coin_pickup_scores_fifty() {
        let (mut session, catalog) = active_session();
        let coin = first_coin(&session);
        let coin_pos = session.world.positions.get(coin).unwrap().0;

        place_player(&mut session, coin_pos);
        let request = session.tick(&catalog, &idle(), 0.0, DT);

        assert_eq!(request, None);
        assert!(!session.world.is_alive(coin));
        assert_eq!(session.world.coins.count(), 3);
        assert_eq!(session.state.score, tuning::COIN_SCORE);
        assert_eq!(session.state.lives, 3);
        assert!(session.drain_cues().contains(&Cue::Coin));
    }

    #[test]
    fn test_stomp_then_coin_totals_150() {
        let (mut session, catalog) = active_session();

        let enemy = first_enemy(&session);
        let enemy_pos = session.world.positions.get(enemy).unwrap().0;
        place_player(&mut session, enemy_pos - vec2(0.0, 30.0));
        session.tick(&catalog, &idle(), 0.1, DT);

        let coin = first_coin(&session);
        let coin_pos = session.world.positions.get(coin).unwrap().0;
        place_player(&mut session, coin_pos);
        // Cancel the stomp bounce so the coin contact is clean
        let player = session.world.player().unwrap();
        session.world.velocities.get_mut(player).unwrap().0 = Vec2::ZERO;
        session.tick(&catalog, &idle(), 0.2, DT);

        assert_eq!(session.state.score, 150);
        assert_eq!(session.state.lives, 3);
        assert!(!session.world.is_alive(enemy));
        assert!(!session.world.is_alive(coin));
    }

    #[test]
    fn test_goal_advances_level_after_delay() {
        let (mut session, catalog) = active_session();
        let goal = goal_entity(&session);
        let goal_pos = session.world.positions.get(goal).unwrap().0;

        place_player(&mut session, goal_pos);
        let request = session.tick(&catalog, &idle(), 10.0, DT);

        assert_eq!(request, None);
        assert_eq!(session.state.current_level, 2);
        assert_eq!(session.state.score, tuning::GOAL_SCORE);
        assert!(session.drain_cues().contains(&Cue::LevelComplete));

        // Before the delay elapses: still the level-1 world
        session.tick(&catalog, &idle(), 10.5, DT);
        assert_eq!(session.phase, Phase::Active);

        // After the delay: level 2 fully spawned, level 1 gone.
        // Level 2: 1 player + 19 platforms + 3 enemies + 6 coins + 1 goal.
        session.tick(&catalog, &idle(), 11.05, DT);
        assert_eq!(session.world.entity_count(), 30);
        assert_eq!(session.world.platforms.count(), 19);
        assert_eq!(session.world.enemies.count(), 3);
        assert_eq!(session.world.coins.count(), 6);
    }

    #[test]
    fn test_goal_contact_fires_once_while_reload_pending() {
        let (mut session, catalog) = active_session();
        let goal = goal_entity(&session);
        let goal_pos = session.world.positions.get(goal).unwrap().0;

        place_player(&mut session, goal_pos);
        session.tick(&catalog, &idle(), 10.0, DT);
        // Still overlapping next tick; must not advance or score again
        place_player(&mut session, goal_pos);
        session.tick(&catalog, &idle(), 10.1, DT);

        assert_eq!(session.state.current_level, 2);
        assert_eq!(session.state.score, tuning::GOAL_SCORE);
    }

    #[test]
    fn test_fall_off_world_costs_life_without_score_change() {
        let (mut session, catalog) = active_session();
        session.state.score = 250;

        place_player(
            &mut session,
            vec2(500.0, tuning::SCREEN_H + tuning::FALL_MARGIN + 50.0),
        );
        let request = session.tick(&catalog, &idle(), 0.1, DT);

        assert_eq!(request, None);
        assert_eq!(session.state.lives, 2);
        assert_eq!(session.state.score, 250);

        let player = session.world.player().unwrap();
        assert_eq!(
            session.world.positions.get(player).unwrap().0,
            session.player_start
        );
    }

    #[test]
    fn test_fall_with_last_life_is_game_over() {
        let (mut session, catalog) = active_session();
        session.state.lives = 1;

        place_player(
            &mut session,
            vec2(500.0, tuning::SCREEN_H + tuning::FALL_MARGIN + 50.0),
        );
        let request = session.tick(&catalog, &idle(), 0.1, DT);

        assert_eq!(request, Some(SceneRequest::GameOver));
        assert_eq!(session.state.lives, 0);
    }

    #[test]
    fn test_jump_input_grounds_through_physics() {
        let (mut session, catalog) = active_session();

        // Let the player land on the ground first
        for i in 0..120 {
            session.tick(&catalog, &idle(), i as f64 * DT as f64, DT);
        }
        let player = session.world.player().unwrap();
        assert!(session.world.bodies.get(player).unwrap().grounded);
        session.drain_cues();

        let jump = InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        };
        session.tick(&catalog, &jump, 3.0, DT);
        assert!(session.drain_cues().contains(&Cue::Jump));
        assert!(session.player_airborne_anim());

        // Airborne jump request: no cue, nothing happens
        session.tick(&catalog, &jump, 3.0 + DT as f64, DT);
        assert!(!session.drain_cues().contains(&Cue::Jump));
    }

    #[test]
    fn test_patrol_reverses_at_screen_margin() {
        let (mut session, catalog) = active_session();
        let enemy = first_enemy(&session);

        // Park the enemy close enough that one tick crosses the margin
        session.world.positions.get_mut(enemy).unwrap().0.x = tuning::PATROL_MARGIN + 0.5;
        session.world.patrols.get_mut(enemy).unwrap().dir = -1.0;

        session.tick(&catalog, &idle(), 0.1, DT);
        assert_eq!(session.world.patrols.get(enemy).unwrap().dir, 1.0);
    }
}
