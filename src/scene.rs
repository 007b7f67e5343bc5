//! Scene machine
//!
//! Four scenes: Title, Playing, GameOver, Victory. Playing owns a live
//! Session; the other three are static screens. The bookkeeping
//! (score/lives/level) moves into the session when play starts and is
//! recovered when the session ends, so the end screens can show the
//! final score. Restarting from either end screen resets the
//! bookkeeping and returns to the title.

use crate::audio::Cue;
use crate::catalog::LevelCatalog;
use crate::input::InputSnapshot;
use crate::session::{SceneRequest, Session, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Title,
    Playing,
    GameOver,
    Victory,
}

/// Top-level game state: the current scene plus the session bookkeeping
/// (held here whenever no session is live).
pub struct Game {
    scene: Scene,
    state: SessionState,
    session: Option<Session>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            scene: Scene::Title,
            state: SessionState::new(),
            session: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Score to show on the end screens.
    pub fn final_score(&self) -> u32 {
        self.state.score
    }

    /// Advance the game one frame. Audio cues produced this frame are
    /// appended to `cues` for the shell to play.
    pub fn frame(
        &mut self,
        catalog: &LevelCatalog,
        input: &InputSnapshot,
        now: f64,
        dt: f32,
        cues: &mut Vec<Cue>,
    ) {
        match self.scene {
            Scene::Title => {
                if input.start_pressed {
                    // Bookkeeping moves into the session for the playthrough
                    let state = std::mem::take(&mut self.state);
                    self.session = Some(Session::new(state));
                    self.scene = Scene::Playing;
                }
            }
            Scene::Playing => {
                let request = match self.session.as_mut() {
                    Some(session) => {
                        let request = session.tick(catalog, input, now, dt);
                        cues.append(&mut session.drain_cues());
                        request
                    }
                    // A playing scene without a session cannot happen;
                    // recover to the title rather than panic.
                    None => {
                        self.scene = Scene::Title;
                        return;
                    }
                };

                if let Some(request) = request {
                    if let Some(session) = self.session.take() {
                        self.state = session.into_state();
                    }
                    self.scene = match request {
                        SceneRequest::GameOver => Scene::GameOver,
                        SceneRequest::Victory => Scene::Victory,
                    };
                }
            }
            Scene::GameOver | Scene::Victory => {
                if input.restart_pressed {
                    self.state = SessionState::new();
                    self.scene = Scene::Title;
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::tuning;

    const DT: f32 = 1.0 / 60.0;

    fn catalog() -> LevelCatalog {
        LevelCatalog::load().expect("bundled levels must parse")
    }

    fn press_start() -> InputSnapshot {
        InputSnapshot {
            start_pressed: true,
            ..Default::default()
        }
    }

    fn press_restart() -> InputSnapshot {
        InputSnapshot {
            restart_pressed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_boots_to_title() {
        let game = Game::new();
        assert_eq!(game.scene(), Scene::Title);
        assert!(game.session().is_none());
    }

    #[test]
    fn test_start_enters_playing_with_fresh_session() {
        let catalog = catalog();
        let mut game = Game::new();
        let mut cues = Vec::new();

        game.frame(&catalog, &press_start(), 0.0, DT, &mut cues);
        assert_eq!(game.scene(), Scene::Playing);

        // First playing frame performs the level load
        game.frame(&catalog, &InputSnapshot::default(), 0.0, DT, &mut cues);
        let session = game.session().unwrap();
        assert_eq!(session.state().lives, tuning::STARTING_LIVES);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().current_level, 1);
        assert!(session.world().entity_count() > 0);
    }

    #[test]
    fn test_title_ignores_other_input() {
        let catalog = catalog();
        let mut game = Game::new();
        let mut cues = Vec::new();

        game.frame(&catalog, &press_restart(), 0.0, DT, &mut cues);
        assert_eq!(game.scene(), Scene::Title);
    }

    #[test]
    fn test_victory_keeps_final_score_and_restart_resets() {
        let catalog = catalog();
        let mut game = Game::new();
        let mut cues = Vec::new();

        game.frame(&catalog, &press_start(), 0.0, DT, &mut cues);
        // Swap in a session already past the last level: its next load
        // is the victory signal
        game.session = Some(Session::new(SessionState {
            score: 1250,
            lives: 2,
            current_level: 4,
        }));

        game.frame(&catalog, &InputSnapshot::default(), 1.0, DT, &mut cues);
        assert_eq!(game.scene(), Scene::Victory);
        assert!(game.session().is_none());
        assert_eq!(game.final_score(), 1250);

        game.frame(&catalog, &press_restart(), 2.0, DT, &mut cues);
        assert_eq!(game.scene(), Scene::Title);
        assert_eq!(game.state, SessionState::new());
    }

    #[test]
    fn test_game_over_flow() {
        let catalog = catalog();
        let mut game = Game::new();
        let mut cues = Vec::new();

        game.frame(&catalog, &press_start(), 0.0, DT, &mut cues);
        game.frame(&catalog, &InputSnapshot::default(), 0.0, DT, &mut cues);

        // Drop the session to its last life and push the player off the
        // bottom of the world
        if let Some(session) = game.session.as_mut() {
            session.force_state_for_test(SessionState {
                score: 300,
                lives: 1,
                current_level: 1,
            });
            session.place_player_for_test(tuning::SCREEN_H + tuning::FALL_MARGIN + 50.0);
        }

        game.frame(&catalog, &InputSnapshot::default(), 0.5, DT, &mut cues);
        assert_eq!(game.scene(), Scene::GameOver);
        assert_eq!(game.final_score(), 300);
        assert!(cues.contains(&Cue::GameOver));
    }
}
