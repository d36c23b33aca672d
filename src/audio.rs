//! Audio cue direction
//!
//! The simulation knows nothing about audio. This module listens to its
//! events and tells the host's audio backend what to do; the backend only
//! has to play, stop and set volumes.

use serde::{Deserialize, Serialize};

use crate::consts::COUNTDOWN_TICKS;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode};

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicTrack {
    /// Attract-mode loop
    Menu,
    /// In-round loop
    Game,
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Obstacle passed
    Score,
    /// Round lost
    Hit,
}

/// Instruction for the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AudioCommand {
    /// Start a track; `restart` rewinds it to the beginning first
    PlayMusic {
        track: MusicTrack,
        volume: f32,
        restart: bool,
    },
    StopMusic { track: MusicTrack },
    PlayEffect { effect: SoundEffect, volume: f32 },
}

/// Tracks which music is playing and emits commands for game events
#[derive(Debug, Clone, Default)]
pub struct AudioDirector {
    playing: Option<MusicTrack>,
    mode: Option<GameMode>,
}

impl AudioDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track currently playing, if any
    pub fn current_track(&self) -> Option<MusicTrack> {
        self.playing
    }

    /// Commands for session start (menu loop)
    pub fn boot(&mut self, settings: &Settings) -> Vec<AudioCommand> {
        self.mode = Some(GameMode::Idle);
        let mut out = Vec::new();
        self.play_music(MusicTrack::Menu, false, settings, &mut out);
        out
    }

    /// Commands for one event
    pub fn on_event(&mut self, event: &GameEvent, settings: &Settings) -> Vec<AudioCommand> {
        let mut out = Vec::new();
        match *event {
            GameEvent::ModeChanged { to, .. } => {
                self.mode = Some(to);
                match to {
                    GameMode::Countdown => {
                        self.stop_music(MusicTrack::Menu, &mut out);
                    }
                    GameMode::GameOver => {
                        self.play_effect(SoundEffect::Hit, settings, &mut out);
                        self.stop_music(MusicTrack::Game, &mut out);
                    }
                    GameMode::Idle | GameMode::Playing => {}
                }
            }
            // Every start, including a restart mid-countdown, rewinds the track
            GameEvent::CountdownTick { remaining } if remaining == COUNTDOWN_TICKS => {
                self.play_music(MusicTrack::Game, true, settings, &mut out);
            }
            GameEvent::ObstaclePassed { .. } if self.mode == Some(GameMode::Playing) => {
                self.play_effect(SoundEffect::Score, settings, &mut out);
            }
            _ => {}
        }
        out
    }

    /// Commands for a batch of drained events, in order
    pub fn on_events(&mut self, events: &[GameEvent], settings: &Settings) -> Vec<AudioCommand> {
        events
            .iter()
            .flat_map(|e| self.on_event(e, settings))
            .collect()
    }

    fn play_music(
        &mut self,
        track: MusicTrack,
        restart: bool,
        settings: &Settings,
        out: &mut Vec<AudioCommand>,
    ) {
        if settings.muted {
            return;
        }
        self.playing = Some(track);
        out.push(AudioCommand::PlayMusic {
            track,
            volume: settings.effective_music_volume(),
            restart,
        });
    }

    fn stop_music(&mut self, track: MusicTrack, out: &mut Vec<AudioCommand>) {
        if self.playing == Some(track) {
            self.playing = None;
            out.push(AudioCommand::StopMusic { track });
        }
    }

    fn play_effect(&self, effect: SoundEffect, settings: &Settings, out: &mut Vec<AudioCommand>) {
        let volume = settings.effective_sfx_volume();
        if volume <= 0.0 {
            return;
        }
        out.push(AudioCommand::PlayEffect { effect, volume });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(from: GameMode, to: GameMode) -> GameEvent {
        GameEvent::ModeChanged { from, to }
    }

    #[test]
    fn test_full_round_cues() {
        let settings = Settings::default();
        let mut director = AudioDirector::new();

        assert_eq!(
            director.boot(&settings),
            vec![AudioCommand::PlayMusic {
                track: MusicTrack::Menu,
                volume: 0.4,
                restart: false
            }]
        );

        let cmds = director.on_events(
            &[
                changed(GameMode::Idle, GameMode::Countdown),
                GameEvent::CountdownTick { remaining: 3 },
                GameEvent::CountdownTick { remaining: 2 },
            ],
            &settings,
        );
        assert_eq!(
            cmds,
            vec![
                AudioCommand::StopMusic {
                    track: MusicTrack::Menu
                },
                AudioCommand::PlayMusic {
                    track: MusicTrack::Game,
                    volume: 0.4,
                    restart: true
                },
            ]
        );

        director.on_event(&changed(GameMode::Countdown, GameMode::Playing), &settings);
        let cmds = director.on_event(&GameEvent::ObstaclePassed { id: 1, score: 1 }, &settings);
        assert_eq!(
            cmds,
            vec![AudioCommand::PlayEffect {
                effect: SoundEffect::Score,
                volume: 0.6
            }]
        );

        let cmds = director.on_event(&changed(GameMode::Playing, GameMode::GameOver), &settings);
        assert_eq!(
            cmds,
            vec![
                AudioCommand::PlayEffect {
                    effect: SoundEffect::Hit,
                    volume: 0.6
                },
                AudioCommand::StopMusic {
                    track: MusicTrack::Game
                },
            ]
        );
        assert_eq!(director.current_track(), None);
    }

    #[test]
    fn test_restart_mid_countdown_rewinds_game_track() {
        let settings = Settings::default();
        let mut director = AudioDirector::new();
        let mut state = crate::sim::GameState::new(1);
        director.boot(&settings);

        crate::sim::request_start(&mut state);
        director.on_events(&state.drain_events(), &settings);

        // Second start while counting down: no mode change is raised
        crate::sim::request_start(&mut state);
        let events = state.drain_events();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::ModeChanged { .. }))
        );
        assert_eq!(
            director.on_events(&events, &settings),
            vec![AudioCommand::PlayMusic {
                track: MusicTrack::Game,
                volume: 0.4,
                restart: true
            }]
        );
        assert_eq!(director.current_track(), Some(MusicTrack::Game));
    }

    #[test]
    fn test_attract_mode_passes_are_silent() {
        let settings = Settings::default();
        let mut director = AudioDirector::new();
        director.boot(&settings);
        let cmds = director.on_event(&GameEvent::ObstaclePassed { id: 1, score: 1 }, &settings);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_muted_emits_nothing() {
        let mut settings = Settings::default();
        settings.set_muted(true);
        let mut director = AudioDirector::new();

        let events = [
            changed(GameMode::Idle, GameMode::Countdown),
            GameEvent::CountdownTick { remaining: 3 },
            changed(GameMode::Countdown, GameMode::Playing),
            GameEvent::ObstaclePassed { id: 1, score: 1 },
            changed(GameMode::Playing, GameMode::GameOver),
        ];
        assert!(director.boot(&settings).is_empty());
        assert!(director.on_events(&events, &settings).is_empty());
    }
}
