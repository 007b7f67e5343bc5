//! Audio cues
//!
//! Five named cues, each a short synthesized tone sequence. No authored
//! audio assets: tones are generated by simple oscillators with an
//! exponential gain decay, matching the feel of classic web/console
//! bleeps.
//!
//! Platform-specific output:
//! - Native: cpal output stream mixing active tones on the audio thread
//! - WASM: silent stub (same API)
//!
//! Cues are fire-and-forget; a missing or failed audio device degrades
//! to silence, never to an error the game has to handle.

/// The fire-and-forget audio triggers the game emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Coin,
    EnemyDefeat,
    LevelComplete,
    GameOver,
}

/// Oscillator shape for a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One tone in a cue: start offset, pitch, length, shape.
#[derive(Debug, Clone, Copy)]
pub struct ToneStep {
    /// Seconds after the cue trigger before this tone starts
    pub delay: f32,
    pub freq: f32,
    pub duration: f32,
    pub wave: Wave,
}

const fn step(delay: f32, freq: f32, duration: f32, wave: Wave) -> ToneStep {
    ToneStep {
        delay,
        freq,
        duration,
        wave,
    }
}

const JUMP_STEPS: [ToneStep; 1] = [step(0.0, 400.0, 0.2, Wave::Square)];
const COIN_STEPS: [ToneStep; 2] = [
    step(0.0, 800.0, 0.1, Wave::Sine),
    step(0.05, 1000.0, 0.1, Wave::Sine),
];
const DEFEAT_STEPS: [ToneStep; 1] = [step(0.0, 200.0, 0.3, Wave::Sawtooth)];
/// C5 E5 G5 C6 arpeggio
const LEVEL_COMPLETE_STEPS: [ToneStep; 4] = [
    step(0.0, 523.0, 0.2, Wave::Sine),
    step(0.1, 659.0, 0.2, Wave::Sine),
    step(0.2, 784.0, 0.2, Wave::Sine),
    step(0.3, 1047.0, 0.4, Wave::Sine),
];
/// G4 F4 E4 D4 descent
const GAME_OVER_STEPS: [ToneStep; 4] = [
    step(0.0, 392.0, 0.5, Wave::Triangle),
    step(0.2, 349.0, 0.5, Wave::Triangle),
    step(0.4, 330.0, 0.5, Wave::Triangle),
    step(0.6, 294.0, 1.0, Wave::Triangle),
];

impl Cue {
    /// The tone sequence for this cue.
    pub fn steps(self) -> &'static [ToneStep] {
        match self {
            Cue::Jump => &JUMP_STEPS,
            Cue::Coin => &COIN_STEPS,
            Cue::EnemyDefeat => &DEFEAT_STEPS,
            Cue::LevelComplete => &LEVEL_COMPLETE_STEPS,
            Cue::GameOver => &GAME_OVER_STEPS,
        }
    }

    pub const ALL: [Cue; 5] = [
        Cue::Jump,
        Cue::Coin,
        Cue::EnemyDefeat,
        Cue::LevelComplete,
        Cue::GameOver,
    ];
}

/// Peak gain at tone start
const START_GAIN: f32 = 0.3;
/// Gain the exponential decay reaches at the end of the tone
const END_GAIN: f32 = 0.01;

/// Oscillator sample for a wave at a given cycle phase (phase in cycles,
/// fractional part is the position within the cycle).
fn oscillator(wave: Wave, phase: f32) -> f32 {
    let frac = phase - phase.floor();
    match wave {
        Wave::Sine => (frac * std::f32::consts::TAU).sin(),
        Wave::Square => {
            if frac < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Wave::Sawtooth => 2.0 * frac - 1.0,
        Wave::Triangle => 4.0 * (frac - 0.5).abs() - 1.0,
    }
}

/// Amplitude envelope: exponential ramp from START_GAIN down to END_GAIN
/// over the tone's duration.
fn envelope(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    START_GAIN * (END_GAIN / START_GAIN).powf(t)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{envelope, oscillator, Cue, Wave};
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use std::sync::{Arc, Mutex};

    /// A tone currently playing (or waiting out its start delay).
    struct ActiveTone {
        freq: f32,
        wave: Wave,
        duration: f32,
        /// Seconds until the tone starts (counts down)
        delay: f32,
        /// Seconds since the tone started
        elapsed: f32,
    }

    pub struct Mixer {
        tones: Arc<Mutex<Vec<ActiveTone>>>,
        // Held so the output stream stays alive for the game's lifetime
        _stream: cpal::Stream,
    }

    impl Mixer {
        /// Open the default output device. Returns None (silence) when no
        /// usable device is available.
        pub fn open() -> Option<Self> {
            let host = cpal::default_host();
            let device = host.default_output_device()?;
            let config = device.default_output_config().ok()?;
            if config.sample_format() != cpal::SampleFormat::F32 {
                eprintln!("audio: default output is not f32, running silent");
                return None;
            }

            let sample_rate = config.sample_rate().0 as f32;
            let channels = config.channels() as usize;
            let tones: Arc<Mutex<Vec<ActiveTone>>> = Arc::new(Mutex::new(Vec::new()));
            let mixer_tones = Arc::clone(&tones);

            let stream = device
                .build_output_stream(
                    &config.into(),
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                        let mut tones = match mixer_tones.lock() {
                            Ok(guard) => guard,
                            Err(poisoned) => poisoned.into_inner(),
                        };
                        let dt = 1.0 / sample_rate;
                        for frame in data.chunks_mut(channels) {
                            let mut sample = 0.0f32;
                            for tone in tones.iter_mut() {
                                if tone.delay > 0.0 {
                                    tone.delay -= dt;
                                    continue;
                                }
                                let phase = tone.freq * tone.elapsed;
                                sample += oscillator(tone.wave, phase)
                                    * envelope(tone.elapsed, tone.duration);
                                tone.elapsed += dt;
                            }
                            tones.retain(|t| t.delay > 0.0 || t.elapsed < t.duration);
                            let sample = sample.clamp(-1.0, 1.0);
                            for out in frame.iter_mut() {
                                *out = sample;
                            }
                        }
                    },
                    |err| eprintln!("audio: stream error: {err}"),
                    None,
                )
                .ok()?;
            stream.play().ok()?;

            Some(Self {
                tones,
                _stream: stream,
            })
        }

        pub fn play(&self, cue: Cue) {
            let mut tones = match self.tones.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            for step in cue.steps() {
                tones.push(ActiveTone {
                    freq: step.freq,
                    wave: step.wave,
                    duration: step.duration,
                    delay: step.delay,
                    elapsed: 0.0,
                });
            }
        }
    }
}

/// The audio output handle owned by the shell. All cue playback goes
/// through here; the game core never touches the device.
pub struct AudioOutput {
    #[cfg(not(target_arch = "wasm32"))]
    mixer: Option<native::Mixer>,
}

impl AudioOutput {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn init() -> Self {
        let mixer = native::Mixer::open();
        if mixer.is_none() {
            eprintln!("audio: no output device, cues will be silent");
        }
        Self { mixer }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn init() -> Self {
        Self {}
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, cue: Cue) {
        if let Some(mixer) = &self.mixer {
            mixer.play(cue);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cue_has_tones() {
        for cue in Cue::ALL {
            let steps = cue.steps();
            assert!(!steps.is_empty());
            for step in steps {
                assert!(step.delay >= 0.0);
                assert!(step.freq > 0.0);
                assert!(step.duration > 0.0);
            }
        }
    }

    #[test]
    fn test_steps_are_static_tables() {
        // Tables outlive the lookup and repeated lookups return the
        // same backing storage
        let tables: Vec<&'static [ToneStep]> = Cue::ALL.iter().map(|c| c.steps()).collect();
        assert_eq!(tables.len(), 5);
        assert_eq!(Cue::Coin.steps().len(), 2);
        assert_eq!(Cue::LevelComplete.steps().len(), 4);
        assert!(std::ptr::eq(Cue::Coin.steps(), Cue::Coin.steps()));
    }

    #[test]
    fn test_cue_delays_are_monotonic() {
        for cue in Cue::ALL {
            let steps = cue.steps();
            for pair in steps.windows(2) {
                assert!(pair[0].delay <= pair[1].delay);
            }
        }
    }

    #[test]
    fn test_envelope_decays() {
        let start = envelope(0.0, 1.0);
        let end = envelope(1.0, 1.0);
        assert!((start - START_GAIN).abs() < 1e-6);
        assert!((end - END_GAIN).abs() < 1e-6);
        assert!(envelope(0.5, 1.0) < start);
        assert!(envelope(0.5, 1.0) > end);
    }

    #[test]
    fn test_oscillator_ranges() {
        for wave in [Wave::Sine, Wave::Square, Wave::Sawtooth, Wave::Triangle] {
            for i in 0..100 {
                let phase = i as f32 * 0.01;
                let v = oscillator(wave, phase);
                assert!((-1.0..=1.0).contains(&v), "{wave:?} out of range at {phase}");
            }
        }
    }
}
