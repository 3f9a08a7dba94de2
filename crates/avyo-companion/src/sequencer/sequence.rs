//! Cue scheduling and per-frame sampling.

use avyo_common::{ActivityFlags, ActivityState, MoodLabel, Signal};
use avyo_config::schema::SequenceConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::types::{Cue, CueSource, Interaction};

/// Schedules activity cues on the host's clock (seconds).
pub struct ActivitySequencer {
    config: SequenceConfig,
    cues: Vec<Cue>,
    mood: MoodLabel,
    /// Mood waiting for the end of the thinking cue.
    pending_mood: Option<(f64, MoodLabel)>,
    rng: StdRng,
}

impl ActivitySequencer {
    /// Create a sequencer. A `seed` makes waves and click reactions reproducible.
    pub fn new(config: SequenceConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            cues: Vec::new(),
            mood: MoodLabel::Neutral,
            pending_mood: None,
            rng,
        }
    }

    fn push(&mut self, activity: ActivityState, start: f64, duration: f64, source: CueSource) {
        self.cues.push(Cue {
            activity,
            start,
            end: start + duration.max(0.0),
            source,
        });
    }

    /// Schedule listening, thinking, and speaking for a message submitted at
    /// `now`. Replaces any exchange still in progress. Returns whether a wave
    /// was rolled alongside.
    pub fn submit(&mut self, now: f64, mood: MoodLabel) -> bool {
        self.cues.retain(|c| c.source != CueSource::Exchange);

        let listen_end = now + self.config.listening;
        let think_end = listen_end + self.config.thinking;
        self.push(
            ActivityState::Listening,
            now,
            self.config.listening,
            CueSource::Exchange,
        );
        self.push(
            ActivityState::Thinking,
            listen_end,
            self.config.thinking,
            CueSource::Exchange,
        );
        self.push(
            ActivityState::Speaking,
            think_end,
            self.config.speaking,
            CueSource::Exchange,
        );
        self.pending_mood = Some((think_end, mood));

        let chance = self.config.wave_chance;
        let chance = if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let waved = self.rng.gen_bool(chance);
        if waved {
            self.push(
                ActivityState::Waving,
                now,
                self.config.wave,
                CueSource::MessageWave,
            );
        }
        info!(%mood, waved, "exchange scheduled");
        waved
    }

    /// React to an avatar click with a random interaction.
    pub fn click(&mut self, now: f64) -> Interaction {
        let pick = Interaction::ALL[self.rng.gen_range(0..Interaction::ALL.len())];
        let duration = match pick {
            Interaction::Wave => self.config.wave,
            Interaction::Think => self.config.click_think,
            Interaction::Speak => self.config.click_speak,
        };
        self.push(pick.activity(), now, duration, CueSource::Click);
        debug!(interaction = %pick, "avatar clicked");
        pick
    }

    /// Wave hello at session start.
    pub fn greet(&mut self, now: f64) {
        self.push(ActivityState::Waving, now, self.config.wave, CueSource::Greeting);
    }

    /// Sample the signal bundle at `now`, applying any due mood and dropping
    /// expired cues.
    pub fn signal_at(&mut self, now: f64) -> Signal {
        if let Some((at, mood)) = self.pending_mood {
            if now >= at {
                if mood != self.mood {
                    debug!(from = %self.mood, to = %mood, "mood applied");
                }
                self.mood = mood;
                self.pending_mood = None;
            }
        }
        self.cues.retain(|c| !c.is_expired(now));

        let mut flags = ActivityFlags::default();
        for cue in self.cues.iter().filter(|c| c.is_active(now)) {
            flags.raise(cue.activity);
        }
        Signal::new(flags, self.mood)
    }

    /// Whether a listening/thinking/speaking run is still scheduled.
    pub fn is_busy(&self, now: f64) -> bool {
        self.cues
            .iter()
            .any(|c| c.source == CueSource::Exchange && !c.is_expired(now))
    }

    /// Current mood (as of the last sample).
    pub fn mood(&self) -> MoodLabel {
        self.mood
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }
}
