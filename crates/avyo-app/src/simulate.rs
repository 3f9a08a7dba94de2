//! Headless avatar simulation.
//!
//! Drives the sequencer and avatar at the configured frame rate and writes
//! sampled frames as JSON lines.

use std::io::{self, Write};

use avyo_avatar::{create_avatar, Pose};
use avyo_common::{ActivityState, MoodLabel};
use avyo_companion::{caption, classify, ActivitySequencer};
use avyo_config::AvyoConfig;
use serde::Serialize;
use tracing::info;

pub struct SimulationOptions {
    /// Message submitted at time zero.
    pub message: Option<String>,
    pub seconds: f64,
    /// Write every Nth frame; 0 is treated as 1.
    pub every: u32,
    /// Wave hello at time zero.
    pub greet: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    time: f64,
    activity: ActivityState,
    mood: MoodLabel,
    caption: &'static str,
    pose: &'a Pose,
}

/// Run the simulation and return the number of frames written.
pub fn run(
    config: &AvyoConfig,
    options: &SimulationOptions,
    out: &mut impl Write,
) -> io::Result<u64> {
    let step = config.performance.frame_step();
    let rate = f64::from(config.performance.frame_rate.max(1));
    let frames = if options.seconds > 0.0 {
        (options.seconds * rate).round() as u64
    } else {
        0
    };
    let every = u64::from(options.every.max(1));

    let mut sequencer = ActivitySequencer::new(config.sequence.clone(), config.avatar.seed);
    let mut avatar = create_avatar(config);

    if options.greet {
        sequencer.greet(0.0);
    }
    if let Some(message) = options.message.as_deref() {
        let mood = classify(message);
        let waved = sequencer.submit(0.0, mood);
        info!(%mood, waved, "message submitted");
    }

    let mut written = 0;
    for frame in 0..frames {
        let time = frame as f64 * step;
        let signal = sequencer.signal_at(time);
        // Frame 0 renders the starting instant so the pose clock matches `time`.
        let dt = if frame == 0 { 0.0 } else { step };
        avatar.update(dt, signal);

        if frame % every != 0 || !avatar.is_visible() {
            continue;
        }
        let record = FrameRecord {
            frame,
            time,
            activity: avatar.activity(),
            mood: signal.mood,
            caption: caption(&signal.flags, signal.mood),
            pose: avatar.pose(),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        written += 1;
    }

    info!(frames, written, "simulation finished");
    Ok(written)
}
