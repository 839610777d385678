use std::io::Read;
use std::time::Duration;

use crate::animation::curve::Curve;
use crate::animation::looping::loop_current;
use crate::animation::melody::Melody;
use crate::animation::movement::Movement;
use crate::foundation::core::Fps;
use crate::foundation::error::{MelodyError, MelodyResult};

/// A scalar melody described as data, e.g. loaded from JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Score {
    #[serde(default)]
    pub name: String,
    pub stages: Vec<ScoreStage>,
}

/// One movement of a [`Score`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScoreStage {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u64,
    #[serde(default)]
    pub curve: Curve,
}

impl ScoreStage {
    pub fn to_movement(&self) -> Movement<f64> {
        Movement::with_curve(
            self.from,
            self.to,
            Duration::from_millis(self.duration_ms),
            self.curve,
        )
    }
}

impl Score {
    pub fn from_json_str(s: &str) -> MelodyResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(r: impl Read) -> MelodyResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    pub fn to_json_pretty(&self) -> MelodyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> MelodyResult<()> {
        if self.stages.is_empty() {
            return Err(MelodyError::score("score must have at least one stage"));
        }
        for (i, stage) in self.stages.iter().enumerate() {
            if !stage.from.is_finite() || !stage.to.is_finite() {
                return Err(MelodyError::score(format!(
                    "stage {i} has a non-finite endpoint"
                )));
            }
        }
        self.total()?;
        Ok(())
    }

    /// Sum of all stage durations; fails if it does not fit in a [`Duration`].
    pub fn total(&self) -> MelodyResult<Duration> {
        self.stages.iter().try_fold(Duration::ZERO, |acc, s| {
            acc.checked_add(Duration::from_millis(s.duration_ms))
                .ok_or_else(|| MelodyError::score("total score duration overflows"))
        })
    }

    #[tracing::instrument(skip(self), fields(name = %self.name, stages = self.stages.len()))]
    pub fn to_melody(&self) -> MelodyResult<Melody<Vec<Movement<f64>>>> {
        self.validate()?;
        let total = self.total()?;
        let melody: Melody<Vec<Movement<f64>>> =
            Melody::try_new(self.stages.iter().map(ScoreStage::to_movement).collect())?;
        tracing::debug!(?total, "built melody from score");
        Ok(melody)
    }

    /// Start playing the score at a fixed frame rate; see [`ScorePlayer`].
    pub fn play(&self, fps: Fps, looping: bool) -> MelodyResult<ScorePlayer> {
        let melody = self.to_melody()?;
        let value = melody.current_value().unwrap_or_default();
        Ok(ScorePlayer {
            melody,
            delta: fps.frame_duration(),
            value,
            clock: Duration::ZERO,
            next_frame: Some(0),
            looping,
        })
    }
}

/// State of a score's melody after one simulated frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScoreSample {
    pub frame: u64,
    pub time_ms: f64,
    pub index: usize,
    pub value: f64,
    /// A loop boundary was crossed on this frame.
    pub looped: bool,
    pub done: bool,
}

/// Upper bound on the frame count [`sample_score`] will collect into memory.
///
/// Longer runs should iterate a [`ScorePlayer`] instead.
pub const MAX_SAMPLED_FRAMES: u64 = 1 << 24;

/// Frame-by-frame playback of a score, as a sketch's draw loop would see it.
///
/// The first item reports the initial state; every later item first advances by one frame
/// duration. With looping, the melody restarts with carried-over time instead of holding
/// its final value. The iterator only ends once the frame counter is exhausted.
#[derive(Clone, Debug)]
pub struct ScorePlayer {
    melody: Melody<Vec<Movement<f64>>>,
    delta: Duration,
    value: f64,
    clock: Duration,
    next_frame: Option<u64>,
    looping: bool,
}

impl Iterator for ScorePlayer {
    type Item = ScoreSample;

    fn next(&mut self) -> Option<ScoreSample> {
        let frame = self.next_frame?;
        self.next_frame = frame.checked_add(1);

        let mut looped = false;
        if frame > 0 {
            self.clock = self.clock.saturating_add(self.delta);
            if self.looping {
                looped = loop_current(&mut self.value, &mut self.melody, self.delta);
            } else {
                self.melody.move_current(&mut self.value, self.delta);
            }
        }
        Some(ScoreSample {
            frame,
            time_ms: self.clock.as_secs_f64() * 1000.0,
            index: self.melody.current_index(),
            value: self.value,
            looped,
            done: self.melody.done(),
        })
    }
}

/// Play `score` for `frames` frames and collect the samples.
///
/// Rejects `frames` above [`MAX_SAMPLED_FRAMES`].
#[tracing::instrument(skip(score), fields(name = %score.name))]
pub fn sample_score(
    score: &Score,
    fps: Fps,
    frames: u64,
    looping: bool,
) -> MelodyResult<Vec<ScoreSample>> {
    if frames > MAX_SAMPLED_FRAMES {
        return Err(MelodyError::validation(format!(
            "cannot sample {frames} frames at once (limit {MAX_SAMPLED_FRAMES})"
        )));
    }
    let take = usize::try_from(frames)
        .map_err(|_| MelodyError::validation("frame count does not fit in memory"))?;
    let samples: Vec<ScoreSample> = score.play(fps, looping)?.take(take).collect();

    tracing::debug!(frames, "sampled score");
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/score.rs"]
mod tests;
