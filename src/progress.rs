//! Simulated analysis progress.
//!
//! The backend exposes no progress signal, so the indicator shown during the
//! wait is purely time-driven: roughly linear over the ~90 second estimate,
//! capped at 99% until the response actually lands.

use std::time::{Duration, Instant};

/// Advertised duration of a full analysis pass.
pub const ANALYSIS_ESTIMATE_SECS: f32 = 90.0;

const PERCENT_PER_SEC: f32 = 1.1;
const PERCENT_CEILING: f32 = 99.0;

/// Status captions shown while the request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Preprocessing,
    FeatureExtraction,
    Questionnaire,
    VoiceModels,
    Fusion,
    Done,
}

impl ProgressPhase {
    fn for_percent(percent: f32) -> Self {
        if percent < 20.0 {
            ProgressPhase::Preprocessing
        } else if percent < 45.0 {
            ProgressPhase::FeatureExtraction
        } else if percent < 70.0 {
            ProgressPhase::Questionnaire
        } else if percent < 90.0 {
            ProgressPhase::VoiceModels
        } else {
            ProgressPhase::Fusion
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            ProgressPhase::Preprocessing => "Preprocessing physiological signals...",
            ProgressPhase::FeatureExtraction => "Extracting regularized features...",
            ProgressPhase::Questionnaire => "Analyzing questionnaire responses...",
            ProgressPhase::VoiceModels => "Running deep learning voice models...",
            ProgressPhase::Fusion => "Finalizing multi-modal fusion...",
            ProgressPhase::Done => "Analysis complete!",
        }
    }
}

/// Simulated percentage after `elapsed` wall-clock time.
fn percent_after(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * PERCENT_PER_SEC).min(PERCENT_CEILING)
}

/// Live progress for one submission.
#[derive(Debug, Clone)]
pub struct AnalysisProgress {
    started: Instant,
    percent: f32,
    complete: bool,
}

impl AnalysisProgress {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            percent: 0.0,
            complete: false,
        }
    }

    /// Advance from wall-clock time. Never moves backwards.
    pub fn tick(&mut self) {
        if !self.complete {
            self.percent = self.percent.max(percent_after(self.started.elapsed()));
        }
    }

    /// Snap to 100% once a successful response arrives.
    pub fn force_complete(&mut self) {
        self.complete = true;
        self.percent = 100.0;
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn phase(&self) -> ProgressPhase {
        if self.complete {
            ProgressPhase::Done
        } else {
            ProgressPhase::for_percent(self.percent)
        }
    }

    pub fn status_message(&self) -> &'static str {
        self.phase().caption()
    }

    /// Countdown from the advertised estimate, floored at one second while
    /// the request is still in flight.
    pub fn seconds_remaining(&self) -> u32 {
        if self.complete {
            return 0;
        }
        let remaining = ANALYSIS_ESTIMATE_SECS - self.started.elapsed().as_secs_f32();
        (remaining.ceil().max(1.0)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_roughly_linear_then_capped() {
        assert_eq!(percent_after(Duration::ZERO), 0.0);
        let at_10s = percent_after(Duration::from_secs(10));
        assert!((at_10s - 11.0).abs() < 0.01);
        // Past the estimate it holds at the ceiling, never 100
        assert_eq!(percent_after(Duration::from_secs(90)), PERCENT_CEILING);
        assert_eq!(percent_after(Duration::from_secs(600)), PERCENT_CEILING);
    }

    #[test]
    fn percent_is_monotonic() {
        let mut last = 0.0;
        for secs in 0..120 {
            let p = percent_after(Duration::from_secs(secs));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn phase_thresholds() {
        assert_eq!(ProgressPhase::for_percent(0.0), ProgressPhase::Preprocessing);
        assert_eq!(ProgressPhase::for_percent(19.9), ProgressPhase::Preprocessing);
        assert_eq!(ProgressPhase::for_percent(20.0), ProgressPhase::FeatureExtraction);
        assert_eq!(ProgressPhase::for_percent(45.0), ProgressPhase::Questionnaire);
        assert_eq!(ProgressPhase::for_percent(70.0), ProgressPhase::VoiceModels);
        assert_eq!(ProgressPhase::for_percent(90.0), ProgressPhase::Fusion);
        assert_eq!(ProgressPhase::for_percent(99.0), ProgressPhase::Fusion);
    }

    #[test]
    fn force_complete_snaps_to_100() {
        let mut progress = AnalysisProgress::start();
        progress.tick();
        assert!(progress.percent() < 100.0);
        progress.force_complete();
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.phase(), ProgressPhase::Done);
        assert_eq!(progress.seconds_remaining(), 0);
        // Ticking afterwards must not regress
        progress.tick();
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn countdown_floors_at_one_second() {
        let progress = AnalysisProgress {
            started: Instant::now() - Duration::from_secs(500),
            percent: PERCENT_CEILING,
            complete: false,
        };
        assert_eq!(progress.seconds_remaining(), 1);
    }
}
