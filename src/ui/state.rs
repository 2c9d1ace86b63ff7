//! Application state management
//!
//! This module provides the central state for the assessment view: the form
//! inputs, the submission state machine, and the channel plumbing back from
//! the analysis worker.

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::{AnalysisEvent, AnalysisWorker};
use crate::assessment::{AnalysisOutcome, AssessmentInput, UploadedFile};
use crate::audio::VoicePreview;
use crate::progress::AnalysisProgress;

/// How long the forced 100% is held on screen before the result replaces the
/// progress display.
pub const RESULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Observable phases of the assessment view.
///
/// Failure has no phase of its own: it surfaces as an alert and drops the
/// view straight back to `Editing` with no stored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Collecting inputs; the analyze action is gated on readiness
    Editing,
    /// One request in flight, simulated progress on screen
    Submitting,
    /// A successful verdict is stored and rendered
    Complete,
}

/// Central application state
pub struct AppState {
    /// Form inputs collected so far
    pub input: AssessmentInput,

    /// Current phase of the submission state machine
    pub phase: AssessmentPhase,

    /// Simulated progress, present only while submitting
    pub progress: Option<AnalysisProgress>,

    /// Stored verdict after a successful round trip
    pub result: Option<AnalysisOutcome>,

    /// Blocking alert message, shown modally until dismissed
    pub alert: Option<String>,

    /// Voice clip preview player
    pub preview: VoicePreview,

    /// Background worker owning the async runtime
    worker: Option<AnalysisWorker>,

    /// Channel to receive finished submissions
    event_rx: Option<Receiver<AnalysisEvent>>,

    /// Id of the in-flight request; responses for any other id are stale
    active_request: Option<Uuid>,

    /// Successful outcome waiting out the reveal delay
    pending_result: Option<(AnalysisOutcome, Instant)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            input: AssessmentInput::default(),
            phase: AssessmentPhase::Editing,
            progress: None,
            result: None,
            alert: None,
            preview: VoicePreview::new(),
            worker: None,
            event_rx: None,
            active_request: None,
            pending_result: None,
        }
    }

    /// Connect the state to the backend worker.
    pub fn connect_worker(&mut self, worker: AnalysisWorker) {
        self.event_rx = Some(worker.events());
        self.worker = Some(worker);
        info!("Connected to analysis worker");
    }

    pub fn is_ready(&self) -> bool {
        self.input.is_ready()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == AssessmentPhase::Submitting
    }

    pub fn set_physiological(&mut self, file: UploadedFile) {
        info!(name = %file.name, size = file.size_bytes(), "Physiological file selected");
        self.input.physiological = Some(file);
    }

    /// Attach a voice clip, tearing down any preview of the previous one
    /// before the replacement is stored.
    pub fn set_voice(&mut self, file: UploadedFile) {
        self.preview.stop();
        info!(name = %file.name, size = file.size_bytes(), "Voice clip selected");
        self.input.voice = Some(file);
    }

    pub fn clear_voice(&mut self) {
        self.preview.stop();
        self.input.clear_voice();
    }

    /// Kick off the analysis round trip. Inert unless the form is ready and
    /// nothing is already in flight.
    pub fn start_analysis(&mut self) {
        if !self.is_ready() || self.is_submitting() {
            return;
        }
        let Some(worker) = &self.worker else {
            self.alert = Some("The analysis service is not available.".to_string());
            return;
        };

        self.result = None;
        self.pending_result = None;
        self.active_request = Some(worker.submit(self.input.clone()));
        self.progress = Some(AnalysisProgress::start());
        self.phase = AssessmentPhase::Submitting;
    }

    /// Per-frame update: advance simulated progress, reveal a held result,
    /// and drain worker events.
    pub fn poll_events(&mut self) {
        if let Some(progress) = &mut self.progress {
            progress.tick();
        }

        if let Some((outcome, held_since)) = self.pending_result.take() {
            if held_since.elapsed() >= RESULT_REVEAL_DELAY {
                self.result = Some(outcome);
                self.phase = AssessmentPhase::Complete;
                self.progress = None;
                self.active_request = None;
            } else {
                self.pending_result = Some((outcome, held_since));
            }
        }

        // Collect first, then process
        let events: Vec<AnalysisEvent> = match &self.event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AnalysisEvent) {
        if self.active_request != Some(event.request_id()) {
            debug!(request_id = %event.request_id(), "Dropping stale analysis event");
            return;
        }

        match event {
            AnalysisEvent::Completed { outcome, .. } => {
                if let Some(progress) = &mut self.progress {
                    progress.force_complete();
                }
                self.pending_result = Some((outcome, Instant::now()));
            }
            AnalysisEvent::Failed { error, .. } => {
                self.alert = Some(error.user_message());
                self.reset_submission();
            }
        }
    }

    /// Drop all submission state so the user can re-attempt from Editing.
    fn reset_submission(&mut self) {
        self.phase = AssessmentPhase::Editing;
        self.progress = None;
        self.active_request = None;
        self.pending_result = None;
        self.result = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
