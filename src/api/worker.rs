use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender};
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::assessment::{AnalysisOutcome, AssessmentInput};
use crate::config::Config;
use crate::{Result, StressCheckError};

/// Outcome of one submission, delivered back to the UI thread.
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    Completed {
        request_id: Uuid,
        outcome: AnalysisOutcome,
    },
    Failed {
        request_id: Uuid,
        error: StressCheckError,
    },
}

impl AnalysisEvent {
    pub fn request_id(&self) -> Uuid {
        match self {
            AnalysisEvent::Completed { request_id, .. } => *request_id,
            AnalysisEvent::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Owns the async runtime the predict round trip runs on.
///
/// The UI never blocks: `submit` spawns one task and returns a request id;
/// results come back over a channel polled each frame. There is no
/// cancellation once a request is in flight.
pub struct AnalysisWorker {
    runtime: Runtime,
    client: Arc<super::ApiClient>,
    event_tx: Sender<AnalysisEvent>,
    event_rx: Receiver<AnalysisEvent>,
}

impl AnalysisWorker {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| StressCheckError::Runtime(e.to_string()))?;

        let (event_tx, event_rx) = bounded(4);

        Ok(Self {
            runtime,
            client: Arc::new(super::ApiClient::new(config)),
            event_tx,
            event_rx,
        })
    }

    /// Fire one analysis request in the background.
    pub fn submit(&self, input: AssessmentInput) -> Uuid {
        let request_id = Uuid::new_v4();
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();

        self.runtime.spawn(async move {
            let event = match client.predict(&input).await {
                Ok(result) => AnalysisEvent::Completed {
                    request_id,
                    outcome: AnalysisOutcome::new(result),
                },
                Err(error) => {
                    tracing::warn!(%request_id, %error, "Analysis request failed");
                    AnalysisEvent::Failed { request_id, error }
                }
            };
            // Receiver gone means the view was torn down; nothing to do.
            let _ = tx.send(event);
        });

        request_id
    }

    /// Channel the UI polls for finished submissions.
    pub fn events(&self) -> Receiver<AnalysisEvent> {
        self.event_rx.clone()
    }
}
