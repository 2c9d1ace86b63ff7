//! Backend integration: the predict HTTP client and the background worker
//! that runs it off the UI thread.

mod client;
mod worker;

pub use client::ApiClient;
pub use worker::{AnalysisEvent, AnalysisWorker};
