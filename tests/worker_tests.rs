//! End-to-end tests of the analysis worker against a stub backend.

use std::time::Duration;

use axum::extract::Multipart;
use axum::{routing::post, Json, Router};
use serde_json::json;

use stresscheck::api::{AnalysisEvent, AnalysisWorker};
use stresscheck::assessment::{AssessmentInput, UploadedFile};
use stresscheck::config::Config;

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

fn ready_input() -> AssessmentInput {
    let mut input = AssessmentInput::default();
    input.physiological = Some(UploadedFile::new(
        "hrv.csv",
        b"t,hr\n0,72\n1,74\n".to_vec(),
        "text/csv",
    ));
    input.set_rating(0, 2);
    input.set_rating(3, 1);
    input
}

/// Stub predict endpoint that echoes back which multipart fields it saw.
async fn echo_fields(mut multipart: Multipart) -> Json<serde_json::Value> {
    let mut fields = Vec::new();
    let mut responses = String::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "dass21_responses" {
            responses = field.text().await.unwrap_or_default();
        }
        fields.push(name);
    }
    Json(json!({
        "success": true,
        "stress_level": "low",
        "fields": fields,
        "dass21_responses": responses,
    }))
}

/// Serve a stub backend on an ephemeral port, returning its origin.
fn spawn_backend(rt: &tokio::runtime::Runtime, app: Router) -> String {
    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    })
}

#[test]
fn round_trip_delivers_completed_event() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = Router::new().route("/predict", post(echo_fields));
    let api_origin = spawn_backend(&rt, app);

    let config = Config {
        api_origin,
        ..Config::default()
    };
    let worker = AnalysisWorker::new(&config).unwrap();
    let request_id = worker.submit(ready_input());

    let event = worker.events().recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(event.request_id(), request_id);

    match event {
        AnalysisEvent::Completed { outcome, .. } => {
            assert_eq!(outcome.result.stress_level(), Some("low"));
            // Backend saw the expected multipart fields and the joined ratings
            let fields = &outcome.result.extra["fields"];
            assert!(fields.as_array().unwrap().contains(&json!("physiological_file")));
            assert!(fields.as_array().unwrap().contains(&json!("dass21_responses")));
            assert!(!fields.as_array().unwrap().contains(&json!("voice_audio")));
            assert_eq!(
                outcome.result.extra["dass21_responses"],
                json!("2,0,0,1,0,0,0")
            );
        }
        AnalysisEvent::Failed { error, .. } => panic!("unexpected failure: {error}"),
    }
}

#[test]
fn voice_clip_is_forwarded_when_present() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = Router::new().route("/predict", post(echo_fields));
    let api_origin = spawn_backend(&rt, app);

    let config = Config {
        api_origin,
        ..Config::default()
    };
    let worker = AnalysisWorker::new(&config).unwrap();

    let mut input = ready_input();
    input.voice = Some(UploadedFile::new("clip.wav", vec![0u8; 64], "audio/wav"));
    worker.submit(input);

    let event = worker.events().recv_timeout(RECV_TIMEOUT).unwrap();
    match event {
        AnalysisEvent::Completed { outcome, .. } => {
            let fields = &outcome.result.extra["fields"];
            assert!(fields.as_array().unwrap().contains(&json!("voice_audio")));
        }
        AnalysisEvent::Failed { error, .. } => panic!("unexpected failure: {error}"),
    }
}

#[test]
fn declared_failure_surfaces_backend_message() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = Router::new().route(
        "/predict",
        post(|| async { Json(json!({"success": false, "message": "signal too short"})) }),
    );
    let api_origin = spawn_backend(&rt, app);

    let config = Config {
        api_origin,
        ..Config::default()
    };
    let worker = AnalysisWorker::new(&config).unwrap();
    let request_id = worker.submit(ready_input());

    let event = worker.events().recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(event.request_id(), request_id);
    match event {
        AnalysisEvent::Failed { error, .. } => {
            assert_eq!(error.user_message(), "signal too short");
        }
        AnalysisEvent::Completed { .. } => panic!("expected a failure event"),
    }
}

#[test]
fn unreachable_backend_reports_transport_failure() {
    // Nothing listens on the discard port.
    let config = Config {
        api_origin: "http://127.0.0.1:9".to_string(),
        ..Config::default()
    };
    let worker = AnalysisWorker::new(&config).unwrap();
    let request_id = worker.submit(ready_input());

    let event = worker.events().recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(event.request_id(), request_id);
    assert!(matches!(event, AnalysisEvent::Failed { .. }));
}
