use std::sync::{Arc, Mutex};
use std::time::Duration;

use flourish_engine::{
    CheckReply, ClipboardError, ClipboardWriter, EngineEvent, EngineHandle, LookupClient,
    LookupError, LookupSettings, ReqwestLookupClient,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingClipboard {
    fail: bool,
    writes: Mutex<Vec<String>>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("no clipboard in tests".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct StaticLookup {
    affected: bool,
}

#[async_trait::async_trait]
impl LookupClient for StaticLookup {
    async fn check(&self, asn: &str) -> Result<CheckReply, LookupError> {
        Ok(CheckReply {
            affected: self.affected,
            message: None,
            asn: asn.parse().ok(),
        })
    }
}

#[test]
fn copy_commands_write_and_report_back() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let (engine, events) =
        EngineHandle::with_parts(Arc::new(StaticLookup { affected: false }), clipboard.clone());

    engine.copy(3, "@inproceedings{loops2024}");

    let event = events.recv_timeout(RECV_TIMEOUT).expect("copy event");
    assert_eq!(event, EngineEvent::CopyWritten { control: 3 });
    assert_eq!(
        clipboard.writes.lock().unwrap().as_slice(),
        ["@inproceedings{loops2024}"]
    );
}

#[test]
fn failed_writes_surface_as_copy_failed() {
    let clipboard = Arc::new(RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    });
    let (engine, events) =
        EngineHandle::with_parts(Arc::new(StaticLookup { affected: false }), clipboard);

    engine.copy(0, "snippet");

    match events.recv_timeout(RECV_TIMEOUT).expect("copy event") {
        EngineEvent::CopyFailed { control, message } => {
            assert_eq!(control, 0);
            assert!(!message.is_empty());
        }
        other => panic!("expected CopyFailed, got {other:?}"),
    }
}

#[test]
fn revert_timers_fire_independently() {
    let (engine, events) = EngineHandle::with_parts(
        Arc::new(StaticLookup { affected: false }),
        Arc::new(RecordingClipboard::default()),
    );

    // The longer timer is scheduled first; the shorter one still wins.
    engine.schedule_revert(1, Duration::from_millis(400));
    engine.schedule_revert(2, Duration::from_millis(20));

    let first = events.recv_timeout(RECV_TIMEOUT).expect("first revert");
    let second = events.recv_timeout(RECV_TIMEOUT).expect("second revert");
    assert_eq!(first, EngineEvent::RevertElapsed { control: 2 });
    assert_eq!(second, EngineEvent::RevertElapsed { control: 1 });
}

#[test]
fn lookups_report_their_result() {
    let (engine, events) = EngineHandle::with_parts(
        Arc::new(StaticLookup { affected: true }),
        Arc::new(RecordingClipboard::default()),
    );

    engine.lookup("64500");

    match events.recv_timeout(RECV_TIMEOUT).expect("lookup event") {
        EngineEvent::LookupFinished { result } => {
            let reply = result.expect("lookup ok");
            assert!(reply.affected);
            assert_eq!(reply.asn, Some(64500));
        }
        other => panic!("expected LookupFinished, got {other:?}"),
    }
}

#[test]
fn lookups_reach_a_real_backend() {
    // End to end through the engine thread against a mock server. The
    // runtime must outlive the server it hosts.
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check_as"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "affected": false })),
            )
            .mount(&server)
            .await;
        server
    });

    let client = ReqwestLookupClient::new(LookupSettings {
        endpoint: server.uri(),
        ..LookupSettings::default()
    });
    let (engine, events) =
        EngineHandle::with_parts(Arc::new(client), Arc::new(RecordingClipboard::default()));

    engine.lookup("64501");

    match events.recv_timeout(RECV_TIMEOUT).expect("lookup event") {
        EngineEvent::LookupFinished { result } => {
            assert!(!result.expect("lookup ok").affected);
        }
        other => panic!("expected LookupFinished, got {other:?}"),
    }
}
