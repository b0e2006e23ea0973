// Shared fixtures for the road client behavior tests.

use road_core::config::ApiCredentials;
use road_core::road_client::RoadStatusClient;

use std::sync::{Mutex, OnceLock};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub const TEST_APP_ID: &str = "12345678";
pub const TEST_APP_KEY: &str = "89101123ABCDEFGH";

// Verbatim upstream response for the A2 corridor, extra fields included.
pub const A2_BODY: &str = r#"[{"$type":"Tfl.Api.Presentation.Entities.RoadCorridor, Tfl.Api.Presentation.Entities","id":"a2","displayName":"A2","statusSeverity":"Good","statusSeverityDescription":"No Exceptional Delays","bounds":"[[-0.0857,51.44091],[0.17118,51.49438]]","envelope":"[[-0.0857,51.44091],[-0.0857,51.49438],[0.17118,51.49438],[0.17118,51.44091],[-0.0857,51.44091]]","url":"/Road/a2"}]"#;

pub fn test_credentials() -> ApiCredentials {
    ApiCredentials::new(TEST_APP_ID, TEST_APP_KEY).expect("test credentials are valid")
}

/// A client pointed at a mock server, with the pooled transport the entry
/// point would normally provide.
pub fn client_for(base_url: &str) -> RoadStatusClient {
    RoadStatusClient::new(reqwest::Client::new(), base_url, test_credentials())
        .expect("client construction against mock server")
}

/// Log sink that records per-thread so concurrently running tests cannot
/// pollute each other's counts. The test harness runs every test on its
/// own thread, and the tokio test runtime polls the future on that same
/// thread, so filtering by thread id isolates each test's emissions.
pub struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl CapturingLogger {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Error-level messages logged from the calling thread.
    pub fn thread_errors(&self) -> Vec<String> {
        let current = thread::current().id();
        self.records
            .lock()
            .expect("logger mutex")
            .iter()
            .filter(|(id, level, _)| *id == current && *level == Level::Error)
            .map(|(_, _, message)| message.clone())
            .collect()
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().expect("logger mutex").push((
            thread::current().id(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<&'static CapturingLogger> = OnceLock::new();

/// Install the capturing logger (once per test binary) and return it.
pub fn capture_logs() -> &'static CapturingLogger {
    *LOGGER.get_or_init(|| {
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger::new()));
        log::set_logger(logger).expect("no other logger installed in this binary");
        log::set_max_level(LevelFilter::Debug);
        logger
    })
}
