// Dry-run endpoint

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::models::{TestRequest, TestResult};

impl ApiClient {
    /// `POST /test`
    ///
    /// Runs a hex-encoded packet through field extraction, rule matching
    /// and repackaging without touching live traffic. The result is not
    /// wrapped in the usual envelope.
    pub async fn run_test(&self, request: &TestRequest) -> Result<TestResult, Error> {
        debug!(
            bytes = request.hex_packet.len() / 2,
            rule_id = ?request.rule_id,
            "running test"
        );
        self.call_with(Endpoint::run_test(), request).await
    }
}
