// Processing log endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::ids::LogId;
use crate::models::{Ack, ApiResponse, LogEntry, LogFilter};

impl ApiClient {
    /// `GET /logs`, newest first, with `pagination` in the envelope.
    pub async fn list_logs(&self, filter: &LogFilter) -> Result<ApiResponse<Vec<LogEntry>>, Error> {
        debug!(?filter, "listing logs");
        self.call(Endpoint::list_logs(filter)).await
    }

    /// `GET /logs/{id}`
    pub async fn get_log(&self, id: LogId) -> Result<ApiResponse<LogEntry>, Error> {
        self.call(Endpoint::get_log(id)).await
    }

    /// `DELETE /logs[?days=N]`
    ///
    /// With `days` only entries older than that many days are purged;
    /// without it the whole log is cleared.
    pub async fn clear_logs(&self, days: Option<u32>) -> Result<Ack, Error> {
        debug!(?days, "clearing logs");
        self.call(Endpoint::clear_logs(days)).await
    }
}
