// High-level rule endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::ids::RuleId;
use crate::models::{Ack, ApiResponse, Rule};

impl ApiClient {
    /// `GET /rules`, highest priority first.
    pub async fn list_rules(&self) -> Result<ApiResponse<Vec<Rule>>, Error> {
        debug!("listing rules");
        self.call(Endpoint::list_rules()).await
    }

    /// `GET /rules/{id}`
    pub async fn get_rule(&self, id: RuleId) -> Result<ApiResponse<Rule>, Error> {
        self.call(Endpoint::get_rule(id)).await
    }

    /// `POST /rules`
    pub async fn create_rule(&self, rule: &Rule) -> Result<ApiResponse<Rule>, Error> {
        debug!(name = %rule.name, "creating rule");
        self.call_with(Endpoint::create_rule(), rule).await
    }

    /// `PUT /rules/{id}`
    pub async fn update_rule(&self, id: RuleId, rule: &Rule) -> Result<ApiResponse<Rule>, Error> {
        debug!(%id, "updating rule");
        self.call_with(Endpoint::update_rule(id), rule).await
    }

    /// `DELETE /rules/{id}`
    pub async fn delete_rule(&self, id: RuleId) -> Result<Ack, Error> {
        debug!(%id, "deleting rule");
        self.call(Endpoint::delete_rule(id)).await
    }

    /// `POST /rules/{id}/toggle`
    ///
    /// Flips `enabled` server-side. Concurrent toggles are not serialized
    /// here; whichever response resolves last reflects the final state.
    pub async fn toggle_rule(&self, id: RuleId) -> Result<ApiResponse<Rule>, Error> {
        debug!(%id, "toggling rule");
        self.call(Endpoint::toggle_rule(id)).await
    }
}
