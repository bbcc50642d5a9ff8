// nftables rule endpoints
//
// CRUD and toggle only change the stored rule set. Nothing reaches the
// kernel until `apply_nft_rules` commits every enabled rule at once.

use tracing::{debug, info};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::ids::NftRuleId;
use crate::models::{Ack, ApiResponse, NftRule};

impl ApiClient {
    /// `GET /nftrules`, ordered by priority. Each entry carries a `summary`.
    pub async fn list_nft_rules(&self) -> Result<ApiResponse<Vec<NftRule>>, Error> {
        debug!("listing nftables rules");
        self.call(Endpoint::list_nft_rules()).await
    }

    /// `GET /nftrules/{id}`
    pub async fn get_nft_rule(&self, id: NftRuleId) -> Result<ApiResponse<NftRule>, Error> {
        self.call(Endpoint::get_nft_rule(id)).await
    }

    /// `POST /nftrules`
    pub async fn create_nft_rule(&self, rule: &NftRule) -> Result<ApiResponse<NftRule>, Error> {
        debug!(name = %rule.name, action = %rule.action, "creating nftables rule");
        self.call_with(Endpoint::create_nft_rule(), rule).await
    }

    /// `PUT /nftrules/{id}`
    pub async fn update_nft_rule(
        &self,
        id: NftRuleId,
        rule: &NftRule,
    ) -> Result<ApiResponse<NftRule>, Error> {
        debug!(%id, "updating nftables rule");
        self.call_with(Endpoint::update_nft_rule(id), rule).await
    }

    /// `DELETE /nftrules/{id}`
    pub async fn delete_nft_rule(&self, id: NftRuleId) -> Result<Ack, Error> {
        debug!(%id, "deleting nftables rule");
        self.call(Endpoint::delete_nft_rule(id)).await
    }

    /// `POST /nftrules/{id}/toggle`
    pub async fn toggle_nft_rule(&self, id: NftRuleId) -> Result<ApiResponse<NftRule>, Error> {
        debug!(%id, "toggling nftables rule");
        self.call(Endpoint::toggle_nft_rule(id)).await
    }

    /// `POST /nftrules/apply`
    pub async fn apply_nft_rules(&self) -> Result<Ack, Error> {
        info!("applying nftables rule set");
        self.call(Endpoint::apply_nft_rules()).await
    }
}
