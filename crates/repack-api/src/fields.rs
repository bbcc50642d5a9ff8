// Packet field endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::ids::FieldId;
use crate::models::{Ack, ApiResponse, Field};

impl ApiClient {
    /// `GET /fields`
    pub async fn list_fields(&self) -> Result<ApiResponse<Vec<Field>>, Error> {
        debug!("listing fields");
        self.call(Endpoint::list_fields()).await
    }

    /// `GET /fields/{id}`
    pub async fn get_field(&self, id: FieldId) -> Result<ApiResponse<Field>, Error> {
        self.call(Endpoint::get_field(id)).await
    }

    /// `POST /fields`
    pub async fn create_field(&self, field: &Field) -> Result<ApiResponse<Field>, Error> {
        debug!(name = %field.name, "creating field");
        self.call_with(Endpoint::create_field(), field).await
    }

    /// `PUT /fields/{id}`
    pub async fn update_field(&self, id: FieldId, field: &Field) -> Result<ApiResponse<Field>, Error> {
        debug!(%id, "updating field");
        self.call_with(Endpoint::update_field(id), field).await
    }

    /// `DELETE /fields/{id}`
    pub async fn delete_field(&self, id: FieldId) -> Result<Ack, Error> {
        debug!(%id, "deleting field");
        self.call(Endpoint::delete_field(id)).await
    }
}
