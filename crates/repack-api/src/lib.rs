// repack-api: Async client for the packet-repackage configuration backend

pub mod client;
pub mod endpoint;
pub mod error;
pub mod ids;
pub mod models;
pub mod transport;

mod fields;
mod logs;
mod network;
mod nftrules;
mod rules;
mod test_mode;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::Error;
pub use ids::{FieldId, InterfaceName, LogId, NftRuleId, RuleId};
pub use transport::{ApiConfig, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT};
