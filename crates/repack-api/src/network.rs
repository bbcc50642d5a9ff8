// Interface and VLAN endpoints
//
// The backend applies these immediately on the appliance; there is no
// separate commit step as there is for nftables rules.

use tracing::debug;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::ids::InterfaceName;
use crate::models::{
    Ack, ApiResponse, Interface, InterfaceStatusRequest, VlanConfig, VlanIpRequest,
};

impl ApiClient {
    /// `GET /interfaces`
    pub async fn list_interfaces(&self) -> Result<ApiResponse<Vec<Interface>>, Error> {
        debug!("listing interfaces");
        self.call(Endpoint::list_interfaces()).await
    }

    /// `GET /interfaces/{name}`
    pub async fn get_interface(&self, name: &InterfaceName) -> Result<ApiResponse<Interface>, Error> {
        debug!(%name, "fetching interface");
        self.call(Endpoint::get_interface(name)).await
    }

    /// `POST /vlan`
    pub async fn configure_vlan(&self, config: &VlanConfig) -> Result<Ack, Error> {
        debug!(interface = %config.interface, link_type = ?config.link_type, "configuring VLAN");
        self.call_with(Endpoint::configure_vlan(), config).await
    }

    /// `GET /vlan/{name}`
    ///
    /// Interfaces without a stored assignment come back as access mode
    /// with `vlan_id = "0"`.
    pub async fn get_vlan_config(&self, name: &InterfaceName) -> Result<ApiResponse<VlanConfig>, Error> {
        debug!(%name, "fetching VLAN config");
        self.call(Endpoint::get_vlan_config(name)).await
    }

    /// `POST /vlan/ip`
    pub async fn add_vlan_ip(&self, request: &VlanIpRequest) -> Result<Ack, Error> {
        debug!(
            interface = %request.vlan_interface,
            count = request.ip_addresses.len(),
            "adding VLAN addresses"
        );
        self.call_with(Endpoint::add_vlan_ip(), request).await
    }

    /// `DELETE /vlan/ip/{name}`
    ///
    /// Flushes every address on the VLAN interface.
    pub async fn remove_vlan_ip(&self, name: &InterfaceName) -> Result<Ack, Error> {
        debug!(%name, "flushing VLAN addresses");
        self.call(Endpoint::remove_vlan_ip(name)).await
    }

    /// `POST /interface/status`
    pub async fn set_interface_status(&self, request: &InterfaceStatusRequest) -> Result<Ack, Error> {
        debug!(interface = %request.interface, status = ?request.status, "setting interface status");
        self.call_with(Endpoint::set_interface_status(), request).await
    }
}
