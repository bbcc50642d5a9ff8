//! Network command handlers (interfaces, VLANs, link state).

use tabled::Tabled;

use repack_api::ApiClient;
use repack_api::ids::InterfaceName;
use repack_api::models::{
    Interface, InterfaceStatusRequest, LinkState, LinkType, VlanConfig, VlanIpRequest,
};

use crate::cli::{GlobalOpts, LinkStateArg, NetworkArgs, NetworkCommand, VlanMode};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Addresses")]
    addresses: String,
    #[tabled(rename = "Up")]
    up: String,
}

impl From<&Interface> for InterfaceRow {
    fn from(i: &Interface) -> Self {
        Self {
            name: i.name.to_string(),
            mac: util::or_dash(&i.hardware_addr).to_owned(),
            addresses: i.ip_addresses.join(", "),
            up: util::yes_no(i.is_up),
        }
    }
}

fn interface_detail(i: &Interface) -> String {
    let addrs = if i.ip_addresses.is_empty() {
        "  (none)".to_owned()
    } else {
        i.ip_addresses
            .iter()
            .map(|a| format!("  - {a}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "Name:      {}\nMAC:       {}\nUp:        {}\nAddresses:\n{addrs}",
        i.name,
        util::or_dash(&i.hardware_addr),
        i.is_up,
    )
}

fn vlan_detail(v: &VlanConfig) -> String {
    [
        format!("Interface:   {}", v.interface),
        format!("Mode:        {}", util::or_dash(v.link_type.as_str())),
        format!("VLAN ID:     {}", util::or_dash(&v.vlan_id)),
        format!("Trunk VLANs: {}", util::or_dash(&v.trunk_vlan_id)),
        format!("Native VLAN: {}", util::or_dash(&v.default_id)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn list_interfaces(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let interfaces = util::items(client.list_interfaces().await?);
    let out = output::render_list(
        &global.output,
        &interfaces,
        |i| InterfaceRow::from(i),
        |i| i.name.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(
    client: &ApiClient,
    args: NetworkArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NetworkCommand::Interfaces => list_interfaces(client, global).await,

        NetworkCommand::Interface { name } => {
            let name = InterfaceName::new(name);
            let iface = util::found(
                client.get_interface(&name).await,
                "interface",
                &name,
                "network interfaces",
            )?;
            let out = output::render_single(&global.output, &iface, interface_detail, |i| {
                i.name.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NetworkCommand::Vlan { name } => {
            let name = InterfaceName::new(name);
            // The backend answers with an access-mode default for unconfigured ports.
            let vlan = client
                .get_vlan_config(&name)
                .await?
                .data
                .unwrap_or_else(|| VlanConfig {
                    interface: name.clone(),
                    ..VlanConfig::default()
                });
            let out = output::render_single(&global.output, &vlan, vlan_detail, |v| {
                v.interface.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NetworkCommand::ConfigureVlan {
            interface,
            mode,
            vlan_id,
            trunk_vlans,
            default_id,
        } => {
            let link_type = match mode {
                VlanMode::Access => LinkType::Access,
                VlanMode::Trunk => LinkType::Trunk,
            };
            if link_type == LinkType::Trunk && trunk_vlans.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "trunk-vlans".into(),
                    reason: "trunk mode needs at least one VLAN".into(),
                });
            }
            let config = VlanConfig {
                interface: InterfaceName::new(interface),
                link_type,
                vlan_id,
                trunk_vlan_id: trunk_vlans,
                default_id,
            };
            let ack = client.configure_vlan(&config).await?;
            util::acknowledge(&ack, "VLAN configuration applied", global.quiet);
            Ok(())
        }

        NetworkCommand::AddIp { interface, ips } => {
            let request = VlanIpRequest {
                vlan_interface: InterfaceName::new(interface),
                ip_addresses: ips,
            };
            let ack = client.add_vlan_ip(&request).await?;
            util::acknowledge(&ack, "Addresses assigned", global.quiet);
            Ok(())
        }

        NetworkCommand::FlushIp { interface } => {
            if !util::confirm(&format!("Remove every address from {interface}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.remove_vlan_ip(&InterfaceName::new(interface)).await?;
            util::acknowledge(&ack, "Addresses removed", global.quiet);
            Ok(())
        }

        NetworkCommand::Status { interface, state } => {
            let status = match state {
                LinkStateArg::Up => LinkState::Up,
                LinkStateArg::Down => LinkState::Down,
            };
            let request = InterfaceStatusRequest {
                interface: InterfaceName::new(interface),
                status,
            };
            let ack = client.set_interface_status(&request).await?;
            util::acknowledge(&ack, "Interface status updated", global.quiet);
            Ok(())
        }
    }
}
