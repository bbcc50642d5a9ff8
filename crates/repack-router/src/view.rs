//! View identifiers.

use std::fmt;

use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// A console view. Each one owns exactly one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, EnumIter, EnumCount)]
pub enum View {
    /// Interfaces and VLANs.
    #[default]
    Network,
    /// Low-level nftables rules and the apply action.
    #[serde(rename = "NFTRules")]
    NftRules,
    /// High-level packet rules and fields.
    Rules,
    /// Dry-run a packet through the rule engine.
    Test,
    /// Processing log.
    Logs,
}

impl View {
    /// Canonical path of this view.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Network => "/network",
            Self::NftRules => "/nftrules",
            Self::Rules => "/rules",
            Self::Test => "/test",
            Self::Logs => "/logs",
        }
    }

    /// Route name, as shown in navigation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::NftRules => "NFTRules",
            Self::Rules => "Rules",
            Self::Test => "Test",
            Self::Logs => "Logs",
        }
    }

    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::Network => 0,
            Self::NftRules => 1,
            Self::Rules => 2,
            Self::Test => 3,
            Self::Logs => 4,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
