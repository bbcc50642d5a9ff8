// ── Typed identifiers ──
//
// Each resource gets its own id type so a rule id can never be passed
// where an nftables rule id is expected. All of them render as the bare
// value when interpolated into a path.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(v: u64) -> Self {
                Self(v)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a packet [`Field`](crate::models::Field).
    FieldId
);
numeric_id!(
    /// Identifier of a high-level [`Rule`](crate::models::Rule).
    RuleId
);
numeric_id!(
    /// Identifier of an [`NftRule`](crate::models::NftRule).
    NftRuleId
);
numeric_id!(
    /// Identifier of a processing [`LogEntry`](crate::models::LogEntry).
    LogId
);

/// Network interface name (`eth0`, `vlan_10`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InterfaceName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for InterfaceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InterfaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
