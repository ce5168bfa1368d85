//! Ports to state owned outside this crate: the per-family connection
//! snapshot, the wallet-selection dialog, and the TON connect bridge.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ConnectError;
use crate::family::ChainFamily;

/// Connection state of one family as seen at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    pub address: Option<String>,
    pub is_connected: bool,
    /// Display hint: wallet type or name for families that expose one.
    pub wallet_icon: Option<String>,
}

impl FamilySnapshot {
    pub fn connected(address: impl Into<String>, wallet_icon: Option<&str>) -> Self {
        Self {
            address: Some(address.into()),
            is_connected: true,
            wallet_icon: wallet_icon.map(str::to_string),
        }
    }
}

/// Read access to the shared wallet state plus the two dialog setters.
///
/// Implementations own the storage; this crate only reads snapshots and
/// calls the setters from a connect trigger.
pub trait WalletStatePort: Send + Sync {
    fn connection(&self, family: ChainFamily) -> FamilySnapshot;

    fn set_select_wallet_dialog_visible(&self, visible: bool);

    fn set_connect_wallet_group_key(&self, family: ChainFamily);
}

/// TON connects through its own SDK modal instead of the shared dialog.
#[async_trait]
pub trait TonConnector: Send + Sync {
    /// Run the TON connect flow. `Ok(true)` when a session was established.
    async fn connect(&self) -> Result<bool, ConnectError>;
}
