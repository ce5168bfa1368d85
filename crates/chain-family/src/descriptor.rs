//! Per-family operation bundles returned by resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::address;
use crate::error::ConnectError;
use crate::family::ChainFamily;
use crate::state::{FamilySnapshot, TonConnector, WalletStatePort};

/// What a connect trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The wallet-selection dialog was shown; the session, if any, is set
    /// up later by the dialog itself.
    DialogOpened,
    /// The trigger itself established a session.
    Connected,
    /// The trigger finished without a session.
    NotConnected,
}

impl ConnectOutcome {
    /// Whether the trigger reported success on its own.
    pub fn is_success(&self) -> bool {
        matches!(self, ConnectOutcome::Connected)
    }
}

/// Connection state and operations of one resolved family.
#[async_trait]
pub trait FamilyDescriptor: Send + Sync {
    fn family(&self) -> ChainFamily;

    fn snapshot(&self) -> &FamilySnapshot;

    fn current_address(&self) -> Option<&str> {
        self.snapshot().address.as_deref()
    }

    fn is_connected(&self) -> bool {
        self.snapshot().is_connected
    }

    fn wallet_icon(&self) -> Option<&str> {
        self.snapshot().wallet_icon.as_deref()
    }

    /// Family-specific address check. Never fails.
    fn validate(&self, address: &str) -> bool {
        address::validate_address(address, self.family())
    }

    /// Start this family's connect flow.
    async fn open_connect(&self) -> Result<ConnectOutcome, ConnectError>;
}

/// A family whose connect flow is the shared wallet-selection dialog.
pub struct DialogWallet {
    family: ChainFamily,
    snapshot: FamilySnapshot,
    state: Arc<dyn WalletStatePort>,
}

impl DialogWallet {
    pub fn new(
        family: ChainFamily,
        snapshot: FamilySnapshot,
        state: Arc<dyn WalletStatePort>,
    ) -> Self {
        Self {
            family,
            snapshot,
            state,
        }
    }
}

#[async_trait]
impl FamilyDescriptor for DialogWallet {
    fn family(&self) -> ChainFamily {
        self.family
    }

    fn snapshot(&self) -> &FamilySnapshot {
        &self.snapshot
    }

    async fn open_connect(&self) -> Result<ConnectOutcome, ConnectError> {
        debug!(family = %self.family, "opening wallet selection dialog");
        self.state.set_select_wallet_dialog_visible(true);
        self.state.set_connect_wallet_group_key(self.family);
        Ok(ConnectOutcome::DialogOpened)
    }
}

/// TON, which connects through its own SDK modal.
pub struct TonWallet {
    snapshot: FamilySnapshot,
    connector: Arc<dyn TonConnector>,
}

impl TonWallet {
    pub fn new(snapshot: FamilySnapshot, connector: Arc<dyn TonConnector>) -> Self {
        Self {
            snapshot,
            connector,
        }
    }
}

#[async_trait]
impl FamilyDescriptor for TonWallet {
    fn family(&self) -> ChainFamily {
        ChainFamily::Ton
    }

    fn snapshot(&self) -> &FamilySnapshot {
        &self.snapshot
    }

    async fn open_connect(&self) -> Result<ConnectOutcome, ConnectError> {
        debug!("starting TON connect");
        let connected = self.connector.connect().await?;
        debug!(connected, "TON connect finished");
        Ok(if connected {
            ConnectOutcome::Connected
        } else {
            ConnectOutcome::NotConnected
        })
    }
}
