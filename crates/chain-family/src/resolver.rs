use std::sync::Arc;

use tracing::debug;

use crate::chain_id::ChainId;
use crate::config::ChainIdConfig;
use crate::descriptor::{DialogWallet, FamilyDescriptor, TonWallet};
use crate::error::ConnectError;
use crate::family::ChainFamily;
use crate::state::{FamilySnapshot, TonConnector, WalletStatePort};
use crate::table::FamilyTable;

/// Resolves chain ids to wallet families and hands out their descriptors.
///
/// Holds no mutable state of its own: every call reads the current
/// snapshot from the injected [`WalletStatePort`].
pub struct ChainFamilyResolver {
    table: FamilyTable,
    state: Arc<dyn WalletStatePort>,
    ton: Arc<dyn TonConnector>,
}

impl ChainFamilyResolver {
    pub fn new(
        config: ChainIdConfig,
        state: Arc<dyn WalletStatePort>,
        ton: Arc<dyn TonConnector>,
    ) -> Self {
        Self {
            table: FamilyTable::new(config),
            state,
            ton,
        }
    }

    pub fn table(&self) -> &FamilyTable {
        &self.table
    }

    pub fn is_solana_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_solana_chain(chain_id)
    }

    pub fn is_fractal_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_fractal_chain(chain_id)
    }

    pub fn is_aptos_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_aptos_chain(chain_id)
    }

    pub fn is_ton_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_ton_chain(chain_id)
    }

    pub fn is_starknet_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_starknet_chain(chain_id)
    }

    pub fn is_fuel_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_fuel_chain(chain_id)
    }

    pub fn is_not_evm_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_not_evm_chain(chain_id)
    }

    pub fn is_evm_chain(&self, chain_id: &ChainId) -> bool {
        self.table.is_evm_chain(chain_id)
    }

    /// Descriptor of the family `chain_id` belongs to, or `None` for
    /// missing, unset and unrecognised ids.
    pub fn current_connect_chain_info<'a>(
        &self,
        chain_id: impl Into<Option<&'a ChainId>>,
    ) -> Option<Box<dyn FamilyDescriptor>> {
        let chain_id = chain_id.into()?;
        let Some(family) = self.table.classify(chain_id) else {
            debug!(%chain_id, "no wallet family for chain");
            return None;
        };
        debug!(%chain_id, %family, "resolved wallet family");
        Some(self.descriptor(family))
    }

    /// Validate `address` with the rules of the family `chain_id` resolves
    /// to. False for an empty address, a missing id, or no family.
    pub fn check_address<'a>(
        &self,
        address: &str,
        chain_id: impl Into<Option<&'a ChainId>>,
    ) -> bool {
        let Some(chain_id) = chain_id.into() else {
            return false;
        };
        if address.is_empty() || chain_id.is_unset() {
            return false;
        }
        self.current_connect_chain_info(chain_id)
            .is_some_and(|descriptor| descriptor.validate(address))
    }

    /// Run the connect trigger of the family `chain_id` resolves to.
    ///
    /// Returns `Ok(true)` only when the trigger reports an established
    /// session. Missing ids and unknown chains do nothing and return
    /// `Ok(false)`. Trigger errors propagate as-is.
    pub async fn open_connect_modal<'a>(
        &self,
        chain_id: impl Into<Option<&'a ChainId>>,
    ) -> Result<bool, ConnectError> {
        let Some(chain_id) = chain_id.into().filter(|id| !id.is_unset()) else {
            return Ok(false);
        };
        let Some(descriptor) = self.current_connect_chain_info(chain_id) else {
            return Ok(false);
        };
        let outcome = descriptor.open_connect().await?;
        Ok(outcome.is_success())
    }

    fn descriptor(&self, family: ChainFamily) -> Box<dyn FamilyDescriptor> {
        let snapshot = self.snapshot(family);
        match family {
            ChainFamily::Ton => Box::new(TonWallet::new(snapshot, Arc::clone(&self.ton))),
            _ => Box::new(DialogWallet::new(family, snapshot, Arc::clone(&self.state))),
        }
    }

    /// Read the family's state and fill in the derived fields.
    fn snapshot(&self, family: ChainFamily) -> FamilySnapshot {
        let mut snapshot = self.state.connection(family);
        let mainnet_icon = self
            .table
            .config()
            .mainnet(family)
            .map(ToString::to_string);

        match family {
            ChainFamily::Evm => {
                snapshot.is_connected = snapshot
                    .address
                    .as_deref()
                    .is_some_and(|address| !address.is_empty());
                snapshot.wallet_icon = snapshot.wallet_icon.map(|icon| icon.to_lowercase());
            }
            ChainFamily::Solana => {
                snapshot.wallet_icon = snapshot
                    .wallet_icon
                    .filter(|name| !name.is_empty())
                    .or(mainnet_icon);
            }
            ChainFamily::Starknet | ChainFamily::Ton | ChainFamily::Fuel => {
                snapshot.wallet_icon = mainnet_icon;
            }
            ChainFamily::Fractal | ChainFamily::Aptos => {}
        }
        snapshot
    }
}
