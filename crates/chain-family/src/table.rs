//! The family membership table: every `is_*_chain` predicate and the
//! ordered classification built on them.

use crate::chain_id::{is_truthy_number, ChainId};
use crate::config::ChainIdConfig;
use crate::family::ChainFamily;

/// Immutable classification table built from a [`ChainIdConfig`].
#[derive(Debug, Clone)]
pub struct FamilyTable {
    config: ChainIdConfig,
}

impl Default for FamilyTable {
    fn default() -> Self {
        Self::new(ChainIdConfig::default())
    }
}

impl FamilyTable {
    pub fn new(config: ChainIdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChainIdConfig {
        &self.config
    }

    /// Membership in a reserved non-EVM family by strict equality.
    /// Always false for EVM and for unset ids.
    pub fn is_family_chain(&self, chain_id: &ChainId, family: ChainFamily) -> bool {
        if chain_id.is_unset() {
            return false;
        }
        self.config
            .family(family)
            .is_some_and(|ids| ids.contains(chain_id))
    }

    pub fn is_solana_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Solana)
    }

    pub fn is_ton_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Ton)
    }

    pub fn is_starknet_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Starknet)
    }

    pub fn is_fuel_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Fuel)
    }

    pub fn is_fractal_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Fractal)
    }

    pub fn is_aptos_chain(&self, chain_id: &ChainId) -> bool {
        self.is_family_chain(chain_id, ChainFamily::Aptos)
    }

    /// Listed in the EVM extra table (case-insensitive) or reads as a
    /// nonzero number.
    ///
    /// The numeric fallback is deliberately loose: `"0x1"` or `"  7 "` are
    /// EVM too. It does not look at the reserved non-EVM ids, so callers
    /// wanting a single answer should use [`FamilyTable::classify`].
    pub fn is_evm_chain(&self, chain_id: &ChainId) -> bool {
        if chain_id.is_unset() {
            return false;
        }
        let listed = self
            .config
            .evm_extra
            .iter()
            .any(|id| id.eq_ignore_case(chain_id));
        listed || is_truthy_number(chain_id)
    }

    /// Any of the six non-EVM predicates.
    pub fn is_not_evm_chain(&self, chain_id: &ChainId) -> bool {
        self.non_evm_family(chain_id).is_some()
    }

    /// First non-EVM family claiming the id, in priority order.
    fn non_evm_family(&self, chain_id: &ChainId) -> Option<ChainFamily> {
        ChainFamily::NON_EVM_PRIORITY
            .into_iter()
            .find(|family| self.is_family_chain(chain_id, *family))
    }

    /// Resolve an id to exactly one family, or `None`.
    ///
    /// Order: TON, Fuel, Solana, Starknet, Fractal, Aptos, then the EVM
    /// fallback.
    pub fn classify(&self, chain_id: &ChainId) -> Option<ChainFamily> {
        self.non_evm_family(chain_id)
            .or_else(|| self.is_evm_chain(chain_id).then_some(ChainFamily::Evm))
    }
}
