use std::fmt;

use serde::{Deserialize, Serialize};

/// Wallet families: groups of chains that share one connection mechanism
/// and one address format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChainFamily {
    Evm,
    Solana,
    Starknet,
    Ton,
    Fuel,
    Fractal,
    Aptos,
}

impl ChainFamily {
    /// Non-EVM families in resolution priority order. EVM is always tried
    /// last, as the catch-all.
    pub const NON_EVM_PRIORITY: [ChainFamily; 6] = [
        ChainFamily::Ton,
        ChainFamily::Fuel,
        ChainFamily::Solana,
        ChainFamily::Starknet,
        ChainFamily::Fractal,
        ChainFamily::Aptos,
    ];

    /// Key recorded as the wallet-selection dialog's default group.
    pub fn group_key(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "EVM",
            ChainFamily::Solana => "SOLANA",
            ChainFamily::Starknet => "STARKNET",
            ChainFamily::Ton => "TON",
            ChainFamily::Fuel => "FUEL",
            ChainFamily::Fractal => "FRACTAL",
            ChainFamily::Aptos => "APTOS",
        }
    }

    /// Whether the connect flow for this family is the shared wallet
    /// selection dialog (every family except TON).
    pub fn uses_select_dialog(&self) -> bool {
        !matches!(self, ChainFamily::Ton)
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_key())
    }
}
