//! Chain id configuration.
//!
//! The defaults mirror the network keys used by the bridge front-end. A TOML
//! file may override any subset of families:
//!
//! ```toml
//! evm_extra = ["zksync", "zksync_test", "scroll"]
//!
//! [solana]
//! mainnet = "SOLANA_MAIN"
//! testnets = ["SOLANA_DEV"]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain_id::ChainId;
use crate::error::ConfigError;
use crate::family::ChainFamily;

/// The reserved identifiers of one non-EVM family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FamilyChainIds {
    pub mainnet: Option<ChainId>,
    pub testnets: Vec<ChainId>,
}

impl FamilyChainIds {
    fn new(mainnet: Option<&str>, testnets: &[&str]) -> Self {
        Self {
            mainnet: mainnet.map(ChainId::from),
            testnets: testnets.iter().copied().map(ChainId::from).collect(),
        }
    }

    /// Mainnet first, then testnets in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &ChainId> {
        self.mainnet.iter().chain(self.testnets.iter())
    }

    pub fn contains(&self, chain_id: &ChainId) -> bool {
        self.ids().any(|id| id == chain_id)
    }
}

/// Static family-membership configuration, loaded once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainIdConfig {
    pub ton: FamilyChainIds,
    pub fuel: FamilyChainIds,
    pub solana: FamilyChainIds,
    pub starknet: FamilyChainIds,
    pub fractal: FamilyChainIds,
    pub aptos: FamilyChainIds,
    /// Non-numeric chains that are EVM-compatible (L2s with named ids).
    pub evm_extra: Vec<ChainId>,
}

impl Default for ChainIdConfig {
    fn default() -> Self {
        Self {
            ton: FamilyChainIds::new(Some("TON_MAIN"), &["TON_TEST"]),
            fuel: FamilyChainIds::new(Some("FUEL_MAIN"), &["FUEL_TEST"]),
            solana: FamilyChainIds::new(
                Some("SOLANA_MAIN"),
                &["SOLANA_DEV", "ECLIPSE_TEST", "SONIC_TEST"],
            ),
            starknet: FamilyChainIds::new(Some("SN_MAIN"), &["SN_SEPOLIA"]),
            fractal: FamilyChainIds::new(None, &["FRACTAL_TEST"]),
            aptos: FamilyChainIds::new(None, &["MOVEMENT_TEST"]),
            evm_extra: [
                "zksync",
                "zksync_test",
                "immutableX",
                "immutableX_test",
                "loopring",
                "loopring_test",
            ]
            .into_iter()
            .map(ChainId::from)
            .collect(),
        }
    }
}

impl ChainIdConfig {
    /// Parse and validate a TOML document. Families it leaves out keep their
    /// default ids.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&input)
    }

    /// Reserved ids for a non-EVM family; `None` for EVM, which has no
    /// reserved set.
    pub fn family(&self, family: ChainFamily) -> Option<&FamilyChainIds> {
        match family {
            ChainFamily::Evm => None,
            ChainFamily::Ton => Some(&self.ton),
            ChainFamily::Fuel => Some(&self.fuel),
            ChainFamily::Solana => Some(&self.solana),
            ChainFamily::Starknet => Some(&self.starknet),
            ChainFamily::Fractal => Some(&self.fractal),
            ChainFamily::Aptos => Some(&self.aptos),
        }
    }

    /// Mainnet id of a family, used as its fallback wallet icon.
    pub fn mainnet(&self, family: ChainFamily) -> Option<&ChainId> {
        self.family(family).and_then(|ids| ids.mainnet.as_ref())
    }

    /// Reject empty ids and ids claimed by two non-EVM families.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut owners: HashMap<&ChainId, ChainFamily> = HashMap::new();

        for family in ChainFamily::NON_EVM_PRIORITY {
            let Some(ids) = self.family(family) else {
                continue;
            };
            for id in ids.ids() {
                if id.is_unset() {
                    return Err(ConfigError::EmptyChainId(family));
                }
                if let Some(&first) = owners.get(id) {
                    if first != family {
                        return Err(ConfigError::OverlappingFamilies {
                            id: id.clone(),
                            first,
                            second: family,
                        });
                    }
                }
                owners.insert(id, family);
            }
        }

        if self.evm_extra.iter().any(ChainId::is_unset) {
            return Err(ConfigError::EmptyChainId(ChainFamily::Evm));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ChainIdConfig::default().validate().unwrap();
    }

    #[test]
    fn solana_has_four_ids() {
        let config = ChainIdConfig::default();
        assert_eq!(config.solana.ids().count(), 4);
        assert!(config.solana.contains(&ChainId::from("ECLIPSE_TEST")));
    }

    #[test]
    fn fractal_and_aptos_have_no_mainnet() {
        let config = ChainIdConfig::default();
        assert!(config.mainnet(ChainFamily::Fractal).is_none());
        assert!(config.mainnet(ChainFamily::Aptos).is_none());
        assert_eq!(
            config.mainnet(ChainFamily::Starknet),
            Some(&ChainId::from("SN_MAIN"))
        );
    }

    #[test]
    fn evm_has_no_reserved_ids() {
        assert!(ChainIdConfig::default().family(ChainFamily::Evm).is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ChainIdConfig::from_toml_str(
            r#"
            [starknet]
            mainnet = "SN_MAIN"
            testnets = ["SN_GOERLI"]
            "#,
        )
        .unwrap();
        assert!(config.starknet.contains(&ChainId::from("SN_GOERLI")));
        assert!(!config.starknet.contains(&ChainId::from("SN_SEPOLIA")));
        assert_eq!(config.ton, ChainIdConfig::default().ton);
    }

    #[test]
    fn numeric_ids_in_toml() {
        let config = ChainIdConfig::from_toml_str(
            r#"
            [fractal]
            testnets = [9999]
            "#,
        )
        .unwrap();
        assert!(config.fractal.contains(&ChainId::Numeric(9999)));
    }

    #[test]
    fn overlapping_families_rejected() {
        let result = ChainIdConfig::from_toml_str(
            r#"
            [fuel]
            mainnet = "TON_MAIN"
            "#,
        );
        match result {
            Err(ConfigError::OverlappingFamilies { first, second, .. }) => {
                assert_eq!(first, ChainFamily::Ton);
                assert_eq!(second, ChainFamily::Fuel);
            }
            other => panic!("expected overlap error, got {other:?}"),
        }
    }

    #[test]
    fn empty_id_rejected() {
        let result = ChainIdConfig::from_toml_str(
            r#"
            [aptos]
            testnets = [""]
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::EmptyChainId(ChainFamily::Aptos))
        ));
    }

    #[test]
    fn unknown_field_rejected() {
        let result = ChainIdConfig::from_toml_str("bitcoin = []");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = ChainIdConfig::load("/nonexistent/chain-ids.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
