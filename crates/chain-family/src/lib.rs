//! Chain family resolution for a multi-chain bridge front-end.
//!
//! A chain id is classified into exactly one wallet family (EVM, Solana,
//! Starknet, TON, Fuel, Fractal or Aptos). The resolved family's descriptor
//! exposes its connection state, its address validator and the trigger that
//! opens its connect flow.
//!
//! Wallet state, the selection dialog and the TON connect bridge live
//! outside this crate and are injected through the ports in [`state`].

pub mod address;
pub mod chain_id;
pub mod config;
pub mod decimals;
pub mod descriptor;
pub mod error;
pub mod family;
pub mod resolver;
pub mod state;
pub mod table;

pub use chain_id::{ChainId, NumberLike};
pub use config::{ChainIdConfig, FamilyChainIds};
pub use decimals::is_middle_decimals;
pub use descriptor::{ConnectOutcome, DialogWallet, FamilyDescriptor, TonWallet};
pub use error::{ConfigError, ConnectError};
pub use family::ChainFamily;
pub use resolver::ChainFamilyResolver;
pub use state::{FamilySnapshot, TonConnector, WalletStatePort};
pub use table::FamilyTable;
