// Multi-chain wallet identifier & key format libraries
// Written in 2026 by
//     Wallet core developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the Apache-2.0 License
// along with this software.
// If not, see <https://opensource.org/licenses/Apache-2.0>.

//! Names of the protocol families ("implementations") networks belong to.
//!
//! Implementation names form the first segment of every network id.

/// EVM-compatible networks
pub const EVM: &str = "evm";
/// Bitcoin mainnet
pub const BTC: &str = "btc";
/// Bitcoin testnet
pub const TBTC: &str = "tbtc";
/// Bitcoin signet
pub const SBTC: &str = "sbtc";
/// Bitcoin Cash
pub const BCH: &str = "bch";
/// Litecoin
pub const LTC: &str = "ltc";
/// Dogecoin
pub const DOGE: &str = "doge";
/// Neurai
pub const NEURAI: &str = "neurai";
/// Lightning network over bitcoin mainnet
pub const LIGHTNING: &str = "lightning";
/// Lightning network over bitcoin testnet
pub const LIGHTNING_TESTNET: &str = "tlightning";
/// Cardano
pub const ADA: &str = "ada";
/// Algorand
pub const ALGO: &str = "algo";
/// Cosmos SDK chains
pub const COSMOS: &str = "cosmos";
/// Polkadot/Substrate chains
pub const DOT: &str = "dot";
/// Kaspa
pub const KASPA: &str = "kaspa";
/// Aptos
pub const APTOS: &str = "aptos";
/// Sui
pub const SUI: &str = "sui";
/// Conflux core space
pub const CFX: &str = "cfx";
/// BenFen
pub const BENFEN: &str = "bfc";
/// Nervos CKB
pub const NERVOS: &str = "nervos";
/// TON
pub const TON: &str = "ton";
/// TRON
pub const TRON: &str = "tron";
/// Nexa
pub const NEXA: &str = "nexa";
/// Solana
pub const SOL: &str = "sol";
/// Filecoin
pub const FIL: &str = "fil";
/// NEAR protocol
pub const NEAR: &str = "near";
/// XRP ledger
pub const XRP: &str = "xrp";
/// Nostr identities
pub const NOSTR: &str = "nostr";
/// Virtual network aggregating all others
pub const ALL_NETWORKS: &str = "allnetworks";
