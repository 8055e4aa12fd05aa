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

//! Network identifiers and the read-only network metadata registry shared by
//! the account identifier codec and the key format classifier.
//!
//! Network ids have the form `{impl}--{chainId}`, where `impl` names the
//! protocol family (EVM, UTXO, Solana-style, ...) the network belongs to.
//! The registry is constructed once by the application and passed by
//! reference to everything that needs network metadata; nothing in the
//! workspace reaches for a global network table.

// Coding conventions
#![recursion_limit = "256"]
#![deny(dead_code, missing_docs)]

#[macro_use]
extern crate amplify;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

mod id;
pub mod impls;
mod presets;
mod registry;

pub use id::{network_impl, NetworkId, NetworkIdError};
pub use registry::{NetworkInfo, NetworkRegistry, RegistryError};

/// Separator joining the segments of network, wallet and account
/// identifiers.
///
/// Identifiers using it are persisted as primary keys, so the value must
/// never change without a data migration.
pub const SEPARATOR: &str = "--";

/// Network id of the virtual network aggregating all other networks.
pub const ALL_NETWORKS_ID: &str = "allnetworks--0";

/// Network id of bitcoin mainnet.
pub const BTC_NETWORK_ID: &str = "btc--0";

/// Network id of bitcoin testnet.
pub const TBTC_NETWORK_ID: &str = "tbtc--0";

/// Network id of bitcoin signet.
pub const SBTC_NETWORK_ID: &str = "sbtc--0";

/// Detects whether the network id refers to the all-networks aggregate.
#[inline]
pub fn is_all_network(network_id: &str) -> bool { network_id == ALL_NETWORKS_ID }

/// Detects whether the network id refers to one of the bitcoin networks
/// (mainnet, testnet or signet).
pub fn is_btc_network(network_id: &str) -> bool {
    matches!(network_id, BTC_NETWORK_ID | TBTC_NETWORK_ID | SBTC_NETWORK_ID)
}

/// Detects whether the network id belongs to the EVM implementation.
#[inline]
pub fn is_evm_network(network_id: &str) -> bool { network_impl(network_id) == impls::EVM }

/// Detects whether the implementation is one of the lightning ones (mainnet
/// or testnet).
#[inline]
pub fn is_lightning_impl(impl_name: &str) -> bool {
    impl_name == impls::LIGHTNING || impl_name == impls::LIGHTNING_TESTNET
}
