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

//! Multi-chain wallet identifier, derivation path and key format libraries.
//!
//! The facade re-exports the member crates of the workspace:
//! - [`networks`]: network ids and the injected network registry;
//! - [`hd`]: derivation path template algebra;
//! - [`keyformat`]: advisory classification of pasted private keys;
//! - [`accounts`]: wallet kinds and the wallet/account identifier codec.

// Coding conventions
#![recursion_limit = "256"]
#![deny(dead_code, missing_docs, warnings)]

pub extern crate keyformat;
pub extern crate wallet_accounts as accounts;
pub extern crate wallet_hd as hd;
pub extern crate wallet_networks as networks;

pub use accounts::{ConfigurationError, Error, WalletId, WalletKind};
pub use hd::ValidationError;
pub use keyformat::{detect_network_by_address, Detection, KeyFormatClassifier};
pub use networks::{NetworkId, NetworkInfo, NetworkRegistry};
