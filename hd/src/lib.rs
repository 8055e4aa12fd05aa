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

//! Derivation path algebra for multi-chain hierarchical deterministic
//! wallets.
//!
//! Paths are handled as strings in the `m/44'/60'/0'/0/0` notation: some
//! networks use coin types which do not fit into BIP-32 child numbers, so
//! nothing here converts a path into binary derivation form. Includes path
//! templates with a single index placeholder, conversions between bitcoin
//! and lightning account paths and UTXO account path validation.

// Coding conventions
#![recursion_limit = "256"]
#![deny(dead_code, missing_docs)]

#[macro_use]
extern crate amplify;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

mod error;
mod path;
pub mod standards;

pub use error::ValidationError;
pub use path::{
    beautify_path_template, build_path_from_template, build_utxo_address_rel_path,
    find_index_from_template, normalize_path_template, remove_path_last_segment,
    slice_path_template, SlicedTemplate, INDEX_PLACEHOLDER, WILDCARD,
};
pub use standards::{btc_to_ln_path, format_utxo_path, ln_to_btc_path, Purpose};

/// Root marker starting every absolute derivation path
pub const ROOT_MARKER: &str = "m";

/// Marker of a hardened derivation path segment
pub const HARDENED_MARKER: char = '\'';
