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

//! Fast structural classification of raw private key material.
//!
//! Given an arbitrary string the user pasted into an import form, the
//! classifier suggests networks whose key *encoding format* is consistent
//! with it. Nothing here checks the key cryptographically: suggestions are
//! advisory and must be confirmed by the network-specific key validator
//! before being acted upon. "No suggestion" is a normal outcome for partial
//! input and is represented by an empty result, never by an error.
//!
//! Classification is driven by ordered rule tables ([`key_rules`],
//! [`address_rules`]); the first matching rule wins and its candidates are
//! resolved against the [`NetworkRegistry`] supplied by the caller.

// Coding conventions
#![recursion_limit = "256"]
#![deny(dead_code, missing_docs)]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate lazy_static;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

mod address;
mod classifier;
mod rules;

pub use address::detect_network_by_address;
pub use classifier::{
    CorrelationIds, DetectedNetwork, DetectedNetworkGroup, Detection, KeyFormatClassifier, UuidV4,
};
pub use rules::{address_rules, key_rules, Candidate, Rule, Shape};
pub use wallet_networks::NetworkRegistry;
