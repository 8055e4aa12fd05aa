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

use tracing::debug;
use wallet_networks::NetworkRegistry;

use crate::classifier::{resolve_candidates, DetectedNetwork};
use crate::rules::{address_rules, first_match};

/// Suggests a network for the address from its textual shape.
///
/// Only addresses with self-describing prefixes (`bitcoincash:`, bech32
/// human-readable parts, `0x` EVM addresses and alike) are recognized;
/// everything else yields an empty list. Like the key classifier this is an
/// advisory pre-filter, superseded by network-specific address validation.
pub fn detect_network_by_address(registry: &NetworkRegistry, address: &str) -> Vec<DetectedNetwork> {
    let address = address.trim();
    match first_match(address_rules(), address) {
        Some(rule) => {
            debug!(rule = rule.name, "address format rule matched");
            resolve_candidates(registry, rule.name, rule.candidates)
        }
        None => vec![],
    }
}
