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

//! Account path conventions of the BIP-43 family and their use for bitcoin
//! and lightning accounts.

use crate::{ValidationError, HARDENED_MARKER, ROOT_MARKER};

/// Registered coin types (second hardened level of BIP-44 paths)
pub mod coin_type {
    /// Bitcoin mainnet
    pub const BTC: &str = "0";
    /// Bitcoin testnet and signet
    pub const TBTC: &str = "1";
    /// Ethereum and EVM networks
    pub const ETH: &str = "60";
    /// Lightning network on top of bitcoin mainnet
    pub const LIGHTNING: &str = "81297820149147";
    /// Lightning network on top of bitcoin testnet
    pub const LIGHTNING_TESTNET: &str = "81297820149148";

    /// Detects whether the coin type is one of the lightning coin types
    pub fn is_lightning(coin_type: &str) -> bool {
        coin_type == LIGHTNING || coin_type == LIGHTNING_TESTNET
    }
}

/// BIP-43 purpose level of an account derivation path
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Purpose {
    /// Account-based P2PKH derivation; also used by most non-bitcoin
    /// networks.
    ///
    /// `m / 44' / coin_type' / account'`
    #[display("44'")]
    Bip44,

    /// Account-based legacy P2WPKH-in-P2SH derivation.
    ///
    /// `m / 49' / coin_type' / account'`
    #[display("49'")]
    Bip49,

    /// Account-based native P2WPKH derivation.
    ///
    /// `m / 84' / coin_type' / account'`
    #[display("84'")]
    Bip84,

    /// Account-based single-key P2TR derivation.
    ///
    /// `m / 86' / coin_type' / account'`
    #[display("86'")]
    Bip86,
}

impl Purpose {
    /// Returns path segment for the purpose level
    pub fn segment(self) -> &'static str {
        match self {
            Purpose::Bip44 => "44'",
            Purpose::Bip49 => "49'",
            Purpose::Bip84 => "84'",
            Purpose::Bip86 => "86'",
        }
    }

    /// Detects purpose of an absolute derivation path
    pub fn from_path(path: &str) -> Option<Purpose> {
        let mut segments = path.split('/');
        if segments.next() != Some(ROOT_MARKER) {
            return None;
        }
        match segments.next()? {
            "44'" => Some(Purpose::Bip44),
            "49'" => Some(Purpose::Bip49),
            "84'" => Some(Purpose::Bip84),
            "86'" => Some(Purpose::Bip86),
            _ => None,
        }
    }
}

// Replaces purpose level `from` with `to`, then swaps the coin type right
// after it if it equals `coin_from`. Paths not matching are returned with
// only the first substitution applied.
fn convert_account_path(
    path: &str,
    from: Purpose,
    to: Purpose,
    coin_from: &str,
    coin_to: &str,
) -> String {
    let mut segments = path.split('/').map(str::to_owned).collect::<Vec<_>>();
    if segments.len() < 2 || segments[0] != ROOT_MARKER {
        return path.to_owned();
    }
    if segments[1] == from.segment() {
        segments[1] = to.segment().to_owned();
    }
    if segments.len() > 2
        && segments[1] == to.segment()
        && segments[2] == format!("{}{}", coin_from, HARDENED_MARKER)
    {
        segments[2] = format!("{}{}", coin_to, HARDENED_MARKER);
    }
    segments.join("/")
}

/// Converts native segwit bitcoin account path into the path of the
/// lightning account sharing the same account index:
/// `m/84'/0'/0'` becomes `m/44'/81297820149147'/0'`.
///
/// Only BIP-84 paths are converted; other purposes keep their purpose level
/// and produce paths which [`ln_to_btc_path`] does not bring back.
pub fn btc_to_ln_path(path: &str, is_testnet: bool) -> String {
    let (coin_from, coin_to) = if is_testnet {
        (coin_type::TBTC, coin_type::LIGHTNING_TESTNET)
    } else {
        (coin_type::BTC, coin_type::LIGHTNING)
    };
    convert_account_path(path, Purpose::Bip84, Purpose::Bip44, coin_from, coin_to)
}

/// Converts lightning account path back into native segwit bitcoin account
/// path: `m/44'/81297820149147'/0'` becomes `m/84'/0'/0'`.
pub fn ln_to_btc_path(path: &str, is_testnet: bool) -> String {
    let (coin_from, coin_to) = if is_testnet {
        (coin_type::LIGHTNING_TESTNET, coin_type::TBTC)
    } else {
        (coin_type::LIGHTNING, coin_type::BTC)
    };
    convert_account_path(path, Purpose::Bip44, Purpose::Bip84, coin_from, coin_to)
}

/// Truncates UTXO derivation path to its account level: the root marker
/// followed by exactly three hardened levels.
///
/// # Errors
///
/// If the path does not start with `m`, has less than three levels or any
/// of the first three levels is not hardened.
pub fn format_utxo_path(path: &str) -> Result<String, ValidationError> {
    let segments = path.split('/').collect::<Vec<_>>();
    if segments[0] != ROOT_MARKER {
        return Err(ValidationError::NoRoot(path.to_owned()));
    }
    if segments.len() < 4 {
        return Err(ValidationError::TooShallow(path.to_owned()));
    }
    if let Some(level) = (1..=3).find(|level| !segments[*level].ends_with(HARDENED_MARKER)) {
        return Err(ValidationError::UnhardenedLevel(path.to_owned(), level));
    }
    Ok(segments[..4].join("/"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lightning_paths() {
        assert_eq!(btc_to_ln_path("m/84'/0'/0'", false), "m/44'/81297820149147'/0'");
        assert_eq!(btc_to_ln_path("m/84'/1'/3'", true), "m/44'/81297820149148'/3'");
        assert_eq!(ln_to_btc_path("m/44'/81297820149147'/0'", false), "m/84'/0'/0'");
        assert_eq!(ln_to_btc_path("m/44'/81297820149148'/3'", true), "m/84'/1'/3'");
        for index in 0..5 {
            let path = format!("m/84'/0'/{}'", index);
            assert_eq!(ln_to_btc_path(&btc_to_ln_path(&path, false), false), path);
        }
    }

    #[test]
    fn lightning_paths_other_purposes() {
        // BIP-86 path keeps its purpose and coin type
        assert_eq!(btc_to_ln_path("m/86'/0'/0'", false), "m/86'/0'/0'");
        // BIP-44 bitcoin path becomes lightning path, but goes back as BIP-84
        let ln = btc_to_ln_path("m/44'/0'/0'", false);
        assert_eq!(ln, "m/44'/81297820149147'/0'");
        assert_eq!(ln_to_btc_path(&ln, false), "m/84'/0'/0'");
        // mainnet coin type is not touched in testnet mode
        assert_eq!(btc_to_ln_path("m/84'/0'/0'", true), "m/44'/0'/0'");
    }

    #[test]
    fn utxo_path() {
        assert_eq!(format_utxo_path("m/84'/0'/0'/0/0").unwrap(), "m/84'/0'/0'");
        assert_eq!(format_utxo_path("m/44'/2'/5'").unwrap(), "m/44'/2'/5'");
        assert_eq!(
            format_utxo_path("84'/0'/0'/0/0").unwrap_err(),
            ValidationError::NoRoot(s!("84'/0'/0'/0/0"))
        );
        assert_eq!(
            format_utxo_path("m/84'/0'").unwrap_err(),
            ValidationError::TooShallow(s!("m/84'/0'"))
        );
        assert_eq!(
            format_utxo_path("m/84'/0'/0/0/0").unwrap_err(),
            ValidationError::UnhardenedLevel(s!("m/84'/0'/0/0/0"), 3)
        );
        assert!(format_utxo_path("").is_err());
    }

    #[test]
    fn purposes() {
        assert_eq!(Purpose::from_path("m/86'/0'/0'"), Some(Purpose::Bip86));
        assert_eq!(Purpose::from_path("m/1'/0'"), None);
        assert_eq!(Purpose::from_path("44'/0'"), None);
        assert_eq!(Purpose::Bip84.to_string(), Purpose::Bip84.segment());
        assert!(coin_type::is_lightning(coin_type::LIGHTNING_TESTNET));
        assert!(!coin_type::is_lightning(coin_type::BTC));
    }
}
