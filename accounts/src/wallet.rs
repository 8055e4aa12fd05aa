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

//! Wallet identifiers.

use std::fmt::{self, Display, Formatter};

use wallet_networks::SEPARATOR;

use crate::{non_empty, ConfigurationError, WalletKind};

/// Identifier of a wallet.
///
/// Device ids of hardware and QR wallets may contain dashes themselves, so
/// wallet ids are only ever built from their parts and never parsed back
/// into this type; use [`WalletKind::detect`] to classify a wallet id
/// string.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub enum WalletId {
    /// HD wallet with a sequence number
    Hd(u32),

    /// Hardware wallet
    Hardware {
        /// Database id of the device
        device_id: String,
        /// State of the passphrase for hidden wallets
        passphrase_state: Option<String>,
    },

    /// QR wallet
    Qr {
        /// Database id of the device
        device_id: String,
        /// Hash of the master key fingerprint for hidden wallets
        xfp_hash: Option<String>,
    },

    /// Keyless wallet with the id of its share pack set
    Keyless(String),

    /// Watch-only accounts singleton
    Watching,

    /// External accounts singleton
    External,

    /// Imported accounts singleton
    Imported,
}

impl WalletId {
    /// Returns kind of the wallet
    pub fn kind(&self) -> WalletKind {
        match self {
            WalletId::Hd(_) => WalletKind::Hd,
            WalletId::Hardware { .. } => WalletKind::Hardware,
            WalletId::Qr { .. } => WalletKind::Qr,
            WalletId::Keyless(_) => WalletKind::Keyless,
            WalletId::Watching => WalletKind::Watching,
            WalletId::External => WalletKind::External,
            WalletId::Imported => WalletKind::Imported,
        }
    }
}

impl Display for WalletId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tag = self.kind().tag();
        match self {
            WalletId::Hd(n) => write!(f, "{}-{}", tag, n),
            WalletId::Hardware {
                device_id,
                passphrase_state: state,
            }
            | WalletId::Qr {
                device_id,
                xfp_hash: state,
            } => {
                write!(f, "{}-{}", tag, device_id)?;
                match non_empty(state.as_deref()) {
                    Some(state) => write!(f, "-{}", state),
                    None => Ok(()),
                }
            }
            WalletId::Keyless(pack_set_id) => write!(f, "{}-{}", tag, pack_set_id),
            WalletId::Watching | WalletId::External | WalletId::Imported => f.write_str(tag),
        }
    }
}

/// Builds id of the HD wallet with the given sequence number
pub fn build_hd_wallet_id(next_hd: u32) -> String { WalletId::Hd(next_hd).to_string() }

/// Builds id of a hardware wallet; hidden wallets carry the passphrase state
pub fn build_hw_wallet_id(device_id: &str, passphrase_state: Option<&str>) -> String {
    WalletId::Hardware {
        device_id: device_id.to_owned(),
        passphrase_state: passphrase_state.map(str::to_owned),
    }
    .to_string()
}

/// Builds id of a QR wallet; hidden wallets carry the fingerprint hash
pub fn build_qr_wallet_id(device_id: &str, xfp_hash: Option<&str>) -> String {
    WalletId::Qr {
        device_id: device_id.to_owned(),
        xfp_hash: xfp_hash.map(str::to_owned),
    }
    .to_string()
}

/// Builds id of a keyless wallet
pub fn build_keyless_wallet_id(pack_set_id: &str) -> String {
    WalletId::Keyless(pack_set_id.to_owned()).to_string()
}

/// Extracts device id from a hardware wallet id, passphrase state included
pub fn device_id_from_wallet(wallet_id: &str) -> String {
    wallet_id.replacen(&format!("{}-", WalletKind::Hardware.tag()), "", 1)
}

/// Extracts share pack set id from a keyless wallet id.
///
/// # Errors
///
/// If the wallet id has no pack set id.
pub fn keyless_pack_set_id(wallet_id: &str) -> Result<&str, ConfigurationError> {
    let prefix = format!("{}-", WalletKind::Keyless.tag());
    wallet_id
        .split(prefix.as_str())
        .nth(1)
        .filter(|pack_set_id| !pack_set_id.is_empty())
        .ok_or_else(|| ConfigurationError::NoKeylessPackSet(wallet_id.to_owned()))
}

/// Prefix of the device storage keys holding keyless wallet share packs
pub const KEYLESS_DEVICE_PACK_KEY_PREFIX: &str = "OneKey_Keyless__";

/// Builds storage key of the keyless wallet share pack on a device:
/// `OneKey_Keyless__{packSetId}`. Keys are persisted on devices and must keep
/// the prefix.
pub fn build_keyless_device_pack_key(pack_set_id: &str) -> String {
    format!("{}{}", KEYLESS_DEVICE_PACK_KEY_PREFIX, pack_set_id)
}

/// Builds name of the hidden wallet with the given number, starting from 1
pub fn build_hidden_wallet_name(hidden_wallet_num: Option<u32>) -> String {
    format!("Hidden #{}", hidden_wallet_num.filter(|num| *num > 0).unwrap_or(1))
}

/// Detects wallet fingerprints in `{xfp}--{firstTaprootXpub}` form
pub fn is_valid_wallet_xfp(xfp: &str) -> bool { xfp.len() > 8 && xfp.contains(SEPARATOR) }

/// Builds wallet fingerprint from master key fingerprint and the first
/// taproot extended public key. Returns `None` if either part is missing.
pub fn build_full_xfp(xfp: &str, first_taproot_xpub: &str) -> Option<String> {
    if xfp.is_empty() || first_taproot_xpub.is_empty() {
        return None;
    }
    Some(format!("{}{}{}", xfp.to_lowercase(), SEPARATOR, first_taproot_xpub))
}

/// Extracts master key fingerprint from a wallet fingerprint
pub fn short_xfp(xfp: &str) -> &str { xfp.split(SEPARATOR).next().unwrap_or(xfp) }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wallet_ids() {
        assert_eq!(build_hd_wallet_id(1), "hd-1");
        assert_eq!(build_hw_wallet_id("f5f9b539", None), "hw-f5f9b539");
        assert_eq!(build_hw_wallet_id("f5f9b539", Some("")), "hw-f5f9b539");
        assert_eq!(build_hw_wallet_id("f5f9b539", Some("mg2PbF")), "hw-f5f9b539-mg2PbF");
        assert_eq!(build_qr_wallet_id("1a2b", None), "qr-1a2b");
        assert_eq!(build_qr_wallet_id("1a2b", Some("9c8d")), "qr-1a2b-9c8d");
        assert_eq!(build_keyless_wallet_id("pack-1"), "hd-keyless-pack-1");
        assert_eq!(WalletId::Watching.to_string(), "watching");
        assert_eq!(WalletId::External.to_string(), "external");
        assert_eq!(WalletId::Imported.to_string(), "imported");
    }

    #[test]
    fn built_ids_have_their_kind() {
        let ids = [
            WalletId::Hd(3),
            WalletId::Hardware {
                device_id: s!("da2fb055-f3c8"),
                passphrase_state: Some(s!("state")),
            },
            WalletId::Qr {
                device_id: s!("1a2b"),
                xfp_hash: None,
            },
            WalletId::Keyless(s!("pack")),
            WalletId::Watching,
            WalletId::External,
            WalletId::Imported,
        ];
        for id in ids {
            assert_eq!(WalletKind::detect(&id.to_string()), Some(id.kind()));
        }
    }

    #[test]
    fn devices_and_packs() {
        assert_eq!(device_id_from_wallet("hw-f5f9b539-state"), "f5f9b539-state");
        assert_eq!(keyless_pack_set_id("hd-keyless-pack1"), Ok("pack1"));
        assert_eq!(
            keyless_pack_set_id("hd-keyless-"),
            Err(ConfigurationError::NoKeylessPackSet(s!("hd-keyless-")))
        );
        assert!(keyless_pack_set_id("hd-1").is_err());
        assert_eq!(build_keyless_device_pack_key("pack1"), "OneKey_Keyless__pack1");
        assert_eq!(
            build_keyless_device_pack_key(keyless_pack_set_id("hd-keyless-f5f9b539").unwrap()),
            "OneKey_Keyless__f5f9b539"
        );
    }

    #[test]
    fn hidden_wallet_names() {
        assert_eq!(build_hidden_wallet_name(None), "Hidden #1");
        assert_eq!(build_hidden_wallet_name(Some(0)), "Hidden #1");
        assert_eq!(build_hidden_wallet_name(Some(4)), "Hidden #4");
    }

    #[test]
    fn xfp() {
        let full = build_full_xfp("ABCD1234", "xpub6CgU4MYip9obRSrH3odLWT6h7C").unwrap();
        assert_eq!(full, "abcd1234--xpub6CgU4MYip9obRSrH3odLWT6h7C");
        assert!(is_valid_wallet_xfp(&full));
        assert!(!is_valid_wallet_xfp("abcd1234"));
        assert_eq!(short_xfp(&full), "abcd1234");
        assert_eq!(build_full_xfp("", "xpub"), None);
    }
}
