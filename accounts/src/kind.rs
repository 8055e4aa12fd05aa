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

//! Closed taxonomy of wallet kinds and predicates over wallet and account
//! ids.

use crate::account::{wallet_id_from_account_id, URL_ACCOUNT_ID};

/// Kind of a wallet, encoded by the tag its wallet id starts with
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub enum WalletKind {
    /// Wallet derived from a seed kept by the application: `hd-{n}`
    #[display("hd")]
    Hd,

    /// Hardware device wallet: `hw-{deviceId}[-{passphraseState}]`
    #[display("hw")]
    Hardware,

    /// Air-gapped wallet communicating through QR codes:
    /// `qr-{deviceId}[-{xfpHash}]`
    #[display("qr")]
    Qr,

    /// HD wallet with the seed split into cloud-stored share packs:
    /// `hd-keyless-{packSetId}`
    #[display("hd-keyless")]
    Keyless,

    /// Singleton wallet holding watch-only accounts
    #[display("watching")]
    Watching,

    /// Singleton wallet holding accounts of externally connected wallets
    #[display("external")]
    External,

    /// Singleton wallet holding accounts with imported private keys
    #[display("imported")]
    Imported,
}

impl WalletKind {
    /// All wallet kinds
    pub const ALL: [WalletKind; 7] = [
        WalletKind::Hd,
        WalletKind::Hardware,
        WalletKind::Qr,
        WalletKind::Keyless,
        WalletKind::Watching,
        WalletKind::External,
        WalletKind::Imported,
    ];

    /// Tag starting wallet ids of this kind
    pub fn tag(self) -> &'static str {
        match self {
            WalletKind::Hd => "hd",
            WalletKind::Hardware => "hw",
            WalletKind::Qr => "qr",
            WalletKind::Keyless => "hd-keyless",
            WalletKind::Watching => "watching",
            WalletKind::External => "external",
            WalletKind::Imported => "imported",
        }
    }

    /// Detects whether there is only a single wallet of this kind, with the
    /// tag being the whole wallet id
    pub fn is_singleton(self) -> bool {
        match self {
            WalletKind::Hd | WalletKind::Hardware | WalletKind::Qr | WalletKind::Keyless => false,
            WalletKind::Watching | WalletKind::External | WalletKind::Imported => true,
        }
    }

    /// Tests whether the wallet id has this kind.
    ///
    /// Keyless wallets are HD wallets as well: `hd-keyless-...` matches both
    /// [`WalletKind::Hd`] and [`WalletKind::Keyless`].
    pub fn matches(self, wallet_id: &str) -> bool {
        let tag = self.tag();
        if self.is_singleton() {
            return wallet_id == tag;
        }
        wallet_id
            .strip_prefix(tag)
            .map(|rest| rest.starts_with('-'))
            .unwrap_or_default()
    }

    /// Detects the most specific kind of the wallet id
    pub fn detect(wallet_id: &str) -> Option<WalletKind> {
        if WalletKind::Keyless.matches(wallet_id) {
            return Some(WalletKind::Keyless);
        }
        WalletKind::ALL
            .into_iter()
            .find(|kind| kind.matches(wallet_id))
    }

    /// Detects the most specific kind of the wallet owning the account
    #[inline]
    pub fn of_account(account_id: &str) -> Option<WalletKind> {
        WalletKind::detect(wallet_id_from_account_id(account_id))
    }
}

/// Detects HD wallet ids, keyless wallets included
#[inline]
pub fn is_hd_wallet(wallet_id: &str) -> bool { WalletKind::Hd.matches(wallet_id) }

/// Detects hardware wallet ids
#[inline]
pub fn is_hw_wallet(wallet_id: &str) -> bool { WalletKind::Hardware.matches(wallet_id) }

/// Detects QR wallet ids
#[inline]
pub fn is_qr_wallet(wallet_id: &str) -> bool { WalletKind::Qr.matches(wallet_id) }

/// Detects keyless wallet ids
#[inline]
pub fn is_keyless_wallet(wallet_id: &str) -> bool { WalletKind::Keyless.matches(wallet_id) }

/// Detects the watching wallet id
#[inline]
pub fn is_watching_wallet(wallet_id: &str) -> bool { WalletKind::Watching.matches(wallet_id) }

/// Detects the external wallet id
#[inline]
pub fn is_external_wallet(wallet_id: &str) -> bool { WalletKind::External.matches(wallet_id) }

/// Detects the imported wallet id
#[inline]
pub fn is_imported_wallet(wallet_id: &str) -> bool { WalletKind::Imported.matches(wallet_id) }

/// Detects hardware or QR wallet ids
pub fn is_hw_or_qr_wallet(wallet_id: &str) -> bool {
    is_hw_wallet(wallet_id) || is_qr_wallet(wallet_id)
}

/// Detects ids of the singleton wallets: watching, external and imported
pub fn is_others_wallet(wallet_id: &str) -> bool {
    WalletKind::detect(wallet_id)
        .map(WalletKind::is_singleton)
        .unwrap_or_default()
}

/// Detects hardware or QR wallets opened with a passphrase
pub fn is_hw_hidden_wallet(wallet_id: &str, passphrase_state: Option<&str>) -> bool {
    is_hw_or_qr_wallet(wallet_id) && crate::non_empty(passphrase_state).is_some()
}

/// Detects accounts of HD wallets, keyless wallets included
#[inline]
pub fn is_hd_account(account_id: &str) -> bool { is_hd_wallet(wallet_id_from_account_id(account_id)) }

/// Detects accounts of hardware wallets
#[inline]
pub fn is_hw_account(account_id: &str) -> bool { is_hw_wallet(wallet_id_from_account_id(account_id)) }

/// Detects accounts of QR wallets
#[inline]
pub fn is_qr_account(account_id: &str) -> bool { is_qr_wallet(wallet_id_from_account_id(account_id)) }

/// Detects accounts of hardware or QR wallets
#[inline]
pub fn is_hw_or_qr_account(account_id: &str) -> bool {
    is_hw_or_qr_wallet(wallet_id_from_account_id(account_id))
}

/// Detects watch-only accounts
#[inline]
pub fn is_watching_account(account_id: &str) -> bool {
    is_watching_wallet(wallet_id_from_account_id(account_id))
}

/// Detects accounts of externally connected wallets
#[inline]
pub fn is_external_account(account_id: &str) -> bool {
    is_external_wallet(wallet_id_from_account_id(account_id))
}

/// Detects accounts with imported private keys
#[inline]
pub fn is_imported_account(account_id: &str) -> bool {
    is_imported_wallet(wallet_id_from_account_id(account_id))
}

/// Detects accounts of the singleton wallets
#[inline]
pub fn is_others_account(account_id: &str) -> bool {
    is_others_wallet(wallet_id_from_account_id(account_id))
}

/// Detects the watch-only account tracking URLs
#[inline]
pub fn is_url_account(account_id: &str) -> bool { account_id == URL_ACCOUNT_ID }
