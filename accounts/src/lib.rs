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

//! Wallet and account identifiers of a multi-chain wallet.
//!
//! Identifiers produced here are persisted as primary keys of the account
//! store. Separator, segment order and the quirks of the parsers are part of
//! the storage format and must not change without a data migration.
//!
//! - wallet ids: `hd-{n}`, `hw-{deviceId}[-{passphraseState}]`,
//!   `qr-{deviceId}[-{xfpHash}]`, `hd-keyless-{packSetId}` and the
//!   `watching`, `external` and `imported` singletons;
//! - account ids: `{walletId}--{usedPath}[--{idSuffix}]`;
//! - indexed account ids: `{walletId}--{index}`.

// Coding conventions
#![recursion_limit = "256"]
#![deny(dead_code, missing_docs)]

#[macro_use]
extern crate amplify;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

pub mod account;
pub mod compat;
pub mod derivation;
mod error;
pub mod external;
pub mod kind;
pub mod wallet;

pub use account::{
    build_hd_account_id, build_imported_account_id, build_indexed_account_id,
    build_lightning_account_id, build_watching_account_id, parse_account_id,
    parse_indexed_account_id, wallet_id_from_account_id, AccountDeriveType, HdAccountParams,
    ImportedAccountParams, IndexedAccount, ParsedAccountId, WatchingAccountParams,
    URL_ACCOUNT_ID,
};
pub use compat::{
    account_compatible_network, is_account_compatible_with_network, AccountNetworks,
};
pub use derivation::{hd_account_path_index, PathIndexSource};
pub use error::{ConfigurationError, Error};
pub use external::{build_external_account_id, ExternalConnection, ExternalConnectionInfo};
pub use kind::WalletKind;
pub use wallet::WalletId;

// Treats empty strings the same way as missing values
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
