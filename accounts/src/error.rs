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

use wallet_hd::ValidationError;

/// Errors caused by missing or inconsistent identifying material passed to
/// identifier builders
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum ConfigurationError {
    /// watching account requires either an address or an extended public
    /// key
    NoWatchingMaterial,

    /// imported account requires either a public key or an extended public
    /// key
    NoImportedKey,

    /// HD account requires either a derivation path or a path template
    NoPathSource,

    /// HD account built from a path template requires an account index
    NoPathIndex,

    /// account index {0} is out of range
    IndexOutOfRange(i64),

    /// `{0}` is not a valid indexed account id
    InvalidIndexedAccountId(String),

    /// account id `{0}` has no derivation path segment
    NoAccountPath(String),

    /// WalletConnect account requires a network id
    NoExternalNetwork,

    /// external account requires a WalletConnect session, an EIP-6963
    /// provider or an injected provider
    NoExternalConnection,

    /// wallet id `{0}` has no keyless pack set id
    NoKeylessPackSet(String),

    /// network id is not defined
    NoNetworkId,

    /// fresh address key requires a segwit extended public key
    NoSegwitXpub,

    /// unknown account derivation type `{0}`
    UnknownDeriveType(String),
}

/// Errors building account identifiers
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    /// Missing identifying material
    #[from]
    Configuration(ConfigurationError),

    /// Malformed derivation path or path template
    #[from]
    Validation(ValidationError),
}
