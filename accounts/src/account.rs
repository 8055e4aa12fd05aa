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

//! Account and indexed account identifiers.

use std::str::FromStr;

use wallet_hd::{btc_to_ln_path, build_path_from_template};
use wallet_networks::{is_lightning_impl, SEPARATOR};

use crate::{non_empty, ConfigurationError, Error, WalletKind};

/// Account id of the watch-only account tracking URLs
pub const URL_ACCOUNT_ID: &str = "watching--global-url-account";

/// Default prefix of account names
pub const DEFAULT_ACCOUNT_NAME: &str = "Account";

// Trailing change and address levels stripped from UTXO account paths
const DEFAULT_ADDRESS_LEVELS: &str = "/0/0";

/// Identifying material of a watch-only account
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct WatchingAccountParams<'a> {
    /// Coin type of the network
    pub coin_type: &'a str,
    /// Watched address
    pub address: Option<&'a str>,
    /// Watched extended public key, preferred over the address
    pub xpub: Option<&'a str>,
    /// Address encoding distinguishing accounts with the same key
    pub address_encoding: Option<&'a str>,
    /// Whether this is the URL tracking account
    pub is_url_account: bool,
}

/// Identifying material of an account with imported private key
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ImportedAccountParams<'a> {
    /// Coin type of the network
    pub coin_type: &'a str,
    /// Public key of the imported private key
    pub pub_key: Option<&'a str>,
    /// Extended public key, preferred over the public key
    pub xpub: Option<&'a str>,
    /// Address encoding distinguishing accounts with the same key
    pub address_encoding: Option<&'a str>,
    /// Address, for networks deriving several addresses from one key
    pub address: Option<&'a str>,
}

/// Identifying material of an account derived in an HD or hardware wallet
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct HdAccountParams<'a> {
    /// Implementation of the account network
    pub network_impl: Option<&'a str>,
    /// Id of the wallet deriving the account
    pub wallet_id: &'a str,
    /// Full derivation path; takes precedence over template and index
    pub path: Option<&'a str>,
    /// Derivation path template
    pub template: Option<&'a str>,
    /// Account index substituted into the template
    pub index: Option<u32>,
    /// Suffix telling apart accounts derived by alternative conventions
    /// (e.g. `LedgerLive`)
    pub id_suffix: Option<&'a str>,
    /// Whether the network is UTXO-based
    pub is_utxo: bool,
}

/// Account id split into its segments
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParsedAccountId<'a> {
    /// Id of the wallet owning the account
    pub wallet_id: &'a str,
    /// Derivation path, or coin type for non-derived accounts
    pub used_path: Option<&'a str>,
    /// Third segment: id suffix of HD accounts, public key or address of
    /// non-derived accounts
    pub id_suffix: Option<&'a str>,
}

/// Logical account slot of a wallet
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct IndexedAccount {
    /// Wallet id, with separators of multi-segment ids dropped
    pub wallet_id: String,
    /// Account index
    pub index: u32,
}

fn join(segments: &[&str]) -> String { segments.join(SEPARATOR) }

/// Builds id of a watch-only account:
/// `watching--{coinType}--{xpub|address}[--{addressEncoding}]`.
///
/// # Errors
///
/// If neither address nor extended public key is given for a non-URL
/// account.
pub fn build_watching_account_id(params: &WatchingAccountParams) -> Result<String, ConfigurationError> {
    if params.is_url_account {
        return Ok(URL_ACCOUNT_ID.to_owned());
    }
    let key = non_empty(params.xpub)
        .or_else(|| non_empty(params.address))
        .ok_or(ConfigurationError::NoWatchingMaterial)?;
    let mut segments = vec![WalletKind::Watching.tag(), params.coin_type, key];
    segments.extend(non_empty(params.address_encoding));
    Ok(join(&segments))
}

/// Builds id of an account with imported private key:
/// `imported--{coinType}--{xpub|pub}[--{addressEncoding}][--{address}]`.
///
/// # Errors
///
/// If neither public key nor extended public key is given.
pub fn build_imported_account_id(params: &ImportedAccountParams) -> Result<String, ConfigurationError> {
    let key = non_empty(params.xpub)
        .or_else(|| non_empty(params.pub_key))
        .ok_or(ConfigurationError::NoImportedKey)?;
    let mut segments = vec![WalletKind::Imported.tag(), params.coin_type, key];
    segments.extend(non_empty(params.address_encoding));
    segments.extend(non_empty(params.address));
    Ok(join(&segments))
}

/// Builds id of a derived account: `{walletId}--{path}[--{idSuffix}]`.
///
/// The path is taken as is or built from the template and the index. Paths
/// of UTXO and lightning accounts stop at the account level, so the default
/// `/0/0` address levels are stripped from them.
///
/// # Errors
///
/// If neither path nor template with index is given, or the template is
/// malformed.
pub fn build_hd_account_id(params: &HdAccountParams) -> Result<String, Error> {
    let mut path = match non_empty(params.path) {
        Some(path) => path.to_owned(),
        None => {
            let template = non_empty(params.template).ok_or(ConfigurationError::NoPathSource)?;
            let index = params.index.ok_or(ConfigurationError::NoPathIndex)?;
            build_path_from_template(template, index)?
        }
    };
    let is_lightning = params.network_impl.map(is_lightning_impl).unwrap_or_default();
    if params.is_utxo || is_lightning {
        if let Some(account_path) = path.strip_suffix(DEFAULT_ADDRESS_LEVELS) {
            path = account_path.to_owned();
        }
    }
    let mut segments = vec![params.wallet_id, path.as_str()];
    segments.extend(non_empty(params.id_suffix));
    Ok(join(&segments))
}

/// Builds id of the indexed account: `{walletId}--{index}`.
///
/// # Errors
///
/// If the index is negative or does not fit 32 bits.
pub fn build_indexed_account_id(wallet_id: &str, index: i64) -> Result<String, ConfigurationError> {
    let index = u32::try_from(index).map_err(|_| ConfigurationError::IndexOutOfRange(index))?;
    Ok(format!("{}{}{}", wallet_id, SEPARATOR, index))
}

/// Splits account id into wallet id, used path and id suffix, by position.
/// Segments past the third one are ignored.
pub fn parse_account_id(account_id: &str) -> ParsedAccountId<'_> {
    let mut segments = account_id.split(SEPARATOR);
    ParsedAccountId {
        wallet_id: segments.next().unwrap_or_default(),
        used_path: segments.next(),
        id_suffix: segments.next(),
    }
}

/// Parses indexed account id: the last segment is the index, and all the
/// preceding segments are concatenated into the wallet id *without* the
/// separator. Persisted ids rely on this behaviour.
///
/// # Errors
///
/// If the id has no separator or its last segment is not a valid index.
pub fn parse_indexed_account_id(indexed_account_id: &str) -> Result<IndexedAccount, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidIndexedAccountId(indexed_account_id.to_owned());
    let mut segments = indexed_account_id.split(SEPARATOR).collect::<Vec<_>>();
    if segments.len() < 2 {
        return Err(invalid());
    }
    let index = segments
        .pop()
        .and_then(|index| index.parse().ok())
        .ok_or_else(invalid)?;
    Ok(IndexedAccount {
        wallet_id: segments.concat(),
        index,
    })
}

/// Returns id of the wallet owning the account
pub fn wallet_id_from_account_id(account_id: &str) -> &str {
    account_id.split(SEPARATOR).next().unwrap_or_default()
}

/// Builds id of the lightning account paired with a native segwit bitcoin
/// account: `hd-1--m/84'/0'/0'` becomes `hd-1--m/44'/81297820149147'/0'`.
/// Segments after the path are dropped.
///
/// # Errors
///
/// If the account id has no path segment.
pub fn build_lightning_account_id(account_id: &str, is_testnet: bool) -> Result<String, ConfigurationError> {
    let parsed = parse_account_id(account_id);
    let path = parsed
        .used_path
        .ok_or_else(|| ConfigurationError::NoAccountPath(account_id.to_owned()))?;
    Ok(join(&[parsed.wallet_id, &btc_to_ln_path(path, is_testnet)]))
}

/// Builds name of the indexed account: `Account #{pathIndex + 1}`
pub fn build_indexed_account_name(path_index: u32) -> String {
    build_hd_account_name(path_index, DEFAULT_ACCOUNT_NAME)
}

/// Builds name of a derived account: `{namePrefix} #{pathIndex + 1}`
pub fn build_hd_account_name(path_index: u32, name_prefix: &str) -> String {
    format!("{} #{}", name_prefix, u64::from(path_index) + 1)
}

/// Builds name of a non-derived account: `{mainName} #{nextAccountId}`
pub fn build_base_account_name(main_name: Option<&str>, next_account_id: u32) -> String {
    format!("{} #{}", main_name.unwrap_or(DEFAULT_ACCOUNT_NAME), next_account_id)
}

/// Builds key of a per-account, per-network value: `{accountId}_{networkId}`
pub fn build_account_value_key(account_id: &str, network_id: &str) -> String {
    format!("{}_{}", account_id, network_id)
}

/// Splits per-account, per-network value key into account id and network id
pub fn parse_account_value_key(key: &str) -> (&str, Option<&str>) {
    let mut parts = key.split('_');
    (parts.next().unwrap_or_default(), parts.next())
}

/// Builds key of the fresh address state of a bitcoin account:
/// `{networkId}__{xpubSegwit}`.
///
/// # Errors
///
/// If the segwit extended public key is empty.
pub fn build_btc_fresh_address_key(network_id: &str, xpub_segwit: &str) -> Result<String, ConfigurationError> {
    if xpub_segwit.is_empty() {
        return Err(ConfigurationError::NoSegwitXpub);
    }
    Ok(format!("{}__{}", network_id, xpub_segwit))
}

/// Convention used for deriving account addresses
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum AccountDeriveType {
    /// Default convention of the network
    #[display("default")]
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    Default,

    /// Ledger Live compatible derivation
    #[display("ledgerLive")]
    #[cfg_attr(feature = "serde", serde(rename = "ledgerLive"))]
    LedgerLive,

    /// BIP-86 taproot derivation
    #[display("BIP86")]
    #[cfg_attr(feature = "serde", serde(rename = "BIP86"))]
    Bip86,

    /// BIP-84 native segwit derivation
    #[display("BIP84")]
    #[cfg_attr(feature = "serde", serde(rename = "BIP84"))]
    Bip84,

    /// BIP-44 derivation
    #[display("BIP44")]
    #[cfg_attr(feature = "serde", serde(rename = "BIP44"))]
    Bip44,

    /// Derivation of the official Kaspa wallet
    #[display("kaspaOfficial")]
    #[cfg_attr(feature = "serde", serde(rename = "kaspaOfficial"))]
    KaspaOfficial,
}

impl AccountDeriveType {
    /// All derivation types
    pub const ALL: [AccountDeriveType; 6] = [
        AccountDeriveType::Default,
        AccountDeriveType::LedgerLive,
        AccountDeriveType::Bip86,
        AccountDeriveType::Bip84,
        AccountDeriveType::Bip44,
        AccountDeriveType::KaspaOfficial,
    ];
}

impl FromStr for AccountDeriveType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountDeriveType::ALL
            .into_iter()
            .find(|derive_type| derive_type.to_string() == s)
            .ok_or_else(|| ConfigurationError::UnknownDeriveType(s.to_owned()))
    }
}

/// Detects whether the string names one of [`AccountDeriveType`]s
pub fn is_valid_derive_type(derive_type: &str) -> bool {
    AccountDeriveType::from_str(derive_type).is_ok()
}
