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

//! Accounts of externally connected wallets.

use wallet_hd::standards::coin_type;
use wallet_networks::{NetworkRegistry, SEPARATOR};

use crate::compat::wallet_connect_merged_network;
use crate::{non_empty, ConfigurationError, WalletKind};

/// Connection details reported by an external wallet connector
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct ExternalConnectionInfo {
    /// Topic of the WalletConnect session
    #[cfg_attr(feature = "serde", serde(default))]
    pub wallet_connect_topic: Option<String>,

    /// Reverse domain name of the EIP-6963 provider
    #[cfg_attr(feature = "serde", serde(default))]
    pub eip6963_rdns: Option<String>,

    /// Global object name of the injected provider
    #[cfg_attr(feature = "serde", serde(default))]
    pub injected_global: Option<String>,
}

/// Connection an external account is bound to
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum ExternalConnection {
    /// WalletConnect session
    WalletConnect {
        /// Session topic
        topic: String,
    },

    /// EVM provider announced with EIP-6963
    Eip6963 {
        /// Provider reverse domain name
        rdns: String,
    },

    /// EVM provider injected as a global object
    Injected {
        /// Name of the global object
        global: String,
    },
}

impl ExternalConnection {
    /// Selects connection of the external account. An injected provider
    /// takes precedence over an EIP-6963 one, which in turn takes precedence
    /// over a WalletConnect session; an explicit session topic takes
    /// precedence over the one from connection info.
    pub fn select(
        wc_session_topic: Option<&str>,
        info: Option<&ExternalConnectionInfo>,
    ) -> Option<ExternalConnection> {
        if let Some(global) = info.and_then(|info| non_empty(info.injected_global.as_deref())) {
            return Some(ExternalConnection::Injected {
                global: global.to_owned(),
            });
        }
        if let Some(rdns) = info.and_then(|info| non_empty(info.eip6963_rdns.as_deref())) {
            return Some(ExternalConnection::Eip6963 {
                rdns: rdns.to_owned(),
            });
        }
        session_topic(wc_session_topic, info).map(|topic| ExternalConnection::WalletConnect {
            topic: topic.to_owned(),
        })
    }

    /// Builds id of the account bound to this connection:
    ///
    /// - `external--wc--{topic}--{networkIdOrImpl}` for WalletConnect, where
    ///   EVM networks share a single account per session;
    /// - `external--60--eip6963--{rdns}`;
    /// - `external--60--injected--{global}`.
    ///
    /// # Errors
    ///
    /// If no network id is given for a WalletConnect session.
    pub fn account_id(
        &self,
        registry: &NetworkRegistry,
        network_id: Option<&str>,
    ) -> Result<String, ConfigurationError> {
        let tag = WalletKind::External.tag();
        let segments = match self {
            ExternalConnection::WalletConnect { topic } => {
                let network_id = non_empty(network_id).ok_or(ConfigurationError::NoExternalNetwork)?;
                let merged = wallet_connect_merged_network(registry, network_id);
                vec![tag.to_owned(), s!("wc"), topic.clone(), merged.network_id_or_impl]
            }
            ExternalConnection::Eip6963 { rdns } => {
                vec![tag.to_owned(), coin_type::ETH.to_owned(), s!("eip6963"), rdns.clone()]
            }
            ExternalConnection::Injected { global } => {
                vec![tag.to_owned(), coin_type::ETH.to_owned(), s!("injected"), global.clone()]
            }
        };
        Ok(segments.join(SEPARATOR))
    }
}

fn session_topic<'a>(
    wc_session_topic: Option<&'a str>,
    info: Option<&'a ExternalConnectionInfo>,
) -> Option<&'a str> {
    non_empty(wc_session_topic)
        .or_else(|| info.and_then(|info| non_empty(info.wallet_connect_topic.as_deref())))
}

/// Builds id of an external account from the WalletConnect session topic
/// and/or connection info. The connection is picked with
/// [`ExternalConnection::select`].
///
/// # Errors
///
/// If there is no connection to bind the account to, or a WalletConnect
/// session topic is present while the network id is not, even when an
/// injected or EIP-6963 provider takes precedence.
pub fn build_external_account_id(
    registry: &NetworkRegistry,
    wc_session_topic: Option<&str>,
    info: Option<&ExternalConnectionInfo>,
    network_id: Option<&str>,
) -> Result<String, ConfigurationError> {
    if session_topic(wc_session_topic, info).is_some() && non_empty(network_id).is_none() {
        return Err(ConfigurationError::NoExternalNetwork);
    }
    ExternalConnection::select(wc_session_topic, info)
        .ok_or(ConfigurationError::NoExternalConnection)?
        .account_id(registry, network_id)
}
