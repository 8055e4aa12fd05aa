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

//! Network context of accounts: compatibility of accounts with networks and
//! selection of the network an account is shown in.

use tracing::trace;
use wallet_networks::{
    impls, is_all_network, is_btc_network, NetworkId, NetworkRegistry,
};

use crate::kind::{is_hd_account, is_hd_wallet, is_hw_account, is_hw_wallet};
use crate::{non_empty, ConfigurationError};

/// Network-related properties of a stored account
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct AccountNetworks {
    /// Implementation of the networks the account belongs to
    #[cfg_attr(feature = "serde", serde(rename = "impl", default))]
    pub impl_name: Option<String>,

    /// Networks the account is restricted to; empty for all networks of the
    /// implementation
    #[cfg_attr(feature = "serde", serde(default))]
    pub networks: Vec<String>,

    /// Network the account was created in
    #[cfg_attr(feature = "serde", serde(default))]
    pub create_at_network: Option<String>,
}

impl AccountNetworks {
    fn account_impl(&self) -> Option<&str> { non_empty(self.impl_name.as_deref()) }

    fn create_at_network(&self) -> Option<&str> { non_empty(self.create_at_network.as_deref()) }
}

/// Tests whether the account can be used with the network: the network must
/// belong to the account implementation and, for accounts restricted to
/// specific networks, be one of them.
///
/// # Errors
///
/// If the network id is empty.
pub fn is_account_compatible_with_network(
    registry: &NetworkRegistry,
    account: &AccountNetworks,
    network_id: &str,
) -> Result<bool, ConfigurationError> {
    if network_id.is_empty() {
        return Err(ConfigurationError::NoNetworkId);
    }
    if let Some(account_impl) = account.account_impl() {
        if registry.impl_of(network_id) != account_impl {
            return Ok(false);
        }
    }
    if account.networks.is_empty() {
        return Ok(true);
    }
    Ok(account.networks.iter().any(|id| id == network_id))
}

/// Selects the network the account is to be used with.
///
/// The requested network is used when it matches the account implementation
/// and allow-list; otherwise the network the account was created in, and
/// then the first allowed network. The all-networks id is returned as is.
/// Returns `None` when the selected network does not match the account
/// implementation or has no chain id.
pub fn account_compatible_network(
    registry: &NetworkRegistry,
    account: &AccountNetworks,
    network_id: Option<&str>,
) -> Option<String> {
    let requested = non_empty(network_id);
    let mut selected = requested.or_else(|| account.create_at_network());

    if selected.map(is_all_network).unwrap_or_default() {
        return selected.map(str::to_owned);
    }

    if let (Some(requested), Some(account_impl)) = (requested, account.account_impl()) {
        if registry.impl_of(requested) != account_impl {
            trace!(network = requested, "network implementation mismatch, using creation network");
            selected = account.create_at_network();
        }
    }

    if !account.networks.is_empty() {
        let is_allowed = |id: &str| account.networks.iter().any(|network| network == id);
        if !selected.map(is_allowed).unwrap_or_default() {
            trace!(network = ?selected, "network is not allowed, using creation or first allowed network");
            selected = account
                .create_at_network()
                .filter(|&id| is_allowed(id))
                .or_else(|| account.networks.first().map(String::as_str));
        }
    }

    if let (Some(id), Some(account_impl)) = (selected, account.account_impl()) {
        if registry.impl_of(id) != account_impl {
            trace!(network = id, "selected network does not match account implementation");
            selected = None;
        }
    }

    let selected = non_empty(selected)?;
    if selected.parse::<NetworkId>().is_err() {
        trace!(network = selected, "selected network has no chain id");
        return None;
    }
    Some(selected.to_owned())
}

/// Network a WalletConnect session is bound to
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct MergedNetwork {
    /// Whether all networks of the implementation share the session
    pub is_merged: bool,
    /// Implementation for merged networks, network id otherwise
    pub network_id_or_impl: String,
}

/// Resolves the network a WalletConnect session is bound to: sessions are
/// shared by all EVM networks, other networks get a session each.
pub fn wallet_connect_merged_network(registry: &NetworkRegistry, network_id: &str) -> MergedNetwork {
    let network_impl = registry.impl_of(network_id);
    if network_impl == impls::EVM {
        MergedNetwork {
            is_merged: true,
            network_id_or_impl: network_impl.to_owned(),
        }
    } else {
        MergedNetwork {
            is_merged: false,
            network_id_or_impl: network_id.to_owned(),
        }
    }
}

/// Detects whether fresh address mode applies: bitcoin network, mode
/// enabled and an account (or, without account, a wallet) of HD or hardware
/// kind.
pub fn is_enabled_btc_fresh_address(
    account_id: Option<&str>,
    wallet_id: Option<&str>,
    network_id: Option<&str>,
    enabled: bool,
) -> bool {
    if !network_id.map(is_btc_network).unwrap_or_default() || !enabled {
        return false;
    }
    if let Some(account_id) = non_empty(account_id) {
        return is_hd_account(account_id) || is_hw_account(account_id);
    }
    if let Some(wallet_id) = non_empty(wallet_id) {
        return is_hd_wallet(wallet_id) || is_hw_wallet(wallet_id);
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    fn account(impl_name: &str, networks: &[&str], create_at: Option<&str>) -> AccountNetworks {
        AccountNetworks {
            impl_name: Some(impl_name.to_owned()),
            networks: networks.iter().map(|id| id.to_string()).collect(),
            create_at_network: create_at.map(str::to_owned),
        }
    }

    #[test]
    fn compatibility() {
        let registry = NetworkRegistry::presets();
        let evm = account("evm", &[], Some("evm--1"));
        assert_eq!(is_account_compatible_with_network(&registry, &evm, "evm--56"), Ok(true));
        assert_eq!(is_account_compatible_with_network(&registry, &evm, "btc--0"), Ok(false));
        assert_eq!(
            is_account_compatible_with_network(&registry, &evm, ""),
            Err(ConfigurationError::NoNetworkId)
        );

        let restricted = account("evm", &["evm--1", "evm--10"], None);
        assert_eq!(is_account_compatible_with_network(&registry, &restricted, "evm--10"), Ok(true));
        assert_eq!(is_account_compatible_with_network(&registry, &restricted, "evm--56"), Ok(false));

        let any = AccountNetworks::default();
        assert_eq!(is_account_compatible_with_network(&registry, &any, "sol--101"), Ok(true));
    }

    #[test]
    fn requested_network_wins() {
        let registry = NetworkRegistry::presets();
        let evm = account("evm", &[], Some("evm--1"));
        assert_eq!(account_compatible_network(&registry, &evm, Some("evm--56")), Some(s!("evm--56")));
        assert_eq!(account_compatible_network(&registry, &evm, None), Some(s!("evm--1")));
        assert_eq!(account_compatible_network(&registry, &evm, Some("")), Some(s!("evm--1")));
    }

    #[test]
    fn fallbacks() {
        let registry = NetworkRegistry::presets();
        let evm = account("evm", &[], Some("evm--1"));
        // implementation mismatch falls back to creation network
        assert_eq!(account_compatible_network(&registry, &evm, Some("btc--0")), Some(s!("evm--1")));

        // disallowed network falls back to the first allowed one
        let restricted = account("cosmos", &["cosmos--osmosis-1", "cosmos--juno-1"], None);
        assert_eq!(
            account_compatible_network(&registry, &restricted, Some("cosmos--cosmoshub-4")),
            Some(s!("cosmos--osmosis-1"))
        );
        assert_eq!(
            account_compatible_network(&registry, &restricted, Some("cosmos--juno-1")),
            Some(s!("cosmos--juno-1"))
        );

        // disallowed network falls back to the allowed creation network
        let restricted = account("evm", &["evm--1", "evm--10"], Some("evm--10"));
        assert_eq!(
            account_compatible_network(&registry, &restricted, Some("evm--56")),
            Some(s!("evm--10"))
        );
        // creation network outside of the allow-list is skipped
        let restricted = account("evm", &["evm--1", "evm--10"], Some("evm--56"));
        assert_eq!(account_compatible_network(&registry, &restricted, None), Some(s!("evm--1")));
        assert_eq!(
            account_compatible_network(&registry, &restricted, Some("evm--137")),
            Some(s!("evm--1"))
        );

        // nothing to fall back to
        let orphan = account("evm", &[], None);
        assert_eq!(account_compatible_network(&registry, &orphan, Some("btc--0")), None);
        assert_eq!(account_compatible_network(&registry, &orphan, None), None);
    }

    #[test]
    fn rejections() {
        let registry = NetworkRegistry::presets();
        // allowed network of a foreign implementation
        let broken = account("evm", &["btc--0"], None);
        assert_eq!(account_compatible_network(&registry, &broken, Some("evm--1")), None);
        // network without chain id
        let no_chain = AccountNetworks {
            create_at_network: Some(s!("evm")),
            ..default!()
        };
        assert_eq!(account_compatible_network(&registry, &no_chain, None), None);
    }

    #[test]
    fn all_networks() {
        let registry = NetworkRegistry::presets();
        let evm = account("evm", &["evm--1"], Some("evm--1"));
        assert_eq!(
            account_compatible_network(&registry, &evm, Some("allnetworks--0")),
            Some(s!("allnetworks--0"))
        );
    }

    #[test]
    fn merged_networks() {
        let registry = NetworkRegistry::presets();
        assert_eq!(wallet_connect_merged_network(&registry, "evm--137"), MergedNetwork {
            is_merged: true,
            network_id_or_impl: s!("evm"),
        });
        assert_eq!(wallet_connect_merged_network(&registry, "sol--101"), MergedNetwork {
            is_merged: false,
            network_id_or_impl: s!("sol--101"),
        });
    }

    #[test]
    fn fresh_address() {
        let btc = Some("btc--0");
        assert!(is_enabled_btc_fresh_address(Some("hd-1--m/84'/0'/0'"), None, btc, true));
        assert!(is_enabled_btc_fresh_address(Some("hw-1a2b--m/84'/0'/0'"), None, Some("tbtc--0"), true));
        assert!(!is_enabled_btc_fresh_address(Some("hd-1--m/84'/0'/0'"), None, btc, false));
        assert!(!is_enabled_btc_fresh_address(Some("hd-1--m/84'/0'/0'"), None, Some("ltc--0"), true));
        assert!(!is_enabled_btc_fresh_address(Some("imported--0--xpub"), Some("hd-1"), btc, true));
        assert!(is_enabled_btc_fresh_address(None, Some("hd-1"), btc, true));
        assert!(!is_enabled_btc_fresh_address(None, Some("qr-1a2b"), btc, true));
        assert!(!is_enabled_btc_fresh_address(None, None, btc, true));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn yaml_account() {
        let account: AccountNetworks =
            serde_yaml::from_str("impl: evm\ncreateAtNetwork: evm--1\n").unwrap();
        assert_eq!(account, AccountNetworks {
            impl_name: Some(s!("evm")),
            networks: vec![],
            create_at_network: Some(s!("evm--1")),
        });
    }
}
