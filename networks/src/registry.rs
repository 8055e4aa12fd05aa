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

use std::collections::BTreeMap;

use crate::{network_impl, presets, NetworkId};

/// Errors constructing [`NetworkRegistry`]
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum RegistryError {
    /// network key `{0}` is used by more than one registry entry
    DuplicateKey(String),

    /// network id `{0}` is used by more than one registry entry
    DuplicateId(String),

    /// registry entry `{0}` has an empty network id
    EmptyId(String),
}

/// Metadata describing a single supported network.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct NetworkInfo {
    /// Symbolic key under which the network is looked up (`btc`, `eth`,
    /// `cosmoshub`, ...)
    pub key: String,

    /// Network id in `{impl}--{chainId}` form
    pub id: String,

    /// Implementation (protocol family) of the network
    #[cfg_attr(feature = "serde", serde(rename = "impl"))]
    pub impl_name: String,

    /// Human-readable network name
    pub name: String,

    /// Short ticker-like network name
    pub shortname: String,

    /// Whether the network is a test network
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_testnet: bool,
}

impl NetworkInfo {
    /// Parses network id of the entry
    pub fn network_id(&self) -> Option<NetworkId> { self.id.parse().ok() }
}

/// Read-only registry of network metadata.
///
/// Entries keep the order in which they were provided; this order is used
/// whenever networks of the same implementation are enumerated.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<NetworkInfo>,
    by_key: BTreeMap<String, usize>,
    by_id: BTreeMap<String, usize>,
}

impl NetworkRegistry {
    /// Constructs registry from a list of network descriptions.
    ///
    /// # Errors
    ///
    /// If the same key or id is used by several entries, or an entry has an
    /// empty id.
    pub fn from_networks(
        networks: impl IntoIterator<Item = NetworkInfo>,
    ) -> Result<NetworkRegistry, RegistryError> {
        let mut registry = NetworkRegistry::default();
        for info in networks {
            if info.id.is_empty() {
                return Err(RegistryError::EmptyId(info.key));
            }
            let pos = registry.networks.len();
            if registry.by_key.insert(info.key.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateKey(info.key));
            }
            if registry.by_id.insert(info.id.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateId(info.id));
            }
            registry.networks.push(info);
        }
        Ok(registry)
    }

    /// Constructs registry with the networks supported out of the box.
    pub fn presets() -> NetworkRegistry {
        NetworkRegistry::from_networks(presets::networks())
            .expect("built-in network presets contain duplicated entries")
    }

    /// Number of networks in the registry
    #[inline]
    pub fn len(&self) -> usize { self.networks.len() }

    /// Detects whether the registry has no networks
    #[inline]
    pub fn is_empty(&self) -> bool { self.networks.is_empty() }

    /// Iterates over all networks in registry order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, NetworkInfo> { self.networks.iter() }

    /// Looks up network by its symbolic key
    pub fn get(&self, key: &str) -> Option<&NetworkInfo> {
        self.by_key.get(key).map(|pos| &self.networks[*pos])
    }

    /// Looks up network by its network id
    pub fn by_id(&self, network_id: &str) -> Option<&NetworkInfo> {
        self.by_id.get(network_id).map(|pos| &self.networks[*pos])
    }

    /// Returns implementation of the network with the given id. Networks
    /// unknown to the registry resolve to the implementation part of their
    /// id.
    pub fn impl_of<'a>(&'a self, network_id: &'a str) -> &'a str {
        match self.by_id(network_id) {
            Some(info) => info.impl_name.as_str(),
            None => network_impl(network_id),
        }
    }

    /// Iterates over networks of the given implementation in registry order
    pub fn with_impl<'a>(&'a self, impl_name: &'a str) -> impl Iterator<Item = &'a NetworkInfo> {
        self.networks
            .iter()
            .filter(move |info| info.impl_name == impl_name)
    }

    /// Returns all networks sharing implementation with the network under
    /// `key`, with that network going first and the rest following in
    /// registry order. Returns empty list for an unknown key.
    pub fn same_impl_family(&self, key: &str) -> Vec<&NetworkInfo> {
        let anchor = match self.get(key) {
            Some(anchor) => anchor,
            None => return vec![],
        };
        let mut family = vec![anchor];
        family.extend(
            self.with_impl(&anchor.impl_name)
                .filter(|info| info.key != anchor.key),
        );
        family
    }
}

impl<'a> IntoIterator for &'a NetworkRegistry {
    type Item = &'a NetworkInfo;
    type IntoIter = std::slice::Iter<'a, NetworkInfo>;

    fn into_iter(self) -> Self::IntoIter { self.networks.iter() }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NetworkRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let networks = Vec::<NetworkInfo>::deserialize(deserializer)?;
        NetworkRegistry::from_networks(networks).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NetworkRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.networks.serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls;

    fn info(key: &str, id: &str, impl_name: &str) -> NetworkInfo {
        NetworkInfo {
            key: key.to_owned(),
            id: id.to_owned(),
            impl_name: impl_name.to_owned(),
            name: key.to_uppercase(),
            shortname: key.to_uppercase(),
            is_testnet: false,
        }
    }

    #[test]
    fn presets_are_consistent() {
        let registry = NetworkRegistry::presets();
        assert!(!registry.is_empty());
        for info in &registry {
            let id = info.network_id().expect("preset network id is malformed");
            assert_eq!(id.impl_name(), info.impl_name, "{}", info.key);
        }
        assert_eq!(registry.get("eth").unwrap().id, "evm--1");
        assert_eq!(registry.by_id("btc--0").unwrap().key, "btc");
    }

    #[test]
    fn duplicates() {
        assert_eq!(
            NetworkRegistry::from_networks([info("a", "x--1", "x"), info("a", "x--2", "x")]),
            Err(RegistryError::DuplicateKey(s!("a")))
        );
        assert_eq!(
            NetworkRegistry::from_networks([info("a", "x--1", "x"), info("b", "x--1", "x")]),
            Err(RegistryError::DuplicateId(s!("x--1")))
        );
        assert_eq!(
            NetworkRegistry::from_networks([info("a", "", "x")]),
            Err(RegistryError::EmptyId(s!("a")))
        );
    }

    #[test]
    fn family_order() {
        let registry = NetworkRegistry::from_networks([
            info("bsc", "evm--56", impls::EVM),
            info("sol", "sol--101", impls::SOL),
            info("eth", "evm--1", impls::EVM),
            info("polygon", "evm--137", impls::EVM),
        ])
        .unwrap();
        let keys = registry
            .same_impl_family("eth")
            .into_iter()
            .map(|info| info.key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["eth", "bsc", "polygon"]);
        assert!(registry.same_impl_family("unknown").is_empty());
    }

    #[test]
    fn impl_resolution() {
        let registry = NetworkRegistry::presets();
        assert_eq!(registry.impl_of("evm--1"), impls::EVM);
        assert_eq!(registry.impl_of("evm--999999"), impls::EVM);
        assert_eq!(registry.impl_of("custom"), "custom");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn yaml_registry() {
        let yaml = "
- key: eth
  id: evm--1
  impl: evm
  name: Ethereum
  shortname: ETH
- key: tbtc
  id: tbtc--0
  impl: tbtc
  name: Bitcoin Testnet
  shortname: TBTC
  isTestnet: true
";
        let registry: NetworkRegistry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("tbtc").unwrap().is_testnet);

        let duplicated = "
- { key: eth, id: evm--1, impl: evm, name: Ethereum, shortname: ETH }
- { key: eth, id: evm--56, impl: evm, name: BNB Chain, shortname: BNB }
";
        assert!(serde_yaml::from_str::<NetworkRegistry>(duplicated).is_err());
    }
}
