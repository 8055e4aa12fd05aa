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


use tracing::{debug, trace, warn};
use uuid::Uuid;
use wallet_networks::{NetworkInfo, NetworkRegistry};

use crate::rules::{first_match, key_rules, Candidate};

/// Network suggested for the classified key
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display("{shortname} ({network_id})")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct DetectedNetwork {
    /// Network id in `{impl}--{chainId}` form
    pub network_id: String,

    /// Human-readable network name
    pub name: String,

    /// Short network name
    pub shortname: String,

    /// Network implementation
    #[cfg_attr(feature = "serde", serde(rename = "impl"))]
    pub impl_name: String,
}

impl From<&NetworkInfo> for DetectedNetwork {
    fn from(info: &NetworkInfo) -> Self {
        DetectedNetwork {
            network_id: info.id.clone(),
            name: info.name.clone(),
            shortname: info.shortname.clone(),
            impl_name: info.impl_name.clone(),
        }
    }
}

/// Suggested networks sharing the same implementation.
///
/// The `uuid` is a correlation id generated anew for each classification and
/// used only to track the group within a UI session; it does not take part
/// in equality comparison.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct DetectedNetworkGroup {
    /// Correlation id of the group
    pub uuid: String,

    /// Implementation shared by all networks of the group
    #[cfg_attr(feature = "serde", serde(rename = "impl"))]
    pub impl_name: String,

    /// Networks of the group, in suggestion order
    pub networks: Vec<DetectedNetwork>,
}

impl PartialEq for DetectedNetworkGroup {
    fn eq(&self, other: &Self) -> bool {
        self.impl_name == other.impl_name && self.networks == other.networks
    }
}

impl Eq for DetectedNetworkGroup {}

/// Classification result
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
pub struct Detection {
    /// Suggested networks in suggestion order
    pub networks: Vec<DetectedNetwork>,

    /// The same networks grouped by their implementation, groups ordered by
    /// the first suggestion of each implementation
    pub grouped_by_impl: Vec<DetectedNetworkGroup>,
}

impl Detection {
    /// Detects whether no network was suggested
    #[inline]
    pub fn is_empty(&self) -> bool { self.networks.is_empty() }

    /// Returns group of the networks with the given implementation
    pub fn group(&self, impl_name: &str) -> Option<&DetectedNetworkGroup> {
        self.grouped_by_impl
            .iter()
            .find(|group| group.impl_name == impl_name)
    }
}

/// Source of correlation ids tagging detected network groups
pub trait CorrelationIds {
    /// Produces next correlation id
    fn next_id(&self) -> String;
}

/// Random (version 4) UUID correlation ids
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct UuidV4;

impl CorrelationIds for UuidV4 {
    fn next_id(&self) -> String { Uuid::new_v4().to_string() }
}

/// Resolves rule candidates against the registry, skipping networks the
/// registry does not know and networks already suggested.
pub(crate) fn resolve_candidates(
    registry: &NetworkRegistry,
    rule_name: &str,
    candidates: &[Candidate],
) -> Vec<DetectedNetwork> {
    let mut networks = Vec::<DetectedNetwork>::new();
    let mut push = |info: &NetworkInfo| {
        if !networks.iter().any(|network| network.network_id == info.id) {
            networks.push(DetectedNetwork::from(info));
        }
    };
    for candidate in candidates {
        match *candidate {
            Candidate::Network(key) => match registry.get(key) {
                Some(info) => push(info),
                None => warn!(rule = rule_name, network = key, "network is missing from registry"),
            },
            Candidate::Family(key) => {
                let family = registry.same_impl_family(key);
                if family.is_empty() {
                    warn!(rule = rule_name, network = key, "network is missing from registry");
                }
                family.into_iter().for_each(&mut push);
            }
        }
    }
    networks
}

/// Structural classifier of raw private key material.
///
/// Suggestions are advisory: the classifier inspects only the textual shape
/// of the key and never validates it. Callers must confirm a suggested
/// network with the network-specific validator before using the key with it.
#[derive(Clone, Debug)]
pub struct KeyFormatClassifier<'r, I = UuidV4>
where
    I: CorrelationIds,
{
    registry: &'r NetworkRegistry,
    ids: I,
}

impl<'r> KeyFormatClassifier<'r, UuidV4> {
    /// Constructs classifier tagging groups with random UUIDs
    pub fn new(registry: &'r NetworkRegistry) -> Self {
        KeyFormatClassifier {
            registry,
            ids: UuidV4,
        }
    }
}

impl<'r, I> KeyFormatClassifier<'r, I>
where
    I: CorrelationIds,
{
    /// Constructs classifier with a custom correlation id source
    pub fn with_ids(registry: &'r NetworkRegistry, ids: I) -> Self {
        KeyFormatClassifier { registry, ids }
    }

    /// Registry the classifier resolves networks with
    #[inline]
    pub fn registry(&self) -> &'r NetworkRegistry { self.registry }

    /// Suggests networks for the key, in suggestion order. Surrounding
    /// whitespace is ignored; an empty list means no rule matched.
    pub fn classify(&self, key: &str) -> Vec<DetectedNetwork> {
        let key = key.trim();
        match first_match(key_rules(), key) {
            Some(rule) => {
                debug!(rule = rule.name, "key format rule matched");
                resolve_candidates(self.registry, rule.name, rule.candidates)
            }
            None => {
                trace!("no key format rule matched");
                vec![]
            }
        }
    }

    /// Suggests networks for the key and groups them by implementation
    pub fn detect(&self, key: &str) -> Detection {
        let networks = self.classify(key);
        let mut grouped_by_impl = Vec::<DetectedNetworkGroup>::new();
        for network in &networks {
            match grouped_by_impl
                .iter_mut()
                .find(|group| group.impl_name == network.impl_name)
            {
                Some(group) => group.networks.push(network.clone()),
                None => grouped_by_impl.push(DetectedNetworkGroup {
                    uuid: self.ids.next_id(),
                    impl_name: network.impl_name.clone(),
                    networks: vec![network.clone()],
                }),
            }
        }
        Detection {
            networks,
            grouped_by_impl,
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use wallet_networks::impls;

    use super::*;

    const BTC_XPRV: &str = "xprv9yh7er1pynFJCxmown6L9K9xZARVsXGF8JsD4rULzMR8YifQb31FA3ugMoC9E6XXfTapQxvKS6qMoSYrazeutw26Cm4xo54GTqkm2Rq1CbU";
    const TBTC_TPRV: &str = "tprv8fRswazqdbgVGW3ZVA7ziodfxNL3xDphbckQsBaWMKbZCqkCtYhqJaHbdKVkQDqFSWx4SWbi39NAkvejHZbMitjMYp2YibVuuYkTQ8SoWEz";
    const HEX_0X: &str = "0xf357470894ac56d21893d045001e207509bbeae7b9004d08ab099a60176c376a";
    const DOGE_DGPV: &str = "dgpv58tkpgt8udMcqnJrCswRYNsJe8sY7VZkrwypFqD7PKTwN4Sdz4cLSULcvGdCF7cphd34zEYufT3D4aowgxMnsHomhgpL3aMtM5dG1NRFWeA";
    const CARDANO_XPRV: &str = "xprv1pz8k3cag6yh8lhdzv8me3cjz6504z424catmccpkfre97qwmyay0rvxrfgyrffyc9w2p0tnh2rhjyl5nr5n2yl0kc45trt0zukajkhteg36tq6ukwpgxhcxjlhhm8cyaxyruptn8f2ml3fl4y3gq7qxqzqcqfu854y";
    const MNEMONIC: &str = "comic alter amused vendor hold food adapt ring evoke security current mandate plate market despair industry use under yard survey picnic odor jewel absent symbol";

    #[derive(Default)]
    struct Sequential(Cell<u32>);

    impl CorrelationIds for Sequential {
        fn next_id(&self) -> String {
            let next = self.0.get() + 1;
            self.0.set(next);
            format!("group-{}", next)
        }
    }

    fn ids(networks: &[DetectedNetwork]) -> Vec<&str> {
        networks
            .iter()
            .map(|network| network.network_id.as_str())
            .collect()
    }

    #[test]
    fn btc_xprv() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        assert_eq!(ids(&classifier.classify(BTC_XPRV)), ["btc--0", "bch--0", "neurai--0"]);
    }

    #[test]
    fn testnet_xprv() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let detected = classifier.classify(TBTC_TPRV);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0], DetectedNetwork {
            network_id: s!("tbtc--0"),
            name: s!("Bitcoin Testnet"),
            shortname: s!("TBTC"),
            impl_name: impls::TBTC.to_owned(),
        });
    }

    #[test]
    fn hex_with_prefix() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let detected = classifier.classify(HEX_0X);
        let detected = ids(&detected);
        assert_eq!(detected[0], "evm--1");
        assert!(detected.contains(&"kaspa--kaspa"));
        assert!(detected.contains(&"dot--polkadot"));
        assert!(detected.contains(&"cosmos--cosmoshub-4"));
        assert!(detected.contains(&"nervos--mainnet"));

        let mixed = "0xF357470894ac56d21893d045001e207509BBEAE7b9004d08ab099a60176c376A";
        assert_eq!(ids(&classifier.classify(mixed)), detected);
    }

    #[test]
    fn family_anchor_goes_first() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let detected = classifier.classify(HEX_0X);
        let dot = detected
            .iter()
            .position(|network| network.impl_name == impls::DOT)
            .unwrap();
        assert_eq!(detected[dot].network_id, "dot--polkadot");
        let cosmos = detected
            .iter()
            .position(|network| network.impl_name == impls::COSMOS)
            .unwrap();
        assert_eq!(detected[cosmos].network_id, "cosmos--cosmoshub-4");
    }

    #[test]
    fn no_match() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        assert!(classifier.classify("").is_empty());
        assert!(classifier.classify("   ").is_empty());
        assert!(classifier.classify("abc123").is_empty());
        assert!(classifier.detect("abc123").is_empty());
        assert!(classifier.detect("abc123").grouped_by_impl.is_empty());
    }

    #[test]
    fn input_is_trimmed() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::with_ids(&registry, Sequential::default());
        let padded = format!("  \t{}\n ", DOGE_DGPV);
        assert_eq!(classifier.detect(&padded), classifier.detect(DOGE_DGPV));
        assert_eq!(ids(&classifier.classify(&padded)), ["doge--0"]);
    }

    #[test]
    fn single_network_rules() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let cases = [
            (CARDANO_XPRV, "ada--0"),
            (MNEMONIC, "algo--4160"),
            ("yprvAK1pWtDhs8mfVpomJb6eeBiJysWc9zaMXPgPS8ovnv7Dko28CGsoeAzFbcJZefteGnjbftxEJ2zZJ57D81KgeshBiWc4Fn3wsdgUig5PXhN", "btc--0"),
            ("vprv9KF3u9XUrrEGpz8v9PNA7iWJwaxG2aLqQAao1ykH5XCHs9TwBoD22YG7WAiwn6NhymqPhEq4tXufwA6eNHzjgPTYbZ7sRBQcwF2ZFyCCXer", "tbtc--0"),
            ("uprv91kHPF7vFcZmvs2gWw5occocgsdb7uCiJPhgiyw58tNcQaVoki9vqiTinq2sLgjy383Tfuwn8hsEUYK8Hr5y5Eabee78BqEv6QJMMj27tta", "tbtc--0"),
            ("Ltpv78KssZW51d5MEerJkXP6JfNGGCBbbhYdQD4w6KaJdHW7WsrG8GsqJ3Ccc6tNVcaMwLcBkYzApfh2Dx12gb67FGDTaCvRoKbTg4mFgWSnQ5J", "ltc--0"),
            ("Mtpv7TRKRrj3u3BtgceHPeAYwW4mPAavSiaM3p4nmNxokDiwMLV1NKBJ5fUxW9WnchrS22CYJ7yLXqp8VeouyECYVejKARzRSPBsqKnRVjUCqh7", "ltc--0"),
            ("2RBoeu3fhpNFZ5QdDSRZaRtnFMSUe4WjtXbnjZHijwWUzpz19Bxa8jBghq8mQexEXBzSAnGd3xsrwC3vWqr7NN21", "sol--101"),
            ("2fuk2nFbn2K7UKeLzjHJKUdc319LVHMBtR79BjM8v2vENYeoSM3gHqKtWBYxPVhKgdcf7yCNy5co8tc1hX24ZfH", "sol--101"),
            ("7b2254797065223a22736563703235366b31222c22507269766174654b6579223a227050415a744c5344353451425039754c6b2b395350356e4150434f34473876312b4d63594b5666567175733d227d", "fil--314"),
            ("ed25519:F3GHuuNKq6CnkcpQkaHfv2nuw7EWjcZnfZ8c3bwhQePsiRBYoeKeEH2Zz6xKWimEf2N4koXE3AmSbjyBy7wFSJd", "near--0"),
            ("0099FA332D42C7A99727D47BD0BB47F14655ACE7F64C56E795997011EECD348E7D", "xrp--0"),
        ];
        for (key, network_id) in cases {
            assert_eq!(ids(&classifier.classify(key)), [network_id], "{}", key);
        }
    }

    #[test]
    fn shared_formats() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let zprv = "zprvAdLnmntBQG8yBz7ozABuv5NbrGzPoTMDxgZGyEdH6QCs2Ad9BXc5rm15vDJL6rdUPMz531C8xzuqzd6LTMxe7F11doAvm1eiJ3ohx5jx7ND";
        assert_eq!(ids(&classifier.classify(zprv)), ["btc--0", "ltc--0"]);
        let hex = "e777082ffadf85dbb56176c04add4cc104e244b3061260c8d4120619da80df25";
        assert_eq!(ids(&classifier.classify(hex)), [
            "ton--mainnet",
            "tron--0x2b6653dc",
            "kaspa--kaspa",
            "nexa--mainnet"
        ]);
        assert_eq!(ids(&classifier.classify(&hex.to_uppercase())).len(), 4);
    }

    #[test]
    fn grouping() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::with_ids(&registry, Sequential::default());
        let detection = classifier.detect(BTC_XPRV);
        assert_eq!(detection.networks.len(), 3);
        assert_eq!(detection.grouped_by_impl.len(), 3);
        let btc = detection.group(impls::BTC).unwrap();
        assert_eq!(btc.impl_name, impls::BTC);
        assert_eq!(ids(&btc.networks), ["btc--0"]);

        let detection = classifier.detect(HEX_0X);
        let evm = detection.group(impls::EVM).unwrap();
        assert_eq!(evm.networks[0].network_id, "evm--1");
        assert!(evm.networks.iter().all(|network| network.impl_name == impls::EVM));
        let total = detection
            .grouped_by_impl
            .iter()
            .map(|group| group.networks.len())
            .sum::<usize>();
        assert_eq!(total, detection.networks.len());
        assert!(detection.group(impls::ADA).is_none());
    }

    #[test]
    fn groups_follow_suggestion_order() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::with_ids(&registry, Sequential::default());
        let detection = classifier.detect(HEX_0X);
        assert_eq!(detection.grouped_by_impl[0].impl_name, detection.networks[0].impl_name);
        assert_eq!(detection.grouped_by_impl[0].impl_name, impls::EVM);
        assert_eq!(detection.grouped_by_impl[0].uuid, "group-1");

        let mut first_seen = Vec::<&str>::new();
        for network in &detection.networks {
            if !first_seen.contains(&network.impl_name.as_str()) {
                first_seen.push(&network.impl_name);
            }
        }
        let order = detection
            .grouped_by_impl
            .iter()
            .map(|group| group.impl_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, first_seen);

        let detection = classifier.detect(BTC_XPRV);
        let order = detection
            .grouped_by_impl
            .iter()
            .map(|group| group.impl_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, [impls::BTC, impls::BCH, impls::NEURAI]);
    }

    #[test]
    fn correlation_ids_are_ignored_in_equality() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::new(&registry);
        let first = classifier.detect(HEX_0X);
        let second = classifier.detect(HEX_0X);
        assert_ne!(
            first.group(impls::EVM).unwrap().uuid,
            second.group(impls::EVM).unwrap().uuid
        );
        assert_eq!(first, second);
    }

    #[test]
    fn missing_registry_entries_are_skipped() {
        let registry = NetworkRegistry::from_networks(
            NetworkRegistry::presets()
                .iter()
                .filter(|info| info.key != "bch")
                .cloned(),
        )
        .unwrap();
        let classifier = KeyFormatClassifier::new(&registry);
        assert_eq!(ids(&classifier.classify(BTC_XPRV)), ["btc--0", "neurai--0"]);

        let empty = NetworkRegistry::default();
        let classifier = KeyFormatClassifier::new(&empty);
        assert!(classifier.classify(HEX_0X).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_field_names() {
        let registry = NetworkRegistry::presets();
        let classifier = KeyFormatClassifier::with_ids(&registry, Sequential::default());
        let yaml = serde_yaml::to_string(&classifier.detect(TBTC_TPRV)).unwrap();
        assert!(yaml.contains("groupedByImpl:"));
        assert!(yaml.contains("networkId: tbtc--0"));
        assert!(yaml.contains("impl: tbtc"));
        assert!(yaml.contains("uuid: group-1"));
    }
}
