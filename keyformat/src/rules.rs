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

//! Ordered classification tables.
//!
//! Several extended key prefixes are shared by unrelated forks, so rules are
//! ordered from the most specific to the least specific shape: `xprv1...`
//! Cardano keys go before `xprv...` bitcoin-family keys.

use regex::Regex;

/// Structural predicate of a classification rule
#[derive(Clone, Debug)]
pub enum Shape {
    /// Whitespace-separated phrase with at least `min_words` words
    Phrase {
        /// Minimal number of words
        min_words: usize,
    },

    /// Whole input matching the regular expression
    Pattern(Regex),
}

impl Shape {
    /// Tests whether trimmed input has the shape
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Shape::Phrase { min_words } => {
                input.contains(char::is_whitespace)
                    && input.split_whitespace().count() >= *min_words
            }
            Shape::Pattern(regex) => regex.is_match(input),
        }
    }
}

/// Network suggested by a matching rule, referenced by its registry key
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
pub enum Candidate {
    /// Single network
    #[display("{0}")]
    Network(&'static str),

    /// Network followed by all other registry networks of the same
    /// implementation
    #[display("{0}+")]
    Family(&'static str),
}

/// Classification rule: a shape and the networks suggested when input has
/// this shape
#[derive(Clone, Debug)]
pub struct Rule {
    /// Name of the rule, used in logs
    pub name: &'static str,

    /// Structural predicate
    pub shape: Shape,

    /// Suggested networks, in the order they are reported
    pub candidates: &'static [Candidate],
}

impl Rule {
    fn pattern(name: &'static str, regex: &str, candidates: &'static [Candidate]) -> Rule {
        Rule {
            name,
            shape: Shape::Pattern(
                Regex::new(regex).expect("Regexp expression for key format rule is broken"),
            ),
            candidates,
        }
    }

    /// Tests whether trimmed input matches the rule
    #[inline]
    pub fn matches(&self, input: &str) -> bool { self.shape.matches(input) }
}

use Candidate::{Family, Network};

lazy_static! {
    static ref KEY_RULES: Vec<Rule> = vec![
        Rule {
            name: "mnemonic",
            shape: Shape::Phrase { min_words: 12 },
            candidates: &[Network("algo")],
        },
        Rule::pattern("yprv", r"^yprv[0-9A-Za-z]{107,}$", &[Network("btc")]),
        Rule::pattern("cardano-xprv", r"^xprv1[0-9a-z]{150,}$", &[Network("cardano")]),
        Rule::pattern("xprv", r"^xprv[0-9A-Za-z]{107,149}$", &[
            Network("btc"),
            Network("bch"),
            Network("neurai"),
        ]),
        Rule::pattern("zprv", r"^zprv[0-9A-Za-z]{107,}$", &[Network("btc"), Network("ltc")]),
        Rule::pattern("testnet-xprv", r"^[tuv]prv[0-9A-Za-z]{107,}$", &[Network("tbtc")]),
        Rule::pattern("ltc-xprv", r"^(?:Ltpv|Mtpv)[0-9A-Za-z]{107,}$", &[Network("ltc")]),
        Rule::pattern("dgpv", r"^dgpv[0-9A-Za-z]{107,}$", &[Network("doge")]),
        Rule::pattern("0x-hex64", r"^0x[0-9a-fA-F]{64}$", &[
            Family("eth"),
            Family("cosmoshub"),
            Family("polkadot"),
            Network("kaspa"),
            Network("aptos"),
            Network("sui"),
            Network("cfx"),
            Network("benfen"),
            Network("ckb"),
        ]),
        Rule::pattern("hex64", r"^[0-9a-fA-F]{64}$", &[
            Network("ton"),
            Network("tron"),
            Network("kaspa"),
            Network("nexa"),
        ]),
        Rule::pattern("base58-keypair", r"^[1-9A-HJ-NP-Za-km-z]{87,88}$", &[Network("sol")]),
        Rule::pattern("long-hex", r"^[0-9a-fA-F]{150,}$", &[Network("fil")]),
        Rule::pattern("ed25519", r"^ed25519:[1-9A-HJ-NP-Za-km-z]{87,}$", &[Network("near")]),
        Rule::pattern("upper-hex66", r"^[0-9A-F]{66}$", &[Network("ripple")]),
    ];

    static ref ADDRESS_RULES: Vec<Rule> = vec![
        Rule::pattern("bitcoincash", r"(?i)^bitcoincash:", &[Network("bch")]),
        Rule::pattern("cfx", r"(?i)^cfx:", &[Network("cfx")]),
        Rule::pattern("nexa", r"(?i)^nexa:", &[Network("nexa")]),
        Rule::pattern("kaspa", r"(?i)^kaspa:", &[Network("kaspa")]),
        Rule::pattern("cosmos", r"(?i)^cosmos1[0-9a-z]+$", &[Network("cosmoshub")]),
        Rule::pattern("osmosis", r"(?i)^osmo1[0-9a-z]+$", &[Network("osmosis")]),
        Rule::pattern("juno", r"(?i)^juno1[0-9a-z]+$", &[Network("juno")]),
        Rule::pattern("secret", r"(?i)^secret1[0-9a-z]+$", &[Network("secret")]),
        Rule::pattern("cronos-pos", r"(?i)^cro1[0-9a-z]+$", &[Network("cronosPosChain")]),
        Rule::pattern("celestia", r"(?i)^celestia1[0-9a-z]+$", &[Network("celestia")]),
        Rule::pattern("fetchai", r"(?i)^fetch1[0-9a-z]+$", &[Network("fetchai")]),
        Rule::pattern("akash", r"(?i)^akash1[0-9a-z]+$", &[Network("akash")]),
        Rule::pattern("nostr", r"(?i)^npub[0-9a-z]+$", &[Network("nostr")]),
        Rule::pattern("ckb", r"(?i)^ckb1[0-9a-z]+$", &[Network("ckb")]),
        Rule::pattern("tbtc-segwit", r"(?i)^tb1[qp][0-9a-z]+$", &[Network("tbtc")]),
        Rule::pattern("btc-segwit", r"(?i)^bc1[0-9a-z]+$", &[Network("btc")]),
        Rule::pattern("ltc-segwit", r"(?i)^ltc1[0-9a-z]+$", &[Network("ltc")]),
        Rule::pattern("evm", r"^0x[0-9a-fA-F]{40}$", &[Network("eth")]),
    ];
}

/// Rules classifying private key material, in priority order
pub fn key_rules() -> &'static [Rule] { &KEY_RULES }

/// Rules classifying addresses, in priority order
pub fn address_rules() -> &'static [Rule] { &ADDRESS_RULES }

/// Returns the first rule from `rules` matching trimmed input
pub(crate) fn first_match<'r>(rules: &'r [Rule], input: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matches(input))
}

#[cfg(test)]
mod test {
    use super::*;

    fn position(name: &str) -> usize {
        key_rules()
            .iter()
            .position(|rule| rule.name == name)
            .expect("no rule with such name")
    }

    #[test]
    fn specific_before_generic() {
        assert!(position("cardano-xprv") < position("xprv"));
        assert!(position("0x-hex64") < position("hex64"));
        assert!(position("mnemonic") == 0);
    }

    #[test]
    fn rule_names_are_unique() {
        for rules in [key_rules(), address_rules()] {
            let mut names = rules.iter().map(|rule| rule.name).collect::<Vec<_>>();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), rules.len());
        }
    }

    #[test]
    fn phrase_shape() {
        let shape = Shape::Phrase { min_words: 3 };
        assert!(shape.matches("one two three"));
        assert!(shape.matches("one\ttwo  three four"));
        assert!(!shape.matches("one two"));
        assert!(!shape.matches("onetwothree"));
    }

    #[test]
    fn ripple_is_upper_case_only() {
        let rule = &key_rules()[position("upper-hex66")];
        let key = "0099FA332D42C7A99727D47BD0BB47F14655ACE7F64C56E795997011EECD348E7D";
        assert!(rule.matches(key));
        assert!(!rule.matches(&key.to_lowercase()));
        assert!(!rule.matches("0099fa332D42C7A99727D47BD0BB47F14655ACE7F64C56E795997011EECD348E7D"));
    }

    #[test]
    fn candidate_display() {
        assert_eq!(Candidate::Network("btc").to_string(), "btc");
        assert_eq!(Candidate::Family("eth").to_string(), "eth+");
    }
}
