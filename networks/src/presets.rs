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

use crate::{impls, NetworkInfo};

// key, network id, implementation, name, shortname, testnet
#[rustfmt::skip]
const PRESETS: &[(&str, &str, &str, &str, &str, bool)] = &[
    ("btc", "btc--0", impls::BTC, "Bitcoin", "BTC", false),
    ("tbtc", "tbtc--0", impls::TBTC, "Bitcoin Testnet", "TBTC", true),
    ("sbtc", "sbtc--0", impls::SBTC, "Bitcoin Signet", "SBTC", true),
    ("bch", "bch--0", impls::BCH, "Bitcoin Cash", "BCH", false),
    ("neurai", "neurai--0", impls::NEURAI, "Neurai", "XNA", false),
    ("ltc", "ltc--0", impls::LTC, "Litecoin", "LTC", false),
    ("doge", "doge--0", impls::DOGE, "Dogecoin", "DOGE", false),
    ("cardano", "ada--0", impls::ADA, "Cardano", "ADA", false),
    ("algo", "algo--4160", impls::ALGO, "Algorand", "ALGO", false),
    ("eth", "evm--1", impls::EVM, "Ethereum", "ETH", false),
    ("bsc", "evm--56", impls::EVM, "BNB Chain", "BNB", false),
    ("polygon", "evm--137", impls::EVM, "Polygon", "POL", false),
    ("optimism", "evm--10", impls::EVM, "Optimism", "OP", false),
    ("arbitrum", "evm--42161", impls::EVM, "Arbitrum", "ARB", false),
    ("base", "evm--8453", impls::EVM, "Base", "BASE", false),
    ("avalanche", "evm--43114", impls::EVM, "Avalanche", "AVAX", false),
    ("cosmoshub", "cosmos--cosmoshub-4", impls::COSMOS, "Cosmos Hub", "ATOM", false),
    ("osmosis", "cosmos--osmosis-1", impls::COSMOS, "Osmosis", "OSMO", false),
    ("juno", "cosmos--juno-1", impls::COSMOS, "Juno", "JUNO", false),
    ("secret", "cosmos--secret-4", impls::COSMOS, "Secret Network", "SCRT", false),
    ("cronosPosChain", "cosmos--crypto-org-chain-mainnet-1", impls::COSMOS, "Cronos POS Chain", "CRO", false),
    ("celestia", "cosmos--celestia", impls::COSMOS, "Celestia", "TIA", false),
    ("fetchai", "cosmos--fetchhub-4", impls::COSMOS, "Fetch.ai", "FET", false),
    ("akash", "cosmos--akashnet-2", impls::COSMOS, "Akash", "AKT", false),
    ("polkadot", "dot--polkadot", impls::DOT, "Polkadot", "DOT", false),
    ("kusama", "dot--kusama", impls::DOT, "Kusama", "KSM", false),
    ("astar", "dot--astar", impls::DOT, "Astar", "ASTR", false),
    ("joystream", "dot--joystream", impls::DOT, "Joystream", "JOY", false),
    ("manta", "dot--manta", impls::DOT, "Manta Atlantic", "MANTA", false),
    ("kaspa", "kaspa--kaspa", impls::KASPA, "Kaspa", "KAS", false),
    ("aptos", "aptos--1", impls::APTOS, "Aptos", "APT", false),
    ("sui", "sui--mainnet", impls::SUI, "Sui", "SUI", false),
    ("cfx", "cfx--1029", impls::CFX, "Conflux", "CFX", false),
    ("benfen", "bfc--bfc", impls::BENFEN, "BenFen", "BFC", false),
    ("ckb", "nervos--mainnet", impls::NERVOS, "Nervos", "CKB", false),
    ("ton", "ton--mainnet", impls::TON, "TON", "TON", false),
    ("tron", "tron--0x2b6653dc", impls::TRON, "Tron", "TRX", false),
    ("nexa", "nexa--mainnet", impls::NEXA, "Nexa", "NEXA", false),
    ("sol", "sol--101", impls::SOL, "Solana", "SOL", false),
    ("fil", "fil--314", impls::FIL, "Filecoin", "FIL", false),
    ("near", "near--0", impls::NEAR, "Near", "NEAR", false),
    ("ripple", "xrp--0", impls::XRP, "Ripple", "XRP", false),
    ("nostr", "nostr--0", impls::NOSTR, "Nostr", "NOSTR", false),
    ("lightning", "lightning--0", impls::LIGHTNING, "Lightning", "sats", false),
    ("tlightning", "tlightning--0", impls::LIGHTNING_TESTNET, "Lightning Testnet", "tsats", true),
    ("allnetworks", "allnetworks--0", impls::ALL_NETWORKS, "All Networks", "All", false),
];

pub(crate) fn networks() -> impl Iterator<Item = NetworkInfo> {
    PRESETS
        .iter()
        .map(|(key, id, impl_name, name, shortname, is_testnet)| NetworkInfo {
            key: (*key).to_owned(),
            id: (*id).to_owned(),
            impl_name: (*impl_name).to_owned(),
            name: (*name).to_owned(),
            shortname: (*shortname).to_owned(),
            is_testnet: *is_testnet,
        })
}
