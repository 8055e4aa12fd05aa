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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate amplify;
#[macro_use]
extern crate tracing;

use std::path::{Path, PathBuf};
use std::{fs, io};

use amplify::IoError;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wallet::accounts::{
    build_hd_account_id, build_indexed_account_id, parse_account_id, parse_indexed_account_id,
    ConfigurationError, HdAccountParams, WalletKind,
};
use wallet::hd::{
    beautify_path_template, btc_to_ln_path, build_path_from_template, find_index_from_template,
    format_utxo_path, ln_to_btc_path, normalize_path_template, ValidationError,
};
use wallet::keyformat::{detect_network_by_address, DetectedNetwork, KeyFormatClassifier};
use wallet::networks::NetworkRegistry;

/// Command-line arguments
#[derive(Parser)]
#[derive(Clone, Eq, PartialEq, Debug)]
#[clap(
    author,
    version,
    name = "wallet-id",
    about = "Command-line tool for multi-chain wallet identifiers, derivation paths and key \
             format detection"
)]
pub struct Args {
    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,

    /// YAML file with network registry to use instead of the built-in one.
    ///
    /// The file must contain a list of networks, each having `key`, `id`,
    /// `impl`, `name`, `shortname` and optional `isTestnet` fields.
    #[clap(short, long, global = true)]
    pub networks: Option<PathBuf>,
}

/// Command to execute
#[derive(Subcommand)]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    /// Suggest networks for a pasted private key, mnemonic or extended key.
    ///
    /// Suggestions are based on the key encoding format only and must be
    /// confirmed by a network-specific validator.
    Detect {
        /// Key material to classify
        key: String,

        /// Print suggestions grouped by network implementation
        #[clap(short, long)]
        grouped: bool,
    },

    /// Suggest networks for an address by its shape
    Address {
        /// Address to classify
        address: String,
    },

    /// Build id of an HD or hardware wallet account
    HdAccount {
        /// Wallet id (`hd-1`, `hw-{deviceId}`, ...)
        wallet_id: String,

        /// Full derivation path of the account
        #[clap(short, long, conflicts_with = "template")]
        path: Option<String>,

        /// Derivation path template with `{index}` placeholder
        #[clap(short, long)]
        template: Option<String>,

        /// Account index to substitute into the template
        #[clap(short, long)]
        index: Option<u32>,

        /// Network implementation of the account
        #[clap(long = "impl")]
        network_impl: Option<String>,

        /// Suffix distinguishing accounts sharing the same path
        #[clap(short, long)]
        suffix: Option<String>,

        /// Account belongs to a UTXO-based network
        #[clap(short, long)]
        utxo: bool,
    },

    /// Build id of an indexed account
    Indexed {
        /// Wallet id
        wallet_id: String,

        /// Account index
        #[clap(allow_negative_numbers = true)]
        index: i64,
    },

    /// Split account id into wallet id, derivation path and suffix
    Parse {
        /// Account id to parse
        account_id: String,
    },

    /// Split indexed account id into wallet id and account index
    ParseIndexed {
        /// Indexed account id to parse
        indexed_account_id: String,
    },

    /// Detect kind of the wallet owning the account or the wallet itself
    Kind {
        /// Wallet or account id
        id: String,
    },

    /// Substitute account index into derivation path template
    BuildPath {
        /// Path template; `*` and `{index}` are accepted as placeholders
        template: String,

        /// Index to substitute
        index: u32,
    },

    /// Find account index in a derivation path built from a template
    FindIndex {
        /// Path template with `{index}` placeholder
        template: String,

        /// Derivation path
        path: String,
    },

    /// Truncate UTXO derivation path to the account level
    UtxoPath {
        /// Derivation path
        path: String,
    },

    /// Convert between native segwit bitcoin and lightning account paths
    LightningPath {
        /// Derivation path
        path: String,

        /// Use testnet coin types
        #[clap(long)]
        testnet: bool,

        /// Convert lightning path back into bitcoin path
        #[clap(short, long)]
        reverse: bool,
    },

    /// List networks from the registry
    Networks {
        /// Print registry in YAML format
        #[clap(long)]
        yaml: bool,
    },
}

impl Args {
    fn registry(&self) -> Result<NetworkRegistry, Error> {
        match &self.networks {
            None => Ok(NetworkRegistry::presets()),
            Some(path) => read_registry(path),
        }
    }

    pub fn exec(&self) -> Result<(), Error> {
        match &self.command {
            Command::Detect { key, grouped } => self.detect(key, *grouped),
            Command::Address { address } => {
                let registry = self.registry()?;
                print_networks(&detect_network_by_address(&registry, address));
                Ok(())
            }
            Command::HdAccount {
                wallet_id,
                path,
                template,
                index,
                network_impl,
                suffix,
                utxo,
            } => {
                let account_id = build_hd_account_id(&HdAccountParams {
                    network_impl: network_impl.as_deref(),
                    wallet_id,
                    path: path.as_deref(),
                    template: template.as_deref(),
                    index: *index,
                    id_suffix: suffix.as_deref(),
                    is_utxo: *utxo,
                })
                .map_err(Error::from_accounts)?;
                println!("{}", account_id);
                Ok(())
            }
            Command::Indexed { wallet_id, index } => {
                println!("{}", build_indexed_account_id(wallet_id, *index)?);
                Ok(())
            }
            Command::Parse { account_id } => {
                let parsed = parse_account_id(account_id);
                println!("{:-10} {}", "Wallet:", parsed.wallet_id);
                println!("{:-10} {}", "Path:", parsed.used_path.unwrap_or("~"));
                println!("{:-10} {}", "Suffix:", parsed.id_suffix.unwrap_or("~"));
                Ok(())
            }
            Command::ParseIndexed { indexed_account_id } => {
                let indexed = parse_indexed_account_id(indexed_account_id)?;
                println!("{:-10} {}", "Wallet:", indexed.wallet_id);
                println!("{:-10} {}", "Index:", indexed.index);
                Ok(())
            }
            Command::Kind { id } => {
                match WalletKind::detect(id).or_else(|| WalletKind::of_account(id)) {
                    Some(kind) => println!("{}", kind),
                    None => println!("{}", "unknown wallet kind".yellow()),
                }
                Ok(())
            }
            Command::BuildPath { template, index } => {
                let template = normalize_path_template(template);
                println!("{}", build_path_from_template(&template, *index)?);
                Ok(())
            }
            Command::FindIndex { template, path } => {
                match find_index_from_template(template, path) {
                    Some(index) => println!("{}", index),
                    None => println!(
                        "{} `{}` does not match `{}`",
                        "Warning:".yellow(),
                        path,
                        beautify_path_template(template)
                    ),
                }
                Ok(())
            }
            Command::UtxoPath { path } => {
                println!("{}", format_utxo_path(path)?);
                Ok(())
            }
            Command::LightningPath {
                path,
                testnet,
                reverse,
            } => {
                let converted = if *reverse {
                    ln_to_btc_path(path, *testnet)
                } else {
                    btc_to_ln_path(path, *testnet)
                };
                println!("{}", converted);
                Ok(())
            }
            Command::Networks { yaml } => {
                let registry = self.registry()?;
                if *yaml {
                    print!("{}", serde_yaml::to_string(&registry)?);
                    return Ok(());
                }
                for network in &registry {
                    println!(
                        "{:-16} {:-24} {:-12} {}{}",
                        network.key.bright_white(),
                        network.id,
                        network.impl_name,
                        network.name,
                        if network.is_testnet { " (testnet)" } else { "" }
                    );
                }
                Ok(())
            }
        }
    }

    fn detect(&self, key: &str, grouped: bool) -> Result<(), Error> {
        let registry = self.registry()?;
        let classifier = KeyFormatClassifier::new(&registry);
        let detection = classifier.detect(key);
        if detection.is_empty() {
            println!("{}", "no networks match the key format".yellow());
            return Ok(());
        }
        if !grouped {
            print_networks(&detection.networks);
            return Ok(());
        }
        for group in &detection.grouped_by_impl {
            println!("{} {}", group.impl_name.bright_white(), group.uuid.dimmed());
            for network in &group.networks {
                println!("  {}", network);
            }
        }
        Ok(())
    }
}

fn read_registry(path: &Path) -> Result<NetworkRegistry, Error> {
    debug!(file = %path.display(), "loading network registry");
    let file = fs::File::open(path)?;
    Ok(serde_yaml::from_reader(file)?)
}

fn print_networks(networks: &[DetectedNetwork]) {
    if networks.is_empty() {
        println!("{}", "no networks match".yellow());
    }
    for network in networks {
        println!("{}", network);
    }
}

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum Error {
    #[from(io::Error)]
    Io(IoError),

    #[from]
    Yaml(serde_yaml::Error),

    /// account configuration is incomplete: {0}
    #[from]
    #[display(doc_comments)]
    Configuration(ConfigurationError),

    /// invalid derivation path: {0}
    #[from]
    #[display(doc_comments)]
    Validation(ValidationError),
}

impl Error {
    fn from_accounts(err: wallet::accounts::Error) -> Error {
        match err {
            wallet::accounts::Error::Configuration(err) => Error::Configuration(err),
            wallet::accounts::Error::Validation(err) => Error::Validation(err),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = args.exec() {
        eprintln!("{}: {}\n", "Error".bright_red(), err);
    }
}
