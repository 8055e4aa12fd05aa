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

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::SEPARATOR;

/// Errors parsing network id string representation
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum NetworkIdError {
    /// network id `{0}` has no implementation name before the `--` separator
    NoImpl(String),

    /// network id `{0}` has no chain id after the `--` separator
    NoChainId(String),
}

/// Returns the implementation part of a network id string, i.e. everything
/// before the first separator. A string without separator is treated as a
/// bare implementation name.
pub fn network_impl(network_id: &str) -> &str {
    network_id
        .split_once(SEPARATOR)
        .map(|(impl_name, _)| impl_name)
        .unwrap_or(network_id)
}

/// Network identifier in `{impl}--{chainId}` form.
///
/// Type guarantees that both implementation name and chain id are non-empty.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct NetworkId {
    impl_name: String,
    chain_id: String,
}

impl NetworkId {
    /// Constructs network id from its parts.
    ///
    /// # Errors
    ///
    /// If either of the parts is empty.
    pub fn with(
        impl_name: impl Into<String>,
        chain_id: impl Into<String>,
    ) -> Result<NetworkId, NetworkIdError> {
        let impl_name = impl_name.into();
        let chain_id = chain_id.into();
        if impl_name.is_empty() {
            return Err(NetworkIdError::NoImpl(format!("{}{}{}", impl_name, SEPARATOR, chain_id)));
        }
        if chain_id.is_empty() {
            return Err(NetworkIdError::NoChainId(format!(
                "{}{}{}",
                impl_name, SEPARATOR, chain_id
            )));
        }
        Ok(NetworkId {
            impl_name,
            chain_id,
        })
    }

    /// Implementation (protocol family) name
    #[inline]
    pub fn impl_name(&self) -> &str { &self.impl_name }

    /// Chain id within the implementation
    #[inline]
    pub fn chain_id(&self) -> &str { &self.chain_id }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.impl_name, SEPARATOR, self.chain_id)
    }
}

impl FromStr for NetworkId {
    type Err = NetworkIdError;

    /// Everything after the first separator is taken as the chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(SEPARATOR) {
            None => Err(NetworkIdError::NoChainId(s.to_owned())),
            Some(("", _)) => Err(NetworkIdError::NoImpl(s.to_owned())),
            Some((_, "")) => Err(NetworkIdError::NoChainId(s.to_owned())),
            Some((impl_name, chain_id)) => Ok(NetworkId {
                impl_name: impl_name.to_owned(),
                chain_id: chain_id.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for NetworkId {
    type Error = NetworkIdError;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> { NetworkId::from_str(&s) }
}

impl From<NetworkId> for String {
    #[inline]
    fn from(id: NetworkId) -> Self { id.to_string() }
}
