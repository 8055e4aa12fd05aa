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

/// Errors in derivation paths and path templates
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum ValidationError {
    /// invalid UTXO path `{0}`: path should start with `m`
    NoRoot(String),

    /// invalid UTXO path `{0}`: path should have at least three hardened
    /// levels
    TooShallow(String),

    /// invalid UTXO path `{0}`: level {1} should be hardened
    UnhardenedLevel(String, usize),

    /// path template `{0}` must contain exactly one index placeholder, while
    /// {1} were found
    PlaceholderCount(String, usize),

    /// index placeholder in path template `{0}` does not start a path
    /// segment
    DetachedPlaceholder(String),
}
