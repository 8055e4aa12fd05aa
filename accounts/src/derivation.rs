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

//! Resolution of the account index of derived accounts.

use wallet_hd::find_index_from_template;

use crate::account::parse_indexed_account_id;
use crate::non_empty;

/// Stored properties of a derived account the account index can be
/// recovered from
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PathIndexSource<'a> {
    /// Explicitly stored account index
    pub path_index: Option<u32>,
    /// Id of the indexed account the account belongs to
    pub indexed_account_id: Option<&'a str>,
    /// Derivation path template
    pub template: Option<&'a str>,
    /// Derivation path
    pub path: Option<&'a str>,
}

/// Resolves account index: the stored index, else the index of the indexed
/// account, else the index found in the path at the template placeholder
/// position. Sources which do not produce a valid index are skipped.
pub fn hd_account_path_index(source: &PathIndexSource) -> Option<u32> {
    source
        .path_index
        .or_else(|| {
            non_empty(source.indexed_account_id)
                .and_then(|id| parse_indexed_account_id(id).ok())
                .map(|indexed| indexed.index)
        })
        .or_else(|| {
            let template = non_empty(source.template)?;
            let path = non_empty(source.path)?;
            find_index_from_template(template, path)
        })
}
