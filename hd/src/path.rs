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

//! Derivation path templates.
//!
//! A template is a derivation path with a single `{index}` placeholder at
//! the position of the account index, like `m/44'/60'/0'/0/{index}`.
//! Legacy templates may use `*` wildcards instead; they are brought to the
//! canonical form with [`normalize_path_template`].

use std::fmt::{self, Display, Formatter};

use crate::{ValidationError, HARDENED_MARKER};

/// Placeholder marking account index position inside a path template
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Legacy wildcard used in path templates
pub const WILDCARD: char = '*';

/// Path template split at its index placeholder.
///
/// For `m/44'/60'/{index}'/0/0` the prefix is `m/44'/60'` and the suffix is
/// `{index}'/0/0`.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct SlicedTemplate {
    /// Part of the template preceding the placeholder, without trailing
    /// separator
    pub prefix: String,

    /// Placeholder followed by the rest of the template
    pub suffix: String,
}

impl SlicedTemplate {
    /// Joins prefix and suffix back into a path template
    pub fn template(&self) -> String {
        if self.prefix.is_empty() {
            self.suffix.clone()
        } else {
            format!("{}/{}", self.prefix, self.suffix)
        }
    }

    /// Builds derivation path for the account with the given index
    #[inline]
    pub fn build_path(&self, index: u32) -> Result<String, ValidationError> {
        build_path_from_template(&self.template(), index)
    }
}

impl Display for SlicedTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.template()) }
}

/// Splits path template at its index placeholder.
///
/// # Errors
///
/// If the template does not contain exactly one placeholder, or the
/// placeholder is glued to the preceding path segment.
pub fn slice_path_template(template: &str) -> Result<SlicedTemplate, ValidationError> {
    let (before, after) = template
        .split_once(INDEX_PLACEHOLDER)
        .ok_or_else(|| ValidationError::PlaceholderCount(template.to_owned(), 0))?;
    if after.contains(INDEX_PLACEHOLDER) {
        return Err(ValidationError::PlaceholderCount(
            template.to_owned(),
            template.matches(INDEX_PLACEHOLDER).count(),
        ));
    }
    let prefix = match before.strip_suffix('/') {
        Some(prefix) => prefix,
        None if before.is_empty() => before,
        None => return Err(ValidationError::DetachedPlaceholder(template.to_owned())),
    };
    Ok(SlicedTemplate {
        prefix: prefix.to_owned(),
        suffix: format!("{}{}", INDEX_PLACEHOLDER, after),
    })
}

/// Replaces the first `*` wildcard with the index placeholder and all other
/// wildcards with `0`.
pub fn normalize_path_template(template: &str) -> String {
    match template.split_once(WILDCARD) {
        Some((head, tail)) => format!(
            "{}{}{}",
            head,
            INDEX_PLACEHOLDER,
            tail.replace(WILDCARD, "0")
        ),
        None => template.to_owned(),
    }
}

/// Renders index placeholder as `*` for displaying templates to the user
pub fn beautify_path_template(template: &str) -> String {
    template.replacen(INDEX_PLACEHOLDER, "*", 1)
}

/// Normalizes path template and substitutes the placeholder with `index`.
///
/// # Errors
///
/// If the normalized template does not contain exactly one placeholder.
pub fn build_path_from_template(template: &str, index: u32) -> Result<String, ValidationError> {
    let normalized = normalize_path_template(template);
    match normalized.matches(INDEX_PLACEHOLDER).count() {
        1 => Ok(normalized.replacen(INDEX_PLACEHOLDER, &index.to_string(), 1)),
        count => Err(ValidationError::PlaceholderCount(template.to_owned(), count)),
    }
}

/// Extracts account index from a derivation path built with `template`.
///
/// Walks template and path segments side by side and parses the path
/// segment standing at the placeholder position, dropping hardened marker
/// when the placeholder itself is hardened. Returns `None` if the path is
/// too short or the aligned segment is not a number.
pub fn find_index_from_template(template: &str, path: &str) -> Option<u32> {
    let hardened = format!("{}{}", INDEX_PLACEHOLDER, HARDENED_MARKER);
    template
        .split('/')
        .zip(path.split('/'))
        .find_map(|(tpl, segment)| {
            if segment.is_empty() {
                None
            } else if tpl == INDEX_PLACEHOLDER {
                Some(segment.parse().ok())
            } else if tpl == hardened {
                Some(segment.trim_end_matches(HARDENED_MARKER).parse().ok())
            } else {
                None
            }
        })
        .flatten()
}

/// Drops `remove_count` trailing segments from the derivation path, together
/// with any empty segments left.
pub fn remove_path_last_segment(path: &str, remove_count: usize) -> String {
    let segments = path.split('/').collect::<Vec<_>>();
    let keep = segments.len().saturating_sub(remove_count);
    segments[..keep]
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds UTXO address path relative to the account: `0/{address_index}` for
/// receiving and `1/{address_index}` for change addresses.
pub fn build_utxo_address_rel_path(is_change: bool, address_index: u32) -> String {
    format!("{}/{}", if is_change { 1 } else { 0 }, address_index)
}
