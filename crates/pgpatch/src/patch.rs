//! Whitelisted SET-clause building.
//!
//! This module renders the subset of a [`Fields`] object allowed by an
//! explicit whitelist into a `SET col = $1, col2 = $2, ...` fragment plus
//! the matching positional values. Keys missing from the whitelist never
//! reach the output, no matter what the input object carries.

use heck::ToSnakeCase;
use tokio_postgres::types::ToSql;

use crate::allow::IntoAllowList;
use crate::error::{PatchError, PatchResult};
use crate::fields::Fields;
use crate::param::ParamList;

/// A rendered patch: the `SET` clause plus its positional values.
///
/// `values()[i]` is bound to the `$i+1` placeholder of `set()` (shifted
/// when built through [`patch_with_offset`]).
#[derive(Clone, Debug)]
pub struct Patch {
    set: String,
    values: ParamList,
}

impl Patch {
    /// The SQL fragment, e.g. `SET display_name = $1, email = $2`.
    pub fn set(&self) -> &str {
        &self.set
    }

    /// The values aligned with the fragment's placeholders.
    pub fn values(&self) -> &ParamList {
        &self.values
    }

    /// Value references in the shape tokio-postgres query methods take.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.as_refs()
    }

    /// Number of assignments in the fragment.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the patch has no assignments (never the case for a built patch).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into the fragment and its values.
    pub fn into_parts(self) -> (String, ParamList) {
        (self.set, self.values)
    }
}

/// Build a `SET` clause from the whitelisted keys of `source`.
///
/// Whitelisted names absent from `source` are skipped; source keys that are
/// not whitelisted never reach the output. Assignments follow whitelist
/// order, and column names render as snake_case.
///
/// # Example
/// ```ignore
/// use pgpatch::{Fields, patch};
///
/// let mut row = Fields::new();
/// row.insert("displayName", "Alice")
///     .insert("email", "alice@example.com")
///     .insert("isAdmin", true); // not whitelisted below
///
/// let patch = patch(&row, ["displayName", "email", "avatarUrl"])?;
/// assert_eq!(patch.set(), "SET display_name = $1, email = $2");
/// assert_eq!(patch.values().len(), 2);
/// ```
///
/// Fails with [`PatchError::EmptyPatch`] when no whitelisted key is present
/// on `source`, so callers never issue a malformed `UPDATE ... SET`.
pub fn patch(source: &Fields, allow: impl IntoAllowList) -> PatchResult<Patch> {
    patch_with_offset(source, allow, 0)
}

/// Like [`patch`], with placeholders starting at `$offset + 1`.
///
/// Use this when the fragment is spliced after parameters the caller has
/// already numbered:
///
/// ```ignore
/// // UPDATE users SET email = $2 WHERE id = $1
/// let patch = patch_with_offset(&row, ["email"], 1)?;
/// assert_eq!(patch.set(), "SET email = $2");
/// ```
pub fn patch_with_offset(
    source: &Fields,
    allow: impl IntoAllowList,
    offset: usize,
) -> PatchResult<Patch> {
    let allow = allow.into_allow_list();

    let mut expressions = Vec::new();
    let mut values = ParamList::new();
    let mut seen: Vec<&str> = Vec::new();

    // Whitelist order decides placement; the first occurrence of a
    // duplicated name wins.
    for name in &allow {
        if seen.contains(&name.as_str()) {
            continue;
        }
        seen.push(name.as_str());

        let Some(param) = source.get(name) else {
            continue;
        };
        expressions.push(format!(
            "{} = ${}",
            name.to_snake_case(),
            offset + values.len() + 1
        ));
        values.push(param.clone());
    }

    if expressions.is_empty() {
        return Err(PatchError::EmptyPatch);
    }

    let set = format!("SET {}", expressions.join(", "));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "pgpatch.sql",
        param_count = values.len(),
        set = %set,
    );

    Ok(Patch { set, values })
}
