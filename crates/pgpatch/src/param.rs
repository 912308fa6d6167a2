//! Positional value storage using Arc for clone-friendly patches.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// One positional SQL value, backing a `$N` placeholder.
///
/// Values are stored as `Arc<dyn ToSql>` so patches can be cloned and
/// handed across threads without copying the underlying data.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Wrap any bindable value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Borrow the value as the trait object tokio-postgres query methods take.
    pub fn as_dyn(&self) -> &(dyn ToSql + Sync) {
        // Arc<dyn ToSql + Send + Sync> -> &(dyn ToSql + Sync), dropping Send
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}

/// The ordered values of a patch: `values[i]` is bound to `$i+1`.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty value list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    pub(crate) fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate the values in placeholder order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Get all values as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_dyn()).collect()
    }
}
