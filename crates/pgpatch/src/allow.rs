//! Whitelist-argument normalization.
//!
//! The patch builder accepts its whitelist either as a single field name or
//! as a sequence of names:
//!
//! ```ignore
//! patch(&row, "email")?;
//! patch(&row, ["displayName", "email"])?;
//! ```
//!
//! [`IntoAllowList`] flattens every accepted shape into one ordered list of
//! names before filtering.

/// Convert a whitelist argument into a flat, ordered list of field names.
///
/// This is mainly for ergonomics at the patch-builder boundary.
pub trait IntoAllowList {
    fn into_allow_list(self) -> Vec<String>;
}

impl IntoAllowList for &str {
    fn into_allow_list(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoAllowList for String {
    fn into_allow_list(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoAllowList for &String {
    fn into_allow_list(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<const N: usize> IntoAllowList for [&str; N] {
    fn into_allow_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoAllowList for &[&str] {
    fn into_allow_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoAllowList for Vec<&str> {
    fn into_allow_list(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoAllowList for Vec<String> {
    fn into_allow_list(self) -> Vec<String> {
        self
    }
}

impl IntoAllowList for &[String] {
    fn into_allow_list(self) -> Vec<String> {
        self.to_vec()
    }
}
