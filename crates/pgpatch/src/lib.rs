//! # pgpatch
//!
//! Whitelisted `SET` clause fragments for parameterized Postgres UPDATEs.
//!
//! Patch endpoints receive objects they cannot trust: a request body may
//! carry any field it likes. `pgpatch` renders only an explicit whitelist
//! of keys into a `SET col = $1, ...` fragment plus the matching positional
//! values, so mass-assignment never reaches the database.
//!
//! ## Features
//!
//! - **Whitelist enforcement**: keys off the list never reach the SQL or the values
//! - **Positional alignment**: `values()[i]` always backs the `$i+1` placeholder
//! - **snake_case columns**: camelCase API field names render as snake_case columns
//! - **tokio-postgres ready**: values are `ToSql` trait objects; `params_ref()` plugs
//!   straight into `query`/`execute`
//!
//! ```ignore
//! use pgpatch::{Fields, patch};
//!
//! let mut row = Fields::new();
//! row.insert("displayName", "Alice")
//!     .insert("email", "alice@example.com");
//!
//! let patch = patch(&row, ["displayName", "email", "avatarUrl"])?;
//! assert_eq!(patch.set(), "SET display_name = $1, email = $2");
//!
//! let sql = format!("UPDATE users {} WHERE id = $3", patch.set());
//! // let mut params = patch.params_ref();
//! // params.push(&user_id);
//! // client.execute(&sql, &params).await?;
//! ```
//!
//! Building a patch with no whitelisted key present fails with
//! [`PatchError::EmptyPatch`] instead of producing a malformed `SET `.

pub mod allow;
pub mod error;
pub mod fields;
pub mod param;
pub mod patch;

pub use allow::IntoAllowList;
pub use error::{PatchError, PatchResult};
pub use fields::Fields;
pub use param::{Param, ParamList};
pub use patch::{Patch, patch, patch_with_offset};
