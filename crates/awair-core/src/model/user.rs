//! The Awair user that the configured credentials belong to.

use std::collections::HashMap;

use chrono::NaiveDate;

/// An Awair user account.
///
/// Primarily informational: profile fields plus the API quota and
/// usage tables for the account. Devices are fetched on demand through
/// [`Awair::devices`](crate::Awair::devices), not held here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique account id. The API documents it as a string.
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Typically `"MALE"`, `"FEMALE"`, or `"UNKNOWN"`.
    pub sex: Option<String>,
    /// Date of birth, when the profile has one.
    pub dob: Option<NaiveDate>,
    /// Account tier, which broadly maps to a set of API quotas.
    pub tier: Option<String>,
    /// Calls made per API scope in the current usage window.
    /// Usage windows reset at midnight.
    pub usages: HashMap<String, u64>,
    /// Maximum calls per API scope and usage window.
    pub permissions: HashMap<String, u64>,
}
