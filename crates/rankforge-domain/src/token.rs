//! Rank token module - the identifier grammar for ranks and upgrades

use std::fmt;

/// Delimiter marking an upgrade token (`<source>_to_<destination>`)
pub const UPGRADE_DELIMITER: &str = "_to_";

/// An opaque rank identifier owned by a user.
///
/// Two sub-forms share this type:
/// - **Plain token**: any string without the `_to_` substring, denoting a
///   rank the user currently holds (`vip`, `donor`).
/// - **Upgrade token**: `<source>_to_<destination>`, denoting a pending
///   entitlement to replace `<source>` with `<destination>`.
///
/// A token containing `_to_` that splits to an empty source or destination
/// is malformed and behaves as a plain token everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RankId(String);

impl RankId {
    /// Create a RankId from any string token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the raw token text
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the raw token contains the upgrade delimiter at all.
    ///
    /// This is a syntactic check only; a token can contain `_to_` and still
    /// not be a well-formed upgrade (see [`RankId::upgrade_parts`]).
    pub fn contains_delimiter(&self) -> bool {
        self.0.contains(UPGRADE_DELIMITER)
    }

    /// Split a well-formed upgrade token into `(source, destination)`.
    ///
    /// The split is on the FIRST occurrence of `_to_` only; a source or
    /// destination that itself contains `_to_` is outside the token
    /// grammar's contract and is not re-split. Returns `None` for plain
    /// tokens and for malformed tokens with an empty half.
    ///
    /// # Examples
    ///
    /// ```
    /// use rankforge_domain::RankId;
    ///
    /// let upgrade = RankId::new("vip_to_vip_plus");
    /// let (source, destination) = upgrade.upgrade_parts().unwrap();
    /// assert_eq!(source.as_str(), "vip");
    /// assert_eq!(destination.as_str(), "vip_plus");
    ///
    /// assert!(RankId::new("vip").upgrade_parts().is_none());
    /// assert!(RankId::new("_to_vip").upgrade_parts().is_none());
    /// ```
    pub fn upgrade_parts(&self) -> Option<(RankId, RankId)> {
        let (source, destination) = self.0.split_once(UPGRADE_DELIMITER)?;
        if source.is_empty() || destination.is_empty() {
            return None;
        }
        Some((RankId::new(source), RankId::new(destination)))
    }

    /// Whether this token is a well-formed upgrade token
    pub fn is_upgrade(&self) -> bool {
        self.upgrade_parts().is_some()
    }
}

impl fmt::Display for RankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RankId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for RankId {
    fn from(token: String) -> Self {
        Self(token)
    }
}
