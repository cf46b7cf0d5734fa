//! Reviewer identity sets parsed from the Agree/Disagree columns

use std::collections::BTreeSet;
use std::fmt;

/// Separator between identities inside a single Agree/Disagree cell
pub const IDENTITY_SEPARATOR: char = ';';

/// The set of reviewer identities (ORCIDs) recorded in one identifier cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySet(BTreeSet<String>);

/// An identity that appears more than once in the same cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedIdentity {
    pub identity: String,
}

impl IdentitySet {
    /// Parse a raw cell value.
    ///
    /// The value is split on `;`, each piece is trimmed and empty pieces are
    /// dropped, so a blank cell yields the empty set. The same identity listed
    /// twice is one person voting twice and is rejected.
    pub fn parse(raw: &str) -> Result<Self, RepeatedIdentity> {
        let mut identities = BTreeSet::new();
        for piece in pieces(raw) {
            if !identities.insert(piece.to_string()) {
                return Err(RepeatedIdentity {
                    identity: piece.to_string(),
                });
            }
        }
        Ok(Self(identities))
    }

    /// Parse a raw cell value, silently merging repeated identities
    pub fn parse_collapsing(raw: &str) -> Self {
        pieces(raw).collect()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.0.contains(identity)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Identities present in both sets, in sorted order
    pub fn intersection<'a>(&'a self, other: &'a IdentitySet) -> Vec<&'a str> {
        self.0.intersection(&other.0).map(String::as_str).collect()
    }
}

fn pieces(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(IDENTITY_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

impl fmt::Display for IdentitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(";"))
    }
}

impl<S: Into<String>> FromIterator<S> for IdentitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
