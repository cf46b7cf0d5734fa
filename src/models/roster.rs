use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A creator listed in the release metadata, allowed to vote on roadmap entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "orcid")]
    pub identity: String,
    pub name: String,
    pub affiliation: String,
    pub email: String,
}

/// The authoritative list of reviewers, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    reviewers: Vec<Reviewer>,
    identities: BTreeSet<String>,
}

impl Roster {
    /// Build a roster, returning the repeated identities if any reviewer is
    /// listed more than once.
    pub fn new(reviewers: Vec<Reviewer>) -> Result<Self, Vec<String>> {
        let mut identities = BTreeSet::new();
        let mut repeated = BTreeSet::new();
        for reviewer in &reviewers {
            if !identities.insert(reviewer.identity.clone()) {
                repeated.insert(reviewer.identity.clone());
            }
        }

        if !repeated.is_empty() {
            return Err(repeated.into_iter().collect());
        }

        Ok(Self {
            reviewers,
            identities,
        })
    }

    pub fn reviewers(&self) -> &[Reviewer] {
        &self.reviewers
    }

    pub fn identities(&self) -> &BTreeSet<String> {
        &self.identities
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.identities.contains(identity)
    }

    pub fn get(&self, identity: &str) -> Option<&Reviewer> {
        self.reviewers.iter().find(|r| r.identity == identity)
    }
}
