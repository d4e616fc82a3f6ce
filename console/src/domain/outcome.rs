//! Value-level outcomes reported by mutation handlers.
//!
//! Mutations against an absent target are not errors in this core: they
//! degrade to no-ops that are reported back to the caller. The policy is
//! uniform across every handler so UI code can branch without exception
//! handling. See the store module for where each outcome is produced.

/// Result of a mutation aimed at one existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "missing-target no-ops should be surfaced, not dropped"]
pub enum MutationOutcome {
    /// The target existed and the mutation was applied.
    Applied,
    /// The target was absent; the store is unchanged.
    MissingTarget,
}

impl MutationOutcome {
    /// `true` when the mutation changed the store.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of a create-or-replace submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "missing-target no-ops should be surfaced, not dropped"]
pub enum Submitted<Id> {
    /// A new record was appended under this freshly minted identity.
    Created(Id),
    /// The existing record with this identity was replaced wholesale.
    Replaced(Id),
    /// The submission carried an identity the store does not hold; the
    /// store is unchanged.
    MissingTarget,
}

impl<Id> Submitted<Id> {
    /// Identity touched by the submission, when one was.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::Created(id) | Self::Replaced(id) => Some(id),
            Self::MissingTarget => None,
        }
    }

    /// `true` when the submission changed the store.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::MissingTarget)
    }
}
