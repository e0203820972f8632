//! Link reconciliation between an actor and its movies.
//!
//! Given the movie ids an actor is currently linked to and the ids submitted
//! in an update payload, [`plan_link_changes`] computes which `actor_movie`
//! rows to insert and which to delete. Execution is left to the repository,
//! which applies the plan inside the update transaction.

use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;

use crate::types::DbId;

/// How a submitted movie list is reconciled with the stored links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Diff-and-toggle: a submitted id that is already linked gets unlinked,
    /// a submitted id that is not linked gets linked, and every stored link
    /// the payload does not mention is dropped. Not idempotent: submitting
    /// the same list twice undoes the first submission.
    #[default]
    Toggle,
    /// Desired-state replace: after the update the actor is linked to
    /// exactly the submitted ids. Idempotent.
    Replace,
}

impl FromStr for LinkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(LinkMode::Toggle),
            "replace" => Ok(LinkMode::Replace),
            other => Err(format!(
                "Unknown link mode '{other}'. Valid: toggle, replace"
            )),
        }
    }
}

/// Rows to insert into and delete from `actor_movie` for a single actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPlan {
    pub insert: Vec<DbId>,
    pub delete: Vec<DbId>,
}

impl LinkPlan {
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty() && self.delete.is_empty()
    }
}

/// Plan the link changes for one actor.
///
/// Duplicate ids in `incoming` collapse to their first occurrence. Deletions
/// of links the payload does not mention are emitted in ascending id order;
/// everything else follows payload order.
pub fn plan_link_changes(existing: &[DbId], incoming: &[DbId], mode: LinkMode) -> LinkPlan {
    let mut seen = HashSet::with_capacity(incoming.len());
    let incoming: Vec<DbId> = incoming
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    let mut remaining: BTreeSet<DbId> = existing.iter().copied().collect();
    let mut plan = LinkPlan::default();

    for id in incoming {
        let was_linked = remaining.remove(&id);
        match (mode, was_linked) {
            (LinkMode::Toggle, true) => plan.delete.push(id),
            (_, false) => plan.insert.push(id),
            (LinkMode::Replace, true) => {}
        }
    }

    plan.delete.extend(remaining);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply a plan to a link set the way the repository does.
    fn apply(existing: &[DbId], plan: &LinkPlan) -> BTreeSet<DbId> {
        let mut links: BTreeSet<DbId> = existing.iter().copied().collect();
        for id in &plan.delete {
            links.remove(id);
        }
        for id in &plan.insert {
            links.insert(*id);
        }
        links
    }

    // -- Toggle --

    #[test]
    fn toggle_removes_mentioned_and_unmentioned_links() {
        let plan = plan_link_changes(&[1, 2], &[2, 3], LinkMode::Toggle);
        assert_eq!(plan.insert, vec![3]);
        assert_eq!(plan.delete, vec![2, 1]);
        assert_eq!(apply(&[1, 2], &plan), BTreeSet::from([3]));
    }

    #[test]
    fn toggle_is_not_idempotent() {
        let first = plan_link_changes(&[], &[4, 5], LinkMode::Toggle);
        let after_first = apply(&[], &first);
        assert_eq!(after_first, BTreeSet::from([4, 5]));

        let existing: Vec<DbId> = after_first.iter().copied().collect();
        let second = plan_link_changes(&existing, &[4, 5], LinkMode::Toggle);
        assert!(apply(&existing, &second).is_empty());
    }

    #[test]
    fn toggle_with_empty_payload_drops_everything() {
        let plan = plan_link_changes(&[3, 1, 2], &[], LinkMode::Toggle);
        assert!(plan.insert.is_empty());
        assert_eq!(plan.delete, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_incoming_ids_are_collapsed() {
        let plan = plan_link_changes(&[], &[7, 7, 8], LinkMode::Toggle);
        assert_eq!(plan.insert, vec![7, 8]);
        assert!(plan.delete.is_empty());
    }

    // -- Replace --

    #[test]
    fn replace_reaches_desired_state() {
        let plan = plan_link_changes(&[1, 2], &[2, 3], LinkMode::Replace);
        assert_eq!(plan.insert, vec![3]);
        assert_eq!(plan.delete, vec![1]);
        assert_eq!(apply(&[1, 2], &plan), BTreeSet::from([2, 3]));
    }

    #[test]
    fn replace_is_idempotent() {
        let plan = plan_link_changes(&[2, 3], &[2, 3], LinkMode::Replace);
        assert!(plan.is_empty());
    }

    #[test]
    fn replace_with_empty_payload_drops_everything() {
        let plan = plan_link_changes(&[5, 6], &[], LinkMode::Replace);
        assert_eq!(plan.delete, vec![5, 6]);
    }

    // -- Parsing --

    #[test]
    fn link_mode_parsing() {
        assert_eq!("toggle".parse::<LinkMode>(), Ok(LinkMode::Toggle));
        assert_eq!(" Replace ".parse::<LinkMode>(), Ok(LinkMode::Replace));
        assert!("merge".parse::<LinkMode>().is_err());
        assert_eq!(LinkMode::default(), LinkMode::Toggle);
    }
}
