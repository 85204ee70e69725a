//! Lesson-tree differ.
//!
//! Given the IDs of a course's persisted lessons and the submitted lesson
//! list, produce an edit plan: which existing lessons to delete, which to
//! update in place, and which to create. Matching is by ID only. Every
//! planned lesson carries its new `sort_order`, which is its index in the
//! submission.
//!
//! Questions have no identity contract: a matched lesson that submits a
//! `quiz` gets its whole question subtree replaced by the reconciler.
//!
//! Pure and deterministic. Never fails; payload shape is validated upstream.

use std::collections::HashSet;

use syllabus_core::payloads::LessonInput;

use crate::helpers::sort_order;

/// A submitted lesson matched to an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonUpdate<'a> {
    pub id: &'a str,
    pub sort_order: u32,
    pub input: &'a LessonInput,
}

/// A submitted lesson with no matching row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCreate<'a> {
    pub sort_order: u32,
    pub input: &'a LessonInput,
}

/// Edit plan for one course's lesson list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonPlan<'a> {
    /// Existing IDs absent from the submission, in their current order.
    pub deletes: Vec<&'a str>,
    /// Matched lessons, in submission order.
    pub updates: Vec<LessonUpdate<'a>>,
    /// New lessons, in submission order.
    pub creates: Vec<LessonCreate<'a>>,
}

impl LessonPlan<'_> {
    /// Number of lessons the course has once the plan is applied.
    #[must_use]
    pub fn final_count(&self) -> usize {
        self.updates.len() + self.creates.len()
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.deletes.is_empty() && self.updates.is_empty() && self.creates.is_empty()
    }
}

/// Compute the edit plan for `submitted` against the `existing` lesson IDs.
///
/// An entry whose ID matches an existing lesson is an update. Entries with no
/// ID, an unknown ID, or an ID already claimed by an earlier entry are creates.
#[must_use]
pub fn plan_lessons<'a>(existing: &'a [String], submitted: &'a [LessonInput]) -> LessonPlan<'a> {
    let known: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut plan = LessonPlan::default();

    for (index, input) in submitted.iter().enumerate() {
        let sort_order = sort_order(index);
        match input.id.as_deref() {
            Some(id) if known.contains(id) && claimed.insert(id) => {
                plan.updates.push(LessonUpdate {
                    id,
                    sort_order,
                    input,
                });
            }
            _ => plan.creates.push(LessonCreate { sort_order, input }),
        }
    }

    plan.deletes = existing
        .iter()
        .map(String::as_str)
        .filter(|id| !claimed.contains(id))
        .collect();

    plan
}
