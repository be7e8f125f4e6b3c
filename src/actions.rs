//! Action item detection.
//!
//! A sentence is an action item if it contains task language: "should",
//! "need to", "deadline", and so on. Matching is case-insensitive
//! substring containment, so "We SHOULD ship" and "reassign" both match.
//! When no sentence matches, a fixed triage checklist stands in, so the
//! caller always has something actionable to show.

/// Phrases that mark a sentence as task-like.
///
/// Checked case-insensitively as substrings; a sentence containing any
/// one of them is an action item.
pub const ACTION_TRIGGERS: &[&str] = &[
    "should",
    "need to",
    "must",
    "action",
    "todo",
    "follow up",
    "next step",
    "assign",
    "deadline",
];

/// Stand-in action items used when no sentence contains a trigger.
pub const FALLBACK_ACTIONS: &[&str] = &[
    "Review the text and identify the top 1–2 priorities.",
    "Assign an owner for each priority.",
    "Set a target date for completion.",
];

/// Upper bound on the number of action items returned.
pub const MAX_ACTION_ITEMS: usize = 5;

/// Collect task-like sentences, in input order.
///
/// Each sentence is kept (with its original casing) if its lowercased
/// form contains any of [`ACTION_TRIGGERS`]; a sentence matching several
/// triggers appears once. If nothing matches, [`FALLBACK_ACTIONS`] is
/// returned instead. Either way the result holds at most
/// [`MAX_ACTION_ITEMS`] entries, keeping the first ones.
///
/// ## Example
///
/// ```rust
/// use gist::generate_action_items;
///
/// let sentences = ["We should finish this.", "Nice weather today."];
/// assert_eq!(generate_action_items(&sentences), vec!["We should finish this."]);
/// ```
#[must_use]
pub fn generate_action_items<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    let mut actions: Vec<String> = sentences
        .iter()
        .map(AsRef::as_ref)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            ACTION_TRIGGERS.iter().any(|trigger| lower.contains(trigger))
        })
        .map(ToString::to_string)
        .collect();

    if actions.is_empty() {
        actions = FALLBACK_ACTIONS.iter().map(ToString::to_string).collect();
    }

    actions.truncate(MAX_ACTION_ITEMS);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_sentence_kept_verbatim() {
        let sentences = ["We should finish this.", "Nice weather today."];
        assert_eq!(generate_action_items(&sentences), vec!["We should finish this."]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let sentences = ["The DEADLINE is Friday."];
        assert_eq!(generate_action_items(&sentences), vec!["The DEADLINE is Friday."]);
    }

    #[test]
    fn test_substring_matching() {
        // "reassign" contains "assign"
        let sentences = ["Reassign the ticket."];
        assert_eq!(generate_action_items(&sentences), vec!["Reassign the ticket."]);
    }

    #[test]
    fn test_multiple_triggers_single_entry() {
        let sentences = ["We must assign an owner before the deadline."];
        let actions = generate_action_items(&sentences);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_fallback_when_no_triggers() {
        let sentences = ["Nice weather today.", "Lovely day."];
        assert_eq!(generate_action_items(&sentences), FALLBACK_ACTIONS);
    }

    #[test]
    fn test_fallback_on_empty_input() {
        let sentences: [&str; 0] = [];
        assert_eq!(generate_action_items(&sentences), FALLBACK_ACTIONS);
    }

    #[test]
    fn test_capped_at_five() {
        let sentences: Vec<String> = (0..10).map(|i| format!("Item {i} must ship.")).collect();
        let actions = generate_action_items(&sentences);

        assert_eq!(actions.len(), MAX_ACTION_ITEMS);
        assert_eq!(actions[0], "Item 0 must ship.");
        assert_eq!(actions[4], "Item 4 must ship.");
    }

    #[test]
    fn test_input_order_preserved() {
        let sentences = [
            "Later: follow up with legal.",
            "No tasks here.",
            "First we need to draft the memo.",
        ];
        let actions = generate_action_items(&sentences);
        assert_eq!(
            actions,
            vec![
                "Later: follow up with legal.",
                "First we need to draft the memo.",
            ]
        );
    }
}
