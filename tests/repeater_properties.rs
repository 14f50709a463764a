// Property-style tests for the ordered repeater operations: order
// preservation, boundary no-ops, swap involution, and field-update
// isolation, exercised through the same record shapes the blocks use.

use helpdeck::core::block::FaqItem;
use helpdeck::core::repeater::{
    append, can_remove, move_down, move_up, remove_at, update_at, RepeaterPolicy,
};

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn sample() -> Vec<FaqItem> {
    vec![faq("A", "1"), faq("B", "2"), faq("C", "3")]
}

#[test]
fn order_preservation_under_mixed_operations() {
    let mut items: Vec<FaqItem> = Vec::new();
    let mut appends = 0usize;
    let mut removes = 0usize;

    for index in 0..8 {
        append(&mut items, faq(&format!("Q{index}"), &format!("A{index}")));
        appends += 1;
    }
    // A few moves do not change the length
    assert!(move_up(&mut items, 3));
    assert!(move_down(&mut items, 5));
    assert!(!move_up(&mut items, 0));

    if remove_at(&mut items, 2, RepeaterPolicy::UNBOUNDED) {
        removes += 1;
    }
    if remove_at(&mut items, 99, RepeaterPolicy::UNBOUNDED) {
        removes += 1;
    }

    assert_eq!(items.len(), appends - removes);

    // Relative order matches the applied swaps: Q2/Q3 swapped, Q5/Q6
    // swapped, then Q3 removed at its new slot.
    let questions: Vec<&str> = items.iter().map(|item| item.question.as_str()).collect();
    assert_eq!(questions, vec!["Q0", "Q1", "Q2", "Q4", "Q6", "Q5", "Q7"]);
}

#[test]
fn boundary_moves_leave_collection_identical() {
    let mut items = sample();
    let before = items.clone();

    assert!(!move_up(&mut items, 0));
    assert_eq!(items, before);

    let last = items.len() - 1;
    assert!(!move_down(&mut items, last));
    assert_eq!(items, before);
}

#[test]
fn move_up_then_move_down_is_involution() {
    for pivot in 1..3 {
        let mut items = sample();
        let before = items.clone();
        assert!(move_up(&mut items, pivot));
        assert!(move_down(&mut items, pivot - 1));
        assert_eq!(items, before, "pivot {pivot} should restore the original");
    }
}

#[test]
fn reference_scenario_from_observed_behavior() {
    // [A,B,C] → moveDown(0) → [B,A,C] → removeAt(2) → [B,A] → moveUp(0) no-op
    let mut items = sample();

    assert!(move_down(&mut items, 0));
    assert_eq!(items, vec![faq("B", "2"), faq("A", "1"), faq("C", "3")]);

    assert!(remove_at(&mut items, 2, RepeaterPolicy::UNBOUNDED));
    assert_eq!(items, vec![faq("B", "2"), faq("A", "1")]);

    let before = items.clone();
    assert!(!move_up(&mut items, 0));
    assert_eq!(items, before);
}

#[test]
fn update_touches_exactly_one_field_of_one_record() {
    let mut items = sample();
    let before = items.clone();

    assert!(update_at(&mut items, 1, |item| {
        item.answer = "two".to_string()
    }));

    assert_eq!(items[1].answer, "two");
    assert_eq!(items[1].question, before[1].question);
    assert_eq!(items[0], before[0]);
    assert_eq!(items[2], before[2]);
}

#[test]
fn minimum_cardinality_disables_last_removal() {
    let mut items = vec![faq("only", "one")];
    assert!(!can_remove(items.len(), RepeaterPolicy::KEEP_ONE));
    assert!(!remove_at(&mut items, 0, RepeaterPolicy::KEEP_ONE));
    assert_eq!(items.len(), 1);

    // The same list empties out fine without the policy
    assert!(remove_at(&mut items, 0, RepeaterPolicy::UNBOUNDED));
    assert!(items.is_empty());
}
