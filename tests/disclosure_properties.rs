// State-machine tests for the exclusive disclosure widget: the
// at-most-one-open invariant under arbitrary click sequences, toggle
// idempotence, and the inert authoring-mode variant.

use helpdeck::core::disclosure::DisclosureSet;

fn open_count(set: &DisclosureSet) -> usize {
    (0..set.len()).filter(|&index| set.is_open(index)).count()
}

#[test]
fn exclusive_open_holds_for_every_click_sequence() {
    let clicks = [1usize, 2, 2, 0, 0, 1, 1, 2, 0, 2, 1, 0];
    let mut set = DisclosureSet::interactive(3);
    assert_eq!(open_count(&set), 0);

    for &click in &clicks {
        set.toggle(click);
        assert!(open_count(&set) <= 1, "invariant broken after click {click}");
    }
}

#[test]
fn worked_three_panel_scenario() {
    // all closed; click 1 → [F,T,F]; click 2 → [F,F,T]; click 2 → [F,F,F]
    let mut set = DisclosureSet::interactive(3);

    set.toggle(1);
    assert!(!set.is_open(0) && set.is_open(1) && !set.is_open(2));

    set.toggle(2);
    assert!(!set.is_open(0) && !set.is_open(1) && set.is_open(2));

    set.toggle(2);
    assert!(!set.is_open(0) && !set.is_open(1) && !set.is_open(2));
}

#[test]
fn double_toggle_restores_prior_state() {
    for prior in [None, Some(0), Some(2)] {
        let mut set = DisclosureSet::interactive(4);
        if let Some(panel) = prior {
            set.toggle(panel);
        }
        let was_open = set.is_open(3);
        set.toggle(3);
        set.toggle(3);
        assert_eq!(set.is_open(3), was_open);
    }
}

#[test]
fn icon_rotation_is_a_function_of_open_state() {
    let mut set = DisclosureSet::interactive(3);
    for click in [0usize, 1, 1, 2, 0] {
        set.toggle(click);
        for panel in 0..set.len() {
            assert_eq!(set.is_rotated(panel), set.is_open(panel));
        }
    }
}

#[test]
fn fresh_sets_start_all_closed() {
    let set = DisclosureSet::interactive(5);
    assert_eq!(set.open_index(), None);

    // Rebuilding (a fresh render) drops any previous open state
    let mut set = DisclosureSet::interactive(5);
    set.toggle(2);
    let rebuilt = DisclosureSet::interactive(set.len());
    assert_eq!(rebuilt.open_index(), None);
}

#[test]
fn inert_variant_ignores_clicks() {
    let mut set = DisclosureSet::inert(3);
    assert!(!set.is_interactive());
    for click in 0..3 {
        assert!(!set.toggle(click));
    }
    assert_eq!(set.open_index(), None);
}
