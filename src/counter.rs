//! Click counter: the store driving a single integer.
//!
//! Three actions move the count up, down, or back to zero. The view is a
//! line of text; a host renders it again from an observer after every
//! dispatch.

use crate::action_enum;
use crate::core::Envelope;
use crate::store::Store;

pub type Count = i64;

action_enum! {
    pub enum CounterAction {
        Increase as "INCREASE",
        Decrease as "DECREASE",
        Reset as "RESET",
    }
}

pub fn increase_count() -> CounterAction {
    CounterAction::Increase
}

pub fn decrease_count() -> CounterAction {
    CounterAction::Decrease
}

pub fn reset_count() -> CounterAction {
    CounterAction::Reset
}

/// Reducer for the counter. The initialise action leaves the count alone.
pub fn click_counter_app(state: Count, action: &Envelope<CounterAction>) -> Count {
    match action {
        Envelope::Action(CounterAction::Increase) => state + 1,
        Envelope::Action(CounterAction::Decrease) => state - 1,
        Envelope::Action(CounterAction::Reset) => 0,
        Envelope::Initialise => state,
    }
}

/// A counter store starting at zero.
pub fn counter_store() -> Store<Count, CounterAction> {
    Store::new(click_counter_app)
}

/// Button labels in display order, paired with the action each one sends.
pub fn buttons() -> [(&'static str, fn() -> CounterAction); 3] {
    [
        ("+", increase_count),
        ("-", decrease_count),
        ("Reset", reset_count),
    ]
}

/// Render the counter view: the count, then one bracketed label per button.
pub fn render(count: Count) -> String {
    let mut view = count.to_string();
    for (label, _) in buttons() {
        view.push_str(&format!(" [{label}]"));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Reducer};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn action_constructors_carry_expected_names() {
        assert_eq!(increase_count().name(), "INCREASE");
        assert_eq!(decrease_count().name(), "DECREASE");
        assert_eq!(reset_count().name(), "RESET");
    }

    #[test]
    fn reducer_handles_each_action() {
        let reduce = |state: Count, action: CounterAction| {
            click_counter_app.reduce(state, &Envelope::Action(action))
        };
        assert_eq!(reduce(4, CounterAction::Increase), 5);
        assert_eq!(reduce(4, CounterAction::Decrease), 3);
        assert_eq!(reduce(4, CounterAction::Reset), 0);
        assert_eq!(click_counter_app(4, &Envelope::Initialise), 4);
    }

    #[test]
    fn count_can_go_negative() {
        let store = counter_store();
        store.dispatch(decrease_count());
        store.dispatch(decrease_count());
        assert_eq!(store.get_state(), -2);
    }

    #[test]
    fn counter_walkthrough() {
        let store = counter_store();
        assert_eq!(store.get_state(), 0);

        store.dispatch(increase_count());
        store.dispatch(increase_count());
        assert_eq!(store.get_state(), 2);

        store.dispatch(decrease_count());
        assert_eq!(store.get_state(), 1);

        store.dispatch(reset_count());
        assert_eq!(store.get_state(), 0);
    }

    #[test]
    fn observer_rerenders_after_each_click() {
        let store = counter_store();
        let screen = Rc::new(RefCell::new(render(store.get_state())));
        let renders = Rc::new(Cell::new(0));

        let weak = store.downgrade();
        let target = Rc::clone(&screen);
        let counter = Rc::clone(&renders);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                *target.borrow_mut() = render(store.get_state());
                counter.set(counter.get() + 1);
            }
        });

        for (_, click) in buttons() {
            store.dispatch(click());
        }

        assert_eq!(renders.get(), 3);
        assert_eq!(*screen.borrow(), "0 [+] [-] [Reset]");
    }

    #[test]
    fn render_lists_buttons_in_order() {
        assert_eq!(render(7), "7 [+] [-] [Reset]");
        assert_eq!(render(-1), "-1 [+] [-] [Reset]");
    }
}
