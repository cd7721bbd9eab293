//! Reducers: pure functions from (state, action) to the next state.

use super::action::Envelope;

/// Pure transition function applied on every dispatch.
///
/// A reducer takes the previous state by value and returns the next one.
/// It must be total: actions it does not care about, including
/// [`Envelope::Initialise`], return the input state unchanged. It must also
/// be free of side effects; the store calls it exactly once per dispatch
/// and relies on nothing else.
///
/// Any `Fn(S, &Envelope<A>) -> S` is a reducer, so a plain function is
/// usually all that is needed.
///
/// # Example
///
/// ```rust
/// use unistore::core::{Action, Envelope, Reducer};
///
/// #[derive(Clone, Debug)]
/// enum Toggle {
///     Flip,
/// }
///
/// impl Action for Toggle {
///     fn name(&self) -> &str {
///         "FLIP"
///     }
/// }
///
/// fn light(on: bool, action: &Envelope<Toggle>) -> bool {
///     match action {
///         Envelope::Action(Toggle::Flip) => !on,
///         Envelope::Initialise => on,
///     }
/// }
///
/// assert!(light.reduce(false, &Envelope::Action(Toggle::Flip)));
/// assert!(!light.reduce(false, &Envelope::Initialise));
/// ```
pub trait Reducer<S, A> {
    /// Compute the state that follows `state` once `action` has happened.
    fn reduce(&self, state: S, action: &Envelope<A>) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &Envelope<A>) -> S,
{
    fn reduce(&self, state: S, action: &Envelope<A>) -> S {
        self(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Step {
        Add(i32),
        Double,
    }

    fn arithmetic(state: i32, action: &Envelope<Step>) -> i32 {
        match action.action() {
            Some(Step::Add(n)) => state + n,
            Some(Step::Double) => state * 2,
            None => state,
        }
    }

    #[test]
    fn function_items_are_reducers() {
        assert_eq!(arithmetic.reduce(3, &Envelope::Action(Step::Add(4))), 7);
        assert_eq!(arithmetic.reduce(3, &Envelope::Action(Step::Double)), 6);
    }

    #[test]
    fn closures_are_reducers() {
        let offset = 10;
        let shifted = move |state: i32, action: &Envelope<Step>| match action {
            Envelope::Initialise => state + offset,
            Envelope::Action(_) => state,
        };

        assert_eq!(shifted.reduce(1, &Envelope::Initialise), 11);
        assert_eq!(shifted.reduce(1, &Envelope::Action(Step::Double)), 1);
    }

    #[test]
    fn reducer_is_deterministic() {
        let action = Envelope::Action(Step::Add(2));
        let first = arithmetic.reduce(5, &action);
        let second = arithmetic.reduce(5, &action);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_actions_leave_state_unchanged() {
        assert_eq!(arithmetic.reduce(9, &Envelope::Initialise), 9);
    }
}
