//! State Machine Runtime
//!
//! Flat statecharts for component lifecycles (modal visibility, press
//! interaction). States and events are small `Copy` enums owned by the
//! component that drives the machine. Side effects stay with the caller:
//! `send` reports the transition that fired and the component reacts to it.

use std::fmt::Debug;

/// Bound shared by state and event types
pub trait FsmKey: Copy + Eq + Debug + 'static {}

impl<T: Copy + Eq + Debug + 'static> FsmKey for T {}

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S: FsmKey, E: FsmKey> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }

    fn matches(&self, state: S, event: E) -> bool {
        self.from_state == state && self.event == event
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S: FsmKey, E: FsmKey> StateMachineBuilder<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S: FsmKey, E: FsmKey> StateMachine<S, E> {
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Send an event to the state machine.
    ///
    /// Returns `Some((from, to))` when a transition fired, `None` when the
    /// event is not accepted in the current state.
    pub fn send(&mut self, event: E) -> Option<(S, S)> {
        let current = self.current_state;
        let to_state = self
            .transitions
            .iter()
            .find(|t| t.matches(current, event))
            .map(|t| t.to_state)?;

        self.current_state = to_state;
        tracing::trace!("fsm {:?} --{:?}--> {:?}", current, event, to_state);

        Some((current, to_state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Press {
        Idle,
        Pressed,
        Disabled,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Touch {
        Down,
        Up,
        Cancel,
    }

    fn press_machine() -> StateMachine<Press, Touch> {
        StateMachine::builder(Press::Idle)
            .on(Press::Idle, Touch::Down, Press::Pressed)
            .on(Press::Pressed, Touch::Up, Press::Idle)
            .on(Press::Pressed, Touch::Cancel, Press::Idle)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = press_machine();
        assert_eq!(fsm.current_state(), Press::Idle);

        assert_eq!(fsm.send(Touch::Down), Some((Press::Idle, Press::Pressed)));
        assert!(fsm.is_in(Press::Pressed));

        assert_eq!(fsm.send(Touch::Up), Some((Press::Pressed, Press::Idle)));
        assert!(fsm.is_in(Press::Idle));
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut fsm = press_machine();
        assert_eq!(fsm.send(Touch::Up), None);
        assert!(fsm.is_in(Press::Idle));
    }

    #[test]
    fn test_first_matching_transition_wins() {
        let mut fsm = StateMachine::builder(Press::Idle)
            .on(Press::Idle, Touch::Down, Press::Pressed)
            .on(Press::Idle, Touch::Down, Press::Disabled)
            .build();
        assert_eq!(fsm.send(Touch::Down), Some((Press::Idle, Press::Pressed)));
    }

    #[test]
    fn test_state_without_transitions_is_terminal() {
        let mut fsm: StateMachine<Press, Touch> = StateMachine::builder(Press::Disabled).build();
        assert_eq!(fsm.send(Touch::Down), None);
        assert!(fsm.is_in(Press::Disabled));
    }
}
