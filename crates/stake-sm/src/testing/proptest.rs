//! Property-based testing macros for state machines.
//!
//! These use proptest to generate random states and events and verify that fundamental
//! properties of state machines are maintained.

/// Property: State machines should be deterministic.
///
/// Given the same initial state and event, the state machine should always produce the same
/// result.
///
/// # Arguments
/// * `$create_fn` - Function to create SM from state: `Fn(State) -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$state_strategy` - Proptest strategy for generating states
/// * `$event_strategy` - Proptest strategy for generating events
#[macro_export]
macro_rules! prop_deterministic {
    ($create_fn:expr, $get_state_fn:expr, $state_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn state_machine_is_deterministic(
                state in $state_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let mut sm1 = $create_fn(state.clone());
                let mut sm2 = $create_fn(state);

                let result1 = sm1.process_event(event.clone());
                let result2 = sm2.process_event(event);

                match (result1, result2) {
                    (Ok(out1), Ok(out2)) => {
                        proptest::prop_assert_eq!($get_state_fn(&sm1), $get_state_fn(&sm2));
                        proptest::prop_assert_eq!(out1.duties, out2.duties);
                    }
                    (Err(err1), Err(err2)) => {
                        proptest::prop_assert_eq!(err1, err2);
                    }
                    _ => {
                        proptest::prop_assert!(false, "Inconsistent results: one succeeded, one failed");
                    }
                }
            }
        }
    };
}

/// Property: Events must either take effect or produce an error.
///
/// State machines should never silently accept events without changing state or emitting duties,
/// and an error must leave the state untouched.
///
/// # Arguments
/// * `$create_fn` - Function to create SM from state: `Fn(State) -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$state_strategy` - Proptest strategy for generating states
/// * `$event_strategy` - Proptest strategy for generating events
#[macro_export]
macro_rules! prop_no_silent_acceptance {
    ($create_fn:expr, $get_state_fn:expr, $state_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn events_transition_or_error(
                state in $state_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let initial_state = state.clone();
                let mut sm = $create_fn(state);

                let result = sm.process_event(event);
                let final_state = $get_state_fn(&sm).clone();

                match result {
                    Ok(output) => {
                        let state_changed = initial_state != final_state;
                        let has_output = !output.duties.is_empty();

                        proptest::prop_assert!(
                            state_changed || has_output,
                            "Event was accepted but nothing happened (no state change or duties)"
                        );
                    }
                    Err(_) => {
                        proptest::prop_assert_eq!(
                            &initial_state,
                            &final_state,
                            "State changed despite error"
                        );
                    }
                }
            }
        }
    };
}
