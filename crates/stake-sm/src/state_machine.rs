//! Generic state machine infrastructure.

/// Generic output from a state machine after processing an event.
///
/// Holds the duties that need to be executed externally for the transition to take effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SMOutput<D> {
    /// The duties that need to be performed by external executors.
    pub duties: Vec<D>,
}

impl<D> Default for SMOutput<D> {
    fn default() -> Self {
        Self { duties: Vec::new() }
    }
}

impl<D> SMOutput<D> {
    /// Creates a new empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an output with the given duties.
    pub const fn with_duties(duties: Vec<D>) -> Self {
        Self { duties }
    }
}

/// Trait for all state machines in this workspace.
///
/// Each state machine specifies its own duty, event and error types through associated types.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for DepositSM {
///     type Duty = DepositDuty;
///     type Event = DepositEvent;
///     type Error = DSMError;
///
///     fn process_event(&mut self, event: Self::Event) -> Result<SMOutput<Self::Duty>, Self::Error> {
///         // Implementation
///     }
/// }
/// ```
pub trait StateMachine {
    /// The type of duties this state machine can emit.
    type Duty;

    /// The type of events this state machine can process.
    type Event;

    /// The error type returned when event processing fails.
    type Error;

    /// Processes an event and returns the duties to execute, or an error.
    ///
    /// On error the state machine is left exactly as it was before the call.
    fn process_event(&mut self, event: Self::Event) -> Result<SMOutput<Self::Duty>, Self::Error>;
}
