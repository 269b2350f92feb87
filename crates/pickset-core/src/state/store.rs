use super::events::Event;
use super::types::Command;

/// Trait for dispatching selection commands.
///
/// Decouples command definitions from their execution. Front ends (CLI,
/// GUI bindings) build `Command`s from user gestures and re-render from the
/// returned events.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received, each one to
///   completion before the next.
/// - **Idempotency**: Repeated transfers are no-ops (selecting an already
///   selected item emits nothing).
/// - **Error handling**: Implementations define their own error type.
/// - **Events**: On success, dispatch returns the `Vec<Event>` describing what
///   changed, in the order it changed. An empty vector means the command was a
///   no-op.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
