/// Outcome of a single [`AppEvent::apply`] call.
pub enum EventState {
    /// The event finished and can be dropped from the queue.
    Finished,
    /// The event waits on something external (e.g. a dialog thread) and
    /// must be polled again on the next frame.
    Busy,
}

/// An action queued by the UI and applied to the app between frames.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;
}
