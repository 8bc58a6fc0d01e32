mod completion;
mod tracking;

pub use completion::{CompletionClient, MockCompletionClient};
pub use tracking::{LoggedRun, MockTrackingClient, RegisteredVersion, TrackingClient};
