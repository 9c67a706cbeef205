/// Catch-all route that returns the canned heartbeat configuration payload for every request.
pub mod heartbeat;

pub use heartbeat::*;
