pub mod events;
pub mod logger;
pub mod orchestrator;
pub mod state;

pub use events::BatchEvent;
pub use logger::BatchLog;
pub use orchestrator::BatchOrchestrator;
pub use state::BatchOptions;
