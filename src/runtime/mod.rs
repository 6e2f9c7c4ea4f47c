//! Runtime module - drives the model from host calls and timers
//!
//! - `scheduler` - virtual-clock queue for transition completion timers
//! - `slidebars` - public controller API over model, update and scheduler

pub mod scheduler;
pub mod slidebars;

pub use scheduler::Scheduler;
pub use slidebars::Slidebars;
