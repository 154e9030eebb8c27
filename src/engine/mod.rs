// Core encode engine - independent of UI

pub mod core;
pub mod worker;

pub use self::core::*;
pub use worker::{JobRunner, WorkerMessage};
