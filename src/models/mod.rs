pub mod task;

pub use task::{Task, TaskId, TaskIdGenerator};
