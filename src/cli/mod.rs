//! Command-line shell around the version rules

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
