//! Subprocess execution.

pub mod command;
pub mod mock;

pub use command::{
    output, run, CommandOutput, FailureKind, Invocation, InvokeError, Invoker, SystemInvoker,
};
pub use mock::{MockInvoker, MockResponse};
