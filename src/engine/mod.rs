// ABOUTME: Container engine CLI surface: command building and process execution.
// ABOUTME: Everything that knows how the external engine is invoked lives here.

mod commands;
mod executor;
mod invocation;
mod proxy;

pub use commands::Engine;
pub use executor::{ExecError, Executor, ProcessExecutor};
pub use invocation::{CommandKind, Invocation, Streams};
pub use proxy::{EnvSnapshot, PROXY_KEYS, add_env_arg, augment_proxy_args};
