mod architecture;
mod code;
mod environment;
mod function;
mod queue;
mod runtime;
mod secret;
mod stack;
mod template;
mod tracing;

pub use architecture::Architecture;
pub use code::Code;
pub use environment::Environment;
pub use function::FunctionProps;
pub use queue::Queue;
pub use runtime::Runtime;
pub use secret::Secret;
pub use stack::Stack;
pub use template::{CfnResource, Template};
pub use tracing::Tracing;
