use crate::architecture::Architecture;
use crate::code::Code;
use crate::environment::Environment;
use crate::queue::Queue;
use crate::runtime::Runtime;
use crate::secret::Secret;
use crate::stack::Stack;
use crate::tracing::Tracing;
use std::time::Duration;

/// Deployment properties of a single Lambda function
///
/// A plain value handed to the rendering side, never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionProps {
    pub runtime: Runtime,
    pub handler: String,
    pub memory_size: u32,
    pub timeout: Duration,
    pub architecture: Architecture,
    pub dead_letter_queue: Option<Queue>,
    pub code: Code,
    pub tracing: Tracing,
    pub environment: Environment,
}

impl FunctionProps {
    /// Descriptor for a function that reads one secret and parks failed
    /// invocations on a dead-letter queue
    ///
    /// All sizing values are fixed policy. The only dynamic parts are the
    /// secret's ARN, exposed to the function as `SECRET_ARN`, and the
    /// queue handle, stored as is.
    pub fn secret_handler(stack: &Stack, secret: &Secret, dead_letter_queue: &Queue) -> Self {
        FunctionProps {
            runtime: Runtime::ProvidedAl2,
            handler: "bootstrap".to_string(),
            memory_size: 1024,
            timeout: Duration::from_secs(6 * 60),
            architecture: Architecture::X86_64,
            dead_letter_queue: Some(dead_letter_queue.clone()),
            code: Code::from_asset(stack.asset_path("lambda")),
            tracing: Tracing::Active,
            environment: Environment::from([(
                "SECRET_ARN".to_string(),
                secret.arn().to_string(),
            )]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles() -> (Stack, Secret, Queue) {
        (
            Stack::new("alerts", "alerts-artifacts", "."),
            Secret::from_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:api-token"),
            Queue::from_arn("arn:aws:sqs:us-east-1:123456789012:failed-events"),
        )
    }

    #[test]
    fn sizing_policy_is_fixed() {
        let (stack, secret, queue) = handles();
        let props = FunctionProps::secret_handler(&stack, &secret, &queue);

        assert_eq!(props.memory_size, 1024);
        assert_eq!(props.timeout, Duration::from_secs(360));
        assert_eq!(props.architecture, Architecture::X86_64);
        assert_eq!(props.runtime, Runtime::ProvidedAl2);
        assert_eq!(props.handler, "bootstrap");
        assert_eq!(props.tracing, Tracing::Active);
    }

    #[test]
    fn environment_holds_only_the_secret_arn() {
        let (stack, secret, queue) = handles();
        let props = FunctionProps::secret_handler(&stack, &secret, &queue);

        assert_eq!(props.environment.len(), 1);
        assert_eq!(
            props.environment.get("SECRET_ARN").map(String::as_str),
            Some(secret.arn())
        );
    }

    #[test]
    fn dead_letter_queue_is_preserved() {
        let (stack, secret, queue) = handles();
        let props = FunctionProps::secret_handler(&stack, &secret, &queue);

        assert_eq!(props.dead_letter_queue, Some(queue));
    }

    #[test]
    fn secrets_only_change_the_environment_value() {
        let (stack, secret, queue) = handles();
        let other = Secret::from_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:db-password");

        let first = FunctionProps::secret_handler(&stack, &secret, &queue);
        let mut second = FunctionProps::secret_handler(&stack, &other, &queue);

        assert_ne!(first, second);

        second.environment = first.environment.clone();
        assert_eq!(first, second);
    }
}
