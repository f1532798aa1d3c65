use serde::{Deserialize, Serialize};

/// Reference to a queue provisioned outside of this stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    name: String,
    arn: String,
}

impl Queue {
    pub fn new(name: &str, arn: &str) -> Self {
        Queue {
            name: name.to_string(),
            arn: arn.to_string(),
        }
    }

    /// Build a reference from an ARN alone, deriving the name from its
    /// last segment
    pub fn from_arn(arn: &str) -> Self {
        let name = arn.rsplit(':').next().unwrap_or(arn);
        Self::new(name, arn)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arn(&self) -> &str {
        &self.arn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_arn_derives_name_from_last_segment() {
        let queue = Queue::from_arn("arn:aws:sqs:us-east-1:123456789012:failed-events");

        assert_eq!(queue.name(), "failed-events");
    }
}
