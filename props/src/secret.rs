use serde::{Deserialize, Serialize};

/// Reference to a secret provisioned outside of this stack
///
/// Carries only the coordinates of the secret, never its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    name: String,
    arn: String,
}

impl Secret {
    pub fn new(name: &str, arn: &str) -> Self {
        Secret {
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
        let secret = Secret::from_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:api-token");

        assert_eq!(secret.name(), "api-token");
        assert_eq!(
            secret.arn(),
            "arn:aws:secretsmanager:us-east-1:123456789012:secret:api-token"
        );
    }
}
