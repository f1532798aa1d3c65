use std::path::{Path, PathBuf};

/// Deployment stack context the descriptors are rendered into
///
/// Owned by the embedding deployment tooling. Provides the artifact
/// bucket, the root that code assets resolve against, and logical ID
/// prefixing for rendered resources.
#[derive(Debug, Clone)]
pub struct Stack {
    pub name: String,
    bucket: String,
    asset_root: PathBuf,
}

impl Stack {
    pub fn new(name: &str, bucket: &str, asset_root: impl AsRef<Path>) -> Self {
        Stack {
            name: name.to_string(),
            bucket: bucket.to_string(),
            asset_root: asset_root.as_ref().to_path_buf(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Resolve a code asset directory against the stack's asset root
    pub fn asset_path(&self, dir: &str) -> PathBuf {
        self.asset_root.join(dir)
    }

    /// Prefix a resource name with the stack name
    ///
    /// Logical IDs in CFN templates must be alphanumeric, so both parts
    /// are stripped down before joining.
    pub fn prefixed(&self, name: &str) -> String {
        format!(
            "{stack}D{name}",
            stack = Self::escaped(&self.name),
            name = Self::escaped(name)
        )
    }

    fn escaped(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_strips_non_alphanumeric_chars() {
        let stack = Stack::new("team-alerts", "team-artifacts", ".");

        assert_eq!(stack.prefixed("secret-reader"), "teamalertsDsecretreader");
    }

    #[test]
    fn asset_path_resolves_against_the_root() {
        let stack = Stack::new("alerts", "artifacts", "/srv/app");

        assert_eq!(stack.asset_path("lambda"), PathBuf::from("/srv/app/lambda"));
    }
}
