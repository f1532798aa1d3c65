use eyre::{ContextCompat, WrapErr};
use std::path::PathBuf;
use synthfn_props::{Queue, Secret, Stack};

/// Project the command runs against
///
/// Handles of the externally provisioned resources are declared under
/// `[package.metadata.synthfn]` in the project's Cargo.toml.
#[derive(Clone, Debug)]
pub struct Project {
    pub path: PathBuf,
    toml: toml::Value,
}

impl Project {
    pub fn from_current_dir() -> eyre::Result<Self> {
        Self::new(std::env::current_dir().wrap_err("Failed to resolve the current dir")?)
    }

    pub fn new(path: PathBuf) -> eyre::Result<Self> {
        let raw = std::fs::read_to_string(path.join("Cargo.toml"))
            .wrap_err("Failed to read project's Cargo.toml")?;

        Self::from_toml_string(path, &raw)
    }

    pub fn from_toml_string(path: PathBuf, raw: &str) -> eyre::Result<Self> {
        let toml = raw
            .parse::<toml::Value>()
            .wrap_err("Failed to parse Cargo.toml")?;

        Ok(Project { path, toml })
    }

    fn meta(&self) -> eyre::Result<toml::Value> {
        self.toml
            .get("package")
            .wrap_err("No [package]")?
            .get("metadata")
            .wrap_err("No [metadata]")?
            .get("synthfn")
            .wrap_err("No [synthfn]")
            .cloned()
    }

    fn meta_str(&self, key: &str) -> eyre::Result<String> {
        Ok(self
            .meta()?
            .get(key)
            .wrap_err(format!("No [{key}]"))?
            .as_str()
            .wrap_err("Not a string")?
            .to_string())
    }

    /// User defined name of the function and its stack
    pub fn name(&self) -> eyre::Result<String> {
        self.meta_str("name")
    }

    /// Stack context the template is rendered into
    ///
    /// The artifact bucket defaults to "<name>-artifacts" and code assets
    /// resolve against the project dir.
    pub fn stack(&self) -> eyre::Result<Stack> {
        let name = self.name()?;

        let bucket = self
            .meta_str("bucket")
            .unwrap_or_else(|_| format!("{name}-artifacts"));

        Ok(Stack::new(&name, &bucket, &self.path))
    }

    pub fn secret(&self) -> eyre::Result<Secret> {
        Ok(Secret::from_arn(&self.meta_str("secret_arn")?))
    }

    pub fn dead_letter_queue(&self) -> eyre::Result<Queue> {
        Ok(Queue::from_arn(&self.meta_str("dead_letter_queue_arn")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [package]
        name = "alerts"
        version = "0.1.0"

        [package.metadata.synthfn]
        name = "alerts"
        secret_arn = "arn:aws:secretsmanager:us-east-1:123456789012:secret:api-token"
        dead_letter_queue_arn = "arn:aws:sqs:us-east-1:123456789012:failed-events"
    "#;

    #[test]
    fn handles_come_from_the_metadata_section() {
        let project = Project::from_toml_string(PathBuf::from("."), MANIFEST).unwrap();

        assert_eq!(project.name().unwrap(), "alerts");
        assert_eq!(
            project.secret().unwrap().arn(),
            "arn:aws:secretsmanager:us-east-1:123456789012:secret:api-token"
        );
        assert_eq!(
            project.dead_letter_queue().unwrap().name(),
            "failed-events"
        );
    }

    #[test]
    fn bucket_defaults_to_the_stack_name() {
        let project = Project::from_toml_string(PathBuf::from("."), MANIFEST).unwrap();

        assert_eq!(project.stack().unwrap().bucket(), "alerts-artifacts");
    }

    #[test]
    fn missing_metadata_section_is_an_error() {
        let project =
            Project::from_toml_string(PathBuf::from("."), "[package]\nname = \"alerts\"").unwrap();

        assert!(project.name().is_err());
    }
}
