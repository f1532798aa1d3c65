use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lambda runtime identifier.
///
/// Only the custom runtimes are listed since every function deployed
/// through Synthfn ships its own `bootstrap` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Runtime {
    ProvidedAl2,
    ProvidedAl2023,
}

impl Runtime {
    /// Identifier as CloudFormation expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::ProvidedAl2 => "provided.al2",
            Runtime::ProvidedAl2023 => "provided.al2023",
        }
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
