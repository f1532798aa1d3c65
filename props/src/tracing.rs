use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// X-Ray tracing mode of a function
///
/// `Disabled` means no `TracingConfig` is rendered at all, leaving the
/// account default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tracing {
    Active,
    PassThrough,
    Disabled,
}

impl Tracing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tracing::Active => "Active",
            Tracing::PassThrough => "PassThrough",
            Tracing::Disabled => "Disabled",
        }
    }
}

impl Display for Tracing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
