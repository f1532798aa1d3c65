use std::collections::BTreeMap;

/// Environment variables assigned to a function
///
/// Ordered map so rendered templates stay byte-stable between runs.
pub type Environment = BTreeMap<String, String>;
