use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of a function's deployable artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Code {
    /// Local directory whose bundle is uploaded under the stack's bucket
    /// at deploy time
    Asset { path: PathBuf },

    /// Artifact already present in S3
    S3 { bucket: String, key: String },
}

impl Code {
    pub fn from_asset(path: impl AsRef<Path>) -> Self {
        Code::Asset {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_s3(bucket: &str, key: &str) -> Self {
        Code::S3 {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_keeps_the_given_path() {
        let code = Code::from_asset("lambda");

        assert_eq!(
            code,
            Code::Asset {
                path: PathBuf::from("lambda")
            }
        );
    }
}
