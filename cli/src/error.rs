/// Terminal error shown to the user in unified format
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    hint: Option<String>,
}

impl Error {
    pub fn new(message: &str, hint: Option<&str>) -> Self {
        Error {
            message: message.to_string(),
            hint: hint.map(|h| h.to_string()),
        }
    }
}

/// The message first, then the hint dimmed below it
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(hint) = &self.hint {
            write!(f, "\n\n{}", console::style(hint).dim())?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Convert any eyre report, keeping the hint when the cause was an Error
impl From<eyre::ErrReport> for Error {
    fn from(report: eyre::ErrReport) -> Self {
        report
            .downcast::<Error>()
            .unwrap_or_else(|err| Error::new(&err.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;

    #[test]
    fn hint_survives_the_eyre_round_trip() {
        let report = Err::<(), _>(eyre::eyre!("io failure"))
            .wrap_err(Error::new("Could not load the project", Some("Check the dir")))
            .unwrap_err();

        let error = Error::from(report);
        assert_eq!(error.message, "Could not load the project");
        assert_eq!(error.hint.as_deref(), Some("Check the dir"));
    }
}
