use std::fmt;

/// The pointer-tracking collaborator broke its contract during a drag move.
///
/// Never recovered locally: the host either fixes the integration or treats
/// this as a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// A move was delivered but no sample was recorded for it.
    MissingCurrentSample,
    /// The latest sample has no predecessor to measure the delta from.
    MissingPreviousSample,
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::MissingCurrentSample => write!(f, "present mouse move is undefined"),
            DragError::MissingPreviousSample => write!(f, "prev mouse move is undefined"),
        }
    }
}

impl std::error::Error for DragError {}

/// One rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigViolation {
    pub property: &'static str,
    pub behaviour: &'static str,
    pub expected: &'static str,
    pub received: String,
}

impl ConfigViolation {
    pub(crate) fn not_finite(property: &'static str, received: f64) -> Self {
        Self {
            property,
            behaviour: "must be",
            expected: "a finite (number)",
            received: received.to_string(),
        }
    }

    pub(crate) fn below(property: &'static str, behaviour: &'static str, received: f64) -> Self {
        Self {
            property,
            behaviour,
            expected: "",
            received: received.to_string(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expected.is_empty() {
            write!(f, "'{}' {}, received {}", self.property, self.behaviour, self.received)
        } else {
            write!(
                f,
                "'{}' {} {}, received {}",
                self.property, self.behaviour, self.expected, self.received
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Every violation found, reported together.
    Invalid(Vec<ConfigViolation>),
    /// The configuration document could not be parsed.
    Parse(String),
}

impl ConfigError {
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            ConfigError::Invalid(violations) => violations,
            ConfigError::Parse(_) => &[],
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(violations) => {
                let plural = if violations.len() > 1 { "s" } else { "" };
                write!(
                    f,
                    "{} error{plural} found in user configurations:",
                    violations.len()
                )?;
                for violation in violations {
                    write!(f, "\n\t{violation}")?;
                }
                Ok(())
            }
            ConfigError::Parse(message) => write!(f, "invalid configuration document: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
