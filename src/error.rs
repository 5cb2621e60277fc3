use crate::style::Role;
use std::fmt;

#[derive(Debug)]
pub enum SheetError {
    MissingStyleRole(Role),
    MissingIdentity(&'static str),
    InvalidConfiguration(String),
    InvalidRecord(String),
    Render(String),
    Output(String),
    Suggestion(String),
    Io(std::io::Error),
}

impl SheetError {
    /// Errors caused by a broken template rather than by the submitted record.
    pub fn is_template_integrity(&self) -> bool {
        matches!(
            self,
            SheetError::MissingStyleRole(_) | SheetError::MissingIdentity(_)
        )
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::MissingStyleRole(role) => {
                write!(f, "style role has no entry in the style sheet: {}", role.as_str())
            }
            SheetError::MissingIdentity(field) => {
                write!(f, "required identity field is empty: {}", field)
            }
            SheetError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            SheetError::InvalidRecord(message) => write!(f, "invalid record: {}", message),
            SheetError::Render(message) => write!(f, "renderer failed: {}", message),
            SheetError::Output(message) => write!(f, "rendered output rejected: {}", message),
            SheetError::Suggestion(message) => write!(f, "layout suggestion failed: {}", message),
            SheetError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SheetError {
    fn from(value: std::io::Error) -> Self {
        SheetError::Io(value)
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(value: serde_json::Error) -> Self {
        SheetError::InvalidRecord(value.to_string())
    }
}
