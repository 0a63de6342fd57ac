use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedLanguage,
    NotFound,
    DuplicateId,
    Internal,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn unsupported_language(tag: &str) -> Self {
        Error {
            kind: ErrorKind::UnsupportedLanguage,
            context: format!("language '{}' is not supported", tag),
        }
    }

    pub fn not_found(id: &str) -> Self {
        Error {
            kind: ErrorKind::NotFound,
            context: format!("document '{}' not found", id),
        }
    }

    pub fn duplicate_id(id: &str) -> Self {
        Error {
            kind: ErrorKind::DuplicateId,
            context: format!("document id '{}' already exists", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
