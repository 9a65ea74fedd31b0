use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpellcastError {
    #[error("Enter a spell name first.")]
    MissingSpellName,
    #[error("Invalid spell document: {reason}")]
    InvalidImportDocument { reason: String },
    #[error("Point index {index} is out of range for {len} point(s).")]
    PointIndexOutOfRange { index: usize, len: usize },
    #[error("Failed to serialize spell document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to {context} {path}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SpellcastError {
    pub fn invalid_import(reason: impl Into<String>) -> Self {
        Self::InvalidImportDocument {
            reason: reason.into(),
        }
    }

    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSpellName => "SPELL_NAME_MISSING",
            Self::InvalidImportDocument { .. } => "IMPORT_DOCUMENT_INVALID",
            Self::PointIndexOutOfRange { .. } => "POINT_INDEX_OUT_OF_RANGE",
            Self::Serialize(_) => "DOCUMENT_SERIALIZE_FAILED",
            Self::Io { .. } => "IO",
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_variant() {
        assert_eq!(SpellcastError::MissingSpellName.code(), "SPELL_NAME_MISSING");
        assert_eq!(
            SpellcastError::invalid_import("bad").code(),
            "IMPORT_DOCUMENT_INVALID"
        );
        assert_eq!(
            SpellcastError::PointIndexOutOfRange { index: 3, len: 1 }.code(),
            "POINT_INDEX_OUT_OF_RANGE"
        );
        assert_eq!(
            SpellcastError::io("read", "/tmp/x", std::io::Error::other("io")).code(),
            "IO"
        );
        let json_error = serde_json::from_str::<u8>("x").expect_err("not a number");
        assert_eq!(
            SpellcastError::from(json_error).code(),
            "DOCUMENT_SERIALIZE_FAILED"
        );
    }

    #[test]
    fn messages_carry_context() {
        let error = SpellcastError::invalid_import("points must be an array");
        assert_eq!(
            error.to_string(),
            "Invalid spell document: points must be an array"
        );

        let error = SpellcastError::io("write", "/tmp/out", std::io::Error::other("denied"));
        assert_eq!(error.to_string(), "Failed to write /tmp/out: denied");
    }
}
