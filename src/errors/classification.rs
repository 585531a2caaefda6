use super::types::CompareError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl CompareError {
    /// Classify this error to determine its type and the process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            CompareError::Usage(_) => ErrorClassification {
                error_type: "UsageError",
                exit_code: 1,
            },
            CompareError::Read { .. } => ErrorClassification {
                error_type: "ReadError",
                exit_code: 1,
            },
            CompareError::Decode { .. } => ErrorClassification {
                error_type: "DecodeError",
                exit_code: 1,
            },
            CompareError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_usage_error_exits_one() {
        let err = CompareError::Usage("Usage: codesim <ORIGINAL> <CONVERTED>".into());
        let class = err.classify();
        assert_eq!(class.exit_code, 1);
        assert_eq!(class.error_type, "UsageError");
    }

    #[test]
    fn test_read_error_exits_nonzero() {
        let err = CompareError::Read {
            path: PathBuf::from("missing.rs"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let class = err.classify();
        assert_ne!(class.exit_code, 0);
        assert_eq!(class.error_type, "ReadError");
        assert!(err.to_string().contains("missing.rs"));
    }

    #[test]
    fn test_decode_error_exits_nonzero() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = CompareError::Decode {
            path: PathBuf::from("binary.bin"),
            source,
        };
        let class = err.classify();
        assert_ne!(class.exit_code, 0);
        assert_eq!(class.error_type, "DecodeError");
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
