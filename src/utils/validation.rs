use crate::utils::error::{EtlError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 檔名只能是單一路徑元件，且副檔名必須符合
pub fn validate_file_name(field_name: &str, file_name: &str, extension: &str) -> Result<()> {
    validate_path(field_name, file_name)?;

    if file_name.contains('/') || file_name.contains('\\') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    match std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if ext.eq_ignore_ascii_case(extension) => Ok(()),
        _ => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: format!("File name must end with .{}", extension),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.users_endpoint", "https://example.com/users").is_ok());
        assert!(validate_url("source.users_endpoint", "http://127.0.0.1:8080/users").is_ok());
        assert!(validate_url("source.users_endpoint", "").is_err());
        assert!(validate_url("source.users_endpoint", "invalid-url").is_err());
        assert!(validate_url("source.users_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "output").is_ok());
        assert!(validate_path("output.directory", "   ").is_err());
        assert!(validate_path("output.directory", "out\0put").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("output.file_name", "output.csv", "csv").is_ok());
        assert!(validate_file_name("output.file_name", "REPORT.CSV", "csv").is_ok());
        assert!(validate_file_name("output.file_name", "output.tsv", "csv").is_err());
        assert!(validate_file_name("output.file_name", "output", "csv").is_err());
        assert!(validate_file_name("output.file_name", "nested/output.csv", "csv").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.port", 3000, 1).is_ok());
        assert!(validate_positive_number("server.port", 0, 1).is_err());
    }
}
