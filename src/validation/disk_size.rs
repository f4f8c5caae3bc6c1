// Disk size parsing and range validation

use super::ValidationError;
use crate::constants::{MAX_ROOT_DISK_SIZE_GIB, MIN_ROOT_DISK_SIZE_GIB};

const BYTES_PER_GIB: i128 = 1 << 30;

/// Parse a human-readable disk size into whole gibibytes.
///
/// Decimal units (`G`, `GB`, `T`, `TB`) are converted to binary gibibytes
/// and floored, so "100GB" comes out as 93. Binary units (`GiB`, `Ti`) pass
/// through at their stated magnitude. Units are case-insensitive and may be
/// separated from the number by whitespace.
///
/// An empty string or a bare integer with no unit parses to 0, meaning
/// "unset" rather than an error.
pub fn parse_disk_size_gib(size: &str) -> Result<i64, ValidationError> {
    let size = size.trim();
    if size.is_empty() {
        return Ok(0);
    }

    let numeric_end = size
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let (number, unit) = size.split_at(numeric_end);
    let unit = unit.trim();

    let value: i64 = number
        .parse()
        .map_err(|_| ValidationError::InvalidUnit(size.to_string()))?;

    if unit.is_empty() {
        return Ok(0);
    }

    let bytes: i128 = match unit.to_ascii_lowercase().as_str() {
        "g" | "gb" => i128::from(value) * 1_000_000_000,
        "gib" => i128::from(value) * BYTES_PER_GIB,
        "t" | "tb" => i128::from(value) * 1_000_000_000_000,
        "ti" => i128::from(value) * 1024 * BYTES_PER_GIB,
        _ => return Err(ValidationError::InvalidUnit(size.to_string())),
    };

    // Sizes past i64::MAX GiB saturate; the range check rejects them anyway.
    Ok(i64::try_from(bytes / BYTES_PER_GIB).unwrap_or(i64::MAX))
}

/// Check that a root disk size string falls within the supported range.
pub fn root_disk_size_in_range(size: &str) -> Result<(), ValidationError> {
    let gib = parse_disk_size_gib(size)?;
    if !(MIN_ROOT_DISK_SIZE_GIB..=MAX_ROOT_DISK_SIZE_GIB).contains(&gib) {
        return Err(ValidationError::OutOfRange {
            got: gib,
            min: MIN_ROOT_DISK_SIZE_GIB,
            max: MAX_ROOT_DISK_SIZE_GIB,
        });
    }
    Ok(())
}

/// Type boundary for disk sizes read from the profile, where values are
/// dynamically typed TOML. Only quoted strings are accepted.
pub fn require_size_string(value: &toml::Value) -> Result<&str, ValidationError> {
    match value {
        toml::Value::String(s) => Ok(s.as_str()),
        other => Err(ValidationError::InvalidType(type_name(other).to_string())),
    }
}

fn type_name(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
        _ => "datetime",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_disk_size_valid_units() {
        let cases = [
            ("0", 0),
            ("", 0),
            ("-1", 0),
            ("0 GiB", 0),
            ("100 G", 93),
            ("100GB", 93),
            ("100Gb", 93),
            ("100g", 93),
            ("100GiB", 100),
            ("100gib", 100),
            ("100 gib", 100),
            ("100 TB", 93132),
            ("100 T ", 93132),
            ("1000 Ti", 1024000),
        ];
        for (input, expected) in cases {
            assert_eq!(
                parse_disk_size_gib(input),
                Ok(expected),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_disk_size_invalid_units() {
        for input in ["1foo", "1K", "1KiB", "1 MiB", "1 mib"] {
            assert_eq!(
                parse_disk_size_gib(input),
                Err(ValidationError::InvalidUnit(input.trim().to_string())),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_disk_size_malformed_number() {
        assert!(parse_disk_size_gib("foo").is_err());
        assert!(parse_disk_size_gib("--1 GiB").is_err());
        assert!(parse_disk_size_gib("99999999999999999999 GiB").is_err());
    }

    #[test]
    fn test_root_disk_size_in_range() {
        assert_eq!(root_disk_size_in_range("128 GiB"), Ok(()));
        assert_eq!(root_disk_size_in_range("100 GiB"), Ok(()));
        assert_eq!(root_disk_size_in_range("65536 GiB"), Ok(()));
    }

    #[test]
    fn test_root_disk_size_out_of_range() {
        assert_eq!(
            root_disk_size_in_range("99 GiB"),
            Err(ValidationError::OutOfRange {
                got: 99,
                min: 100,
                max: 65536
            })
        );
        assert_eq!(
            root_disk_size_in_range("65537 GiB"),
            Err(ValidationError::OutOfRange {
                got: 65537,
                min: 100,
                max: 65536
            })
        );
    }

    #[test]
    fn test_require_size_string() {
        let string = toml::Value::String("128 GiB".to_string());
        assert_eq!(require_size_string(&string), Ok("128 GiB"));

        let integer = toml::Value::Integer(65537);
        assert_eq!(
            require_size_string(&integer),
            Err(ValidationError::InvalidType("integer".to_string()))
        );
        assert_eq!(
            require_size_string(&integer).unwrap_err().to_string(),
            "expected a quoted size string, got integer"
        );
    }
}
