use crate::error::{CastError, Result};

/// Parse a byte count such as `1048576`, `512KiB`, `20MiB` or `1GiB`.
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim();
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);
    if digits.is_empty() {
        return Err(CastError::Config(format!("invalid size: {s:?}")));
    }
    let n: u64 = digits
        .parse()
        .map_err(|e| CastError::Config(format!("invalid size {s:?}: {e}")))?;
    let mult: u64 = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kib" => 1024,
        "m" | "mib" => 1024 * 1024,
        "g" | "gib" => 1024 * 1024 * 1024,
        other => {
            return Err(CastError::Config(format!("unknown size unit: {other:?}")));
        }
    };
    n.checked_mul(mult)
        .ok_or_else(|| CastError::Config(format!("size overflows u64: {s:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert_eq!(parse_size("512KiB").unwrap(), 512 * 1024);
        assert_eq!(parse_size("20MiB").unwrap(), 20 * 1024 * 1024);
        assert_eq!(parse_size("1g").unwrap(), 1 << 30);
    }

    #[test]
    fn garbage() {
        assert!(parse_size("MiB").is_err());
        assert!(parse_size("12 parsecs").is_err());
        assert!(parse_size("99999999999999999999G").is_err());
    }
}
