use std::fmt;

/// Amounts are stored internally in céntimos (1 sol = 100 céntimos) so that
/// totals stay exact. The wire carries soles as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Centimos(pub u64);

impl fmt::Display for Centimos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S/ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Format an amount in céntimos for display, e.g. `S/ 48.00`.
pub fn format_soles(centimos: u64) -> String {
    Centimos(centimos).to_string()
}

/// Serde adapter for monetary fields: in memory `u64` céntimos, on the wire
/// a JSON number in soles (`48.0` for S/ 48.00). Negative or non-finite
/// amounts are rejected at the boundary.
pub mod soles_wire {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(centimos: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*centimos as f64 / 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let soles = f64::deserialize(deserializer)?;
        if !soles.is_finite() || soles < 0.0 {
            return Err(serde::de::Error::custom("invalid monetary amount"));
        }
        Ok((soles * 100.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Amount {
        #[serde(with = "soles_wire")]
        value: u64,
    }

    #[test]
    fn test_format_soles() {
        assert_eq!(format_soles(4800), "S/ 48.00");
        assert_eq!(format_soles(1850), "S/ 18.50");
        assert_eq!(format_soles(5), "S/ 0.05");
        assert_eq!(format_soles(0), "S/ 0.00");
    }

    #[test]
    fn test_wire_round_trip_is_exact() {
        for value in [0u64, 5, 1200, 1800, 2200, 2400, 4800, 999_999] {
            let json = serde_json::to_string(&Amount { value }).unwrap();
            let back: Amount = serde_json::from_str(&json).unwrap();
            assert_eq!(back.value, value, "round trip of {value} céntimos");
        }
    }

    #[test]
    fn test_wire_reads_plain_numbers() {
        let parsed: Amount = serde_json::from_str(r#"{"value": 48}"#).unwrap();
        assert_eq!(parsed.value, 4800);
        let parsed: Amount = serde_json::from_str(r#"{"value": 18.5}"#).unwrap();
        assert_eq!(parsed.value, 1850);
    }

    #[test]
    fn test_wire_rejects_negative_amounts() {
        assert!(serde_json::from_str::<Amount>(r#"{"value": -1.0}"#).is_err());
    }
}
