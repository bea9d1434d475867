use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use super::models::{Row, Value};
use super::schema::RecordFormat;

/// Wh to J.
const WH_TO_J: i64 = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Native SBFspot units: Wh, W, V, A.
    Native,
    /// SI units: cumulative energy in J instead of Wh.
    Si,
}

#[derive(Error, Debug)]
#[error("unit must be 'native' or 'SI', got '{0}'")]
pub struct UnknownUnit(String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Unit::Native),
            "SI" => Ok(Unit::Si),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// One multiplier per field of the record format, computed once per run.
pub fn conversion_factors(format: RecordFormat, unit: Unit) -> Vec<i64> {
    let fields = format.fields();
    let mut factors = vec![1; fields.len()];
    if unit == Unit::Si {
        for energy_field in format.energy_fields() {
            if let Some(idx) = fields.iter().position(|f| f == energy_field) {
                factors[idx] = WH_TO_J;
            }
        }
    }
    factors
}

/// Map field names to scaled values for one row, ready for rendering.
/// The stored row itself is never mutated.
pub fn scaled_fields(
    format: RecordFormat,
    row: &Row,
    factors: &[i64],
) -> HashMap<&'static str, Value> {
    format
        .fields()
        .iter()
        .zip(row.iter())
        .zip(factors.iter())
        .map(|((name, value), factor)| (*name, value.scale(*factor)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_factors_are_all_one() {
        for format in [RecordFormat::Month, RecordFormat::Spot] {
            let factors = conversion_factors(format, Unit::Native);
            assert!(factors.iter().all(|f| *f == 1));
        }
    }

    #[test]
    fn test_si_scales_only_energy_fields() {
        for format in [RecordFormat::Month, RecordFormat::Spot] {
            let factors = conversion_factors(format, Unit::Si);
            for (field, factor) in format.fields().iter().zip(factors.iter()) {
                if format.energy_fields().contains(field) {
                    assert_eq!(*factor, 3600, "{field}");
                } else {
                    assert_eq!(*factor, 1, "{field}");
                }
            }
        }
    }

    #[test]
    fn test_scaled_fields_month() {
        let format = RecordFormat::Month;
        let row = vec![
            Value::Int(1541859248),
            Value::Int(21009),
            Value::Int(100),
            Value::Int(5),
        ];
        let factors = conversion_factors(format, Unit::Si);
        let fields = scaled_fields(format, &row, &factors);

        assert_eq!(fields["TimeStamp"], Value::Int(1541859248));
        assert_eq!(fields["Serial"], Value::Int(21009));
        assert_eq!(fields["TotalYield"], Value::Int(360000));
        assert_eq!(fields["DayYield"], Value::Int(18000));
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("native".parse::<Unit>().unwrap(), Unit::Native);
        assert_eq!("SI".parse::<Unit>().unwrap(), Unit::Si);
        assert!("si".parse::<Unit>().is_err());
    }
}
