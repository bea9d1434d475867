use std::str::FromStr;

use thiserror::Error;

/// Field layouts of the two SBFspot tables. Field order must match the
/// source table's column order exactly.
const MONTH_FIELDS: &[&str] = &["TimeStamp", "Serial", "TotalYield", "DayYield"];

const SPOT_FIELDS: &[&str] = &[
    "TimeStamp",
    "Serial",
    "Pdc1",
    "Pdc2",
    "Idc1",
    "Idc2",
    "Udc1",
    "Udc2",
    "Pac1",
    "Pac2",
    "Pac3",
    "Iac1",
    "Iac2",
    "Iac3",
    "Uac1",
    "Uac2",
    "Uac3",
    "EToday",
    "ETotal",
    "Frequency",
    "OperatingTime",
    "FeedInTime",
    "BT_Signal",
    "Status",
    "GridRelay",
    "Temperature",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    Month,
    Spot,
}

impl RecordFormat {
    pub fn table(&self) -> &'static str {
        match self {
            RecordFormat::Month => "MonthData",
            RecordFormat::Spot => "SpotData",
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            RecordFormat::Month => MONTH_FIELDS,
            RecordFormat::Spot => SPOT_FIELDS,
        }
    }

    /// The cumulative-yield field used to detect rows with no new data.
    pub fn indicator(&self) -> &'static str {
        match self {
            RecordFormat::Month => "TotalYield",
            RecordFormat::Spot => "ETotal",
        }
    }

    pub fn indicator_index(&self) -> usize {
        match self {
            RecordFormat::Month => 2,
            RecordFormat::Spot => 18,
        }
    }

    /// Cumulative-energy fields stored in Wh; these get scaled to J under SI.
    pub fn energy_fields(&self) -> &'static [&'static str] {
        match self {
            RecordFormat::Month => &["TotalYield", "DayYield"],
            RecordFormat::Spot => &["EToday", "ETotal"],
        }
    }
}

#[derive(Error, Debug)]
#[error("record format must be 'month' or 'spot', got '{0}'")]
pub struct UnknownFormat(String);

impl FromStr for RecordFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(RecordFormat::Month),
            "spot" => Ok(RecordFormat::Spot),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts() {
        assert_eq!(RecordFormat::Month.fields().len(), 4);
        assert_eq!(RecordFormat::Spot.fields().len(), 26);
    }

    #[test]
    fn test_indicator_index_matches_field_list() {
        for format in [RecordFormat::Month, RecordFormat::Spot] {
            assert_eq!(
                format.fields()[format.indicator_index()],
                format.indicator()
            );
        }
    }

    #[test]
    fn test_energy_fields_are_declared() {
        for format in [RecordFormat::Month, RecordFormat::Spot] {
            for field in format.energy_fields() {
                assert!(format.fields().contains(field));
            }
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("month".parse::<RecordFormat>().unwrap(), RecordFormat::Month);
        assert_eq!("spot".parse::<RecordFormat>().unwrap(), RecordFormat::Spot);
        assert!("week".parse::<RecordFormat>().is_err());
    }
}
