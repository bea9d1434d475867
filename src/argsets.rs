use std::path::PathBuf;

use crate::data_mgmt::convert::Unit;
use crate::data_mgmt::schema::RecordFormat;

/// Fully resolved run parameters. The pipeline only ever sees this struct;
/// the command-line surface lives in main.rs.
#[derive(Clone, Debug)]
pub struct PushArgs {
    pub unit: Unit,
    pub include_zero: bool,
    pub format: RecordFormat,
    pub db_path: PathBuf,
    pub influx_host: String,
    pub influx_db: String,
    pub template: String,
}
