use std::time::Duration;

pub const LOG_LEVEL: &str = "info";

pub const INFLUX_HOST: &str = "http://localhost:8086";
pub const INFLUX_DB: &str = "smarthome";
pub const LINE_TEMPLATE: &str = "energy,device=sma energy={TotalYield} {TimeStamp}";

pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

// https://docs.influxdata.com/influxdb/v1.7/tools/api recommends batches
// of 5000-10000 points.
pub const ROWS_PER_FLUSH: usize = 5000;
