pub mod influx;
pub mod sqlite;
