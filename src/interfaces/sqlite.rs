use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::data_mgmt::models::{Row, Value};
use crate::data_mgmt::schema::RecordFormat;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open SBFspot database '{path}': {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Read-only handle on the SBFspot SQLite database.
pub struct SourceDb {
    conn: Connection,
}

impl SourceDb {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |source| StoreError::Open {
                path: path.display().to_string(),
                source,
            },
        )?;
        Ok(SourceDb { conn })
    }

    /// Prepare an ordered scan over the format's table. Ascending timestamp
    /// order is required by the change filter's stateful comparison.
    pub fn scan(&self, format: RecordFormat) -> Result<RowScan<'_>, StoreError> {
        let query = format!(
            "SELECT {fields} FROM {table} ORDER BY TimeStamp ASC",
            fields = format.fields().join(","),
            table = format.table()
        );
        let stmt = self.conn.prepare(&query)?;
        Ok(RowScan {
            stmt,
            fields: format.fields(),
        })
    }
}

/// A prepared scan; yields rows lazily, in timestamp order, single-pass.
pub struct RowScan<'conn> {
    stmt: rusqlite::Statement<'conn>,
    fields: &'static [&'static str],
}

impl RowScan<'_> {
    pub fn rows(
        &mut self,
    ) -> Result<impl Iterator<Item = rusqlite::Result<Row>> + '_, StoreError> {
        let fields = self.fields;
        Ok(self.stmt.query_map([], move |r| read_row(r, fields))?)
    }
}

fn read_row(r: &rusqlite::Row, fields: &'static [&'static str]) -> rusqlite::Result<Row> {
    let mut values = Vec::with_capacity(fields.len());
    for (idx, name) in fields.iter().enumerate() {
        let value = match r.get_ref(idx)? {
            ValueRef::Integer(i) => Value::Int(i),
            ValueRef::Real(f) => Value::Float(f),
            other => {
                return Err(rusqlite::Error::InvalidColumnType(
                    idx,
                    name.to_string(),
                    other.data_type(),
                ))
            }
        };
        values.push(value);
    }
    Ok(values)
}
