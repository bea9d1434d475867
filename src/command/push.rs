use anyhow::{Context, Result};
use url::Url;

use crate::argsets::PushArgs;
use crate::constants::defaults;
use crate::data_mgmt::convert::{conversion_factors, scaled_fields};
use crate::data_mgmt::filter::ChangeFilter;
use crate::data_mgmt::template::LineTemplate;
use crate::interfaces::influx::InfluxSink;
use crate::interfaces::sqlite::SourceDb;

/// Run the full extract-transform-load pipeline: validate the template,
/// scan the source table in timestamp order, drop unchanged rows, scale
/// values for the requested unit, render lines and push them in batches.
///
/// Any failure terminates the run; batches already accepted by the
/// destination stay committed (re-runs overwrite by timestamp).
pub fn push(args: PushArgs) -> Result<()> {
    // Everything that can fail from bad parameters fails here, before the
    // source database is opened or any bytes go over the wire.
    Url::parse(&args.influx_host)
        .with_context(|| format!("invalid influxdb host '{}'", args.influx_host))?;
    let template = LineTemplate::validate(&args.template, args.format)?;

    let factors = conversion_factors(args.format, args.unit);
    let source = SourceDb::open(&args.db_path)?;
    let mut sink = InfluxSink::new(&args.influx_host, &args.influx_db)?;
    let mut filter = ChangeFilter::new(args.include_zero);
    let indicator_idx = args.format.indicator_index();

    log::info!(
        "Pushing {} records from {} to {}/{}",
        args.format.table(),
        args.db_path.display(),
        args.influx_host,
        args.influx_db
    );

    let mut scanned = 0usize;
    let mut kept = 0usize;
    let mut pushed = 0usize;

    let mut scan = source.scan(args.format)?;
    for (idx, row) in scan.rows()?.enumerate() {
        let row = row?;
        scanned += 1;

        if !filter.keep(&row[indicator_idx]) {
            continue;
        }

        let fields = scaled_fields(args.format, &row, &factors);
        sink.append(&template.render(&fields)?);
        kept += 1;

        if idx % defaults::ROWS_PER_FLUSH == 0 && idx > 0 {
            let flushed = sink.flush()?;
            pushed += flushed;
            log::debug!("Flushed {flushed} points at row {idx}");
        }
    }

    pushed += sink.flush()?;

    log::info!("Done: scanned {scanned} rows, kept {kept}, pushed {pushed} points");
    Ok(())
}
