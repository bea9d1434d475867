use anyhow::Result;
use dotenv::dotenv;
use env_logger::Env;

use sbfpush::argsets::PushArgs;
use sbfpush::command;
use sbfpush::constants::defaults;

const LOG_LEVEL_ENV_VAR: &str = "LOGGING_LEVEL";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, defaults::LOG_LEVEL))
        .init();

    let args = parse_args()?;
    command::push(args)
}

fn parse_args() -> Result<PushArgs> {
    let mut args = pico_args::Arguments::from_env();

    let parsed = PushArgs {
        unit: args
            .opt_value_from_str("--unit")?
            .unwrap_or(sbfpush::data_mgmt::convert::Unit::Native),
        include_zero: args.contains("--includezero"),
        format: args
            .opt_value_from_str("--sbfformat")?
            .unwrap_or(sbfpush::data_mgmt::schema::RecordFormat::Month),
        db_path: args.value_from_str("--sbfdb")?,
        influx_host: args
            .opt_value_from_str("--influxhost")?
            .unwrap_or_else(|| defaults::INFLUX_HOST.to_string()),
        influx_db: args
            .opt_value_from_str("--influxdb")?
            .unwrap_or_else(|| defaults::INFLUX_DB.to_string()),
        template: args
            .opt_value_from_str("--influxquery")?
            .unwrap_or_else(|| defaults::LINE_TEMPLATE.to_string()),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unrecognized arguments: {:?}", remaining);
    }

    Ok(parsed)
}
