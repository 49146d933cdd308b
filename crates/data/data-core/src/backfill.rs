//! Historical backfill
//!
//! Pulls roughly a year of hourly history so the trainer has something to
//! chew on. Weather history fits in a single archive call; the air-quality
//! API limits range length, so pollutants are fetched in fixed-size batches
//! stepping backwards from today, throttled between requests and capped by a
//! safety limit. No retries: a failed stage aborts this run and the next
//! scheduled run starts fresh.

use std::thread;

use chrono::{Days, NaiveDate};

use data_api::{air_quality_request, weather_request, BackfillConfig};
use data_spi::{HourlyRange, HourlySeries, HourlySource, Location, Result};

fn dates(start: NaiveDate, end: NaiveDate) -> HourlyRange {
    HourlyRange::Dates {
        start: start.format("%Y-%m-%d").to_string(),
        end: end.format("%Y-%m-%d").to_string(),
    }
}

/// Fetch historical weather and air-quality series ending at `today`.
///
/// Returns `(air_quality, weather)`. Either series may be empty — the
/// documented "no data" outcome — in which case the caller skips the run;
/// when weather comes back empty the air-quality batches are not fetched at
/// all, since the join could only be empty anyway.
pub fn backfill_history(
    source: &dyn HourlySource,
    location: Location,
    timezone: &str,
    config: &BackfillConfig,
    today: NaiveDate,
) -> Result<(HourlySeries, HourlySeries)> {
    let horizon_start = today - Days::new(config.days as u64);

    tracing::info!(source = source.name(), %today, days = config.days, "backfilling history");

    let weather = source.fetch_weather(&weather_request(
        location,
        dates(horizon_start, today),
        timezone,
    ))?;
    if weather.is_empty() {
        tracing::warn!("weather history unavailable, skipping backfill");
        return Ok((HourlySeries::empty(), weather));
    }

    let mut air_quality = HourlySeries::empty();
    let mut end = today;
    for batch in 0..config.max_batches {
        let start = (end - Days::new(config.batch_days as u64)).max(horizon_start);

        if batch > 0 {
            thread::sleep(config.throttle);
        }
        tracing::info!(batch, %start, %end, "fetching air-quality batch");

        let series =
            source.fetch_air_quality(&air_quality_request(location, dates(start, end), timezone))?;
        if !series.is_empty() {
            air_quality.extend(series)?;
        }

        if start == horizon_start {
            break;
        }
        end = start - Days::new(1);
    }

    if air_quality.is_empty() {
        tracing::warn!("no air-quality history fetched, skipping backfill");
    }

    Ok((air_quality, weather))
}
