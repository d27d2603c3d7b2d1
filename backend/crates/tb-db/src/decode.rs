//! Column decoding shared by the repositories. Malformed rows surface as
//! `DbError::Initialization` instead of panicking.

use crate::{DbError, Result as DbErrorResult};

use tb_core::ErrorLocation;

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
fn malformed(column: &str, detail: impl Display) -> DbError {
    DbError::Initialization {
        message: format!("Invalid value in {column}: {detail}"),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub fn uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| malformed(column, e))
}

pub fn opt_uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| Uuid::parse_str(&s).map_err(|e| malformed(column, e)))
        .transpose()
}

pub fn timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| malformed(column, millis))
}

pub fn opt_timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<Option<DateTime<Utc>>> {
    let millis: Option<i64> = row.try_get(column)?;
    millis
        .map(|ms| DateTime::from_timestamp_millis(ms).ok_or_else(|| malformed(column, ms)))
        .transpose()
}

pub fn date(row: &SqliteRow, column: &str) -> DbErrorResult<NaiveDate> {
    let raw: String = row.try_get(column)?;
    NaiveDate::from_str(&raw).map_err(|e| malformed(column, e))
}

pub fn opt_date(row: &SqliteRow, column: &str) -> DbErrorResult<Option<NaiveDate>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| NaiveDate::from_str(&s).map_err(|e| malformed(column, e)))
        .transpose()
}

/// Parses a text column into one of the core enums.
pub fn parsed<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| malformed(column, e))
}

pub fn millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

pub fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
