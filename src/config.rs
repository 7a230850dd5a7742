// Runtime configuration read from the environment.
//
// Keys
// - SERVER_ADDR            socket address to bind (default 0.0.0.0:8080)
// - WEEK_START             monday | sunday (default monday)
// - WEEK_END_POLICY        fixed_span | local_midnight (default fixed_span)
// - QUERY_BOUNDARY_FORMAT  calendar_date | zoned_instant (default calendar_date)

use crate::modules::time_entries::core::bucket::{BoundaryPolicy, CalendarOptions, WeekStart};
use crate::modules::time_entries::core::range::BoundaryFormat;
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}, expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_addr: SocketAddr,
    pub calendar: CalendarOptions,
    pub boundary_format: BoundaryFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            calendar: CalendarOptions::default(),
            boundary_format: BoundaryFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys keep their default; set keys must hold a valid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let server_addr = match lookup("SERVER_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_ADDR",
                value,
                expected: "a socket address such as 0.0.0.0:8080",
            })?,
            None => defaults.server_addr,
        };

        let week_start = parse_choice(
            &lookup,
            "WEEK_START",
            "monday or sunday",
            &[("monday", WeekStart::Monday), ("sunday", WeekStart::Sunday)],
        )?
        .unwrap_or(defaults.calendar.week_start);

        let week_end = parse_choice(
            &lookup,
            "WEEK_END_POLICY",
            "fixed_span or local_midnight",
            &[
                ("fixed_span", BoundaryPolicy::FixedSpan),
                ("local_midnight", BoundaryPolicy::LocalMidnight),
            ],
        )?
        .unwrap_or(defaults.calendar.week_end);

        let boundary_format = parse_choice(
            &lookup,
            "QUERY_BOUNDARY_FORMAT",
            "calendar_date or zoned_instant",
            &[
                ("calendar_date", BoundaryFormat::CalendarDate),
                ("zoned_instant", BoundaryFormat::ZonedInstant),
            ],
        )?
        .unwrap_or(defaults.boundary_format);

        Ok(Self {
            server_addr,
            calendar: CalendarOptions { week_start, week_end },
            boundary_format,
        })
    }
}

fn parse_choice<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
    choices: &[(&str, T)],
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let normalized = value.trim().to_lowercase();
    choices
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, choice)| Some(*choice))
        .ok_or(ConfigError::InvalidValue { key, value, expected })
}
