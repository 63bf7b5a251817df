//! `#[serde(with = "crate::serde_duration")]` for `Duration` fields, stored as whole
//! microseconds so sub-millisecond drop timing survives a round trip.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let micros = value.as_micros().min(u64::MAX as u128) as u64;
    serializer.serialize_u64(micros)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let micros = u64::deserialize(deserializer)?;
    Ok(Duration::from_micros(micros))
}
