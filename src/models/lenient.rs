//! Tolerant field readers for loading cleaned artifacts
//!
//! Artifacts written by other tools (a pandas `to_csv` dump in particular)
//! spell flags as `True`/`False`, write integers as `2021.0` and may carry
//! labels outside the closed categorical sets. These readers turn such cells
//! into the record's types instead of failing the whole load; a cell that
//! still cannot be read becomes missing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::models::types::Canonical;
use crate::schema::adapt::{DateFormatConfig, coerce_number, coerce_year, parse_date_string};

/// A scalar cell as the underlying format presents it
enum Cell {
    Flag(bool),
    Number(f64),
    Text(String),
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Option<Cell>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar cell")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(Cell::Flag(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Cell::Number(v as f64)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Cell::Number(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(Cell::Number(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok((!v.trim().is_empty()).then(|| Cell::Text(v.to_string())))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

fn cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Cell>, D::Error> {
    deserializer.deserialize_option(CellVisitor)
}

/// Boolean flag written as `true`, `True`, `TRUE`, `1` or `yes` (and the false
/// forms); anything else, missing included, reads as false
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match cell(deserializer)? {
        Some(Cell::Flag(v)) => v,
        Some(Cell::Number(n)) => n == 1.0,
        Some(Cell::Text(t)) => matches!(t.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        None => false,
    })
}

/// Optional finite number; text goes through the usual numeric coercion
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match cell(deserializer)? {
        Some(Cell::Number(n)) => Some(n).filter(|n| n.is_finite()),
        Some(Cell::Text(t)) => coerce_number(&t),
        Some(Cell::Flag(_)) | None => None,
    })
}

/// Optional four-digit year, accepting `2021` and `2021.0`
pub fn year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(match cell(deserializer)? {
        Some(Cell::Number(n)) => coerce_year(&n.to_string()),
        Some(Cell::Text(t)) => coerce_year(&t),
        Some(Cell::Flag(_)) | None => None,
    })
}

/// Optional whole number of days
pub fn days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = match cell(deserializer)? {
        Some(Cell::Number(n)) => Some(n),
        Some(Cell::Text(t)) => coerce_number(&t),
        Some(Cell::Flag(_)) | None => None,
    };
    Ok(value
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n))
        .map(|n| n as u32))
}

/// Optional date; ISO first, then the configured parsing formats
pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(NaiveDate::from_str(text.trim())
        .ok()
        .or_else(|| parse_date_string(&text, &DateFormatConfig::default())))
}

/// Categorical label mapped through the synonym table; unknown labels fall
/// back instead of failing
pub fn canonical<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Canonical,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(T::canonicalize(label.as_deref()))
}
