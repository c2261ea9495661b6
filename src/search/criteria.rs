use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sentinel a form submits for "any property type"
pub const ANY_TYPE: &str = "any";

/// Search form fields exactly as the user typed them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchForm {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_bedrooms: Option<String>,
    pub max_bedrooms: Option<String>,
    pub postcode: Option<String>,
    pub date_after: Option<String>,
}

/// Typed search constraints; `None` leaves a dimension unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Exact property type name, e.g. "Flat"
    pub property_type: Option<String>,
    /// Inclusive
    pub min_price: Option<u64>,
    /// Inclusive
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    /// Case-insensitive substring of the location
    pub postcode: Option<String>,
    /// Keep listings added on or after this date
    pub date_after: Option<NaiveDate>,
}

impl SearchCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

impl SearchForm {
    /// Apply the form parsing policy: blank, sentinel and unparseable
    /// values drop their constraint instead of failing the search.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            property_type: non_blank(&self.property_type)
                .filter(|t| !t.eq_ignore_ascii_case(ANY_TYPE))
                .map(str::to_string),
            min_price: numeric_field("minPrice", &self.min_price),
            max_price: numeric_field("maxPrice", &self.max_price),
            min_bedrooms: numeric_field("minBedrooms", &self.min_bedrooms),
            max_bedrooms: numeric_field("maxBedrooms", &self.max_bedrooms),
            // Matched verbatim, surrounding spaces included
            postcode: self
                .postcode
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string),
            date_after: non_blank(&self.date_after).and_then(|raw| {
                match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(e) => {
                        debug!("Ignoring dateAfter {:?}: {}", raw, e);
                        None
                    }
                }
            }),
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Numeric form fields; oversized input saturates at `MAX`
trait NumericField: TryFrom<u64> {
    const MAX: Self;
}

impl NumericField for u32 {
    const MAX: Self = u32::MAX;
}

impl NumericField for u64 {
    const MAX: Self = u64::MAX;
}

fn numeric_field<T: NumericField>(name: &str, field: &Option<String>) -> Option<T> {
    let raw = non_blank(field)?;
    match parse_leading_int(raw) {
        Some(n) => Some(T::try_from(n).unwrap_or(T::MAX)),
        None => {
            debug!("Ignoring {} {:?}: not a non-negative integer", name, raw);
            None
        }
    }
}

/// Leading-digit integer parse in the spirit of `parseInt`: "250000.50"
/// reads as 250000, "3 beds" as 3. Numbers too large for a `u64` saturate.
/// Anything without leading digits (including negative numbers) yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // Only overflow can fail on a run of ASCII digits
    Some(s[..end].parse().unwrap_or(u64::MAX))
}
