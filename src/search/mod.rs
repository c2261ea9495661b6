pub mod criteria;

pub use criteria::{parse_leading_int, SearchCriteria, SearchForm, ANY_TYPE};

use crate::models::Property;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Narrow the catalog to the listings matching every given constraint.
///
/// The result borrows from `catalog` and keeps catalog order.
pub fn filter<'a>(catalog: &'a [Property], criteria: &SearchCriteria) -> Vec<&'a Property> {
    let results: Vec<&Property> = catalog
        .iter()
        .filter(|property| matches(property, criteria))
        .collect();

    debug!(
        "Search matched {} of {} properties",
        results.len(),
        catalog.len()
    );
    results
}

/// Whether a single listing satisfies all constraints
pub fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    if let Some(kind) = &criteria.property_type {
        if property.kind.as_str() != kind {
            return false;
        }
    }

    if criteria.min_price.is_some_and(|min| property.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| property.price > max) {
        return false;
    }
    if criteria.min_bedrooms.is_some_and(|min| property.bedrooms < min) {
        return false;
    }
    if criteria.max_bedrooms.is_some_and(|max| property.bedrooms > max) {
        return false;
    }

    if let Some(postcode) = &criteria.postcode {
        if !property
            .location
            .to_lowercase()
            .contains(&postcode.to_lowercase())
        {
            return false;
        }
    }

    match criteria.date_after {
        Some(after) => added_on_or_after(property, after),
        None => true,
    }
}

fn added_on_or_after(property: &Property, after: NaiveDate) -> bool {
    match property.added.to_date() {
        Ok(added) => added >= after,
        Err(e) => {
            // Undatable listings cannot satisfy a date constraint
            warn!("Excluding property {} from date search: {}", property.id, e);
            false
        }
    }
}
