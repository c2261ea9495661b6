pub mod date;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use date::{month_index, AddedDate, DateError, MONTH_NAMES};

/// Category of a property listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Flat,
    Bungalow,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Flat => "Flat",
            PropertyType::Bungalow => "Bungalow",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core property data model
///
/// Field names on the wire follow the catalog file (`type`, `picture`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub bedrooms: u32,
    pub price: u64,
    pub tenure: String,
    pub description: String,
    /// Free text, searched by postcode substring
    pub location: String,
    /// Primary (small) image; the gallery is derived from it
    pub picture: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub added: AddedDate,
}

impl Property {
    /// Card/heading title, e.g. "Flat - 2 Bedrooms"
    pub fn title(&self) -> String {
        format!("{} - {} Bedrooms", self.kind, self.bedrooms)
    }

    /// Price rendered with thousands separators, e.g. "£750,000"
    pub fn display_price(&self) -> String {
        format!("£{}", group_thousands(self.price))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn property(
        id: &str,
        kind: PropertyType,
        bedrooms: u32,
        price: u64,
        location: &str,
    ) -> Property {
        Property {
            id: id.to_string(),
            kind,
            bedrooms,
            price,
            tenure: "Freehold".to_string(),
            description: format!("{} bedroom {} in {}", bedrooms, kind, location),
            location: location.to_string(),
            picture: format!("images/{}pic1small.jpg", id),
            url: String::new(),
            added: AddedDate {
                month: "October".to_string(),
                day: 12,
                year: 2022,
            },
        }
    }

    /// Five listings used across the search tests
    pub fn catalog() -> Vec<Property> {
        vec![
            property("1", PropertyType::House, 3, 250_000, "NW1 Camden"),
            property("2", PropertyType::Flat, 1, 150_000, "SE1 London"),
            property("3", PropertyType::Flat, 2, 320_000, "NW3 Hampstead"),
            property("4", PropertyType::Bungalow, 2, 410_000, "BR5 Orpington"),
            property("5", PropertyType::Flat, 3, 475_000, "nw1 Regent's Park"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_price_formatting() {
        let p = fixtures::property("7", PropertyType::Flat, 2, 1_250_000, "E1");
        assert_eq!(p.title(), "Flat - 2 Bedrooms");
        assert_eq!(p.display_price(), "£1,250,000");
    }

    #[test]
    fn test_group_thousands_small_values() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
    }

    #[test]
    fn test_property_uses_catalog_field_names() {
        let json = r#"{
            "id": "prop1",
            "type": "House",
            "bedrooms": 3,
            "price": 750000,
            "tenure": "Freehold",
            "description": "Attractive three bedroom semi-detached family home",
            "location": "Petts Wood Road, Petts Wood, Orpington BR5",
            "picture": "images/prop1pic1small.jpg",
            "url": "properties/prop1.html",
            "added": { "month": "October", "day": 12, "year": 2022 }
        }"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.kind, PropertyType::House);
        assert_eq!(p.added.month, "October");

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["type"], "House");
        assert_eq!(back["picture"], "images/prop1pic1small.jpg");
    }
}
