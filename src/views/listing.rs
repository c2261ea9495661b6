use crate::catalog::Catalog;
use crate::models::Property;
use crate::routes::Route;
use crate::search::{self, SearchForm};
use tracing::info;

pub const NO_RESULTS_MESSAGE: &str = "No properties found matching your criteria.";
pub const NO_SAVED_MESSAGE: &str = "No saved properties.";

/// Summary of one listing in a result or saved list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub picture: String,
    pub details_path: String,
}

impl From<&Property> for ListingCard {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title(),
            price: property.display_price(),
            location: property.location.clone(),
            picture: property.picture.clone(),
            details_path: Route::Details(property.id.clone()).path(),
        }
    }
}

pub fn cards<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Vec<ListingCard> {
    properties.into_iter().map(ListingCard::from).collect()
}

/// The search page: starts on the whole catalog, narrowed by each submit
pub struct SearchPage<'a> {
    catalog: &'a Catalog,
    results: Vec<&'a Property>,
}

impl<'a> SearchPage<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            results: catalog.properties().iter().collect(),
        }
    }

    /// Re-run the search from the full catalog with a fresh form
    pub fn submit(&mut self, form: &SearchForm) -> &[&'a Property] {
        let criteria = form.criteria();
        self.results = search::filter(self.catalog.properties(), &criteria);
        info!("Search returned {} properties", self.results.len());
        &self.results
    }

    pub fn results(&self) -> &[&'a Property] {
        &self.results
    }

    pub fn cards(&self) -> Vec<ListingCard> {
        cards(self.results.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_card_fields() {
        let catalog = fixtures::catalog();
        let card = ListingCard::from(&catalog[0]);
        assert_eq!(card.title, "House - 3 Bedrooms");
        assert_eq!(card.price, "£250,000");
        assert_eq!(card.details_path, "/property/1");
        assert_eq!(card.picture, "images/1pic1small.jpg");
    }

    #[test]
    fn test_search_page_starts_with_full_catalog() {
        let catalog = Catalog::new(fixtures::catalog()).unwrap();
        let page = SearchPage::new(&catalog);
        assert_eq!(page.results().len(), 5);
    }

    #[test]
    fn test_submits_are_not_cumulative() {
        let catalog = Catalog::new(fixtures::catalog()).unwrap();
        let mut page = SearchPage::new(&catalog);

        let flats = SearchForm {
            property_type: Some("Flat".to_string()),
            ..Default::default()
        };
        assert_eq!(page.submit(&flats).len(), 3);

        let houses = SearchForm {
            property_type: Some("House".to_string()),
            ..Default::default()
        };
        let ids: Vec<&str> = page.submit(&houses).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        page.submit(&SearchForm::default());
        assert_eq!(page.cards().len(), 5);
    }
}
