//! Home-feed catalog service over the sample datasets

use crate::models::catalog::{Cleaner, Promotion, ServiceCategory, CLEANERS, PROMOTIONS, SERVICES};

/// Serves services, promotions and cleaners to the home feed. Backed by
/// compile-time sample data until a real data source exists.
#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    pub fn service_categories(&self) -> &'static [ServiceCategory] {
        &SERVICES
    }

    pub fn promotions(&self) -> &'static [Promotion] {
        &PROMOTIONS
    }

    pub fn cleaners(&self) -> &'static [Cleaner] {
        &CLEANERS
    }

    pub fn cleaner_by_id(&self, id: &str) -> Option<&'static Cleaner> {
        CLEANERS.iter().find(|c| c.id == id)
    }

    /// Case-insensitive name/specialty search backing the home-feed search bar
    pub fn search_cleaners(&self, query: &str) -> Vec<&'static Cleaner> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return CLEANERS.iter().collect();
        }
        CLEANERS
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.specialty.to_lowercase().contains(&query)
            })
            .collect()
    }
}
