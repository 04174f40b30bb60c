//! Home-feed catalog models and sample data
//!
//! Cleaners, service categories and promotions are compile-time sample data
//! standing in for a future external data source.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A cleaner shown on the home feed and booking screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cleaner {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub image_url: String,
}

/// A bookable service category tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub title: String,
}

/// A promotional carousel card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
}

pub static SERVICES: Lazy<Vec<ServiceCategory>> = Lazy::new(|| {
    [
        ("1", "Home"),
        ("2", "Office"),
        ("3", "Washing"),
        ("4", "Ironing"),
        ("5", "Organization"),
        ("6", "Disinfect"),
    ]
    .into_iter()
    .map(|(id, title)| ServiceCategory {
        id: id.to_string(),
        title: title.to_string(),
    })
    .collect()
});

pub static PROMOTIONS: Lazy<Vec<Promotion>> = Lazy::new(|| {
    vec![
        Promotion {
            id: "1".into(),
            title: "25% Discount".into(),
            subtitle: "Schedule your appointment before November 20th".into(),
            description: "Express Cleaning for homes in up to 2 hours!".into(),
            button_text: "Book now!".into(),
        },
        Promotion {
            id: "2".into(),
            title: "Special Offer".into(),
            subtitle: "New customers only".into(),
            description: "Get your first cleaning with 15% off!".into(),
            button_text: "Claim now".into(),
        },
        Promotion {
            id: "3".into(),
            title: "Weekend Special".into(),
            subtitle: "Limited time offer".into(),
            description: "Book a weekend cleaning and get 20% off!".into(),
            button_text: "Get offer".into(),
        },
    ]
});

pub static CLEANERS: Lazy<Vec<Cleaner>> = Lazy::new(|| {
    vec![
        Cleaner {
            id: "1".into(),
            name: "Maria Rodriguez".into(),
            specialty: "Deep Cleaning Expert".into(),
            rating: 4.9,
            image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2".into(),
        },
        Cleaner {
            id: "2".into(),
            name: "James Carter".into(),
            specialty: "Kitchen & Bathroom Specialist".into(),
            rating: 4.7,
            image_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a".into(),
        },
        Cleaner {
            id: "3".into(),
            name: "Olivia Foster".into(),
            specialty: "Specialist in Office Sanitation".into(),
            rating: 4.8,
            image_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956".into(),
        },
    ]
});
