//! Venue records as fetched by the marketplace front end.
//!
//! Field names follow the GraphQL payload (camelCase), so an exported venue
//! list deserializes without a mapping layer.

use crate::{Entity, Result, SearchError};
use serde::{Deserialize, Serialize};

/// A bookable venue listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// City the venue is located in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province or state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Event categories the venue accepts (e.g. `WEDDING`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Single category used by older listings that predate `categories`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Services offered at the venue
    #[serde(default)]
    pub services: Vec<VenueService>,
}

/// A service associated with a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueService {
    /// Display name of the service
    pub name: String,
    /// Price charged by the venue, if listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Which venue field a token was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueField {
    /// Venue name
    Name,
    /// City
    City,
    /// Province
    Province,
    /// Category (array entry or legacy field)
    Category,
    /// Service display name
    Service,
}

impl Entity for Venue {
    type Id = String;

    #[inline]
    fn id(&self) -> &String {
        &self.id
    }
}

impl Venue {
    /// Creates a venue with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: None,
            province: None,
            categories: None,
            category: None,
            services: Vec::new(),
        }
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the province.
    #[must_use]
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// Sets the category array.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the legacy single category.
    #[must_use]
    pub fn with_legacy_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adds a service by display name.
    #[must_use]
    pub fn with_service(mut self, name: impl Into<String>) -> Self {
        self.services.push(VenueService {
            name: name.into(),
            price: None,
        });
        self
    }

    /// Categories used for matching: the `categories` array when present,
    /// otherwise the legacy `category` field.
    pub fn category_tokens(&self) -> Vec<&str> {
        match (&self.categories, &self.category) {
            (Some(categories), _) => categories.iter().map(String::as_str).collect(),
            (None, Some(category)) => vec![category.as_str()],
            (None, None) => Vec::new(),
        }
    }

    /// Service display names.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|s| s.name.as_str())
    }

    /// Every non-blank field value that goes into the index, tagged with its
    /// source field.
    pub fn indexable_fields(&self) -> Vec<(VenueField, &str)> {
        let mut fields = Vec::with_capacity(4 + self.services.len());
        fields.push((VenueField::Name, self.name.as_str()));
        if let Some(city) = &self.city {
            fields.push((VenueField::City, city.as_str()));
        }
        if let Some(province) = &self.province {
            fields.push((VenueField::Province, province.as_str()));
        }
        fields.extend(
            self.category_tokens()
                .into_iter()
                .map(|c| (VenueField::Category, c)),
        );
        fields.extend(self.service_names().map(|s| (VenueField::Service, s)));
        fields.retain(|(_, value)| !value.trim().is_empty());
        fields
    }

    /// Checks the identity contract.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SearchError::InvalidVenue(format!(
                "venue '{}' has an empty id",
                self.name
            )));
        }
        Ok(())
    }
}

/// Parse a JSON array of venues, validating each record.
///
/// # Example
/// ```
/// use venue_index::load_venues;
///
/// let json = r#"[{"id": "v1", "name": "Lakeside Hall", "city": "Pokhara"}]"#;
/// let venues = load_venues(json).unwrap();
/// assert_eq!(venues[0].city.as_deref(), Some("Pokhara"));
/// ```
pub fn load_venues(json: &str) -> Result<Vec<Venue>> {
    let venues: Vec<Venue> = serde_json::from_str(json)?;
    for venue in &venues {
        venue.validate()?;
    }
    Ok(venues)
}
