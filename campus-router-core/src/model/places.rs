//! Searchable registry of named campus places (buildings, landmarks, hostels)

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::GeoPoint;

/// A named point of interest a route can start or end at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Id of the data layer the place was loaded from
    pub layer: String,
    /// Human-readable kind, e.g. "building" or a feature-level category
    pub type_label: String,
    /// Lowercased search terms, the name included
    pub aliases: Vec<String>,
    pub description: String,
    pub location: GeoPoint,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        layer: impl Into<String>,
        location: GeoPoint,
    ) -> Self {
        let name = name.into();
        let layer = layer.into();
        Self {
            id: id.into(),
            aliases: vec![name.to_lowercase()],
            type_label: default_type_label(&layer),
            name,
            layer,
            description: String::new(),
            location,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.type_label = category.into();
        self
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|a| a.as_ref().to_lowercase()));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// `query` must already be trimmed and lowercased
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.aliases.iter().any(|alias| alias.contains(query))
    }
}

/// Layer ids are plural ("hostels"); a single place is labelled singular.
fn default_type_label(layer: &str) -> String {
    let mut label = layer.to_string();
    label.pop();
    label
}

#[derive(Debug, Clone, Default)]
pub struct PlaceRegistry {
    places: Vec<Place>,
    by_id: HashMap<String, usize>,
}

impl PlaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place. A later place with an already registered id replaces
    /// the earlier one in id lookups, but both stay searchable.
    pub fn register(&mut self, place: Place) {
        if self.by_id.contains_key(&place.id) {
            log::warn!("Duplicate place id '{}', later entry wins", place.id);
        }
        self.by_id.insert(place.id.clone(), self.places.len());
        self.places.push(place);
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.by_id.get(id).map(|&idx| &self.places[idx])
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    /// Case-insensitive substring search over names, descriptions and
    /// aliases, in registration order. A blank query lists the first
    /// `limit` places.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.places.iter().take(limit).collect();
        }
        self.places
            .iter()
            .filter(|place| place.matches(&query))
            .take(limit)
            .collect()
    }

    pub fn sorted_by_name(&self) -> Vec<&Place> {
        self.places
            .iter()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }
}

impl FromIterator<Place> for PlaceRegistry {
    fn from_iter<T: IntoIterator<Item = Place>>(iter: T) -> Self {
        let mut registry = Self::new();
        for place in iter {
            registry.register(place);
        }
        registry
    }
}
