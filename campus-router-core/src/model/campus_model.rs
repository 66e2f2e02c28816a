use serde::{Deserialize, Serialize};

use crate::{
    Error,
    geometry::CampusBoundary,
    model::{GeoPoint, Place, PlaceRegistry},
    routing::walking_route::WalkingRoute,
    service::RoutingService,
};

/// Where a route starts or ends: a registered place or a raw position
/// such as a GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteEndpoint {
    Place(String),
    Location(GeoPoint),
}

/// Everything loaded for one campus: the router, the searchable places and
/// the optional campus outline.
#[derive(Debug, Clone, Default)]
pub struct CampusModel {
    pub routing: RoutingService,
    pub places: PlaceRegistry,
    pub boundary: Option<CampusBoundary>,
}

impl CampusModel {
    pub fn new(
        routing: RoutingService,
        places: PlaceRegistry,
        boundary: Option<CampusBoundary>,
    ) -> Self {
        Self {
            routing,
            places,
            boundary,
        }
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.get(id)
    }

    /// True when the point is inside the campus outline, or no outline is loaded
    pub fn is_on_campus(&self, point: GeoPoint) -> bool {
        self.boundary
            .as_ref()
            .is_none_or(|boundary| boundary.contains(point))
    }

    /// Resolves an endpoint to a coordinate
    ///
    /// # Errors
    ///
    /// `UnknownPlace` when the place id is not registered
    pub fn resolve(&self, endpoint: &RouteEndpoint) -> Result<GeoPoint, Error> {
        match endpoint {
            RouteEndpoint::Place(id) => self
                .places
                .get(id)
                .map(|place| place.location)
                .ok_or_else(|| Error::UnknownPlace(id.clone())),
            RouteEndpoint::Location(point) => Ok(*point),
        }
    }

    /// Routes between two user selections.
    ///
    /// # Errors
    ///
    /// `DegenerateRequest` when both selections are the same,
    /// `UnknownPlace` for unregistered ids, and any routing failure from
    /// [`RoutingService::route`].
    pub fn route_between(
        &self,
        start: &RouteEndpoint,
        end: &RouteEndpoint,
    ) -> Result<WalkingRoute, Error> {
        if start == end {
            return Err(Error::DegenerateRequest);
        }
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        self.routing.route(from, to)
    }
}
