use std::sync::Arc;

use campus_router_core::{CampusDataConfig, CampusModel};
use parking_lot::RwLock;

pub type SharedState = Arc<AppState>;

/// Shared server state.
///
/// Requests take a snapshot of the current model and route against it
/// without holding the lock; a reload installs a whole new model.
pub struct AppState {
    model: RwLock<Arc<CampusModel>>,
    data: CampusDataConfig,
    restrict_to_campus: bool,
}

impl AppState {
    pub fn new(model: CampusModel, data: CampusDataConfig, restrict_to_campus: bool) -> Self {
        Self {
            model: RwLock::new(Arc::new(model)),
            data,
            restrict_to_campus,
        }
    }

    pub fn model(&self) -> Arc<CampusModel> {
        Arc::clone(&self.model.read())
    }

    pub fn replace_model(&self, model: CampusModel) {
        *self.model.write() = Arc::new(model);
    }

    pub fn data(&self) -> &CampusDataConfig {
        &self.data
    }

    pub fn restrict_to_campus(&self) -> bool {
        self.restrict_to_campus
    }
}
