use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Files making up one campus dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusDataConfig {
    /// `GeoJSON` with the walkable path lines
    pub paths_file: PathBuf,
    /// Point layers registered as searchable places
    #[serde(default)]
    pub place_layers: Vec<PlaceLayerConfig>,
    /// Optional `GeoJSON` polygon outlining the campus
    #[serde(default)]
    pub boundary_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLayerConfig {
    /// Layer id, e.g. "buildings"; also the default place type label
    pub id: String,
    /// Human-readable layer name, falls back to `id`
    #[serde(default)]
    pub label: String,
    pub path: PathBuf,
}

impl PlaceLayerConfig {
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }
}

impl CampusDataConfig {
    /// Resolves every relative file path against `base`
    #[must_use]
    pub fn relative_to(&self, base: &Path) -> Self {
        let resolve = |path: &Path| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            }
        };

        Self {
            paths_file: resolve(&self.paths_file),
            place_layers: self
                .place_layers
                .iter()
                .map(|layer| PlaceLayerConfig {
                    path: resolve(&layer.path),
                    ..layer.clone()
                })
                .collect(),
            boundary_file: self.boundary_file.as_deref().map(resolve),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_joined() {
        let config = CampusDataConfig {
            paths_file: "data/paths.geojson".into(),
            place_layers: vec![PlaceLayerConfig {
                id: "hostels".into(),
                label: "Hostels".into(),
                path: "/srv/hostels.geojson".into(),
            }],
            boundary_file: Some("data/boundary.geojson".into()),
        };
        let resolved = config.relative_to(Path::new("/etc/campus"));

        assert_eq!(resolved.paths_file, Path::new("/etc/campus/data/paths.geojson"));
        assert_eq!(resolved.place_layers[0].path, Path::new("/srv/hostels.geojson"));
        assert_eq!(
            resolved.boundary_file.as_deref(),
            Some(Path::new("/etc/campus/data/boundary.geojson"))
        );
        assert_eq!(resolved.place_layers[0].display_name(), "Hostels");
    }
}
