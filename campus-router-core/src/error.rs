use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No walkway data loaded")]
    NoGraphData,
    #[error("No walkway node found for snapping")]
    NoNearestNode,
    #[error("No walking path connects the requested points")]
    Unreachable,
    #[error("Start and destination resolve to the same place")]
    DegenerateRequest,
    #[error("Unknown place: {0}")]
    UnknownPlace(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

impl Error {
    /// Stable machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NoGraphData => "no_graph_data",
            Error::NoNearestNode => "no_nearest_node",
            Error::Unreachable => "unreachable",
            Error::DegenerateRequest => "degenerate_request",
            Error::UnknownPlace(_) => "unknown_place",
            Error::IoError(_) => "io_error",
            Error::InvalidData(_) => "invalid_data",
            Error::GeoJsonError(_) => "geojson_error",
        }
    }
}
