//! Terrain-data adapter for the OpenTopography global DEM API.
//!
//! Unlike the other adapters this one performs no request: it only builds
//! the download URL for a fixed dataset and bounding box, which the user
//! fetches themselves via the rendered link.

const BASE_URL: &str = "https://portal.opentopography.org/API/globaldem";
const DEM_TYPE: &str = "SRTMGL1";
const OUTPUT_FORMAT: &str = "GTiff";

// Sample bounding box over the Monterey Bay area
const SOUTH: &str = "36";
const NORTH: &str = "36.5";
const WEST: &str = "-122.5";
const EAST: &str = "-122";

/// Build the global DEM download URL. Pure and deterministic: repeated
/// calls always return the identical string.
pub fn global_dem_url() -> String {
    format!(
        "{BASE_URL}?demtype={DEM_TYPE}&south={SOUTH}&north={NORTH}&west={WEST}&east={EAST}&outputFormat={OUTPUT_FORMAT}"
    )
}
