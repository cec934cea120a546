//! src/config.rs
//!
//! Configuration values for coordinate assignment, layout, map output and the UI loop.
//!
//! Everything is compiled in; there are no config files, flags or environment lookups.

use std::path::PathBuf;
use std::time::Duration;

/// Parameters of the automatic coordinate assignment.
#[derive(Clone, Debug)]
pub struct CoordinateConfig {
    /// Fixed base point (latitude, longitude) every node is offset from.
    pub base: (f64, f64),

    /// Offset added per coordinate already assigned before an `add_edge` call.
    pub step: f64,

    /// Extra offset given to the second endpoint of an edge.
    pub pair_offset: f64,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        Self {
            base: (36.75, 3.06),
            step: 0.002,
            pair_offset: 0.001,
        }
    }
}

/// Force-directed layout parameters for the diagram view.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub iterations: usize,
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 0x5eed,
        }
    }
}

/// Map document output.
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// File the map is written to; relative paths resolve against the working directory.
    pub file: PathBuf,
    pub zoom: u8,
    pub path_color: String,
    pub path_weight: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("path_map.html"),
            zoom: 14,
            path_color: "red".to_string(),
            path_weight: 5,
        }
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    pub coordinates: CoordinateConfig,
    pub layout: LayoutConfig,
    pub map: MapConfig,
    pub log_file: PathBuf,
    pub frame_time: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shortest Path Finder".to_string(),
            coordinates: CoordinateConfig::default(),
            layout: LayoutConfig::default(),
            map: MapConfig::default(),
            log_file: PathBuf::from("shortest_path.log"),
            frame_time: Duration::from_millis(100),
        }
    }
}
