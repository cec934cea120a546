//! src/render/map.rs
//!
//! Map view: writes a self-contained Leaflet document with one marker per
//! node and an optional polyline along the path, then opens it in a browser.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::config::MapConfig;
use crate::error::MapError;
use crate::graph::{Coordinate, ShortestPath};

/// Opens a written map document.
pub trait Browser {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Runs an opener program and waits for it to exit.
///
/// With no explicit program the platform default is used (`xdg-open`,
/// `open`, `cmd /C start`).
#[derive(Debug, Default)]
pub struct SystemBrowser {
    opener: Option<(PathBuf, Vec<String>)>,
}

impl SystemBrowser {
    /// Use `program` with leading `args`; the URL is passed last.
    pub fn with_opener(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            opener: Some((program.into(), args.iter().map(|a| a.to_string()).collect())),
        }
    }

    fn command(&self) -> Command {
        if let Some((program, args)) = &self.opener {
            let mut c = Command::new(program);
            c.args(args);
            return c;
        }
        if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        }
    }
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        let status = self
            .command()
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(io::Error::other(format!("browser opener exited with {status}")));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Marker<'a> {
    name: &'a str,
    lat: f64,
    lon: f64,
}

/// Write the map document to `config.file` and return its absolute path.
///
/// Fails with [`MapError::NoPositions`] before touching the filesystem when
/// `positions` is empty. Path nodes without a coordinate are skipped.
pub fn write_map(
    positions: &[(String, Coordinate)],
    path: Option<&ShortestPath>,
    config: &MapConfig,
) -> Result<PathBuf, MapError> {
    let Some((_, center)) = positions.first() else {
        return Err(MapError::NoPositions);
    };

    let markers: Vec<Marker<'_>> = positions
        .iter()
        .map(|(name, c)| Marker {
            name,
            lat: c.lat,
            lon: c.lon,
        })
        .collect();
    let line: Vec<[f64; 2]> = path
        .map(|p| {
            p.nodes
                .iter()
                .filter_map(|n| positions.iter().find(|(name, _)| name == n))
                .map(|(_, c)| [c.lat, c.lon])
                .collect()
        })
        .unwrap_or_default();

    let html = document(
        *center,
        &script_json(&markers)?,
        &script_json(&line)?,
        config,
    );
    fs::write(&config.file, html)?;
    let abs = fs::canonicalize(&config.file)?;
    tracing::info!(
        file = %abs.display(),
        markers = markers.len(),
        path_points = line.len(),
        "map written"
    );
    Ok(abs)
}

/// Write the map and open it in `browser`.
pub fn render_map(
    positions: &[(String, Coordinate)],
    path: Option<&ShortestPath>,
    config: &MapConfig,
    browser: &dyn Browser,
) -> Result<PathBuf, MapError> {
    let file = write_map(positions, path, config)?;
    browser.open(&file_url(&file))?;
    Ok(file)
}

pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn document(center: Coordinate, markers: &str, line: &str, config: &MapConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Shortest path map</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <style>
    html, body, #map {{ height: 100%; width: 100%; margin: 0; padding: 0; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const markers = {markers};
    const line = {line};
    const map = L.map('map').setView([{lat}, {lon}], {zoom});
    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    for (const m of markers) {{
      L.marker([m.lat, m.lon]).bindPopup(document.createTextNode(m.name)).addTo(map);
    }}
    if (line.length > 0) {{
      L.polyline(line, {{ color: {color}, weight: {weight} }}).addTo(map);
    }}
  </script>
</body>
</html>
"#,
        markers = markers,
        line = line,
        lat = center.lat,
        lon = center.lon,
        zoom = config.zoom,
        color = serde_json::Value::from(config.path_color.as_str()),
        weight = config.path_weight,
    )
}
