pub mod config;
pub mod coverage;
pub mod info;
pub mod locate;
pub mod pick;
pub mod zoom;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::{GeometryStore, Point, Size};
use seatpick_core::picker::SectionPicker;
use tracing::{debug, info};

/// Read a TOML config file, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<PickerConfig> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PickerConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn open_store(path: &Path, config: &PickerConfig) -> Result<GeometryStore> {
    let store = GeometryStore::open(path, config.source_size())
        .with_context(|| format!("Failed to load geometry {}", path.display()))?;
    debug!("Loaded {} sections from {}", store.len(), path.display());
    Ok(store)
}

/// Picker over `store` whose overview matches the source canvas one to one.
pub fn canvas_picker(store: GeometryStore, config: &PickerConfig) -> Result<SectionPicker> {
    let size = store.source_size();
    let mut picker = SectionPicker::new(Arc::new(store), config.clone())?;
    picker.set_overview_size(size);
    Ok(picker)
}

/// Parse `X,Y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

/// Parse `WxH`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let size = Size::new(parse_number(w)?, parse_number(h)?);
    if !size.is_positive() {
        return Err(format!("size must be positive, got {s:?}"));
    }
    Ok(size)
}

fn parse_number(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {s:?}"))?;
    if !v.is_finite() {
        return Err(format!("not a finite number: {s:?}"));
    }
    Ok(v)
}
