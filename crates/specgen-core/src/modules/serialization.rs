use crate::domain::BroadenedPoint;
use std::fs;
use std::path::Path;

pub const CURVE_PRECISION: usize = 10;

pub fn format_scientific_f64(value: f64, precision: usize) -> String {
    format!("{value:.precision$e}", precision = precision)
}

/// One `<energy> <intensity>` line per grid point, in grid order.
pub fn render_broadened_curve(points: &[BroadenedPoint]) -> String {
    let mut rendered = String::with_capacity(points.len() * 2 * (CURVE_PRECISION + 8));
    for point in points {
        rendered.push_str(&format_scientific_f64(point.energy, CURVE_PRECISION));
        rendered.push(' ');
        rendered.push_str(&format_scientific_f64(point.intensity, CURVE_PRECISION));
        rendered.push('\n');
    }
    rendered
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, normalize_text_artifact(content))
}
