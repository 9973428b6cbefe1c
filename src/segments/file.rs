use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::parse::{ParsedPlan, parse_segments, quote_field};
use crate::error::ConfigError;
use crate::types::Segment;

pub const SEGMENTS_FILE_NAME: &str = "segments.txt";

/// Where the running plan came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanSource {
    File(PathBuf),
    Defaults,
}

/// The plan the timer starts with.
#[derive(Clone, Debug)]
pub struct LoadedPlan {
    pub segments: Vec<Segment>,
    pub warnings: Vec<String>,
    pub source: PlanSource,
}

pub fn default_segments() -> Vec<Segment> {
    [
        ("Introduction", 60),
        ("Overview", 45),
        ("Feature Demonstration", 90),
        ("Technical Details", 75),
        ("Q&A Session", 30),
        ("Summary", 40),
        ("Closing Remarks", 20),
    ]
    .into_iter()
    .map(|(name, secs)| Segment::new(name, secs))
    .collect()
}

/// Candidate plan files in lookup order: working dir, executable dir, config dir.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(SEGMENTS_FILE_NAME));
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(SEGMENTS_FILE_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("demotimer").join(SEGMENTS_FILE_NAME));
    }
    candidates
}

/// Returns the first existing candidate, falling back to the first one.
pub fn find_segments_file(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(SEGMENTS_FILE_NAME))
}

/// Reads a plan file. A missing file is an empty plan, not an error.
pub fn load_segments(path: &Path) -> Result<ParsedPlan, ConfigError> {
    if !path.exists() {
        return Ok(ParsedPlan::default());
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_segments(&text))
}

/// Loads the plan at `path`, falling back to the built-in defaults when it
/// is missing, unreadable or has no usable rows.
pub fn load_or_default(path: &Path) -> LoadedPlan {
    let (parsed, mut warnings) = match load_segments(path) {
        Ok(parsed) => {
            let warnings = parsed.warnings.clone();
            (parsed, warnings)
        }
        Err(err) => (ParsedPlan::default(), vec![err.to_string()]),
    };
    for warning in &warnings {
        warn!("{}: {warning}", path.display());
    }

    if parsed.segments.is_empty() {
        if path.exists() {
            warnings.push(format!(
                "{} has no usable segments, using defaults",
                path.display()
            ));
        }
        info!("using built-in default segments");
        return LoadedPlan {
            segments: default_segments(),
            warnings,
            source: PlanSource::Defaults,
        };
    }

    info!(
        "loaded {} segments from {}",
        parsed.segments.len(),
        path.display()
    );
    LoadedPlan {
        segments: parsed.segments,
        warnings,
        source: PlanSource::File(path.to_path_buf()),
    }
}

/// Renders segments in the `name,duration` format with `MM:SS` durations.
pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::from("name,duration\n");
    for segment in segments {
        let mins = segment.planned_secs / 60;
        let secs = segment.planned_secs % 60;
        out.push_str(&format!(
            "{},{mins:02}:{secs:02}\n",
            quote_field(&segment.name)
        ));
    }
    out
}

pub fn save_segments(path: &Path, segments: &[Segment]) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, render_segments(segments)).map_err(io_err)?;
    info!("saved {} segments to {}", segments.len(), path.display());
    Ok(())
}

/// Writes the default plan so it can be edited by hand.
pub fn write_defaults(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    save_segments(path, &default_segments())
}
