//! Launch arguments and layout file loading.
use crate::data::Layout;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, std::io::Error),
    Parse(serde_json::Error),
    InvalidConstraint(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            Self::Parse(e) => write!(f, "failed to parse layout: {e}"),
            Self::InvalidConstraint(msg) => write!(f, "invalid layout: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchArg {
    pub file: Option<String>,
    pub config_dir: Option<String>,
    /// 1:trace 2:info 3:warn 4:error 5:none
    pub log_level: u8,
}

impl Default for LaunchArg {
    fn default() -> Self {
        Self {
            file: None,
            config_dir: dirs::config_dir().map(|d| d.join("timeline_dnr").to_string_lossy().to_string()),
            log_level: 3,
        }
    }
}

impl LaunchArg {
    pub fn log_filter(&self) -> log::LevelFilter {
        match self.log_level {
            0 | 1 => log::LevelFilter::Trace,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Warn,
            4 => log::LevelFilter::Error,
            _ => log::LevelFilter::Off,
        }
    }
    /// Layout file to open. Relative paths are looked up in the config directory
    /// when they do not exist in the working directory.
    pub fn layout_path(&self) -> Option<PathBuf> {
        let file = PathBuf::from(self.file.as_ref()?);
        if file.is_absolute() || file.exists() {
            return Some(file);
        }
        match &self.config_dir {
            Some(dir) => Some(Path::new(dir).join(file)),
            None => Some(file),
        }
    }
}

pub fn parse_layout(json: &str) -> Result<Layout, Error> {
    let layout: Layout = serde_json::from_str(json)?;
    layout.validate().map_err(Error::InvalidConstraint)?;
    Ok(layout)
}

pub fn load_layout(path: impl AsRef<Path>) -> Result<Layout, Error> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    let layout = parse_layout(&json)?;
    log::info!("loaded layout {} with {} regions", path.display(), layout.regions.len());
    Ok(layout)
}
