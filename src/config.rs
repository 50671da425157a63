use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const DEFAULT_PREVIEW_COUNT: usize = 4;

#[derive(Deserialize)]
pub struct Site {
    pub title: String,
    pub brand: String,
}

#[derive(Deserialize)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub projects_file: PathBuf,
}

#[derive(Deserialize, Default)]
pub struct Defaults {
    /// Posts listed in the home page preview
    pub preview_count: Option<usize>,
    /// Posts per page in the blog index. Unset shows everything at once.
    pub page_size: Option<u32>,
}

impl Defaults {
    pub fn preview_count(&self) -> usize {
        self.preview_count.unwrap_or(DEFAULT_PREVIEW_COUNT)
    }
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf, exe_dir: &Path) -> PathBuf {
    match path.strip_prefix("${exe_dir}") {
        Ok(rest) => exe_dir.join(rest),
        Err(_) => path,
    }
}

fn current_exe_dir() -> io::Result<PathBuf> {
    let exe = env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(io::Error::new(ErrorKind::NotFound, "Executable has no parent directory")),
    }
}

pub fn parse_config(cfg_content: &str, exe_dir: &Path) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir, exe_dir),
        public_dir: parse_path(cfg.paths.public_dir, exe_dir),
        posts_dir: parse_path(cfg.paths.posts_dir, exe_dir),
        projects_file: parse_path(cfg.paths.projects_file, exe_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content, &current_exe_dir()?)
}
