//! Platform-specific directory paths.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "lectern";
const APPLICATION: &str = "lectern";

const LATEST_LOG: &str = "latest.log";

/// Old log files kept after rotation.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// - Linux: `$XDG_CACHE_HOME/lectern` or `~/.cache/lectern`
/// - macOS: `~/Library/Caches/dev.lectern.lectern`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// - Linux: `$XDG_CONFIG_HOME/lectern` or `~/.config/lectern`
/// - macOS: `~/Library/Application Support/dev.lectern.lectern`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of `config.json`.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` under a timestamp and prune old archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_in(dir: &Path, stamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }
    prune_logs(dir, MAX_OLD_LOGS);
}

fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; archive names sort by time.
    logs.sort_by_key(|e| e.file_name());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keeps_newest() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        for stamp in ["20240101_000000", "20240102_000000", "20240103_000000"] {
            fs::write(dir.join(format!("{}.log", stamp)), "old").unwrap();
        }
        fs::write(dir.join(LATEST_LOG), "current").unwrap();

        rotate_in(dir, "20240104_000000");
        prune_logs(dir, 2);

        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["20240103_000000.log", "20240104_000000.log"]);
        assert_eq!(fs::read_to_string(dir.join("20240104_000000.log")).unwrap(), "current");
    }
}
