//! Configuration file watching.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher that raises `needs_reload` when the config changes
pub fn setup_config_watcher(
    config_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.clone());
    let file_name = config_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            // Editors often replace the file, so fall back to comparing names
            let matches = event.paths.iter().any(|p| {
                if p.canonicalize().is_ok_and(|c| c == canonical) {
                    return true;
                }
                match (&file_name, p.file_name()) {
                    (Some(expected), Some(actual)) => actual == expected,
                    _ => false,
                }
            });

            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            let parent = config_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
                tracing::warn!(error = %e, dir = %parent.display(), "cannot watch config directory");
                return None;
            }
            tracing::debug!(path = %config_path.display(), "watching configuration");
            Some(watcher)
        }
        Err(e) => {
            tracing::warn!(error = %e, "config watcher unavailable");
            None
        }
    }
}
