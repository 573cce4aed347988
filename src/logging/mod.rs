
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// Info goes to stdout, warnings and errors to stderr.
fn console_log(level: LogLevel, line: &str) {
    match level {
        LogLevel::Info => println!("{line}"),
        LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
    }
}

struct FileState {
    file: Option<Mutex<File>>,
    log_path: Option<PathBuf>,
    attempted: bool,
    log_dir: PathBuf,
}

impl Default for FileState {
    fn default() -> Self {
        Self {
            file: None,
            log_path: None,
            attempted: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl FileState {
    fn open(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }
}

/// Cloneable logger shared between the demo host and its collaborators.
/// The file sink is created lazily on the first file-targeted message; if
/// that fails, logging continues console-only with a single warning.
#[derive(Clone)]
pub struct Logger {
    file_state: Arc<Mutex<FileState>>,
    file_enabled: Arc<AtomicBool>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            file_state: Arc::new(Mutex::new(FileState::default())),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn write_to_file(&self, line: &str) {
        let Ok(mut state) = self.file_state.lock() else {
            return;
        };
        if !state.attempted {
            state.attempted = true;
            match FileState::open(&state.log_dir) {
                Ok((file, path)) => {
                    state.file = Some(Mutex::new(file));
                    state.log_path = Some(path);
                }
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable; continuing without a log file. ({err})"
                    );
                }
            }
        }
        if let Some(file) = &state.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            console_log(level, message);
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let file_line = format!("[{timestamp}] {:<5} {message}", level);
            self.write_to_file(&file_line);
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only effective before the first file-targeted message.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut state) = self.file_state.lock() {
            if !state.attempted {
                state.log_dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().map(|s| s.log_dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().and_then(|s| s.log_path.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.log_path();
        f.debug_struct("Logger").field("log_path", &path).finish()
    }
}
