use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DiscoveryError;
use crate::shared::Result;
use std::borrow::Cow;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rendered views always end with exactly one trailing newline
fn terminated(view: &str) -> Cow<'_, str> {
    if view.ends_with('\n') {
        Cow::Borrowed(view)
    } else {
        Cow::Owned(format!("{}\n", view))
    }
}

/// ViewFileWriter - saves a rendered discovery view to a file
///
/// The view is staged next to the target and renamed into place, so a
/// previously saved view is either kept whole or fully replaced. Symlinked
/// and directory targets are refused.
pub struct ViewFileWriter {
    target: PathBuf,
}

impl ViewFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    fn write_error(&self, details: impl Into<String>) -> DiscoveryError {
        DiscoveryError::FileWriteError {
            path: self.target.clone(),
            details: details.into(),
        }
    }

    fn check_target(&self) -> Result<()> {
        if let Some(parent) = self.target.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }

        match fs::symlink_metadata(&self.target) {
            Ok(metadata) if metadata.is_symlink() => Err(self
                .write_error("Refusing to write a view through a symbolic link")
                .into()),
            Ok(metadata) if metadata.is_dir() => Err(self
                .write_error("Output path is a directory, expected a file name")
                .into()),
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self
                .write_error(format!("Failed to inspect output path: {}", e))
                .into()),
        }
    }

    /// `.<name>.partial` in the target's directory
    fn staging_path(&self) -> PathBuf {
        let name = self
            .target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "view".to_string());
        self.target.with_file_name(format!(".{}.partial", name))
    }
}

impl OutputPresenter for ViewFileWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;

        let staging = self.staging_path();
        let view = terminated(content);
        if let Err(e) = fs::write(&staging, view.as_bytes()) {
            let _ = fs::remove_file(&staging);
            return Err(self.write_error(e.to_string()).into());
        }
        if let Err(e) = fs::rename(&staging, &self.target) {
            let _ = fs::remove_file(&staging);
            return Err(self
                .write_error(format!("Failed to move view into place: {}", e))
                .into());
        }

        info!(path = %self.target.display(), bytes = view.len(), "Saved rendered view");
        Ok(())
    }
}

/// StdoutPresenter - prints the rendered view
///
/// A closed pipe (`vendor-discovery ... | head`) ends output quietly.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        write_view(&mut io::stdout().lock(), content)
    }
}

fn write_view<W: Write>(out: &mut W, content: &str) -> Result<()> {
    let view = terminated(content);
    match out.write_all(view.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed before the view was fully written");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to write view to stdout: {}", e)),
    }
}
