use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::io::image_io::save_annotated;

use super::annotate::AnnotatedFrame;

/// Receives annotated debug frames from a detector.
///
/// Implementations own whatever display resource they drive (a window, a
/// stream, a directory). Detection never waits on or fails because of a sink:
/// errors returned here are logged and dropped.
pub trait FrameSink: Send + Sync {
    fn present(&self, frame: &AnnotatedFrame) -> Result<()>;
}

/// Writes each annotated frame as `frame_NNNNN.png` into a directory.
#[derive(Clone, Debug)]
pub struct ImageDirSink {
    dir: PathBuf,
}

impl ImageDirSink {
    /// Create the sink, creating `dir` if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, frame_index: usize) -> PathBuf {
        self.dir.join(format!("frame_{frame_index:05}.png"))
    }
}

impl FrameSink for ImageDirSink {
    fn present(&self, frame: &AnnotatedFrame) -> Result<()> {
        save_annotated(frame, &self.path_for(frame.frame_index))
    }
}

/// Keeps every presented frame in memory. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    frames: Mutex<Vec<AnnotatedFrame>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything presented so far, in arrival order.
    pub fn frames(&self) -> Vec<AnnotatedFrame> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().map(|frames| frames.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FrameSink for CollectingSink {
    fn present(&self, frame: &AnnotatedFrame) -> Result<()> {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame.clone());
        }
        Ok(())
    }
}
