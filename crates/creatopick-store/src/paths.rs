//! Path resolution for the app data directory

use std::path::PathBuf;

/// Resolves the fixed file layout under `~/.creatopick`
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolver rooted at the current user's home directory
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(".creatopick"),
        })
    }

    /// Resolver rooted at an explicit directory (tests, --data-dir overrides)
    pub fn from_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn bookmarks_file(&self) -> PathBuf {
        self.data_dir.join("bookmarks.json")
    }

    pub fn library_file(&self) -> PathBuf {
        self.data_dir.join("library.json")
    }

    pub fn enhanced_file(&self) -> PathBuf {
        self.data_dir.join("enhanced.json")
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    pub fn presets_file(&self) -> PathBuf {
        self.data_dir.join("presets.json")
    }

    pub fn topic_cache_dir(&self) -> PathBuf {
        self.data_dir.join("topic_cache")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }

    /// Create the directory layout
    pub fn ensure_layout(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.topic_cache_dir())?;
        std::fs::create_dir_all(self.images_dir())?;
        Ok(())
    }
}
