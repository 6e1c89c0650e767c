use relative_path::{RelativePath, RelativePathBuf};

/// A markdown document addressed relative to the content root
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ContentFile {
    /// Create a new ContentFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file stem, e.g. `pricing-guide`)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Path used when storing the document's block list next to it
    pub fn blocks_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension("blocks.json")
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_stem().unwrap_or("Untitled").to_string()
    }
}

impl From<RelativePathBuf> for ContentFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ContentFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
