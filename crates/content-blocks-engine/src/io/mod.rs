use crate::editing::BlockDocument;
use crate::models::ContentFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid block list in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Invalid content root: {0}")]
    InvalidContentRoot(String),
}

/// Read a markdown document and return its content
pub fn read_document(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markdown document
pub fn write_document(
    relative_path: &RelativePath,
    content_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(content_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Read a stored block list (a JSON array of blocks)
pub fn read_blocks_json(path: &Path) -> Result<BlockDocument, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a block list as pretty-printed JSON
pub fn write_blocks_json(path: &Path, document: &BlockDocument) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(document).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(IoError::Io)
}

/// Find documents under the content root matching a glob such as `**/*.md`
pub fn scan_documents(content_root: &Path, pattern: &str) -> Result<Vec<ContentFile>, IoError> {
    validate_content_root(content_root)?;

    let root = glob::Pattern::escape(&content_root.to_string_lossy());
    let full_pattern = format!("{root}/{pattern}");

    let mut files = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        let path = entry.map_err(std::io::Error::from)?;
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_root) else {
            continue;
        };
        match RelativePathBuf::from_path(relative) {
            Ok(relative) => files.push(ContentFile::new(relative)),
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }
    files.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
    Ok(files)
}

pub fn validate_content_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentRoot(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
