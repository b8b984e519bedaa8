// SPDX-License-Identifier: MPL-2.0
//! Gallery tree builder.
//!
//! Walks a media root and turns its directory layout into an ordered list of
//! [`Category`] values. The root's immediate subdirectories are processed in
//! lexicographic order and each one is structured in one of two modes:
//!
//! - **Flat mode** (the configured reserved name, `renders` by default): every
//!   subdirectory becomes a category of its media files, and every loose media
//!   file becomes a single-entry category named after its stem.
//! - **Nested mode** (every other name): every subdirectory becomes a category;
//!   its media files become entries and its own subdirectories become folder
//!   entries listing the media file names one level deeper.
//!
//! Traversal stops there: three levels below the root is the hard limit.
//!
//! A missing root yields an empty gallery. Any directory that cannot be read
//! once the walk has started fails the whole build.

use super::{join_public, Category, Entry};
use crate::config::{GalleryConfig, DEFAULT_FLAT_CATEGORY, DEFAULT_PUBLIC_PREFIX};
use crate::error::{Error, Result};
use crate::media;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory child as discovered by `read_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirChild {
    name: String,
    is_dir: bool,
}

/// Builds gallery trees from a media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBuilder {
    root: PathBuf,
    public_prefix: String,
    flat_category: String,
}

impl GalleryBuilder {
    /// Creates a builder for `root` with the default prefix and flat category.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            flat_category: DEFAULT_FLAT_CATEGORY.to_string(),
        }
    }

    /// Creates a builder from the `[gallery]` config section.
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            root: config.media_root.clone(),
            public_prefix: config.public_prefix.clone(),
            flat_category: config.flat_category.clone(),
        }
    }

    #[must_use]
    pub fn with_public_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.public_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_flat_category(mut self, name: impl Into<String>) -> Self {
        self.flat_category = name.into();
        self
    }

    /// Builds the gallery, optionally restricted to one top-level directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a directory below an existing root cannot be read.
    pub fn build(&self, filter: Option<&str>) -> Result<Vec<Category>> {
        if !self.root.exists() {
            tracing::debug!(root = %self.root.display(), "media root missing, gallery is empty");
            return Ok(Vec::new());
        }

        let mut top_dirs = subdirectories(&self.root)?;
        if let Some(filter) = filter {
            top_dirs.retain(|name| name == filter);
        }

        let mut categories = Vec::new();
        for top in &top_dirs {
            let top_dir = self.root.join(top);
            let top_public = join_public(&self.public_prefix, top);
            if *top == self.flat_category {
                build_flat(&top_dir, &top_public, &mut categories)?;
            } else {
                build_nested(&top_dir, &top_public, &mut categories)?;
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            filter = filter.unwrap_or("*"),
            categories = categories.len(),
            "built gallery tree"
        );
        Ok(categories)
    }
}

/// Builds the gallery under `root` with default settings.
///
/// # Errors
///
/// See [`GalleryBuilder::build`].
pub fn build(root: &Path, filter: Option<&str>) -> Result<Vec<Category>> {
    GalleryBuilder::new(root).build(filter)
}

/// Flat mode: child directories first, then loose files, each group in
/// discovery order.
fn build_flat(dir: &Path, public: &str, out: &mut Vec<Category>) -> Result<()> {
    let (dirs, files): (Vec<DirChild>, Vec<DirChild>) =
        list_dir(dir)?.into_iter().partition(|child| child.is_dir);

    for child in dirs {
        let category_path = join_public(public, &child.name);
        let entries = media_files(&dir.join(&child.name))?
            .into_iter()
            .map(|file| {
                let path = join_public(&category_path, &file);
                Entry::media(file, path)
            })
            .collect();
        out.push(Category {
            name: child.name,
            path: category_path,
            entries,
        });
    }

    for child in files {
        if !media::is_supported(&child.name) {
            tracing::trace!(file = %child.name, "skipping unsupported file");
            continue;
        }
        let stem = Path::new(&child.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&child.name)
            .to_string();
        let path = join_public(public, &child.name);
        out.push(Category {
            name: stem,
            path: public.to_string(),
            entries: vec![Entry::media(child.name, path)],
        });
    }

    Ok(())
}

/// Nested mode: one category per subdirectory, sub-subdirectories become
/// folder entries.
fn build_nested(dir: &Path, public: &str, out: &mut Vec<Category>) -> Result<()> {
    for name in subdirectories(dir)? {
        let category_dir = dir.join(&name);
        let category_path = join_public(public, &name);

        let mut children: Vec<DirChild> = list_dir(&category_dir)?
            .into_iter()
            .filter(|child| child.is_dir || media::is_supported(&child.name))
            .collect();
        children.sort_by(directories_first);

        let mut entries = Vec::with_capacity(children.len());
        for child in children {
            let path = join_public(&category_path, &child.name);
            if child.is_dir {
                let images = media_files(&category_dir.join(&child.name))?;
                entries.push(Entry::folder(child.name, path, images));
            } else {
                entries.push(Entry::media(child.name, path));
            }
        }

        out.push(Category {
            name,
            path: category_path,
            entries,
        });
    }
    Ok(())
}

fn directories_first(a: &DirChild, b: &DirChild) -> Ordering {
    b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name))
}

/// Lists a directory in discovery order.
fn list_dir(dir: &Path) -> Result<Vec<DirChild>> {
    let read_error = |err: std::io::Error| {
        tracing::warn!(dir = %dir.display(), error = %err, "failed to read directory");
        Error::Io(format!("{}: {err}", dir.display()))
    };

    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        match entry.file_name().into_string() {
            Ok(name) => children.push(DirChild {
                name,
                is_dir: path.is_dir(),
            }),
            Err(raw) => {
                tracing::trace!(name = ?raw, "skipping non UTF-8 file name");
            }
        }
    }
    Ok(children)
}

/// Names of the immediate subdirectories, sorted.
fn subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = list_dir(dir)?
        .into_iter()
        .filter(|child| child.is_dir)
        .map(|child| child.name)
        .collect();
    names.sort();
    Ok(names)
}

/// Names of the allow-listed media files, sorted.
fn media_files(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = list_dir(dir)?
        .into_iter()
        .filter(|child| !child.is_dir && media::is_supported(&child.name))
        .map(|child| child.name)
        .collect();
    names.sort();
    Ok(names)
}
