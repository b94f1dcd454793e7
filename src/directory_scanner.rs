// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for discovering the images of a gallery.
//!
//! This module scans a directory for supported image formats, sorts them
//! according to the configured sort order, and exposes their display titles.

use crate::config::SortOrder;
use crate::error::Result;
use crate::gallery::TitleSource;
use std::path::{Path, PathBuf};

/// Image file extensions the gallery can display.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Images discovered in one directory, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    directory: PathBuf,
    images: Vec<PathBuf>,
}

impl ImageList {
    /// Scans `directory` for supported images and sorts them.
    ///
    /// Sub-directories and files with other extensions are skipped.
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut images = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        sort_images(&mut images, sort_order);
        tracing::info!(
            directory = %directory.display(),
            count = images.len(),
            "scanned gallery directory"
        );

        Ok(Self {
            directory: directory.to_path_buf(),
            images,
        })
    }

    /// Directory the images were discovered in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(|p| p.as_path())
    }

    /// Index of `path` in display order.
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.images.iter().position(|image| image == path)
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl TitleSource for ImageList {
    fn len(&self) -> usize {
        self.images.len()
    }

    /// The file stem, e.g. `harbor` for `harbor.jpg`.
    fn title_of(&self, index: usize) -> String {
        self.get(index).map(title_from_path).unwrap_or_default()
    }
}

/// Display title of an image file.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Checks if a file has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sorts image paths according to the specified sort order.
fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time).then_with(|| a.file_name().cmp(&b.file_name()))
            });
        }
    }
}
