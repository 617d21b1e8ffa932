//! Error types for the ambient loading layer. The core renderer never
//! returns a `Result`; these are strictly for the OBJ and image loaders
//! in [`crate::loaders`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed OBJ data at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("mesh contains no triangles")]
    Empty,
}

#[derive(Debug, Error)]
pub enum TextureLoadError {
    #[error("failed to decode texture image: {0}")]
    Image(#[from] image::ImageError),
}
