//! Crate error type.
//!
//! Errors only arise at the host boundary: parsing configuration and writing exported frames.
//! The frame loop itself is infallible.
use std::fmt;

#[derive(Debug)]
pub enum Error {
  Io(std::io::Error),
  #[cfg(feature = "drawing")]
  Image(image::ImageError),
  /// A palette entry that is neither a hex triplet nor a known color name
  InvalidColor(String),
  InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self { Error::Io(e) } }
#[cfg(feature = "drawing")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self { Error::Image(e) } }

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      Io(err) => write!(f, "{}", err),
      #[cfg(feature = "drawing")]
      Image(err) => write!(f, "{}", err),
      InvalidColor(s) => write!(f, "invalid color: {:?}", s),
      InvalidConfig(s) => write!(f, "invalid config: {}", s),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(err) => Some(err),
      #[cfg(feature = "drawing")]
      Error::Image(err) => Some(err),
      _ => None
    }
  }
}
