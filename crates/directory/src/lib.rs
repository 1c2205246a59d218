use std::{error::Error, fmt, io};

pub mod catalog;
pub mod filter;
pub mod geolocate;
pub mod selection;
pub mod sort;

#[derive(Debug)]
pub enum DirectoryError {
    NotFound,
    DuplicateSlug(String),
    InvalidCoordinate {
        slug: String,
        latitude: f64,
        longitude: f64,
    },
    Parse(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::NotFound => write!(f, "no such location"),
            DirectoryError::DuplicateSlug(slug) => {
                write!(f, "duplicate location slug '{}'", slug)
            }
            DirectoryError::InvalidCoordinate {
                slug,
                latitude,
                longitude,
            } => write!(
                f,
                "location '{}' has coordinate ({}, {}) outside of valid degree ranges",
                slug, latitude, longitude
            ),
            DirectoryError::Parse(why) => write!(f, "invalid location data: {}", why),
            DirectoryError::Io(why) => write!(f, "could not read location data: {}", why),
        }
    }
}

impl Error for DirectoryError {}

impl From<serde_json::Error> for DirectoryError {
    fn from(value: serde_json::Error) -> Self {
        DirectoryError::Parse(value)
    }
}

impl From<io::Error> for DirectoryError {
    fn from(value: io::Error) -> Self {
        DirectoryError::Io(value)
    }
}

pub type DirectoryResult<O> = Result<O, DirectoryError>;
