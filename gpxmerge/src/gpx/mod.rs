//! GPX reading and writing.
//!
//! [`GpxDocument`] wraps a parsed `gpx::Gpx`. Only the waypoint list takes
//! part in merging; metadata, tracks and routes are kept so the master
//! document can be written back with its waypoints replaced.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use geo_types::Point;
use ::gpx::{Gpx, GpxVersion};

use crate::waypoint::{Waypoint, WaypointError};

/// Creator written when the source document has none.
pub const DEFAULT_CREATOR: &str = "gpxmerge";

/// Errors reading or writing GPX files.
#[derive(Debug, thiserror::Error)]
pub enum GpxError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid waypoint '{name}' in {}: {source}", path.display())]
    InvalidWaypoint {
        path: PathBuf,
        name: String,
        #[source]
        source: WaypointError,
    },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

/// A parsed GPX document.
#[derive(Debug, Clone)]
pub struct GpxDocument {
    path: PathBuf,
    inner: Gpx,
}

impl GpxDocument {
    /// Read and validate a GPX file.
    pub fn read(path: &Path) -> Result<Self, GpxError> {
        let file = File::open(path).map_err(|source| GpxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parse GPX from any reader. `origin` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, GpxError> {
        let inner = ::gpx::read(reader).map_err(|e| GpxError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let doc = Self {
            path: origin.to_path_buf(),
            inner,
        };
        doc.check_coordinates()?;
        Ok(doc)
    }

    /// Parse GPX from a byte slice.
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self, GpxError> {
        Self::from_reader(bytes, origin)
    }

    fn check_coordinates(&self) -> Result<(), GpxError> {
        for wp in self.waypoints() {
            wp.validate().map_err(|source| GpxError::InvalidWaypoint {
                path: self.path.clone(),
                name: wp.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the path, used as the source name.
    pub fn file_name(&self) -> String {
        source_name(&self.path)
    }

    /// Number of waypoints in the document.
    pub fn waypoint_count(&self) -> usize {
        self.inner.waypoints.len()
    }

    /// Number of tracks in the document.
    pub fn track_count(&self) -> usize {
        self.inner.tracks.len()
    }

    /// Number of routes in the document.
    pub fn route_count(&self) -> usize {
        self.inner.routes.len()
    }

    /// Waypoints converted to the merge model.
    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.inner.waypoints.iter().map(from_gpx_waypoint).collect()
    }

    /// Replace the waypoint list, leaving everything else untouched.
    pub fn replace_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.inner.waypoints = waypoints.iter().map(to_gpx_waypoint).collect();
    }

    /// Serialize as GPX 1.1.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GpxError> {
        let mut buf = Vec::new();
        self.write_into(&mut buf, &self.path)?;
        Ok(buf)
    }

    /// Write the document as GPX 1.1 to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), GpxError> {
        let file = File::create(path).map_err(|e| GpxError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        self.write_into(&mut writer, path)?;
        writer.flush().map_err(|e| GpxError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn write_into<W: Write>(&self, writer: W, path: &Path) -> Result<(), GpxError> {
        let mut out = self.inner.clone();
        out.version = GpxVersion::Gpx11;
        if out.creator.is_none() {
            out.creator = Some(DEFAULT_CREATOR.to_string());
        }

        ::gpx::write(&out, writer).map_err(|e| GpxError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// File name component of a path, or the whole path if it has none.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn from_gpx_waypoint(wp: &::gpx::Waypoint) -> Waypoint {
    let point = wp.point();
    Waypoint {
        latitude: point.y(),
        longitude: point.x(),
        elevation: wp.elevation,
        name: wp.name.clone().unwrap_or_default(),
        comment: wp.comment.clone(),
        description: wp.description.clone(),
        symbol: wp.symbol.clone(),
        kind: wp.type_.clone(),
    }
}

fn to_gpx_waypoint(wp: &Waypoint) -> ::gpx::Waypoint {
    let mut out = ::gpx::Waypoint::new(Point::new(wp.longitude, wp.latitude));
    out.elevation = wp.elevation;
    out.name = (!wp.name.is_empty()).then(|| wp.name.clone());
    out.comment = wp.comment.clone();
    out.description = wp.description.clone();
    out.symbol = wp.symbol.clone();
    out.type_ = wp.kind.clone();
    out
}

#[cfg(test)]
mod tests;
