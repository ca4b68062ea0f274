//! Reading vertex positions from Wavefront OBJ text.
//!
//! Only positions are kept. Faces, normals, texture coordinates and materials
//! are parsed by [`tobj`] and then dropped; `mtllib` references are never
//! followed. Text without faces is read as a point cloud of its `v` records.

use std::{collections::HashMap, io::BufRead};

use thiserror::Error;
use tracing::debug;

use crate::{normalize_with, Bounds, NormalizeConfig, NormalizeError, Point3};

/// An error returned while reading OBJ data.
#[derive(Error, Debug)]
pub enum ObjError {
    /// The OBJ text could not be parsed.
    #[error("Failed to parse OBJ data: {0}")]
    Load(#[from] tobj::LoadError),
    /// The OBJ text parsed but contains no vertex positions.
    #[error("OBJ data contains no vertex positions.")]
    NoPositions,
    /// The positions could not be normalized.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Reads the vertex positions of every model in `reader`.
///
/// Positions of all models are concatenated in file order. A vertex shared by
/// several models appears once per model. Models only carry the vertices their
/// faces reference; if no face references any vertex, every `v` record is
/// returned in file order instead.
///
/// # Errors
///
/// - [`ObjError::Load`] if the input cannot be read or `tobj` rejects it.
/// - [`ObjError::NoPositions`] if the input has no `v` records.
pub fn read_obj_points<R: BufRead>(reader: &mut R) -> Result<Vec<Point3>, ObjError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|_| tobj::LoadError::ReadError)?;

    let (models, _materials) =
        tobj::load_obj_buf(&mut text.as_bytes(), &tobj::LoadOptions::default(), |_| {
            Ok((Vec::new(), HashMap::new()))
        })?;

    let mut points: Vec<Point3> = models
        .iter()
        .flat_map(|model| model.mesh.positions.chunks_exact(3))
        .map(|p| Point3::new(p[0], p[1], p[2]))
        .collect();

    if points.is_empty() {
        points = vertex_records(&text)?;
        debug!(points = points.len(), "Read OBJ point cloud");
    } else {
        debug!(models = models.len(), points = points.len(), "Read OBJ positions");
    }

    if points.is_empty() {
        return Err(ObjError::NoPositions);
    }
    Ok(points)
}

/// Parses the `x y z` of every `v` record, ignoring `w` and vertex colors.
fn vertex_records(text: &str) -> Result<Vec<Point3>, tobj::LoadError> {
    text.lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            (words.next() == Some("v")).then_some(words)
        })
        .map(|mut words| {
            let mut coord = || {
                words
                    .next()
                    .and_then(|w| w.parse::<f32>().ok())
                    .ok_or(tobj::LoadError::PositionParseError)
            };
            Ok(Point3::new(coord()?, coord()?, coord()?))
        })
        .collect()
}

/// Reads the vertex positions in `reader` and normalizes them with `config`.
///
/// Returns the normalized positions together with their bounds before
/// normalization.
///
/// # Errors
///
/// Any error of [`read_obj_points`], or [`ObjError::Normalize`] if
/// [`normalize_with`] fails.
pub fn read_normalized_obj<R: BufRead>(
    reader: &mut R,
    config: &NormalizeConfig,
) -> Result<(Vec<Point3>, Bounds), ObjError> {
    let mut points = read_obj_points(reader)?;
    let original = normalize_with(&mut points, config)?;
    Ok((points, original))
}
