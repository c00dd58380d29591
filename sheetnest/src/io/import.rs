use anyhow::{Context, Result, ensure};
#[cfg(feature = "parallel-import")]
use rayon::prelude::*;

use crate::entities::{Instance, PartSpec, Sheet};
use crate::geometry::primitives::{Point, Rect};
use crate::io::ext_repr::{ExtInstance, ExtPart, ExtSheet, ExtShape};

/// Imports an instance into the library. Fails on the first invalid sheet or part.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let sheet = import_sheet(&ext_instance.sheet)?;

    #[cfg(feature = "parallel-import")]
    let parts = ext_instance
        .parts
        .par_iter()
        .map(import_part)
        .collect::<Result<Vec<PartSpec>>>()?;

    #[cfg(not(feature = "parallel-import"))]
    let parts = ext_instance
        .parts
        .iter()
        .map(import_part)
        .collect::<Result<Vec<PartSpec>>>()?;

    Ok(Instance::new(parts, sheet)?)
}

pub fn import_sheet(ext_sheet: &ExtSheet) -> Result<Sheet> {
    let sheet = Sheet::new(ext_sheet.width, ext_sheet.height)?;
    match ext_sheet.grain_angle {
        Some(angle) => Ok(sheet.with_grain(angle)?),
        None => Ok(sheet),
    }
}

pub fn import_part(ext_part: &ExtPart) -> Result<PartSpec> {
    let vertices = import_shape(&ext_part.shape)
        .with_context(|| format!("invalid shape for part {:?}", ext_part.id))?;
    let quantity = usize::try_from(ext_part.quantity)?;

    let mut part = PartSpec::new(
        ext_part.id.clone(),
        vertices,
        ext_part.area,
        quantity,
        ext_part.rotation,
    )?;
    if let Some(grain) = ext_part.grain {
        part = part.with_grain(grain)?;
    }
    if let Some(spacing) = ext_part.min_spacing {
        part = part.with_min_spacing(spacing)?;
    }
    Ok(part)
}

fn import_shape(shape: &ExtShape) -> Result<Vec<Point>> {
    match shape {
        ExtShape::Rectangle {
            x_min,
            y_min,
            width,
            height,
        } => {
            ensure!(
                *width > 0.0 && *height > 0.0,
                "invalid rectangle, width: {width}, height: {height}"
            );
            Ok(Rect::from_origin(*x_min, *y_min, *width, *height)
                .corners()
                .to_vec())
        }
        ExtShape::SimplePolygon(esp) => Ok(esp.0.iter().map(|&p| Point::from(p)).collect()),
    }
}
