use std::{io::Write, path::Path};

use thiserror::Error;

use crate::classifier::LinkKind;
use crate::link_sets::LinkSet;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a `Type,URL` table: every internal link, then every external one.
/// Fields containing commas or quotes are quoted.
pub fn write_csv<W: Write>(
    internal: &LinkSet,
    external: &LinkSet,
    writer: W,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    write_rows(&mut writer, internal, external)
}

#[tracing::instrument(skip(internal, external))]
pub fn export_csv(internal: &LinkSet, external: &LinkSet, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, internal, external)?;
    tracing::info!("Exported {} rows", internal.len() + external.len());
    Ok(())
}

fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    internal: &LinkSet,
    external: &LinkSet,
) -> Result<(), ExportError> {
    writer.write_record(["Type", "URL"])?;
    for (kind, links) in [(LinkKind::Internal, internal), (LinkKind::External, external)] {
        for url in links.iter() {
            writer.write_record([kind.label(), url])?;
        }
    }
    writer.flush()?;
    Ok(())
}
