use crate::types::ProjectionResult;
use anyhow::{Context, Result};
use clap::ValueEnum;
use rmp_serde::encode;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Encoding of an exported result.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Json,
    Msgpack,
}

/// Save a projection result to a file.
pub fn save_result<P: AsRef<Path>>(res: &ProjectionResult, format: Format, file: P) -> Result<()> {
    let file = file.as_ref();
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let mut writer = BufWriter::new(file);

    match format {
        Format::Json => serde_json::to_writer_pretty(&mut writer, res)
            .context("failed to serialize result")?,
        Format::Msgpack => encode::write(&mut writer, res).context("failed to serialize result")?,
    }

    writer.flush().context("failed to flush writer stream")?;

    Ok(())
}
