//! Command execution.
//!
//! Each command returns the text to print so it can be checked without a
//! terminal.

use std::fs;
use std::path::Path as FsPath;

use tsf_codec::format::has_tsf_extension;
use tsf_codec::TsfCodec;
use tsf_path_store::Path;

use crate::{CliError, Command};

pub fn execute(command: &Command, codec: &TsfCodec) -> Result<String, CliError> {
    match command {
        Command::Inspect { file } => inspect(codec, file),
        Command::Dump { file, pretty } => dump(codec, file, *pretty),
        Command::Pack { json, out } => pack(codec, json, out),
        Command::ToBase64 { file } => to_base64(codec, file),
        Command::FromBase64 { text, out } => from_base64(codec, text, out),
    }
}

fn inspect(codec: &TsfCodec, file: &FsPath) -> Result<String, CliError> {
    let bytes = fs::read(file)?;
    let header = codec.peek_header(&bytes)?;
    let path = codec.decode(&bytes, Some(bytes.len()))?;
    Ok(format!(
        "{} ({} bytes)\n{}\ny_count={}",
        file.display(),
        bytes.len(),
        header,
        path.y().len()
    ))
}

fn dump(codec: &TsfCodec, file: &FsPath, pretty: bool) -> Result<String, CliError> {
    let path = codec.read_file(file)?;
    let json = if pretty {
        serde_json::to_string_pretty(&path)?
    } else {
        serde_json::to_string(&path)?
    };
    Ok(json)
}

fn pack(codec: &TsfCodec, json: &FsPath, out: &FsPath) -> Result<String, CliError> {
    let path: Path = serde_json::from_str(&fs::read_to_string(json)?)?;
    write(codec, &path, out)
}

fn to_base64(codec: &TsfCodec, file: &FsPath) -> Result<String, CliError> {
    let path = codec.read_file(file)?;
    Ok(codec.to_base64(&path)?)
}

fn from_base64(codec: &TsfCodec, text: &str, out: &FsPath) -> Result<String, CliError> {
    let path = codec.from_base64(text)?;
    write(codec, &path, out)
}

fn write(codec: &TsfCodec, path: &Path, out: &FsPath) -> Result<String, CliError> {
    if !has_tsf_extension(out) {
        log::warn!("{} does not end in .tsf", out.display());
    }
    codec.write_file(out, path)?;
    Ok(format!(
        "wrote path {} ({} x, {} y) to {}",
        path.id(),
        path.x().len(),
        path.y().len(),
        out.display()
    ))
}
