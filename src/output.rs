use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSONを書き出す（`path` が `None` なら標準出力）
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(path)?);
            write_to(&mut writer, value, pretty)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_to(&mut writer, value, pretty)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
