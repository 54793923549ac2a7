use std::{
    fmt::Debug,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use fs_err::File;
use serde::{Deserialize, Serialize};

/// Writes `value` as pretty-printed JSON, indenting each level with `indent`.
pub fn write_json_pretty<P: Into<PathBuf>, T: Serialize>(
    path: P,
    value: &T,
    indent: &[u8],
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer_pretty(&mut writer, value, indent)?;
    writer.flush()
}

pub fn to_writer_pretty<W: Write, T: Serialize>(
    writer: W,
    value: &T,
    indent: &[u8],
) -> io::Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| toml::from_str(&fs_err::read_to_string(&path)?).map_err(anyhow::Error::new))().with_context(
        || {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        },
    )
}
