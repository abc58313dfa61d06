use crate::{
    constants::{localization::*, *},
    read::ItemReader,
    types::*,
};
use encoding_rs::{SHIFT_JIS, UTF_8};
use indexmap::IndexMap;
use log::{info, warn};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};
use std::{
    fs::{create_dir_all, read, write},
    path::{Path, PathBuf},
};

/// Yields `(id, value)` of every line of a `id#value#...` table.
///
/// Comment lines and lines with fewer than three `#`-delimited fields are skipped.
fn table_entries(content: &str) -> impl Iterator<Item = (&str, &str)> {
    content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(|line| {
            let mut fields = line.split(TABLE_SEPARATOR);
            let id: &str = fields.next()?;
            let value: &str = fields.next()?;
            fields.next()?;
            Some((id.trim(), value.trim()))
        })
}

/// Parses `idnum2itemdisplaynametable.txt` contents to [`NameTable`].
#[must_use]
pub fn parse_names(content: &str) -> NameTable {
    table_entries(content)
        .map(|(id, name)| (id.to_owned(), name.to_owned()))
        .collect()
}

/// Parses `itemslotcounttable.txt` contents to [`SlotTable`].
#[must_use]
pub fn parse_slots(content: &str) -> SlotTable {
    let mut slots: SlotTable = SlotTable::default();

    for (id, count) in table_entries(content) {
        match count.parse::<i32>() {
            Ok(count) => {
                slots.insert(id.to_owned(), count);
            }
            Err(_) => warn!("{INVALID_SLOT_COUNT_MSG} [{id}#{count}]"),
        }
    }

    slots
}

/// Parses `cardprefixnametable.txt` and `cardpostfixnametable.txt` contents to [`AffixTable`].
///
/// Names come from the prefix table. Cards listed in the postfix table get their name as a postfix.
#[must_use]
pub fn parse_card_affixes(
    prefix_content: &str,
    postfix_content: &str,
) -> AffixTable {
    let postfixes: IndexMap<&str, &str> = postfix_content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(|line| {
            let mut fields = line.split(TABLE_SEPARATOR).map(str::trim);
            let id: &str = fields.next().filter(|id| !id.is_empty())?;
            Some((id, fields.next().unwrap_or_default()))
        })
        .collect();

    let mut affixes: AffixTable = table_entries(prefix_content)
        .map(|(id, text)| {
            let affix: Affix = if postfixes.contains_key(id) {
                Affix::postfix(text)
            } else {
                Affix::prefix(text)
            };

            (id.to_owned(), affix)
        })
        .collect();

    for (id, text) in postfixes {
        if !text.is_empty() && !affixes.contains_key(id) {
            affixes.insert(id.to_owned(), Affix::postfix(text));
        }
    }

    affixes
}

/// Decodes table contents. Client tables are either UTF-8, possibly with BOM, or Shift_JIS.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _, malformed) = UTF_8.decode(bytes);

    if !malformed {
        return text.into_owned();
    }

    SHIFT_JIS.decode(bytes).0.into_owned()
}

/// Reads and decodes the file with [`decode_text`].
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path: &Path = path.as_ref();
    let bytes: Vec<u8> =
        read(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;

    Ok(decode_text(&bytes))
}

/// Fails on the first table that doesn't exist, before anything is read.
pub fn check_files(files: &SourceFiles) -> Result<(), Error> {
    match files.iter().find(|path| !path.exists()) {
        Some(path) => Err(Error::MissingFile(path.to_path_buf())),
        None => Ok(()),
    }
}

/// Reads names, slot counts and card affixes.
pub fn load_tables(files: &SourceFiles) -> Result<Tables, Error> {
    check_files(files)?;

    Ok(Tables {
        names: parse_names(&read_text(&files.names)?),
        slots: parse_slots(&read_text(&files.slots)?),
        affixes: parse_card_affixes(
            &read_text(&files.card_prefixes)?,
            &read_text(&files.card_postfixes)?,
        ),
    })
}

/// Reads the description table and converts it with [`ItemReader`].
pub fn load_description(
    files: &SourceFiles,
    tables: &Tables,
) -> Result<Output, Error> {
    let content: String = read_text(&files.description)?;
    Ok(ItemReader::new(tables).read(&content))
}

/// Serializes records to JSON indented with four spaces. Non-ASCII characters are kept as is.
pub fn to_json(items: &Items) -> Result<Vec<u8>, Error> {
    let mut buffer: Vec<u8> = Vec::with_capacity(items.len() * 512);
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));

    items.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes records to `items.json` inside `output_dir`, creating it if needed.
pub fn write_json<P: AsRef<Path>>(
    items: &Items,
    output_dir: P,
) -> Result<PathBuf, Error> {
    let output_dir: &Path = output_dir.as_ref();
    create_dir_all(output_dir)
        .map_err(|e| Error::Io(output_dir.to_path_buf(), e))?;

    let output_path: PathBuf = output_dir.join(OUTPUT_FILE);
    write(&output_path, to_json(items)?)
        .map_err(|e| Error::Io(output_path.clone(), e))?;

    info!("{WROTE_FILE_MSG}: {}", output_path.display());
    Ok(output_path)
}
