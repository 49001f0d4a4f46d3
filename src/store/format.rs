/// File formats, file naming and the JSON/XML codecs

use crate::error::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// On-disk encoding of a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    /// Array of records. Export writes a schema sample, not the value.
    Xml,
}

impl Format {
    /// File an export under `name` writes to
    pub fn export_file_name(&self, name: &str) -> String {
        match self {
            Format::Json => format!("{}.json", name),
            Format::Xml => format!("{}_Schema.xml", name),
        }
    }

    /// File an import under `name` reads from
    pub fn import_file_name(&self, name: &str) -> String {
        match self {
            Format::Json => format!("{}.json", name),
            Format::Xml => format!("{}.xml", name),
        }
    }
}

/// Fully qualified type name with `.` separators, e.g. `game.save.ScoreRecord`
///
/// This is the default file name for a stored type.
pub fn canonical_name<T: ?Sized>() -> String {
    std::any::type_name::<T>().replace("::", ".")
}

/// Last path segment of the type name, stripped to XML name characters
fn short_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let last = base.rsplit("::").next().unwrap_or(base);
    let cleaned: String = last
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match cleaned.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => cleaned,
        _ => "Item".to_string(),
    }
}

pub(crate) fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

#[derive(Serialize)]
struct XmlArrayRef<'a, T> {
    #[serde(rename = "item")]
    items: &'a [T],
}

#[derive(Deserialize)]
struct XmlArray<T> {
    #[serde(rename = "item", default = "Vec::new")]
    items: Vec<T>,
}

/// Encode records as an indented `<ArrayOfT>` document
pub(crate) fn encode_xml_array<T: Serialize>(items: &[T]) -> Result<String> {
    let root = format!("ArrayOf{}", short_name::<T>());
    let mut body = String::new();

    let mut ser = quick_xml::se::Serializer::with_root(&mut body, Some(root.as_str()))
        .map_err(|e| StoreError::XmlError(e.to_string()))?;
    ser.indent(' ', 2);

    XmlArrayRef { items }
        .serialize(ser)
        .map_err(|e| StoreError::XmlError(e.to_string()))?;

    let mut xml = String::with_capacity(XML_DECLARATION.len() + body.len() + 1);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&body);
    xml.push('\n');
    Ok(xml)
}

/// Decode an array document; the root element name is not checked
pub(crate) fn decode_xml_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let array: XmlArray<T> =
        quick_xml::de::from_str(text).map_err(|e| StoreError::XmlError(e.to_string()))?;
    Ok(array.items)
}
