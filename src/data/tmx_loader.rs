// ============================================================
// Layer 4 - TMX Loader
// ============================================================
// Reads a Tiled .tmx map with the xml-rs pull parser and keeps
// only what the scanner needs.
//
// The parts of a .tmx file we look at:
//
//   <map width="40" height="30" ...>       ← declared size
//     <tileset .../>
//     <layer name="walls" ...>             ← optional selector
//       <data encoding="csv">              ← raw grid text
//         1,2,2,...
//       </data>
//     </layer>
//   </map>
//
// Without a layer name the first <data> element in document
// order is used. Only csv (or no encoding attribute) is read;
// base64/zlib layers are rejected with a typed error.
//
// Reference: xml-rs crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};
use xml::{
    attribute::OwnedAttribute,
    reader::{EventReader, XmlEvent},
};

use crate::domain::{error::MapError, grid::RawGrid, traits::GridSource};

/// Loads one tile layer from a .tmx file on disk.
/// Implements the GridSource trait from Layer 3.
pub struct TmxLoader {
    /// Path to the .tmx file
    path: PathBuf,

    /// Name of the layer to read, or None for the first one
    layer: Option<String>,
}

impl TmxLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), layer: None }
    }

    /// Read the named layer instead of the first one.
    pub fn with_layer(mut self, layer: Option<String>) -> Self {
        self.layer = layer;
        self
    }
}

impl GridSource for TmxLoader {
    fn load_grid(&self) -> Result<RawGrid, MapError> {
        let file = File::open(&self.path).map_err(|source| MapError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Parsing map '{}'", self.path.display());

        // The file handle is dropped with the reader when parsing returns
        let grid = parse_tmx(BufReader::new(file), self.layer.as_deref())?;

        tracing::info!(
            "Loaded map '{}': height {}, layer {}",
            self.path.display(),
            grid.height,
            grid.layer.as_deref().unwrap_or("<unnamed>"),
        );

        Ok(grid)
    }
}

/// Parse TMX XML from any reader.
///
/// Stops reading as soon as the wanted <data> element is closed.
pub fn parse_tmx<R: Read>(source: R, layer: Option<&str>) -> Result<RawGrid, MapError> {
    let parser = EventReader::new(source);

    let mut dims: Option<(u32, Option<u32>)> = None;
    let mut current_layer: Option<String> = None;
    let mut capturing = false;
    let mut text = String::new();

    for event in parser {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => {
                match name.local_name.as_str() {
                    "map" if dims.is_none() => {
                        let height = dimension(&attributes, "height")?
                            .ok_or(MapError::MissingDimension("height"))?;
                        let width = dimension(&attributes, "width")?;
                        dims = Some((height, width));
                    }
                    "layer" => {
                        current_layer = attribute(&attributes, "name").map(str::to_string);
                    }
                    "data" if !capturing && wanted(layer, current_layer.as_deref()) => {
                        if let Some(encoding) = attribute(&attributes, "encoding") {
                            if encoding != "csv" {
                                return Err(MapError::UnsupportedEncoding(encoding.to_string()));
                            }
                        }
                        capturing = true;
                    }
                    _ => {}
                }
            }

            XmlEvent::Characters(s) | XmlEvent::Whitespace(s) | XmlEvent::CData(s)
                if capturing =>
            {
                text.push_str(&s);
            }

            XmlEvent::EndElement { name } => match name.local_name.as_str() {
                "data" if capturing => {
                    let (height, width) = dims.ok_or(MapError::MissingElement("map"))?;
                    return Ok(RawGrid {
                        height,
                        width,
                        layer: current_layer,
                        data: text,
                    });
                }
                "layer" => current_layer = None,
                _ => {}
            },

            _ => {}
        }
    }

    if dims.is_none() {
        return Err(MapError::MissingElement("map"));
    }

    match layer {
        Some(name) => Err(MapError::LayerNotFound(name.to_string())),
        None => Err(MapError::MissingElement("data")),
    }
}

/// Value of an attribute by local name
fn attribute<'a>(attributes: &'a [OwnedAttribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.local_name == key)
        .map(|a| a.value.as_str())
}

/// Parse an optional numeric <map> attribute
fn dimension(attributes: &[OwnedAttribute], key: &'static str) -> Result<Option<u32>, MapError> {
    match attribute(attributes, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| MapError::InvalidDimension {
                attr:  key,
                value: raw.to_string(),
            }),
    }
}

fn wanted(selector: Option<&str>, current: Option<&str>) -> bool {
    match selector {
        None => true,
        Some(name) => current == Some(name),
    }
}
