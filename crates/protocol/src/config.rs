use serde::{Deserialize, Serialize};

/// Per-run export preferences supplied by the UI surface.
///
/// Scoped to a single session run, never global. The structured export path
/// emits raw values regardless of these settings; the string-formatting
/// helpers in the core crate are their only consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorFormat>,
}

/// Dimension unit for string-formatted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFormat {
    Px,
    Rem,
}

/// Color representation for string-formatted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgba,
}
