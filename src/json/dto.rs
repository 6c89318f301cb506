//! Serde-Abbild des Dateiformats (camelCase, optionale Felder mit Defaults).

use serde::{Deserialize, Serialize};

use crate::core::{LabelPosition, LineStyle};

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SchemeFile {
    pub stops: Vec<StopRecord>,
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StopRecord {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub label_position: LabelPosition,
    #[serde(default)]
    pub is_terminal: bool,
    /// Beim Import ignoriert, beim Export geschrieben
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RouteRecord {
    pub id: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub line_width: f32,
    #[serde(default)]
    pub line_style: LineStyle,
    pub stops: Vec<String>,
    #[serde(default)]
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SegmentRecord {
    pub from: String,
    pub to: String,
    pub points: Vec<PointRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(super) struct PointRecord {
    pub x: f32,
    pub y: f32,
}
