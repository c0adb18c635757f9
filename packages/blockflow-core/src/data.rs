use serde::{Deserialize, Serialize};

/// The content payload handed in at construction: asset names, the folder
/// they resolve against, and the ordered block records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VizData {
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub assets_folder: String,
    pub blocks: Vec<BlockRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    #[serde(default)]
    pub title: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub dots: Vec<DotRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotRecord {
    pub dot_type: String,
    pub color: u32,
    pub x: f32,
    pub y: f32,
}
