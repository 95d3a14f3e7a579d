use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declarative level: static obstacles, in screen coordinates of the canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub blocks: Vec<Block>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    #[serde(default = "Block::default_half_extent")]
    pub half_extent: f32,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            half_extent: Self::default_half_extent(),
        }
    }

    fn default_half_extent() -> f32 {
        25.0
    }
}

impl Level {
    /// The three-block stack of the classic layout.
    pub fn builtin() -> Self {
        Self {
            name: "Classic".to_string(),
            blocks: vec![
                Block::new(600.0, 500.0),
                Block::new(650.0, 500.0),
                Block::new(625.0, 450.0),
            ],
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("failed to read level file {}", path.display()))?;
        Ok(serde_json::from_slice(&data)?)
    }
}
