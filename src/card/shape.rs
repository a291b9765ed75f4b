use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TARGET_SHAPES: &str = "shapes";
pub const GENERATED_SHEET_ID: &str = "generated";

/// Shape type code of a card.
pub const CARD_SHAPE_TYPE: u32 = 12;
pub const CARD_TYPE: u32 = 0;
pub const LINK_TYPE_URL: u32 = 1;

pub const FONT: &str = "Open Sans";
pub const TEXT_COLOR: &str = "333333";
pub const LINK_COLOR: &str = "2488fd";
pub const LEADING: u32 = 6;
pub const TITLE_FONT_SIZE: u32 = 14;
pub const TITLE_HEIGHT: u32 = 20;
pub const DESCRIPTION_FONT_SIZE: u32 = 12;
pub const DESCRIPTION_HEIGHT: u32 = 18;

/// Top-level clipboard document: a "shapes" collection holding one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapesDocument {
    pub target: String,
    pub sheet_id: String,
    pub shapes: Vec<CardShape>,
}

impl ShapesDocument {
    pub fn single(shape: CardShape) -> Self {
        Self {
            target: TARGET_SHAPES.to_string(),
            sheet_id: GENERATED_SHEET_ID.to_string(),
            shapes: vec![shape],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardShape {
    pub uid: Uuid,
    #[serde(rename = "type")]
    pub shape_type: u32,
    pub keep_aspect_ratio: bool,
    pub locked: bool,
    pub bounds: Bounds,
    pub card_type: u32,
    pub cacoo: CardBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            top: 3000,
            bottom: 3137,
            left: 1100,
            right: 1360,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBody {
    pub title: TextBlock,
    pub description: TextBlock,
    pub expanded: bool,
    pub primary_color: String,
    pub secondary_color: String,
    /// Empty when the issue has no due date.
    pub due_date: String,
    pub external_account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<CardLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub leading: u32,
    pub styles: Vec<StyleRun>,
    pub links: Vec<LinkSpan>,
    pub height: u32,
}

/// Text attributes applying from `index` up to the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRun {
    pub index: usize,
    pub font: String,
    pub size: u32,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl StyleRun {
    pub fn new(index: usize, size: u32, color: &str) -> Self {
        Self {
            index,
            font: FONT.to_string(),
            size,
            color: color.to_string(),
            bold: None,
            underline: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }
}

/// Hyperlink over the inclusive character range `start_index..=end_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSpan {
    #[serde(rename = "type")]
    pub link_type: u32,
    pub to: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLink {
    pub url: String,
}
