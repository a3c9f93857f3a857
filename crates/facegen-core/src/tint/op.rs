// crates/facegen-core/src/tint/op.rs

use serde::{Deserialize, Serialize};

use crate::catalog::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TintKind {
    #[serde(rename = "Value")]
    Value,
    #[serde(rename = "Value/Color")]
    ValueColor,
}

/// One paint instruction. Later operations paint over earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TintOp {
    #[serde(rename = "type")]
    pub kind: TintKind,
    pub index: String,
    /// Intensity in `[0, 1]`.
    pub value: f64,
    #[serde(rename = "templateColor", default, skip_serializing_if = "Option::is_none")]
    pub template_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<u8>,
    /// Layer that emitted this op. Not part of the record written out.
    #[serde(skip)]
    pub target: Option<Target>,
}

impl TintOp {
    pub fn value(target: Target, index: &str, value: f64) -> Self {
        Self {
            kind: TintKind::Value,
            index: index.to_owned(),
            value,
            template_color: None,
            red: None,
            green: None,
            blue: None,
            target: Some(target),
        }
    }

    pub fn colored(target: Target, index: &str, value: f64, template_color: Option<&str>, rgb: [u8; 3]) -> Self {
        Self {
            kind: TintKind::ValueColor,
            index: index.to_owned(),
            value,
            template_color: template_color.map(str::to_owned),
            red: Some(rgb[0]),
            green: Some(rgb[1]),
            blue: Some(rgb[2]),
            target: Some(target),
        }
    }
}
