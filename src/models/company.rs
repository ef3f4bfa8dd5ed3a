//! Company model for payslip headers.

use serde::{Deserialize, Serialize};

fn default_theme_color() -> String {
    "#0088c8".to_string()
}

/// The company issuing the payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Legal or trading name shown in the payslip header.
    pub name: String,
    /// Address, one entry per printed line.
    #[serde(default)]
    pub address_lines: Vec<String>,
    /// Accent color used by the rendering collaborator.
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    /// Optional logo as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_data_url: Option<String>,
    /// Optional stamp image as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_data_url: Option<String>,
    /// Optional watermark image as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark_data_url: Option<String>,
}
