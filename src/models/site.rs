use serde::{Deserialize, Serialize};

/// A canonical audit target produced by the site resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTarget {
    /// Scheme-qualified URL handed to the audit engine.
    pub url: String,
    /// Unique, filesystem-safe identifier for this run.
    pub name: String,
    /// HTML report file name, when HTML artifacts were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// CSV report file name, when CSV artifacts were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
}

impl SiteTarget {
    pub fn wants_artifacts(&self) -> bool {
        self.html.is_some() || self.csv.is_some()
    }
}

/// Device emulation preset the engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    #[default]
    Mobile,
    Desktop,
}

impl AuditMode {
    pub fn from_desktop_flag(desktop: bool) -> Self {
        if desktop {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for AuditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
