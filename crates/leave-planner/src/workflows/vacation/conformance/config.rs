use serde::{Deserialize, Serialize};

/// How the window filter treats parts that straddle a rule-window edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Clip each part to the rule window; straddling parts are shortened
    /// to the days that fall inside it.
    #[default]
    Truncate,
    /// Keep only parts fully inside the window; a part that partially
    /// exceeds it is dropped entirely.
    ExcludeStraddling,
}

impl WindowPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::ExcludeStraddling => "exclude_straddling",
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    pub window_policy: WindowPolicy,
}
