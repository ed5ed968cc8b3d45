use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Human-readable risk category derived from the classifier's class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Class label the classifier emits for this level.
    pub fn class_label(&self) -> i64 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("class label {0} does not map to a risk level")]
pub struct UnknownClass(pub i64);

impl TryFrom<i64> for RiskLevel {
    type Error = UnknownClass;

    fn try_from(label: i64) -> Result<Self, Self::Error> {
        match label {
            0 => Ok(RiskLevel::Low),
            1 => Ok(RiskLevel::Medium),
            2 => Ok(RiskLevel::High),
            other => Err(UnknownClass(other)),
        }
    }
}

/// Outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub class_label: i64,
    pub risk: RiskLevel,
}

impl Prediction {
    pub fn from_class(class_label: i64) -> Result<Self, UnknownClass> {
        Ok(Self {
            class_label,
            risk: RiskLevel::try_from(class_label)?,
        })
    }
}
