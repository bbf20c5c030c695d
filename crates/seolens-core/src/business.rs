//! Business context supplied alongside a URL

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic focus values that need a concrete location.
const LOCATION_REQUIRED_FOCUS: &[&str] = &["hyper_local", "regional"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessContextError {
    #[error("Please answer all 5 business context questions to get accurate SEO recommendations.")]
    MissingAnswers,

    #[error("Please enter your location/city for hyper-local or regional geographic focus.")]
    MissingLocation,
}

/// Raw, possibly incomplete answers as submitted by a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessContextForm {
    pub primary_goal: Option<String>,
    pub target_customer: Option<String>,
    pub price_position: Option<String>,
    pub geographic_focus: Option<String>,
    pub geographic_location: Option<String>,
    pub desired_action: Option<String>,
}

/// Validated answers describing what the site owner wants to achieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub primary_goal: String,
    pub target_customer: String,
    pub price_position: String,
    pub geographic_focus: String,
    pub geographic_location: Option<String>,
    pub desired_action: String,
}

impl BusinessContextForm {
    /// Check that all five required answers are present, and that a
    /// location accompanies a hyper-local or regional focus.
    pub fn validate(self) -> Result<BusinessContext, BusinessContextError> {
        let (
            Some(primary_goal),
            Some(target_customer),
            Some(price_position),
            Some(geographic_focus),
            Some(desired_action),
        ) = (
            answered(self.primary_goal),
            answered(self.target_customer),
            answered(self.price_position),
            answered(self.geographic_focus),
            answered(self.desired_action),
        )
        else {
            return Err(BusinessContextError::MissingAnswers);
        };

        let geographic_location = answered(self.geographic_location);
        if LOCATION_REQUIRED_FOCUS.contains(&geographic_focus.as_str())
            && geographic_location.is_none()
        {
            return Err(BusinessContextError::MissingLocation);
        }

        Ok(BusinessContext {
            primary_goal,
            target_customer,
            price_position,
            geographic_focus,
            geographic_location,
            desired_action,
        })
    }
}

fn answered(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
