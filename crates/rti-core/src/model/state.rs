use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RtiError, RtiResult};

/// Landing-page banner copy for a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta: String,
}

/// A question/answer pair shown on the state page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFaq {
    pub q: String,
    pub a: String,
}

/// One step of the filing walkthrough. `step` is 1-based and defines display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProcess {
    pub steps: Vec<ProcessStep>,
}

/// Rendering variant selected by a state page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignTheme {
    Telangana,
    #[default]
    Default,
}

impl DesignTheme {
    /// Parse a theme tag (e.g. "telangana").
    pub fn parse(s: &str) -> RtiResult<Self> {
        match s {
            "telangana" => Ok(Self::Telangana),
            "default" => Ok(Self::Default),
            _ => Err(RtiError::invalid_argument(format!(
                "unsupported design theme: {s}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telangana => "telangana",
            Self::Default => "default",
        }
    }
}

impl FromStr for DesignTheme {
    type Err = RtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DesignTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete content record for one state page.
///
/// `slug` is the lowercase catalog key the record is stored under. The
/// `departments` list is the flat per-state listing; the sectioned view used
/// by the department directory lives in [`super::DepartmentSection`] and is
/// not derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    pub name: String,
    pub slug: String,
    pub languages: Vec<String>,
    pub hero: StateHero,
    pub departments: Vec<String>,
    pub highlights: Vec<String>,
    pub faqs: Vec<StateFaq>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rti_portal_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<StateProcess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<String>,
    /// Display-only amount, e.g. "₹10".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_theme: Option<DesignTheme>,
}

impl StateData {
    /// The record's theme, or `default` when the record leaves it unset.
    pub fn effective_theme(&self, default: DesignTheme) -> DesignTheme {
        self.design_theme.unwrap_or(default)
    }

    /// Process steps, empty when the record has no walkthrough.
    pub fn steps(&self) -> &[ProcessStep] {
        self.process.as_ref().map(|p| p.steps.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StateData {
        StateData {
            name: "Goa".to_string(),
            slug: "goa".to_string(),
            languages: vec!["English".to_string()],
            hero: StateHero {
                title: "t".to_string(),
                subtitle: "s".to_string(),
                image: "/i.jpg".to_string(),
                cta: "c".to_string(),
            },
            departments: vec!["Goa Revenue Department".to_string()],
            highlights: vec![],
            faqs: vec![StateFaq {
                q: "q".to_string(),
                a: "a".to_string(),
            }],
            description: None,
            rti_portal_url: None,
            process: None,
            commission: None,
            fee: None,
            design_theme: None,
        }
    }

    #[test]
    fn theme_falls_back_to_default() {
        let mut s = sample();
        assert_eq!(s.effective_theme(DesignTheme::Default), DesignTheme::Default);
        s.design_theme = Some(DesignTheme::Telangana);
        assert_eq!(s.effective_theme(DesignTheme::Default), DesignTheme::Telangana);
    }

    #[test]
    fn parse_theme_unknown() {
        let e = DesignTheme::parse("dark").unwrap_err();
        assert!(e.to_string().contains("unsupported design theme"));
        assert_eq!("telangana".parse::<DesignTheme>().unwrap(), DesignTheme::Telangana);
    }

    #[test]
    fn steps_empty_without_process() {
        assert!(sample().steps().is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let mut s = sample();
        s.rti_portal_url = Some("https://rti.example".to_string());
        s.design_theme = Some(DesignTheme::Default);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["rtiPortalUrl"], "https://rti.example");
        assert_eq!(v["designTheme"], "default");
        assert!(v.get("commission").is_none());
    }

    #[test]
    fn missing_optionals_decode_as_none() {
        let raw = r#"{
            "name": "Goa", "slug": "goa", "languages": ["English"],
            "hero": {"title": "t", "subtitle": "s", "image": "/i.jpg", "cta": "c"},
            "departments": ["Goa Revenue Department"], "highlights": [],
            "faqs": [{"q": "q", "a": "a"}]
        }"#;
        let s: StateData = serde_json::from_str(raw).unwrap();
        assert_eq!(s, sample());
    }
}
