use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_STAR_COUNT;
use crate::starfield::{StarMotion, StarfieldOptions};

pub const DEFAULT_BRAND: &str = "kitchen";

const BRANDS: &[(&str, &str)] = &[
    ("kitchen", include_str!("../config/kitchen.json")),
    ("synergy", include_str!("../config/synergy.json")),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown brand '{0}'")]
    UnknownBrand(String),
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub splash: SplashConfig,
    pub hero: HeroConfig,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub about: AboutConfig,
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    pub contact: ContactConfig,
    pub form: FormConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SplashConfig {
    pub title: String,
    pub subtitle: String,
    pub button: String,
    #[serde(default)]
    pub cta_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub banner: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutConfig {
    pub vision: String,
    pub paragraphs: Vec<String>,
    pub offer_intro: String,
    pub offers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Done,
    InProgress,
    Planned,
}

impl PhaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseStatus::Done => "Complete",
            PhaseStatus::InProgress => "In progress",
            PhaseStatus::Planned => "Planned",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PhaseStatus::Done => "phase-done",
            PhaseStatus::InProgress => "phase-active",
            PhaseStatus::Planned => "phase-planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoadmapPhase {
    pub title: String,
    pub status: PhaseStatus,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactConfig {
    pub heading: String,
    pub body: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormConfig {
    pub title: String,
    pub endpoint: String,
    pub submit_label: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub full_width: bool,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub star_count: usize,
    pub motion: StarMotion,
    pub planets: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig {
            star_count: DEFAULT_STAR_COUNT,
            motion: StarMotion::Twinkle,
            planets: false,
        }
    }
}

impl BackgroundConfig {
    pub fn options(&self) -> StarfieldOptions {
        StarfieldOptions {
            star_count: self.star_count,
            motion: self.motion,
            planets: self.planets,
        }
    }
}

impl SiteConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn for_brand(brand: &str) -> Result<Self, ConfigError> {
        let (_, json) = BRANDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(brand.trim()))
            .ok_or_else(|| ConfigError::UnknownBrand(brand.to_string()))?;
        Self::parse(json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.form.endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "form endpoint must be https, got '{}'",
                self.form.endpoint
            )));
        }
        let mut seen = HashSet::new();
        for field in &self.form.fields {
            if field.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("field '{}' has no name", field.label)));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate field '{}'", field.name)));
            }
        }
        Ok(())
    }
}

fn brand_from_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get("brand")
}

/// Pick the brand from `?brand=`, falling back to the default one.
pub fn load() -> Result<SiteConfig, ConfigError> {
    if let Some(brand) = brand_from_query() {
        match SiteConfig::for_brand(&brand) {
            Ok(config) => return Ok(config),
            Err(e) => web_sys::console::warn_1(&format!("{}, using default", e).into()),
        }
    }
    SiteConfig::for_brand(DEFAULT_BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_brands_parse() {
        for (name, _) in BRANDS {
            let config = SiteConfig::for_brand(name).unwrap();
            assert!(!config.form.fields.is_empty(), "{name}");
            assert!(!config.brand.is_empty());
        }
    }

    #[test]
    fn kitchen_matches_landing_copy() {
        let config = SiteConfig::for_brand("kitchen").unwrap();
        assert_eq!(config.brand, "The Kitchen");
        let names: Vec<&str> = config.form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names[..5],
            ["twitter", "discord", "tradingExperience", "specialization", "communities"]
        );
        assert_eq!(config.background.star_count, DEFAULT_STAR_COUNT);
    }

    #[test]
    fn synergy_has_orbiting_planets() {
        let config = SiteConfig::for_brand("Synergy").unwrap();
        assert!(config.background.planets);
        assert_eq!(config.background.motion, StarMotion::Drift);
        assert!(!config.roadmap.is_empty());
    }

    #[test]
    fn unknown_brand() {
        assert!(matches!(
            SiteConfig::for_brand("bakery"),
            Err(ConfigError::UnknownBrand(b)) if b == "bakery"
        ));
    }

    fn minimal(endpoint: &str, fields: &str) -> String {
        format!(
            r#"{{
                "brand": "Test", "tagline": "t", "copyright": "c",
                "splash": {{"title": "a", "subtitle": "b", "button": "go"}},
                "hero": {{"title": "a", "subtitle": "b", "banner": "x"}},
                "about": {{"vision": "v", "paragraphs": [], "offer_intro": "o", "offers": []}},
                "contact": {{"heading": "h", "body": "b", "handle": "@t", "url": "https://x.com/t"}},
                "form": {{"title": "f", "endpoint": "{endpoint}", "submit_label": "Send", "fields": {fields}}}
            }}"#
        )
    }

    #[test]
    fn defaults_fill_in() {
        let json = minimal(
            "https://relay.example/f/abc",
            r#"[{"name": "x", "label": "X", "kind": "text"}]"#,
        );
        let config = SiteConfig::parse(&json).unwrap();
        assert_eq!(config.background, BackgroundConfig::default());
        assert_eq!(config.splash.cta_delay_ms, 0);
        assert!(config.features.is_empty());
        assert!(config.form.fields[0].required);
        assert!(!config.form.fields[0].full_width);
    }

    #[test]
    fn rejects_duplicate_fields() {
        let json = minimal(
            "https://relay.example/f/abc",
            r#"[{"name": "x", "label": "X", "kind": "text"}, {"name": "x", "label": "Y", "kind": "checkbox"}]"#,
        );
        assert!(matches!(SiteConfig::parse(&json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_plain_http_endpoint() {
        let json = minimal("http://relay.example/f/abc", "[]");
        assert!(matches!(SiteConfig::parse(&json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(SiteConfig::parse("{"), Err(ConfigError::Parse(_))));
    }
}
