use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{
    AboutConfig, ContactConfig, FooterConfig, HeroConfig, NavbarConfig, ReviewsConfig,
    ServicesConfig, Testimonial, TestimonialsConfig,
};
use crate::{Result, SiteError};

/// Top-level configuration structure for the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page_title: String,
    pub navbar: NavbarConfig,
    pub hero: HeroConfig,
    pub services: ServicesConfig,
    pub reviews: ReviewsConfig,
    pub testimonials: TestimonialsConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "I DO Consulting | Strategic Consulting in Vancouver".to_string(),
            navbar: NavbarConfig::default(),
            hero: HeroConfig::default(),
            services: ServicesConfig::default(),
            reviews: ReviewsConfig::default(),
            testimonials: TestimonialsConfig::default(),
            about: AboutConfig::default(),
            contact: ContactConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

/// Serialization formats understood by [`SiteConfig::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(SiteError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl SiteConfig {
    /// Reads and validates a configuration file. Fields missing from the file
    /// keep their stock values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(?path, ?format, "loading site configuration");

        let config = Self::parse(&content, format)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Loads `path` when given, the stock configuration otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks the invariants the renderer relies on.
    pub fn validate(&self) -> Result<()> {
        validate_items("reviews.reviews", &self.reviews.reviews)?;

        if self.testimonials.enabled {
            validate_items("testimonials.testimonials", &self.testimonials.testimonials)?;
            if self.testimonials.visible == 0 {
                return Err(SiteError::InvalidConfig(
                    "`testimonials.visible` must be at least 1".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => self.to_json(),
            ConfigFormat::Toml => self.to_toml(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn validate_items(field: &str, items: &[Testimonial]) -> Result<()> {
    if items.is_empty() {
        return Err(SiteError::InvalidConfig(format!(
            "`{field}` must contain at least one entry"
        )));
    }

    for (index, item) in items.iter().enumerate() {
        if item.quote.trim().is_empty() {
            return Err(SiteError::InvalidConfig(format!(
                "`{field}[{index}]` has an empty quote"
            )));
        }
        if item.author.trim().is_empty() {
            return Err(SiteError::InvalidConfig(format!(
                "`{field}[{index}]` has an empty author"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_configuration_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::parse(
            r#"
[hero]
title = "Custom headline"

[[reviews.reviews]]
quote = "Great work."
author = "Ana"
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.hero.title, "Custom headline");
        assert_eq!(config.hero.cta_text, "Learn More");
        assert_eq!(config.reviews.reviews.len(), 1);
        assert_eq!(config.reviews.reviews[0].position, "");
        assert_eq!(config.reviews.title, "Client Success Stories");
        config.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::parse(r#"{ "footer": { "year": 2024 } }"#, ConfigFormat::Json).unwrap();
        assert_eq!(config.footer.year, Some(2024));
        assert_eq!(config.footer.company_name, "I DO Consulting");
    }

    #[test]
    fn rejects_empty_reviews() {
        let mut config = SiteConfig::default();
        config.reviews.reviews.clear();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("reviews.reviews"));
    }

    #[test]
    fn disabled_testimonials_are_not_checked() {
        let mut config = SiteConfig::default();
        config.testimonials.testimonials.clear();
        config.validate().unwrap();

        config.testimonials.enabled = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_width_window() {
        let mut config = SiteConfig::default();
        config.testimonials.enabled = true;
        config.testimonials.visible = 0;
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_blank_author() {
        let mut config = SiteConfig::default();
        config.reviews.reviews[1].author = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("reviews.reviews[1]"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("site.JSON")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("site.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("site.yaml")),
            Err(SiteError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let config = SiteConfig::default();
        let toml = config.to_toml().unwrap();
        let parsed = SiteConfig::parse(&toml, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed.reviews.reviews, config.reviews.reviews);
    }
}
