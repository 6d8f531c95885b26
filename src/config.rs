//! # Carousel Configuration
//!
//! Per-instance options and the page-level list of carousels. Both load
//! from TOML:
//!
//! ```toml
//! [[carousel]]
//! root = ".gallery-carousel"
//! container = ".gallery-track"
//! slides = ".gallery-slide"
//! generate_dots = true
//! dots_container = "#galleryControls"
//! dot_class = "gallery-dot"
//! auto_play = 5000
//!
//! [carousel.responsive]
//! 768 = { slides_per_view = 2 }
//! 1024 = { slides_per_view = 3 }
//! ```
//!
//! The camelCase names (`dotsContainer`, `slidesPerView`, ...) are accepted
//! as aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CarouselError, Result};
use crate::presets;

/// Visible-slide override that applies from a minimum viewport width up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breakpoint {
    #[serde(alias = "slidesPerView")]
    pub slides_per_view: usize,
}

/// Options for one carousel instance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarouselConfig {
    /// Carousel root element.
    pub root: String,
    /// Track element within the root.
    pub container: String,
    /// Real slide elements within the root.
    pub slides: String,
    #[serde(default, alias = "dotsContainer", skip_serializing_if = "Option::is_none")]
    pub dots_container: Option<String>,
    #[serde(default, alias = "prevBtn", skip_serializing_if = "Option::is_none")]
    pub prev_btn: Option<String>,
    #[serde(default, alias = "nextBtn", skip_serializing_if = "Option::is_none")]
    pub next_btn: Option<String>,
    #[serde(default, alias = "generateDots")]
    pub generate_dots: bool,
    #[serde(default, alias = "dotClass", skip_serializing_if = "Option::is_none")]
    pub dot_class: Option<String>,
    #[serde(default = "default_slides_per_view", alias = "slidesPerView")]
    pub slides_per_view: usize,
    /// Autoplay interval in milliseconds.
    #[serde(default, alias = "autoPlay", skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<u64>,
    /// Breakpoint overrides keyed by minimum viewport width. Serialized
    /// last so it can be written as a TOML table.
    #[serde(
        default,
        deserialize_with = "deserialize_breakpoints",
        serialize_with = "serialize_breakpoints"
    )]
    pub responsive: BTreeMap<u32, Breakpoint>,
}

fn default_slides_per_view() -> usize {
    1
}

/// TOML table keys are strings; thresholds are parsed into widths here.
fn deserialize_breakpoints<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<u32, Breakpoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Breakpoint>::deserialize(deserializer)?;
    let mut parsed = BTreeMap::new();
    for (key, breakpoint) in raw {
        let width = parse_breakpoint_key(&key).map_err(serde::de::Error::custom)?;
        parsed.insert(width, breakpoint);
    }
    Ok(parsed)
}

fn serialize_breakpoints<S>(
    map: &BTreeMap<u32, Breakpoint>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let keyed: BTreeMap<String, &Breakpoint> =
        map.iter().map(|(width, bp)| (width.to_string(), bp)).collect();
    keyed.serialize(serializer)
}

/// Parse a breakpoint threshold such as `"768"`.
pub fn parse_breakpoint_key(key: &str) -> Result<u32> {
    key.trim()
        .parse::<u32>()
        .map_err(|_| CarouselError::InvalidBreakpoint { key: key.to_string() })
}

impl CarouselConfig {
    /// Minimal configuration: root, track and slide selectors.
    pub fn new(
        root: impl Into<String>,
        container: impl Into<String>,
        slides: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            container: container.into(),
            slides: slides.into(),
            dots_container: None,
            prev_btn: None,
            next_btn: None,
            generate_dots: false,
            dot_class: None,
            slides_per_view: default_slides_per_view(),
            responsive: BTreeMap::new(),
            auto_play: None,
        }
    }

    /// Generate one dot per slide inside `container`.
    pub fn with_dots(mut self, container: impl Into<String>, dot_class: impl Into<String>) -> Self {
        self.dots_container = Some(container.into());
        self.dot_class = Some(dot_class.into());
        self.generate_dots = true;
        self
    }

    pub fn with_buttons(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_btn = Some(prev.into());
        self.next_btn = Some(next.into());
        self
    }

    pub fn with_slides_per_view(mut self, count: usize) -> Self {
        self.slides_per_view = count;
        self
    }

    pub fn with_breakpoint(mut self, min_width: u32, slides_per_view: usize) -> Self {
        self.responsive.insert(min_width, Breakpoint { slides_per_view });
        self
    }

    pub fn with_auto_play(mut self, interval: Duration) -> Self {
        self.auto_play = Some(interval.as_millis() as u64);
        self
    }

    /// Autoplay interval, `None` when disabled or zero.
    pub fn auto_play_interval(&self) -> Option<Duration> {
        self.auto_play
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

/// Every carousel on a page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default)]
    pub carousel: Vec<CarouselConfig>,
}

impl PageConfig {
    /// Parse a page configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a page configuration from a TOML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            carousels = config.carousel.len(),
            "loaded page config"
        );
        Ok(config)
    }

    /// Load from `path`, falling back to the stock testimonial and gallery
    /// carousels if the file is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "using default carousel config"
                );
                Self::presets()
            }
        }
    }

    /// The stock page: testimonials and gallery.
    pub fn presets() -> Self {
        Self {
            carousel: vec![presets::testimonials(), presets::gallery()],
        }
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
