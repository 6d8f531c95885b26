//! Stock carousel configurations.
//!
//! Two carousels ship with the default page: a testimonial slider with
//! manual controls and an autoplaying image gallery.

use std::time::Duration;

use crate::config::CarouselConfig;

/// Testimonial slider: one quote on mobile, two from 992px, three from 1400px.
pub fn testimonials() -> CarouselConfig {
    CarouselConfig::new(
        ".testimonials-carousel",
        ".testimonials-container",
        ".testimonial-slide",
    )
    .with_buttons("#testimonialPrev", "#testimonialNext")
    .with_dots(".testimonial-controls", "testimonial-dot")
    .with_slides_per_view(1)
    .with_breakpoint(992, 2)
    .with_breakpoint(1400, 3)
}

/// Gallery slider: autoplays every five seconds, two images from 768px,
/// three from 1024px.
pub fn gallery() -> CarouselConfig {
    CarouselConfig::new(".gallery-carousel", ".gallery-track", ".gallery-slide")
        .with_buttons("#galleryPrev", "#galleryNext")
        .with_dots("#galleryControls", "gallery-dot")
        .with_slides_per_view(1)
        .with_breakpoint(768, 2)
        .with_breakpoint(1024, 3)
        .with_auto_play(Duration::from_secs(5))
}

/// Get a preset by name.
pub fn get_preset(name: &str) -> Option<CarouselConfig> {
    match name {
        "testimonials" => Some(testimonials()),
        "gallery" => Some(gallery()),
        _ => None,
    }
}

/// Names of all presets.
pub fn preset_names() -> &'static [&'static str] {
    &["testimonials", "gallery"]
}
