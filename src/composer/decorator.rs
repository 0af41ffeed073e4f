//! Pluggable page backgrounds.
//!
//! Decorators are looked up by name. A missing name or a failing decorator
//! falls back to a plain fill so the page still renders.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::surface::{Color, DrawContext, DrawingSurface, Paint, ResourceProvider};
use std::collections::HashMap;

/// Draws a page background before any page content.
pub trait BackgroundDecorator {
    /// Name the decorator is registered under.
    fn name(&self) -> &str;

    /// Draw the background over `page` (the full page, bleed included).
    fn decorate(
        &self,
        page: Rect,
        surface: &mut dyn DrawingSurface,
        resources: &mut dyn ResourceProvider,
        ctx: &DrawContext,
    ) -> Result<()>;
}

/// Fills the page with one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBackground {
    color: Color,
}

impl SolidBackground {
    /// Create a solid background.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for SolidBackground {
    fn default() -> Self {
        Self::new(Color::white())
    }
}

impl BackgroundDecorator for SolidBackground {
    fn name(&self) -> &str {
        "solid"
    }

    fn decorate(
        &self,
        page: Rect,
        surface: &mut dyn DrawingSurface,
        _resources: &mut dyn ResourceProvider,
        ctx: &DrawContext,
    ) -> Result<()> {
        surface.rect(page, Paint::Fill, &ctx.with_fill(self.color));
        Ok(())
    }
}

/// Stretches an image from the resource provider over the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBackground {
    name: String,
    key: String,
}

impl ImageBackground {
    /// Register image `key` under `name`.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

impl BackgroundDecorator for ImageBackground {
    fn name(&self) -> &str {
        &self.name
    }

    fn decorate(
        &self,
        page: Rect,
        surface: &mut dyn DrawingSurface,
        resources: &mut dyn ResourceProvider,
        _ctx: &DrawContext,
    ) -> Result<()> {
        let image = resources.load_image(&self.key)?;
        surface.image(&image, page);
        Ok(())
    }
}

/// Named decorators plus the fallback used when one is missing or fails.
pub struct DecoratorRegistry {
    decorators: HashMap<String, Box<dyn BackgroundDecorator>>,
    fallback: SolidBackground,
}

impl DecoratorRegistry {
    /// Create an empty registry with a white fallback.
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
            fallback: SolidBackground::default(),
        }
    }

    /// Set the fallback fill.
    pub fn with_fallback(mut self, fallback: SolidBackground) -> Self {
        self.fallback = fallback;
        self
    }

    /// Register a decorator under its own name, replacing any previous one.
    pub fn register(&mut self, decorator: Box<dyn BackgroundDecorator>) {
        self.decorators.insert(decorator.name().to_string(), decorator);
    }

    /// Check if a decorator is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.decorators.contains_key(name)
    }

    /// Draw the named background, degrading to the fallback on any failure.
    pub fn decorate(
        &self,
        name: &str,
        page: Rect,
        surface: &mut dyn DrawingSurface,
        resources: &mut dyn ResourceProvider,
        ctx: &DrawContext,
    ) {
        let result = match self.decorators.get(name) {
            Some(decorator) => decorator.decorate(page, surface, resources, ctx),
            None => Err(Error::Resource(format!("unknown background decorator '{}'", name))),
        };
        if let Err(e) = result {
            log::warn!("Background '{}' failed, using solid fill: {}", name, e);
            if let Err(e) = self.fallback.decorate(page, surface, resources, ctx) {
                log::warn!("Fallback background failed: {}", e);
            }
        }
    }
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SolidBackground::default()));
        registry
    }
}

impl std::fmt::Debug for DecoratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.decorators.keys().collect();
        names.sort();
        f.debug_struct("DecoratorRegistry")
            .field("decorators", &names)
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BuiltinResources, DrawOp, ImageHandle, RecordingSurface};

    struct OneImage;

    impl ResourceProvider for OneImage {
        fn load_font(&mut self, _name: &str) -> Result<()> {
            Ok(())
        }

        fn load_image(&mut self, key: &str) -> Result<ImageHandle> {
            Ok(ImageHandle {
                key: key.to_string(),
                width: 10,
                height: 10,
            })
        }
    }

    fn page() -> Rect {
        Rect::new(0.0, 0.0, 612.0, 792.0)
    }

    fn surface() -> RecordingSurface {
        let mut s = RecordingSurface::new();
        s.begin_page(612.0, 792.0);
        s
    }

    #[test]
    fn test_unknown_name_uses_fallback() {
        let registry = DecoratorRegistry::new().with_fallback(SolidBackground::new(Color::gray(0.9)));
        let mut s = surface();
        registry.decorate("confetti", page(), &mut s, &mut BuiltinResources, &DrawContext::new("Helvetica"));
        match &s.pages()[0].ops[..] {
            [DrawOp::Rect { fill, rect, .. }] => {
                assert_eq!(*fill, Color::gray(0.9));
                assert_eq!(*rect, page());
            },
            other => panic!("unexpected ops {:?}", other),
        }
    }

    #[test]
    fn test_failed_image_uses_fallback() {
        let mut registry = DecoratorRegistry::new();
        registry.register(Box::new(ImageBackground::new("paper", "paper.png")));
        let mut s = surface();
        registry.decorate("paper", page(), &mut s, &mut BuiltinResources, &DrawContext::new("Helvetica"));
        assert!(matches!(&s.pages()[0].ops[..], [DrawOp::Rect { .. }]));
    }

    #[test]
    fn test_image_background() {
        let mut registry = DecoratorRegistry::new();
        registry.register(Box::new(ImageBackground::new("paper", "paper.png")));
        assert!(registry.contains("paper"));
        let mut s = surface();
        registry.decorate("paper", page(), &mut s, &mut OneImage, &DrawContext::new("Helvetica"));
        assert!(matches!(&s.pages()[0].ops[..], [DrawOp::Image { key, .. }] if key == "paper.png"));
    }

    #[test]
    fn test_default_registry_has_solid() {
        assert!(DecoratorRegistry::default().contains("solid"));
    }
}
