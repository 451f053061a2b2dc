//! Marker pin content
//!
//! The convenient shorthand forms for a marker's visual content, expressed
//! as a tagged union resolved by pattern matching rather than by probing
//! runtime types. `Deferred` lets a caller postpone the choice until render
//! time; resolution follows it to a bounded depth.

use crate::core::constants::MAX_PIN_RESOLVE_DEPTH;
use crate::{GeoError, Result};

/// Opaque handle to a host-UI element supplying custom pin content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle(pub String);

/// Styled pin shorthand: colors plus a scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct PinStyle {
    pub background: String,
    pub glyph_color: String,
    pub border_color: String,
    pub scale: f64,
}

impl Default for PinStyle {
    fn default() -> Self {
        Self {
            background: "#EA4335".to_string(),
            glyph_color: "#FFFFFF".to_string(),
            border_color: "#C5221F".to_string(),
            scale: 1.0,
        }
    }
}

/// The accepted shorthand forms for pin content
pub enum PinContent {
    /// Plain glyph text
    Text(String),
    /// A styled default pin
    Styled(PinStyle),
    /// A host-UI element
    Element(ElementHandle),
    /// Decided at resolution time; may itself return `Deferred`
    Deferred(Box<dyn Fn() -> PinContent>),
}

impl std::fmt::Debug for PinContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Styled(style) => f.debug_tuple("Styled").field(style).finish(),
            Self::Element(handle) => f.debug_tuple("Element").field(handle).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Pin content with all deferral resolved away
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPin {
    Text(String),
    Styled(PinStyle),
    Element(ElementHandle),
}

/// Resolve pin content to a concrete form.
///
/// `Deferred` levels are followed up to a fixed depth; beyond that the
/// content is considered non-terminating and resolution fails with
/// [`GeoError::InvalidArgument`].
pub fn resolve_pin(content: PinContent) -> Result<ResolvedPin> {
    let mut current = content;
    for _ in 0..=MAX_PIN_RESOLVE_DEPTH {
        current = match current {
            PinContent::Text(text) => return Ok(ResolvedPin::Text(text)),
            PinContent::Styled(style) => return Ok(ResolvedPin::Styled(style)),
            PinContent::Element(handle) => return Ok(ResolvedPin::Element(handle)),
            PinContent::Deferred(supplier) => supplier(),
        };
    }
    Err(GeoError::InvalidArgument(format!(
        "pin content did not resolve within {MAX_PIN_RESOLVE_DEPTH} deferred levels"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_concrete_forms() {
        assert_eq!(
            resolve_pin(PinContent::Text("A".into())).unwrap(),
            ResolvedPin::Text("A".into())
        );
        assert_eq!(
            resolve_pin(PinContent::Styled(PinStyle::default())).unwrap(),
            ResolvedPin::Styled(PinStyle::default())
        );
        assert_eq!(
            resolve_pin(PinContent::Element(ElementHandle("pin-3".into()))).unwrap(),
            ResolvedPin::Element(ElementHandle("pin-3".into()))
        );
    }

    #[test]
    fn test_resolves_deferred_content() {
        let content = PinContent::Deferred(Box::new(|| {
            PinContent::Deferred(Box::new(|| PinContent::Text("late".into())))
        }));
        assert_eq!(resolve_pin(content).unwrap(), ResolvedPin::Text("late".into()));
    }

    #[test]
    fn test_endless_deferral_is_rejected() {
        fn endless() -> PinContent {
            PinContent::Deferred(Box::new(endless))
        }
        let err = resolve_pin(endless()).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument(_)));
    }
}
