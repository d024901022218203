use std::sync::Arc;

use nlu_pipeline_support::CreateError;
use once_cell::sync::Lazy;

/// The package the default [`Engine`] comes from.
pub const DEFAULT_ENGINE_PACKAGE: &str = "unicode-segmentation";

/// Something which can split UTF-8 encoded text into tokens.
///
/// Engines work purely in terms of bytes. Each token is returned as its
/// bytes alongside the byte offset it starts at, in order of increasing
/// offset. Whitespace-only input may produce no tokens at all.
pub trait Engine: Send + Sync {
    /// The name of the package providing this engine.
    fn name(&self) -> &str;

    /// Can this engine be used?
    ///
    /// Engines backed by something that may be missing at runtime (a shared
    /// library, a model file, ...) should override this so the problem is
    /// reported when a component is created instead of halfway through
    /// training.
    fn is_available(&self) -> bool { true }

    fn tokenize_with_offsets(&self, text: &[u8]) -> Vec<(Vec<u8>, usize)>;
}

static DEFAULT_ENGINE: Lazy<Option<Arc<dyn Engine>>> = Lazy::new(|| {
    #[cfg(feature = "segmentation")]
    {
        Some(Arc::new(crate::SegmentationEngine) as Arc<dyn Engine>)
    }
    #[cfg(not(feature = "segmentation"))]
    {
        None
    }
});

/// Get the engine used when none is provided explicitly.
///
/// This fails with [`CreateError::MissingDependency`] when the crate was
/// compiled without the `segmentation` feature.
pub fn default_engine() -> Result<Arc<dyn Engine>, CreateError> {
    match DEFAULT_ENGINE.as_ref() {
        Some(engine) if engine.is_available() => Ok(Arc::clone(engine)),
        _ => Err(CreateError::missing_dependency(DEFAULT_ENGINE_PACKAGE)),
    }
}

/// The packages [`default_engine()`] relies on.
pub fn required_packages() -> &'static [&'static str] {
    &[DEFAULT_ENGINE_PACKAGE]
}
