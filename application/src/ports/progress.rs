//! Download progress port
//!
//! Capabilities backed by on-device models may need to download the model
//! when an instance is first created. Providers report progress through this
//! observer; whether one is attached never changes the outcome of a call.

use risklens_domain::CapabilityKind;

/// Callback for model download progress during `create`
///
/// Implementations live in the presentation layer.
pub trait DownloadProgressObserver: Send + Sync {
    /// `loaded` is the downloaded fraction in `0.0..=1.0`
    fn on_download_progress(&self, kind: CapabilityKind, loaded: f64);

    /// Called once the model is ready to use
    fn on_download_complete(&self, _kind: CapabilityKind) {}
}
