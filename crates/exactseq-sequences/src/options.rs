//! Per-call configuration.

use exactseq_integers::Width;

/// Options accepted by every sequence operation.
///
/// There is no global default toggle: each call receives its options
/// explicitly. `Options::default()` notifies on promotion and uses a 64-bit
/// narrow width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Report a promotion event when a call widens its representation.
    pub notify: bool,
    /// Bounds of the narrow representation.
    pub width: Width,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            notify: true,
            width: Width::Bits64,
        }
    }
}

impl Options {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that never report promotion.
    #[must_use]
    pub fn quiet() -> Self {
        Self::default().with_notify(false)
    }

    /// Sets whether promotion is reported.
    #[must_use]
    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Sets the narrow width.
    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }
}
