//! Default formats used when a coordinate has no format override.
//!
//! A [`FormatterRegistry`] is a plain value that can be passed explicitly to
//! [`Coordinate::to_display_string_with`](crate::Coordinate::to_display_string_with).
//! A process-wide instance also exists for callers that rely on shared
//! defaults. It sits behind a `parking_lot::RwLock`, so concurrent readers
//! never observe a half-applied update.
//!
//! ```
//! use skyframe_core::format::{FormatterRegistry, HmsFormat, Separator};
//!
//! let mut registry = FormatterRegistry::default();
//! registry.hms = HmsFormat::new(Separator::Letters, 1);
//! assert_eq!(registry.hms.precision, 1);
//! ```

use super::{DmsFormat, HmsFormat};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static GLOBAL: Lazy<RwLock<FormatterRegistry>> =
    Lazy::new(|| RwLock::new(FormatterRegistry::default()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatterRegistry {
    /// Right ascension.
    pub hms: HmsFormat,
    /// Declination and latitude.
    pub dms: DmsFormat,
    /// Longitude in the Galactic and Az/Alt frames.
    pub dms_long: DmsFormat,
}

impl FormatterRegistry {
    /// A snapshot of the process-wide registry.
    pub fn global() -> FormatterRegistry {
        *GLOBAL.read()
    }

    /// Applies `f` to the process-wide registry under the write lock.
    pub fn update<F>(f: F)
    where
        F: FnOnce(&mut FormatterRegistry),
    {
        let mut guard = GLOBAL.write();
        f(&mut guard);
        tracing::debug!(registry = ?*guard, "global formatter registry updated");
    }

    pub fn replace_global(registry: FormatterRegistry) {
        Self::update(|r| *r = registry);
    }

    pub fn reset_global() {
        Self::replace_global(FormatterRegistry::default());
    }
}
