use core::fmt;

/// Rejected configuration values, reported by [`crate::Geometry::validate`] and
/// [`crate::ListOptions::validate`].
///
/// The engine itself never returns this: geometry is a caller contract, and validation is
/// offered for hosts that want to check their inputs up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `item_height` must be finite and greater than zero.
    ItemHeight(f64),
    /// `container_height` must be finite and not negative.
    ContainerHeight(f64),
    /// `end_reached_threshold` must lie in `0.0..=1.0`.
    EndReachedThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemHeight(v) => write!(f, "item height must be a positive number, got {v}"),
            Self::ContainerHeight(v) => {
                write!(f, "container height must be a non-negative number, got {v}")
            }
            Self::EndReachedThreshold(v) => {
                write!(f, "end-reached threshold must be within 0.0..=1.0, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
