//! Optional geometry validation
//!
//! Collision queries accept any geometry and never fail. These checks exist so
//! callers (and the collision system in debug builds) can flag volumes that
//! will produce degenerate results.

/// Reasons a bounding volume is geometrically degenerate
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Position has a NaN or infinite component
    #[error("non-finite position")]
    NonFinitePosition,

    /// Sphere radius is NaN or infinite
    #[error("non-finite radius: {0}")]
    NonFiniteRadius(f32),

    /// Sphere radius is below zero; distance tests will never report a hit
    #[error("negative radius: {0}")]
    NegativeRadius(f32),

    /// Box corner offset has a NaN or infinite component
    #[error("non-finite box corner")]
    NonFiniteCorner,

    /// Box has zero size along an axis
    #[error("degenerate box: zero extent on axis {axis}")]
    DegenerateBox {
        /// Axis name (`'x'`, `'y'` or `'z'`)
        axis: char,
    },
}
