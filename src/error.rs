use thiserror::Error;

/// Setup-time failures of a conduction run.
///
/// Every variant is detected while the simulation is being configured,
/// before any time stepping occurs. A run that has started cannot fail:
/// numerical trouble (e.g. NaN from a marginal configuration) propagates
/// through the temperature field and shows up in the reported snapshots
/// instead of being masked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Non-positive length or spatial step, or a step larger than the domain.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Non-positive density, specific heat, or conductivity.
    #[error("invalid material: {0}")]
    InvalidMaterial(String),

    /// The explicit scheme requires alpha*dt/dx^2 <= 0.5 for every domain.
    #[error(
        "stability violation: alpha*dt/dx^2 = {fourier} exceeds 0.5 \
         (dt = {dt} s, dx = {dx} m); reduce dt or coarsen dx"
    )]
    StabilityViolation { fourier: f64, dt: f64, dx: f64 },

    /// The requested combination of domains, couplings, and clock settings
    /// does not describe a well-formed simulation.
    #[error("configuration mismatch: {0}")]
    ConfigurationMismatch(String),
}
