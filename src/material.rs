use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Thermal material properties in SI units.
///
/// All three properties must be strictly positive; [`diffusivity`] is then
/// guaranteed positive as well.
///
/// [`diffusivity`]: MaterialProperties::diffusivity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Density in kg/m^3.
    pub density: f64,
    /// Specific heat capacity in J/(kg*K).
    pub specific_heat: f64,
    /// Thermal conductivity in W/(m*K).
    pub conductivity: f64,
}

impl MaterialProperties {
    /// Creates a validated set of material properties.
    pub fn new(
        density: f64,
        specific_heat: f64,
        conductivity: f64,
    ) -> Result<Self, SolverError> {
        let props = Self {
            density,
            specific_heat,
            conductivity,
        };
        props.validate()?;
        Ok(props)
    }

    /// Checks that all properties are strictly positive (NaN fails too).
    pub fn validate(&self) -> Result<(), SolverError> {
        for (name, value) in [
            ("density", self.density),
            ("specific heat", self.specific_heat),
            ("conductivity", self.conductivity),
        ] {
            if !(value > 0.0) {
                return Err(SolverError::InvalidMaterial(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Thermal diffusivity alpha = k / (rho * c_p) in m^2/s.
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// Stainless steel (rho = 8050, c_p = 500, k = 14.4).
    pub fn steel() -> Self {
        Self {
            density: 8050.0,
            specific_heat: 500.0,
            conductivity: 14.4,
        }
    }

    /// Copper (rho = 8940, c_p = 385, k = 385).
    pub fn copper() -> Self {
        Self {
            density: 8940.0,
            specific_heat: 385.0,
            conductivity: 385.0,
        }
    }
}
