use crate::error::SolverError;
use crate::material::MaterialProperties;

/// One spatial segment of the simulated bar.
///
/// A domain is created before the simulation starts and never resized.
/// Its temperature field holds `floor(length/dx) + 1` points, indexed from
/// the low-x end to the high-x end. The solver mutates the field once per
/// time step; nothing else writes to it.
///
/// The interior update is double-buffered: every interior point is computed
/// from the previous step's field only, so an updated value can never leak
/// into a neighbor's computation within the same step.
#[derive(Debug, Clone)]
pub struct Domain {
    length: f64,
    dx: f64,
    material: MaterialProperties,
    temperature: Vec<f64>,
    /// Write buffer for the interior update, swapped with `temperature`
    /// after each step.
    scratch: Vec<f64>,
}

impl Domain {
    /// Creates a domain with a uniform initial temperature.
    ///
    /// `length` and `dx` are in meters; `dx` must not exceed `length`, which
    /// guarantees at least two grid points.
    pub fn new(
        length: f64,
        dx: f64,
        material: MaterialProperties,
        initial_temperature: f64,
    ) -> Result<Self, SolverError> {
        if !(length > 0.0) {
            return Err(SolverError::InvalidGeometry(format!(
                "length must be positive, got {length}"
            )));
        }
        if !(dx > 0.0) {
            return Err(SolverError::InvalidGeometry(format!(
                "spatial step must be positive, got {dx}"
            )));
        }
        if dx > length {
            return Err(SolverError::InvalidGeometry(format!(
                "spatial step {dx} exceeds domain length {length}"
            )));
        }
        material.validate()?;

        // n elements -> n + 1 points.
        let point_count = (length / dx).floor() as usize + 1;
        Ok(Self {
            length,
            dx,
            material,
            temperature: vec![initial_temperature; point_count],
            scratch: vec![initial_temperature; point_count],
        })
    }

    /// Domain length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Spatial step in meters.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Material properties of this segment.
    pub fn material(&self) -> &MaterialProperties {
        &self.material
    }

    /// Number of grid points (always >= 2).
    pub fn point_count(&self) -> usize {
        self.temperature.len()
    }

    /// Current temperature field, low-x end first.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperature
    }

    /// Mesh Fourier number alpha * dt / dx^2 for a given time step.
    ///
    /// The explicit scheme is stable for values up to 0.5.
    pub fn fourier_number(&self, dt: f64) -> f64 {
        self.material.diffusivity() * dt / (self.dx * self.dx)
    }

    /// Total thermal energy of the segment per unit cross-section, in J/m^2.
    ///
    /// Computed as rho * c_p * dx * sum(T), treating each point as the
    /// centroid of one dx-wide slab. Useful for conservation checks.
    pub fn thermal_energy_j_per_m2(&self) -> f64 {
        let sum: f64 = self.temperature.iter().sum();
        self.material.density * self.material.specific_heat * self.dx * sum
    }

    /// Advances every interior point by one explicit central-difference step:
    ///
    /// `T_new[i] = T[i] + (alpha*dt/dx^2) * (T[i+1] - 2*T[i] + T[i-1])`
    ///
    /// All reads come from the prior-step field; writes go to the scratch
    /// buffer, which is swapped in afterwards. The two endpoints are carried
    /// over unchanged; applying boundary conditions to them is the caller's
    /// responsibility.
    pub fn interior_update(&mut self, dt: f64) {
        let r = self.fourier_number(dt);
        let n = self.temperature.len();
        let prev = &self.temperature;

        self.scratch[0] = prev[0];
        self.scratch[n - 1] = prev[n - 1];
        for i in 1..n - 1 {
            self.scratch[i] = prev[i] + r * (prev[i + 1] - 2.0 * prev[i] + prev[i - 1]);
        }

        std::mem::swap(&mut self.temperature, &mut self.scratch);
    }

    /// Temperature at the low-x end.
    pub fn first(&self) -> f64 {
        self.temperature[0]
    }

    /// Temperature at the high-x end.
    pub fn last(&self) -> f64 {
        self.temperature[self.temperature.len() - 1]
    }

    /// Interior neighbor of the low-x end (`T[1]`).
    pub fn first_neighbor(&self) -> f64 {
        self.temperature[1]
    }

    /// Interior neighbor of the high-x end (`T[len-2]`).
    pub fn last_neighbor(&self) -> f64 {
        self.temperature[self.temperature.len() - 2]
    }

    pub(crate) fn set_first(&mut self, value: f64) {
        self.temperature[0] = value;
    }

    pub(crate) fn set_last(&mut self, value: f64) {
        let n = self.temperature.len();
        self.temperature[n - 1] = value;
    }

    #[cfg(test)]
    pub(crate) fn set_field(&mut self, values: &[f64]) {
        assert_eq!(values.len(), self.temperature.len());
        self.temperature.copy_from_slice(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_material() -> MaterialProperties {
        // alpha = 1 m^2/s, convenient for hand-computed checks.
        MaterialProperties::new(1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_point_count() {
        let d = Domain::new(1.0, 0.1, MaterialProperties::steel(), 300.0).unwrap();
        // 10 elements -> 11 points
        assert_eq!(d.point_count(), 11);

        let d = Domain::new(1.0, 0.01, MaterialProperties::steel(), 300.0).unwrap();
        assert_eq!(d.point_count(), 101);
    }

    #[test]
    fn test_invalid_geometry() {
        let m = MaterialProperties::steel();
        for (length, dx) in [(0.0, 0.1), (-1.0, 0.1), (1.0, 0.0), (1.0, -0.1), (0.05, 0.1)] {
            let result = Domain::new(length, dx, m, 300.0);
            assert!(
                matches!(result, Err(SolverError::InvalidGeometry(_))),
                "expected InvalidGeometry for length={length}, dx={dx}"
            );
        }
    }

    #[test]
    fn test_invalid_material_surfaces_through_domain() {
        let m = MaterialProperties {
            density: 8050.0,
            specific_heat: -500.0,
            conductivity: 14.4,
        };
        assert!(matches!(
            Domain::new(1.0, 0.1, m, 300.0),
            Err(SolverError::InvalidMaterial(_))
        ));
    }

    #[test]
    fn test_interior_update_uniform_field_is_unchanged() {
        let mut d = Domain::new(1.0, 0.1, unit_material(), 350.0).unwrap();
        d.interior_update(0.004);
        for &t in d.temperatures() {
            assert_relative_eq!(t, 350.0);
        }
    }

    #[test]
    fn test_interior_update_matches_hand_computation() {
        // 3 points, r = 1 * 0.002 / 0.01 = 0.2
        let mut d = Domain::new(0.2, 0.1, unit_material(), 0.0).unwrap();
        d.set_field(&[100.0, 0.0, 0.0]);
        d.interior_update(0.002);

        // T[1] = 0 + 0.2 * (0 - 0 + 100) = 20; endpoints untouched
        let t = d.temperatures();
        assert_relative_eq!(t[0], 100.0);
        assert_relative_eq!(t[1], 20.0);
        assert_relative_eq!(t[2], 0.0);
    }

    #[test]
    fn test_interior_update_reads_prior_step_only() {
        // With a left-to-right in-place sweep, the updated T[1] would leak
        // into T[2]'s stencil. Verify T[2] keeps using the old T[1].
        let mut d = Domain::new(0.4, 0.1, unit_material(), 0.0).unwrap();
        d.set_field(&[100.0, 0.0, 0.0, 0.0, 0.0]);
        d.interior_update(0.002); // r = 0.2

        let t = d.temperatures();
        assert_relative_eq!(t[1], 20.0);
        // old T[1] = 0, so T[2] must stay 0 (not 0.2 * 20 = 4)
        assert_relative_eq!(t[2], 0.0);
        assert_relative_eq!(t[3], 0.0);
    }

    #[test]
    fn test_fourier_number() {
        let d = Domain::new(1.0, 0.1, unit_material(), 0.0).unwrap();
        assert_relative_eq!(d.fourier_number(0.005), 0.5);
    }

    #[test]
    fn test_thermal_energy() {
        let d = Domain::new(0.2, 0.1, unit_material(), 10.0).unwrap();
        // rho*cp*dx * sum(T) = 1 * 1 * 0.1 * 30
        assert_relative_eq!(d.thermal_energy_j_per_m2(), 3.0);
    }
}
