use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// Which end of a domain a condition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// The low-x end (`T[0]`).
    Low,
    /// The high-x end (`T[last]`).
    High,
}

/// Condition applied at an outer (non-interface) end of a domain.
///
/// Applied once per step, after the interior update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCondition {
    /// Dirichlet: the endpoint is set to this value every step, in kelvin.
    FixedTemperature(f64),
    /// Adiabatic: the endpoint copies its interior neighbor,
    /// `T[end] = T[neighbor]`, approximating a perfectly insulated end.
    ZeroGradient,
}

impl EdgeCondition {
    pub(crate) fn apply(&self, domain: &mut Domain, end: End) {
        let value = match (self, end) {
            (Self::FixedTemperature(t), _) => *t,
            (Self::ZeroGradient, End::Low) => domain.first_neighbor(),
            (Self::ZeroGradient, End::High) => domain.last_neighbor(),
        };
        match end {
            End::Low => domain.set_first(value),
            End::High => domain.set_last(value),
        }
    }
}

/// Reconciliation policy for the shared interface of a coupled pair.
///
/// The high-x end of the first domain and the low-x end of the second sit
/// at the same physical location; once per step, after both interior
/// updates, one of these policies brings them into agreement. The two
/// variants model different physics and are never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceCoupling {
    /// One-directional continuity: the first domain's edge value is imposed
    /// on the second domain, `second[0] = first[last]`.
    ///
    /// The copied value is produced by `first_far`, the first domain's own
    /// far-edge condition, applied immediately before the copy. Suited to
    /// configurations where the second domain's far end carries its own
    /// independent fixed condition.
    PassThrough { first_far: EdgeCondition },
    /// Perfect thermal contact: a single interface temperature, weighted by
    /// each domain's conductivity and length, is imposed on both edges:
    ///
    /// `T_i = (k_A*L_A*A[last-1] + k_B*L_B*B[1]) / (k_B*L_A + k_A*L_B)`
    ///
    /// This represents continuity of temperature and heat flux across
    /// dissimilar materials. For equal conductivity and length it reduces
    /// to the arithmetic mean of the two adjacent interior values.
    FluxBalance,
}

impl InterfaceCoupling {
    pub(crate) fn apply(&self, first: &mut Domain, second: &mut Domain) {
        match self {
            Self::PassThrough { first_far } => {
                first_far.apply(first, End::High);
                second.set_first(first.last());
            }
            Self::FluxBalance => {
                let (k_a, l_a) = (first.material().conductivity, first.length());
                let (k_b, l_b) = (second.material().conductivity, second.length());
                let t_interface = (k_a * l_a * first.last_neighbor()
                    + k_b * l_b * second.first_neighbor())
                    / (k_b * l_a + k_a * l_b);
                first.set_last(t_interface);
                second.set_first(t_interface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialProperties;
    use approx::assert_relative_eq;

    fn domain(k: f64, length: f64, uniform_t: f64) -> Domain {
        let m = MaterialProperties::new(1000.0, 1000.0, k).unwrap();
        Domain::new(length, 0.05, m, uniform_t).unwrap()
    }

    #[test]
    fn test_fixed_temperature_overwrites_endpoint() {
        let mut d = domain(1.0, 0.2, 300.0);
        EdgeCondition::FixedTemperature(280.0).apply(&mut d, End::Low);
        assert_relative_eq!(d.first(), 280.0);
        assert_relative_eq!(d.last(), 300.0);
    }

    #[test]
    fn test_zero_gradient_copies_neighbor() {
        let mut d = domain(1.0, 0.2, 0.0);
        d.set_field(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        EdgeCondition::ZeroGradient.apply(&mut d, End::High);
        assert_relative_eq!(d.last(), 4.0);
        EdgeCondition::ZeroGradient.apply(&mut d, End::Low);
        assert_relative_eq!(d.first(), 2.0);
    }

    #[test]
    fn test_pass_through_imposes_first_edge_on_second() {
        let mut a = domain(1.0, 0.2, 0.0);
        let mut b = domain(1.0, 0.2, 100.0);
        a.set_field(&[10.0, 20.0, 30.0, 40.0, 50.0]);

        let coupling = InterfaceCoupling::PassThrough {
            first_far: EdgeCondition::ZeroGradient,
        };
        coupling.apply(&mut a, &mut b);

        // Zero gradient first: a.last = 40, then copied into b[0].
        assert_relative_eq!(a.last(), 40.0);
        assert_relative_eq!(b.first(), 40.0);
        // b's interior is untouched
        assert_relative_eq!(b.first_neighbor(), 100.0);
    }

    #[test]
    fn test_flux_balance_symmetric_is_arithmetic_mean() {
        // Equal conductivity and length: T_i = (A[last-1] + B[1]) / 2
        let mut a = domain(1.0, 0.2, 300.0);
        let mut b = domain(1.0, 0.2, 400.0);

        InterfaceCoupling::FluxBalance.apply(&mut a, &mut b);
        assert_relative_eq!(a.last(), 350.0);
        assert_relative_eq!(b.first(), 350.0);
    }

    #[test]
    fn test_flux_balance_weighted_by_conductivity() {
        // k_A = 1, k_B = 3, equal length L:
        // T_i = (1*L*300 + 3*L*400) / (3*L + 1*L) = 1500/4 = 375
        let mut a = domain(1.0, 0.2, 300.0);
        let mut b = domain(3.0, 0.2, 400.0);

        InterfaceCoupling::FluxBalance.apply(&mut a, &mut b);
        assert_relative_eq!(a.last(), 375.0);
        assert_relative_eq!(b.first(), 375.0);
    }
}
