use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::boundary::{EdgeCondition, End, InterfaceCoupling};
use crate::domain::Domain;
use crate::error::SolverError;

/// The explicit-scheme stability bound on the mesh Fourier number.
pub const STABILITY_LIMIT: f64 = 0.5;

/// Snapshot handed to the reporting callback.
///
/// Delivered after the step's boundary and interface conditions have been
/// applied and before the next step's interior update begins.
#[derive(Debug, Clone, Copy)]
pub struct StepReport<'a> {
    /// 1-based step index.
    pub step: usize,
    /// Simulated time in seconds (`step * dt`).
    pub time_s: f64,
    /// Temperature field of the first (or only) domain.
    pub first: &'a [f64],
    /// Temperature field of the second domain of a coupled pair.
    pub second: Option<&'a [f64]>,
}

/// Cooperative early-exit signal, checked between time steps.
///
/// Cloning shares the same flag, so one copy can be handed to another
/// thread (or a ctrl-c handler) while the solver holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the run stop before its next time step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of a completed (or cancelled) run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of time steps actually executed.
    pub steps_executed: usize,
    /// Wall-clock duration of the stepping loop.
    pub elapsed: Duration,
    /// Final temperature field of the first (or only) domain.
    pub first: Vec<f64>,
    /// Final temperature field of the second domain, if coupled.
    pub second: Option<Vec<f64>>,
    /// True when the run was stopped early via a [`CancelToken`].
    pub cancelled: bool,
}

/// The domains owned by a solver, with their boundary policies.
enum Layout {
    Single {
        domain: Domain,
        left: EdgeCondition,
        right: EdgeCondition,
    },
    Coupled {
        first: Domain,
        second: Domain,
        /// Low-x end of the first domain.
        outer_left: EdgeCondition,
        coupling: InterfaceCoupling,
        /// High-x end of the second domain.
        outer_right: EdgeCondition,
    },
}

/// Explicit time-marching conduction solver.
///
/// Owns one or two [`Domain`]s and advances them jointly. All configuration
/// errors — geometry, materials, the stability bound, interface contiguity —
/// are raised by the constructors; a constructed solver cannot fail to run.
///
/// [`run`] consumes the solver, so the ready → running → completed lifecycle
/// is enforced by ownership: a finished run leaves only its [`RunSummary`].
///
/// Per-step order (this ordering is load-bearing: the interface coupling
/// reads the just-updated interior neighbors of both domains):
/// 1. interior update of every domain, from the prior step's field only;
/// 2. the first domain's outer edge condition;
/// 3. the interface coupling (coupled runs only), which for the
///    pass-through variant first applies the first domain's far edge;
/// 4. the second domain's outer edge condition (coupled runs only).
///
/// [`run`]: Solver::run
pub struct Solver {
    layout: Layout,
    dt: f64,
    step_count: usize,
    cancel: CancelToken,
}

impl Solver {
    /// Configures a single-domain run.
    pub fn single(
        domain: Domain,
        left: EdgeCondition,
        right: EdgeCondition,
        dt: f64,
        step_count: usize,
    ) -> Result<Self, SolverError> {
        validate_clock(dt, step_count)?;
        check_stability(&domain, dt)?;
        Ok(Self {
            layout: Layout::Single {
                domain,
                left,
                right,
            },
            dt,
            step_count,
            cancel: CancelToken::new(),
        })
    }

    /// Configures a coupled two-domain run.
    ///
    /// `first` occupies the low-x side, `second` the high-x side; their
    /// touching ends are reconciled by `coupling` once per step. Both
    /// domains must use the same spatial step so the interface nodes
    /// coincide; otherwise the coupling formulas would silently compare
    /// values at different physical locations.
    pub fn coupled(
        first: Domain,
        second: Domain,
        outer_left: EdgeCondition,
        coupling: InterfaceCoupling,
        outer_right: EdgeCondition,
        dt: f64,
        step_count: usize,
    ) -> Result<Self, SolverError> {
        validate_clock(dt, step_count)?;
        if first.dx() != second.dx() {
            return Err(SolverError::ConfigurationMismatch(format!(
                "coupled domains must share the same spatial step for their \
                 interface nodes to coincide (got {} and {})",
                first.dx(),
                second.dx()
            )));
        }
        check_stability(&first, dt)?;
        check_stability(&second, dt)?;
        Ok(Self {
            layout: Layout::Coupled {
                first,
                second,
                outer_left,
                coupling,
                outer_right,
            },
            dt,
            step_count,
            cancel: CancelToken::new(),
        })
    }

    /// Installs a cancellation token checked between time steps.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Time step in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Configured number of time steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Runs the simulation to completion (or cancellation).
    ///
    /// `on_report` is invoked with a [`StepReport`] whenever
    /// `step % report_every == 0`, and always on the final step;
    /// `report_every = 0` reports the final step only. The callback is a
    /// black box to the solver — it may be arbitrarily slow — and it always
    /// observes a field with that step's boundary conditions applied.
    pub fn run(mut self, report_every: usize, mut on_report: impl FnMut(StepReport<'_>)) -> RunSummary {
        let started = Instant::now();
        let mut steps_executed = 0;
        let mut cancelled = false;

        for step in 1..=self.step_count {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            match &mut self.layout {
                Layout::Single {
                    domain,
                    left,
                    right,
                } => {
                    domain.interior_update(self.dt);
                    left.apply(domain, End::Low);
                    right.apply(domain, End::High);
                }
                Layout::Coupled {
                    first,
                    second,
                    outer_left,
                    coupling,
                    outer_right,
                } => {
                    // Both interior updates read their own prior-step
                    // snapshots before any endpoint is touched.
                    first.interior_update(self.dt);
                    second.interior_update(self.dt);
                    outer_left.apply(first, End::Low);
                    coupling.apply(first, second);
                    outer_right.apply(second, End::High);
                }
            }
            steps_executed = step;

            let due = (report_every != 0 && step % report_every == 0)
                || step == self.step_count;
            if due {
                let (first, second) = self.fields();
                on_report(StepReport {
                    step,
                    time_s: step as f64 * self.dt,
                    first,
                    second,
                });
            }
        }

        let (first, second) = self.fields();
        RunSummary {
            steps_executed,
            elapsed: started.elapsed(),
            first: first.to_vec(),
            second: second.map(<[f64]>::to_vec),
            cancelled,
        }
    }

    fn fields(&self) -> (&[f64], Option<&[f64]>) {
        match &self.layout {
            Layout::Single { domain, .. } => (domain.temperatures(), None),
            Layout::Coupled { first, second, .. } => {
                (first.temperatures(), Some(second.temperatures()))
            }
        }
    }
}

fn validate_clock(dt: f64, step_count: usize) -> Result<(), SolverError> {
    if !(dt > 0.0) {
        return Err(SolverError::ConfigurationMismatch(format!(
            "time step must be positive, got {dt}"
        )));
    }
    if step_count == 0 {
        return Err(SolverError::ConfigurationMismatch(
            "step count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_stability(domain: &Domain, dt: f64) -> Result<(), SolverError> {
    let fourier = domain.fourier_number(dt);
    if fourier > STABILITY_LIMIT {
        return Err(SolverError::StabilityViolation {
            fourier,
            dt,
            dx: domain.dx(),
        });
    }
    Ok(())
}
