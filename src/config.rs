use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::boundary::{EdgeCondition, InterfaceCoupling};
use crate::domain::Domain;
use crate::error::SolverError;
use crate::material::MaterialProperties;
use crate::solver::Solver;

/// One spatial segment of the simulated bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Segment length in meters.
    pub length: f64,
    pub material: MaterialProperties,
}

/// How long to run, either as simulated seconds or as an explicit step count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSpan {
    /// Total simulated seconds; the step count is `floor(seconds / dt)`.
    Seconds(f64),
    /// Exact number of time steps.
    Steps(usize),
}

/// Full description of a conduction run.
///
/// Everything the solver needs, gathered in one serializable structure and
/// validated before the run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// The first (or only) segment, occupying the low-x side.
    pub first: SegmentConfig,
    /// Optional second segment, joined end-to-end on the high-x side.
    #[serde(default)]
    pub second: Option<SegmentConfig>,
    /// Spatial step in meters, shared by both segments.
    pub dx: f64,
    /// Time step in seconds.
    pub dt: f64,
    pub duration: TimeSpan,
    /// Uniform initial temperature in kelvin, applied to every segment.
    pub initial_temperature: f64,
    /// Condition at the bar's low-x end.
    pub left: EdgeCondition,
    /// Condition at the bar's high-x end.
    pub right: EdgeCondition,
    /// Interface policy; required iff `second` is present.
    #[serde(default)]
    pub coupling: Option<InterfaceCoupling>,
}

impl SimulationConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Number of time steps implied by `duration` and `dt`.
    pub fn step_count(&self) -> usize {
        match self.duration {
            TimeSpan::Seconds(t_sim) => {
                if self.dt > 0.0 && t_sim > 0.0 {
                    (t_sim / self.dt).floor() as usize
                } else {
                    0
                }
            }
            TimeSpan::Steps(n) => n,
        }
    }

    /// Validates the configuration and builds a ready-to-run [`Solver`].
    ///
    /// Fail-fast: any invalid geometry, material, stability, or coupling
    /// setting is reported here and nothing is ever partially run.
    pub fn build(&self) -> Result<Solver, SolverError> {
        let first = Domain::new(
            self.first.length,
            self.dx,
            self.first.material,
            self.initial_temperature,
        )?;

        match (&self.second, self.coupling) {
            (None, None) => Solver::single(
                first,
                self.left,
                self.right,
                self.dt,
                self.step_count(),
            ),
            (Some(segment), Some(coupling)) => {
                let second = Domain::new(
                    segment.length,
                    self.dx,
                    segment.material,
                    self.initial_temperature,
                )?;
                Solver::coupled(
                    first,
                    second,
                    self.left,
                    coupling,
                    self.right,
                    self.dt,
                    self.step_count(),
                )
            }
            (Some(_), None) => Err(SolverError::ConfigurationMismatch(
                "a second segment requires an interface coupling".to_string(),
            )),
            (None, Some(_)) => Err(SolverError::ConfigurationMismatch(
                "an interface coupling requires a second segment".to_string(),
            )),
        }
    }
}
