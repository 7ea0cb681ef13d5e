//! Explicit finite-difference transient heat conduction in one dimension.
//!
//! Models a bar of one or two adjoining materials with distinct thermal
//! properties, coupled at a shared interface, and marches it through time
//! with an explicit central-difference scheme.
//!
//! # Architecture
//!
//! ```text
//! SimulationConfig ──► build() ──► Solver ──► run(report_every, on_report)
//!                                    │                    │
//!                             Domain (x1 or x2)      StepReport ──► FieldRecorder
//! ```
//!
//! The solver owns its domains and exposes the temperature field only
//! through the reporting callback and the final [`RunSummary`]; rendering,
//! plotting, and progress printing are left to the caller.

pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod material;
pub mod recorder;
pub mod solver;

// Prelude
pub use boundary::{EdgeCondition, InterfaceCoupling};
pub use config::{SegmentConfig, SimulationConfig, TimeSpan};
pub use domain::Domain;
pub use error::SolverError;
pub use material::MaterialProperties;
pub use recorder::{FieldRecorder, RecorderSummary};
pub use solver::{CancelToken, RunSummary, STABILITY_LIMIT, Solver, StepReport};
