use crate::solver::StepReport;

/// In-memory history of reported snapshots.
///
/// The intended workflow is:
/// 1) the caller creates a recorder,
/// 2) the reporting callback feeds it one [`StepReport`] per cadence hit,
/// 3) after the run, [`finalize`] turns the history into a
///    [`RecorderSummary`].
///
/// The solver itself never depends on this type; it is one possible
/// consumer of the callback.
///
/// [`finalize`]: FieldRecorder::finalize
#[derive(Debug, Clone, Default)]
pub struct FieldRecorder {
    steps: Vec<usize>,
    times_s: Vec<f64>,
    first: Vec<Vec<f64>>,
    /// Empty for single-domain runs.
    second: Vec<Vec<f64>>,
}

impl FieldRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one reported snapshot.
    pub fn record(&mut self, report: StepReport<'_>) {
        self.steps.push(report.step);
        self.times_s.push(report.time_s);
        self.first.push(report.first.to_vec());
        if let Some(second) = report.second {
            self.second.push(second.to_vec());
        }
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step indices of the recorded samples.
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }

    /// Simulated times of the recorded samples, in seconds.
    pub fn times_s(&self) -> &[f64] {
        &self.times_s
    }

    /// Recorded fields of the first (or only) domain, one per sample.
    pub fn first_fields(&self) -> &[Vec<f64>] {
        &self.first
    }

    /// Recorded fields of the second domain; empty for single-domain runs.
    pub fn second_fields(&self) -> &[Vec<f64>] {
        &self.second
    }

    /// Consumes the history and computes summary statistics.
    pub fn finalize(self) -> RecorderSummary {
        let mut min_temperature = f64::INFINITY;
        let mut max_temperature = f64::NEG_INFINITY;
        for field in self.first.iter().chain(self.second.iter()) {
            for &t in field {
                min_temperature = min_temperature.min(t);
                max_temperature = max_temperature.max(t);
            }
        }

        let final_second = self.second.last().cloned();
        // Interface temperature: the touching ends agree after coupling,
        // so either side of the seam can be read.
        let final_interface_temperature = final_second
            .as_ref()
            .and_then(|field| field.first().copied());

        RecorderSummary {
            samples: self.steps.len(),
            min_temperature,
            max_temperature,
            final_first: self.first.last().cloned().unwrap_or_default(),
            final_second,
            final_interface_temperature,
        }
    }
}

/// Aggregate view of a recorded run.
#[derive(Debug, Clone)]
pub struct RecorderSummary {
    /// Number of samples recorded.
    pub samples: usize,
    /// Minimum temperature seen across all samples and domains.
    pub min_temperature: f64,
    /// Maximum temperature seen across all samples and domains.
    pub max_temperature: f64,
    /// Last recorded field of the first (or only) domain.
    pub final_first: Vec<f64>,
    /// Last recorded field of the second domain, if coupled.
    pub final_second: Option<Vec<f64>>,
    /// Temperature at the shared interface in the last sample, if coupled.
    pub final_interface_temperature: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_and_finalize_single_domain() {
        let mut rec = FieldRecorder::new();
        rec.record(StepReport {
            step: 10,
            time_s: 1.0,
            first: &[300.0, 310.0, 320.0],
            second: None,
        });
        rec.record(StepReport {
            step: 20,
            time_s: 2.0,
            first: &[295.0, 305.0, 315.0],
            second: None,
        });

        assert_eq!(rec.len(), 2);
        assert_eq!(rec.steps(), &[10, 20]);
        assert!(rec.second_fields().is_empty());

        let summary = rec.finalize();
        assert_eq!(summary.samples, 2);
        assert_relative_eq!(summary.min_temperature, 295.0);
        assert_relative_eq!(summary.max_temperature, 320.0);
        assert_eq!(summary.final_first, vec![295.0, 305.0, 315.0]);
        assert!(summary.final_second.is_none());
        assert!(summary.final_interface_temperature.is_none());
    }

    #[test]
    fn test_finalize_reads_interface_from_second_domain() {
        let mut rec = FieldRecorder::new();
        rec.record(StepReport {
            step: 5,
            time_s: 0.5,
            first: &[290.0, 300.0, 310.0],
            second: Some(&[310.0, 330.0, 350.0]),
        });

        let summary = rec.finalize();
        assert_relative_eq!(summary.final_interface_temperature.unwrap(), 310.0);
        assert_relative_eq!(summary.max_temperature, 350.0);
    }
}
