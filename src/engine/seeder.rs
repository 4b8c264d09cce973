use rand::Rng;
use tracing::{error, info};

use crate::client::{SubmitError, SubmitOutcome, Submitter, Transport};
use crate::config::{SeederConfig, TransportFailurePolicy};
use crate::engine::SeederError;
use crate::generator::RecordGenerator;
use crate::types::SequenceNumber;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FailureReason {
    /// The server answered with something other than 200.
    Status {
        status: u16,
        body: String
    },
    /// No response was received and the run was configured to keep going.
    Transport(String)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FailedSubmission {
    pub sequence: SequenceNumber,
    pub reason: FailureReason
}

/// Tally of a finished run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RunReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<FailedSubmission>
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Generates records and submits them one at a time, in sequence order.
pub struct Seeder<T: Transport> {
    generator: RecordGenerator,
    submitter: Submitter<T>,
    count: usize,
    transport_failure_policy: TransportFailurePolicy
}

impl<T: Transport> Seeder<T> {
    pub fn new(config: SeederConfig, transport: T) -> Self {
        Self {
            generator: RecordGenerator::new(config.generator),
            submitter: Submitter::new(transport, config.endpoint, config.bearer_token),
            count: config.count,
            transport_failure_policy: config.transport_failure_policy
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Runs the generate-and-submit loop for the configured count.
    ///
    /// Each submission is awaited before the next record is generated. Non-200 responses
    /// are logged and recorded in the report without stopping the run.
    ///
    /// # Errors
    /// Returns `SeederError::Aborted` if a record cannot be serialized, or if a request gets no
    /// response while the policy is `TransportFailurePolicy::Abort`.
    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunReport, SeederError> {
        let mut report = RunReport::default();

        for sequence in 1..=self.count {
            let record = self.generator.generate(rng);

            info!("Creating transaction {sequence}... {}", record.value_date);
            report.attempted += 1;

            match self.submitter.submit(&record).await {
                Ok(SubmitOutcome::Accepted) => {
                    info!("Transaction {sequence} created");
                    report.succeeded += 1;
                }
                Ok(SubmitOutcome::Rejected { status, body }) => {
                    error!("Failed at {sequence}: {status} - {body}");
                    report.failures.push(FailedSubmission {
                        sequence,
                        reason: FailureReason::Status { status, body }
                    });
                }
                Err(SubmitError::Transport(transport_error)) if self.transport_failure_policy == TransportFailurePolicy::Continue => {
                    error!("Failed at {sequence}: {transport_error}");
                    report.failures.push(FailedSubmission {
                        sequence,
                        reason: FailureReason::Transport(transport_error.to_string())
                    });
                }
                Err(source) => {
                    error!("Failed at {sequence}: {source}");
                    return Err(SeederError::Aborted { sequence, source })
                }
            }
        }

        Ok(report)
    }
}
