//! Sample job form shown by the guided tutorial

use serde::{Deserialize, Serialize};

/// The pre-filled job the tutorial walks through. Read-only in the tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleJobForm {
    pub customer: String,
    pub site: String,
    pub job_type: String,
    pub description: String,
}

impl SampleJobForm {
    pub fn sample() -> Self {
        Self {
            customer: "Harbourview Property Management".to_string(),
            site: "12 Wharf Street, Unit 4".to_string(),
            job_type: "Plumbing - Repair".to_string(),
            description: "Kitchen sink is draining slowly and the mixer tap drips. \
                          Clear the waste line, replace the tap cartridge and check \
                          under-bench fittings for leaks."
                .to_string(),
        }
    }
}

impl Default for SampleJobForm {
    fn default() -> Self {
        Self::sample()
    }
}
