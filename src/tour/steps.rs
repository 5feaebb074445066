//! The scripted tour
//!
//! Steps are plain data. Each names its target by a stable key that is looked
//! up on the page when the step is entered, never held as a live handle.

use std::fmt;

/// Where the callout sits relative to the highlighted target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of the guided tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Key resolved through [`TargetKey::from_key`]
    pub target: &'static str,
    pub position: Position,
    /// Whether the target is spotlighted while this step is shown
    pub action: bool,
}

/// The anchors a tour step can point at on the job form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKey {
    JobHeader,
    CustomerField,
    SiteField,
    JobTypeField,
    DescriptionField,
    SaveButton,
    CancelButton,
}

impl TargetKey {
    pub const ALL: [TargetKey; 7] = [
        Self::JobHeader,
        Self::CustomerField,
        Self::SiteField,
        Self::JobTypeField,
        Self::DescriptionField,
        Self::SaveButton,
        Self::CancelButton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobHeader => "job-header",
            Self::CustomerField => "customer-field",
            Self::SiteField => "site-field",
            Self::JobTypeField => "job-type-field",
            Self::DescriptionField => "description-field",
            Self::SaveButton => "save-button",
            Self::CancelButton => "cancel-button",
        }
    }

    /// Fixed key lookup. Unknown keys resolve to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

/// The create-a-job walkthrough
pub static TOUR_STEPS: [GuideStep; 6] = [
    GuideStep {
        id: "welcome",
        title: "Create your first job",
        description: "This screen records a job for a customer. We've filled in a \
                      sample so you can see how each part works.",
        target: "job-header",
        position: Position::Bottom,
        action: false,
    },
    GuideStep {
        id: "customer",
        title: "Choose the customer",
        description: "Every job belongs to a customer. Quotes and invoices for this \
                      job will be addressed to them.",
        target: "customer-field",
        position: Position::Bottom,
        action: true,
    },
    GuideStep {
        id: "site",
        title: "Pick the job site",
        description: "The site is where the work happens. A customer can have several \
                      sites, so pick the right one for the crew.",
        target: "site-field",
        position: Position::Bottom,
        action: true,
    },
    GuideStep {
        id: "job-type",
        title: "Set the job type",
        description: "Job types group similar work together and drive the reports on \
                      your dashboard.",
        target: "job-type-field",
        position: Position::Right,
        action: true,
    },
    GuideStep {
        id: "description",
        title: "Describe the work",
        description: "Write down what needs doing. Your team sees this on the job \
                      sheet and it carries through to the quote.",
        target: "description-field",
        position: Position::Top,
        action: true,
    },
    GuideStep {
        id: "save",
        title: "Save the job",
        description: "When everything looks right, save the job. It then shows up on \
                      your dashboard under Scheduled.",
        target: "save-button",
        position: Position::Top,
        action: true,
    },
];
