//! Tour step listing

use crate::tour::GuideStep;

/// Format the tour steps as a numbered list (1-indexed, as shown in the step dialog)
pub fn format_steps(steps: &[GuideStep]) -> String {
    if steps.is_empty() {
        return "No tutorial steps defined.".to_string();
    }

    let mut output = String::new();
    for (i, step) in steps.iter().enumerate() {
        let highlight = if step.action { "" } else { " (no highlight)" };
        output.push_str(&format!(
            "{:>2}. {} [{} -> {}]{}\n",
            i + 1,
            step.title,
            step.target,
            step.position,
            highlight
        ));
        output.push_str(&format!("    {}\n", step.description));
    }
    output
}
