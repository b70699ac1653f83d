use console::style;

use crate::changelog::UpdateOutcome;
use crate::domain::TriggerOccurrence;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_trigger(occurrence: &TriggerOccurrence) {
    display_status(&format!(
        "Trigger on line {}: {} bump, {} entry",
        occurrence.line + 1,
        occurrence.bump.name(),
        occurrence.category.name()
    ));
}

pub fn display_outcome(occurrence: &TriggerOccurrence, outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::Completed => {
            display_success(&format!(
                "Appended {} entry, removed trigger line {}",
                occurrence.category.name(),
                occurrence.line + 1
            ));
        }
        UpdateOutcome::InsertRejected(err) => {
            display_error(&format!("Entry insertion rejected: {}", err));
        }
        UpdateOutcome::DeleteFailed(err) => {
            display_error(&format!(
                "Entry appended but trigger line {} was not removed: {}",
                occurrence.line + 1,
                err
            ));
        }
    }
}

pub fn display_no_triggers(path: &str) {
    println!(
        "{}",
        style(format!("No trigger tokens found in {}", path)).dim()
    );
}
