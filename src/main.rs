use anyhow::Result;
use clap::Parser;

use changelog_watch::changelog::UpdateOutcome;
use changelog_watch::config;
use changelog_watch::detector::{ChangeEvent, TriggerDetector};
use changelog_watch::document::{BufferDocument, Document};
use changelog_watch::domain::TriggerOccurrence;
use changelog_watch::{resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "changelog-watch",
    about = "Watch a document for changelog trigger tokens and append versioned entries"
)]
struct Args {
    #[arg(help = "Document to scan for trigger tokens")]
    file: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("changelog-watch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let path = match args.file {
        Some(path) => path,
        None => {
            ui::display_error("No document given. Usage: changelog-watch <FILE>");
            std::process::exit(1);
        }
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Load the document into an in-memory buffer
    let mut doc = match BufferDocument::from_file(&path) {
        Ok(doc) => doc,
        Err(e) => {
            ui::display_error(&format!("Cannot read '{}': {}", path, e));
            std::process::exit(1);
        }
    };

    if args.dry_run {
        return preview_triggers(&doc, &path);
    }

    let detector = TriggerDetector::from_config(&config);
    let mut updates = 0;

    // Each update consumes its trigger line, so rescan from the top until
    // the document has no triggers left.
    loop {
        let occurrence = match find_first_trigger(&doc)? {
            Some(occurrence) => occurrence,
            None => break,
        };

        ui::display_trigger(&occurrence);

        let event = ChangeEvent::on_line(occurrence.line, doc.line_text(occurrence.line)?);
        match detector.handle_change(&mut doc, &event)? {
            Some(outcome) => {
                ui::display_outcome(&occurrence, &outcome);
                match outcome {
                    UpdateOutcome::Completed => updates += 1,
                    UpdateOutcome::DeleteFailed(_) => {
                        // Entry appended, trigger line still present; stop
                        // rather than reprocess it forever
                        updates += 1;
                        break;
                    }
                    UpdateOutcome::InsertRejected(_) => break,
                }
            }
            None => break,
        }
    }

    if updates == 0 {
        ui::display_no_triggers(&path);
        return Ok(());
    }

    doc.save(&path)?;
    ui::display_success(&format!(
        "Wrote {} update{} to {}",
        updates,
        if updates == 1 { "" } else { "s" },
        path
    ));

    Ok(())
}

/// Scan the buffer top-down for the first trigger line
fn find_first_trigger(doc: &BufferDocument) -> Result<Option<TriggerOccurrence>> {
    for line in 0..doc.line_count()? {
        if let Some(occurrence) = TriggerOccurrence::from_line(line, &doc.line_text(line)?) {
            return Ok(Some(occurrence));
        }
    }
    Ok(None)
}

/// List every trigger in the document with the version it would produce
fn preview_triggers(doc: &BufferDocument, path: &str) -> Result<()> {
    let text = doc.full_text()?;
    let mut found = 0;

    for line in 0..doc.line_count()? {
        if let Some(occurrence) = TriggerOccurrence::from_line(line, &doc.line_text(line)?) {
            ui::display_trigger(&occurrence);
            ui::display_status(&format!(
                "Would append entry for version {}",
                resolver::resolve_next_version(&text, occurrence.bump)
            ));
            found += 1;
        }
    }

    if found == 0 {
        ui::display_no_triggers(path);
    }

    Ok(())
}
