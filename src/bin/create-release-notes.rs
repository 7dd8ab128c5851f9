use anyhow::Result;
use clap::{CommandFactory, Parser};

use redot_release::cli::orchestration::run_notes_workflow;
use redot_release::cli::NotesArgs;
use redot_release::config::load_config;
use redot_release::{ui, ReleaseError};

#[derive(clap::Parser)]
#[command(
    name = "create-release-notes",
    about = "Create the release notes text for a Redot release"
)]
struct Args {
    #[command(flatten)]
    notes: NotesArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let release = &args.notes.release;

    let identity = match release.identity() {
        Ok(identity) => identity,
        Err(e) => exit_with_usage(&e),
    };

    let config = match load_config(args.notes.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => exit_with_usage(&e),
    };

    let result = match run_notes_workflow(&identity, &config, release.dry_run) {
        Ok(result) => result,
        Err(e) if e.is_user_input() => exit_with_usage(&e),
        Err(e) => return Err(e.into()),
    };

    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    if result.written {
        ui::display_success(&format!(
            "Written release notes to '{}'.",
            result.output_path.display()
        ));
    } else {
        ui::display_document(&result.output_path.display().to_string(), &result.document);
    }

    Ok(())
}

fn exit_with_usage(error: &ReleaseError) -> ! {
    ui::display_error(&format!("Failed to create release notes: {}", error));
    println!();
    let _ = Args::command().print_help();
    std::process::exit(1);
}
