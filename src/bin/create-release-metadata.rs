use anyhow::Result;
use clap::{CommandFactory, Parser};

use redot_release::cli::orchestration::{current_timestamp, run_metadata_workflow};
use redot_release::cli::ReleaseArgs;
use redot_release::config::ManifestEnv;
use redot_release::{ui, ReleaseError};

#[derive(clap::Parser)]
#[command(
    name = "create-release-metadata",
    about = "Create the JSON metadata file listing a release's files and checksums"
)]
struct Args {
    #[command(flatten)]
    release: ReleaseArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env = match ManifestEnv::from_env() {
        Ok(env) => env,
        Err(e) => exit_with_usage(&e),
    };

    let identity = match args.release.identity() {
        Ok(identity) => identity,
        Err(e) => exit_with_usage(&e),
    };

    ui::display_status(&format!("Collecting checksums for {}", identity.tag()));
    let result = match run_metadata_workflow(
        &identity,
        &env,
        current_timestamp(),
        args.release.dry_run,
    ) {
        Ok(result) => result,
        Err(e) if e.is_user_input() => exit_with_usage(&e),
        Err(e) => return Err(e.into()),
    };

    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    if result.written {
        ui::display_success(&format!(
            "Written release metadata to '{}'.",
            result.output_path.display()
        ));
    } else {
        ui::display_document(&result.output_path.display().to_string(), &result.document);
    }

    Ok(())
}

fn exit_with_usage(error: &ReleaseError) -> ! {
    ui::display_error(&format!("Failed to create release metadata: {}", error));
    println!();
    let _ = Args::command().print_help();
    std::process::exit(1);
}
