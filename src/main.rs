//! ngforge's main application entry point.
//! Parses the command line, wires the real collaborators and runs the
//! project-creation pipeline.

use ngforge::{
    cli::{get_args, Args, Command},
    config::Settings,
    constants::REQUIRED_TOOLS,
    create::create_project,
    error::{default_error_handler, Error, Result},
    loader::LocalLoader,
    project::validate_name,
    prompt::DialoguerPrompter,
    renderer::PlaceholderRenderer,
    runner::{check_tools, SystemRunner},
    steps::default_pipeline,
    template::Templates,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(args) {
        Ok(()) => {}
        // Already reported and rolled back.
        Err(Error::Aborted { .. }) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Create { project_name } => {
            validate_name(&project_name)?;
            check_tools(&REQUIRED_TOOLS)?;
            let settings = Settings::from_env();

            let templates = Templates::new(
                Box::new(LocalLoader::new(settings.template_root)),
                Box::new(PlaceholderRenderer::new(settings.substitution)),
            );
            let runner = SystemRunner::new();
            let prompt = DialoguerPrompter::new();
            let parent = std::env::current_dir()?;

            create_project(
                &project_name,
                parent,
                &default_pipeline(),
                &templates,
                &runner,
                &prompt,
            )?;
            Ok(())
        }
    }
}
