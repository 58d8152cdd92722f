mod prisma;
mod shadcn;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{CommandFactory, Parser, Subcommand};
use log::debug;

use xe::error::XeError;
use xe::request::Verb;
use xe::runner::{DryRunRunner, Runner, SystemRunner};
use xe::settings::{Scope, Settings};
use xe::style;

#[derive(Parser, Debug)]
#[command(
    name = "xe",
    version,
    about = "Run install, dev, build, lint, prisma and shadcn through the project's package manager"
)]
struct Cli {
    /// Target the frontend (accepted, no effect yet)
    #[arg(short, long, conflicts_with = "backend")]
    frontend: bool,

    /// Target the backend (accepted, no effect yet)
    #[arg(short, long)]
    backend: bool,

    /// Answer yes to the install prompt (needed when there is no terminal)
    #[arg(short = 'y', long, global = true, env = "XE_YES", value_parser = BoolishValueParser::new())]
    yes: bool,

    /// Print the commands instead of running them
    #[arg(short = 'n', long, global = true)]
    dry_run: bool,

    /// Run in this directory instead of the current one
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install all dependencies, or add the given packages
    #[command(visible_alias = "i")]
    Install {
        /// Packages to add, passed through unchanged (including flags such as -D)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        packages: Vec<String>,
    },
    /// Start the dev server
    Dev {
        #[command(subcommand)]
        action: Option<DevAction>,
    },
    /// Run the build script
    Build,
    /// Run the lint script
    Lint,
    /// Generate, push and pull the prisma schema, or migrate / reset the database
    Prisma(prisma::PrismaArgs),
    /// Initialize shadcn or add a component
    Shadcn(shadcn::ShadcnArgs),
}

#[derive(Subcommand, Debug)]
enum DevAction {
    /// Install, set up the database if there is a prisma schema, then start the dev server
    Init,
}

impl Commands {
    fn into_verb(self) -> Result<Verb, XeError> {
        Ok(match self {
            Commands::Install { packages } => Verb::Install { packages },
            Commands::Dev { action: None } => Verb::Dev,
            Commands::Dev {
                action: Some(DevAction::Init),
            } => Verb::DevInit,
            Commands::Build => Verb::Build,
            Commands::Lint => Verb::Lint,
            Commands::Prisma(args) => args.into_verb()?,
            Commands::Shadcn(args) => args.into_verb()?,
        })
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    xe::logger::init(xe::logger::level_filter(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style::error_line(&e.to_string()));
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), XeError> {
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return Ok(());
    };
    let verb = command.into_verb()?;

    let cwd = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(XeError::CurrentDir)?,
    };
    let scope = if cli.frontend {
        Scope::Frontend
    } else if cli.backend {
        Scope::Backend
    } else {
        Scope::All
    };
    let settings = Settings {
        cwd,
        scope,
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
    };
    debug!("{settings:?}");

    let mut runner: Box<dyn Runner> = if settings.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner)
    };
    let mut prompt = xe::prompt::detect(settings.assume_yes);
    xe::run(&verb, &settings, runner.as_mut(), prompt.as_mut())
}
