use clap::Parser;
use toolbelt::application::{init::init, ConfigService};
use toolbelt::cli::handlers::{self, emit};
use toolbelt::cli::{interactive, output, Cli, Commands};
use toolbelt::error::ToolbeltError;
use toolbelt::infrastructure::config::SETTABLE_KEYS;
use toolbelt::infrastructure::logging::{effective_level, init_logging};
use toolbelt::infrastructure::{Config, Workspace};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ToolbeltError> {
    // Init targets an explicit path and must not depend on an existing home
    if let Some(Commands::Init { path }) = &cli.command {
        init_logging(effective_level(&Config::default().log_level, cli.verbose));
        let config = init(path)?;
        println!("Initialized toolbelt home at {}", path.display());
        if let Some(created) = config.created {
            println!("Created: {}", created.to_rfc3339());
        }
        return Ok(());
    }

    let workspace = Workspace::discover()?;
    // A broken config must not block the command that repairs it
    let config = match (&cli.command, workspace.load_config()) {
        (Some(Commands::Config { .. }), Err(ToolbeltError::Config(_))) => workspace.read_config()?,
        (_, loaded) => loaded?,
    };
    init_logging(effective_level(&config.log_level, cli.verbose));

    let Some(command) = cli.command else {
        println!("toolbelt - A grab-bag of everyday command-line tools");
        println!("Use --help for usage information, or 'toolbelt menu' to browse interactively");
        return Ok(());
    };

    let text = match command {
        Commands::Init { .. } => return Ok(()),
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                let mut text = String::new();
                for key in SETTABLE_KEYS.iter().chain(["created"].iter()) {
                    text.push_str(&format!("{} = {}\n", key, config.get(key)?));
                }
                text
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    format!("Set {} = {}", k, v)
                } else {
                    service.get(&k)?
                }
            } else {
                format!(
                    "Usage: toolbelt config [--list | <key> [<value>]]\nValid keys: {}, created",
                    SETTABLE_KEYS.join(", ")
                )
            }
        }
        Commands::Sort {
            algorithm,
            size,
            values,
        } => {
            let data = handlers::dataset(size, values.as_deref(), false)?;
            handlers::sort(&algorithm, &data, &config)?
        }
        Commands::Search {
            algorithm,
            target,
            size,
            values,
        } => {
            let data = handlers::dataset(size, values.as_deref(), true)?;
            handlers::search(&algorithm, &data, target, &config)?
        }
        Commands::Algorithms => output::format_algorithm_list(),
        Commands::Calc { operation, a, b } => handlers::calc(&operation, a, b)?,
        Commands::Notes { action } => handlers::notes(&workspace, action)?,
        Commands::Calendar { action } => handlers::calendar(&workspace, action)?,
        Commands::Cheats { action } => handlers::cheats(&workspace, action)?,
        Commands::Finance { action } => handlers::finance(&workspace, &config, action)?,
        Commands::Password { action } => handlers::password(&config, action)?,
        Commands::Organize { dir, by, dry_run } => handlers::organize(&dir, &by, dry_run)?,
        Commands::Size { dir, depth } => handlers::size(&dir, depth)?,
        Commands::Diff { old, new, mode } => handlers::diff(&old, &new, &mode)?,
        Commands::Git { action } => handlers::git(&std::env::current_dir()?, action)?,
        Commands::Menu => {
            interactive::main_menu(&workspace, &config)
                .map_err(|e| ToolbeltError::Prompt(e.to_string()))?;
            return Ok(());
        }
    };

    emit(&text);
    Ok(())
}
