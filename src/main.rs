use clap::Parser;
use promptags::application::{
    emphasize, export_prompt, import_tags, init::init, reset_emphasis, switch_dialect,
    ArrangeService, ConfigService, SuggestService, TagListService,
};
use promptags::cli::{
    format_category_list, format_review, format_suggestions, format_tag_list, Cli, Commands,
};
use promptags::domain::Dialect;
use promptags::error::PromptagsError;
use promptags::infrastructure::{FileSystemRepository, TagRepository};
use std::str::FromStr;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_dialect(name: &str) -> Result<Dialect, PromptagsError> {
    Dialect::from_str(name).map_err(PromptagsError::Config)
}

fn run(cli: Cli) -> Result<(), PromptagsError> {
    let Some(command) = cli.command else {
        println!("promptags - Prompt tag manager");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, dialect } => {
            init(&path, parse_dialect(&dialect)?)?;
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("dialect = {}", config.dialect);
                println!(
                    "taxonomy = {}",
                    config
                        .taxonomy
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "(builtin)".to_string())
                );
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: promptags config [--list | <key> [<value>]]");
                println!("Valid keys: dialect, taxonomy, created");
            }
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let tags = ArrangeService::new(repo).annotate()?;
            print!("{}", with_newline(format_tag_list(&tags)));
        }
        Commands::Add { tags } => {
            let repo = FileSystemRepository::discover()?;
            let report = TagListService::new(repo).add(&tags)?;
            for tag in &report.added {
                println!("Added: {}", tag.text);
            }
            for text in &report.skipped {
                println!("Already in list: {}", text);
            }
        }
        Commands::Remove { position } => {
            let repo = FileSystemRepository::discover()?;
            let removed = TagListService::new(repo).remove(position)?;
            println!("Removed: {}", removed.text);
        }
        Commands::Move { from, to } => {
            let repo = FileSystemRepository::discover()?;
            TagListService::new(repo.clone()).move_tag(from, to)?;
            let tags = ArrangeService::new(repo).annotate()?;
            print!("{}", with_newline(format_tag_list(&tags)));
        }
        Commands::Emphasize { position } => {
            let repo = FileSystemRepository::discover()?;
            let tag = emphasize(&repo, position)?;
            println!("{}", tag.text);
        }
        Commands::ResetEmphasis => {
            let repo = FileSystemRepository::discover()?;
            let tags = reset_emphasis(&repo)?;
            println!("Reset emphasis on {} tags", tags.len());
        }
        Commands::Dialect { name } => {
            let repo = FileSystemRepository::discover()?;
            match name {
                Some(name) => {
                    let switch = switch_dialect(&repo, parse_dialect(&name)?)?;
                    println!(
                        "Dialect: {} (emphasis reset on {} tags)",
                        switch.current, switch.stripped
                    );
                }
                None => {
                    println!("{}", repo.load_config()?.dialect);
                }
            }
        }
        Commands::Arrange { dry_run } => {
            let repo = FileSystemRepository::discover()?;
            let service = ArrangeService::new(repo);
            let review = if dry_run {
                service.review()?
            } else {
                service.apply()?
            };
            print!("{}", with_newline(format_review(&review)));
            if dry_run && review.changed {
                println!("(dry run: order not saved)");
            }
        }
        Commands::Import { prompt } => {
            let repo = FileSystemRepository::discover()?;
            match import_tags(&repo, &prompt)? {
                None => println!("Nothing to import"),
                Some(tags) if tags.is_empty() => println!("Prompt had no tags; list cleared"),
                Some(tags) => println!("Imported {} tags", tags.len()),
            }
        }
        Commands::Export { keep_emphasis } => {
            let repo = FileSystemRepository::discover()?;
            let report = export_prompt(&repo, keep_emphasis)?;
            println!("{}", report.prompt);
        }
        Commands::Clear => {
            let repo = FileSystemRepository::discover()?;
            let count = TagListService::new(repo).clear()?;
            println!("Cleared {} tags", count);
        }
        Commands::Suggest { prefix, limit } => {
            let repo = FileSystemRepository::discover()?;
            let suggestions = SuggestService::new(repo).suggest(prefix.as_deref(), limit)?;
            print!("{}", with_newline(format_suggestions(&suggestions)));
        }
        Commands::Categories => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let taxonomy = repo.load_taxonomy(&config)?;
            print!("{}", with_newline(format_category_list(&taxonomy)));
        }
    }

    Ok(())
}

/// Formatters return bare messages for empty results; make every block end in a newline
fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
