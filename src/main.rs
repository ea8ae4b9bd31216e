use anyhow::Result;
use clap::Parser;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use capcut_srt::cli::{Cli, Commands};
use capcut_srt::config::Config;
use capcut_srt::convert::CaptionPipeline;
use capcut_srt::sink::{deliver_prompt, ClipboardSink, Delivery};
use capcut_srt::{output, prompt, utils};

/// Options of the `convert` subcommand
struct ConvertArgs {
    input: Option<PathBuf>,
    project: Option<String>,
    output: Option<PathBuf>,
    stdout: bool,
    language: Option<String>,
    no_clipboard: bool,
    print_prompt: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "capcut_srt=debug"
    } else {
        "capcut_srt=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            project,
            output,
            stdout,
            language,
            no_clipboard,
            print_prompt,
        } => {
            let args = ConvertArgs {
                input,
                project,
                output,
                stdout,
                language,
                no_clipboard,
                print_prompt,
            };
            let config = Config::load(cli.config.as_deref())?;
            run_convert(&config, args, !cli.quiet)?;
        }
        Commands::Config { show: true } => {
            Config::load(cli.config.as_deref())?.display();
        }
        Commands::Config { show: false } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };
            create_config_file(&path)?;
        }
    }

    Ok(())
}

fn run_convert(config: &Config, args: ConvertArgs, show_progress: bool) -> Result<()> {
    let input = resolve_input(config, args.input, args.project)?;
    // Keep stdout clean for the subtitles when they are printed there
    let status = |message: &dyn Display| {
        if args.stdout {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    };

    status(&format!("Converting {}...", input.display()));

    let pipeline = CaptionPipeline::new(show_progress);
    let report = match pipeline.convert_file(&input) {
        Ok(report) => report,
        Err(err) => {
            status(&"Conversion failed.");
            return Err(err.into());
        }
    };

    if args.stdout {
        output::print_to_console(&report.track);
    } else {
        let path = match args.output {
            Some(path) => path,
            None => config
                .output
                .dir
                .join(utils::timestamped_filename(&config.output.file_prefix, "srt")),
        };
        output::save_to_file(&report.track, &path)?;
        status(&format!(
            "Subtitles saved to: {} ({})",
            path.display(),
            utils::format_file_size(report.track.content.len() as u64)
        ));
    }

    status(&format!(
        "Found {} captions in {} fragments, covering {}",
        report.track.count,
        report.fragments,
        utils::format_duration(report.last_end_time.unwrap_or(0))
    ));
    status(&"Conversion completed successfully!");

    let language = args
        .language
        .unwrap_or_else(|| config.prompt.target_language.clone());
    let ai_prompt = prompt::create_translation_prompt(&report.track.content, &language);

    if args.print_prompt {
        print_prompt_block(&ai_prompt, args.stdout);
    }

    if args.no_clipboard || !config.prompt.copy_to_clipboard {
        return Ok(());
    }

    let mut sink = ClipboardSink::new();
    match deliver_prompt(&mut sink, &ai_prompt) {
        Delivery::Delivered => {
            status(&"Translation prompt copied to clipboard!");
            status(&"Paste it into any AI service to translate the subtitles.");
        }
        Delivery::Failed(reason) => {
            status(&format!("Could not copy the prompt to the clipboard: {}", reason));
            if !args.print_prompt {
                status(&"Translation prompt:");
                print_prompt_block(&ai_prompt, args.stdout);
            }
        }
    }

    Ok(())
}

/// Pick the draft file from the command line or the configured drafts directory
fn resolve_input(config: &Config, input: Option<PathBuf>, project: Option<String>) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path);
    }

    let project = project
        .or_else(|| config.capcut.default_project.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No draft given: pass a DRAFT_FILE, use --project, or set capcut.default_project"
            )
        })?;

    Ok(utils::draft_info_path(&config.drafts_dir()?, &project))
}

/// Print the prompt between separators; stderr keeps a piped SRT stream clean
fn print_prompt_block(text: &str, to_stderr: bool) {
    let separator = "-".repeat(50);
    let block = format!("{}\n{}\n{}", separator, text, separator);
    if to_stderr {
        eprintln!("{}", block);
    } else {
        println!("{}", block);
    }
}

fn create_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }

    Config::default().save(path)?;
    println!("Created config file: {}", path.display());
    Ok(())
}
