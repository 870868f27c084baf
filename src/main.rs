use anyhow::{Context, Result};
use clap::Parser;
use cue_formatter::model::{DEFAULT_FORMAT_ID, FORMAT_OPTIONS, TOKEN_OPTIONS};
use cue_formatter::{FormatPipeline, FormatterConfig, PerformerFallback};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cue-formatter")]
#[command(about = "Format a rekordbox .cue file into a tracklist", long_about = None)]
struct Args {
    /// Path to the .cue file, or `-` to read cue text from stdin
    #[arg(required_unless_present_any = ["list_formats", "list_tokens"])]
    input: Option<String>,

    /// Shift all start times: seconds (+5, -2) or time (+00:30, -00:01:10)
    #[arg(short = 's', long, default_value = "", allow_hyphen_values = true)]
    offset: String,

    /// Output format id (see --list-formats)
    #[arg(short = 'f', long, default_value = DEFAULT_FORMAT_ID)]
    format: String,

    /// Custom template, e.g. "{track_no_padded}. {artist} - {title}" (selects the custom format)
    #[arg(short = 't', long)]
    template: Option<String>,

    /// Performer for tracks without one: none, disc(-performer) or unknown(-artist)
    #[arg(long, default_value = "none")]
    performer_fallback: PerformerFallback,

    /// Write the tracklist to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only print the number of parsed tracks
    #[arg(long)]
    count: bool,

    /// List built-in formats and exit
    #[arg(long)]
    list_formats: bool,

    /// List template tokens and exit
    #[arg(long)]
    list_tokens: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if args.list_formats || args.list_tokens {
        print_catalogue(args.list_formats, args.list_tokens);
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        anyhow::bail!("No input given");
    };

    let cue_text = if input == "-" {
        log::debug!("Reading cue sheet from stdin");
        cue_formatter::input::read_stdin()?
    } else {
        // Expand ~ in paths
        let path = PathBuf::from(shellexpand::tilde(input).as_ref());
        log::info!("Loading cue sheet from {:?}", path);
        cue_formatter::input::load_cue_file(&path)?
    };

    let mut config = FormatterConfig::new()
        .with_offset(args.offset)
        .with_format(args.format)
        .with_performer_fallback(args.performer_fallback);

    if let Some(template) = args.template {
        config = config.with_custom_template(template);
    }

    let pipeline = FormatPipeline::new(config)?;
    log::debug!(
        "Using format '{}' ({}), offset {}s, performer fallback: {}",
        pipeline.format().id,
        pipeline.format().label,
        pipeline.offset_seconds(),
        args.performer_fallback
    );

    let output = pipeline.run(&cue_text);

    if output.tracks.is_empty() {
        log::warn!("No complete tracks found (each needs TITLE and INDEX 01)");
    }

    let rendered = if args.count {
        output.track_count().to_string()
    } else {
        output.text
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write tracklist: {:?}", path))?;
            log::info!("Tracklist written to: {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn print_catalogue(formats: bool, tokens: bool) {
    if formats {
        println!("Formats:");
        for option in FORMAT_OPTIONS {
            println!("  {:<24} {:<28} {}", option.id, option.label, option.template);
        }
    }

    if tokens {
        if formats {
            println!();
        }
        println!("Tokens:");
        for token in TOKEN_OPTIONS {
            println!("  {:<20} {}", token.token, token.description);
        }
    }
}
