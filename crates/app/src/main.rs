use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use consulting_site_core::{
    render_page, ConfigFormat, PageState, RotatorCommand, RotatorSection, SiteConfig, SiteError,
};
use tracing_subscriber::EnvFilter;

fn main() -> consulting_site_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, output } => run_build(config.as_deref(), output.as_deref()),
        Commands::Defaults { format } => run_defaults(format),
        Commands::Rotate {
            config,
            section,
            render,
            events,
        } => run_rotate(config.as_deref(), section, render.as_deref(), &events),
        Commands::Check { config } => run_check(&config),
    }
}

fn run_build(config: Option<&Path>, output: Option<&Path>) -> consulting_site_core::Result<()> {
    tracing::info!(?config, ?output, "rendering site");

    let config = SiteConfig::load_or_default(config)?;
    let state = PageState::from_config(&config)?;
    write_page(&config, &state, output)
}

fn run_defaults(format: FormatArg) -> consulting_site_core::Result<()> {
    let text = SiteConfig::default().serialize(format.into())?;
    println!("{text}");
    Ok(())
}

fn run_rotate(
    config: Option<&Path>,
    section: SectionArg,
    render: Option<&Path>,
    events: &[String],
) -> consulting_site_core::Result<()> {
    let config = SiteConfig::load_or_default(config)?;
    let mut state = PageState::from_config(&config)?;
    let section = RotatorSection::from(section);

    let commands = events
        .iter()
        .map(|event| event.parse::<RotatorCommand>())
        .collect::<consulting_site_core::Result<Vec<_>>>()?;

    let rotator = state.rotator_mut(section).ok_or_else(|| {
        SiteError::msg(format!(
            "the {section:?} section is disabled; set `testimonials.enabled = true`"
        ))
    })?;

    for command in commands {
        let transition = command.apply(rotator);
        tracing::info!(?command, from = transition.from, to = transition.to, "applied");
    }

    let active = rotator.active();
    let dots: String = rotator
        .indicators()
        .iter()
        .map(|indicator| if indicator.selected { '●' } else { '○' })
        .collect();
    println!(
        "active {} of {}: {}",
        rotator.active_index(),
        rotator.len(),
        active.author
    );
    println!("{dots}");

    if let Some(path) = render {
        write_page(&config, &state, Some(path))?;
    }
    Ok(())
}

fn run_check(config: &Path) -> consulting_site_core::Result<()> {
    let loaded = SiteConfig::load(config)?;
    tracing::info!(?config, "configuration is valid");
    println!(
        "{} is valid: {} reviews, {} services",
        config.display(),
        loaded.reviews.reviews.len(),
        loaded.services.services.len()
    );
    Ok(())
}

fn write_page(
    config: &SiteConfig,
    state: &PageState,
    output: Option<&Path>,
) -> consulting_site_core::Result<()> {
    let html = render_page(config, state).into_string();
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(?path, "wrote page");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Renders the I DO Consulting site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the page with every rotator on its first item.
    Build {
        /// Site configuration (.json or .toml). Stock content when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Where to write the HTML. Printed to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the stock configuration.
    Defaults {
        #[arg(short, long, value_enum, default_value_t = FormatArg::Toml)]
        format: FormatArg,
    },
    /// Replay rotator commands (next, prev, goto:<index>) and report the result.
    Rotate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = SectionArg::Reviews)]
        section: SectionArg,
        /// Also write the page in the resulting state.
        #[arg(short, long)]
        render: Option<PathBuf>,
        events: Vec<String>,
    },
    /// Load and validate a configuration file.
    Check {
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for ConfigFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ConfigFormat::Json,
            FormatArg::Toml => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SectionArg {
    Reviews,
    Testimonials,
}

impl From<SectionArg> for RotatorSection {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Reviews => RotatorSection::Reviews,
            SectionArg::Testimonials => RotatorSection::Testimonials,
        }
    }
}
