// SorTTY: Sorting Algorithm Visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::{ConfigFile, VisualizerConfig};
use sortty::headless::run_headless;
use sortty::session::Session;
use sortty::ui::App;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sortty")]
#[command(about = "Step through sorting algorithms in the terminal")]
#[command(version)]
struct Args {
    /// TOML config file; flags override its settings
    #[arg(short, long, env = "SORTTY_CONFIG")]
    config: Option<PathBuf>,

    /// Algorithm to visualize (bubble, selection, insertion, quick, merge, heap)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of elements (5-35, 5-20 with --compact)
    #[arg(short = 'n', long)]
    elements: Option<usize>,

    /// Speed tier, 0 (slow) to 4 (fast)
    #[arg(short, long)]
    speed: Option<u8>,

    /// Shuffle seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Cap the element count for narrow terminals
    #[arg(long)]
    compact: bool,

    /// Print every frame to stdout instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (stderr would corrupt the TUI)
    #[arg(long, env = "SORTTY_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            algorithm: self.algorithm.clone(),
            elements: self.elements,
            speed: self.speed,
            seed: self.seed,
            compact: self.compact.then_some(true),
            frame_limit: None,
        }
    }
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortty=info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let config = match VisualizerConfig::from_file(file.merge(args.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.headless && config.algorithm.is_none() {
        eprintln!("Error: --headless needs an algorithm (-a bubble|selection|insertion|quick|merge|heap)");
        std::process::exit(1);
    }

    info!(
        algorithm = config.algorithm.map(|a| a.key()).unwrap_or("none"),
        elements = config.elements,
        seed = config.seed,
        "starting"
    );
    let mut session = Session::new(config)?;

    if args.headless {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_headless(&mut session, &mut out)?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
