use clap::{Parser, Subcommand};
use landing_forge::{config, generate, output, serve};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "landing-forge")]
#[command(about = "Configuration-driven generator for themed marketing sites")]
#[command(long_about = "\
Configuration-driven generator for themed marketing sites

One JSON (or TOML) file describes the whole site: brand, hero, pages,
SEO fields, consent banners, redirects and maintenance mode.

  site.json
  ├── themeName              # Glassmorphism, Classic, Enterprise, Soft Modern,
  │                          # Minimal Light, Minimal Dark, Green Tech
  ├── appName, tagline       # Brand
  ├── hero*                  # Home page hero: title, CTA, stats, media
  ├── primaryColor           # Secondary and pastel tints are derived from it
  ├── pages                  # Keyed pages; \"home\" is served at /
  │   └── about
  │       ├── sections       # Authored HTML blocks
  │       ├── is_published
  │       └── requires_auth, allowed_roles
  ├── redirectRules          # { from, to, status }; trailing /* matches a prefix
  └── maintenanceMode        # Every route redirects to /maintenance

Pass --config more than once to layer files; later files win.

Run 'landing-forge gen-config' to print a documented starter site.json.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file (repeat to layer overrides)
    #[arg(long, default_value = "site.json", global = true)]
    config: Vec<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Origin used for robots.txt and sitemap URLs when canonicalDomain is unset
    #[arg(long, default_value = "http://localhost:3000", global = true)]
    origin: String,

    /// Log progress at info level (RUST_LOG still applies otherwise)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Serve the site with maintenance, auth and redirect handling
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Validate the config and list pages, redirects and flags
    Check,
    /// Print a documented starter site.json
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site = config::load_config(cli.config.as_slice())?;
            let today = chrono::Local::now().date_naive();
            println!("==> Building {} → {}", site.app_name, cli.output.display());
            let report = generate::generate(&site, &cli.output, &cli.origin, today)?;
            output::print_build_output(&site, &report);
        }
        Command::Serve { addr } => {
            let site = config::load_config(cli.config.as_slice())?;
            println!("==> Serving {} on http://{}", site.app_name, addr);
            serve::serve(&site, &addr, &cli.origin)?;
        }
        Command::Check => {
            let site = config::load_config(cli.config.as_slice())?;
            generate::plan_routes(&site, &mut Vec::new())?;
            output::print_check_output(&site);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_json());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
