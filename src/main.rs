use folio_shell::config::{self, SiteConfig};
use folio_shell::host::{Host, Section};
use folio_shell::page::StaticPage;
use folio_shell::prank::PageSurface;
use folio_shell::runtime;
use folio_shell::shell::Shell;
use folio_shell::theme::ThemeMode;
use std::env;
use std::path::PathBuf;
use std::process;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Page effects have nowhere to go in a console, so they are logged.
struct ConsoleHost {
    page: StaticPage,
}

impl Host for ConsoleHost {
    fn navigate(&mut self, section: Section) {
        tracing::info!(%section, "navigate to #{}", section);
    }

    fn go_home(&mut self) {
        tracing::info!("navigate to landing view");
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        tracing::info!(%mode, "theme changed");
    }

    fn download_resume(&mut self) {
        tracing::info!("resume download started");
    }

    fn open_new_tab(&mut self, url: &str) {
        tracing::info!(url, "open in new tab");
    }

    fn set_nudging(&mut self, on: bool) {
        tracing::debug!(on, "nudge");
    }

    fn page(&mut self) -> &mut dyn PageSurface {
        &mut self.page
    }
}

fn usage() -> ! {
    eprintln!("Usage: folio-shell [site.yaml] [projects.json]");
    eprintln!();
    eprintln!("Reads commands from stdin. End a line with TAB to complete it,");
    eprintln!("then send an empty line to run the completed command.");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_shell=info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        usage();
    }

    let site_path = args.get(1).map(PathBuf::from);
    let site = match &site_path {
        Some(path) => match SiteConfig::load(path) {
            Ok(site) => site,
            Err(e) => {
                eprintln!("folio-shell: {}", e);
                process::exit(1);
            }
        },
        None => SiteConfig::default(),
    };

    let projects_path = args
        .get(2)
        .map(PathBuf::from)
        .or_else(|| site_path.as_deref().and_then(|p| site.projects_path(p)));
    let mut content = site.content();
    if let Some(path) = projects_path {
        content.projects = config::load_projects(&path);
    }

    let host = ConsoleHost {
        page: StaticPage::portfolio(content.projects.len()),
    };
    let mut shell = Shell::new(site.settings(), content, host);
    if let Some(theme) = site.theme {
        shell.host_mut().set_theme(theme);
    }
    shell.open();

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = runtime::run(&mut shell, stdin, tokio::io::stdout()).await {
        eprintln!("folio-shell: {}", e);
        process::exit(1);
    }
}
