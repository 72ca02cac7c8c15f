use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{CategoryFilter, QuestionBank};
use services::BankSource;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,services=info";

#[derive(Debug, Parser)]
#[command(name = "quiz", version, about = "Medical physics multiple-choice quiz")]
struct Args {
    /// JSON question bank to load instead of the built-in one
    #[arg(long, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Category preselected on the start screen
    #[arg(long, env = "QUIZ_CATEGORY")]
    category: Option<String>,
}

impl Args {
    fn bank_source(&self) -> BankSource {
        self.questions
            .clone()
            .map_or(BankSource::Embedded, BankSource::File)
    }
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    filter: CategoryFilter,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn initial_filter(&self) -> CategoryFilter {
        self.filter.clone()
    }
}

/// Preselect `category` only if the bank has questions in it.
fn resolve_filter(bank: &QuestionBank, category: Option<&str>) -> CategoryFilter {
    match category {
        None => CategoryFilter::All,
        Some(name) if name == CategoryFilter::ALL_KEY => CategoryFilter::All,
        Some(name) if bank.count_in(name) > 0 => CategoryFilter::category(name),
        Some(name) => {
            tracing::warn!(category = name, "unknown category, showing all questions");
            CategoryFilter::All
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let source = args.bank_source();
    let bank = source.load()?;
    tracing::info!(
        source = ?source,
        questions = bank.len(),
        categories = bank.categories().len(),
        "question bank loaded"
    );
    if bank.is_empty() {
        tracing::warn!("question bank is empty; the quiz cannot be started");
    }

    let filter = resolve_filter(&bank, args.category.as_deref());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: Arc::new(bank),
        filter,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Medical Physics Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
