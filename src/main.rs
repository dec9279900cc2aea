use anyhow::Context;
use clap::Parser;
use snapcut::config::toml_config::TomlConfig;
use snapcut::core::consumption::preview;
use snapcut::core::{ConfigProvider, DocumentStore, OperatorPrompt};
use snapcut::utils::error::ErrorCategory;
use snapcut::utils::{logger, validation::Validate};
use snapcut::{
    CliConfig, ConsumptionLoop, LocalDocumentStore, RunOutcome, RunSummary, ScriptedPrompt,
    Settings, SnapcutError, TerminalPrompt, TomlFixtureSink,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting snapcut");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    cli.validate().context("Invalid command line arguments")?;

    let mut settings = Settings::default();
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path);
        let file_config = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        settings.merge_toml(&file_config);
    }
    cli.apply_to(&mut settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = LocalDocumentStore::new(settings.workbench_path());

    if cli.dry_run {
        return dry_run(&store).map_err(Into::into);
    }

    println!("Reading {}...", settings.workbench_path());

    let result = match &cli.destinations {
        Some(path) => {
            let listing = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read destinations file '{}'", path))?;
            let prompt = ScriptedPrompt::from_lines(&listing);
            tracing::info!("Batch mode with {} destination(s)", prompt.remaining());
            run(store, prompt, &settings)
        }
        None => run(store, TerminalPrompt::stdio(), &settings),
    };

    match result {
        Ok(summary) => {
            println!();
            println!("{}", outcome_message(&summary));
            if let Some(report) = &cli.report {
                export_report(report, &settings, &summary)
                    .with_context(|| format!("Failed to write report '{}'", report))?;
            }
        }
        Err(e) => {
            tracing::error!(
                "snapcut failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Configuration => 1,
                ErrorCategory::Storage => 2,
                _ => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn outcome_message(summary: &RunSummary) -> String {
    match summary.outcome {
        RunOutcome::Exhausted => format!(
            "Done! {} written, {} skipped",
            summary.written.len(),
            summary.skipped
        ),
        RunOutcome::Stopped => format!(
            "Exiting... {} written, {} skipped, remaining sections are left in the workbench",
            summary.written.len(),
            summary.skipped
        ),
    }
}

fn run<P: OperatorPrompt>(
    store: LocalDocumentStore,
    prompt: P,
    settings: &Settings,
) -> Result<RunSummary, SnapcutError> {
    let sink = TomlFixtureSink::from_config(settings);
    ConsumptionLoop::new(store, prompt, sink)
        .with_quit_token(settings.quit_token())
        .run()
}

fn dry_run(store: &LocalDocumentStore) -> Result<(), SnapcutError> {
    let document = store.load()?;
    let pending = preview(&document);

    println!("🔍 Dry run of {}", store.path().display());
    println!();
    for section in &pending {
        let marker = if section.would_skip { " (empty, would be skipped)" } else { "" };
        println!(
            "📦 Section {}: {} line(s){}{}",
            section.number,
            section.line_count,
            if section.has_delimiter { "" } else { ", no delimiter" },
            marker
        );
        for line in section.cleaned.lines() {
            println!("    {}", line);
        }
    }
    println!();
    println!(
        "📊 {} section(s), {} to prompt for",
        pending.len(),
        pending.iter().filter(|s| !s.would_skip).count()
    );
    Ok(())
}

fn export_report(path: &str, settings: &Settings, summary: &RunSummary) -> Result<(), SnapcutError> {
    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "workbench": settings.workbench_path(),
        "output_root": settings.output_root(),
        "summary": summary,
    });

    std::fs::write(path, serde_json::to_string_pretty(&report)?)?;

    tracing::info!("📊 Run report exported to: {}", path);
    println!("📊 Report exported to: {}", path);
    Ok(())
}
