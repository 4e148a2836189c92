//! CLI entrypoint for risklens
//!
//! This is the main binary that wires together all layers using
//! dependency injection. Every command goes through the transport so the
//! coordinator is the only context that touches capabilities.

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use risklens_application::{AnalysisOrchestrator, SelectionSource, StaticPreferences};
use risklens_domain::{OutputFormat, PAGE_CONTEXT, USER_TEXT_CONTEXT};
use risklens_infrastructure::{
    ConfigLoader, ContextId, FileConfig, InMemorySelection, MenuDispatcher, MenuOutcome,
    MessageBus, OllamaClient, PageTextExtractor, Request, Response, SummaryOverrides,
    TransportRuntime, build_registry, serve_lines,
};
use risklens_presentation::{
    Cli, Command, FollowUpRepl, InputArgs, MenuAction, OutputFormatter, SummaryArgs,
    disable_color, formatter_for, progress_observer,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting risklens");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    let format = cli.output.or(config.output.format).unwrap_or_default();
    if cli.no_color || !config.output.color || format == OutputFormat::Json {
        disable_color();
    }
    let formatter = formatter_for(format);

    let Some(command) = cli.command else {
        return Err(anyhow!(
            "No command given. Run `risklens --help` for usage."
        ));
    };

    // === Dependency Injection ===
    let show_progress = !cli.quiet && config.output.show_progress && format == OutputFormat::Text;
    let translate =
        config.translation.enabled && !matches!(command, Command::Analyze { no_translate: true, .. });
    let orchestrator = Arc::new(build_orchestrator(&config, translate, show_progress)?);

    let selection = Arc::new(InMemorySelection::default());
    let runtime = TransportRuntime::start(
        Arc::clone(&orchestrator),
        Some(Arc::clone(&selection) as Arc<dyn SelectionSource>),
    )?;
    let bus = Arc::clone(runtime.bus());

    let outcome = match command {
        Command::Analyze {
            input,
            context,
            interactive,
            ..
        } => {
            let text = read_input(&input).await?;
            let context = context.unwrap_or_else(|| default_context(&input).to_string());
            analyze(&bus, formatter.as_ref(), text, context, interactive).await
        }
        Command::Summarize { input, summary } => {
            let text = read_input(&input).await?;
            let request = Request::SummarizeText {
                text,
                options: overrides(&summary),
                context: input.html.as_ref().map(|_| PAGE_CONTEXT.to_string()),
            };
            let response = bus.send(ContextId::Coordinator, request).await?;
            report(formatter.as_ref(), response, |r| {
                r.summary.as_deref().map(|s| formatter.format_summary(s))
            })
        }
        Command::Ask {
            question,
            input,
            context,
        } => {
            let text = read_input(&input).await?;
            let answer = ask(&bus, &question, context.unwrap_or_else(|| text.clone()), &text).await;
            println!("{}", formatter.format_answer(&question, &answer));
            ExitCode::SUCCESS
        }
        Command::Probe => {
            let statuses = orchestrator.probe().probe_all().await;
            println!("{}", formatter.format_probe(&statuses));
            ExitCode::SUCCESS
        }
        Command::Serve => {
            info!("Serving requests on stdin/stdout");
            let handled =
                serve_lines(Arc::clone(&bus), tokio::io::stdin(), tokio::io::stdout()).await?;
            info!("Served {} requests", handled);
            ExitCode::SUCCESS
        }
        Command::Menu { action, input } => {
            let text = read_input(&input).await?;
            let dispatcher = MenuDispatcher::new(Arc::clone(&bus));
            let outcome = match action {
                MenuAction::SummarizeSelection => {
                    selection.set(text.clone());
                    dispatcher.summarize_selection(&text).await
                }
                MenuAction::SummarizePage => dispatcher.summarize_page(&text).await,
            };
            report_menu(formatter.as_ref(), outcome)
        }
    };

    runtime.shutdown().await;
    Ok(outcome)
}

/// Initialize tracing. Logs go to stderr, or to `log_file` when given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_ansi(false),
        )
        .init();
    Ok(Some(guard))
}

fn build_orchestrator(
    config: &FileConfig,
    translate: bool,
    show_progress: bool,
) -> Result<AnalysisOrchestrator> {
    let client = Arc::new(
        OllamaClient::new(config.backend.to_ollama_config())
            .context("Failed to create Ollama client")?,
    );
    let registry = Arc::new(build_registry(client, &config.backend.to_models()));
    let settings = config.to_analysis_settings().with_translation(translate);
    debug!("Analysis settings: {:?}", settings);

    let mut orchestrator = AnalysisOrchestrator::new(registry, settings).with_preferences(
        Arc::new(StaticPreferences::new(config.summary.to_summarizer_options())),
    );
    if show_progress {
        orchestrator =
            orchestrator.with_progress(progress_observer(std::io::stderr().is_terminal()));
    }
    Ok(orchestrator)
}

/// Read the text to process from the argument, a file, an HTML page or stdin
async fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if let Some(path) = &input.html {
        let html = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let text = PageTextExtractor::new().extract(&html);
        debug!("Extracted {} characters from {}", text.len(), path.display());
        return Ok(text);
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read stdin")?;
    Ok(text)
}

fn default_context(input: &InputArgs) -> &'static str {
    if input.html.is_some() {
        PAGE_CONTEXT
    } else {
        USER_TEXT_CONTEXT
    }
}

fn overrides(summary: &SummaryArgs) -> Option<SummaryOverrides> {
    if summary.is_empty() {
        return None;
    }
    Some(SummaryOverrides {
        summary_type: summary.summary_type,
        length: summary.length,
        format: summary.format,
    })
}

async fn analyze(
    bus: &Arc<MessageBus>,
    formatter: &dyn OutputFormatter,
    text: String,
    context: String,
    interactive: bool,
) -> ExitCode {
    let response = match bus
        .send(ContextId::Coordinator, Request::analyze(text, context))
        .await
    {
        Ok(response) => response,
        Err(e) => return fail(formatter, &e.to_string()),
    };
    let Some(result) = response.analysis.filter(|_| response.success) else {
        return fail(formatter, response.error.as_deref().unwrap_or("Analysis failed"));
    };
    println!("{}", formatter.format_analysis(&result));

    if interactive {
        let repl = FollowUpRepl::new(formatter_for(OutputFormat::Text));
        let summary = result.summary.clone();
        let original = result.original_text.clone();
        let asked = repl
            .run(|question| {
                let bus = Arc::clone(bus);
                let summary = summary.clone();
                let original = original.clone();
                async move { ask(&bus, &question, summary, &original).await }
            })
            .await;
        match asked {
            Ok(count) => debug!("Answered {} follow-up questions", count),
            Err(e) => return fail(formatter, &format!("Line editor failed: {}", e)),
        }
    }
    ExitCode::SUCCESS
}

/// Ask the coordinator; always yields displayable text
async fn ask(bus: &MessageBus, question: &str, context: String, original_text: &str) -> String {
    let request = Request::AnswerQuery {
        question: question.to_string(),
        context,
        original_text: original_text.to_string(),
    };
    match bus.send(ContextId::Coordinator, request).await {
        Ok(Response {
            answer: Some(answer),
            ..
        }) => answer,
        Ok(response) => response
            .error
            .unwrap_or_else(|| "No answer received".to_string()),
        Err(e) => e.to_string(),
    }
}

fn report(
    formatter: &dyn OutputFormatter,
    response: Response,
    render: impl FnOnce(&Response) -> Option<String>,
) -> ExitCode {
    if response.success {
        if let Some(output) = render(&response) {
            println!("{}", output);
            return ExitCode::SUCCESS;
        }
    }
    fail(
        formatter,
        response.error.as_deref().unwrap_or("Request failed"),
    )
}

fn report_menu(formatter: &dyn OutputFormatter, outcome: MenuOutcome) -> ExitCode {
    let response = match outcome {
        MenuOutcome::Ignored => {
            println!("{}", formatter.format_error("No text selected"));
            return ExitCode::SUCCESS;
        }
        MenuOutcome::Undeliverable => return fail(formatter, "No context could be reached"),
        MenuOutcome::Fallback(response) => {
            info!("Page context unreachable; answered by the control surface");
            response
        }
        MenuOutcome::Delivered(response) => response,
    };

    if let Some(analysis) = response.analysis.as_ref().filter(|_| response.success) {
        println!("{}", formatter.format_analysis(analysis));
        return ExitCode::SUCCESS;
    }
    report(formatter, response, |r| {
        r.summary.as_deref().map(|s| formatter.format_summary(s))
    })
}

fn fail(formatter: &dyn OutputFormatter, error: &str) -> ExitCode {
    eprintln!("{}", formatter.format_error(error));
    ExitCode::FAILURE
}
