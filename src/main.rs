// src/main.rs
use std::io::Read;
use std::process::ExitCode;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use clap::Parser;
use countable::args::Args;
use countable::infra::{FileResolver, LogSink, watch_loop};
use countable::presentation::{self, Report};
use countable::{CountCallback, CountConfig, Registry, count};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let config = args.count_config();

    if args.selectors.is_empty() {
        return count_stdin(&args, config);
    }

    let resolver = FileResolver::new(&args.root);
    let registry = Registry::with_diagnostics(Arc::clone(&resolver) as _, Arc::new(LogSink) as _);

    if args.watch {
        run_watch(&registry, &resolver, &args, config)
    } else {
        run_once(&registry, &args, config)
    }
}

fn run_once(registry: &Registry, args: &Args, config: CountConfig) -> ExitCode {
    let reports: Arc<Mutex<Vec<Report>>> = Arc::default();
    let collected = Arc::clone(&reports);
    let callback: CountCallback = Arc::new(move |surface, result| {
        collected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Report {
                surface: surface.id().to_string(),
                counts: *result,
            });
    });

    for selector in &args.selectors {
        registry.once(selector, Arc::clone(&callback), config);
    }

    let reports = reports.lock().unwrap_or_else(PoisonError::into_inner);
    if reports.is_empty() {
        eprintln!("countable: no surfaces matched");
        return ExitCode::FAILURE;
    }
    presentation::print_reports(&reports, args.format);
    ExitCode::SUCCESS
}

fn run_watch(
    registry: &Registry,
    resolver: &FileResolver,
    args: &Args,
    config: CountConfig,
) -> ExitCode {
    let format = args.format;
    let callback: CountCallback = Arc::new(move |surface, result| {
        presentation::print_update(
            &Report {
                surface: surface.id().to_string(),
                counts: *result,
            },
            format,
        );
    });

    for selector in &args.selectors {
        registry.live(selector, Arc::clone(&callback), config);
    }

    match watch_loop(resolver, Duration::from_millis(args.interval_ms)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Watch Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn count_stdin(args: &Args, config: CountConfig) -> ExitCode {
    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("countable: failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    let report = Report {
        surface: "stdin".to_string(),
        counts: count(&text, &config),
    };
    presentation::print_reports(&[report], args.format);
    ExitCode::SUCCESS
}
