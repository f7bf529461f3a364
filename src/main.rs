use clap::Parser;
use student_roster::core::ConfigProvider;
use student_roster::utils::error::{ErrorSeverity, RosterError};
use student_roster::utils::{logger, validation::Validate};
use student_roster::{
    CliConfig, LocalStorage, RosterEngine, RosterReport, RunOutcome, StudentPipeline, TomlConfig,
};

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting student-roster");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = args.validate() {
        exit_with(&e);
    }

    let result = match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path).and_then(|c| c.validate().map(|_| c)) {
                Ok(config) => config,
                Err(e) => exit_with(&e),
            };
            tracing::info!("Roster: {}", config.roster_name());
            let list = args.list || config.list_students();
            let monitor = args.monitor || config.monitoring_enabled();
            let storage = LocalStorage::new(config.base_dir());
            run(storage, config, monitor, list).await
        }
        None => {
            let storage = LocalStorage::new(args.base_dir.clone());
            let (monitor, list) = (args.monitor, args.list);
            run(storage, args, monitor, list).await
        }
    };

    if let Err(e) = result {
        exit_with(&e);
    }
}

async fn run<C: ConfigProvider>(
    storage: LocalStorage,
    config: C,
    monitor: bool,
    list: bool,
) -> student_roster::Result<()> {
    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = RosterEngine::new_with_monitoring(StudentPipeline::new(storage, config), monitor);
    let RunOutcome {
        roster,
        report,
        output_path,
    } = engine.run().await?;

    if list {
        for student in &roster {
            println!("{}", student);
        }
    }

    print_report(&report);

    if let Some(path) = output_path {
        println!("📁 Report saved to: {}", path);
    }

    Ok(())
}

fn print_report(report: &RosterReport) {
    let timings = &report.timings;

    println!("Searching for student with name: {}", report.search_name);
    println!("Linear Search Time: {:.6}s", timings.linear_search_secs);
    match &report.name_match {
        Some(student) => println!("Result: {}", student),
        None => println!("No student found with name: {}", report.search_name),
    }

    println!("Sort Time: {:.6}s", timings.sort_secs);

    println!("Binary Search Time: {:.6}s", timings.binary_search_secs);
    match &report.score_match {
        Some(student) => println!("Result: {}", student),
        None => println!("No student found with score: {}", report.search_score),
    }

    println!("\nTop {} Students:", report.top_n);
    println!("Top-N Time: {:.6}s", timings.top_n_secs);
    for student in &report.top_students {
        println!("{}", student);
    }

    println!("Average Score Calculation Time: {:.6}s", timings.average_secs);
    println!("Average Score: {:.2}", report.average_score);
}

fn exit_with(e: &RosterError) -> ! {
    tracing::error!(
        "❌ Roster run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
