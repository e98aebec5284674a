//! CLI binary: download the embedded syllabus reading list into ./papers.

#[cfg(feature = "cli")]
mod cli {
    use clap::Parser;
    use comfy_table::{ContentArrangement, Table};
    use paperfetch::run::{run_batch, RunConfig, FAILURE_REPORT};
    use paperfetch::{Fetcher, OpenAlexClient};

    #[derive(Parser)]
    #[command(
        name = "paperfetch",
        about = "Download the syllabus reading list as PDFs via OpenAlex",
        version
    )]
    struct Cli {}

    fn print_failures_table(failures: &[paperfetch::FailureRecord]) {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["File", "Reason"]);
        for failure in failures {
            table.add_row(vec![&failure.file, &failure.reason]);
        }
        println!("{table}");
    }

    pub async fn run() {
        let _cli = Cli::parse();

        let papers = paperfetch::syllabus::papers();
        let client = OpenAlexClient::new();
        let fetcher = Fetcher::new();
        let config = RunConfig::new("papers");

        match run_batch(&papers, &client, &fetcher, &config).await {
            Ok(report) => {
                println!(
                    "Downloaded {}, skipped {}, failed {}.",
                    report.downloaded, report.skipped, report.failed
                );
                if !report.failures.is_empty() {
                    print_failures_table(&report.failures);
                    println!(
                        "Details written to {}.",
                        config.output_dir.join(FAILURE_REPORT).display()
                    );
                }
            }
            // Failures are per-record and already reported; only an unusable
            // output directory lands here. Exit code stays 0 either way.
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    cli::run().await;
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with: cargo build --features cli");
}
