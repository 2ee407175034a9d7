use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use tokio::time::{Duration, sleep};

use conveyor_core::domain::Task;
use conveyor_core::impls::{FileReportWriter, TracingSink};
use conveyor_core::{PipelineBuilder, PipelineConfig, TaskProcessor};

const NUM_WORKERS: usize = 3;
const NUM_TASKS: usize = 10;
const RESULTS_PATH: &str = "results.txt";

/// Simulated CPU-intensive work: each task takes 1.0-1.5 seconds.
struct SimProcessor;

#[async_trait]
impl TaskProcessor for SimProcessor {
    async fn process(&self, _task: &Task) {
        // ThreadRng is not Send, so pick the delay before suspending.
        let delay_ms: u64 = {
            let mut rng = rand::thread_rng();
            rng.gen_range(1000..1500)
        };
        sleep(Duration::from_millis(delay_ms)).await;
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Multi-Threaded Task Processing System ===\n");

    let pipeline = match PipelineBuilder::new(PipelineConfig::new(NUM_WORKERS, NUM_TASKS))
        .processor(Arc::new(SimProcessor))
        .event_sink(Arc::new(TracingSink))
        .report_writer(Arc::new(FileReportWriter::new(RESULTS_PATH)))
        .build()
    {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("invalid pipeline setup: {err}");
            std::process::exit(1);
        }
    };

    let report = pipeline.run().await;

    println!("\n=== Processing Complete ===");
    println!("Total results collected: {}", report.outcomes().len());
    println!("\n=== Results ===");
    for (index, outcome) in report.outcomes().iter().enumerate() {
        println!("{}. {}", index + 1, outcome.description());
    }

    match report.persist_error() {
        None => println!("\nResults saved to {RESULTS_PATH}"),
        Some(err) => eprintln!("\nFailed to save results: {err}"),
    }
}
