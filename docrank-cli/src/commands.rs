use std::path::PathBuf;

use anyhow::Context;
use docrank_core::{
    CaseOrchestrator, CaseReport, Corpus, RankConfig, TaskSource, discover_task_files,
    load_corpus, write_case,
};
use tracing::{info, warn};

use crate::cli::{ExtractArgs, RankArgs, RankingArgs, RunArgs, TaskArgs};
use crate::provider::build_provider;

/// `docrank extract`
pub fn extract(args: &ExtractArgs) -> anyhow::Result<Corpus> {
    let corpus = docrank_pdf::build_corpus(&args.input_dir)
        .with_context(|| format!("extracting PDFs from {}", args.input_dir.display()))?;
    docrank_pdf::write_corpus(&corpus, &args.output)?;
    println!(
        "Extracted {} pages from {} documents into {}",
        corpus.pages.len(),
        corpus.input_documents.len(),
        args.output.display()
    );
    Ok(corpus)
}

/// `docrank rank`
pub async fn rank(args: &RankArgs) -> anyhow::Result<CaseReport> {
    let corpus = load_corpus(&args.corpus)?;
    rank_corpus(&corpus, &args.tasks, &args.ranking).await
}

/// `docrank run`
pub async fn run(args: &RunArgs) -> anyhow::Result<CaseReport> {
    let corpus = docrank_pdf::build_corpus(&args.input_dir)
        .with_context(|| format!("extracting PDFs from {}", args.input_dir.display()))?;
    if let Some(path) = &args.corpus_out {
        docrank_pdf::write_corpus(&corpus, path)?;
    }
    rank_corpus(&corpus, &args.tasks, &args.ranking).await
}

/// Rank `corpus` for every task, writing each case file as soon as it is done.
pub async fn rank_corpus(
    corpus: &Corpus,
    tasks: &TaskArgs,
    ranking: &RankingArgs,
) -> anyhow::Result<CaseReport> {
    let task_files = task_files(tasks)?;
    if task_files.is_empty() {
        warn!(task_dir = %tasks.task_dir.display(), "no persona_task_*.json files found");
        return Ok(CaseReport::default());
    }

    let config = RankConfig::builder().top_k(ranking.top_k).build()?;
    let provider = build_provider(ranking)?;
    info!(provider = provider.name(), dimensions = provider.dimensions(), "embedding provider ready");

    let orchestrator = CaseOrchestrator::new(provider, config);
    let sources = task_files.iter().map(TaskSource::from_path).collect();
    let output_dir = &tasks.output_dir;

    let report = orchestrator
        .run_with_sink(corpus, sources, |case| {
            let path = write_case(case, output_dir)?;
            println!("Case {} saved to {}", case.case_id, path.display());
            Ok(())
        })
        .await?;

    for skipped in &report.skipped {
        eprintln!("Case {} skipped ({}): {}", skipped.case_id, skipped.origin, skipped.reason);
    }
    Ok(report)
}

fn task_files(tasks: &TaskArgs) -> anyhow::Result<Vec<PathBuf>> {
    if !tasks.tasks.is_empty() {
        return Ok(tasks.tasks.clone());
    }
    Ok(discover_task_files(&tasks.task_dir)?)
}
