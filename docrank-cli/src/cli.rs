use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "docrank", version, about = "Rank PDF pages by relevance to persona tasks")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract per-page text from every PDF in a directory into a corpus file.
    Extract(ExtractArgs),
    /// Rank an existing corpus file against each task file.
    Rank(RankArgs),
    /// Extract and rank in one go.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Directory containing the input PDFs.
    #[arg(long, default_value = "input_pdfs")]
    pub input_dir: PathBuf,

    /// Corpus file to write.
    #[arg(long, default_value = "extracted_text.json")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Corpus file produced by `docrank extract`.
    #[arg(long, default_value = "extracted_text.json")]
    pub corpus: PathBuf,

    #[command(flatten)]
    pub tasks: TaskArgs,

    #[command(flatten)]
    pub ranking: RankingArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Directory containing the input PDFs.
    #[arg(long, default_value = "input_pdfs")]
    pub input_dir: PathBuf,

    /// Also save the extracted corpus to this file.
    #[arg(long)]
    pub corpus_out: Option<PathBuf>,

    #[command(flatten)]
    pub tasks: TaskArgs,

    #[command(flatten)]
    pub ranking: RankingArgs,
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task file to run; repeat for several. Case ids follow the given order.
    #[arg(long = "task", value_name = "FILE")]
    pub tasks: Vec<PathBuf>,

    /// Directory searched for persona_task_*.json when no --task is given.
    #[arg(long, default_value = ".")]
    pub task_dir: PathBuf,

    /// Directory receiving output_case<N>.json files.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct RankingArgs {
    /// Number of sections kept per task.
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,

    /// Embedding backend.
    #[arg(long, value_enum, default_value_t = ProviderKind::Hash, env = "DOCRANK_PROVIDER")]
    pub provider: ProviderKind,

    /// Embedding dimensions (hash: vector size; openai: requested truncation).
    #[arg(long)]
    pub dimensions: Option<usize>,

    /// Embedding model name (openai only).
    #[arg(long, env = "DOCRANK_EMBEDDING_MODEL")]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible embeddings API (openai only).
    #[arg(long, env = "DOCRANK_EMBEDDINGS_URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// Offline feature-hashing embeddings.
    Hash,
    /// OpenAI-compatible HTTP embeddings (requires the `openai` feature).
    Openai,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_defaults_match_file_layout() {
        let cli = Cli::try_parse_from(["docrank", "rank"]).unwrap();
        let Commands::Rank(args) = cli.command else { panic!("expected rank") };
        assert_eq!(args.corpus, PathBuf::from("extracted_text.json"));
        assert!(args.tasks.tasks.is_empty());
        assert_eq!(args.tasks.task_dir, PathBuf::from("."));
        assert_eq!(args.ranking.top_k, 10);
        assert_eq!(args.ranking.dimensions, None);
    }

    #[test]
    fn repeated_task_flags_keep_order() {
        let cli = Cli::try_parse_from([
            "docrank",
            "rank",
            "--task",
            "b.json",
            "--task",
            "a.json",
            "--top-k",
            "5",
            "--provider",
            "hash",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Rank(args) = cli.command else { panic!("expected rank") };
        assert_eq!(args.tasks.tasks, [PathBuf::from("b.json"), PathBuf::from("a.json")]);
        assert_eq!(args.ranking.top_k, 5);
        assert_eq!(args.ranking.provider, ProviderKind::Hash);
    }

    #[test]
    fn extract_accepts_custom_paths() {
        let cli =
            Cli::try_parse_from(["docrank", "extract", "--input-dir", "pdfs", "--output", "c.json"])
                .unwrap();
        let Commands::Extract(args) = cli.command else { panic!("expected extract") };
        assert_eq!(args.input_dir, PathBuf::from("pdfs"));
        assert_eq!(args.output, PathBuf::from("c.json"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(Cli::try_parse_from(["docrank", "rank", "--provider", "magic"]).is_err());
    }
}
