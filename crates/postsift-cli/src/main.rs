use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pipeline::{handle_process, InputPayload, OutputArtifact, ProcessRequest};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// postsift – clean social-media posts and extract screening features.
/// Commands:
///   - clean --text "..."              (or text on STDIN)
///   - features --text "..." [--raw]
///   - batch --input posts.txt [--raw] (one post per line)
#[derive(Parser, Debug)]
#[command(name = "postsift", version, about = "Post text cleaning and lexical features")]
struct Cli {
    /// Directory receiving the result files (txt/json)
    #[arg(long, global = true, default_value = "outputs")]
    out_dir: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize a post (URL masking, escape stripping, whitespace collapse)
    Clean {
        /// The post text; read from STDIN when absent
        #[arg(long)]
        text: Option<String>,
    },

    /// Extract the 13-column feature vector from one post
    Features {
        /// The post text; read from STDIN when absent
        #[arg(long)]
        text: Option<String>,

        /// Skip the normalizer and extract from the text exactly as given
        #[arg(long)]
        raw: bool,
    },

    /// Extract a feature table from a file of posts, one per line
    Batch {
        #[arg(long)]
        input: PathBuf,

        /// Skip the normalizer
        #[arg(long)]
        raw: bool,
    },
}

fn write_artifacts(out_dir: &PathBuf, prefix: &str, artifacts: &[OutputArtifact]) -> Result<()> {
    fs::create_dir_all(out_dir).ok();
    for (i, art) in artifacts.iter().enumerate() {
        match art {
            OutputArtifact::CleanedText { texts } => {
                let p = out_dir.join(format!("{}_{}.txt", prefix, i));
                fs::write(&p, texts.join("\n"))?;
                eprintln!("✓ wrote {}", p.display());
            }
            OutputArtifact::FeatureTable { rows } => {
                let p = out_dir.join(format!("{}_{}.json", prefix, i));
                let pretty = serde_json::to_string_pretty(rows)?;
                fs::write(&p, pretty)?;
                eprintln!("✓ wrote {}", p.display());
            }
        }
    }
    Ok(())
}

fn read_stdin_string() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed reading STDIN")?;
    Ok(buf)
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => read_stdin_string(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Clean { text } => {
            let txt = text_or_stdin(text)?;
            let req = ProcessRequest {
                task: "clean".into(),
                payload: InputPayload::Text { text: txt },
            };
            let resp = handle_process(req)?;
            write_artifacts(&cli.out_dir, "cleaned", &resp.artifacts)?;
        }

        Commands::Features { text, raw } => {
            let txt = text_or_stdin(text)?;
            let req = ProcessRequest {
                task: if raw { "features".into() } else { "full".into() },
                payload: InputPayload::Text { text: txt },
            };
            let resp = handle_process(req)?;
            write_artifacts(&cli.out_dir, "features", &resp.artifacts)?;
        }

        Commands::Batch { input, raw } => {
            let contents = fs::read_to_string(&input)
                .with_context(|| format!("failed reading posts: {}", input.display()))?;
            let texts: Vec<String> = contents.lines().map(str::to_string).collect();
            let req = ProcessRequest {
                task: if raw { "features".into() } else { "full".into() },
                payload: InputPayload::Batch { texts },
            };
            let resp = handle_process(req)?;
            write_artifacts(&cli.out_dir, "batch", &resp.artifacts)?;
        }
    }

    Ok(())
}
