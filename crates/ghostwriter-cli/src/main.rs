//! Ghostwriter — voice-matched post drafts from a curated example corpus.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ghostwriter_chat::{LLMConfig, LLMProvider, ProviderClient};
use ghostwriter_core::{DataPaths, Language, LengthBucket};
use ghostwriter_corpus::Corpus;
use ghostwriter_generate::{GenerationSettings, PostGenerator, PromptStyle};
use ghostwriter_ingest::{load_raw_posts, save_results, PostCleaner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Ghostwriter — write posts in a target author's voice");
    println!();
    println!("Usage: ghostwriter <command> [args]");
    println!();
    println!("Commands:");
    println!("  preprocess [input] [output]                     Clean and tag scraped posts");
    println!("  generate <length> <language> <tag> [corpus]     Generate a post");
    println!("  prompt <length> <language> <tag> [corpus]       Print the generation prompt");
    println!("  tags [corpus]                                   List corpus tags");
    println!("  help                                            Show this help message");
    println!();
    println!("  length:   Short | Medium | Long");
    println!("  language: English | Urduish");
    println!();
    println!("Environment: OPENAI_API_KEY, GROQ_API_KEY, GHOSTWRITER_DATA_DIR (default: data)");
}

fn path_arg(args: &[String], index: usize, default: &Path) -> PathBuf {
    args.get(index)
        .map(PathBuf::from)
        .unwrap_or_else(|| default.to_path_buf())
}

fn generation_args(args: &[String]) -> anyhow::Result<(LengthBucket, Language, String)> {
    if args.len() < 5 {
        anyhow::bail!(
            "Usage: ghostwriter {} <length> <language> <tag> [corpus]",
            args.get(1).map(String::as_str).unwrap_or("generate")
        );
    }
    let length: LengthBucket = args[2].parse()?;
    let language: Language = args[3].parse()?;
    Ok((length, language, args[4].clone()))
}

async fn preprocess(args: &[String], paths: &DataPaths, config: &LLMConfig) -> anyhow::Result<()> {
    let input = path_arg(args, 2, &paths.raw_posts);
    let output = path_arg(args, 3, &paths.corpus);

    let client = ProviderClient::from_config(config, LLMProvider::Groq)?;
    let cleaner = PostCleaner::new(Arc::new(client));

    let raws = load_raw_posts(&input)?;
    let outcome = cleaner.process_posts(&raws).await;
    info!("Successfully processed {} posts", outcome.posts.len());

    let corpus = save_results(&output, &outcome)?;
    if let Some(sample) = corpus.posts.first() {
        println!("Sample processed post:");
        println!("{}", serde_json::to_string_pretty(sample)?);
    }
    Ok(())
}

fn build_generator(
    args: &[String],
    paths: &DataPaths,
    config: &LLMConfig,
) -> anyhow::Result<PostGenerator> {
    let corpus = Corpus::load(&path_arg(args, 5, &paths.corpus))?;
    let client = ProviderClient::from_config(config, LLMProvider::OpenAI)?;
    Ok(PostGenerator::new(
        Arc::new(client),
        corpus,
        PromptStyle::default(),
        GenerationSettings::default(),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let paths = DataPaths::from_env();
    let config = LLMConfig::load(&paths.llm_config_file);

    match args.get(1).map(String::as_str) {
        Some("preprocess") => preprocess(&args, &paths, &config).await?,
        Some("generate") => {
            let (length, language, tag) = generation_args(&args)?;
            let generator = build_generator(&args, &paths, &config)?;
            let post = generator.generate(length, language, &tag).await?;
            println!("{}", post);
        }
        Some("prompt") => {
            let (length, language, tag) = generation_args(&args)?;
            let corpus = Corpus::load(&path_arg(&args, 5, &paths.corpus))?;
            let prompt = ghostwriter_generate::build_prompt(
                &corpus,
                length,
                language,
                &tag,
                &PromptStyle::default(),
            );
            println!("{}", prompt);
        }
        Some("tags") => {
            let corpus = Corpus::load(&path_arg(&args, 2, &paths.corpus))?;
            for tag in corpus.unique_tags() {
                println!("{}", tag);
            }
        }
        Some("help") | Some("--help") | Some("-h") | None => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {}. Use 'ghostwriter help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
