//! voice-studio — 声优一览、余额查询、语音生成的命令行工具
//!
//! Usage:
//!   voice-studio actors                          List voice actors
//!   voice-studio balance                         Show remaining credits
//!   voice-studio generate <actor-id> <script>    Generate a voice and print its URLs

use anyhow::{bail, Context};
use std::sync::Arc;
use voice_actor_studio::events::BroadcastEventSink;
use voice_actor_studio::{GenerationOutcome, StudioConfig, StudioEvent, VoiceStudio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = take_flag(&mut args, "--config");
    let Some(command) = args.first().cloned() else {
        print_usage();
        std::process::exit(1);
    };

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "version" | "--version" | "-V" => {
            println!("voice-studio {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let config = match config_path {
        Some(path) => StudioConfig::from_yaml_file(&path)?,
        None => StudioConfig::from_env()?,
    };
    let sink = Arc::new(BroadcastEventSink::default());
    let events = sink.subscribe();
    let studio = VoiceStudio::new(&config, sink)?;

    match command.as_str() {
        "actors" => cmd_actors(&studio).await,
        "balance" => cmd_balance(&studio).await,
        "generate" => cmd_generate(&studio, &args[1..], events).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"voice-studio — voice actor speech generation

USAGE:
    voice-studio [--config <file.yaml>] <COMMAND>

COMMANDS:
    actors                         List voice actors
    balance                        Show remaining credits
    generate <actor-id> <script>   Generate a voice (consumes credits)
    version                        Show version information
    help                           Show this help message

ENVIRONMENT:
    VOICE_STUDIO_API_KEY           Provider API key (required without --config)
    VOICE_STUDIO_BASE_URL          Provider base URL
    VOICE_STUDIO_TIMEOUT_SECS      HTTP timeout in seconds
    VOICE_STUDIO_PROXY_URL         HTTP proxy
    RUST_LOG                       Log filter (e.g. voice_actor_studio=debug)"#
    );
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let i = args.iter().position(|a| a == flag)?;
    if i + 1 >= args.len() {
        return None;
    }
    let value = args.remove(i + 1);
    args.remove(i);
    Some(value)
}

async fn cmd_actors(studio: &VoiceStudio) -> anyhow::Result<()> {
    let actors = studio.catalog().fetch_all().await?;
    for actor in actors.iter() {
        println!(
            "{}\t{}\t{} / {}\t{}",
            actor.id,
            actor.name,
            actor.age,
            actor.gender,
            actor.script_placeholder()
        );
    }
    Ok(())
}

async fn cmd_balance(studio: &VoiceStudio) -> anyhow::Result<()> {
    let balance = studio.refresh_balance().await?;
    println!("{balance}");
    Ok(())
}

async fn cmd_generate(
    studio: &VoiceStudio,
    args: &[String],
    mut events: tokio::sync::broadcast::Receiver<StudioEvent>,
) -> anyhow::Result<()> {
    let Some((actor_id, words)) = args.split_first() else {
        bail!("usage: voice-studio generate <actor-id> <script>");
    };
    let script = words.join(" ");

    let report = studio.load().await;
    report.actors.context("could not load voice actors")?;
    if let Err(e) = &report.balance {
        eprintln!("warning: balance unavailable: {e}");
    }

    if studio.select(actor_id).is_none() {
        bail!("unknown voice actor: {actor_id}");
    }
    let outcome = studio.generate_selected(&script).await?;

    while let Ok(event) = events.try_recv() {
        tracing::debug!(?event, "studio event");
    }

    match outcome {
        GenerationOutcome::Completed(asset) => {
            println!("audio:    {}", asset.audio_url);
            println!("download: {}", asset.download_url);
            if let Some(balance) = studio.balance().value() {
                println!("balance:  {balance}");
            }
            Ok(())
        }
        GenerationOutcome::Rejected(reason) => bail!("nothing generated: {reason:?}"),
    }
}
