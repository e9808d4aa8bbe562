//! Reflectify CLI
//!
//! Usage:
//!   reflectify --text "Heute habe ich ..."       # Score text
//!   reflectify --file journal.txt                # Score a file
//!   cat journal.txt | reflectify                 # Score stdin
//!   reflectify --text "..." --json               # JSON output
//!   reflectify --serve                           # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::io::{self, Read};
use std::path::PathBuf;

use reflectify::config::Config;
use reflectify::core::{run_server, ReflectionScorer};
use reflectify::types::{MetricBreakdown, ScoreOutput};
use reflectify::{init_logging, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "reflectify",
    version = VERSION,
    about = "Reflectify - Score the reflective quality of German journal entries",
    long_about = "Reflectify scores a reflection (Standard German or Swiss German) on four\n\
                  KPIs from 1 to 10 and derives a reflection level.\n\n\
                  KPIs:\n  \
                  depth          - lexical, syntactic and semantic richness\n  \
                  coherence      - repetition, references and connectives\n  \
                  metacognition  - thinking about one's own thinking\n  \
                  actionable     - concrete intentions and plans\n\n\
                  Without an NLP API key, scoring falls back to surface patterns\n\
                  and every KPI is capped at 5."
)]
struct Args {
    /// Text to score
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Title of the reflection (context only)
    #[arg(long, default_value = "")]
    title: String,

    /// Category of the reflection (context only)
    #[arg(long)]
    category: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides config)
    #[arg(long)]
    addr: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show metric breakdown and debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(if args.verbose { "reflectify=debug" } else { "warn" });
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Config error:".red(), e);
            std::process::exit(2);
        }
    };
    let scorer = ReflectionScorer::from_config(&config.nlp);

    if args.serve {
        let addr = args.addr.clone().unwrap_or(config.server.addr);
        if let Err(e) = run_server(&addr, scorer).await {
            eprintln!("{} {}", "Server error:".red(), e);
            std::process::exit(1);
        }
        return;
    }

    let content = match read_input(&args) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{} {}", "Input error:".red(), e);
            std::process::exit(1);
        }
    };

    let output = scorer
        .score_reflection(&content, &args.title, args.category.as_deref())
        .await;

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", "Serialization error:".red(), e);
                std::process::exit(1);
            }
        }
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        print_scores(&output);
        if args.verbose {
            if let Some(breakdown) = &output.breakdown {
                print_breakdown(breakdown);
            }
        }
    }
}

/// --text, then --file, then stdin
fn read_input(args: &Args) -> io::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Colored KPI bars
fn print_scores(output: &ScoreOutput) {
    let tier_color = output.tier.color();
    println!(
        "{} {}",
        "Reflectify".bold(),
        format!("v{}", VERSION).dimmed()
    );
    println!();
    for (name, value) in [
        ("depth", output.kpis.depth),
        ("coherence", output.kpis.coherence),
        ("metacognition", output.kpis.metacognition),
        ("actionable", output.kpis.actionable),
    ] {
        let bar = "█".repeat(value as usize) + &"░".repeat(10 - value as usize);
        println!("  {:<14} {} {:>2}", name, bar.color(kpi_color(value)), value);
    }
    println!();
    println!("  level:    {}", output.reflection_level.to_string().bold());
    println!(
        "  tier:     {} ({})",
        output.tier.to_string().color(tier_color),
        output.reason.code().dimmed()
    );
    println!("  language: {}", output.language_variant);
    if output.text_too_short {
        println!("  {}", "text too short for full analysis, scores capped at 2".yellow());
    }
}

fn kpi_color(value: u8) -> &'static str {
    match value {
        8..=10 => "green",
        5..=7 => "yellow",
        _ => "red",
    }
}

/// Sub-signals behind each KPI
fn print_breakdown(b: &MetricBreakdown) {
    println!();
    println!("  {}", "coherence".bold());
    println!("    lexical:             {:.4} (w=0.35)", b.coherence.lexical);
    println!("    referential:         {:.4} (w=0.25)", b.coherence.referential);
    println!("    connective:          {:.4} (w=0.30)", b.coherence.connective);
    println!("    paragraph:           {:.4} (w=0.10)", b.coherence.paragraph);
    println!("  {}", "depth".bold());
    println!("    lexical:             {:.4} (w=0.25)", b.depth.lexical);
    println!("    syntactic:           {:.4} (w=0.20)", b.depth.syntactic);
    println!("    semantic:            {:.4} (w=0.30)", b.depth.semantic);
    println!("    elaboration:         {:.4} (w=0.25)", b.depth.elaboration);
    println!("  {}", "metacognition".bold());
    println!("    self_reference:      {:.4} (w=0.35)", b.metacognition.self_reference);
    println!("    cognitive_process:   {:.4} (w=0.25)", b.metacognition.cognitive_process);
    println!("    knowledge:           {:.4} (w=0.20)", b.metacognition.knowledge_regulation);
    println!("    entity_based:        {:.4} (w=0.10)", b.metacognition.entity_based);
    println!("    complexity:          {:.4} (w=0.10)", b.metacognition.sentence_complexity);
    println!("  {}", "actionable".bold());
    println!("    weighted_matches:    {:.2}", b.actionable.weighted_matches);
    println!("    density:             {:.4}", b.actionable.density);
    println!("    verb_density:        {:.4}", b.actionable.verb_density);
    println!("    context_bonus:       {:.2}", b.actionable.context_bonus);
}
