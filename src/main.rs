//! epidoc - TEI EpiDoc inscription renderer

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use epidoc::{CitationLookup, Inscription, InscriptionRecord};

#[derive(Parser)]
#[command(name = "epidoc")]
#[command(version, about = "Render TEI EpiDoc inscriptions as Leiden+ text", long_about = None)]
#[command(after_help = "EXAMPLES:
    epidoc inscription.xml                   Render one inscription
    epidoc -b bibliography.xml *.xml         Resolve citations while rendering
    epidoc --json inscription.xml            Emit the record as JSON")]
struct Cli {
    /// Input TEI XML files
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// TEI listBibl document for citation resolution
    #[arg(short, long, value_name = "FILE")]
    bibliography: Option<String>,

    /// Language filter for the parallel sections
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Emit records as JSON instead of labeled text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let lookup = match &cli.bibliography {
        Some(path) => load_lookup(path, &cli.lang)?,
        None => CitationLookup::default(),
    };

    for (i, input) in cli.inputs.iter().enumerate() {
        let bytes = fs::read(input).map_err(|e| format!("{input}: {e}"))?;
        let inscription = Inscription::from_bytes(&bytes).map_err(|e| format!("{input}: {e}"))?;
        let record = inscription.render(&cli.lang, &lookup);

        if cli.json {
            let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
            println!("{json}");
        } else {
            if i > 0 {
                println!();
            }
            print_record(input, &record);
        }
    }

    Ok(())
}

fn load_lookup(path: &str, lang: &str) -> Result<CitationLookup, String> {
    let bytes = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
    let root = epidoc::dom::parse_bytes(&bytes).map_err(|e| format!("{path}: {e}"))?;
    Ok(CitationLookup::from_document(&root, lang))
}

fn print_record(path: &str, record: &InscriptionRecord) {
    let meta = &record.metadata;

    println!("File: {path}");
    if !meta.id.is_empty() {
        println!("Monument: {}", meta.id);
    }
    if !meta.title.is_empty() {
        println!("Title: {}", meta.title);
    }
    if !meta.editors.is_empty() {
        println!("Editors: {}", meta.editors.join(", "));
    }
    if let Some(ref object_type) = meta.object_type {
        println!("Type: {object_type}");
    }
    if let Some(ref material) = meta.material {
        println!("Material: {material}");
    }
    if let Some(ref origin) = meta.origin_place {
        println!("Origin: {origin}");
    }
    if let Some(ref date) = meta.date_text {
        println!("Date: {date}");
    }

    println!();
    println!("Edition:");
    println!("{}", record.edition);

    for (label, text) in [
        ("Translation", &record.translation),
        ("Apparatus", &record.apparatus),
        ("Commentary", &record.commentary),
        ("Bibliography", &record.bibliography),
    ] {
        if !text.is_empty() {
            println!();
            println!("{label}:");
            println!("{text}");
        }
    }
}
