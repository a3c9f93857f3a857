// crates/facegen-cli/src/cmd/generate.rs

use clap::Args;
use facegen_core::Generator;

use crate::io::{catalog_file, jsonl, settings_file};

#[derive(Args)]
pub struct GenerateArgs {
    /// Raw catalog JSON
    #[arg(long)]
    pub catalog: String,

    /// Character list JSON ([{id, gender, factions}])
    #[arg(long)]
    pub characters: String,

    /// Settings JSON; defaults apply when omitted
    #[arg(long)]
    pub settings: Option<String>,

    /// Override the global seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Override the foundation option (true/false)
    #[arg(long)]
    pub foundation: Option<bool>,

    /// Override the makeup option (true/false)
    #[arg(long)]
    pub makeup: Option<bool>,

    /// Output file path; if omitted, prints JSONL to stdout.
    #[arg(long)]
    pub output: Option<String>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let mut settings = settings_file::load_settings(args.settings.as_deref())?;
    if let Some(seed) = args.seed {
        settings.global_seed = seed;
    }
    if let Some(f) = args.foundation {
        settings.foundation = f;
    }
    if let Some(m) = args.makeup {
        settings.makeup = m;
    }

    let (catalog, _) = catalog_file::load_catalog(&args.catalog)?;
    let characters = settings_file::load_characters(&args.characters)?;

    // Catalog validation happens here, before any character is generated.
    let generator = Generator::new(&catalog, settings)?;

    let mut sink = jsonl::open_sink(args.output.as_deref())?;
    generator.run(&characters, &mut sink)?;
    sink.finish()
}
