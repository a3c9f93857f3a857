// crates/facegen-cli/src/cmd/catalog.rs

use clap::{Args, Subcommand};
use facegen_core::catalog::fingerprint::catalog_id_hex;
use facegen_core::validate::validate_catalog;
use facegen_core::{Catalog, Gender, Target};

use crate::io::{catalog_file, settings_file};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub cmd: CatalogCmd,
}

#[derive(Subcommand)]
pub enum CatalogCmd {
    /// Print per-gender counts, the catalog id, and the validation verdict
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Raw catalog JSON
    #[arg(long)]
    pub catalog: String,

    /// Settings JSON (for required head parts)
    #[arg(long)]
    pub settings: Option<String>,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    match args.cmd {
        CatalogCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let settings = settings_file::load_settings(a.settings.as_deref())?;
    let (cat, report) = catalog_file::load_catalog(&a.catalog)?;

    println!("catalog_path   = {}", a.catalog);
    println!("catalog_id     = {}", catalog_id_hex(&cat)?);
    println!("tints_kept     = {}", report.tints_kept);
    println!("unclassified   = {}", report.unclassified);
    println!("colors_dropped = {}", report.colors_dropped);

    for g in [Gender::Male, Gender::Female] {
        print_gender(&cat, g);
    }

    println!();
    println!("--- validation ---");
    match validate_catalog(&cat, &settings.required_head_parts) {
        Ok(()) => println!("OK"),
        Err(e) => println!("FAIL: {e}"),
    }
    if report.unclassified > 0 {
        println!("WARN: {} tint records matched no target and were dropped.", report.unclassified);
    }

    Ok(())
}

fn print_gender(cat: &Catalog, g: Gender) {
    let gc = cat.gender(g);
    println!();
    println!("[{g:?}]");
    for t in Target::ALL {
        println!("tints.{:<16} = {}", format!("{t:?}"), gc.tints(t).len());
    }
    println!("skin_swatches          = {}", gc.skin_swatches().len());
    for (category, parts) in &gc.head_parts {
        println!("head_parts.{:<11} = {}", category, parts.len());
    }
    println!("hair_colors            = {}", gc.hair_colors.len());
    println!("morphs                 = {}", gc.morphs.len());
}
