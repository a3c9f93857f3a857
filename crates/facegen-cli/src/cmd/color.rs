// crates/facegen-cli/src/cmd/color.rs

use clap::Args;
use facegen_core::color::{parse_color, ColorValue};
use tracing::warn;

#[derive(Args)]
pub struct ColorArgs {
    /// Color value: rgb(..), rgba(..), #XXXXXX, or bare hex
    pub value: String,

    /// Treat VALUE as a decimal packed 0xBBGGRR integer
    #[arg(long)]
    pub packed: bool,
}

pub fn run(args: ColorArgs) -> anyhow::Result<()> {
    let input = if args.packed {
        let v: i64 = args
            .value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("--packed expects a decimal integer: {e}"))?;
        ColorValue::Packed(v)
    } else {
        ColorValue::Text(args.value.clone())
    };

    let Some(c) = parse_color(&input, |msg| warn!("{msg}")) else {
        anyhow::bail!("unrecognized color: {}", args.value);
    };

    let [r, g, b] = c.to_srgb();
    println!("linear     = {:.6} {:.6} {:.6}", c.red, c.green, c.blue);
    if let Some(a) = c.alpha {
        println!("alpha      = {a}");
    }
    println!("display    = {r} {g} {b}");
    println!("lightness  = {:.6}", c.lightness());
    Ok(())
}
