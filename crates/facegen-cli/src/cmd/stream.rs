// crates/facegen-cli/src/cmd/stream.rs

use clap::Args;
use facegen_core::Stream;

#[derive(Args)]
pub struct StreamArgs {
    /// Character identifier
    #[arg(long)]
    pub id: String,

    /// Global seed
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Draws to print
    #[arg(long, default_value_t = 16)]
    pub count: usize,

    /// Reduce each draw modulo this value
    #[arg(long)]
    pub modulus: Option<u32>,
}

pub fn run(args: StreamArgs) -> anyhow::Result<()> {
    let mut s = Stream::seed(&args.id, args.seed);
    eprintln!("seed_state = {}", s.state());
    for _ in 0..args.count {
        let v = match args.modulus {
            Some(m) => s.next_below(m),
            None => s.next(),
        };
        println!("{v}");
    }
    Ok(())
}
