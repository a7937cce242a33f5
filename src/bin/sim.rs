use salvo::{sim::simulate, GameConfig};

fn main() -> anyhow::Result<()> {
    salvo::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let summary = simulate(GameConfig::default(), seed)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
