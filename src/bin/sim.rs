use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use toddler_games::{run_session, AiPlayer, Session, Variant};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <colors|counting|shapes> <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let variant = Variant::from_name(&args[1])
        .ok_or_else(|| anyhow::anyhow!("unknown variant: {}", args[1]))?;
    let seed: u64 = args[2].parse()?;
    let rounds: u32 = args[3].parse()?;

    let engine = variant.engine().map_err(|e| anyhow::anyhow!(e))?;
    let mut session = Session::new(engine, SmallRng::seed_from_u64(seed));
    let mut player = AiPlayer::seeded(seed.wrapping_add(1));

    let records = run_session(&mut session, &mut player, Some(rounds));

    let result = json!({
        "variant": variant,
        "seed": seed,
        "rounds": records,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
