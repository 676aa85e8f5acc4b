#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use toddler_games::{init_logging, run_session, ui, AiPlayer, CliPlayer, Session, Variant};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a mini-game in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Variant::Colors)]
        variant: Variant,
        #[arg(long, help = "Fix RNG seed for reproducible rounds (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let a simulated player tap through a number of rounds.
    Auto {
        #[arg(long, value_enum, default_value_t = Variant::Colors)]
        variant: Variant,
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible rounds (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { variant, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (rounds will be reproducible)", s);
            }
            let engine = variant.engine().map_err(|e| anyhow::anyhow!(e))?;
            let mut session = Session::new(engine, make_rng(seed));
            let mut player = CliPlayer::new(variant);

            println!("Toddler Mini-Games: {}", variant.title());
            println!("{}", ui::TIP);
            let records = run_session(&mut session, &mut player, None);
            let solved = records.iter().filter(|r| r.solved).count();
            println!("\nThanks for playing! {} rounds, {} solved.", records.len(), solved);
        }
        Commands::Auto {
            variant,
            rounds,
            seed,
        } => {
            let engine = variant.engine().map_err(|e| anyhow::anyhow!(e))?;
            let mut session = Session::new(engine, make_rng(seed));
            let mut player = AiPlayer::new(make_rng(seed.map(|s| s.wrapping_add(1))));

            println!("{} (simulated player)", variant.title());
            let records = run_session(&mut session, &mut player, Some(rounds));
            for record in &records {
                let options: Vec<String> = record.options.iter().map(|k| k.to_string()).collect();
                println!(
                    "Round {:>3}: find {:<8} in [{}] -> {} tries",
                    record.round_number,
                    record.target.to_string(),
                    options.join(", "),
                    record.tries
                );
            }
        }
    }
    Ok(())
}
