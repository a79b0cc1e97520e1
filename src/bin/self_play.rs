//! Self-play driver: two AI players, one board, printed result.
//!
//! ```text
//! self-play --topology hex --size 11 --black capture-most --white random --seed 7
//! RUST_LOG=rust_reversi=debug self-play --topology square --size 8 --games 50
//! ```

use clap::{Parser, ValueEnum};
use rustc_hash::FxHashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_reversi::{
    AiPlayer, AnyOpenSpace, CaptureMost, Color, Coordinate, GameConfig, GameRng,
    Geometry, Hex, Outcome, PreferCorners, PreferEdges, Result, Reversi, Session, Square,
    Strategy, TextView, Topology,
};

/// Play AI against AI and print the final board.
#[derive(Parser, Debug)]
#[command(name = "self-play")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board shape (hex or square)
    #[arg(short, long, default_value = "hex")]
    topology: Topology,

    /// Side length (odd and > 4 for hex, even and >= 4 for square)
    #[arg(short, long, default_value_t = 11)]
    size: usize,

    /// Strategy for black
    #[arg(long, value_enum, default_value_t = StrategyKind::CaptureMost)]
    black: StrategyKind,

    /// Strategy for white
    #[arg(long, value_enum, default_value_t = StrategyKind::CaptureMost)]
    white: StrategyKind,

    /// Seed for randomized strategies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play; boards are only printed for a single game
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Turn limit per game
    #[arg(long, default_value_t = 10_000)]
    max_turns: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    CaptureMost,
    Corners,
    Edges,
    Random,
}

fn strategy<C: Coordinate>(kind: StrategyKind, rng: &mut GameRng) -> Box<dyn Strategy<C>> {
    match kind {
        StrategyKind::CaptureMost => Box::new(CaptureMost),
        StrategyKind::Corners => Box::new(PreferCorners::default()),
        StrategyKind::Edges => Box::new(PreferEdges::default()),
        StrategyKind::Random => Box::new(AnyOpenSpace::from_rng(rng.fork())),
    }
}

fn play<G: Geometry>(args: &Args, config: &GameConfig, rng: &mut GameRng) -> Result<Outcome> {
    let game = Reversi::<G>::from_config(config)?;
    let black = AiPlayer::new(Color::Black, strategy::<G::Coord>(args.black, rng));
    let white = AiPlayer::new(Color::White, strategy::<G::Coord>(args.white, rng));

    let mut session = Session::new(game, black, white)?;
    let outcome = session.run(args.max_turns)?;

    if args.games == 1 {
        let view = TextView::new(session.game());
        println!("{view}");
        println!("{}", view.status());
    }
    Ok(outcome)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = GameConfig::new(args.topology, args.size);
    config.validate()?;

    let mut rng = GameRng::new(args.seed);
    let mut tally: FxHashMap<Outcome, usize> = FxHashMap::default();

    for round in 0..args.games {
        let outcome = match config.topology {
            Topology::Hex => play::<Hex>(&args, &config, &mut rng)?,
            Topology::Square => play::<Square>(&args, &config, &mut rng)?,
        };
        info!(round, ?outcome, "game finished");
        *tally.entry(outcome).or_default() += 1;
    }

    if args.games > 1 {
        let count = |outcome: Outcome| tally.get(&outcome).copied().unwrap_or(0);
        println!(
            "{} games on a {} board of size {}: black {}, white {}, draws {}",
            args.games,
            config.topology,
            config.side_length,
            count(Outcome::Winner(Color::Black)),
            count(Outcome::Winner(Color::White)),
            count(Outcome::Draw),
        );
    }
    Ok(())
}
