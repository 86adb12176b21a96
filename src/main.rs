//! Plays one game of Isolation between two configured agents, or an agent and a random player.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use isolation_agent::board::MoveRule;
use isolation_agent::bot_prelude::*;
use isolation_agent::core::{GameState, Player};
use isolation_agent::tools::timer::Timer;
use isolation_agent::Board;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// How players move: "king" or "knight"
    #[arg(long, default_value = "king")]
    rule: MoveRule,

    /// Milliseconds each player gets per turn
    #[arg(long, default_value_t = 150)]
    turn_ms: i64,

    /// TOML agent configuration for player one
    #[arg(long)]
    one: Option<PathBuf>,

    /// TOML agent configuration for player two
    #[arg(long, conflicts_with = "random_two")]
    two: Option<PathBuf>,

    /// Let player two move at random
    #[arg(long)]
    random_two: bool,

    /// Seed for the random player
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

enum Contender {
    Agent(Agent),
    Random(RandomPlayer),
}

impl Contender {
    fn choose_move(&mut self, board: &Board, turn_ms: i64) -> isolation_agent::Move {
        let legal = board.active_moves();
        match self {
            Contender::Agent(agent) => {
                let timer = Timer::new(turn_ms);
                let mov = agent.choose_move(board, &legal, timer.provider());
                if timer.out_of_time() {
                    warn!("{} overran its turn", board.active_player());
                }
                mov
            }
            Contender::Random(random) => random.choose_move(&legal),
        }
    }
}

fn load_agent(path: Option<&PathBuf>) -> Result<Agent> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AgentConfig::from_toml_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => AgentConfig::default(),
    };
    let agent = Agent::new(config)?;
    debug!("agent configuration: {:?}", agent.config());
    Ok(agent)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .init();

    let mut board = Board::with_rule(args.width, args.height, args.rule)?;
    let mut one = Contender::Agent(load_agent(args.one.as_ref())?);
    let mut two = if args.random_two {
        Contender::Random(match args.seed {
            Some(seed) => RandomPlayer::seeded(seed),
            None => RandomPlayer::new(),
        })
    } else {
        Contender::Agent(load_agent(args.two.as_ref())?)
    };

    while !board.is_game_over() {
        let player = board.active_player();
        let contender = match player {
            Player::One => &mut one,
            Player::Two => &mut two,
        };
        let mov = contender.choose_move(&board, args.turn_ms);
        if mov.is_none() {
            info!("{} forfeits", player);
            break;
        }
        info!("{} plays {}", player, mov);
        board
            .apply_move(mov)
            .with_context(|| format!("{} chose an illegal move", player))?;
    }

    println!("{}", board);
    let loser = board.active_player();
    println!("{} wins after {} moves", loser.other_player(), board.moves_played());
    Ok(())
}
