use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hoppers_game::cli::{Cli, Command};
use hoppers_game::{run_interactive, run_selfplay, GameConfig, GameController};

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，不干扰棋盘打印）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("hoppers_game=info".parse()?))
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load(cli.config.as_deref());
    let mut game = GameController::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    info!("Hoppers 启动");

    match cli.command {
        Command::Selfplay { depth, max_turns } => {
            if let Some(depth) = depth {
                config.ai = config.ai.with_depth(depth);
            }
            if let Some(max_turns) = max_turns {
                config.max_turns = max_turns;
            }
            run_selfplay(&mut game, &config, &mut out)?;
        }
        Command::Play { human, depth } => {
            if let Some(human) = human {
                config.human_side = human.into();
            }
            if let Some(depth) = depth {
                config.ai = config.ai.with_depth(depth);
            }
            let stdin = std::io::stdin();
            run_interactive(&mut game, &config, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
