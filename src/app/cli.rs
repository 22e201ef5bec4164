//! Command-line arguments for generating and solving mazes

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    error::MazeError,
    generators::Generator,
    maze::Position,
    solvers::Solver,
};

#[derive(Parser, Debug)]
#[command(name = "mazecore")]
#[command(author, version, about = "Generate and solve grid mazes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum level written to the log file
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,

    /// Directory the log file is written to
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available generators and solvers
    List,
    /// Generate a maze, optionally solve it, and print it
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Generator id (see `list`)
    #[arg(short, long)]
    pub algorithm: Option<Generator>,

    /// Grid width in cells, walls included
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Grid height in cells, walls included
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Probability of extending the newest cell (growing-tree only)
    #[arg(long)]
    pub newest_weight: Option<f64>,

    /// Solver id, or `all` to compare every solver
    #[arg(long)]
    pub solve: Option<SolveChoice>,

    /// Start position as `x,y`
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// Goal position as `x,y`
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled cells with the route drawn in
    #[default]
    Pretty,
    /// Rows of 0 (empty) and 1 (wall)
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveChoice {
    One(Solver),
    All,
}

impl SolveChoice {
    pub fn solvers(self) -> Vec<Solver> {
        match self {
            SolveChoice::One(solver) => vec![solver],
            SolveChoice::All => Solver::ALL.to_vec(),
        }
    }
}

impl FromStr for SolveChoice {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SolveChoice::All);
        }
        s.parse().map(SolveChoice::One)
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x = x.trim().parse::<usize>().map_err(|e| format!("bad x: {}", e))?;
    let y = y.trim().parse::<usize>().map_err(|e| format!("bad y: {}", e))?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_command() {
        let cli = Cli::try_parse_from([
            "mazecore",
            "generate",
            "--algorithm",
            "wilson",
            "-W",
            "21",
            "-H",
            "11",
            "--seed",
            "7",
            "--solve",
            "all",
            "--start",
            "1,1",
            "--format",
            "raw",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.algorithm, Some(Generator::Wilson));
        assert_eq!((args.width, args.height), (Some(21), Some(11)));
        assert_eq!(args.solve, Some(SolveChoice::All));
        assert_eq!(args.start, Some(Position::new(1, 1)));
        assert_eq!(args.end, None);
        assert_eq!(args.format, OutputFormat::Raw);
    }

    #[test]
    fn test_rejects_unknown_ids() {
        assert!(Cli::try_parse_from(["mazecore", "generate", "-a", "maze-o-matic"]).is_err());
        assert!(Cli::try_parse_from(["mazecore", "generate", "--solve", "bogo"]).is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3, 4"), Ok(Position::new(3, 4)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("-1,2").is_err());
    }
}
