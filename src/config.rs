use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::cell;
use crate::cell::Age;
use crate::seed::RandomSeed;
use crate::seed::SeedError;

/// How fast an animation runs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Speed {
    /// As fast as this chip can go
    Fast,

    /// Not too fast, this is a school zone
    Moderate,

    /// Nice and slow so every change can be watched
    Slow,

    /// Advance only when asked to
    Manual,
}

impl Speed {
    /// Every speed along with its menu entry, in menu order
    pub const MENU: [(Speed, &'static str); 4] = [
        (Speed::Fast, "As fast as this chip can go!"),
        (Speed::Moderate, "Not too fast, this is a school zone."),
        (Speed::Slow, "Nice and slow so I can watch everything that happens."),
        (
            Speed::Manual,
            "Require enter key be pressed before advancing to next generation.",
        ),
    ];

    /// Look up a speed by its menu number, starting at 1
    pub fn from_choice(choice: u8) -> Option<Self> {
        let i = usize::from(choice).checked_sub(1)?;

        Self::MENU.get(i).map(|&(speed, _)| speed)
    }

    /// Time between two generations. `None` when generations are advanced by hand.
    pub const fn interval(self) -> Option<Duration> {
        match self {
            Speed::Fast => Some(Duration::from_millis(10)),
            Speed::Moderate => Some(Duration::from_millis(100)),
            Speed::Slow => Some(Duration::from_millis(1000)),
            Speed::Manual => None,
        }
    }
}

/// Simulate the life cycle of a bacteria colony
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Colony file to start the first run from, instead of asking
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Animation speed, as numbered in the speed menu (1-4), instead of asking
    #[arg(short, long)]
    pub speed: Option<u8>,

    /// Seed for the random number generator, for repeatable colonies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest number of rows and columns of a random colony
    #[arg(long, default_value_t = 40)]
    pub min_size: usize,

    /// Largest number of rows and columns of a random colony
    #[arg(long, default_value_t = 60)]
    pub max_size: usize,

    /// Chance of any location of a random colony starting with a cell
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Age at which cells are shown fully faded
    #[arg(long, default_value_t = cell::MAX_AGE)]
    pub max_age: Age,

    /// Draw with plain characters instead of colors
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid random seeding: {0}")]
    Seed(#[from] SeedError),

    #[error("Speed must be a number between 1 and 4, got {0}")]
    Speed(u8),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// How random colonies are seeded
    pub seed: RandomSeed,

    /// Age at which cells are shown fully faded
    pub max_age: Age,

    /// Speed of every run. Asked for before each run if unset.
    pub speed: Option<Speed>,

    /// Colony file of the first run. Asked for if unset.
    pub file: Option<PathBuf>,

    /// Seed of the random number generator
    pub rng_seed: Option<u64>,

    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: RandomSeed::default(),
            max_age: cell::MAX_AGE,
            speed: None,
            file: None,
            rng_seed: None,
            plain: false,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let size = args.min_size..=args.max_size;
        let seed = RandomSeed::new(size.clone(), size, args.density, args.max_age)?;

        let speed = match args.speed {
            Some(choice) => Some(Speed::from_choice(choice).ok_or(ConfigError::Speed(choice))?),
            None => None,
        };

        Ok(Self {
            seed,
            max_age: args.max_age,
            speed,
            file: args.file.clone(),
            rng_seed: args.seed,
            plain: args.plain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_choices() {
        assert_eq!(Speed::from_choice(0), None);
        assert_eq!(Speed::from_choice(1), Some(Speed::Fast));
        assert_eq!(Speed::from_choice(4), Some(Speed::Manual));
        assert_eq!(Speed::from_choice(5), None);
    }

    #[test]
    fn test_speed_intervals() {
        assert_eq!(Speed::Fast.interval(), Some(Duration::from_millis(10)));
        assert_eq!(Speed::Slow.interval(), Some(Duration::from_secs(1)));
        assert_eq!(Speed::Manual.interval(), None);
    }

    #[test]
    fn test_default_args_match_default_config() {
        let args = Args::parse_from(["colony"]);
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from([
            "colony",
            "--file",
            "glider",
            "--speed",
            "2",
            "--seed",
            "9",
            "--min-size",
            "5",
            "--max-size",
            "8",
        ]);
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.speed, Some(Speed::Moderate));
        assert_eq!(config.file, Some(PathBuf::from("glider")));
        assert_eq!(config.rng_seed, Some(9));
        assert_eq!(
            config.seed,
            RandomSeed::new(5..=8, 5..=8, 0.5, cell::MAX_AGE).unwrap()
        );
    }

    #[test]
    fn test_invalid_args() {
        let args = Args::parse_from(["colony", "--speed", "7"]);
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::Speed(7))
        ));

        let args = Args::parse_from(["colony", "--min-size", "9", "--max-size", "3"]);
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::Seed(SeedError::EmptyRange { .. }))
        ));

        let args = Args::parse_from(["colony", "--density", "2"]);
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::Seed(SeedError::Density(_)))
        ));

        let args = Args::parse_from([
            "colony",
            "--min-size",
            "5000000000",
            "--max-size",
            "5000000000",
        ]);
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::Seed(SeedError::TooLarge { .. }))
        ));
    }
}
