use std::io;
use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use rand::Rng;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::config::Speed;
use crate::display::Display;
use crate::events::Event;
use crate::events::EventSource;
use crate::grid::Grid;
use crate::seed;
use crate::world::World;

const WELCOME: &str = "\
Welcome to the game of Life, a simulation of the lifecycle of a bacteria colony.
Cells live and die by the following rules:

\tA cell with 1 or fewer neighbors dies of loneliness
\tLocations with 2 neighbors remain stable
\tLocations with 3 neighbors will spontaneously create life
\tLocations with 4 or more neighbors die of overcrowding

In the animation, new cells are dark and fade to gray as they age.
";

const ANIMATION_HELP: &str = "Press q, Esc or click to stop. Press space to pause.";

/// Line based conversation with the user
pub trait Prompt {
    /// Show a message
    fn say(&mut self, message: &str) -> io::Result<()>;

    /// Ask a question and wait for a line of input. Returns `None` once input has run out.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn say(&mut self, message: &str) -> io::Result<()> {
        (**self).say(message)
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        (**self).ask(question)
    }
}

/// Where the driver is at
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    /// Choosing the first generation of a run
    Seeding,

    /// Choosing how fast to run
    SpeedSelect,

    /// Animating on a timer
    Running(Duration),

    /// Advancing one generation per confirmation
    Stepping,

    /// A run ended. Asking whether to start another.
    Stopped,

    Done,
}

/// What happened over all runs
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Number of colonies seeded
    pub runs: usize,

    /// Generations computed, over all runs
    pub generations: u64,
}

/// Runs colonies one after another, talking to the user in between.
pub struct Driver<D, P, E, R> {
    config: Config,
    display: D,
    prompt: P,
    events: E,
    rng: R,
    world: World,
    summary: RunSummary,
}

impl<D, P, E, R> Driver<D, P, E, R>
where
    D: Display,
    P: Prompt,
    E: EventSource,
    R: Rng,
{
    pub fn new(config: Config, display: D, prompt: P, events: E, rng: R) -> Self {
        Self {
            config,
            display,
            prompt,
            events,
            rng,
            world: World::default(),
            summary: RunSummary::default(),
        }
    }

    /// The colony of the latest run
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run colonies until the user has had enough
    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        self.prompt.say(WELCOME)?;

        let mut phase = Phase::Seeding;

        loop {
            debug!(?phase, "entering phase");

            phase = match phase {
                Phase::Seeding => self.seed()?,
                Phase::SpeedSelect => self.select_speed()?,
                Phase::Running(interval) => self.animate(interval)?,
                Phase::Stepping => self.step()?,
                Phase::Stopped => self.again()?,
                Phase::Done => break,
            };
        }

        info!(
            runs = self.summary.runs,
            generations = self.summary.generations,
            "done"
        );

        Ok(self.summary)
    }

    fn seed(&mut self) -> anyhow::Result<Phase> {
        let Some(grid) = self.choose_seed()? else {
            return Ok(Phase::Done);
        };

        info!(
            rows = grid.num_rows(),
            cols = grid.num_cols(),
            population = grid.population(),
            "new colony"
        );

        self.world.replace(grid);
        self.world
            .draw(&mut self.display)
            .context("Failed to draw the colony")?;
        self.summary.runs += 1;

        Ok(Phase::SpeedSelect)
    }

    /// Pick the first generation, either from a file or at random
    fn choose_seed(&mut self) -> anyhow::Result<Option<Grid>> {
        // A file given up front is only used for the first run
        if let Some(path) = self.config.file.take() {
            match seed::load_colony(&path) {
                Ok(grid) => return Ok(Some(grid)),
                Err(e) => {
                    warn!("{e}");
                    self.prompt.say(&format!("{e}. Please select another file."))?;
                }
            }
        }

        self.prompt
            .say("You can start your colony with random cells or read from a prepared file.")?;

        loop {
            let Some(answer) = self
                .prompt
                .ask("Enter name of colony file (or RETURN to seed randomly): ")?
            else {
                return Ok(None);
            };

            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(self.config.seed.generate(&mut self.rng)));
            }

            match seed::load_colony(Path::new(answer)) {
                Ok(grid) => return Ok(Some(grid)),
                Err(e) => {
                    warn!("{e}");
                    self.prompt.say(&format!("{e}. Please select another file."))?;
                }
            }
        }
    }

    fn select_speed(&mut self) -> anyhow::Result<Phase> {
        let speed = match self.config.speed {
            Some(speed) => speed,
            None => match self.ask_speed()? {
                Some(speed) => speed,
                None => return Ok(Phase::Done),
            },
        };

        debug!(?speed, "speed selected");

        match speed.interval() {
            Some(interval) => Ok(Phase::Running(interval)),
            None => Ok(Phase::Stepping),
        }
    }

    fn ask_speed(&mut self) -> anyhow::Result<Option<Speed>> {
        self.prompt.say("You choose how fast to run the simulation.")?;
        for (i, (_, text)) in Speed::MENU.iter().enumerate() {
            self.prompt.say(&format!("\t{} = {text}", i + 1))?;
        }

        loop {
            let Some(answer) = self.prompt.ask("Your choice: ")? else {
                return Ok(None);
            };

            let speed = answer.trim().parse().ok().and_then(Speed::from_choice);
            if let Some(speed) = speed {
                return Ok(Some(speed));
            }

            self.prompt.say("Please enter a number between 1 and 4!")?;
        }
    }

    /// Animate until the user stops it. Stopping is only noticed between two generations.
    fn animate(&mut self, interval: Duration) -> anyhow::Result<Phase> {
        self.prompt.say(ANIMATION_HELP)?;
        self.events.begin()?;

        let res = self.animate_until_stopped(interval);

        // Put the terminal back before reporting anything
        self.events.end()?;
        res?;

        Ok(Phase::Stopped)
    }

    fn animate_until_stopped(&mut self, interval: Duration) -> anyhow::Result<()> {
        let start = self.world.generation();
        let mut paused = false;
        let mut last = Instant::now();

        loop {
            let time_left = interval.saturating_sub(last.elapsed());

            match self.events.wait(time_left)? {
                Some(Event::Stop) => break,
                Some(Event::TogglePause) => {
                    paused = !paused;
                    debug!(paused, "toggled pause");
                }
                Some(Event::Resize { cols, rows }) => {
                    self.display.set_viewport(cols, rows);
                    self.world.draw(&mut self.display)?;
                }
                None => {
                    if !paused {
                        self.advance()?;
                    }

                    last = Instant::now();
                }
            }
        }

        debug!(
            generations = self.world.generation() - start,
            "animation stopped"
        );

        Ok(())
    }

    fn step(&mut self) -> anyhow::Result<Phase> {
        loop {
            let answer = self
                .prompt
                .ask("Please return to advance [or type out \"quit\" to end]: ")?;

            match answer.as_deref().map(str::trim) {
                None | Some("quit") => break,
                Some(_) => self.advance()?,
            }
        }

        Ok(Phase::Stopped)
    }

    fn advance(&mut self) -> anyhow::Result<()> {
        self.world
            .advance(&mut self.display)
            .context("Failed to draw the colony")?;
        self.summary.generations += 1;

        Ok(())
    }

    fn again(&mut self) -> anyhow::Result<Phase> {
        loop {
            let Some(answer) = self.prompt.ask("Would you like to run another? ")? else {
                return Ok(Phase::Done);
            };

            match answer.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" => return Ok(Phase::Seeding),
                "no" | "n" => return Ok(Phase::Done),
                _ => self.prompt.say("Please enter \"yes\" or \"no\".")?,
            }
        }
    }
}
