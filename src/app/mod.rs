pub mod cli;
pub mod renderer;

use std::{io::Write, time::Duration};

use crate::{
    app::{
        cli::{Command, GenerateArgs, OutputFormat},
        renderer::Renderer,
    },
    error::Result,
    generators::{
        GeneratedMaze, Generator, SelectionPolicy, generate_growing_tree, generate_maze_with,
        get_rng,
    },
    maze::Position,
    solvers::{SearchResult, Solver, solve_maze},
};

pub struct App {
    /// Grid size used when the command line gives none
    default_dims: (usize, usize),
    /// Generator used when the command line gives none
    default_generator: Generator,
    /// Generate+solve rounds per profiling run when no count is given
    default_profile_iterations: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            default_dims: (31, 21),
            default_generator: Generator::RecurBacktrack,
            default_profile_iterations: 10,
        }
    }
}

/// Everything one `generate` invocation produced.
#[derive(Debug)]
pub struct Outcome {
    pub maze: GeneratedMaze,
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub solutions: Vec<(Solver, SearchResult)>,
}

impl App {
    pub fn run<W: Write>(&self, command: &Command, out: W) -> Result<()> {
        match command {
            Command::List => self.list(out),
            Command::Generate(args) => {
                let outcome = self.generate(args)?;
                App::report(&outcome, args.format, out)
            }
        }
    }

    /// Prints the generator and solver registries.
    pub fn list<W: Write>(&self, out: W) -> Result<()> {
        let mut renderer = Renderer::new(out);
        renderer.heading("Generators")?;
        for generator in Generator::ALL {
            renderer.line(format_args!(
                "  {:<20} {:<32} {}",
                generator.id(),
                generator.to_string(),
                generator.description()
            ))?;
        }
        renderer.heading("Solvers")?;
        for solver in Solver::ALL {
            renderer.line(format_args!(
                "  {:<20} {:<32} {}",
                solver.id(),
                solver.to_string(),
                solver.description()
            ))?;
        }
        Ok(())
    }

    /// Generates a maze and runs every requested solver on it.
    pub fn generate(&self, args: &GenerateArgs) -> Result<Outcome> {
        let (width, height) = (
            args.width.unwrap_or(self.default_dims.0),
            args.height.unwrap_or(self.default_dims.1),
        );
        let generator = args.algorithm.unwrap_or(self.default_generator);
        let mut rng = get_rng(args.seed);

        let maze = match (generator, args.newest_weight) {
            (Generator::GrowingTree, Some(newest_weight)) => generate_growing_tree(
                width,
                height,
                SelectionPolicy::Mixed { newest_weight },
                &mut rng,
            )?,
            (_, Some(_)) => {
                tracing::warn!("[app] --newest-weight only applies to growing-tree, ignoring");
                generate_maze_with(generator, width, height, &mut rng)?
            }
            (_, None) => generate_maze_with(generator, width, height, &mut rng)?,
        };
        tracing::info!(
            "[app] generated {}x{} maze with {}",
            width,
            height,
            maze.algorithm_name()
        );

        let start = args.start.or_else(|| maze.grid.first_open());
        let goal = args.end.or_else(|| maze.grid.last_open());

        let mut solutions = Vec::new();
        let solvers = args.solve.map(|choice| choice.solvers()).unwrap_or_default();
        if !solvers.is_empty() {
            // A grid without open cells has no default endpoints; the origin is
            // then rejected as a blocked position
            let from = start.unwrap_or(Position::new(0, 0));
            let to = goal.unwrap_or(Position::new(0, 0));
            for solver in solvers {
                let result = solve_maze(&maze.grid, solver, from, to)?;
                tracing::info!(
                    "[app] {} found path: {}, visited {}",
                    solver,
                    result.found(),
                    result.visited_count()
                );
                solutions.push((solver, result));
            }
        }

        Ok(Outcome {
            maze,
            start,
            goal,
            solutions,
        })
    }

    /// Renders the grid followed by generation and search statistics.
    pub fn report<W: Write>(outcome: &Outcome, format: OutputFormat, out: W) -> Result<()> {
        let mut renderer = Renderer::new(out);
        let grid = &outcome.maze.grid;

        if format == OutputFormat::Raw {
            renderer.draw_raw(grid)?;
            return Ok(());
        }

        renderer.check_width(grid)?;
        // Draw the first route found; with several solvers the BFS one comes first
        let route = outcome
            .solutions
            .iter()
            .find(|(_, result)| result.found())
            .map(|(_, result)| result.path())
            .unwrap_or_default();
        let (start, goal) = if outcome.solutions.is_empty() {
            (None, None)
        } else {
            (outcome.start, outcome.goal)
        };
        renderer.draw(grid, route, start, goal)?;

        renderer.line(format_args!(
            "{} ({}x{}) generated in {:?}",
            outcome.maze.algorithm_name(),
            grid.width(),
            grid.height(),
            outcome.maze.elapsed
        ))?;
        for (solver, result) in &outcome.solutions {
            if result.found() {
                renderer.line(format_args!(
                    "{:<28} path {:>5} cells, visited {:>6}, {:?}",
                    solver.to_string(),
                    result.path_len(),
                    result.visited_count(),
                    result.elapsed()
                ))?;
            } else {
                renderer.line(format_args!(
                    "{:<28} no path, visited {:>6}, {:?}",
                    solver.to_string(),
                    result.visited_count(),
                    result.elapsed()
                ))?;
            }
        }
        Ok(())
    }

    /// Repeats generate+solve and reports the mean time of each half.
    pub fn profile(
        &self,
        width: usize,
        height: usize,
        generator: Generator,
        solver: Solver,
        iterations: Option<usize>,
    ) -> Result<(Duration, Duration)> {
        let iterations = iterations.unwrap_or(self.default_profile_iterations).max(1);
        let mut rng = get_rng(None);
        let mut generate_total = Duration::ZERO;
        let mut solve_total = Duration::ZERO;

        for round in 0..iterations {
            let maze = generate_maze_with(generator, width, height, &mut rng)?;
            generate_total += maze.elapsed;
            if let (Some(start), Some(goal)) = (maze.grid.first_open(), maze.grid.last_open()) {
                let result = solve_maze(&maze.grid, solver, start, goal)?;
                solve_total += result.elapsed();
            }
            tracing::debug!("[profile] round {} of {} done", round + 1, iterations);
        }

        let rounds = iterations as u32;
        let means = (generate_total / rounds, solve_total / rounds);
        tracing::info!(
            "[profile] {} + {} on {}x{}: generate {:?}, solve {:?} (mean of {})",
            generator,
            solver,
            width,
            height,
            means.0,
            means.1,
            iterations
        );
        Ok(means)
    }
}
