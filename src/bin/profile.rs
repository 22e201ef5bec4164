use mazecore::{app::App, generators::Generator, solvers::Solver};

fn main() -> mazecore::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let app = App::default();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    let (generate, solve) = app.profile(1001, 1001, Generator::Prim, Solver::Bfs, num_iters)?;
    println!("mean generate: {:?}, mean solve: {:?}", generate, solve);
    Ok(())
}
