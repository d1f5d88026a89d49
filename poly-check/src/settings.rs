use clap::Parser;

pub fn error(message: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    #[arg(short, long, default_value_t = 0.0001)]
    pub epsilon: f64,
    #[arg(short, long, default_value_t = poly::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,
    /// Polynomial to solve instead of running the checks: `[c0, c1, ...]`, JSON or RON
    #[arg(short, long)]
    pub polynomial: Option<String>,
    /// Lower end of the bracket, accepted but not used by the iteration
    #[arg(short, default_value_t = 0.0, allow_hyphen_values = true)]
    pub a: f64,
    /// Starting point of the iteration
    #[arg(short, default_value_t = 1.0, allow_hyphen_values = true)]
    pub b: f64,
    #[arg(short, long)]
    pub json: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
