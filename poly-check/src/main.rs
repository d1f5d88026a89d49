use clap::Parser;
use poly::{Polynomial, Root};

mod checks;
mod settings;

use crate::settings::{error, Settings};

fn main() -> std::io::Result<()> {
    let settings = Settings::parse();

    if settings.verbose > 0 {
        tracing_subscriber::fmt::fmt()
            .with_writer(std::io::stderr)
            .init();
        log::set_max_level(if settings.verbose > 1 {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Debug
        });
    }

    if let Some(ref input) = settings.polynomial {
        let root = solve(input, &settings)?;
        if settings.json {
            println!("{}", serde_json::to_string(&root)?);
        } else {
            println!(
                "x = {} after {} iterations (|p(x)| = {})",
                root.x, root.iterations, root.residual
            );
        }
        Ok(())
    } else {
        run_checks(&settings)
    }
}

fn solve(input: &str, settings: &Settings) -> std::io::Result<Root> {
    let polynomial: Polynomial = input.parse().map_err(|e: poly::Error| {
        log::error!("[solve] {e}");
        error(&e.to_string())
    })?;
    log::info!("Solving {polynomial} from x = {}", settings.b);

    poly::find_root_report(
        &polynomial,
        settings.a,
        settings.b,
        settings.epsilon,
        settings.max_iterations,
    )
    .map_err(|e| {
        log::error!("[solve] {e}");
        error(&e.to_string())
    })
}

fn run_checks(settings: &Settings) -> std::io::Result<()> {
    if !settings.json {
        println!("Starting polynomial test!");
    }
    let polynomial = checks::check_polynomial(settings.epsilon, settings.max_iterations)
        .map_err(|e| {
            log::error!("[polynomial] {e}");
            error(&e)
        })?;
    if !settings.json {
        println!("Test polynomial finished successfully!");
        println!("Start matrix test");
    }

    let matrix = checks::check_matrix().map_err(|e| {
        log::error!("[matrix] {e}");
        error(&e)
    })?;
    if settings.json {
        let report = checks::Report { polynomial, matrix };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", matrix.rendered);
        println!("Test matrix finished successfully!");
    }
    Ok(())
}
