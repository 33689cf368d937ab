use std::path::PathBuf;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;

use pushing_machine_solver::config::{Format, Indexing};
use pushing_machine_solver::packs;
use pushing_machine_solver::solution_formatter::SolutionFormatter;
use pushing_machine_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("pushing-machine-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the shortest sequence of taps for Pushing Machine puzzles")
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("parse as one character per cell"),
        )
        .arg(
            Arg::with_name("sections")
                .short("s")
                .long("sections")
                .help("parse as target and maze sections (detected automatically by default)"),
        )
        .group(ArgGroup::with_name("format").arg("compact").arg("sections"))
        .arg(
            Arg::with_name("pack")
                .short("p")
                .long("pack")
                .takes_value(true)
                .requires("puzzle")
                .help("pack number (starting from 1) or name"),
        )
        .arg(
            Arg::with_name("puzzle")
                .short("n")
                .long("puzzle")
                .takes_value(true)
                .requires("pack")
                .help("puzzle number inside the pack"),
        )
        .arg(
            Arg::with_name("levels-dir")
                .long("levels-dir")
                .takes_value(true)
                .default_value("levels")
                .help("directory with one subdirectory per pack"),
        )
        .arg(
            Arg::with_name("zero-based")
                .short("z")
                .long("zero-based")
                .help("print rows and columns starting from 0"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("only print the solution"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the board after every tap"),
        )
        .arg(
            Arg::with_name("file")
                .required_unless("pack")
                .conflicts_with_all(&["pack", "puzzle"]),
        )
        .get_matches();

    let format = if matches.is_present("compact") {
        Some(Format::Compact)
    } else if matches.is_present("sections") {
        Some(Format::Sections)
    } else {
        None
    };
    let indexing = if matches.is_present("zero-based") {
        Indexing::ZeroBased
    } else {
        Indexing::OneBased
    };
    let quiet = matches.is_present("quiet");
    let steps = matches.is_present("steps");

    let path = level_path(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    debug!("Level path: {}", path.display());

    let loaded = match format {
        Some(format) => path.load_level_format(format),
        None => path.load_level(),
    };
    let level = loaded.unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path.display(), err);
        process::exit(1);
    });

    if !quiet {
        println!("Solving {}...", path.display());
    }
    let solver_ok = level.solve(!quiet);
    if !quiet {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.taps {
        Some(taps) => print!("{}", SolutionFormatter::new(&level, &taps, indexing, steps)),
        None => {
            eprintln!("Unable to solve the given puzzle");
            process::exit(1);
        }
    }
}

fn level_path(matches: &ArgMatches<'_>) -> Result<PathBuf, String> {
    if let Some(file) = matches.value_of("file") {
        return Ok(PathBuf::from(file));
    }

    // clap makes sure pack and puzzle are present together
    let pack = matches.value_of("pack").unwrap_or_default();
    let puzzle = matches.value_of("puzzle").unwrap_or_default();
    let pack_name = packs::pack_name(pack).ok_or_else(|| format!("Unknown pack: {}", pack))?;
    let puzzle = puzzle
        .parse::<u32>()
        .map_err(|err| format!("Invalid puzzle number {}: {}", puzzle, err))?;
    let levels_dir = matches.value_of("levels-dir").unwrap_or("levels");
    Ok(packs::puzzle_path(levels_dir, pack_name, puzzle))
}
