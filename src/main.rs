extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;
extern crate compilex;

use clap::{Arg, ArgMatches, App};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use compilex::compiler::driver::{self, Phase, GRAMMAR, SAMPLES};
use compilex::compiler::{lexer, state};

use std::io::BufRead;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tPhase: {}\n\tSample: {}\n\tInput: {}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        args.value_of("phase").unwrap_or("all"),
        args.value_of("sample").unwrap_or("None"),
        args.value_of("INPUT").unwrap_or("None")
    );

    if args.is_present("grammar") {
        println!("Grammar Rules (BNF):\n{}", GRAMMAR);
        return;
    }

    if args.is_present("list-samples") {
        for (idx, sample) in SAMPLES.iter().enumerate() {
            println!("{}: {}", idx + 1, sample);
        }
        return;
    }

    let text = match read_input(&args) {
        Ok(text) => text,
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1);
        }
    };

    let phases: Vec<Phase> = match args.value_of("phase").unwrap_or("all") {
        "all" => Phase::ALL.to_vec(),
        name => match name.parse::<Phase>() {
            Ok(phase) => vec![phase],
            Err(err) => {
                error!("fatal: {}", err);
                std::process::exit(1);
            }
        },
    };

    if args.is_present("print-debug") {
        print_debug(&text);
    }

    let mut failed = false;
    for phase in phases {
        match driver::execute(phase, &text) {
            Ok(out) => println!("{}\n", out),
            Err(err) => {
                failed = true;
                println!("{}\n", driver::error_message(phase, &err));
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Picks the program text: a numbered sample, the positional
/// argument, or one line from stdin.
fn read_input(args: &ArgMatches) -> Result<String, String> {
    if let Some(n) = args.value_of("sample") {
        let idx = n.parse::<usize>()
            .map_err(|_| format!("sample number `{}` is not a number", n))?;
        return match idx.checked_sub(1).and_then(|i| SAMPLES.get(i)) {
            Some(sample) => Ok(sample.to_string()),
            None => Err(format!("there is no sample {} (1-{} available)", idx, SAMPLES.len())),
        };
    }

    if let Some(input) = args.value_of("INPUT") {
        return Ok(input.to_owned());
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)
        .map_err(|err| format!("unable to read stdin: {}", err))?;
    Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_owned())
}

/// Prints each token next to the state it drives the machine into.
fn print_debug(text: &str) {
    let tokens = match lexer::tokenize(text) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("no debug table: {}", err);
            return;
        }
    };

    let mut grid = Grid::new(GridOptions {
        filling:     Filling::Spaces(1),
        direction:   Direction::LeftToRight,
    });

    for (idx, (tok, st)) in state::trace(&tokens).iter().enumerate() {
        grid.add(Cell::from(format!("{:02}:", idx)));
        grid.add(Cell::from(format!("{}", tok.kind())));
        grid.add(Cell::from(tok.text().to_string()));
        grid.add(Cell::from("=>".to_string()));
        grid.add(Cell::from(format!("{}", st)));
    }

    println!("{}", grid.fit_into_columns(5));
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Program text to analyse (reads one line from stdin if omitted)")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("phase")
            .short("p")
            .long("phase")
            .takes_value(true)
            .possible_values(&["lexical", "syntax", "semantic", "state", "all"])
            .help("phase to run (default: all)"))
        .arg(Arg::with_name("sample")
            .short("s")
            .long("sample")
            .takes_value(true)
            .conflicts_with("INPUT")
            .help("analyse the numbered sample program instead of INPUT"))
        .arg(Arg::with_name("list-samples")
            .short("l")
            .long("list-samples")
            .takes_value(false)
            .help("lists the sample programs"))
        .arg(Arg::with_name("grammar")
            .short("g")
            .long("grammar")
            .takes_value(false)
            .help("prints the documented grammar"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .long("print-debug")
            .alias("show")
            .takes_value(false)
            .help("prints the token and state trace as a table to STDOUT"))
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        .chain(std::io::stderr())
        .apply().ok();
}
