//! Simple command that prints one or '-n count' UUIDv4 strings

use std::{env, io, io::Write, process::ExitCode};

use uuid4::{Config, RngMode};

const USAGE: &str = "[-n count] [-m secure|pseudo|seeded:<u64>] [-u]";

/// Options given on the command line.
struct Options {
    count: usize,
    mode: Option<String>,
    uppercase: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} {}",
                    program.as_deref().unwrap_or("uuid4"),
                    USAGE
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    if let Err(err) = init_global_codec(opts.mode.as_deref(), opts.uppercase) {
        eprintln!("Error: {}", err);
        return Ok(ExitCode::FAILURE);
    }

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        writeln!(buf, "{}", uuid4::format(&uuid4::uuid4()))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn init_global_codec(mode: Option<&str>, uppercase: bool) -> Result<(), uuid4::Error> {
    let mode = match mode {
        Some(m) => m.parse::<RngMode>()?,
        None => RngMode::default(),
    };
    uuid4::init(
        Config::default()
            .with_mode(mode)
            .with_uppercase(uppercase),
    )?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut mode = None;
    let mut uppercase = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-m" => {
                if mode.is_some() {
                    return Err("option 'm' given more than once".to_owned());
                }
                let Some(m_arg) = args.next() else {
                    return Err("argument to option 'm' missing".to_owned());
                };
                mode.replace(m_arg);
            }
            "-u" => uppercase = true,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    Ok(Options {
        count: count.unwrap_or(1),
        mode,
        uppercase,
    })
}
