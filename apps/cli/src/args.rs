use std::env;
use std::path::PathBuf;

use crate::seed::DEFAULT_OUT;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Serve { port: Option<u16>, no_open: bool },
    SeedDepartments { out: PathBuf },
}

pub fn parse_args() -> Result<Command, String> {
    parse_from(env::args().skip(1))
}

fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut args = args.into_iter().peekable();
    if args.peek().map(String::as_str) == Some("seed-departments") {
        args.next();
        return parse_seed(args);
    }

    let mut port = None;
    let mut no_open = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let parsed = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                port = Some(parsed);
            }
            "--no-open" => {
                no_open = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(Command::Serve { port, no_open })
}

fn parse_seed(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut out = PathBuf::from(DEFAULT_OUT);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out".to_string())?;
                out = PathBuf::from(value);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }
    Ok(Command::SeedDepartments { out })
}

pub fn print_help() {
    println!(
        "Fleet Manager CLI\n\n\
Usage:\n  fleet-manager [--port <port>] [--no-open]\n  fleet-manager seed-departments [--out <path>]\n\n\
Options:\n  --port <port>  Override the configured port for this run only\n  --no-open      Do not open the browser automatically\n  --out <path>   Where seed-departments writes its CSV (default departments.csv)\n  -h, --help     Show this help message\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_from(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn serve_flags_are_parsed() {
        assert_eq!(
            parse(&["--port", "4000", "--no-open"]).unwrap(),
            Command::Serve {
                port: Some(4000),
                no_open: true
            }
        );
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Serve {
                port: None,
                no_open: false
            }
        );
    }

    #[test]
    fn seed_departments_defaults_output() {
        assert_eq!(
            parse(&["seed-departments"]).unwrap(),
            Command::SeedDepartments {
                out: PathBuf::from("departments.csv")
            }
        );
        assert_eq!(
            parse(&["seed-departments", "--out", "/tmp/depts.csv"]).unwrap(),
            Command::SeedDepartments {
                out: PathBuf::from("/tmp/depts.csv")
            }
        );
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse(&["--port", "nope"]).is_err());
        assert!(parse(&["--port"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["seed-departments", "--out"]).is_err());
    }
}
