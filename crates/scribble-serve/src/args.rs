//! Command-line arguments.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5501;

pub const USAGE: &str = "usage: scribble-serve [--port <port>] [--dir <path>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    pub port: u16,
    pub dir: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dir: PathBuf::from("."),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(ServeArgs),
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut parsed = ServeArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-p" | "--port" => {
                let value = iter.next().ok_or("--port needs a value")?;
                parsed.port = value
                    .parse()
                    .map_err(|_| format!("invalid port '{value}'"))?;
            }
            "-d" | "--dir" => {
                let value = iter.next().ok_or("--dir needs a value")?;
                parsed.dir = PathBuf::from(value);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(Command::Serve(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(parse_args(&[]), Ok(Command::Serve(ServeArgs::default())));
        assert_eq!(ServeArgs::default().port, 5501);
    }

    #[test]
    fn port_and_dir_flags() {
        let cmd = parse_args(&args(&["--port", "8080", "-d", "pkg"])).unwrap();
        assert_eq!(
            cmd,
            Command::Serve(ServeArgs {
                port: 8080,
                dir: PathBuf::from("pkg"),
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse_args(&args(&["--port", "1", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_args(&args(&["--port", "http"])),
            Err("invalid port 'http'".to_string())
        );
        assert!(parse_args(&args(&["--port", "70000"])).is_err());
        assert!(parse_args(&args(&["--dir"])).is_err());
        assert_eq!(
            parse_args(&args(&["--verbose"])),
            Err("unknown argument '--verbose'".to_string())
        );
    }
}
