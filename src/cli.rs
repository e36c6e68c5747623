//! Command-line interface for strictly_teams.

use clap::{Parser, Subcommand};
use strictly_teams::Pin;

/// Strictly Teams - split a roster into two balanced teams
#[derive(Parser, Debug)]
#[command(name = "strictly_teams")]
#[command(about = "Split participants into two balanced teams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal UI
    Tui {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "strictly_teams.toml")]
        config: std::path::PathBuf,

        /// Fixed RNG seed, overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// File that receives log output while the UI owns the terminal
        #[arg(long, default_value = "strictly_teams_tui.log")]
        log_file: std::path::PathBuf,
    },

    /// Split the given names once and print the teams
    Split {
        /// Participant names
        #[arg(required = true)]
        names: Vec<String>,

        /// Pin a participant, as NAME=TEAM (TEAM: 1, 2, team1, team2, unpinned)
        #[arg(short, long = "pin", value_parser = parse_pin_arg)]
        pins: Vec<(String, Pin)>,

        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "strictly_teams.toml")]
        config: std::path::PathBuf,

        /// Fixed RNG seed, overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Print the teams as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses a `NAME=TEAM` pin argument.
fn parse_pin_arg(s: &str) -> Result<(String, Pin), String> {
    let (name, team) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=TEAM, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    let pin = team.parse::<Pin>().map_err(|e| e.kind().to_string())?;
    Ok((name.to_string(), pin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_arg() {
        assert_eq!(
            parse_pin_arg("Ana=1"),
            Ok(("Ana".to_string(), Pin::TeamOne))
        );
        assert_eq!(
            parse_pin_arg("Ana María=team2"),
            Ok(("Ana María".to_string(), Pin::TeamTwo))
        );
        assert!(parse_pin_arg("Ana").is_err());
        assert!(parse_pin_arg("=1").is_err());
        assert!(parse_pin_arg("Ana=5").is_err());
    }

    #[test]
    fn test_split_command_parses() {
        let cli = Cli::try_parse_from([
            "strictly_teams",
            "split",
            "Ana",
            "Beto",
            "--pin",
            "Beto=2",
            "--seed",
            "9",
            "--json",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Split {
                names,
                pins,
                seed,
                json,
                ..
            } => {
                assert_eq!(names, vec!["Ana", "Beto"]);
                assert_eq!(pins, vec![("Beto".to_string(), Pin::TeamTwo)]);
                assert_eq!(seed, Some(9));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
