use batt_config::Overrides;
use batt_core::field::DEFAULT_SEQUENCE;
use batt_core::{BattError, FieldSequence};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

// ── Help text ────────────────────────────────────────────────────────────────

pub const SHORT_USAGE: &str = "\
Usage: batteryinfo <output sequence>
           [-h | --help] [-v | --version] [-l | --license]
           [-a | --all] [-d | --digits] [-n | --name <name>] [-j | --json]
           [-N | --no-cap] [--root <dir>] [--config <file>]
Use `batteryinfo -h' for more information.
";

pub const LICENSE: &str = "\
Copyright (c) 2016 Joe Glancy

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
";

/// Full help text, printed by `-h`.
pub fn usage() -> String {
    format!(
        "\
Usage: batteryinfo <output sequence>
           [-h | --help] [-v | --version] [-l | --license]
           [-a | --all] [-d | --digits] [-n | --name <name>] [-j | --json]
           [-N | --no-cap] [--root <dir>] [--config <file>]

`output sequence' is any sequence of the characters below. Each one selects a
piece of information, which is listed in the order the characters are given.
    n           battery name
    c           current charge, in %
    t           maximum charge the battery can hold (in %), relative to
                what it was designed to hold
    v           current voltage, in V
    C           current current, in A
    T           current temperature, in deg. C
    d           battery driver
    m           battery model
    M           battery manufacturer
    e           battery technology
    s           current battery status
    h           battery health
    S           battery serial number
    H           battery charge type
    r           battery charge rate
    p           whether the battery is present
    o           whether the battery is online
    g           whether charging is enabled for the battery
    D           estimated hours until the battery is fully discharged,
                assuming the current drain stays constant
Without an output sequence, the default is:
        {default}
Data that isn't available is shown as a question mark (\"?\") in text output
and as null in JSON output.

Options:
   -h,--help         display this help text.
   -v,--version      display the program's version.
   -l,--license      display copyright and licensing information.
   -a,--all          display every piece of data (as if `output sequence'
                     held every valid character).
   -d,--digits       show flags as \"1\" and \"0\" instead of \"yes\" and \"no\"
                     (or \"true\" and \"false\" in JSON).
   -n,--name <name>  only show the battery with this name. If there is none,
                     nothing is shown (an empty `batteries' array in JSON).
   -j,--json         output JSON.
   -N,--no-cap       don't cap a computed charge at 100%.
   --root <dir>      read devices from <dir> instead of
                     /sys/class/power_supply.
   --config <file>   read defaults from <file> instead of
                     $XDG_CONFIG_HOME/batteryinfo/batteryinfo.toml.
",
        default = DEFAULT_SEQUENCE
    )
}

// ── Parsing ──────────────────────────────────────────────────────────────────

/// A malformed command line; reported together with [`SHORT_USAGE`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// What the command line asks for.
#[derive(Debug)]
pub enum Action {
    Help,
    Version,
    License,
    Report {
        overrides: Overrides,
        config: Option<PathBuf>,
    },
}

pub fn build_app() -> Command {
    let flag = |id: &'static str, short: char, long: &'static str| {
        Arg::new(id).short(short).long(long).action(ArgAction::SetTrue)
    };

    Command::new("batteryinfo")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(Arg::new("sequence").value_name("SEQUENCE").action(ArgAction::Set))
        .arg(flag("help", 'h', "help"))
        .arg(flag("version", 'v', "version"))
        .arg(flag("license", 'l', "license"))
        .arg(flag("all", 'a', "all"))
        .arg(flag("digits", 'd', "digits"))
        .arg(flag("json", 'j', "json"))
        .arg(flag("no_cap", 'N', "no-cap"))
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parse and validate a full argument list (program name first).
///
/// The field sequence is checked here, before anything touches the
/// filesystem. With `--all` it is replaced, so it is not checked.
pub fn parse<I, T>(args: I) -> Result<Action, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_app().try_get_matches_from(args).map_err(|e| {
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        UsageError(first.trim_start_matches("error: ").to_string())
    })?;

    if matches.get_flag("help") {
        return Ok(Action::Help);
    }
    if matches.get_flag("version") {
        return Ok(Action::Version);
    }
    if matches.get_flag("license") {
        return Ok(Action::License);
    }

    Ok(Action::Report {
        overrides: overrides(&matches)?,
        config: matches.get_one::<PathBuf>("config").cloned(),
    })
}

fn overrides(matches: &ArgMatches) -> Result<Overrides, UsageError> {
    let all = matches.get_flag("all");
    let sequence = match matches.get_one::<String>("sequence") {
        Some(raw) if !all => Some(
            raw.parse::<FieldSequence>()
                .map_err(|e| UsageError(e.to_string()))?,
        ),
        _ => None,
    };

    let name = matches.get_one::<String>("name").cloned();
    if name.as_deref() == Some("") {
        return Err(UsageError(BattError::EmptyName.to_string()));
    }

    Ok(Overrides {
        sequence,
        all,
        json: matches.get_flag("json"),
        digits: matches.get_flag("digits"),
        name,
        no_cap: matches.get_flag("no_cap"),
        root: matches.get_one::<PathBuf>("root").cloned(),
    })
}
