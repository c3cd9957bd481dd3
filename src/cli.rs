//! Command line parsing and execution.
//!
//! Kept out of `main.rs` so every command can be tested.

use crate::config::Settings;
use crate::models::IpNetwork;
use crate::output::render;
use crate::processing::{subtract_ip, summarize_ip};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::error::Error;

/// Default number of addresses printed by `hosts`.
pub const DEFAULT_HOST_LIMIT: usize = 256;

const BIN_NAME: &str = "subnet-summary";

fn net_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .value_parser(value_parser!(IpNetwork))
}

fn nets_arg(id: &'static str, help: &'static str) -> Arg {
    net_arg(id, help).num_args(1..).action(ArgAction::Append)
}

/// The `subnet-summary` command definition.
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("IPv4 and IPv6 network arithmetic")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("info")
                .about("Network, broadcast, netmask, first, last and size")
                .arg(net_arg("network", "Network or address")),
        )
        .subcommand(
            Command::new("summarize")
                .about("Aggregate into the fewest covering networks")
                .arg(nets_arg("networks", "Networks to aggregate")),
        )
        .subcommand(
            Command::new("subtract")
                .about("Remove the --minus networks from the targets")
                .arg(nets_arg("targets", "Networks to subtract from"))
                .arg(
                    nets_arg("minus", "Networks to remove")
                        .long("minus")
                        .short('m'),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Cut into exactly <count> networks")
                .arg(net_arg("network", "Network to split"))
                .arg(
                    Arg::new("count")
                        .help("Number of networks")
                        .required(true)
                        .value_parser(value_parser!(u128)),
                ),
        )
        .subcommand(
            Command::new("subnet")
                .about("Equal networks of prefix <len>")
                .arg(net_arg("network", "Network to divide"))
                .arg(
                    Arg::new("len")
                        .help("Longer prefix length")
                        .required(true)
                        .value_parser(value_parser!(u8)),
                ),
        )
        .subcommand(
            Command::new("supernet")
                .about("Covering network of prefix <len>, negative clamps to 0")
                .arg(net_arg("network", "Network to widen"))
                .arg(
                    Arg::new("len")
                        .help("Shorter prefix length")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("range")
                .about("Fewest networks covering the address span")
                .arg(net_arg("from", "First address"))
                .arg(net_arg("to", "Last address")),
        )
        .subcommand(
            Command::new("hosts")
                .about("Host addresses of a network")
                .arg(net_arg("network", "Network to list"))
                .arg(
                    Arg::new("limit")
                        .help("Most addresses to print [default: 256]")
                        .value_parser(value_parser!(usize)),
                ),
        )
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Info(IpNetwork),
    Summarize(Vec<IpNetwork>),
    Subtract {
        targets: Vec<IpNetwork>,
        subtrahends: Vec<IpNetwork>,
    },
    Split(IpNetwork, u128),
    Subnet(IpNetwork, u8),
    Supernet(IpNetwork, i32),
    Range(IpNetwork, IpNetwork),
    Hosts(IpNetwork, usize),
}

fn one<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> Result<T, Box<dyn Error>> {
    m.get_one::<T>(id)
        .cloned()
        .ok_or_else(|| format!("missing <{id}>").into())
}

fn many(m: &ArgMatches, id: &str) -> Vec<IpNetwork> {
    m.get_many::<IpNetwork>(id)
        .map(|nets| nets.copied().collect())
        .unwrap_or_default()
}

impl Action {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Action, Box<dyn Error>> {
        let argv = std::iter::once(BIN_NAME.to_string()).chain(args.iter().cloned());
        let matches = command().try_get_matches_from(argv)?;
        Action::from_matches(&matches)
    }

    /// Builds the action from matches of [`command`].
    pub fn from_matches(matches: &ArgMatches) -> Result<Action, Box<dyn Error>> {
        let (name, m) = matches.subcommand().ok_or("missing command")?;
        log::debug!("parse command '{name}'");

        let action = match name {
            "info" => Action::Info(one(m, "network")?),
            "summarize" => Action::Summarize(many(m, "networks")),
            "subtract" => Action::Subtract {
                targets: many(m, "targets"),
                subtrahends: many(m, "minus"),
            },
            "split" => Action::Split(one(m, "network")?, one(m, "count")?),
            "subnet" => Action::Subnet(one(m, "network")?, one(m, "len")?),
            "supernet" => Action::Supernet(one(m, "network")?, one(m, "len")?),
            "range" => Action::Range(one(m, "from")?, one(m, "to")?),
            "hosts" => Action::Hosts(
                one(m, "network")?,
                m.get_one::<usize>("limit")
                    .copied()
                    .unwrap_or(DEFAULT_HOST_LIMIT),
            ),
            other => return Err(format!("unknown command '{other}'").into()),
        };
        Ok(action)
    }

    /// Runs the action and returns the networks to print.
    pub fn execute(&self) -> Result<Vec<IpNetwork>, Box<dyn Error>> {
        let nets = match self {
            Action::Info(net) => vec![*net],
            Action::Summarize(nets) => summarize_ip(nets),
            Action::Subtract {
                targets,
                subtrahends,
            } => subtract_ip(targets, subtrahends),
            Action::Split(net, count) => net.split(*count)?,
            Action::Subnet(net, len) => net.subnet(*len)?,
            Action::Supernet(net, len) => vec![net.supernet(*len)?],
            Action::Range(from, to) => from.range(to)?,
            Action::Hosts(net, limit) => {
                let hosts: Vec<IpNetwork> = net.each_host().take(*limit).collect();
                if hosts.len() == *limit && net.size() > *limit as u128 + 2 {
                    log::warn!("hosts {net}: output limited to {limit} address(es)");
                }
                hosts
            }
        };
        log::info!("{self:?} -> {} network(s)", nets.len());
        Ok(nets)
    }
}

/// Executes matched arguments and renders the result.
pub fn run_matches(matches: &ArgMatches, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let nets = Action::from_matches(matches)?.execute()?;
    render(&nets, settings.output)
}

/// Parses, executes and renders one command line.
pub fn run(args: &[String], settings: &Settings) -> Result<String, Box<dyn Error>> {
    let nets = Action::parse(args)?.execute()?;
    render(&nets, settings.output)
}
