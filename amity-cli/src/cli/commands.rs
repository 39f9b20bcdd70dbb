//! Command implementations and argument parsing for the amity CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use amity_core::{
    DEFAULT_RECOMMENDATION_LIMIT, NetworkError, Recommendation, SelfFriendshipPolicy,
    SocialNetwork, SocialNetworkBuilder, UserId,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeList, EdgeListError};

/// Users seeded by the `demo` command.
///
/// The test-support crate holds the same reference network but is only a
/// dev-dependency, so the binary keeps its own copy. The unit tests check
/// that both stay identical.
pub const DEMO_USERS: [u64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Friendships seeded by the `demo` command.
pub const DEMO_FRIENDSHIPS: [(u64, u64); 7] =
    [(1, 2), (1, 3), (2, 3), (2, 4), (3, 5), (6, 7), (7, 8)];

const DEMO_PATH: (u64, u64) = (1, 5);
const DEMO_RECOMMENDATION_USERS: [u64; 2] = [4, 6];
const DEMO_RECOMMENDATION_LIMIT: usize = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "amity", about = "Explore friendships in a social network.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Report paths, recommendations, and communities for a built-in network.
    Demo,
    /// Print the shortest chain of friendships between two users.
    Path(PathCommand),
    /// Suggest people a user may know, ranked by mutual friends.
    Recommend(RecommendCommand),
    /// List the connected communities of a network.
    Communities(CommunitiesCommand),
}

/// Options describing where a network is loaded from.
#[derive(Debug, Args, Clone)]
pub struct NetworkArgs {
    /// Edge-list file: `a b` per friendship, a lone `a` per isolated user.
    #[arg(long, short = 'e')]
    pub edges: PathBuf,

    /// Fail when the edge list pairs a user with themself.
    #[arg(long)]
    pub reject_self_friendships: bool,
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Network to search.
    #[command(flatten)]
    pub network: NetworkArgs,
    /// User the path starts from.
    pub source: u64,
    /// User the path ends at.
    pub target: u64,
}

/// Options accepted by the `recommend` command.
#[derive(Debug, Args, Clone)]
pub struct RecommendCommand {
    /// Network to search.
    #[command(flatten)]
    pub network: NetworkArgs,
    /// User receiving suggestions.
    pub user: u64,
    /// Maximum number of suggestions (defaults to 5; 0 yields none).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub limit: Option<usize>,
}

/// Options accepted by the `communities` command.
#[derive(Debug, Args, Clone)]
pub struct CommunitiesCommand {
    /// Network to partition.
    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the edge list.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error("invalid edge list `{path}`: {error}")]
    EdgeList {
        /// Path of the offending file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        error: EdgeListError,
    },
    /// The network rejected the configuration or an entry.
    #[error(transparent)]
    Core(#[from] NetworkError),
}

impl CliError {
    /// Returns the network error behind this failure, if any.
    #[must_use]
    pub const fn core(&self) -> Option<&NetworkError> {
        match self {
            Self::Core(err) => Some(err),
            Self::Io { .. } | Self::EdgeList { .. } => None,
        }
    }
}

/// Shortest path between two users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// Requested start.
    pub source: UserId,
    /// Requested end.
    pub target: UserId,
    /// Users from `source` to `target`; empty when unreachable.
    pub path: Vec<UserId>,
}

/// Ranked suggestions for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendReport {
    /// User receiving suggestions.
    pub user: UserId,
    /// Limit that was applied.
    pub limit: usize,
    /// Suggestions, best first.
    pub recommendations: Vec<Recommendation>,
}

/// Connected communities with members sorted ascending, ordered by their
/// smallest member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunitiesReport {
    /// Community members.
    pub groups: Vec<Vec<UserId>>,
}

/// Everything the `demo` command reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Every user, ascending.
    pub users: Vec<UserId>,
    /// Path between the first and a distant user.
    pub path: PathReport,
    /// Suggestions for a sample of users.
    pub recommendations: Vec<RecommendReport>,
    /// The network's communities.
    pub communities: CommunitiesReport,
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Output of `demo`.
    Demo(DemoReport),
    /// Output of `path`.
    Path(PathReport),
    /// Output of `recommend`.
    Recommend(RecommendReport),
    /// Output of `communities`.
    Communities(CommunitiesReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the edge list cannot be loaded or the network
/// rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use amity_cli::cli::{Cli, Command, NetworkArgs, PathCommand, Report, run_cli};
/// # use amity_core::UserId;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 2\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Path(PathCommand {
///         network: NetworkArgs {
///             edges: file.path().to_path_buf(),
///             reject_self_friendships: false,
///         },
///         source: 1,
///         target: 3,
///     }),
/// };
/// let Report::Path(report) = run_cli(cli)? else {
///     panic!("path command must produce a path report");
/// };
/// assert_eq!(report.path, vec![UserId::new(1), UserId::new(2), UserId::new(3)]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo => {
            span.record("command", field::display("demo"));
            run_demo().map(Report::Demo)
        }
        Command::Path(command) => {
            span.record("command", field::display("path"));
            run_path(command).map(Report::Path)
        }
        Command::Recommend(command) => {
            span.record("command", field::display("recommend"));
            run_recommend(command).map(Report::Recommend)
        }
        Command::Communities(command) => {
            span.record("command", field::display("communities"));
            run_communities(command).map(Report::Communities)
        }
    }
}

pub(super) fn run_demo() -> Result<DemoReport, CliError> {
    let mut network = SocialNetworkBuilder::new()
        .with_expected_users(DEMO_USERS.len())
        .build()?;
    for user in DEMO_USERS {
        network.add_user(UserId::new(user));
    }
    network.extend_friendships(
        DEMO_FRIENDSHIPS
            .into_iter()
            .map(|(left, right)| (UserId::new(left), UserId::new(right))),
    )?;

    let mut users = network.users();
    users.sort_unstable();
    let (source, target) = DEMO_PATH;
    let path = path_report(&network, UserId::new(source), UserId::new(target));
    let recommendations = DEMO_RECOMMENDATION_USERS
        .into_iter()
        .map(|raw| {
            let user = UserId::new(raw);
            RecommendReport {
                user,
                limit: DEMO_RECOMMENDATION_LIMIT,
                recommendations: network.recommend_friends(user, DEMO_RECOMMENDATION_LIMIT),
            }
        })
        .collect();
    let communities = communities_report(&mut network);

    info!(
        users = users.len(),
        communities = communities.groups.len(),
        "demo completed"
    );
    Ok(DemoReport {
        users,
        path,
        recommendations,
        communities,
    })
}

pub(super) fn run_path(command: PathCommand) -> Result<PathReport, CliError> {
    let PathCommand {
        network: args,
        source,
        target,
    } = command;
    let network = load_network(&args)?;
    Ok(path_report(
        &network,
        UserId::new(source),
        UserId::new(target),
    ))
}

pub(super) fn run_recommend(command: RecommendCommand) -> Result<RecommendReport, CliError> {
    let RecommendCommand {
        network: args,
        user: raw_user,
        limit,
    } = command;
    let network = load_network(&args)?;
    let user = UserId::new(raw_user);
    let max = limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    Ok(RecommendReport {
        user,
        limit: max,
        recommendations: network.recommend_friends(user, max),
    })
}

pub(super) fn run_communities(command: CommunitiesCommand) -> Result<CommunitiesReport, CliError> {
    let CommunitiesCommand { network: args } = command;
    let mut network = load_network(&args)?;
    Ok(communities_report(&mut network))
}

/// Builds a network from the edge list named by `args`.
#[instrument(
    name = "cli.load_network",
    err,
    skip(args),
    fields(path = %args.edges.display(), users = field::Empty, friendships = field::Empty),
)]
pub(super) fn load_network(args: &NetworkArgs) -> Result<SocialNetwork, CliError> {
    let policy = if args.reject_self_friendships {
        SelfFriendshipPolicy::Reject
    } else {
        SelfFriendshipPolicy::Ignore
    };
    let mut network = SocialNetworkBuilder::new()
        .with_self_friendship(policy)
        .build()?;

    let edges = read_edge_list(&args.edges)?;
    edges.apply(&mut network)?;

    let span = Span::current();
    span.record("users", network.user_count());
    span.record("friendships", network.friendship_count());
    Ok(network)
}

fn read_edge_list(path: &Path) -> Result<EdgeList, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    EdgeList::parse(BufReader::new(file)).map_err(|error| CliError::EdgeList {
        path: path.to_path_buf(),
        error,
    })
}

fn path_report(network: &SocialNetwork, source: UserId, target: UserId) -> PathReport {
    PathReport {
        source,
        target,
        path: network.shortest_path(source, target),
    }
}

fn communities_report(network: &mut SocialNetwork) -> CommunitiesReport {
    CommunitiesReport {
        groups: network.communities().sorted(),
    }
}
