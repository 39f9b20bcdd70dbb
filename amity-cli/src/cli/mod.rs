//! Command-line interface orchestration for the amity social-graph tool.
//!
//! `demo` reports on a built-in network; `path`, `recommend`, and
//! `communities` load a network from a whitespace-separated edge list.

mod commands;
mod edge_list;
mod render;

pub use commands::{
    Cli, CliError, Command, CommunitiesCommand, CommunitiesReport, DEMO_FRIENDSHIPS, DEMO_USERS,
    DemoReport, NetworkArgs, PathCommand, PathReport, RecommendCommand, RecommendReport, Report,
    run_cli,
};
pub use edge_list::{EdgeList, EdgeListEntry, EdgeListError};
pub use render::render_report;
