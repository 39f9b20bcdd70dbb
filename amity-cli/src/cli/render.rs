//! Plain-text rendering of command reports.

use std::io::{self, Write};

use amity_core::UserId;

use super::commands::{CommunitiesReport, DemoReport, PathReport, RecommendReport, Report};

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use amity_cli::cli::{PathReport, Report, render_report};
/// # use amity_core::UserId;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Report::Path(PathReport {
///     source: UserId::new(1),
///     target: UserId::new(3),
///     path: vec![UserId::new(1), UserId::new(2), UserId::new(3)],
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "shortest path from 1 to 3: 1 -> 2 -> 3\n");
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Demo(demo) => render_demo(demo, &mut writer),
        Report::Path(path) => render_path(path, &mut writer),
        Report::Recommend(recommend) => render_recommend(recommend, &mut writer),
        Report::Communities(communities) => render_communities(communities, &mut writer),
    }
}

fn render_demo(demo: &DemoReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "users: {}", join(&demo.users, " "))?;
    writeln!(writer)?;
    render_path(&demo.path, writer)?;
    for recommend in &demo.recommendations {
        writeln!(writer)?;
        render_recommend(recommend, writer)?;
    }
    writeln!(writer)?;
    render_communities(&demo.communities, writer)
}

fn render_path(report: &PathReport, writer: &mut impl Write) -> io::Result<()> {
    let PathReport {
        source,
        target,
        path,
    } = report;
    if path.is_empty() {
        writeln!(writer, "shortest path from {source} to {target}: no path found")
    } else {
        writeln!(
            writer,
            "shortest path from {source} to {target}: {}",
            join(path, " -> ")
        )
    }
}

fn render_recommend(report: &RecommendReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "recommendations for {} (top {}):",
        report.user, report.limit
    )?;
    if report.recommendations.is_empty() {
        return writeln!(writer, "  none");
    }
    for recommendation in &report.recommendations {
        writeln!(
            writer,
            "  {}: {} mutual",
            recommendation.user(),
            recommendation.mutual_friends()
        )?;
    }
    Ok(())
}

fn render_communities(report: &CommunitiesReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "communities: {}", report.groups.len())?;
    for (index, members) in report.groups.iter().enumerate() {
        writeln!(writer, "  {}: {}", index + 1, join(members, " "))?;
    }
    Ok(())
}

fn join(users: &[UserId], separator: &str) -> String {
    users
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
