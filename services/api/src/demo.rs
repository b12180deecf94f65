use career_compass::catalog;
use career_compass::error::AppError;
use career_compass::quiz::{MatchEngine, QuizSession};
use career_compass::roadmap::{NodeStatus, RoadmapModel};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct RoadmapReportArgs {
    /// Include a full node listing in the output
    #[arg(long)]
    pub(crate) list_nodes: bool,
}

pub(crate) fn run_roadmap_report(args: RoadmapReportArgs) -> Result<(), AppError> {
    let model = RoadmapModel::standard()?;
    render_roadmap_report(&model, args.list_nodes);
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Comma-separated question ids to like during the scripted quiz
    /// (defaults to a data-flavored profile)
    #[arg(long, value_delimiter = ',')]
    pub(crate) like: Vec<String>,
    /// Skip the roadmap portion of the demo
    #[arg(long)]
    pub(crate) skip_roadmap: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Career Compass demo");

    let liked: Vec<String> = if args.like.is_empty() {
        ["q2", "q3", "q9", "q13"]
            .iter()
            .map(|id| id.to_string())
            .collect()
    } else {
        args.like
    };

    let mut session = QuizSession::new();
    for question in catalog::quiz_questions() {
        let liked_answer = liked.iter().any(|id| id == question.id);
        session.submit_answer(question.id, liked_answer);
    }

    let matches = MatchEngine::default().compute_matches(session.answers());
    println!(
        "\nTop career matches after {} answers ({} liked):",
        session.answered(),
        liked.len()
    );
    for (rank, entry) in matches.iter().enumerate() {
        let path = catalog::career_path(entry.path);
        println!(
            "  {}. {} ({:.1} points) - {}",
            rank + 1,
            path.title,
            entry.score,
            path.description
        );
        for reason in &entry.reasons {
            println!("     - {reason}");
        }
    }

    if !args.skip_roadmap {
        let mut model = RoadmapModel::standard()?;
        render_roadmap_report(&model, false);

        println!("\nMarking 'SQL Fundamentals' completed...");
        model.set_status("sql-basics", NodeStatus::Completed)?;
        let updated = model.progress();
        println!(
            "Roadmap progress is now {}% ({} of {} completed)",
            updated.percentage, updated.completed, updated.total
        );
    }

    Ok(())
}

fn render_roadmap_report(model: &RoadmapModel, list_nodes: bool) {
    let progress = model.progress();
    println!(
        "\nRoadmap progress: {}% | {} completed, {} in progress, {} total",
        progress.percentage, progress.completed, progress.in_progress, progress.total
    );

    println!("Status buckets:");
    for status in NodeStatus::ordered() {
        println!(
            "  - {}: {}",
            status.label(),
            model.nodes_by_status(status).len()
        );
    }

    let schedule = model.schedule();
    println!("Up next:");
    for node in &schedule.up_next {
        println!("  - {} ({})", node.title, node.duration);
    }
    println!("Future queue: {} nodes", schedule.future.len());

    if list_nodes {
        println!("All nodes:");
        for node in model.node_details() {
            println!(
                "  - [{}] {} | {} | {}",
                node.status_label, node.title, node.kind_label, node.phase
            );
        }
    }
}
