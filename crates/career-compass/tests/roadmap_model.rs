use career_compass::catalog::Difficulty;
use career_compass::roadmap::{
    CanvasOverlay, NodeKind, NodeStatus, NodeTemplate, RoadmapBlueprint, RoadmapError,
    RoadmapModel, UP_NEXT_WINDOW,
};

fn seeded_model() -> RoadmapModel {
    RoadmapModel::standard().expect("standard blueprint is well-formed")
}

fn template(
    id: &'static str,
    prerequisites: &'static [&'static str],
    status: NodeStatus,
    progress: Option<u8>,
) -> NodeTemplate {
    NodeTemplate {
        id,
        title: id,
        kind: NodeKind::Course,
        duration: "10 hours",
        difficulty: Difficulty::Beginner,
        description: "test node",
        prerequisites,
        pathways: &["All Paths"],
        phase: "Phase 1",
        url: None,
        status,
        progress,
    }
}

#[test]
fn standard_seed_loads_with_expected_buckets() {
    let blueprint = RoadmapBlueprint::standard();
    assert_eq!(
        blueprint.nodes_for_phase("Months 1-6: Foundation").len(),
        5,
        "foundation phase covers the first five nodes"
    );

    let model = seeded_model();

    assert_eq!(model.len(), 12);
    assert_eq!(model.nodes_by_status(NodeStatus::Completed).len(), 2);
    assert_eq!(model.nodes_by_status(NodeStatus::InProgress).len(), 3);
    assert_eq!(model.nodes_by_status(NodeStatus::Available).len(), 2);
    assert_eq!(model.nodes_by_status(NodeStatus::Locked).len(), 5);
}

#[test]
fn seed_progress_weighs_in_progress_nodes() {
    let summary = seeded_model().progress();

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.in_progress, 3);
    assert_eq!(summary.total, 12);
    // 2 completed plus 65% + 30% + 80% of three in-progress nodes:
    // round(100 * (2 + 1.75) / 12) = 31.
    assert_eq!(summary.percentage, 31);
}

#[test]
fn spec_example_five_node_progress() {
    let blueprint = RoadmapBlueprint::from_templates(vec![
        template("a", &[], NodeStatus::Completed, None),
        template("b", &[], NodeStatus::Completed, None),
        template("c", &[], NodeStatus::InProgress, Some(50)),
        template("d", &[], NodeStatus::Available, None),
        template("e", &[], NodeStatus::Available, None),
    ]);
    let model = RoadmapModel::new(&blueprint).expect("valid blueprint");

    let summary = model.progress();
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage, 50);
}

#[test]
fn in_progress_without_progress_counts_as_zero() {
    let blueprint = RoadmapBlueprint::from_templates(vec![
        template("a", &[], NodeStatus::InProgress, None),
        template("b", &[], NodeStatus::Available, None),
    ]);
    let model = RoadmapModel::new(&blueprint).expect("valid blueprint");

    assert_eq!(model.progress().percentage, 0);
    assert_eq!(model.progress().in_progress, 1);
}

#[test]
fn completing_a_node_forces_progress_and_touches_nothing_else() {
    let mut model = seeded_model();
    let before: Vec<(String, NodeStatus, Option<u8>)> = model
        .nodes()
        .map(|node| (node.id().to_string(), node.status, node.progress))
        .collect();

    model
        .set_status("sql-basics", NodeStatus::Completed)
        .expect("known node");

    let sql = model.node("sql-basics").expect("node present");
    assert_eq!(sql.status, NodeStatus::Completed);
    assert_eq!(sql.progress, Some(100));

    for (id, status, progress) in before {
        if id == "sql-basics" {
            continue;
        }
        let node = model.node(&id).expect("node present");
        assert_eq!(node.status, status, "{id} status changed");
        assert_eq!(node.progress, progress, "{id} progress changed");
    }
}

#[test]
fn leaving_completed_does_not_reset_progress() {
    let mut model = seeded_model();
    model
        .set_status("sql-basics", NodeStatus::Completed)
        .expect("known node");
    model
        .set_status("sql-basics", NodeStatus::InProgress)
        .expect("known node");

    // The 100 written on completion sticks; the side effect is one-way.
    let sql = model.node("sql-basics").expect("node present");
    assert_eq!(sql.status, NodeStatus::InProgress);
    assert_eq!(sql.progress, Some(100));
}

#[test]
fn unknown_node_leaves_the_mapping_untouched() {
    let mut model = seeded_model();
    let before = model.progress();

    let result = model.set_status("nonexistent", NodeStatus::Completed);
    match result {
        Err(RoadmapError::NodeNotFound(id)) => assert_eq!(id, "nonexistent"),
        other => panic!("expected node not found, got {other:?}"),
    }

    assert_eq!(model.len(), 12);
    assert_eq!(model.progress(), before);
}

#[test]
fn status_change_moves_nodes_between_buckets() {
    let mut model = seeded_model();
    assert!(model
        .nodes_by_status(NodeStatus::Locked)
        .iter()
        .any(|node| node.id() == "deep-learning"));

    model
        .set_status("deep-learning", NodeStatus::Available)
        .expect("known node");

    assert!(!model
        .nodes_by_status(NodeStatus::Locked)
        .iter()
        .any(|node| node.id() == "deep-learning"));
    assert!(model
        .nodes_by_status(NodeStatus::Available)
        .iter()
        .any(|node| node.id() == "deep-learning"));
}

#[test]
fn manual_override_ignores_locked_prerequisites() {
    let mut model = seeded_model();

    // capstone-project's prerequisites are both locked; completing it
    // anyway is allowed by design.
    model
        .set_status("capstone-project", NodeStatus::Completed)
        .expect("override accepted");

    let capstone = model.node("capstone-project").expect("node present");
    assert_eq!(capstone.status, NodeStatus::Completed);
    assert_eq!(capstone.progress, Some(100));
    assert_eq!(
        model.node("pytorch-tensorflow").expect("node present").status,
        NodeStatus::Locked
    );
}

#[test]
fn dangling_prerequisite_is_rejected_at_load() {
    let blueprint = RoadmapBlueprint::from_templates(vec![
        template("a", &[], NodeStatus::Available, None),
        template("b", &["missing"], NodeStatus::Locked, None),
    ]);

    match RoadmapModel::new(&blueprint) {
        Err(RoadmapError::UnknownPrerequisite { node, prerequisite }) => {
            assert_eq!(node, "b");
            assert_eq!(prerequisite, "missing");
        }
        other => panic!("expected unknown prerequisite, got {other:?}"),
    }
}

#[test]
fn empty_seed_is_rejected_at_load() {
    let blueprint = RoadmapBlueprint::from_templates(Vec::new());
    assert!(matches!(
        RoadmapModel::new(&blueprint),
        Err(RoadmapError::EmptyRoadmap)
    ));
}

#[test]
fn schedule_windows_available_nodes_and_appends_locked() {
    let mut model = seeded_model();

    // Open everything up, then re-lock one early node: the overflow of
    // the up-next window must still come before any locked node.
    for id in [
        "data-structures",
        "sql-basics",
        "linux-cli",
        "deep-learning",
        "ml-project-1",
        "pytorch-tensorflow",
        "mlops",
        "capstone-project",
    ] {
        model
            .set_status(id, NodeStatus::Available)
            .expect("known node");
    }
    model
        .set_status("mlops", NodeStatus::Locked)
        .expect("known node");

    let schedule = model.schedule();
    assert_eq!(schedule.up_next.len(), UP_NEXT_WINDOW);
    assert!(schedule
        .up_next
        .iter()
        .all(|node| node.status == NodeStatus::Available));

    // Nine available nodes: one spills past the window, then the locked
    // node follows even though it sits earlier in insertion order.
    let future_ids: Vec<&str> = schedule.future.iter().map(|node| node.id).collect();
    assert_eq!(future_ids, vec!["capstone-project", "mlops"]);
}

#[test]
fn graph_projection_derives_positions_and_edges() {
    let model = seeded_model();

    let nodes = model.graph_nodes();
    assert_eq!(nodes.len(), 12);
    assert_eq!((nodes[0].position.x, nodes[0].position.y), (0, 0));
    // Sixth node wraps to the second grid row.
    assert_eq!((nodes[5].position.x, nodes[5].position.y), (200, 120));

    let edges = model.graph_edges();
    let expected_edges: usize = model
        .nodes()
        .map(|node| node.template.prerequisites.len())
        .sum();
    assert_eq!(edges.len(), expected_edges);

    let into_in_progress = edges
        .iter()
        .find(|edge| edge.id == "python-basics-data-structures")
        .expect("prerequisite edge present");
    assert!(into_in_progress.animated);
    assert_eq!(into_in_progress.source, "python-basics");
    assert_eq!(into_in_progress.target, "data-structures");
}

#[test]
fn canvas_connections_stay_cosmetic() {
    let mut model = seeded_model();
    let mut overlay = CanvasOverlay::new();
    let derived = model.graph_edges().len();

    overlay
        .connect(&model, "git-github", "capstone-project")
        .expect("both endpoints exist");

    assert_eq!(overlay.edges(&model).len(), derived + 1);

    // The drawn edge changes no dependency semantics.
    let capstone = model.node("capstone-project").expect("node present");
    assert!(!capstone.template.prerequisites.contains(&"git-github"));
    assert_eq!(model.progress(), seeded_model().progress());

    // Unknown endpoints are refused and leave the overlay unchanged.
    let result = overlay.connect(&model, "git-github", "not-a-node");
    assert!(matches!(result, Err(RoadmapError::NodeNotFound(_))));
    assert_eq!(overlay.connections().len(), 1);

    // Completing a node afterwards still works; the overlay edge stays.
    model
        .set_status("git-github", NodeStatus::InProgress)
        .expect("known node");
    assert_eq!(overlay.edges(&model).len(), derived + 1);
}

#[test]
fn node_lookup_resolves_clicks() {
    let model = seeded_model();
    assert!(model.node("ml-basics").is_some());
    assert!(model.node("unknown-node").is_none());
}
