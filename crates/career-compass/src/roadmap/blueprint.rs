use super::domain::{NodeKind, NodeStatus};
use crate::catalog::Difficulty;

/// Seed definition for one learning node. Prerequisite ids must name
/// other templates in the same blueprint; the model validates this at
/// construction.
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: NodeKind,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub prerequisites: &'static [&'static str],
    pub pathways: &'static [&'static str],
    pub phase: &'static str,
    pub url: Option<&'static str>,
    pub status: NodeStatus,
    pub progress: Option<u8>,
}

#[derive(Debug)]
pub struct RoadmapBlueprint {
    nodes: Vec<NodeTemplate>,
}

impl RoadmapBlueprint {
    pub fn standard() -> Self {
        Self::from_templates(standard_node_templates())
    }

    pub fn from_templates(nodes: Vec<NodeTemplate>) -> Self {
        Self { nodes }
    }

    pub fn node_templates(&self) -> &[NodeTemplate] {
        &self.nodes
    }

    pub fn nodes_for_phase(&self, phase: &str) -> Vec<&NodeTemplate> {
        self.nodes
            .iter()
            .filter(|node| node.phase == phase)
            .collect()
    }
}

fn standard_node_templates() -> Vec<NodeTemplate> {
    vec![
        // Foundation phase
        NodeTemplate {
            id: "python-basics",
            title: "Python Fundamentals",
            kind: NodeKind::Course,
            duration: "20 hours",
            difficulty: Difficulty::Beginner,
            description: "Learn Python syntax, data structures, and basic programming concepts.",
            prerequisites: &[],
            pathways: &["ML Engineer", "Data Scientist", "Backend Developer"],
            phase: "Months 1-6: Foundation",
            url: Some("https://python.org"),
            status: NodeStatus::Completed,
            progress: None,
        },
        NodeTemplate {
            id: "git-github",
            title: "Git & GitHub",
            kind: NodeKind::Tutorial,
            duration: "5 hours",
            difficulty: Difficulty::Beginner,
            description: "Version control basics and collaborative development.",
            prerequisites: &[],
            pathways: &["All Paths"],
            phase: "Months 1-6: Foundation",
            url: Some("https://github.com"),
            status: NodeStatus::Completed,
            progress: None,
        },
        NodeTemplate {
            id: "data-structures",
            title: "Data Structures & Algorithms",
            kind: NodeKind::Course,
            duration: "40 hours",
            difficulty: Difficulty::Intermediate,
            description: "Essential CS fundamentals for technical interviews.",
            prerequisites: &["python-basics"],
            pathways: &["All Paths"],
            phase: "Months 1-6: Foundation",
            url: None,
            status: NodeStatus::InProgress,
            progress: Some(65),
        },
        NodeTemplate {
            id: "sql-basics",
            title: "SQL Fundamentals",
            kind: NodeKind::Course,
            duration: "15 hours",
            difficulty: Difficulty::Beginner,
            description: "Database querying and data manipulation.",
            prerequisites: &["python-basics"],
            pathways: &["ML Engineer", "Data Engineer", "Backend Developer"],
            phase: "Months 1-6: Foundation",
            url: None,
            status: NodeStatus::InProgress,
            progress: Some(30),
        },
        NodeTemplate {
            id: "linux-cli",
            title: "Linux Command Line",
            kind: NodeKind::Tutorial,
            duration: "8 hours",
            difficulty: Difficulty::Beginner,
            description: "Navigate and manage systems using the terminal.",
            prerequisites: &[],
            pathways: &["DevOps", "Backend Developer", "ML Engineer"],
            phase: "Months 1-6: Foundation",
            url: None,
            status: NodeStatus::InProgress,
            progress: Some(80),
        },
        // Core skills phase
        NodeTemplate {
            id: "numpy-pandas",
            title: "NumPy & Pandas",
            kind: NodeKind::Course,
            duration: "25 hours",
            difficulty: Difficulty::Intermediate,
            description: "Data manipulation and analysis with Python libraries.",
            prerequisites: &["python-basics", "sql-basics"],
            pathways: &["ML Engineer", "Data Scientist", "Data Engineer"],
            phase: "Months 7-12: Core Skills",
            url: None,
            status: NodeStatus::Available,
            progress: None,
        },
        NodeTemplate {
            id: "ml-basics",
            title: "Machine Learning Basics",
            kind: NodeKind::Course,
            duration: "50 hours",
            difficulty: Difficulty::Intermediate,
            description: "Introduction to supervised and unsupervised learning.",
            prerequisites: &["numpy-pandas", "data-structures"],
            pathways: &["ML Engineer", "Data Scientist"],
            phase: "Months 7-12: Core Skills",
            url: None,
            status: NodeStatus::Available,
            progress: None,
        },
        NodeTemplate {
            id: "deep-learning",
            title: "Deep Learning Fundamentals",
            kind: NodeKind::Course,
            duration: "60 hours",
            difficulty: Difficulty::Advanced,
            description: "Neural networks, CNNs, RNNs, and transformers.",
            prerequisites: &["ml-basics"],
            pathways: &["ML Engineer", "Data Scientist"],
            phase: "Months 7-12: Core Skills",
            url: None,
            status: NodeStatus::Locked,
            progress: None,
        },
        NodeTemplate {
            id: "ml-project-1",
            title: "Build a Classifier",
            kind: NodeKind::Project,
            duration: "30 hours",
            difficulty: Difficulty::Intermediate,
            description: "End-to-end ML project: data collection to deployment.",
            prerequisites: &["ml-basics"],
            pathways: &["ML Engineer", "Data Scientist"],
            phase: "Months 7-12: Core Skills",
            url: None,
            status: NodeStatus::Locked,
            progress: None,
        },
        // Advanced phase
        NodeTemplate {
            id: "pytorch-tensorflow",
            title: "PyTorch or TensorFlow",
            kind: NodeKind::Course,
            duration: "40 hours",
            difficulty: Difficulty::Advanced,
            description: "Deep learning frameworks for production models.",
            prerequisites: &["deep-learning"],
            pathways: &["ML Engineer"],
            phase: "Months 13-18: Advanced",
            url: None,
            status: NodeStatus::Locked,
            progress: None,
        },
        NodeTemplate {
            id: "mlops",
            title: "MLOps & Model Deployment",
            kind: NodeKind::Course,
            duration: "35 hours",
            difficulty: Difficulty::Advanced,
            description: "Deploy, monitor, and maintain ML models in production.",
            prerequisites: &["ml-project-1", "linux-cli"],
            pathways: &["ML Engineer"],
            phase: "Months 13-18: Advanced",
            url: None,
            status: NodeStatus::Locked,
            progress: None,
        },
        NodeTemplate {
            id: "capstone-project",
            title: "Capstone ML Project",
            kind: NodeKind::Project,
            duration: "80 hours",
            difficulty: Difficulty::Advanced,
            description: "Full-stack ML application with deployment.",
            prerequisites: &["pytorch-tensorflow", "mlops"],
            pathways: &["ML Engineer"],
            phase: "Months 13-18: Advanced",
            url: None,
            status: NodeStatus::Locked,
            progress: None,
        },
    ]
}
