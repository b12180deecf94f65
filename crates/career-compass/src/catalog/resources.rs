use super::paths::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Tutorial,
    Book,
    Article,
    Video,
    Project,
    Practice,
    Tool,
    Documentation,
}

impl ResourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Course => "Course",
            Self::Tutorial => "Tutorial",
            Self::Book => "Book",
            Self::Article => "Article",
            Self::Video => "Video",
            Self::Project => "Project",
            Self::Practice => "Practice",
            Self::Tool => "Tool",
            Self::Documentation => "Documentation",
        }
    }
}

/// A curated learning resource. Compiled-in content, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct LearningResource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
    pub difficulty: Difficulty,
    pub duration: &'static str,
    pub free: bool,
    pub featured: bool,
    pub rating: f32,
    pub tags: &'static [&'static str],
    pub pathways: &'static [&'static str],
    pub url: &'static str,
}

/// Conjunction of optional constraints; an unset field matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceFilter {
    pub query: Option<String>,
    pub kind: Option<ResourceKind>,
    pub difficulty: Option<Difficulty>,
    pub pathway: Option<String>,
    #[serde(default)]
    pub free_only: bool,
}

impl ResourceFilter {
    fn matches(&self, resource: &LearningResource) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_text = resource.title.to_lowercase().contains(&needle)
                || resource.description.to_lowercase().contains(&needle)
                || resource
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            if !needle.is_empty() && !in_text {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if resource.kind != kind {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if resource.difficulty != difficulty {
                return false;
            }
        }

        if let Some(pathway) = &self.pathway {
            if !resource.pathways.contains(&pathway.as_str()) {
                return false;
            }
        }

        if self.free_only && !resource.free {
            return false;
        }

        true
    }
}

static LEARNING_RESOURCES: [LearningResource; 14] = [
    LearningResource {
        id: "freecodecamp-responsive",
        title: "freeCodeCamp Responsive Web Design",
        description: "Project-based HTML and CSS curriculum ending in five certification projects.",
        kind: ResourceKind::Course,
        difficulty: Difficulty::Beginner,
        duration: "60 hours",
        free: true,
        featured: true,
        rating: 4.8,
        tags: &["html", "css", "responsive"],
        pathways: &["Frontend Developer", "Full-Stack Developer"],
        url: "https://www.freecodecamp.org/learn/2022/responsive-web-design/",
    },
    LearningResource {
        id: "javascript-info",
        title: "The Modern JavaScript Tutorial",
        description: "From language basics to advanced browser APIs, with tasks per chapter.",
        kind: ResourceKind::Tutorial,
        difficulty: Difficulty::Beginner,
        duration: "40 hours",
        free: true,
        featured: true,
        rating: 4.9,
        tags: &["javascript", "browser", "fundamentals"],
        pathways: &["Frontend Developer", "Full-Stack Developer"],
        url: "https://javascript.info",
    },
    LearningResource {
        id: "react-docs",
        title: "React Official Documentation",
        description: "The rewritten react.dev docs with interactive examples and challenges.",
        kind: ResourceKind::Documentation,
        difficulty: Difficulty::Intermediate,
        duration: "15 hours",
        free: true,
        featured: false,
        rating: 4.7,
        tags: &["react", "components", "hooks"],
        pathways: &["Frontend Developer", "Full-Stack Developer", "Mobile Developer"],
        url: "https://react.dev/learn",
    },
    LearningResource {
        id: "cs50",
        title: "Harvard CS50x",
        description: "Computer science fundamentals from C to Python, with weekly problem sets.",
        kind: ResourceKind::Course,
        difficulty: Difficulty::Beginner,
        duration: "100 hours",
        free: true,
        featured: true,
        rating: 4.9,
        tags: &["fundamentals", "c", "python", "algorithms"],
        pathways: &["All Paths"],
        url: "https://cs50.harvard.edu/x/",
    },
    LearningResource {
        id: "sql-tutorial",
        title: "PostgreSQL Tutorial",
        description: "Query writing, schema design, and window functions on a sample database.",
        kind: ResourceKind::Tutorial,
        difficulty: Difficulty::Beginner,
        duration: "15 hours",
        free: true,
        featured: false,
        rating: 4.5,
        tags: &["sql", "postgresql", "databases"],
        pathways: &["Backend Developer", "Data Engineer", "ML Engineer"],
        url: "https://www.postgresqltutorial.com",
    },
    LearningResource {
        id: "designing-data-intensive",
        title: "Designing Data-Intensive Applications",
        description: "The standard reference on replication, partitioning, and stream processing.",
        kind: ResourceKind::Book,
        difficulty: Difficulty::Advanced,
        duration: "25 hours",
        free: false,
        featured: true,
        rating: 4.9,
        tags: &["distributed systems", "databases", "architecture"],
        pathways: &["Backend Developer", "Data Engineer", "Cloud Architect"],
        url: "https://dataintensive.net",
    },
    LearningResource {
        id: "fastai-course",
        title: "Practical Deep Learning for Coders",
        description: "Top-down deep learning with fastai and PyTorch, deployment included.",
        kind: ResourceKind::Course,
        difficulty: Difficulty::Intermediate,
        duration: "50 hours",
        free: true,
        featured: false,
        rating: 4.8,
        tags: &["machine learning", "deep learning", "pytorch"],
        pathways: &["ML Engineer"],
        url: "https://course.fast.ai",
    },
    LearningResource {
        id: "kaggle-titanic",
        title: "Kaggle: Titanic Competition",
        description: "A first end-to-end modeling project with public leaderboard feedback.",
        kind: ResourceKind::Project,
        difficulty: Difficulty::Beginner,
        duration: "10 hours",
        free: true,
        featured: false,
        rating: 4.3,
        tags: &["machine learning", "pandas", "classification"],
        pathways: &["ML Engineer", "Data Engineer"],
        url: "https://www.kaggle.com/competitions/titanic",
    },
    LearningResource {
        id: "docker-getting-started",
        title: "Docker Getting Started",
        description: "Containerize an app, then move to multi-container setups with Compose.",
        kind: ResourceKind::Tutorial,
        difficulty: Difficulty::Beginner,
        duration: "6 hours",
        free: true,
        featured: false,
        rating: 4.4,
        tags: &["docker", "containers", "devops"],
        pathways: &["DevOps", "Backend Developer", "Cloud Architect"],
        url: "https://docs.docker.com/get-started/",
    },
    LearningResource {
        id: "kubernetes-hard-way",
        title: "Kubernetes the Hard Way",
        description: "Bootstrap a cluster by hand to learn every moving part underneath kubectl.",
        kind: ResourceKind::Tutorial,
        difficulty: Difficulty::Advanced,
        duration: "12 hours",
        free: true,
        featured: false,
        rating: 4.7,
        tags: &["kubernetes", "infrastructure", "devops"],
        pathways: &["DevOps", "Cloud Architect"],
        url: "https://github.com/kelseyhightower/kubernetes-the-hard-way",
    },
    LearningResource {
        id: "leetcode",
        title: "LeetCode",
        description: "Interview-style algorithm practice with company-tagged problem sets.",
        kind: ResourceKind::Practice,
        difficulty: Difficulty::Intermediate,
        duration: "ongoing",
        free: false,
        featured: false,
        rating: 4.5,
        tags: &["algorithms", "interview prep", "data structures"],
        pathways: &["All Paths"],
        url: "https://leetcode.com",
    },
    LearningResource {
        id: "system-design-primer",
        title: "System Design Primer",
        description: "Scalability topics, trade-off discussions, and interview question walkthroughs.",
        kind: ResourceKind::Article,
        difficulty: Difficulty::Intermediate,
        duration: "20 hours",
        free: true,
        featured: true,
        rating: 4.8,
        tags: &["system design", "scalability", "interview prep"],
        pathways: &["Backend Developer", "Full-Stack Developer", "Cloud Architect"],
        url: "https://github.com/donnemartin/system-design-primer",
    },
    LearningResource {
        id: "figma",
        title: "Figma",
        description: "Collaborative interface design tool; free tier covers personal projects.",
        kind: ResourceKind::Tool,
        difficulty: Difficulty::Beginner,
        duration: "n/a",
        free: true,
        featured: false,
        rating: 4.6,
        tags: &["design", "ui", "prototyping"],
        pathways: &["Frontend Developer", "Mobile Developer"],
        url: "https://www.figma.com",
    },
    LearningResource {
        id: "missing-semester",
        title: "The Missing Semester of Your CS Education",
        description: "MIT lectures on the shell, git, debugging, and the tools courses skip.",
        kind: ResourceKind::Video,
        difficulty: Difficulty::Beginner,
        duration: "12 hours",
        free: true,
        featured: false,
        rating: 4.7,
        tags: &["shell", "git", "tooling"],
        pathways: &["All Paths"],
        url: "https://missing.csail.mit.edu",
    },
];

/// All resources in catalog order.
pub fn resources() -> &'static [LearningResource] {
    &LEARNING_RESOURCES
}

pub fn filter_resources(filter: &ResourceFilter) -> Vec<&'static LearningResource> {
    LEARNING_RESOURCES
        .iter()
        .filter(|resource| filter.matches(resource))
        .collect()
}

pub fn featured_resources() -> Vec<&'static LearningResource> {
    LEARNING_RESOURCES
        .iter()
        .filter(|resource| resource.featured)
        .collect()
}

/// First `limit` resources tagged with the pathway, in catalog order.
pub fn recommended_resources(pathway: &str, limit: usize) -> Vec<&'static LearningResource> {
    LEARNING_RESOURCES
        .iter()
        .filter(|resource| resource.pathways.contains(&pathway))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filter_matches_everything() {
        let all = filter_resources(&ResourceFilter::default());
        assert_eq!(all.len(), LEARNING_RESOURCES.len());
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = ResourceFilter {
            kind: Some(ResourceKind::Tutorial),
            difficulty: Some(Difficulty::Beginner),
            free_only: true,
            ..ResourceFilter::default()
        };
        let hits = filter_resources(&filter);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|resource| {
            resource.kind == ResourceKind::Tutorial
                && resource.difficulty == Difficulty::Beginner
                && resource.free
        }));
    }

    #[test]
    fn query_searches_tags_case_insensitively() {
        let filter = ResourceFilter {
            query: Some("KUBERNETES".to_string()),
            ..ResourceFilter::default()
        };
        let hits = filter_resources(&filter);
        assert!(hits
            .iter()
            .any(|resource| resource.id == "kubernetes-hard-way"));
    }

    #[test]
    fn recommendations_respect_the_limit() {
        let hits = recommended_resources("Frontend Developer", 2);
        assert_eq!(hits.len(), 2);
        assert!(hits
            .iter()
            .all(|resource| resource.pathways.contains(&"Frontend Developer")));
    }
}
