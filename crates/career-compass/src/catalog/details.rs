use super::paths::{career_path, CareerPath, CareerPathId};
use super::resources::ResourceKind;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProgressionStep {
    pub level: &'static str,
    pub title: String,
    pub salary: String,
    pub years: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseResource {
    pub title: String,
    pub kind: ResourceKind,
    pub free: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseOutline {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub resources: Vec<PhaseResource>,
    pub milestones: Vec<String>,
}

/// A career path joined with its long-form guidance: prerequisites,
/// progression ladder, and a phased study outline.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedCareerPath {
    pub path: &'static CareerPath,
    pub prerequisites: Vec<String>,
    pub learning_path: String,
    pub progression: Vec<ProgressionStep>,
    pub phases: Vec<PhaseOutline>,
}

/// Hand-authored detail exists for the flagship path; every other path
/// gets an outline synthesized from its catalog record.
pub fn detailed_career_path(id: CareerPathId) -> DetailedCareerPath {
    match id {
        CareerPathId::FullStack => full_stack_detail(),
        other => synthesized_detail(other),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn phase(
    number: usize,
    title: &str,
    duration: &str,
    description: &str,
    skills: &[&str],
    resources: Vec<PhaseResource>,
    milestones: &[&str],
) -> PhaseOutline {
    PhaseOutline {
        id: format!("phase-{number}"),
        title: title.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        skills: owned(skills),
        resources,
        milestones: owned(milestones),
    }
}

fn phase_resource(title: &str, kind: ResourceKind, free: bool) -> PhaseResource {
    PhaseResource {
        title: title.to_string(),
        kind,
        free,
    }
}

fn full_stack_detail() -> DetailedCareerPath {
    let path = career_path(CareerPathId::FullStack);
    DetailedCareerPath {
        path,
        prerequisites: owned(&[
            "Basic programming knowledge",
            "Understanding of how websites work",
            "Problem-solving mindset",
        ]),
        learning_path: "Start with frontend fundamentals, then add backend skills, and finally \
                        integrate them into full applications."
            .to_string(),
        progression: vec![
            ProgressionStep {
                level: "Junior",
                title: "Junior Full-Stack Developer".to_string(),
                salary: "$70k - $95k".to_string(),
                years: "0-2",
            },
            ProgressionStep {
                level: "Mid",
                title: "Full-Stack Developer".to_string(),
                salary: "$95k - $140k".to_string(),
                years: "2-5",
            },
            ProgressionStep {
                level: "Senior",
                title: "Senior Full-Stack Engineer".to_string(),
                salary: "$140k - $180k".to_string(),
                years: "5-8",
            },
            ProgressionStep {
                level: "Lead",
                title: "Staff/Principal Engineer".to_string(),
                salary: "$180k - $250k+".to_string(),
                years: "8+",
            },
        ],
        phases: vec![
            phase(
                1,
                "Frontend Fundamentals",
                "2-3 months",
                "Master HTML, CSS, and JavaScript to build interactive user interfaces",
                &["HTML5", "CSS3", "JavaScript ES6+", "Responsive Design", "Git"],
                vec![
                    phase_resource(
                        "freeCodeCamp Responsive Web Design",
                        ResourceKind::Course,
                        true,
                    ),
                    phase_resource("JavaScript.info", ResourceKind::Course, true),
                    phase_resource("Build a Portfolio Website", ResourceKind::Project, true),
                    phase_resource("CSS Tricks", ResourceKind::Article, true),
                ],
                &[
                    "Build 3 responsive landing pages",
                    "Complete JavaScript fundamentals course",
                    "Create an interactive calculator",
                    "Deploy projects to GitHub Pages",
                ],
            ),
            phase(
                2,
                "React & Modern Frontend",
                "2-3 months",
                "Learn React and modern frontend tooling to build complex applications",
                &["React", "TypeScript", "Tailwind CSS", "Next.js", "State Management"],
                vec![
                    phase_resource("React Official Tutorial", ResourceKind::Course, true),
                    phase_resource("TypeScript Handbook", ResourceKind::Course, true),
                    phase_resource("Build a Todo App with React", ResourceKind::Project, true),
                    phase_resource("Next.js Documentation", ResourceKind::Course, true),
                ],
                &[
                    "Build 2 React applications",
                    "Learn TypeScript basics",
                    "Create a multi-page Next.js app",
                    "Implement client-side routing",
                ],
            ),
            phase(
                3,
                "Backend Basics",
                "2-3 months",
                "Learn server-side programming, databases, and API development",
                &["Node.js", "Express", "SQL", "PostgreSQL", "REST APIs", "Authentication"],
                vec![
                    phase_resource("Node.js Documentation", ResourceKind::Course, true),
                    phase_resource("PostgreSQL Tutorial", ResourceKind::Course, true),
                    phase_resource("Build a REST API", ResourceKind::Project, true),
                    phase_resource("JWT Authentication Guide", ResourceKind::Article, true),
                ],
                &[
                    "Build a CRUD API",
                    "Design a database schema",
                    "Implement user authentication",
                    "Deploy API to production",
                ],
            ),
            phase(
                4,
                "Full-Stack Integration",
                "2-3 months",
                "Connect frontend and backend to build complete applications",
                &[
                    "API Integration",
                    "Server Actions",
                    "Database ORMs",
                    "Deployment",
                    "Testing",
                ],
                vec![
                    phase_resource("Full-Stack Next.js Course", ResourceKind::Course, false),
                    phase_resource("Build a Social Media Clone", ResourceKind::Project, true),
                    phase_resource("Vercel Deployment Guide", ResourceKind::Article, true),
                    phase_resource("Testing with Jest", ResourceKind::Course, true),
                ],
                &[
                    "Build 2 full-stack projects",
                    "Implement real-time features",
                    "Deploy to production",
                    "Write integration tests",
                ],
            ),
            phase(
                5,
                "Job Prep & Portfolio",
                "1-2 months",
                "Polish your portfolio, practice interviews, and start applying",
                &[
                    "System Design",
                    "Algorithms",
                    "Interview Prep",
                    "Portfolio Building",
                    "Networking",
                ],
                vec![
                    phase_resource("LeetCode Easy/Medium", ResourceKind::Practice, true),
                    phase_resource("System Design Primer", ResourceKind::Course, true),
                    phase_resource("Build 3 Portfolio Projects", ResourceKind::Project, true),
                    phase_resource("Mock Interviews", ResourceKind::Practice, false),
                ],
                &[
                    "Complete 50 LeetCode problems",
                    "Build impressive portfolio",
                    "Practice system design",
                    "Apply to 50+ companies",
                ],
            ),
        ],
    }
}

fn synthesized_detail(id: CareerPathId) -> DetailedCareerPath {
    let path = career_path(id);
    let core_skills: Vec<&str> = path.skills.iter().take(3).copied().collect();
    let later_skills: Vec<&str> = path.skills.iter().skip(3).copied().collect();

    DetailedCareerPath {
        path,
        prerequisites: owned(&[
            "Basic programming knowledge",
            "Problem-solving skills",
            "Dedication to learning",
        ]),
        learning_path: "Follow a structured learning path from fundamentals to advanced topics."
            .to_string(),
        progression: vec![
            ProgressionStep {
                level: "Junior",
                title: format!("Junior {}", path.title),
                salary: "$70k - $95k".to_string(),
                years: "0-2",
            },
            ProgressionStep {
                level: "Mid",
                title: path.title.to_string(),
                salary: path.avg_salary.to_string(),
                years: "2-5",
            },
            ProgressionStep {
                level: "Senior",
                title: format!("Senior {}", path.title),
                salary: "$140k - $180k".to_string(),
                years: "5-8",
            },
            ProgressionStep {
                level: "Lead",
                title: "Staff/Principal Engineer".to_string(),
                salary: "$180k - $250k+".to_string(),
                years: "8+",
            },
        ],
        phases: vec![
            phase(
                1,
                "Fundamentals",
                "2-3 months",
                "Learn the core concepts and foundational skills",
                &core_skills,
                vec![
                    phase_resource("Online Course", ResourceKind::Course, true),
                    phase_resource("Practice Projects", ResourceKind::Project, true),
                ],
                &["Complete fundamentals course", "Build first project"],
            ),
            phase(
                2,
                "Intermediate Skills",
                "3-4 months",
                "Develop practical skills and build real projects",
                &later_skills,
                vec![
                    phase_resource("Advanced Course", ResourceKind::Course, false),
                    phase_resource("Build Portfolio Projects", ResourceKind::Project, true),
                ],
                &["Build 3 portfolio projects", "Learn advanced concepts"],
            ),
            phase(
                3,
                "Job Preparation",
                "1-2 months",
                "Prepare for interviews and start applying",
                &["Interview Prep", "System Design", "Portfolio"],
                vec![
                    phase_resource("Interview Practice", ResourceKind::Practice, true),
                    phase_resource("System Design Course", ResourceKind::Course, true),
                ],
                &["Complete interview prep", "Apply to companies"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagship_path_keeps_its_authored_outline() {
        let detail = detailed_career_path(CareerPathId::FullStack);
        assert_eq!(detail.phases.len(), 5);
        assert_eq!(detail.phases[0].title, "Frontend Fundamentals");
        assert_eq!(detail.progression.len(), 4);
    }

    #[test]
    fn other_paths_synthesize_from_catalog_record() {
        let detail = detailed_career_path(CareerPathId::Security);
        assert_eq!(detail.phases.len(), 3);
        assert_eq!(
            detail.phases[0].skills,
            vec!["Network Security", "Cryptography", "Penetration Testing"]
        );
        assert_eq!(detail.progression[1].salary, "$115k - $170k");
        assert!(detail.progression[0].title.starts_with("Junior "));
    }
}
