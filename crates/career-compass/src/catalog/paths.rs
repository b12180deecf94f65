use serde::{Deserialize, Serialize};

/// Closed registry of career paths. Declaration order is load-bearing:
/// match results break score ties by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerPathId {
    FullStack,
    Frontend,
    Backend,
    MlEngineer,
    Devops,
    Mobile,
    DataEngineer,
    Security,
    GameDev,
    Embedded,
    Blockchain,
    CloudArchitect,
}

impl CareerPathId {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::FullStack,
            Self::Frontend,
            Self::Backend,
            Self::MlEngineer,
            Self::Devops,
            Self::Mobile,
            Self::DataEngineer,
            Self::Security,
            Self::GameDev,
            Self::Embedded,
            Self::Blockchain,
            Self::CloudArchitect,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::FullStack => "full-stack",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::MlEngineer => "ml-engineer",
            Self::Devops => "devops",
            Self::Mobile => "mobile",
            Self::DataEngineer => "data-engineer",
            Self::Security => "security",
            Self::GameDev => "game-dev",
            Self::Embedded => "embedded",
            Self::Blockchain => "blockchain",
            Self::CloudArchitect => "cloud-architect",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|id| id.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Moderate,
    High,
    VeryHigh,
}

impl DemandLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// One entry in the career-path catalog. All content is compiled in and
/// immutable for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub id: CareerPathId,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub time_to_job: &'static str,
    pub avg_salary: &'static str,
    pub demand: DemandLevel,
    pub skills: &'static [&'static str],
    pub top_companies: &'static [&'static str],
    pub day_to_day: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

static CAREER_PATHS: [CareerPath; 12] = [
    CareerPath {
        id: CareerPathId::FullStack,
        title: "Full-Stack Developer",
        description: "Build complete web applications from frontend to backend",
        difficulty: Difficulty::Beginner,
        time_to_job: "6-12 months",
        avg_salary: "$95k - $140k",
        demand: DemandLevel::VeryHigh,
        skills: &["React", "Node.js", "TypeScript", "SQL", "REST APIs", "Git"],
        top_companies: &["Meta", "Google", "Stripe", "Vercel", "Shopify"],
        day_to_day: &[
            "Build user interfaces with React/Next.js",
            "Design and implement REST APIs",
            "Work with databases and data models",
            "Collaborate with designers and PMs",
        ],
        pros: &[
            "High demand",
            "Versatile skillset",
            "See your work come to life",
            "Remote-friendly",
        ],
        cons: &[
            "Broad knowledge required",
            "Fast-changing ecosystem",
            "Can feel overwhelming at first",
        ],
    },
    CareerPath {
        id: CareerPathId::Frontend,
        title: "Frontend Engineer",
        description: "Create beautiful, responsive user interfaces",
        difficulty: Difficulty::Beginner,
        time_to_job: "4-8 months",
        avg_salary: "$90k - $135k",
        demand: DemandLevel::VeryHigh,
        skills: &[
            "React",
            "TypeScript",
            "CSS/Tailwind",
            "Next.js",
            "Accessibility",
            "Performance",
        ],
        top_companies: &["Airbnb", "Netflix", "Figma", "Vercel", "Shopify"],
        day_to_day: &[
            "Implement pixel-perfect designs",
            "Optimize web performance",
            "Ensure accessibility standards",
            "Build reusable component libraries",
        ],
        pros: &[
            "Visual feedback",
            "Creative work",
            "High demand",
            "Great for design-minded devs",
        ],
        cons: &[
            "Browser compatibility issues",
            "Design handoff challenges",
            "CSS can be tricky",
        ],
    },
    CareerPath {
        id: CareerPathId::Backend,
        title: "Backend Engineer",
        description: "Build scalable APIs and server infrastructure",
        difficulty: Difficulty::Intermediate,
        time_to_job: "8-14 months",
        avg_salary: "$100k - $150k",
        demand: DemandLevel::VeryHigh,
        skills: &[
            "Node.js/Python",
            "SQL/NoSQL",
            "System Design",
            "APIs",
            "Cloud (AWS/GCP)",
            "Docker",
        ],
        top_companies: &["Amazon", "Google", "Stripe", "Uber", "Databricks"],
        day_to_day: &[
            "Design database schemas",
            "Build and optimize APIs",
            "Implement authentication systems",
            "Monitor system performance",
        ],
        pros: &[
            "High pay",
            "Deep technical work",
            "Less UI churn",
            "Strong fundamentals",
        ],
        cons: &["Less visual feedback", "Complex debugging", "On-call rotations"],
    },
    CareerPath {
        id: CareerPathId::MlEngineer,
        title: "ML Engineer",
        description: "Build and deploy machine learning systems",
        difficulty: Difficulty::Advanced,
        time_to_job: "12-18 months",
        avg_salary: "$120k - $180k",
        demand: DemandLevel::VeryHigh,
        skills: &[
            "Python",
            "TensorFlow/PyTorch",
            "Statistics",
            "SQL",
            "MLOps",
            "Cloud",
        ],
        top_companies: &["OpenAI", "Google", "Meta", "Tesla", "Anthropic"],
        day_to_day: &[
            "Train and fine-tune models",
            "Build ML pipelines",
            "Deploy models to production",
            "Monitor model performance",
        ],
        pros: &[
            "Cutting-edge tech",
            "Very high pay",
            "Intellectually stimulating",
            "High impact",
        ],
        cons: &[
            "Steep learning curve",
            "Requires math background",
            "Long training times",
            "Expensive compute",
        ],
    },
    CareerPath {
        id: CareerPathId::Devops,
        title: "DevOps Engineer",
        description: "Automate infrastructure and deployment pipelines",
        difficulty: Difficulty::Intermediate,
        time_to_job: "10-16 months",
        avg_salary: "$105k - $155k",
        demand: DemandLevel::High,
        skills: &["Docker", "Kubernetes", "CI/CD", "AWS/GCP", "Terraform", "Linux"],
        top_companies: &["Amazon", "Google", "Netflix", "Datadog", "HashiCorp"],
        day_to_day: &[
            "Manage cloud infrastructure",
            "Build CI/CD pipelines",
            "Monitor system health",
            "Automate deployments",
        ],
        pros: &["High demand", "Good pay", "Automation focus", "Critical role"],
        cons: &[
            "On-call duties",
            "High pressure",
            "Steep learning curve",
            "Lots of tools to learn",
        ],
    },
    CareerPath {
        id: CareerPathId::Mobile,
        title: "Mobile Developer",
        description: "Build native iOS and Android applications",
        difficulty: Difficulty::Intermediate,
        time_to_job: "8-12 months",
        avg_salary: "$95k - $145k",
        demand: DemandLevel::High,
        skills: &[
            "React Native/Swift/Kotlin",
            "Mobile UI",
            "APIs",
            "App Store",
            "Performance",
            "Testing",
        ],
        top_companies: &["Apple", "Google", "Meta", "Uber", "Airbnb"],
        day_to_day: &[
            "Build mobile interfaces",
            "Integrate with device APIs",
            "Optimize app performance",
            "Handle app store submissions",
        ],
        pros: &[
            "Direct user impact",
            "Growing market",
            "Good pay",
            "Creative work",
        ],
        cons: &[
            "Platform fragmentation",
            "App store approval process",
            "Device testing complexity",
        ],
    },
    CareerPath {
        id: CareerPathId::DataEngineer,
        title: "Data Engineer",
        description: "Build data pipelines and warehouses",
        difficulty: Difficulty::Intermediate,
        time_to_job: "10-14 months",
        avg_salary: "$110k - $160k",
        demand: DemandLevel::VeryHigh,
        skills: &["SQL", "Python", "Spark", "Airflow", "Data Warehousing", "ETL"],
        top_companies: &["Snowflake", "Databricks", "Amazon", "Google", "Uber"],
        day_to_day: &[
            "Build ETL pipelines",
            "Design data warehouses",
            "Optimize query performance",
            "Ensure data quality",
        ],
        pros: &[
            "Very high demand",
            "Great pay",
            "Foundational role",
            "Job security",
        ],
        cons: &[
            "Can be repetitive",
            "Less creative",
            "Data quality issues",
            "Complex debugging",
        ],
    },
    CareerPath {
        id: CareerPathId::Security,
        title: "Security Engineer",
        description: "Protect systems from vulnerabilities and attacks",
        difficulty: Difficulty::Advanced,
        time_to_job: "12-18 months",
        avg_salary: "$115k - $170k",
        demand: DemandLevel::VeryHigh,
        skills: &[
            "Network Security",
            "Cryptography",
            "Penetration Testing",
            "Compliance",
            "Python",
            "Cloud Security",
        ],
        top_companies: &[
            "Google",
            "Meta",
            "Apple",
            "CrowdStrike",
            "Palo Alto Networks",
        ],
        day_to_day: &[
            "Conduct security audits",
            "Respond to incidents",
            "Implement security controls",
            "Educate teams on best practices",
        ],
        pros: &[
            "Critical role",
            "High pay",
            "Job security",
            "Intellectually challenging",
        ],
        cons: &[
            "High stress",
            "On-call rotations",
            "Constant learning required",
            "Adversarial mindset",
        ],
    },
    CareerPath {
        id: CareerPathId::GameDev,
        title: "Game Developer",
        description: "Create interactive gaming experiences",
        difficulty: Difficulty::Intermediate,
        time_to_job: "10-16 months",
        avg_salary: "$75k - $120k",
        demand: DemandLevel::Moderate,
        skills: &[
            "Unity/Unreal",
            "C#/C++",
            "3D Math",
            "Physics",
            "Game Design",
            "Optimization",
        ],
        top_companies: &["Epic Games", "Riot Games", "Valve", "Blizzard", "Unity"],
        day_to_day: &[
            "Implement game mechanics",
            "Optimize performance",
            "Work with artists and designers",
            "Debug gameplay issues",
        ],
        pros: &[
            "Creative work",
            "Passion-driven",
            "See your work played",
            "Unique challenges",
        ],
        cons: &[
            "Lower pay",
            "Crunch culture",
            "Competitive field",
            "Job instability",
        ],
    },
    CareerPath {
        id: CareerPathId::Embedded,
        title: "Embedded Engineer",
        description: "Program hardware and IoT devices",
        difficulty: Difficulty::Advanced,
        time_to_job: "12-18 months",
        avg_salary: "$100k - $150k",
        demand: DemandLevel::High,
        skills: &[
            "C/C++",
            "RTOS",
            "Hardware",
            "Protocols",
            "Debugging",
            "Low-level Programming",
        ],
        top_companies: &["Tesla", "Apple", "Intel", "NVIDIA", "SpaceX"],
        day_to_day: &[
            "Write firmware for devices",
            "Debug hardware issues",
            "Optimize for constraints",
            "Work with hardware teams",
        ],
        pros: &[
            "Unique skillset",
            "Good pay",
            "Tangible products",
            "Job security",
        ],
        cons: &[
            "Steep learning curve",
            "Hardware dependencies",
            "Slower iteration",
            "Niche field",
        ],
    },
    CareerPath {
        id: CareerPathId::Blockchain,
        title: "Blockchain Developer",
        description: "Build decentralized applications and smart contracts",
        difficulty: Difficulty::Advanced,
        time_to_job: "12-18 months",
        avg_salary: "$110k - $180k",
        demand: DemandLevel::Moderate,
        skills: &[
            "Solidity",
            "Web3.js",
            "Smart Contracts",
            "Cryptography",
            "DeFi",
            "Security",
        ],
        top_companies: &["Coinbase", "Consensys", "Chainlink", "Polygon", "Alchemy"],
        day_to_day: &[
            "Write smart contracts",
            "Build dApps",
            "Audit contract security",
            "Integrate with blockchains",
        ],
        pros: &[
            "Cutting-edge tech",
            "Very high pay potential",
            "Remote-friendly",
            "Innovative space",
        ],
        cons: &[
            "Volatile industry",
            "Security critical",
            "Regulatory uncertainty",
            "Niche market",
        ],
    },
    CareerPath {
        id: CareerPathId::CloudArchitect,
        title: "Cloud Architect",
        description: "Design scalable cloud infrastructure",
        difficulty: Difficulty::Advanced,
        time_to_job: "14-20 months",
        avg_salary: "$130k - $190k",
        demand: DemandLevel::VeryHigh,
        skills: &[
            "AWS/GCP/Azure",
            "System Design",
            "Networking",
            "Security",
            "Cost Optimization",
            "Terraform",
        ],
        top_companies: &["Amazon", "Google", "Microsoft", "Snowflake", "Databricks"],
        day_to_day: &[
            "Design cloud architectures",
            "Optimize costs and performance",
            "Ensure security compliance",
            "Mentor engineering teams",
        ],
        pros: &["Very high pay", "Strategic role", "High impact", "Job security"],
        cons: &[
            "Requires experience",
            "High responsibility",
            "Constant learning",
            "Vendor lock-in challenges",
        ],
    },
];

/// All paths in declaration (tie-break) order.
pub fn career_paths() -> &'static [CareerPath] {
    &CAREER_PATHS
}

pub fn career_path(id: CareerPathId) -> &'static CareerPath {
    // CAREER_PATHS is declared in `ordered()` order; see the registry test.
    &CAREER_PATHS[id as usize]
}

pub fn find_career_path(slug: &str) -> Option<&'static CareerPath> {
    CareerPathId::from_slug(slug).map(career_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_declared_order() {
        let ordered = CareerPathId::ordered();
        assert_eq!(CAREER_PATHS.len(), ordered.len());
        for (path, id) in CAREER_PATHS.iter().zip(ordered) {
            assert_eq!(path.id, id);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for id in CareerPathId::ordered() {
            assert_eq!(CareerPathId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(CareerPathId::from_slug("quantum-dev"), None);
    }
}
