use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Interest,
    Skill,
    Preference,
    Workstyle,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Preference => "Preference",
            Self::Workstyle => "Workstyle",
        }
    }
}

/// A single swipe-quiz prompt. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub description: &'static str,
    pub category: QuestionCategory,
}

static QUIZ_QUESTIONS: [QuizQuestion; 15] = [
    QuizQuestion {
        id: "q1",
        prompt: "Building beautiful user interfaces",
        description:
            "You love making things look good and creating smooth, delightful user experiences",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q2",
        prompt: "Working with data and databases",
        description:
            "You enjoy organizing information, writing queries, and building data pipelines",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q3",
        prompt: "Solving complex algorithms",
        description: "You get excited about optimization problems and finding elegant solutions",
        category: QuestionCategory::Skill,
    },
    QuizQuestion {
        id: "q4",
        prompt: "Seeing your work come to life visually",
        description:
            "You prefer immediate visual feedback and tangible results you can show others",
        category: QuestionCategory::Preference,
    },
    QuizQuestion {
        id: "q5",
        prompt: "Working on infrastructure and automation",
        description: "You like building systems that make other developers' lives easier",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q6",
        prompt: "Deep technical problem-solving",
        description: "You enjoy diving deep into complex technical challenges that require focus",
        category: QuestionCategory::Workstyle,
    },
    QuizQuestion {
        id: "q7",
        prompt: "Building mobile apps",
        description: "You're interested in creating apps for iOS and Android that people use daily",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q8",
        prompt: "Security and protecting systems",
        description:
            "You're fascinated by cybersecurity, vulnerabilities, and keeping systems safe",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q9",
        prompt: "Machine learning and AI",
        description:
            "You're excited about training models and working with cutting-edge AI technology",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q10",
        prompt: "Full-stack development",
        description:
            "You want to understand both frontend and backend to build complete applications",
        category: QuestionCategory::Preference,
    },
    QuizQuestion {
        id: "q11",
        prompt: "Working with hardware and IoT",
        description: "You're interested in programming physical devices and embedded systems",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q12",
        prompt: "Creative and design-focused work",
        description: "You have an eye for design and enjoy the creative aspects of development",
        category: QuestionCategory::Workstyle,
    },
    QuizQuestion {
        id: "q13",
        prompt: "Building scalable backend systems",
        description: "You're interested in APIs, databases, and server-side architecture",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q14",
        prompt: "Game development",
        description: "You're passionate about creating interactive gaming experiences",
        category: QuestionCategory::Interest,
    },
    QuizQuestion {
        id: "q15",
        prompt: "Cloud architecture and infrastructure",
        description: "You want to design and manage large-scale cloud systems",
        category: QuestionCategory::Interest,
    },
];

/// All questions in presentation order.
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUIZ_QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS.iter().find(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_are_unique() {
        for (index, question) in QUIZ_QUESTIONS.iter().enumerate() {
            assert!(
                QUIZ_QUESTIONS[index + 1..]
                    .iter()
                    .all(|other| other.id != question.id),
                "duplicate question id {}",
                question.id
            );
        }
    }

    #[test]
    fn lookup_tolerates_unknown_ids() {
        assert!(find_question("q1").is_some());
        assert!(find_question("q99").is_none());
    }
}
