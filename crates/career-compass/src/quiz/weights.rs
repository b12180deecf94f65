use crate::catalog::CareerPathId;

/// One scoring target for a question: the path it signals, how directly
/// it signals it (1..=3), and the reason shown when the user liked the
/// prompt.
pub(crate) struct TargetWeight {
    pub(crate) path: CareerPathId,
    pub(crate) multiplier: u8,
    pub(crate) reason: Option<&'static str>,
}

/// Static question-to-path signal table. Every answer is folded through
/// this mapping; unknown ids map to nothing.
pub(crate) fn weights_for(question_id: &str) -> &'static [TargetWeight] {
    match question_id {
        // UI work
        "q1" => &[
            TargetWeight {
                path: CareerPathId::Frontend,
                multiplier: 3,
                reason: Some("You love building beautiful interfaces"),
            },
            TargetWeight {
                path: CareerPathId::FullStack,
                multiplier: 2,
                reason: None,
            },
            TargetWeight {
                path: CareerPathId::Mobile,
                multiplier: 2,
                reason: None,
            },
        ],
        // Data and databases
        "q2" => &[
            TargetWeight {
                path: CareerPathId::DataEngineer,
                multiplier: 3,
                reason: Some("You enjoy working with data"),
            },
            TargetWeight {
                path: CareerPathId::Backend,
                multiplier: 2,
                reason: None,
            },
            TargetWeight {
                path: CareerPathId::FullStack,
                multiplier: 1,
                reason: None,
            },
        ],
        // Algorithms
        "q3" => &[
            TargetWeight {
                path: CareerPathId::MlEngineer,
                multiplier: 2,
                reason: Some("You excel at complex problem-solving"),
            },
            TargetWeight {
                path: CareerPathId::Backend,
                multiplier: 2,
                reason: None,
            },
        ],
        // Visual feedback
        "q4" => &[
            TargetWeight {
                path: CareerPathId::Frontend,
                multiplier: 3,
                reason: Some("You prefer visual, tangible results"),
            },
            TargetWeight {
                path: CareerPathId::GameDev,
                multiplier: 2,
                reason: None,
            },
            TargetWeight {
                path: CareerPathId::Mobile,
                multiplier: 2,
                reason: None,
            },
        ],
        // Infrastructure and automation
        "q5" => &[
            TargetWeight {
                path: CareerPathId::Devops,
                multiplier: 3,
                reason: Some("You're passionate about automation"),
            },
            TargetWeight {
                path: CareerPathId::CloudArchitect,
                multiplier: 2,
                reason: None,
            },
        ],
        // Deep technical focus
        "q6" => &[
            TargetWeight {
                path: CareerPathId::Backend,
                multiplier: 2,
                reason: Some("You enjoy deep technical challenges"),
            },
            TargetWeight {
                path: CareerPathId::Embedded,
                multiplier: 2,
                reason: None,
            },
            TargetWeight {
                path: CareerPathId::Security,
                multiplier: 2,
                reason: None,
            },
        ],
        // Mobile apps
        "q7" => &[TargetWeight {
            path: CareerPathId::Mobile,
            multiplier: 3,
            reason: Some("You want to build mobile applications"),
        }],
        // Security
        "q8" => &[TargetWeight {
            path: CareerPathId::Security,
            multiplier: 3,
            reason: Some("You're interested in cybersecurity"),
        }],
        // ML and AI
        "q9" => &[TargetWeight {
            path: CareerPathId::MlEngineer,
            multiplier: 3,
            reason: Some("You're excited about AI and machine learning"),
        }],
        // Full-stack preference
        "q10" => &[TargetWeight {
            path: CareerPathId::FullStack,
            multiplier: 3,
            reason: Some("You want to build complete applications"),
        }],
        // Hardware and IoT
        "q11" => &[TargetWeight {
            path: CareerPathId::Embedded,
            multiplier: 3,
            reason: Some("You're interested in hardware programming"),
        }],
        // Creative and design work
        "q12" => &[
            TargetWeight {
                path: CareerPathId::Frontend,
                multiplier: 2,
                reason: None,
            },
            TargetWeight {
                path: CareerPathId::GameDev,
                multiplier: 2,
                reason: Some("You value creative work"),
            },
        ],
        // Backend systems
        "q13" => &[
            TargetWeight {
                path: CareerPathId::Backend,
                multiplier: 3,
                reason: Some("You're interested in backend systems"),
            },
            TargetWeight {
                path: CareerPathId::FullStack,
                multiplier: 2,
                reason: None,
            },
        ],
        // Game development
        "q14" => &[TargetWeight {
            path: CareerPathId::GameDev,
            multiplier: 3,
            reason: Some("You're passionate about game development"),
        }],
        // Cloud architecture
        "q15" => &[
            TargetWeight {
                path: CareerPathId::CloudArchitect,
                multiplier: 3,
                reason: Some("You want to design cloud infrastructure"),
            },
            TargetWeight {
                path: CareerPathId::Devops,
                multiplier: 2,
                reason: None,
            },
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_question_has_weights_and_a_reason_target() {
        for question in catalog::quiz_questions() {
            let weights = weights_for(question.id);
            assert!(!weights.is_empty(), "no weights for {}", question.id);
            assert!(
                weights.iter().filter(|w| w.reason.is_some()).count() == 1,
                "{} should carry exactly one reason",
                question.id
            );
            assert!(weights
                .iter()
                .all(|w| (1..=3).contains(&w.multiplier)));
        }
    }

    #[test]
    fn unknown_question_maps_to_nothing() {
        assert!(weights_for("q99").is_empty());
    }
}
