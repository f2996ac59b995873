// ABOUTME: Pure text composition for briefs and approaches
// ABOUTME: Each function maps drawn table values to fixed-template text, with no rendering concerns

use idbrief_core::{Audience, IdModel, LearningStyle, Theory, Topic};

pub fn client_label(number: usize) -> String {
    format!("Client {}", number)
}

pub fn project_title(topic: Topic, audience: Audience) -> String {
    format!("{} for {}", topic, audience)
}

/// The three learning objectives of a brief
pub fn objectives(topic: Topic, audience: Audience) -> Vec<String> {
    let topic_lower = topic.label().to_lowercase();
    vec![
        format!("Explain the basic principles of {}.", topic_lower),
        format!("Identify key challenges faced by {}.", audience),
        format!(
            "Implement best practices for {} in the workplace.",
            topic_lower
        ),
    ]
}

/// Why the drawn theory, style and model work together
pub fn synergy_explanation(style: LearningStyle, theory: Theory, model: IdModel) -> String {
    format!(
        "By incorporating the principles of {theory}, the instruction can focus on how learners \
         perceive and process information. Emphasizing a {style} learning style ensures that the \
         content delivery matches the modality preferences of the target audience. Structuring it \
         all under {model} provides a systematic approach that keeps development phases clear and \
         iterative, enabling adjustments to maintain learner engagement and alignment with outcomes."
    )
}

/// Five-step plan for structuring a training around the approach
pub fn application_steps(style: LearningStyle, theory: Theory, model: IdModel) -> Vec<String> {
    vec![
        "Analysis: Identify the learning context, audience needs, and constraints.".to_string(),
        format!(
            "Design: Develop objectives and content flow based on {theory}, accommodating {style} preferences."
        ),
        format!(
            "Development: Use {model} steps to create modules that reinforce {theory} and suit {style} styles."
        ),
        "Implementation: Roll out your training iteratively, collecting feedback.".to_string(),
        format!("Evaluation: Leverage {model}'s evaluation strategies to measure learner progress."),
    ]
}

pub fn format_cost(cost: u32) -> String {
    format!("${}", cost)
}

/// "1 week", "5 weeks"
pub fn format_timeline(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbrief_core::constants::{APPLICATION_STEP_COUNT, OBJECTIVE_COUNT};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_objectives_lowercase_topic() {
        let objectives = objectives(Topic::HealthSafety, Audience::HrTeams);
        assert_eq!(objectives.len(), OBJECTIVE_COUNT);
        assert_eq!(
            objectives,
            vec![
                "Explain the basic principles of health & safety.".to_string(),
                "Identify key challenges faced by HR teams.".to_string(),
                "Implement best practices for health & safety in the workplace.".to_string(),
            ]
        );
    }

    #[test]
    fn test_project_title() {
        assert_eq!(
            project_title(Topic::SalesEnablement, Audience::RetailStaff),
            "Sales Enablement for Retail staff"
        );
    }

    #[test]
    fn test_synergy_mentions_every_choice() {
        let text = synergy_explanation(
            LearningStyle::Kinesthetic,
            Theory::Constructivism,
            IdModel::Addie,
        );
        assert!(text.starts_with("By incorporating the principles of Constructivism,"));
        assert!(text.contains("Emphasizing a Kinesthetic learning style"));
        assert!(text.contains("Structuring it all under ADDIE provides"));
        assert!(!text.contains("  "));
    }

    #[test]
    fn test_application_steps() {
        let steps = application_steps(LearningStyle::Social, Theory::Humanism, IdModel::Kemp);
        assert_eq!(steps.len(), APPLICATION_STEP_COUNT);
        assert_eq!(
            steps[2],
            "Development: Use Kemp Design Model steps to create modules that reinforce Humanism and suit Social styles."
        );
        assert_eq!(
            steps[4],
            "Evaluation: Leverage Kemp Design Model's evaluation strategies to measure learner progress."
        );
        let prefixes: Vec<&str> = steps
            .iter()
            .map(|s| s.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            prefixes,
            vec!["Analysis", "Design", "Development", "Implementation", "Evaluation"]
        );
    }

    #[test]
    fn test_format_timeline_pluralizes() {
        assert_eq!(format_timeline(1), "1 week");
        assert_eq!(format_timeline(5), "5 weeks");
        assert_eq!(format_cost(6000), "$6000");
    }

    #[test]
    fn test_client_label() {
        assert_eq!(client_label(0), "Client 0");
        assert_eq!(client_label(999), "Client 999");
    }
}
