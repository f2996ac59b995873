// ABOUTME: Pure reducer applying user actions to a session state
// ABOUTME: Brief generation cascades into a new approach and clears the estimate

use crate::error::Result;
use crate::types::{Action, Notice, SessionState, Transition};
use idbrief_core::RandomSource;
use idbrief_generator::{ApproachGenerator, BriefGenerator, Estimate};
use idbrief_quiz::QuizSession;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionReducer {
    briefs: BriefGenerator,
    approaches: ApproachGenerator,
}

impl SessionReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action` to `state`, returning the next state.
    ///
    /// `state` is never modified. On `Err` the caller keeps its current
    /// state; a refused action comes back as `Ok` with a notice.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        state: &SessionState,
        action: Action,
        rng: &mut R,
    ) -> Result<Transition> {
        debug!(%action, "Applying session action");

        match action {
            Action::GenerateBrief => {
                let brief = self.briefs.generate(rng)?;
                let approach = self.approaches.generate(rng)?;
                Ok(Transition::changed(SessionState {
                    brief: Some(brief),
                    approach: Some(approach),
                    estimate: None,
                    quiz: state.quiz.clone(),
                }))
            }
            Action::GenerateApproach => {
                let approach = self.approaches.generate(rng)?;
                Ok(Transition::changed(SessionState {
                    approach: Some(approach),
                    ..state.clone()
                }))
            }
            Action::GenerateEstimate => match &state.brief {
                Some(brief) => Ok(Transition::changed(SessionState {
                    estimate: Some(Estimate::for_brief(brief)),
                    ..state.clone()
                })),
                None => {
                    warn!("Estimate requested before any brief was generated");
                    Ok(Transition::refused(state.clone(), Notice::BriefRequired))
                }
            },
            Action::StartQuiz => Ok(Transition::changed(SessionState {
                quiz: QuizSession::start(),
                ..state.clone()
            })),
            Action::AnswerQuestion(style) => {
                let quiz = state.quiz.answer(style)?;
                Ok(Transition::changed(SessionState {
                    quiz,
                    ..state.clone()
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use idbrief_core::test_utils::ScriptedRandom;
    use idbrief_core::{Constraint, Format, LearningStyle, SeededRandom};
    use idbrief_quiz::{QuizError, QuizStatus};
    use pretty_assertions::assert_eq;

    fn reduce(state: &SessionState, action: Action, rng: &mut ScriptedRandom) -> SessionState {
        SessionReducer::new().apply(state, action, rng).unwrap().state
    }

    #[test]
    fn test_generate_brief_cascades_approach_and_clears_estimate() {
        let reducer = SessionReducer::new();
        let mut rng = SeededRandom::from_seed(11);

        let with_brief = reducer
            .apply(&SessionState::default(), Action::GenerateBrief, &mut rng)
            .unwrap()
            .state;
        let with_estimate = reducer
            .apply(&with_brief, Action::GenerateEstimate, &mut rng)
            .unwrap()
            .state;
        assert!(with_estimate.estimate.is_some());

        let regenerated = reducer
            .apply(&with_estimate, Action::GenerateBrief, &mut rng)
            .unwrap()
            .state;
        assert!(regenerated.brief.is_some());
        assert!(regenerated.approach.is_some());
        assert_eq!(regenerated.estimate, None);
    }

    #[test]
    fn test_generate_approach_leaves_brief_and_estimate() {
        let mut rng = ScriptedRandom::new(vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);
        let state = reduce(&SessionState::default(), Action::GenerateBrief, &mut rng);
        let state = reduce(&state, Action::GenerateEstimate, &mut rng);

        let next = reduce(&state, Action::GenerateApproach, &mut rng);
        assert_eq!(next.brief, state.brief);
        assert_eq!(next.estimate, state.estimate);
        assert_ne!(next.approach, state.approach);
    }

    #[test]
    fn test_estimate_without_brief_is_refused() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let state = SessionState {
            quiz: QuizSession::start(),
            ..SessionState::default()
        };

        let transition = SessionReducer::new()
            .apply(&state, Action::GenerateEstimate, &mut rng)
            .unwrap();

        assert_eq!(transition.notice, Some(Notice::BriefRequired));
        assert_eq!(transition.state, state);
        assert_eq!(transition.state.estimate, None);
        assert_eq!(
            transition.notice.map(|n| n.to_string()).as_deref(),
            Some("Please generate a Brief first!")
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_estimate_uses_brief_format_and_constraint() {
        // topic, audience, constraint=Limited budget, format=Micro-learning, client
        let mut rng = ScriptedRandom::new(vec![0, 0, 0, 0, 10, 0, 0, 0]);
        let state = reduce(&SessionState::default(), Action::GenerateBrief, &mut rng);
        let brief = state.brief.clone().unwrap();
        assert_eq!(brief.constraint, Constraint::LimitedBudget);
        assert_eq!(brief.format, Format::MicroLearning);

        let state = reduce(&state, Action::GenerateEstimate, &mut rng);
        assert_eq!(
            state.estimate,
            Some(Estimate {
                cost: 1500,
                timeline_weeks: 4
            })
        );
    }

    #[test]
    fn test_quiz_actions_do_not_touch_generated_content() {
        let mut rng = ScriptedRandom::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let state = reduce(&SessionState::default(), Action::GenerateBrief, &mut rng);
        let state = reduce(&state, Action::StartQuiz, &mut rng);
        let state = reduce(&state, Action::AnswerQuestion(LearningStyle::Solo), &mut rng);

        assert_eq!(state.quiz.status(), QuizStatus::InProgress { question_index: 1 });
        assert!(state.brief.is_some());
        assert!(state.approach.is_some());
    }

    #[test]
    fn test_answer_before_start_is_an_error() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let err = SessionReducer::new()
            .apply(
                &SessionState::default(),
                Action::AnswerQuestion(LearningStyle::Visual),
                &mut rng,
            )
            .unwrap_err();
        assert_eq!(err, SessionError::Quiz(QuizError::NotStarted));
    }
}
