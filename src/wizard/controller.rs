use crate::error::{Result, WayfareError};
use crate::wizard::{AnswerValue, Answers, StepDef};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Outcome of a `go_next` call. Rejected outcomes leave the wizard
/// unchanged; callers treat an unchanged index as the rejection signal
/// and consult `is_current_step_valid` to explain it to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// Moved forward; carries the new step index.
    Advanced(usize),
    /// The final step was valid; carries the accumulated answers.
    Completed(Answers),
    /// Current step invalid, or the wizard already completed. No-op.
    Rejected,
}

/// State machine for a fixed-length, ordered multi-step form flow
/// (checkout, itinerary planner). One instance per UI session; never
/// shared across sessions and never persisted.
pub struct Wizard {
    session_id: Uuid,
    created_at: DateTime<Utc>,
    steps: Vec<StepDef>,
    index: usize,
    answers: Answers,
    completed: bool,
}

impl Wizard {
    /// Builds a wizard over a non-empty, ordered step list. The step list
    /// is fixed for the lifetime of the session.
    pub fn new(steps: Vec<StepDef>) -> Result<Self> {
        if steps.is_empty() {
            return Err(WayfareError::EmptyWizard);
        }
        Ok(Self {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            steps,
            index: 0,
            answers: Answers::new(),
            completed: false,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current 0-based step index. Always < `step_count`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &StepDef {
        &self.steps[self.index]
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// True once the final step has been advanced past. The terminal
    /// state is only reachable through `go_next` on the last step.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Re-evaluates the active step's predicate against the current
    /// answers. Pure; callable at any time to drive UI enablement.
    pub fn is_current_step_valid(&self) -> bool {
        self.current_step().is_satisfied(&self.answers)
    }

    /// Merges a single field into the accumulated answers, overwriting
    /// any prior value. Never moves the index.
    pub fn set_answer(&mut self, field: impl Into<String>, value: AnswerValue) {
        self.answers.set(field, value);
    }

    /// Advances to the next step when the active step is valid. On the
    /// last step a valid advance completes the wizard and emits the
    /// accumulated answers instead of moving past the range.
    pub fn go_next(&mut self) -> NextOutcome {
        if self.completed || !self.is_current_step_valid() {
            debug!(
                session = %self.session_id,
                step = self.current_step().id(),
                "go_next rejected"
            );
            return NextOutcome::Rejected;
        }

        if self.index < self.steps.len() - 1 {
            self.index += 1;
            debug!(
                session = %self.session_id,
                step = self.current_step().id(),
                "advanced to step"
            );
            NextOutcome::Advanced(self.index)
        } else {
            self.completed = true;
            debug!(session = %self.session_id, "wizard completed");
            NextOutcome::Completed(self.answers.clone())
        }
    }

    /// Steps back one step. Never re-validates the step being left, and
    /// is a no-op at the first step. Going back from a completed wizard
    /// reopens it for edits.
    pub fn go_previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.completed = false;
        true
    }
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("session_id", &self.session_id)
            .field("index", &self.index)
            .field("steps", &self.steps.len())
            .field("completed", &self.completed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step_wizard() -> Wizard {
        let steps = vec![
            StepDef::new(
                "dates",
                Box::new(|answers: &Answers| answers.count("travelers").map_or(false, |n| n > 0)),
            ),
            StepDef::new(
                "budget",
                Box::new(|answers: &Answers| answers.contains("budget")),
            ),
            StepDef::always_valid("review"),
        ];
        Wizard::new(steps).unwrap()
    }

    #[test]
    fn empty_step_list_is_rejected_at_construction() {
        assert!(matches!(
            Wizard::new(Vec::new()),
            Err(WayfareError::EmptyWizard)
        ));
    }

    #[test]
    fn go_next_is_noop_while_step_invalid() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(0));

        assert!(!wizard.is_current_step_valid());
        assert_eq!(wizard.go_next(), NextOutcome::Rejected);
        assert_eq!(wizard.index(), 0);

        wizard.set_answer("travelers", AnswerValue::Count(2));
        assert!(wizard.is_current_step_valid());
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(1));
        assert_eq!(wizard.index(), 1);
    }

    #[test]
    fn go_previous_is_noop_at_first_step() {
        let mut wizard = three_step_wizard();
        assert!(!wizard.go_previous());
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn previous_then_next_restores_index_and_answers() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(2));
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(1));
        wizard.set_answer("budget", AnswerValue::Number(15000.0));

        let answers_before = wizard.answers().clone();
        assert!(wizard.go_previous());
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(1));
        assert_eq!(wizard.index(), 1);
        assert_eq!(wizard.answers(), &answers_before);
    }

    #[test]
    fn backward_navigation_never_revalidates() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(1));
        wizard.go_next();

        // Invalidate the step we came from; going back must still work
        wizard.set_answer("travelers", AnswerValue::Count(0));
        assert!(wizard.go_previous());
        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn completion_emits_accumulated_answers() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(4));
        wizard.go_next();
        wizard.set_answer("budget", AnswerValue::Number(20000.0));
        wizard.go_next();

        assert_eq!(wizard.index(), 2);
        match wizard.go_next() {
            NextOutcome::Completed(answers) => {
                assert_eq!(answers.count("travelers"), Some(4));
                assert_eq!(answers.number("budget"), Some(20000.0));
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(wizard.is_completed());

        // Completed wizards reject further advances but stay inspectable
        assert_eq!(wizard.go_next(), NextOutcome::Rejected);
        assert_eq!(wizard.index(), 2);
    }

    #[test]
    fn going_back_from_completed_reopens_the_wizard() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(1));
        wizard.go_next();
        wizard.set_answer("budget", AnswerValue::Number(5000.0));
        wizard.go_next();
        wizard.go_next();
        assert!(wizard.is_completed());

        assert!(wizard.go_previous());
        assert!(!wizard.is_completed());
        assert_eq!(wizard.index(), 1);
    }

    #[test]
    fn set_answer_overwrites_prior_value_without_moving() {
        let mut wizard = three_step_wizard();
        wizard.set_answer("travelers", AnswerValue::Count(1));
        wizard.set_answer("travelers", AnswerValue::Count(3));
        assert_eq!(wizard.answers().count("travelers"), Some(3));
        assert_eq!(wizard.index(), 0);
    }
}
