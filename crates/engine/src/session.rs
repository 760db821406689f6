use crate::{
    error::{Error, Result},
    summary::Summary,
};
use model::{AnswerLog, Question, QuizSet, Selection};

/// A quiz in progress. Each submission produces a new value; questions are never revisited.
#[derive(Clone, Debug)]
pub struct Session<'q> {
    quiz: &'q QuizSet,
    /// One entry per question already submitted. Its length is the current question index.
    answers: AnswerLog,
}

/// Where a session stands after a submission.
#[derive(Debug)]
pub enum Progress<'q> {
    InProgress(Session<'q>),
    Completed(Outcome<'q>),
}

impl<'q> Session<'q> {
    pub fn new(quiz: &'q QuizSet) -> Self {
        Self { quiz, answers: AnswerLog::new() }
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn index(&self) -> usize {
        self.answers.len()
    }

    pub fn current(&self) -> &'q Question {
        // An in-progress session always has fewer answers than questions.
        &self.quiz.as_slice()[self.index()]
    }

    pub const fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    /// Records `selection` for the current question and moves on to the next one.
    pub fn submit(&self, selection: Selection) -> Result<Progress<'q>> {
        let index = self.index();
        if let Err(err) = crate::check_selection(self.current(), &selection) {
            log::warn!("refused to submit question {index}: {err}");
            return Err(err);
        }

        log::debug!("question {index} submitted with {} choice(s)", selection.len());

        let mut answers = self.answers.clone();
        answers.append(selection);
        if answers.len() < self.quiz.len() {
            return Ok(Progress::InProgress(Self { quiz: self.quiz, answers }));
        }

        log::debug!("all {} questions answered", answers.len());
        Ok(Progress::Completed(Outcome { quiz: self.quiz, answers }))
    }
}

/// A finished session: the quiz together with one answer per question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<'q> {
    quiz: &'q QuizSet,
    answers: AnswerLog,
}

impl<'q> Outcome<'q> {
    /// Pairs a quiz with an answer log that was collected elsewhere.
    pub fn new(quiz: &'q QuizSet, answers: AnswerLog) -> Result<Self> {
        if answers.len() != quiz.len() {
            return Err(Error::AnswerLogLengthMismatch { expected: quiz.len(), found: answers.len() });
        }

        for (question, selection) in quiz.iter().zip(&answers) {
            crate::check_selection(question, selection)?;
        }

        Ok(Self { quiz, answers })
    }

    pub const fn quiz(&self) -> &'q QuizSet {
        self.quiz
    }

    pub const fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    /// Each question alongside the selection that was submitted for it.
    pub fn entries(&self) -> impl Iterator<Item = (&'q Question, &Selection)> + '_ {
        self.quiz.iter().zip(&self.answers)
    }

    /// Per-question correctness, in question order.
    pub fn verdicts(&self) -> impl Iterator<Item = bool> + '_ {
        self.entries().map(|(question, selection)| crate::is_correct(question, selection))
    }

    pub fn score(&self) -> usize {
        self.verdicts().filter(|&correct| correct).count()
    }

    pub fn summary(&self) -> Summary<'q> {
        Summary::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Progress, Session};
    use crate::error::Error;
    use model::{fixture::wizarding_world, AnswerLog, Selection};

    fn advance<'q>(session: &Session<'q>, selection: Selection) -> Session<'q> {
        match session.submit(selection).unwrap() {
            Progress::InProgress(next) => next,
            Progress::Completed(_) => panic!("session ended early"),
        }
    }

    #[test]
    fn walks_every_question_in_order() {
        let quiz = wizarding_world();
        let mut session = Session::new(&quiz);
        assert_eq!(session.index(), 0);
        assert_eq!(session.current().prompt(), "Who played Ron Weasley?");

        let picks = [Selection::single(3), Selection::single(2), Selection::from([2, 1]), Selection::single(1)];
        for (expected, pick) in picks.into_iter().enumerate() {
            assert_eq!(session.index(), expected);
            session = advance(&session, pick);
        }

        assert_eq!(session.index(), 4);
        let outcome = match session.submit(Selection::single(0)).unwrap() {
            Progress::Completed(outcome) => outcome,
            Progress::InProgress(_) => panic!("session should be complete"),
        };
        assert_eq!(outcome.answers().len(), 5);
        assert_eq!(outcome.score(), 5);
        assert!(outcome.verdicts().all(|correct| correct));
    }

    #[test]
    fn submitting_does_not_touch_the_previous_session() {
        let quiz = wizarding_world();
        let session = Session::new(&quiz);
        let next = advance(&session, Selection::single(1));
        assert_eq!(session.index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(next.index(), 1);
        assert_eq!(next.answers().get(0), Some(&Selection::single(1)));
    }

    #[test]
    fn rejects_selections_toggling_cannot_produce() {
        let quiz = wizarding_world();
        let session = Session::new(&quiz);
        assert!(matches!(session.submit(Selection::new()), Err(Error::EmptySelection)));
        assert!(matches!(session.submit(Selection::from([0, 3])), Err(Error::TooManyChoices { count: 2 })));
        assert!(matches!(
            session.submit(Selection::from([1, 4])),
            Err(Error::OutOfRangeChoiceIndex { index: 4, count: 4 })
        ));
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn outcome_requires_a_complete_log() {
        let quiz = wizarding_world();
        let partial: AnswerLog = [Selection::single(3)].into_iter().collect();
        assert_eq!(Outcome::new(&quiz, partial), Err(Error::AnswerLogLengthMismatch { expected: 5, found: 1 }));

        let with_gap: AnswerLog = [
            Selection::single(3),
            Selection::new(),
            Selection::from([1, 2]),
            Selection::single(1),
            Selection::single(0),
        ]
        .into_iter()
        .collect();
        assert_eq!(Outcome::new(&quiz, with_gap), Err(Error::EmptySelection));

        let out_of_range: AnswerLog = [
            Selection::single(9),
            Selection::single(2),
            Selection::from([1, 2]),
            Selection::single(1),
            Selection::single(0),
        ]
        .into_iter()
        .collect();
        assert_eq!(Outcome::new(&quiz, out_of_range), Err(Error::OutOfRangeChoiceIndex { index: 9, count: 4 }));

        let doubled: AnswerLog = [
            Selection::from([2, 3]),
            Selection::single(2),
            Selection::from([1, 2]),
            Selection::single(1),
            Selection::single(0),
        ]
        .into_iter()
        .collect();
        assert_eq!(Outcome::new(&quiz, doubled), Err(Error::TooManyChoices { count: 2 }));

        let zeros: AnswerLog = (0..5).map(|_| Selection::single(0)).collect();
        let outcome = Outcome::new(&quiz, zeros).unwrap();
        assert_eq!(outcome.verdicts().collect::<Vec<_>>(), [false, false, false, false, true]);
        assert_eq!(outcome.score(), 1);
    }
}
