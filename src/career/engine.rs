use super::category::CareerCategory;
use super::table::ScoringTable;
use crate::quiz::answers::AnswerSet;

/// Per-category vote counts, indexed by declared category order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [u32; CareerCategory::COUNT],
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: CareerCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: CareerCategory) -> u32 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (CareerCategory, u32)> + '_ {
        CareerCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Category with the highest count.
    ///
    /// Walks the declared order once and only replaces the running best on a
    /// strict improvement, so ties go to the earliest category and an all-zero
    /// tally yields the first one.
    pub fn best(&self) -> CareerCategory {
        let mut best = CareerCategory::ALL[0];
        let mut best_count = self.get(best);
        for (category, count) in self.iter().skip(1) {
            if count > best_count {
                best = category;
                best_count = count;
            }
        }
        best
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub result: CareerCategory,
    pub tally: CategoryTally,
    /// Number of answered questions
    pub answered: usize,
    /// Answers whose option key is not in the scoring table
    pub unmapped: usize,
}

/// Score an answer set against a scoring table.
///
/// Each answered option key found in the table adds one vote to its category.
/// Unknown keys are counted as unmapped and otherwise ignored.
pub fn score_quiz(answers: &AnswerSet, table: &ScoringTable) -> QuizOutcome {
    let mut tally = CategoryTally::new();
    let mut unmapped = 0;

    for key in answers.option_keys() {
        match table.category_for(key) {
            Some(category) => tally.increment(category),
            None => unmapped += 1,
        }
    }

    QuizOutcome {
        result: tally.best(),
        tally,
        answered: answers.len(),
        unmapped,
    }
}
