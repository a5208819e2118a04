#![allow(dead_code)]

use quiz_content::{QuestionBank, SelectionPolicy};
use quiz_core::{AnswerPolicy, Difficulty, GameConfig, Prize, PrizeTable, Question};
use quiz_runtime::QuizSession;

/// `count` questions; question `id` has its correct answer at `(id + 1) % 4`,
/// so the first one is answered by option 2.
pub fn questions(count: u32) -> Vec<Question> {
    (1..=count)
        .map(|id| {
            let difficulty = match id % 3 {
                0 => Difficulty::Hard,
                1 => Difficulty::Easy,
                _ => Difficulty::Medium,
            };
            Question::new(
                id,
                format!("Question {id}?"),
                ["alpha", "bravo", "charlie", "delta"],
                ((id + 1) % 4) as u8,
                difficulty,
            )
        })
        .collect()
}

pub fn ladder(len: u64) -> PrizeTable {
    (1..=len).map(|rung| Prize::Amount(rung * 1_000)).collect()
}

pub fn bank(count: u32, ladder_len: u64, selection: SelectionPolicy) -> QuestionBank {
    QuestionBank::new(questions(count), ladder(ladder_len)).with_selection(selection)
}

/// Session over an in-order bank, so the sequence is predictable.
pub fn scripted(count: u32, policy: AnswerPolicy) -> QuizSession<QuestionBank> {
    QuizSession::with_pcg(
        bank(count, count as u64, SelectionPolicy::InOrder),
        GameConfig::with_policy(policy),
        0xDEC0DE,
    )
    .unwrap()
}

pub fn correct_option<L, R>(session: &QuizSession<L, R>) -> usize
where
    L: quiz_core::QuestionBankLoader,
    R: quiz_core::RngOracle,
{
    session
        .state()
        .current_question()
        .map(|question| question.correct_option())
        .unwrap()
}
