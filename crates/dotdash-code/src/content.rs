//! Lesson and quiz content.
//!
//! Exercises and questions carry pre-authored Morse strings. Those strings
//! must match what [`SymbolTable::encode`] produces for the answer text;
//! [`verify_content`] checks that contract.

use serde::Serialize;

use crate::table::SymbolTable;

/// A text/Morse pair used as a lesson exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Expected answer.
    pub text: &'static str,
    /// Morse shown to the learner.
    pub morse: &'static str,
}

/// A lesson covering a group of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    /// Lesson identifier, starting at 1.
    pub id: u32,
    /// Short title.
    pub title: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Characters introduced by the lesson.
    pub characters: &'static [char],
    /// Decoding exercises.
    pub exercises: &'static [Exercise],
}

impl Lesson {
    /// Completion percentage after `completed` exercises, capped at 100.
    pub fn progress_percent(&self, completed: usize) -> u32 {
        if self.exercises.is_empty() {
            return 100;
        }
        let percent = (completed as f64 / self.exercises.len() as f64 * 100.0).round();
        percent.min(100.0) as u32
    }
}

/// Quiz difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short common words.
    Easy,
    /// Five-letter words.
    Medium,
    /// Longer words.
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parses a lowercase tier name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Morse to decode.
    pub morse: &'static str,
    /// Expected answer.
    pub answer: &'static str,
    /// Hint revealed on request.
    pub hint: &'static str,
}

const LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "Letters A-F",
        description: "Start with the basics and learn the first six letters of the alphabet in Morse code.",
        characters: &['a', 'b', 'c', 'd', 'e', 'f'],
        exercises: &[
            Exercise { text: "a", morse: ".-" },
            Exercise { text: "be", morse: "-... ." },
            Exercise { text: "cafe", morse: "-.-. .- ..-. ." },
            Exercise { text: "face", morse: "..-. .- -.-. ." },
            Exercise { text: "ace", morse: ".- -.-. ." },
            Exercise { text: "deaf", morse: "-.. . .- ..-." },
        ],
    },
    Lesson {
        id: 2,
        title: "Letters G-M",
        description: "Continue your journey with the middle section of the alphabet.",
        characters: &['g', 'h', 'i', 'j', 'k', 'l', 'm'],
        exercises: &[
            Exercise { text: "hi", morse: ".... .." },
            Exercise { text: "milk", morse: "-- .. .-.. -.-" },
            Exercise { text: "glim", morse: "--. .-.. .. --" },
            Exercise { text: "jim", morse: ".--- .. --" },
            Exercise { text: "hill", morse: ".... .. .-.. .-.." },
            Exercise { text: "kill", morse: "-.- .. .-.. .-.." },
        ],
    },
    Lesson {
        id: 3,
        title: "Letters N-T",
        description: "Master more letters to expand your Morse code vocabulary.",
        characters: &['n', 'o', 'p', 'q', 'r', 's', 't'],
        exercises: &[
            Exercise { text: "stop", morse: "... - --- .--." },
            Exercise { text: "not", morse: "-. --- -" },
            Exercise { text: "spot", morse: "... .--. --- -" },
            Exercise { text: "port", morse: ".--. --- .-. -" },
            Exercise { text: "sort", morse: "... --- .-. -" },
            Exercise { text: "top", morse: "- --- .--." },
        ],
    },
    Lesson {
        id: 4,
        title: "Letters U-Z",
        description: "Complete the alphabet and unlock your full communication potential.",
        characters: &['u', 'v', 'w', 'x', 'y', 'z'],
        exercises: &[
            Exercise { text: "you", morse: "-.-- --- ..-" },
            Exercise { text: "wave", morse: ".-- .- ...- ." },
            Exercise { text: "xray", morse: "-..- .-. .- -.--" },
            Exercise { text: "zulu", morse: "--.. ..- .-.. ..-" },
            Exercise { text: "vow", morse: "...- --- .--" },
            Exercise { text: "wax", morse: ".-- .- -..-" },
        ],
    },
    Lesson {
        id: 5,
        title: "Numbers 0-9",
        description: "Learn how to communicate numbers in Morse code.",
        characters: &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        exercises: &[
            Exercise { text: "123", morse: ".---- ..--- ...--" },
            Exercise { text: "456", morse: "....- ..... -...." },
            Exercise { text: "789", morse: "--... ---.. ----." },
            Exercise { text: "2023", morse: "..--- ----- ..--- ...--" },
            Exercise { text: "1945", morse: ".---- ----. ....- ....." },
            Exercise { text: "007", morse: "----- ----- --..." },
        ],
    },
];

const EASY: &[QuizQuestion] = &[
    QuizQuestion { morse: "... --- ...", answer: "sos", hint: "International distress signal" },
    QuizQuestion { morse: ".... ..", answer: "hi", hint: "A greeting" },
    QuizQuestion { morse: ".---- ..--- ...--", answer: "123", hint: "Counting" },
    QuizQuestion { morse: "-- .- --", answer: "mam", hint: "Informal way to address a female parent" },
    QuizQuestion { morse: ".-. ..- -.", answer: "run", hint: "To move at a speed faster than walking" },
];

const MEDIUM: &[QuizQuestion] = &[
    QuizQuestion { morse: "--. .-. . .- -", answer: "great", hint: "Synonym for excellent" },
    QuizQuestion { morse: ".-- --- .-. .-.. -..", answer: "world", hint: "The planet we live on" },
    QuizQuestion { morse: "-... .-. .- .. -.", answer: "brain", hint: "Organ in your head" },
    QuizQuestion { morse: ".-.. .. --. .... -", answer: "light", hint: "Opposite of dark" },
    QuizQuestion { morse: "..-. --- -.-. ..- ...", answer: "focus", hint: "Concentrate attention" },
];

const HARD: &[QuizQuestion] = &[
    QuizQuestion {
        morse: "-.-. .... .- .-.. .-.. . -. --. .",
        answer: "challenge",
        hint: "A task that tests abilities",
    },
    QuizQuestion {
        morse: ".-.. .. --. .... - .... --- ..- ... .",
        answer: "lighthouse",
        hint: "A tower with a light to guide ships",
    },
    QuizQuestion { morse: "--.- ..- . ... - .. --- -.", answer: "question", hint: "Something you ask" },
    QuizQuestion { morse: ".--. .-. --- --. .-. .- --", answer: "program", hint: "Computer instructions" },
    QuizQuestion { morse: "-.-. --- -- .--. .-.. . -..-", answer: "complex", hint: "Not simple" },
];

/// All lessons in order.
pub fn lessons() -> &'static [Lesson] {
    LESSONS
}

/// Looks up a lesson by id.
pub fn lesson(id: u32) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.id == id)
}

/// Questions for a difficulty tier.
pub fn quiz(difficulty: Difficulty) -> &'static [QuizQuestion] {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
    }
}

/// Checks a learner's answer: case-insensitive, otherwise exact.
pub fn is_correct(input: &str, expected: &str) -> bool {
    input.to_lowercase() == expected
}

/// Time allowed per quiz question, in seconds.
pub const QUESTION_SECONDS: u32 = 30;
/// Points for any correct answer.
pub const BASE_POINTS: u32 = 5;
/// One bonus point per this many seconds left on the clock.
pub const TIME_BONUS_STEP: u32 = 5;
/// Points lost for revealing the hint.
pub const HINT_PENALTY: u32 = 2;
/// Best possible score for one question.
pub const MAX_POINTS: u32 = BASE_POINTS + QUESTION_SECONDS / TIME_BONUS_STEP;

/// Points earned for one answer.
///
/// A wrong answer, or one given with no time left, scores nothing. Otherwise
/// the base points plus the time bonus, less the hint penalty. Time beyond
/// [`QUESTION_SECONDS`] earns no extra bonus.
pub fn score_answer(correct: bool, seconds_left: u32, hint_used: bool) -> u32 {
    if !correct || seconds_left == 0 {
        return 0;
    }
    let bonus = seconds_left.min(QUESTION_SECONDS) / TIME_BONUS_STEP;
    let penalty = if hint_used { HINT_PENALTY } else { 0 };
    BASE_POINTS + bonus - penalty
}

/// A quiz score as a rounded percentage of the best possible score for
/// `questions` questions. Zero questions score 0.
pub fn score_percent(score: u32, questions: usize) -> u32 {
    let max = questions as f64 * MAX_POINTS as f64;
    if max == 0.0 {
        return 0;
    }
    (score as f64 / max * 100.0).round() as u32
}

/// Where an authored Morse string lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentLocation {
    /// An exercise within a lesson.
    Exercise {
        /// Lesson id.
        lesson: u32,
        /// Exercise index within the lesson.
        index: usize,
    },
    /// A quiz question.
    Quiz {
        /// Difficulty tier.
        difficulty: Difficulty,
        /// Question index within the tier.
        index: usize,
    },
}

impl std::fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentLocation::Exercise { lesson, index } => {
                write!(f, "lesson {} exercise {}", lesson, index + 1)
            }
            ContentLocation::Quiz { difficulty, index } => {
                write!(f, "{} quiz question {}", difficulty, index + 1)
            }
        }
    }
}

/// An authored Morse string that differs from the encoder's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentMismatch {
    /// Where the content lives.
    pub location: ContentLocation,
    /// Plain-text answer.
    pub text: String,
    /// Morse as authored.
    pub authored: String,
    /// Morse as encoded.
    pub expected: String,
}

/// Compares every authored Morse string against `table.encode(answer)`.
pub fn verify_content(table: &SymbolTable) -> Vec<ContentMismatch> {
    let exercises = LESSONS.iter().flat_map(|lesson| {
        lesson.exercises.iter().enumerate().map(move |(index, ex)| {
            (
                ContentLocation::Exercise {
                    lesson: lesson.id,
                    index,
                },
                ex.text,
                ex.morse,
            )
        })
    });
    let questions = Difficulty::ALL.into_iter().flat_map(|difficulty| {
        quiz(difficulty).iter().enumerate().map(move |(index, q)| {
            (ContentLocation::Quiz { difficulty, index }, q.answer, q.morse)
        })
    });

    exercises
        .chain(questions)
        .filter_map(|(location, text, authored)| {
            let expected = table.encode(text);
            (expected != authored).then(|| ContentMismatch {
                location,
                text: text.to_string(),
                authored: authored.to_string(),
                expected,
            })
        })
        .collect()
}
