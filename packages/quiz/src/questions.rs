// ABOUTME: Fixed bank of ten learning style questions
// ABOUTME: Every question offers one answer per style, in style declaration order

use idbrief_core::constants::QUIZ_LENGTH;
use idbrief_core::LearningStyle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizAnswer {
    pub text: &'static str,
    pub style: LearningStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub answers: [QuizAnswer; 6],
}

impl QuizQuestion {
    /// Style of the answer at `choice`, if it exists
    pub fn style_of(&self, choice: usize) -> Option<LearningStyle> {
        self.answers.get(choice).map(|a| a.style)
    }
}

const fn answer(text: &'static str, style: LearningStyle) -> QuizAnswer {
    QuizAnswer { text, style }
}

use LearningStyle::{Auditory, Kinesthetic, ReadingWriting, Social, Solo, Visual};

pub static QUIZ_QUESTIONS: [QuizQuestion; QUIZ_LENGTH] = [
    QuizQuestion {
        prompt: "1. When learning a new concept, you tend to:",
        answers: [
            answer("Watch a demonstration or visualize diagrams (Visual)", Visual),
            answer("Listen to a lecture or discussion (Auditory)", Auditory),
            answer("Perform a hands-on activity (Kinesthetic)", Kinesthetic),
            answer(
                "Read detailed instructions or an article (Reading/Writing)",
                ReadingWriting,
            ),
            answer("Discuss it with a group or partner (Social)", Social),
            answer("Study quietly on your own (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "2. When you need directions to a new place, you prefer:",
        answers: [
            answer("Looking at a map (Visual)", Visual),
            answer("Having someone tell you the way (Auditory)", Auditory),
            answer("Just starting out and finding your way (Kinesthetic)", Kinesthetic),
            answer("Written turn-by-turn directions (Reading/Writing)", ReadingWriting),
            answer("Travelling there with a friend (Social)", Social),
            answer("Planning the route by yourself (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "3. When assembling new furniture, you usually:",
        answers: [
            answer("Follow the diagrams step by step (Visual)", Visual),
            answer("Have someone read the steps aloud (Auditory)", Auditory),
            answer("Dive in and figure it out as you go (Kinesthetic)", Kinesthetic),
            answer("Read the written manual first (Reading/Writing)", ReadingWriting),
            answer("Build it together with someone (Social)", Social),
            answer("Work through it alone without interruptions (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "4. To remember a phone number, you:",
        answers: [
            answer("Picture the digits in your mind (Visual)", Visual),
            answer("Repeat it out loud (Auditory)", Auditory),
            answer("Tap it out on a keypad (Kinesthetic)", Kinesthetic),
            answer("Write it down (Reading/Writing)", ReadingWriting),
            answer("Ask someone to help you remember it (Social)", Social),
            answer("Memorize it quietly on your own (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "5. In a training session, you get the most out of:",
        answers: [
            answer("Slides, charts and videos (Visual)", Visual),
            answer("The presenter's explanations (Auditory)", Auditory),
            answer("Practice exercises and simulations (Kinesthetic)", Kinesthetic),
            answer("Handouts and reading material (Reading/Writing)", ReadingWriting),
            answer("Group activities and discussions (Social)", Social),
            answer("Self-paced reflection time (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "6. When preparing for a test, you:",
        answers: [
            answer("Use color-coded notes and mind maps (Visual)", Visual),
            answer("Recite key points or listen to recordings (Auditory)", Auditory),
            answer("Work through practice problems (Kinesthetic)", Kinesthetic),
            answer("Rewrite and summarize your notes (Reading/Writing)", ReadingWriting),
            answer("Join a study group (Social)", Social),
            answer("Study alone in a quiet place (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "7. When explaining something to someone else, you:",
        answers: [
            answer("Sketch a picture or diagram (Visual)", Visual),
            answer("Talk them through it (Auditory)", Auditory),
            answer("Show them how by doing it (Kinesthetic)", Kinesthetic),
            answer("Send them written instructions (Reading/Writing)", ReadingWriting),
            answer("Work it out together in conversation (Social)", Social),
            answer("Prepare a complete explanation on your own first (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "8. When learning new software, you prefer to:",
        answers: [
            answer("Watch a video walkthrough (Visual)", Visual),
            answer("Listen to a colleague explain it (Auditory)", Auditory),
            answer("Click around and experiment (Kinesthetic)", Kinesthetic),
            answer("Read the documentation (Reading/Writing)", ReadingWriting),
            answer("Attend a team training session (Social)", Social),
            answer("Explore it privately at your own pace (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "9. In your free time, you most enjoy:",
        answers: [
            answer("Photography, art or films (Visual)", Visual),
            answer("Music, podcasts or audiobooks (Auditory)", Auditory),
            answer("Sports, crafts or building things (Kinesthetic)", Kinesthetic),
            answer("Reading books or journaling (Reading/Writing)", ReadingWriting),
            answer("Spending time with friends (Social)", Social),
            answer("Quiet hobbies you do alone (Solo)", Solo),
        ],
    },
    QuizQuestion {
        prompt: "10. Which situation helps you learn best?",
        answers: [
            answer("Seeing examples or demonstrations (Visual)", Visual),
            answer(
                "Having discussions or listening to explanations (Auditory)",
                Auditory,
            ),
            answer("Doing a physical activity or practice (Kinesthetic)", Kinesthetic),
            answer(
                "Reading and taking notes thoroughly (Reading/Writing)",
                ReadingWriting,
            ),
            answer("Collaborating with a group (Social)", Social),
            answer("Working on your own in a quiet space (Solo)", Solo),
        ],
    },
];
