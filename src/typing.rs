//! Typewriter effect for the welcome line ("I love Kotlin", "I love Rust", ...).
//!
//! Each word is typed one character at a time, held, deleted, and followed by
//! the next word after a short pause. Driven by the frame tick.

use std::time::{Duration, Instant};

pub const WORDS: [&str; 8] = [
    "Kotlin",
    "JavaScript",
    "PHP",
    "Python",
    "TypeScript",
    "Java",
    "Go",
    "Rust",
];

const TYPE_STEP: Duration = Duration::from_millis(80);
const DELETE_STEP: Duration = Duration::from_millis(50);
const HOLD: Duration = Duration::from_millis(2000);
const NEXT_WORD_PAUSE: Duration = Duration::from_millis(300);

/// Steps applied per tick before the schedule is re-anchored to `now`.
const MAX_CATCH_UP_STEPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct RotatingTyper {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    phase: Phase,
    next_at: Instant,
}

impl RotatingTyper {
    pub fn new(words: &'static [&'static str], now: Instant) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at: now,
        }
    }

    /// Visible prefix of the current word.
    pub fn text(&self) -> &'static str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => *word,
        }
    }

    /// False while a finished word is being held.
    pub fn is_typing(&self) -> bool {
        self.phase != Phase::Holding
    }

    /// Advance to `now`. Returns whether the visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let before = (self.word, self.shown);
        let mut steps = 0;
        while now >= self.next_at {
            self.step();
            steps += 1;
            if steps == MAX_CATCH_UP_STEPS {
                // resumed after a long stall; don't replay it
                self.next_at = now + TYPE_STEP;
                break;
            }
        }
        before != (self.word, self.shown)
    }

    fn step(&mut self) {
        let len = self.words[self.word].chars().count();
        match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                self.next_at += TYPE_STEP;
            }
            Phase::Typing => {
                self.phase = Phase::Holding;
                self.next_at += HOLD;
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.step();
            }
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                self.next_at += DELETE_STEP;
            }
            Phase::Deleting => {
                self.word = (self.word + 1) % self.words.len();
                self.phase = Phase::Typing;
                self.next_at += NEXT_WORD_PAUSE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO: [&str; 2] = ["Go", "Rust"];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_types_one_char_per_step() {
        let t0 = Instant::now();
        let mut typer = RotatingTyper::new(&TWO, t0);
        assert_eq!(typer.text(), "");
        assert!(typer.tick(t0));
        assert_eq!(typer.text(), "G");
        assert!(!typer.tick(t0 + ms(79)));
        assert!(typer.tick(t0 + ms(80)));
        assert_eq!(typer.text(), "Go");
        assert!(typer.is_typing());
    }

    #[test]
    fn test_holds_then_deletes_then_next_word() {
        let t0 = Instant::now();
        let mut typer = RotatingTyper::new(&TWO, t0);
        // "G" at 0, "Go" at 80, done at 160, hold until 2160
        typer.tick(t0 + ms(160));
        assert_eq!(typer.text(), "Go");
        assert!(!typer.is_typing());
        assert!(!typer.tick(t0 + ms(2159)));

        // first delete right after the hold, second 50ms later
        typer.tick(t0 + ms(2160));
        assert_eq!(typer.text(), "G");
        typer.tick(t0 + ms(2210));
        assert_eq!(typer.text(), "");

        // empty at 2260, pause 300, then "R"
        typer.tick(t0 + ms(2559));
        assert_eq!(typer.text(), "");
        typer.tick(t0 + ms(2560));
        assert_eq!(typer.text(), "R");
    }

    #[test]
    fn test_wraps_to_first_word() {
        let t0 = Instant::now();
        let mut typer = RotatingTyper::new(&TWO, t0);
        let mut now = t0;
        let mut seen_rust = false;
        for _ in 0..2000 {
            now += ms(10);
            typer.tick(now);
            seen_rust |= typer.text() == "Rust";
            if seen_rust && typer.text() == "G" {
                return;
            }
        }
        panic!("never wrapped back to the first word");
    }

    #[test]
    fn test_long_stall_does_not_spin() {
        let t0 = Instant::now();
        let mut typer = RotatingTyper::new(&WORDS, t0);
        typer.tick(t0 + Duration::from_secs(3600));
        assert!(!typer.tick(t0 + Duration::from_secs(3600)));
    }
}
