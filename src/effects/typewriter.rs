//! Type / pause / delete cycle over an ordered list of words.
//!
//! The machine is advanced with [`Typewriter::tick`], which returns how long
//! to wait before the next tick. The frontend drives it with a timer chain.

const WORD_COLORS: [&str; 4] = ["text-cyan", "text-purple", "text-pink", "text-orange"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    timing: TypewriterTiming,
    word_index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` for an empty word list. Type and delete speeds are at
    /// least 1ms so every cycle takes time.
    pub fn new<S: AsRef<str>>(words: &[S], timing: TypewriterTiming) -> Option<Self> {
        if words.is_empty() {
            return None;
        }

        let timing = TypewriterTiming {
            type_ms: timing.type_ms.max(1),
            delete_ms: timing.delete_ms.max(1),
            ..timing
        };

        Some(Self {
            words: words
                .iter()
                .map(|word| word.as_ref().chars().collect())
                .collect(),
            timing,
            word_index: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    pub fn text(&self) -> String {
        self.current_word().iter().take(self.shown).collect()
    }

    #[cfg(test)]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn color_class(&self) -> &'static str {
        WORD_COLORS[self.word_index % WORD_COLORS.len()]
    }

    /// Delay before the first tick.
    pub fn first_delay_ms(&self) -> u32 {
        self.timing.type_ms
    }

    /// Performs one transition and returns the delay until the next one.
    pub fn tick(&mut self) -> u32 {
        let word_len = self.current_word().len();

        let delay = match self.phase {
            Phase::Typing => {
                if self.shown < word_len {
                    self.shown += 1;
                }

                if self.shown == word_len {
                    self.phase = Phase::Paused;
                    self.timing.pause_ms
                } else {
                    self.timing.type_ms
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
                self.timing.delete_ms
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);

                if self.shown == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.timing.type_ms
                } else {
                    self.timing.delete_ms
                }
            }
        };

        delay
    }

    fn current_word(&self) -> &[char] {
        &self.words[self.word_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Deref, DerefMut};

    /// Runs the machine against a virtual clock.
    struct Clocked {
        machine: Typewriter,
        until_next_ms: u32,
    }

    impl Clocked {
        fn new(words: &[&str], timing: TypewriterTiming) -> Self {
            let machine = Typewriter::new(words, timing).expect("non-empty");
            Self {
                until_next_ms: machine.first_delay_ms(),
                machine,
            }
        }

        fn elapse(&mut self, mut ms: u32) {
            while ms >= self.until_next_ms {
                ms -= self.until_next_ms;
                self.until_next_ms = self.machine.tick();
            }
            self.until_next_ms -= ms;
        }
    }

    impl Deref for Clocked {
        type Target = Typewriter;

        fn deref(&self) -> &Typewriter {
            &self.machine
        }
    }

    impl DerefMut for Clocked {
        fn deref_mut(&mut self) -> &mut Typewriter {
            &mut self.machine
        }
    }

    fn fast_timing() -> TypewriterTiming {
        TypewriterTiming {
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 0,
        }
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let words: [&str; 0] = [];
        assert!(Typewriter::new(&words, fast_timing()).is_none());
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let mut typewriter = Clocked::new(&["Hi", "Bye"], fast_timing());

        typewriter.elapse(100);
        assert_eq!(typewriter.text(), "H");
        typewriter.elapse(100);
        assert_eq!(typewriter.text(), "Hi");
        assert_eq!(typewriter.phase(), Phase::Deleting);

        typewriter.elapse(50);
        assert_eq!(typewriter.text(), "H");
        typewriter.elapse(50);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.word_index(), 1);
        assert_eq!(typewriter.phase(), Phase::Typing);

        typewriter.elapse(300);
        assert_eq!(typewriter.text(), "Bye");
    }

    #[test]
    fn pause_holds_the_full_word() {
        let timing = TypewriterTiming {
            pause_ms: 2_000,
            ..fast_timing()
        };
        let mut typewriter = Clocked::new(&["Hi"], timing);

        typewriter.elapse(200);
        assert_eq!(typewriter.phase(), Phase::Paused);
        typewriter.elapse(1_999);
        assert_eq!(typewriter.text(), "Hi");
        assert_eq!(typewriter.phase(), Phase::Paused);
        typewriter.elapse(1);
        assert_eq!(typewriter.phase(), Phase::Deleting);
        typewriter.elapse(50);
        assert_eq!(typewriter.text(), "H");
    }

    #[test]
    fn single_word_cycles_on_itself() {
        let mut typewriter = Clocked::new(&["ok"], fast_timing());

        for _ in 0..3 {
            typewriter.elapse(200);
            assert_eq!(typewriter.text(), "ok");
            typewriter.elapse(100);
            assert_eq!(typewriter.text(), "");
            assert_eq!(typewriter.word_index(), 0);
        }
    }

    #[test]
    fn shown_length_stays_within_word() {
        let words = ["Innovador", "Solución de Problemas", "a"];
        let mut typewriter = Typewriter::new(&words, fast_timing()).expect("non-empty");

        for _ in 0..500 {
            typewriter.tick();
            let word_len = words[typewriter.word_index()].chars().count();
            assert!(typewriter.text().chars().count() <= word_len);
        }
    }

    #[test]
    fn color_follows_word_index() {
        let words = ["a", "b", "c", "d", "e"];
        let mut typewriter = Typewriter::new(&words, fast_timing()).expect("non-empty");
        assert_eq!(typewriter.color_class(), "text-cyan");

        while typewriter.word_index() != 4 {
            typewriter.tick();
        }
        assert_eq!(typewriter.color_class(), "text-cyan");
    }
}
