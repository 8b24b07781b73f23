//! The scripted title/intro sequence.
//!
//! A fixed timeline of text cards, ending on the title card with a prompt
//! that blinks until the player confirms with Enter. This module is pure:
//! the driver owns the clock and feeds elapsed time into [`TitleScreen::advance`].

/// Blink interval of the enter prompt.
pub const PROMPT_BLINK_MS: u64 = 500;

const LEAD_MS: u64 = 1000;
const CARD_MS: u64 = 3000;
const GAP_MS: u64 = 2000;

const CARDS: [&str; 2] = ["LIKE A LION", "A TERMINAL BLOCK GAME"];
const TITLE: &str = "B L O C K F A L L";
const PROMPT: &str = "PRESS ENTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Initial blank screen.
    Lead,
    /// Card `i` is visible.
    Card(usize),
    /// Blank gap after card `i`.
    Gap(usize),
    /// Title card with the blinking prompt; waits for confirmation.
    Prompt,
}

#[derive(Debug, Clone)]
pub struct TitleScreen {
    phase: Phase,
    /// Time left in the current timed phase.
    remaining_ms: u64,
    blink_ms: u64,
    prompt_visible: bool,
    done: bool,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            phase: Phase::Lead,
            remaining_ms: LEAD_MS,
            blink_ms: 0,
            prompt_visible: true,
            done: false,
        }
    }

    /// Step the script forward. Elapsed time carries across phase
    /// boundaries, so irregular driver frames stay on schedule.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let mut left = elapsed_ms;
        while left > 0 && self.phase != Phase::Prompt {
            if left < self.remaining_ms {
                self.remaining_ms -= left;
                return;
            }
            left -= self.remaining_ms;
            self.next_phase();
        }

        if self.phase == Phase::Prompt {
            self.blink_ms += left;
            while self.blink_ms >= PROMPT_BLINK_MS {
                self.blink_ms -= PROMPT_BLINK_MS;
                self.prompt_visible = !self.prompt_visible;
            }
        }
    }

    fn next_phase(&mut self) {
        let (phase, duration) = match self.phase {
            Phase::Lead => (Phase::Card(0), CARD_MS),
            Phase::Card(i) => (Phase::Gap(i), GAP_MS),
            Phase::Gap(i) if i + 1 < CARDS.len() => (Phase::Card(i + 1), CARD_MS),
            Phase::Gap(_) | Phase::Prompt => (Phase::Prompt, 0),
        };
        self.phase = phase;
        self.remaining_ms = duration;
    }

    /// The lines to display for the current frame.
    pub fn lines(&self) -> Vec<String> {
        match self.phase {
            Phase::Lead | Phase::Gap(_) => Vec::new(),
            Phase::Card(i) => vec![
                String::new(),
                String::new(),
                format!("   {}", CARDS[i]),
            ],
            Phase::Prompt => {
                let mut lines = vec![
                    String::new(),
                    String::new(),
                    format!("   {TITLE}"),
                    String::new(),
                ];
                if self.prompt_visible {
                    lines.push(format!("   {PROMPT}"));
                }
                lines
            }
        }
    }

    /// True once the blinking prompt is on screen.
    pub fn at_prompt(&self) -> bool {
        self.phase == Phase::Prompt
    }

    /// Accept Enter. Only effective at the prompt; returns whether the
    /// sequence finished.
    pub fn confirm(&mut self) -> bool {
        if self.at_prompt() {
            self.done = true;
        }
        self.done
    }

    pub fn finished(&self) -> bool {
        self.done
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}
