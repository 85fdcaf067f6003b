use std::time::{
    Duration,
    Instant,
};

use crate::core::{
    Deck,
    Word,
};

/// Polling granularity the GUI host uses to drive [`PlaybackSession::tick`].
pub const TICK_GRANULARITY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Outcome of one poll of the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The interval expired and the session moved to the next card.
    Advanced,
    /// Still counting down on the current card.
    Running,
    /// Paused, or the deck has no words; nothing to do.
    Idle,
}

/// The per-review state machine: advances through the deck's words on a
/// fixed interval, with pause/resume that preserves progress and manual
/// skipping in both directions. The clock is injected (`now`) so the machine
/// is independent of whatever drives it; the GUI polls it every
/// [`TICK_GRANULARITY`].
///
/// `elapsed` is reset to zero exactly when the card index changes, whether
/// by expiry, manual skip or wraparound.
pub struct PlaybackSession {
    deck: Deck,
    current_index: usize,
    playing: bool,
    /// Last sampled time spent on the current card. Frozen while paused.
    elapsed: Duration,
    /// Logical start instant of the current card while playing; recomputed
    /// as `now - elapsed` on resume so progress carries across a pause.
    started_at: Option<Instant>,
    interval: Duration,
}

impl PlaybackSession {
    /// Starts playing immediately at the first card.
    pub fn new(deck: Deck, interval_secs: u32, now: Instant) -> Self {
        Self {
            deck,
            current_index: 0,
            playing: true,
            elapsed: Duration::ZERO,
            started_at: Some(now),
            interval: Duration::from_secs(u64::from(interval_secs)),
        }
    }

    /// Samples the clock. At or past the configured interval the session
    /// advances forward and the countdown restarts from `now`; otherwise the
    /// reported elapsed time is updated.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.deck.words.is_empty() || !self.playing {
            return Tick::Idle;
        }

        let started = match self.started_at {
            Some(started) => started,
            None => return Tick::Idle,
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.interval {
            self.advance(Direction::Forward, now);
            Tick::Advanced
        } else {
            self.elapsed = elapsed;
            Tick::Running
        }
    }

    /// Moves one card in either direction, wrapping circularly. Callable in
    /// both play states and never changes them. No-op on an empty deck.
    pub fn advance(&mut self, direction: Direction, now: Instant) {
        let len = self.deck.words.len();
        if len == 0 {
            return;
        }

        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % len,
            Direction::Back => (self.current_index + len - 1) % len,
        };
        self.elapsed = Duration::ZERO;
        if self.playing {
            self.started_at = Some(now);
        }
    }

    /// Pausing freezes `elapsed` at its last sampled value; resuming shifts
    /// the logical start instant back by that amount so the countdown picks
    /// up where it left off instead of restarting.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.playing {
            self.playing = false;
            self.started_at = None;
        } else {
            self.playing = true;
            self.started_at = Some(now.checked_sub(self.elapsed).unwrap_or(now));
        }
    }

    /// Applies to subsequent ticks only. The elapsed time already spent on
    /// the current card is kept as-is, so shrinking the interval below it
    /// advances on the very next tick.
    pub fn set_interval(&mut self, seconds: u32) {
        self.interval = Duration::from_secs(u64::from(seconds));
    }

    /// Fraction of the current card's interval already elapsed, capped at 1.
    pub fn progress_fraction(&self) -> f32 {
        if self.interval.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.interval.as_secs_f32()).min(1.0)
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.deck.words.get(self.current_index)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.deck.words.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JapaneseWord;

    fn word(en: &str) -> Word {
        Word::new(
            en.to_string(),
            "শব্দ".to_string(),
            JapaneseWord { kanji: "言葉".to_string(), kana: "ことば".to_string() },
        )
    }

    fn deck(size: usize) -> Deck {
        Deck::new("Test".to_string(), (0..size).map(|i| word(&format!("w{}", i))).collect())
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn forward_advances_wrap_back_to_the_start() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(4), 5, t0);

        session.advance(Direction::Forward, t0);
        let start = session.current_index();

        for _ in 0..4 {
            session.advance(Direction::Forward, t0);
        }
        assert_eq!(session.current_index(), start);
    }

    #[test]
    fn back_from_the_first_card_wraps_to_the_last() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.advance(Direction::Back, t0);
        assert_eq!(session.current_index(), 2);

        session.advance(Direction::Forward, t0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn tick_advances_once_the_interval_expires() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        assert_eq!(session.tick(t0 + ms(4999)), Tick::Running);
        assert_eq!(session.current_index(), 0);

        assert_eq!(session.tick(t0 + ms(5000)), Tick::Advanced);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.elapsed(), Duration::ZERO);

        // The countdown restarted at the advance instant.
        assert_eq!(session.tick(t0 + ms(5050)), Tick::Running);
        assert_eq!(session.elapsed(), ms(50));
    }

    #[test]
    fn pause_and_resume_without_a_tick_leave_elapsed_unchanged() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(1200));
        assert_eq!(session.elapsed(), ms(1200));

        let later = t0 + ms(30_000);
        session.toggle_play(later);
        session.toggle_play(later);

        assert!(session.is_playing());
        assert_eq!(session.elapsed(), ms(1200));
    }

    #[test]
    fn resume_continues_the_countdown_from_the_paused_point() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(2000));
        session.toggle_play(t0 + ms(2000));

        // A long pause costs nothing.
        let resumed = t0 + ms(60_000);
        session.toggle_play(resumed);

        assert_eq!(session.tick(resumed + ms(1000)), Tick::Running);
        assert_eq!(session.elapsed(), ms(3000));

        assert_eq!(session.tick(resumed + ms(3000)), Tick::Advanced);
    }

    #[test]
    fn any_advance_resets_elapsed_to_zero() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(3000));
        session.advance(Direction::Forward, t0 + ms(3000));
        assert_eq!(session.elapsed(), Duration::ZERO);

        session.tick(t0 + ms(4000));
        session.advance(Direction::Back, t0 + ms(4000));
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    #[test]
    fn manual_skip_works_while_paused_and_does_not_resume() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(2500));
        session.toggle_play(t0 + ms(2500));

        session.advance(Direction::Forward, t0 + ms(3000));
        assert!(!session.is_playing());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.elapsed(), Duration::ZERO);

        // Still paused: the clock does not move the session.
        assert_eq!(session.tick(t0 + ms(60_000)), Tick::Idle);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn shrinking_the_interval_below_elapsed_advances_on_the_next_tick() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(4000));
        assert_eq!(session.current_index(), 0);

        session.set_interval(3);
        assert_eq!(session.tick(t0 + ms(4050)), Tick::Advanced);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn growing_the_interval_keeps_absolute_elapsed_time() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        session.tick(t0 + ms(2000));
        session.set_interval(10);

        session.tick(t0 + ms(2050));
        assert!((session.progress_fraction() - 0.205).abs() < 1e-3);
    }

    #[test]
    fn control_traffic_never_double_advances_within_one_interval() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(3), 5, t0);

        // Pound on the controls mid-card.
        session.tick(t0 + ms(1000));
        session.toggle_play(t0 + ms(1000));
        session.toggle_play(t0 + ms(1500));
        session.set_interval(5);
        session.toggle_play(t0 + ms(2000));
        session.toggle_play(t0 + ms(2500));

        // 1000ms had elapsed before the pauses; full expiry lands 4000ms
        // after the last resume. Every poll before that keeps running.
        let resumed = t0 + ms(2500);
        assert_eq!(session.tick(resumed + ms(3999)), Tick::Running);
        assert_eq!(session.current_index(), 0);

        assert_eq!(session.tick(resumed + ms(4000)), Tick::Advanced);
        assert_eq!(session.current_index(), 1);

        // Immediately after an advance there is nothing left to fire.
        assert_eq!(session.tick(resumed + ms(4050)), Tick::Running);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn progress_fraction_is_capped_at_one() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(2), 5, t0);

        session.tick(t0 + ms(2500));
        assert!((session.progress_fraction() - 0.5).abs() < 1e-6);

        // Freeze, then shrink the interval below the frozen elapsed time:
        // the reported fraction saturates instead of overshooting.
        session.toggle_play(t0 + ms(2500));
        session.set_interval(2);
        assert_eq!(session.progress_fraction(), 1.0);

        session.set_interval(20);
        assert!((session.progress_fraction() - 0.125).abs() < 1e-6);
    }

    #[test]
    fn empty_deck_is_inert() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(0), 5, t0);

        assert_eq!(session.tick(t0 + ms(10_000)), Tick::Idle);
        session.advance(Direction::Forward, t0 + ms(10_000));
        session.advance(Direction::Back, t0 + ms(10_000));

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_word(), None);
        assert_eq!(session.card_count(), 0);
    }

    #[test]
    fn single_card_deck_wraps_onto_itself() {
        let t0 = Instant::now();
        let mut session = PlaybackSession::new(deck(1), 3, t0);

        assert_eq!(session.tick(t0 + ms(3000)), Tick::Advanced);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.elapsed(), Duration::ZERO);
    }
}
