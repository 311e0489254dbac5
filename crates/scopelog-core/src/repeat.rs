//! Repeated-message suppression
//!
//! Consecutive identical messages collapse into indicator lines emitted at
//! repeat counts 1, 3, 9, 27, ... so a tight loop logging the same text
//! produces a logarithmic number of lines.

/// Repeat counts above this get an extra annotation
pub const TOO_MANY_THRESHOLD: u64 = 9;

/// What the filter decided for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatDecision {
    /// New message, write it unchanged
    Emit,
    /// Repeat at a reporting point, write this indicator instead
    Indicator(String),
    /// Repeat between reporting points, write nothing
    Suppress,
}

/// Per-logger repeat memory
#[derive(Debug, Default, Clone)]
pub struct RepeatFilter {
    last_message: Option<String>,
    repeat_count: u64,
}

impl RepeatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` and decide how it should be written
    pub fn observe(&mut self, message: &str) -> RepeatDecision {
        if self.last_message.as_deref() != Some(message) {
            self.last_message = Some(message.to_string());
            self.repeat_count = 0;
            return RepeatDecision::Emit;
        }

        self.repeat_count += 1;
        if is_power_of_three(self.repeat_count) {
            RepeatDecision::Indicator(indicator(message, self.repeat_count))
        } else {
            RepeatDecision::Suppress
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn repeat_count(&self) -> u64 {
        self.repeat_count
    }

    /// Forget the last message
    pub fn reset(&mut self) {
        self.last_message = None;
        self.repeat_count = 0;
    }
}

fn indicator(message: &str, count: u64) -> String {
    let mut text = format!("{} [repeated {} times]", message, count);
    if count > TOO_MANY_THRESHOLD {
        text.push_str(" [too many times]");
    }
    text
}

/// Exact check for 1, 3, 9, 27, ...
pub fn is_power_of_three(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    while n % 3 == 0 {
        n /= 3;
    }
    n == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_three() {
        let powers: Vec<u64> = (0..40).filter(|n| is_power_of_three(*n)).collect();
        assert_eq!(powers, vec![1, 3, 9, 27]);
        assert!(is_power_of_three(3u64.pow(40)));
        assert!(!is_power_of_three(3u64.pow(40) + 1));
        assert!(!is_power_of_three(u64::MAX));
    }

    #[test]
    fn test_first_message_emitted() {
        let mut filter = RepeatFilter::new();
        assert_eq!(filter.observe("a"), RepeatDecision::Emit);
        assert_eq!(filter.last_message(), Some("a"));
        assert_eq!(filter.repeat_count(), 0);
    }

    #[test]
    fn test_repeats_collapse() {
        let mut filter = RepeatFilter::new();
        let decisions: Vec<RepeatDecision> = (0..27).map(|_| filter.observe("same")).collect();

        assert_eq!(decisions[0], RepeatDecision::Emit);
        let indicators: Vec<&String> = decisions
            .iter()
            .filter_map(|d| match d {
                RepeatDecision::Indicator(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(
            indicators,
            vec![
                "same [repeated 1 times]",
                "same [repeated 3 times]",
                "same [repeated 9 times]",
            ]
        );
        assert_eq!(filter.repeat_count(), 26);
    }

    #[test]
    fn test_too_many_annotation() {
        let mut filter = RepeatFilter::new();
        let mut last_indicator = None;
        for _ in 0..28 {
            if let RepeatDecision::Indicator(text) = filter.observe("x") {
                last_indicator = Some(text);
            }
        }
        assert_eq!(
            last_indicator.as_deref(),
            Some("x [repeated 27 times] [too many times]")
        );
    }

    #[test]
    fn test_different_message_resets() {
        let mut filter = RepeatFilter::new();
        filter.observe("a");
        filter.observe("a");
        filter.observe("a");
        assert_eq!(filter.repeat_count(), 2);

        assert_eq!(filter.observe("b"), RepeatDecision::Emit);
        assert_eq!(filter.repeat_count(), 0);
        assert_eq!(filter.observe("a"), RepeatDecision::Emit);

        filter.reset();
        assert_eq!(filter.last_message(), None);
    }
}
