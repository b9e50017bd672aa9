//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses the thread-local RNG.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_token(&self, alphabet: &'static [u8], len: usize) -> String {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
            .collect()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scripted random for testing.
///
/// Hands out the scripted tokens first, then falls back to a counter encoded
/// in the requested alphabet, so every fallback token is distinct.
#[cfg(test)]
pub struct ScriptedRandom {
    script: std::sync::Mutex<std::collections::VecDeque<String>>,
    counter: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new() -> Self {
        Self::with_script(std::iter::empty::<&str>())
    }

    pub fn with_script<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            script: std::sync::Mutex::new(tokens.into_iter().map(str::to_string).collect()),
            counter: std::sync::atomic::AtomicUsize::new(1),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn gen_token(&self, alphabet: &'static [u8], len: usize) -> String {
        if let Some(token) = self.script.lock().unwrap().pop_front() {
            return token;
        }
        let mut n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let mut token = vec![alphabet[0]; len];
        for slot in token.iter_mut().rev() {
            *slot = alphabet[n % alphabet.len()];
            n /= alphabet.len();
        }
        String::from_utf8_lossy(&token).into_owned()
    }
}
