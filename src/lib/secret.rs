//! In-memory holder for passwords that wipes its buffer when it is released.

use std::fmt;

use zeroize::Zeroize;

const INITIAL_CAPACITY: usize = 64;

/// A string whose bytes are overwritten with zeros when dropped or regrown.
///
/// Growth never goes through `String`'s own reallocation, so no unwiped copy of
/// the plaintext is left behind in freed memory.
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new() -> Self {
        Self {
            inner: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, ch: char) {
        let needed = self.inner.len() + ch.len_utf8();
        if needed > self.inner.capacity() {
            let mut grown = String::with_capacity(needed.max(self.inner.capacity() * 2));
            grown.push_str(&self.inner);
            wipe(&mut self.inner);
            self.inner = grown;
        }
        self.inner.push(ch);
    }

    pub fn push_str(&mut self, value: &str) {
        for ch in value.chars() {
            self.push(ch);
        }
    }

    /// Removes the last character; returns `false` when already empty.
    pub fn pop(&mut self) -> bool {
        match self.inner.pop() {
            Some(ch) => {
                // `pop` only moves the length; overwrite the bytes it left behind.
                let len = self.inner.len();
                for _ in 0..ch.len_utf8() {
                    self.inner.push('\0');
                }
                self.inner.truncate(len);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Borrow the plaintext. Keep the borrow as short as possible.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Copy the plaintext with every `from` replaced by `to`, keeping the result protected.
    pub fn replaced(&self, from: char, to: &str) -> SecretString {
        let mut out = SecretString::new();
        for ch in self.inner.chars() {
            if ch == from {
                out.push_str(to);
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl Default for SecretString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SecretString {
    fn from(mut value: String) -> Self {
        let mut secret = SecretString::new();
        secret.push_str(&value);
        wipe(&mut value);
        secret
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        wipe(&mut self.inner);
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(***)")
    }
}

/// Zero the whole allocation, spare capacity included, and leave `value` empty.
fn wipe(value: &mut String) {
    value.zeroize();
}
