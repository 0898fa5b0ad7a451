use crate::domain::clock::Clock;
use crate::utils::error::{ClockError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

fn delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r":|\r\n|\n|\r").expect("delimiter pattern is valid"))
}

/// Ordered, index-addressable collection of clocks with plain-text load/save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockShop {
    clocks: Vec<Clock>,
}

impl ClockShop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clock> {
        self.clocks.iter()
    }

    pub fn as_slice(&self) -> &[Clock] {
        &self.clocks
    }

    pub fn get(&self, index: usize) -> Result<&Clock> {
        self.clocks.get(index).ok_or(ClockError::IndexOutOfBounds {
            index,
            size: self.clocks.len(),
        })
    }

    pub fn set(&mut self, clock: Clock, index: usize) -> Result<()> {
        let size = self.clocks.len();
        let slot = self
            .clocks
            .get_mut(index)
            .ok_or(ClockError::IndexOutOfBounds { index, size })?;

        tracing::debug!(index, old = %slot, new = %clock, "replacing clock");
        *slot = clock;
        Ok(())
    }

    pub fn add(&mut self, clock: Clock) {
        self.clocks.push(clock);
    }

    /// Index of the first clock equal to `clock`.
    pub fn find(&self, clock: &Clock) -> Option<usize> {
        self.clocks.iter().position(|c| c.equals(clock))
    }

    /// Ascending selection sort, in place.
    pub fn sort(&mut self) {
        let len = self.clocks.len();
        for i in 0..len {
            let mut min_index = i;
            for j in (i + 1)..len {
                if self.clocks[j] < self.clocks[min_index] {
                    min_index = j;
                }
            }
            self.clocks.swap(i, min_index);
        }
        tracing::debug!(count = len, "sorted clocks");
    }

    /// Appends every `H:M:S` triple in the file. Returns how many clocks were added.
    pub fn fill_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ClockError::read_failed(path, e))?;

        let added = self.fill_from_str(&content)?;
        tracing::debug!(path = %path.display(), added, "loaded clocks from file");
        Ok(added)
    }

    /// Reads integers separated by `:` or line breaks, three per clock, until
    /// the next token is not an integer. Clocks parsed before a failure stay
    /// in the shop.
    pub fn fill_from_str(&mut self, content: &str) -> Result<usize> {
        let mut fields: Vec<i32> = Vec::with_capacity(3);
        let mut added = 0;

        for token in delimiter().split(content) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let Ok(value) = token.parse::<i32>() else {
                break;
            };

            fields.push(value);
            if fields.len() == 3 {
                let clock = Clock::new(fields[0], fields[1], fields[2])?;
                tracing::trace!(%clock, "parsed clock");
                self.add(clock);
                added += 1;
                fields.clear();
            }
        }

        if !fields.is_empty() {
            let partial: Vec<String> = fields.iter().map(ToString::to_string).collect();
            return Err(ClockError::invalid_argument(
                "clock",
                partial.join(":"),
                "incomplete clock, expected hour, minute and second",
            ));
        }

        Ok(added)
    }

    /// Creates or truncates `path` and writes one clock per line.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ClockError::write_failed(path, e))?;
        let mut writer = BufWriter::new(file);

        for clock in &self.clocks {
            write!(writer, "{}{}", clock, LINE_SEPARATOR)
                .map_err(|e| ClockError::write_failed(path, e))?;
        }
        writer
            .flush()
            .map_err(|e| ClockError::write_failed(path, e))?;

        tracing::debug!(path = %path.display(), count = self.clocks.len(), "wrote clocks to file");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ClockShop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clock in &self.clocks {
            write!(f, "{}{}", clock, LINE_SEPARATOR)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ClockShop {
    type Item = &'a Clock;
    type IntoIter = std::slice::Iter<'a, Clock>;

    fn into_iter(self) -> Self::IntoIter {
        self.clocks.iter()
    }
}

impl FromIterator<Clock> for ClockShop {
    fn from_iter<I: IntoIterator<Item = Clock>>(iter: I) -> Self {
        Self {
            clocks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Clock> for ClockShop {
    fn extend<I: IntoIterator<Item = Clock>>(&mut self, iter: I) {
        self.clocks.extend(iter);
    }
}
