use chrono::Timelike;

/// Wall-clock reading as the host reports it, already split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Source of "now" for [`Clock::set_from_source`](crate::domain::clock::Clock::set_from_source).
pub trait TimeSource {
    fn now(&self) -> LocalTime;
}

/// Host local time via `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> LocalTime {
        let now = chrono::Local::now();
        LocalTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

/// Always reports the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub LocalTime);

impl FixedTimeSource {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self(LocalTime {
            hour,
            minute,
            second,
        })
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> LocalTime {
        self.0
    }
}
