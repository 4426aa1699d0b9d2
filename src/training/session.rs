use crate::character::attributes::Stat;
use crate::core::error::GameError;

/// Stats that can be trained.
pub const TRAINABLE_STATS: [Stat; 4] = [Stat::Str, Stat::Agi, Stat::Vit, Stat::Int];

pub fn is_trainable(stat: Stat) -> bool {
    TRAINABLE_STATS.contains(&stat)
}

/// A countdown of whole seconds. The stat reward is applied by the caller
/// when [`TrainingSession::tick`] reports completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    pub stat: Stat,
    pub duration_seconds: u32,
    pub time_left: u32,
    pub progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingTick {
    Progress(u32),
    Complete,
    /// The session had already finished; nothing changed.
    Idle,
}

impl TrainingSession {
    pub fn start(stat: Stat, duration_seconds: u32) -> Result<Self, GameError> {
        if !is_trainable(stat) {
            return Err(GameError::NotTrainable { stat });
        }
        let duration_seconds = duration_seconds.max(1);
        Ok(Self {
            stat,
            duration_seconds,
            time_left: duration_seconds,
            progress: 0,
        })
    }

    /// Still counting down. A finished session lingers for display but no
    /// longer blocks a new one.
    pub fn is_active(&self) -> bool {
        self.time_left > 0
    }

    /// One second of training.
    pub fn tick(&mut self) -> TrainingTick {
        if self.time_left == 0 {
            return TrainingTick::Idle;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.progress = 100;
            return TrainingTick::Complete;
        }
        let before = self.time_left;
        let elapsed = self.duration_seconds - (before - 1);
        self.progress = elapsed * 100 / self.duration_seconds;
        self.time_left = before - 1;
        TrainingTick::Progress(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_physical_and_int_trainable() {
        assert!(is_trainable(Stat::Vit));
        assert!(is_trainable(Stat::Int));
        assert!(!is_trainable(Stat::Per));
        assert_eq!(
            TrainingSession::start(Stat::Cmd, 10),
            Err(GameError::NotTrainable { stat: Stat::Cmd })
        );
    }

    #[test]
    fn test_progress_sequence() {
        let mut session = TrainingSession::start(Stat::Str, 10).unwrap();
        let mut seen = Vec::new();
        loop {
            match session.tick() {
                TrainingTick::Progress(p) => seen.push(p),
                TrainingTick::Complete => break,
                TrainingTick::Idle => unreachable!(),
            }
        }
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(session.progress, 100);
        assert!(!session.is_active());
        assert_eq!(session.tick(), TrainingTick::Idle);
    }

    #[test]
    fn test_progress_floors() {
        let mut session = TrainingSession::start(Stat::Agi, 3).unwrap();
        // (3 - 2) / 3 = 33.3%
        assert_eq!(session.tick(), TrainingTick::Progress(33));
        assert_eq!(session.tick(), TrainingTick::Progress(66));
        assert_eq!(session.tick(), TrainingTick::Complete);
    }
}
