use std::collections::BTreeMap;
use steel::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ban {
    pub start_time: i64,
    pub period: u64,
}

impl Ban {
    /// A zero period is the unban convention.
    pub fn is_active(&self, now: i64) -> bool {
        self.period > 0 && (now as i128) < self.start_time as i128 + self.period as i128
    }
}

/// Ban windows per candidate. Entries are overwritten, never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BanRegistry {
    bans: BTreeMap<Pubkey, Ban>,
}

impl BanRegistry {
    pub fn ban(&mut self, subject: Pubkey, period: u64, now: i64) {
        self.bans.insert(subject, Ban { start_time: now, period });
    }

    pub fn get(&self, subject: &Pubkey) -> Ban {
        self.bans.get(subject).copied().unwrap_or_default()
    }

    pub fn is_banned(&self, subject: &Pubkey, now: i64) -> bool {
        self.bans
            .get(subject)
            .is_some_and(|ban| ban.is_active(now))
    }
}
