use std::collections::BTreeMap;
use steel::*;
use crate::consts::*;
use crate::error::*;
use super::BanRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voter {
    pub candidate: Pubkey,
    pub weight: u64,
}

impl Default for Voter {
    fn default() -> Self {
        Self { candidate: NO_DELEGATE, weight: 0 }
    }
}

/// The active delegate plus one slot on either side of it. `previous` is
/// kept for audit only and never read back by the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delegation {
    pub previous: Pubkey,
    pub current: Pubkey,
    pub next: Pubkey,
}

impl Default for Delegation {
    fn default() -> Self {
        Self {
            previous: NO_DELEGATE,
            current: NO_DELEGATE,
            next: NO_DELEGATE,
        }
    }
}

impl Delegation {
    /// `previous <- current`, `current <- candidate`.
    fn promote(&mut self, candidate: Pubkey) -> Pubkey {
        let demoted = self.current;
        self.previous = demoted;
        self.current = candidate;
        demoted
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelegationEngine {
    voters: BTreeMap<Pubkey, Voter>,
    votes: BTreeMap<Pubkey, u128>,
    delegation: Delegation,
}

impl DelegationEngine {
    pub fn delegation(&self) -> Delegation {
        self.delegation
    }

    pub fn current_delegate(&self) -> Pubkey {
        self.delegation.current
    }

    pub fn voter(&self, owner: &Pubkey) -> Voter {
        self.voters.get(owner).copied().unwrap_or_default()
    }

    pub fn votes_of(&self, candidate: &Pubkey) -> u128 {
        self.votes.get(candidate).copied().unwrap_or(0)
    }

    /// Casts `weight` for `candidate` on behalf of `owner`, replacing the
    /// owner's previous vote, then re-ranks the delegation slots.
    ///
    /// Voting for `NO_DELEGATE` or for a banned candidate leaves the owner
    /// without a candidate. Returns the new active delegate if it changed.
    pub fn vote(
        &mut self,
        owner: Pubkey,
        candidate: Pubkey,
        weight: u64,
        bans: &BanRegistry,
        now: i64,
    ) -> DexResult<Option<Pubkey>> {
        let before = self.delegation.current;

        // Withdraw the old vote
        let prior = self.voter(&owner);
        if prior.candidate != NO_DELEGATE {
            let votes = self.votes_of(&prior.candidate)
                .checked_sub(prior.weight as u128)
                .ok_or(DexError::MathOverflow)?;
            self.set_votes(prior.candidate, votes);
        }

        let chosen = if candidate == NO_DELEGATE || bans.is_banned(&candidate, now) {
            NO_DELEGATE
        } else {
            let votes = self.votes_of(&candidate)
                .checked_add(weight as u128)
                .ok_or(DexError::MathOverflow)?;
            self.set_votes(candidate, votes);
            candidate
        };

        if chosen == NO_DELEGATE && weight == 0 {
            self.voters.remove(&owner);
        } else {
            self.voters.insert(owner, Voter { candidate: chosen, weight });
        }

        self.rerank(chosen, bans, now);

        let after = self.delegation.current;
        Ok((after != before).then_some(after))
    }

    fn rerank(&mut self, chosen: Pubkey, bans: &BanRegistry, now: i64) {
        let d = &mut self.delegation;

        if d.next != NO_DELEGATE && bans.is_banned(&d.next, now) {
            d.next = NO_DELEGATE;
        }
        if d.current != NO_DELEGATE && bans.is_banned(&d.current, now) {
            let next = d.next;
            d.promote(next);
            d.next = NO_DELEGATE;
        }

        if chosen != NO_DELEGATE && chosen != d.current {
            let chosen_votes = self.votes.get(&chosen).copied().unwrap_or(0);
            let current_votes = self.votes.get(&d.current).copied().unwrap_or(0);
            let next_votes = self.votes.get(&d.next).copied().unwrap_or(0);

            // An empty slot only takes a candidate that carries weight
            if chosen_votes > current_votes {
                let demoted = d.promote(chosen);
                if d.next == chosen {
                    d.next = demoted;
                } else if demoted != NO_DELEGATE
                    && (d.next == NO_DELEGATE || current_votes >= next_votes)
                {
                    d.next = demoted;
                }
            } else if chosen != d.next && chosen_votes > next_votes {
                d.next = chosen;
            }
        }

        // Weight may have moved away from current without a new candidate
        let current_votes = self.votes.get(&d.current).copied().unwrap_or(0);
        let next_votes = self.votes.get(&d.next).copied().unwrap_or(0);
        if d.next != NO_DELEGATE && next_votes > current_votes {
            let next = d.next;
            d.next = d.promote(next);
        }
    }

    fn set_votes(&mut self, candidate: Pubkey, votes: u128) {
        if votes == 0 {
            self.votes.remove(&candidate);
        } else {
            self.votes.insert(candidate, votes);
        }
    }
}
