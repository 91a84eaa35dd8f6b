/// Seconds left until the account may claim again. An account without a
/// recorded claim owes no wait regardless of the configured cooldown.
pub fn remaining_cooldown(last_claimed: Option<u64>, cooldown_period: u64, now: u64) -> u64 {
    match last_claimed {
        Some(claimed_at) => claimed_at
            .saturating_add(cooldown_period)
            .saturating_sub(now),
        None => 0,
    }
}
