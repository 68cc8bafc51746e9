use serde::Serialize;

/// Dashboard banner message. Deterministic and total over its inputs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Motivation {
    pub emoji: &'static str,
    pub text: &'static str,
}

const ACTIVE_MINUTES_TARGET: i64 = 30;

/// Pick the banner for the day. The banding is monotonic: more activity or
/// staying within the calorie budget never drops the user to a worse tier.
pub fn motivate(calories_consumed: i64, active_minutes: i64, daily_limit: i64) -> Motivation {
    let over_budget = calories_consumed > daily_limit;

    match (over_budget, active_minutes) {
        (false, m) if m >= ACTIVE_MINUTES_TARGET => Motivation {
            emoji: "🔥",
            text: "Crushing it! Calories on track and plenty of movement.",
        },
        (false, m) if m > 0 => Motivation {
            emoji: "💪",
            text: "Nice balance today. A bit more movement and you're golden.",
        },
        (false, _) => Motivation {
            emoji: "🥗",
            text: "Calories on track. How about a quick walk?",
        },
        (true, m) if m >= ACTIVE_MINUTES_TARGET => Motivation {
            emoji: "🏃",
            text: "Over your calorie budget, but you're working it off.",
        },
        (true, _) => Motivation {
            emoji: "😅",
            text: "Over budget today. Tomorrow is a fresh start.",
        },
    }
}

#[cfg(test)]
mod motivation_tests {
    use super::*;

    // Higher is better. Used only to check ordering between states.
    fn tier(m: Motivation) -> i32 {
        match m.emoji {
            "🔥" => 4,
            "💪" => 3,
            "🥗" => 2,
            "🏃" => 1,
            "😅" => 0,
            _ => unreachable!(),
        }
    }

    #[test]
    fn total_over_a_grid_of_inputs() {
        for consumed in [0, 500, 1999, 2000, 2001, 5000] {
            for minutes in [0, 1, 29, 30, 45, 300] {
                // Must not panic and must land in a known tier.
                let _ = tier(motivate(consumed, minutes, 2000));
            }
        }
    }

    #[test]
    fn more_activity_never_worsens_the_tier() {
        for consumed in [0, 1500, 2500] {
            let mut last = tier(motivate(consumed, 0, 2000));
            for minutes in [1, 15, 30, 60, 120] {
                let t = tier(motivate(consumed, minutes, 2000));
                assert!(t >= last, "tier dropped at {consumed} kcal, {minutes} min");
                last = t;
            }
        }
    }

    #[test]
    fn staying_within_budget_never_worsens_the_tier() {
        for minutes in [0, 10, 30, 90] {
            let within = tier(motivate(1500, minutes, 2000));
            let over = tier(motivate(2500, minutes, 2000));
            assert!(within >= over);
        }
    }

    #[test]
    fn exactly_at_the_limit_counts_as_within_budget() {
        assert_eq!(motivate(2000, 0, 2000).emoji, "🥗");
        assert_eq!(motivate(2001, 0, 2000).emoji, "😅");
    }
}
