//! Pure name and avatar resolvers. All of these are stable functions of
//! their inputs so repeated runs assign identical names and avatars.

use std::collections::HashSet;

use crate::corpus::groups::{BEST_FRIENDS_EMOJIS, GROUP_AVATAR_RULES, GROUP_NAMES};
use crate::corpus::people::AVATAR_POOL;

/// Java-style string hash (`h * 31 + ch`, wrapping). Matches the hash the
/// avatar fallback was originally written against, so a given name+index
/// always lands on the same pool slot.
pub fn string_hash(s: &str) -> i64 {
    s.chars()
        .fold(0i64, |h, c| h.wrapping_mul(31).wrapping_add(c as i64))
}

/// Themed group name for a conversation index. An emoji is appended only for
/// even indices, chosen by `index % candidates`, skipping empty slots.
/// Index 6 is hand-picked as "Best Friends".
pub fn group_name(index: usize) -> String {
    let (name, emojis) = if index == 6 {
        ("Best Friends", BEST_FRIENDS_EMOJIS)
    } else {
        GROUP_NAMES[index % GROUP_NAMES.len()]
    };

    if index % 2 == 0 && !emojis.is_empty() {
        let start = index % emojis.len();
        for offset in 0..emojis.len() {
            let candidate = emojis[(start + offset) % emojis.len()];
            if !candidate.is_empty() {
                return format!("{name} {candidate}");
            }
        }
    }
    name.to_string()
}

/// De-duplicate a generated name against the names already used in this run
/// by appending a numeric suffix on collision.
pub(crate) fn unique_group_name(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base} {n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Themed group avatar: ordered substring rules over the lowercased name,
/// first match wins, hash fallback into the general pool otherwise.
pub fn group_avatar_url(name: &str, conversation_index: usize) -> String {
    let lower = name.to_lowercase();
    for (keywords, url) in GROUP_AVATAR_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return (*url).to_string();
        }
    }
    let idx = (string_hash(name).unsigned_abs() as usize + conversation_index) % AVATAR_POOL.len();
    AVATAR_POOL[idx].to_string()
}

/// Avatar for the counterpart of a direct chat. Resolves from the
/// conversation index alone; the `user_id` parameter is accepted for
/// call-site compatibility but never read, as it is only invoked once per
/// direct conversation.
pub fn individual_avatar_url(_user_id: &str, conversation_index: usize) -> String {
    AVATAR_POOL[conversation_index % AVATAR_POOL.len()].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_is_stable() {
        assert_eq!(group_name(9), group_name(9));
        assert_eq!(group_name(12), group_name(12));
    }

    #[test]
    fn test_group_name_index_6_is_best_friends() {
        let name = group_name(6);
        assert!(name.starts_with("Best Friends"), "got {name}");
        // even index: emoji appended
        assert!(name.len() > "Best Friends".len());
    }

    #[test]
    fn test_odd_index_gets_no_emoji() {
        let name = group_name(3);
        assert_eq!(name, "Study Buddies");
    }

    #[test]
    fn test_empty_emoji_slots_are_skipped() {
        // Index 6 of the table is ("The Inner Circle", ["", "🔵"]); start slot
        // is empty, so the scan must land on the non-empty candidate.
        let name = group_name(46); // 46 % 40 == 6, even
        assert_eq!(name, "The Inner Circle 🔵");
    }

    #[test]
    fn test_unique_group_name_appends_suffix() {
        let mut used = HashSet::new();
        assert_eq!(unique_group_name("Book Club".into(), &mut used), "Book Club");
        assert_eq!(
            unique_group_name("Book Club".into(), &mut used),
            "Book Club 2"
        );
        assert_eq!(
            unique_group_name("Book Club".into(), &mut used),
            "Book Club 3"
        );
    }

    #[test]
    fn test_group_avatar_first_match_wins() {
        // "work" rule outranks the hash fallback
        let url = group_avatar_url("Work Chat 💼", 15);
        assert!(url.contains("grp-work"));
        // "best friends" hits the "friend" substring rule
        let url = group_avatar_url("Best Friends 💯", 6);
        assert!(url.contains("grp-friends"));
    }

    #[test]
    fn test_group_avatar_hash_fallback_is_stable() {
        let a = group_avatar_url("Book Worms", 21);
        let b = group_avatar_url("Book Worms", 21);
        assert_eq!(a, b);
        assert!(AVATAR_POOL.contains(&a.as_str()));
    }

    #[test]
    fn test_individual_avatar_ignores_user() {
        assert_eq!(
            individual_avatar_url("user_2", 4),
            individual_avatar_url("user_99", 4)
        );
    }
}
