//! Content selection for the injected unread tail: conversation-specific
//! scripts for direct chats, theme-matched scripts for groups, generic
//! follow-up pools when a script is missing or runs out.

use crate::corpus::unread::{DIRECT_UNREAD_SCRIPTS, GENERIC_FOLLOW_UPS, GROUP_UNREAD_SCRIPTS};

pub(crate) fn unread_lines(index: usize, title: Option<&str>, count: usize) -> Vec<&'static str> {
    let script: Option<&[&str]> = match title {
        Some(t) => {
            let lower = t.to_lowercase();
            GROUP_UNREAD_SCRIPTS
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(_, lines)| *lines)
        }
        None => DIRECT_UNREAD_SCRIPTS
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, lines)| *lines),
    };

    (0..count)
        .map(|k| {
            if let Some(lines) = script {
                if k < lines.len() {
                    return lines[k];
                }
            }
            let pool = GENERIC_FOLLOW_UPS[index % GENERIC_FOLLOW_UPS.len()];
            pool[k % pool.len()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_script_covers_exact_count() {
        let lines = unread_lines(2, None, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Okay so update on the apartment saga");
    }

    #[test]
    fn test_group_theme_match() {
        let lines = unread_lines(12, Some("Gym Rats 💪"), 3);
        assert_eq!(lines, vec!["Class moved to 7am", "Bring your own mat tomorrow", "Who's in?"]);
    }

    #[test]
    fn test_generic_pool_fallback_and_cycling() {
        // No script for this index: generic pool, cycled past its length.
        let lines = unread_lines(5, None, 6);
        assert_eq!(lines.len(), 6);
        let pool = GENERIC_FOLLOW_UPS[5 % GENERIC_FOLLOW_UPS.len()];
        assert_eq!(lines[0], pool[0]);
        assert_eq!(lines[4], pool[0]);
    }

    #[test]
    fn test_script_exhaustion_pads_from_pool() {
        // Direct conv 7's script has a single line; extra lines come from
        // the generic pool for index 7.
        let lines = unread_lines(7, None, 3);
        assert_eq!(lines[0], "Sent you the new ETA, see you at arrivals?");
        let pool = GENERIC_FOLLOW_UPS[7 % GENERIC_FOLLOW_UPS.len()];
        assert_eq!(lines[1], pool[1]);
    }
}
