use smallvec::SmallVec;

/// `a, b, ..., z, aa, ab, ...`
#[derive(Debug, Clone, Default)]
pub struct SafeKeyGenerator {
    issued: u64,
}

impl SafeKeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_key(&mut self) -> String {
        let key = key_for_index(self.issued);
        self.issued += 1;
        key
    }
}

impl Iterator for SafeKeyGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_key())
    }
}

// bijective base-26
fn key_for_index(mut index: u64) -> String {
    let mut letters: SmallVec<[char; 8]> = SmallVec::new();
    loop {
        letters.push(char::from(b'a' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_with_single_letters() {
        let keys: Vec<String> = SafeKeyGenerator::new().take(3).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn rolls_over_to_two_letters_after_z() {
        let keys: Vec<String> = SafeKeyGenerator::new().skip(24).take(5).collect();
        assert_eq!(keys, vec!["y", "z", "aa", "ab", "ac"]);
    }

    #[test]
    fn rolls_over_between_two_letter_prefixes() {
        let keys: Vec<String> = SafeKeyGenerator::new().skip(50).take(3).collect();
        assert_eq!(keys, vec!["ay", "az", "ba"]);
    }

    #[test]
    fn rolls_over_to_three_letters_after_zz() {
        let keys: Vec<String> = SafeKeyGenerator::new().skip(701).take(2).collect();
        assert_eq!(keys, vec!["zz", "aaa"]);
    }

    #[test]
    fn never_repeats_and_keeps_length_monotonic() {
        let keys: Vec<String> = SafeKeyGenerator::new().take(5000).collect();
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());

        for pair in keys.windows(2) {
            assert!(pair[0].len() <= pair[1].len());
            if pair[0].len() == pair[1].len() {
                assert!(pair[0] < pair[1]);
            }
        }
        assert!(
            keys.iter()
                .all(|key| key.bytes().all(|b| b.is_ascii_lowercase()))
        );
    }

    #[test]
    fn fresh_generators_restart() {
        let mut first = SafeKeyGenerator::new();
        first.next_key();
        first.next_key();
        assert_eq!(SafeKeyGenerator::new().next_key(), "a");
        assert_eq!(first.next_key(), "c");
    }
}
