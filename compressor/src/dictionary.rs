use std::collections::HashMap;

/// Number of single-unit entries every dictionary starts with.
pub const SEED_SIZE: usize = 256;

/// Append-only table of character sequences, addressable by code and by content.
///
/// Code `n` is the `n`-th inserted sequence. `words` answers code lookups by
/// index and `codes` answers sequence lookups by hash; both views are kept in
/// step by `add`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Vec<u16>>,
    codes: HashMap<Vec<u16>, u32>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// A dictionary with the 256 seed entries already in place.
    pub fn seeded() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.seed();
        dict
    }

    /// Appends one single-unit entry for every unit in `0..256`, in order.
    pub fn seed(&mut self) {
        self.words.reserve(SEED_SIZE);
        self.codes.reserve(SEED_SIZE);

        for unit in 0..SEED_SIZE as u16 {
            self.add(vec![unit]);
        }
    }

    /// Appends `word` under the next unused code and returns that code.
    ///
    /// The caller must make sure `word` is not already present. Adding a
    /// duplicate still consumes a code, but lookups by content keep
    /// resolving to the first entry.
    pub fn add(&mut self, word: Vec<u16>) -> u32 {
        let code = self.words.len() as u32;
        self.codes.entry(word.clone()).or_insert(code);
        self.words.push(word);
        code
    }

    pub fn contains(&self, word: &[u16]) -> bool {
        self.codes.contains_key(word)
    }

    pub fn code_of(&self, word: &[u16]) -> Option<u32> {
        self.codes.get(word).copied()
    }

    pub fn sequence_of(&self, code: u32) -> Option<&[u16]> {
        self.words.get(code as usize).map(Vec::as_slice)
    }

    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}


#[cfg(test)]
mod dictionary_test {
    use super::*;

    #[test]
    fn seed_res() {
        let dict = Dictionary::seeded();

        assert_eq!(dict.size(), SEED_SIZE);

        for code in 0..SEED_SIZE as u32 {
            assert_eq!(dict.sequence_of(code), Some(&[code as u16][..]));
            assert_eq!(dict.code_of(&[code as u16]), Some(code));
        }

        assert_eq!(dict.sequence_of(SEED_SIZE as u32), None);
        assert!(!dict.contains(&[SEED_SIZE as u16]));
    }

    #[test]
    fn add_res() {
        let mut dict = Dictionary::seeded();

        let ab: Vec<u16> = "AB".encode_utf16().collect();
        assert!(!dict.contains(&ab));

        let code = dict.add(ab.clone());

        assert_eq!(code, 256);
        assert_eq!(dict.size(), 257);
        assert!(dict.contains(&ab));
        assert_eq!(dict.code_of(&ab), Some(256));
        assert_eq!(dict.sequence_of(256), Some(&ab[..]));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new();

        assert!(dict.is_empty());
        assert_eq!(dict.code_of(&[0]), None);
        assert_eq!(dict.sequence_of(0), None);
    }

    #[test]
    fn duplicate_add_keeps_first_code() {
        let mut dict = Dictionary::seeded();

        let code = dict.add(vec![65]);

        assert_eq!(code, 256);
        assert_eq!(dict.size(), 257);
        assert_eq!(dict.code_of(&[65]), Some(65));
        assert_eq!(dict.sequence_of(256), Some(&[65u16][..]));
    }
}
