use super::CompressorError;
use super::Compressor;
use super::dictionary::{Dictionary, SEED_SIZE};

use tracing::debug;


#[derive(Debug, Clone)]
pub struct LZW {
    init_dict: Dictionary,
}

impl Default for LZW {
    fn default() -> Self {
        LZW::new()
    }
}

impl LZW {
    pub fn new() -> LZW {
        LZW {
            init_dict: Dictionary::seeded(),
        }
    }

    pub fn compress(&self, text: &[u16]) -> Result<Vec<u32>, CompressorError> {
        Compressor::compress(self, text)
    }

    pub fn decompress(&self, codes: &[u32]) -> Result<Vec<u16>, CompressorError> {
        Compressor::decompress(self, codes)
    }

    pub fn compress_str(&self, text: &str) -> Result<Vec<u32>, CompressorError> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.encode(&units)
    }

    pub fn decompress_to_string(&self, codes: &[u32]) -> Result<String, CompressorError> {
        let units = self.decode(codes)?;
        String::from_utf16(&units).map_err(|_| CompressorError::InvalidText)
    }

    /// Greedy longest-match encoding.
    ///
    /// Every unit must lie in the seed range; the first one that does not is
    /// reported with its position and nothing is emitted.
    pub fn encode(&self, text: &[u16]) -> Result<Vec<u32>, CompressorError> {
        if let Some(position) = text.iter().position(|&unit| unit as usize >= SEED_SIZE) {
            return Err(CompressorError::UnseededCharacter { position, unit: text[position] });
        }

        let mut dict = self.init_dict.clone();

        let mut result: Vec<u32> = Vec::new();
        let mut pending: Vec<u16> = Vec::new();

        for &unit in text {
            pending.push(unit);

            if dict.contains(&pending) {
                continue;
            }

            let word = std::mem::replace(&mut pending, vec![unit]);
            let matched = &word[..word.len() - 1];

            result.push(Self::code_of(&dict, matched)?);
            dict.add(word);
        }

        if !pending.is_empty() {
            result.push(Self::code_of(&dict, &pending)?);
        }

        debug!(units = text.len(), codes = result.len(), dictionary = dict.size(), "encoded");

        Ok(result)
    }

    /// Rebuilds the text from `codes`, growing the dictionary one step behind
    /// the encoder that produced them.
    pub fn decode(&self, codes: &[u32]) -> Result<Vec<u16>, CompressorError> {
        let (&first_code, rest) = codes.split_first().ok_or(CompressorError::EmptyInput)?;

        let mut dict = self.init_dict.clone();

        let mut var: Vec<u16> = dict
            .sequence_of(first_code)
            .ok_or(CompressorError::MalformedCodeReference {
                code: first_code,
                position: 0,
                dictionary_size: dict.size(),
            })?
            .to_vec();
        let mut result: Vec<u16> = var.clone();

        for (i, &code) in rest.iter().enumerate() {
            let entry: Vec<u16> = match dict.sequence_of(code) {
                Some(word) => word.to_vec(),
                // The encoder created this code on the step that emitted it.
                None if code as usize == dict.size() => {
                    let mut entry = var.clone();
                    entry.push(var[0]);
                    entry
                }
                None => {
                    return Err(CompressorError::MalformedCodeReference {
                        code,
                        position: i + 1,
                        dictionary_size: dict.size(),
                    });
                }
            };

            result.extend_from_slice(&entry);

            let mut new_entry = var;
            new_entry.push(entry[0]);
            dict.add(new_entry);

            var = entry;
        }

        debug!(codes = codes.len(), units = result.len(), dictionary = dict.size(), "decoded");

        Ok(result)
    }

    fn code_of(dict: &Dictionary, word: &[u16]) -> Result<u32, CompressorError> {
        dict.code_of(word)
            .ok_or(CompressorError::InvariantViolation("pending match missing from dictionary"))
    }
}

impl Compressor for LZW {
    fn compress(&self, text: &[u16]) -> Result<Vec<u32>, CompressorError> {
        self.encode(text)
    }

    fn decompress(&self, codes: &[u32]) -> Result<Vec<u16>, CompressorError> {
        self.decode(codes)
    }
}
