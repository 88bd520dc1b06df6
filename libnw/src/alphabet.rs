pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DOT: u8 = 46;
pub const UTF8_COLON: u8 = 58;
pub const UTF8_UNDERSCORE: u8 = 95;
pub const UTF8_PIPE: u8 = 124;

/// Fills position 0 of a sequence's byte vector so that residue i sits at index i.
pub const PAD_BYTE: u8 = 255;

/// The symbol placed in an aligned sequence opposite a residue of the other sequence.
pub const GAP: u8 = UTF8_UNDERSCORE;

/// Middle line symbol for two identical residues
pub const LADDER_MATCH: u8 = UTF8_PIPE;
/// Middle line symbol for two different residues
pub const LADDER_MISMATCH: u8 = UTF8_COLON;
/// Middle line symbol for a residue opposite a gap
pub const LADDER_GAP: u8 = UTF8_DOT;

/// maps from \<usize\> -> \<UTF8 nucleotide\>
pub const DNA_ALPHABET: [u8; 4] = [
    65, // A
    67, // C
    71, // G
    84, // T
];
