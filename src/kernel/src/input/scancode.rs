//! Scancode set 1 to ASCII.

/// Make code of the Enter key.
pub const ENTER: u8 = 0x1C;

/// Bit set on break (key release) codes.
pub const RELEASE_BIT: u8 = 0x80;

/// Unshifted US layout, indexed by make code. Zero means no character
/// (modifiers, function keys, keypad, unused codes).
pub static SCANCODE_TO_ASCII: [u8; 128] = build_table();

const fn build_table() -> [u8; 128] {
    // Each run starts at its first make code and covers consecutive keys.
    const RUNS: [(usize, &[u8]); 4] = [
        (0x02, b"1234567890-=\x08"),
        (0x0F, b"\tqwertyuiop[]\n"),
        (0x1E, b"asdfghjkl;'`"),
        (0x2B, b"\\zxcvbnm,./"),
    ];

    let mut table = [0u8; 128];
    let mut run = 0;
    while run < RUNS.len() {
        let (start, keys) = RUNS[run];
        let mut i = 0;
        while i < keys.len() {
            table[start + i] = keys[i];
            i += 1;
        }
        run += 1;
    }
    table[0x01] = 0x1B; // Escape
    table[0x37] = b'*'; // keypad
    table[0x39] = b' ';
    table
}

/// Looks up the character for a make code, if it has one.
pub fn to_ascii(make_code: u8) -> Option<u8> {
    match SCANCODE_TO_ASCII.get(make_code as usize) {
        Some(&0) | None => None,
        Some(&byte) => Some(byte),
    }
}
