//! Bernoulli tables for the discrete Gaussian sampler.
//!
//! Row `i` encodes `exp(-2^i / (2 sigma^2))` as a big-endian 64-bit
//! fixed-point fraction. Rows are stored back to back, eight bytes each.

/// One CDT table together with the `k_sigma` constants of its sigma.
#[derive(Debug, Clone, Copy)]
pub struct CdtTable {
    /// Standard deviation the table was generated for
    pub sigma: u32,
    /// Number of rows
    pub ell: u32,
    /// Bits of precision per row
    pub precision: u32,
    /// `ceil(sqrt(2 ln 2) * sigma)`
    pub k_sigma: u16,
    /// Significant bits of `k_sigma`
    pub k_sigma_bits: u16,
    /// Row-major table bytes, `ell * precision / 8` long
    pub rows: &'static [u8],
}

static SIGMA_100_ROWS: [u8; 152] = [
    255, 252, 188, 214, 159, 125, 46, 173,
    255, 249, 121, 183, 227, 145, 79, 159,
    255, 242, 243, 154, 88, 243, 134, 131,
    255, 229, 231, 222, 244, 211, 180, 81,
    255, 203, 210, 102, 210, 163, 227, 253,
    255, 151, 175, 112, 51, 161, 106, 255,
    255, 47, 137, 97, 245, 115, 19, 89,
    254, 95, 188, 132, 226, 173, 94, 253,
    252, 194, 29, 229, 39, 67, 183, 19,
    249, 142, 190, 12, 120, 26, 139, 19,
    243, 70, 253, 75, 164, 143, 98, 225,
    231, 47, 216, 141, 26, 100, 205, 190,
    208, 199, 97, 191, 224, 160, 6, 160,
    170, 68, 154, 32, 234, 166, 59, 153,
    113, 63, 47, 21, 245, 237, 14, 2,
    50, 24, 215, 41, 152, 147, 99, 58,
    9, 205, 182, 117, 76, 61, 19, 111,
    0, 96, 28, 33, 249, 67, 99, 84,
    0, 0, 36, 21, 28, 146, 101, 147,
];

/// Table for `sigma = 100`
pub static SIGMA_100: CdtTable = CdtTable {
    sigma: 100,
    ell: 19,
    precision: 64,
    k_sigma: 118,
    k_sigma_bits: 7,
    rows: &SIGMA_100_ROWS,
};

static SIGMA_215_ROWS: [u8; 168] = [
    255, 255, 75, 191, 247, 94, 30, 52,
    255, 254, 151, 128, 109, 166, 88, 143,
    255, 253, 47, 2, 214, 243, 188, 77,
    255, 250, 94, 13, 156, 120, 121, 217,
    255, 244, 188, 58, 242, 219, 157, 174,
    255, 233, 120, 244, 202, 151, 25, 11,
    255, 210, 243, 229, 18, 88, 50, 240,
    255, 165, 239, 183, 102, 186, 123, 250,
    255, 75, 255, 30, 65, 137, 228, 148,
    254, 152, 124, 205, 192, 136, 102, 79,
    253, 50, 242, 124, 187, 59, 68, 224,
    250, 109, 189, 110, 40, 124, 88, 12,
    244, 250, 133, 6, 3, 13, 45, 9,
    234, 110, 130, 187, 138, 174, 82, 230,
    214, 174, 54, 179, 117, 116, 223, 152,
    180, 7, 186, 2, 112, 3, 68, 13,
    126, 154, 221, 207, 32, 206, 66, 171,
    62, 156, 208, 7, 129, 173, 200, 3,
    15, 80, 84, 209, 213, 2, 107, 160,
    0, 234, 131, 37, 182, 53, 201, 231,
    0, 0, 214, 212, 4, 32, 184, 94,
];

/// Table for `sigma = 215`
pub static SIGMA_215: CdtTable = CdtTable {
    sigma: 215,
    ell: 21,
    precision: 64,
    k_sigma: 254,
    k_sigma_bits: 8,
    rows: &SIGMA_215_ROWS,
};

static SIGMA_107_ROWS: [u8; 152] = [
    255, 253, 35, 133, 139, 148, 197, 17,
    255, 250, 71, 19, 70, 246, 14, 122,
    255, 244, 142, 71, 76, 192, 124, 59,
    255, 233, 29, 17, 145, 228, 243, 107,
    255, 210, 60, 46, 237, 238, 171, 244,
    255, 164, 128, 140, 73, 37, 222, 69,
    255, 73, 33, 204, 110, 3, 191, 89,
    254, 146, 198, 57, 142, 56, 140, 243,
    253, 39, 149, 128, 233, 91, 133, 34,
    250, 87, 67, 159, 177, 213, 79, 151,
    244, 206, 141, 210, 239, 188, 121, 35,
    234, 26, 101, 2, 167, 11, 36, 33,
    214, 20, 67, 97, 133, 197, 100, 38,
    179, 5, 226, 65, 164, 159, 27, 115,
    125, 49, 58, 138, 106, 190, 230, 23,
    61, 57, 28, 162, 162, 158, 76, 252,
    14, 164, 68, 99, 69, 31, 214, 19,
    0, 214, 96, 226, 141, 4, 239, 107,
    0, 0, 179, 134, 31, 110, 118, 129,
];

/// Table for `sigma = 107`
pub static SIGMA_107: CdtTable = CdtTable {
    sigma: 107,
    ell: 19,
    precision: 64,
    k_sigma: 126,
    k_sigma_bits: 7,
    rows: &SIGMA_107_ROWS,
};

static SIGMA_250_ROWS: [u8; 168] = [
    255, 255, 122, 95, 16, 128, 14, 195,
    255, 254, 244, 190, 102, 192, 187, 142,
    255, 253, 233, 125, 228, 131, 93, 148,
    255, 251, 211, 0, 37, 9, 199, 245,
    255, 247, 166, 17, 185, 251, 90, 150,
    255, 239, 76, 105, 50, 114, 159, 236,
    255, 222, 153, 233, 85, 187, 45, 205,
    255, 189, 56, 46, 38, 4, 83, 9,
    255, 122, 129, 199, 240, 52, 248, 193,
    254, 245, 73, 44, 68, 229, 150, 75,
    253, 235, 168, 56, 252, 93, 188, 161,
    251, 219, 163, 110, 233, 251, 114, 217,
    247, 200, 110, 236, 134, 237, 213, 112,
    239, 212, 98, 249, 238, 1, 227, 249,
    224, 174, 65, 2, 190, 158, 9, 7,
    197, 49, 104, 97, 61, 210, 19, 116,
    151, 229, 20, 46, 200, 238, 35, 134,
    90, 32, 10, 204, 78, 83, 191, 229,
    31, 186, 139, 154, 90, 155, 17, 8,
    3, 238, 181, 190, 138, 94, 50, 234,
    0, 15, 118, 216, 230, 142, 121, 211,
];

/// Table for `sigma = 250`
pub static SIGMA_250: CdtTable = CdtTable {
    sigma: 250,
    ell: 21,
    precision: 64,
    k_sigma: 295,
    k_sigma_bits: 9,
    rows: &SIGMA_250_ROWS,
};

static SIGMA_271_ROWS: [u8; 176] = [
    255, 255, 142, 111, 102, 2, 141, 88,
    255, 255, 28, 222, 254, 102, 20, 79,
    255, 254, 57, 190, 198, 79, 181, 181,
    255, 252, 115, 128, 178, 170, 212, 166,
    255, 248, 231, 13, 253, 108, 245, 47,
    255, 241, 206, 78, 90, 132, 83, 173,
    255, 227, 157, 102, 46, 28, 61, 128,
    255, 199, 61, 242, 19, 216, 133, 242,
    255, 142, 136, 121, 160, 225, 119, 215,
    255, 29, 67, 61, 254, 49, 27, 152,
    254, 59, 79, 77, 206, 26, 238, 42,
    252, 121, 191, 28, 11, 107, 141, 224,
    248, 255, 234, 37, 109, 169, 103, 26,
    242, 48, 213, 124, 209, 49, 33, 48,
    229, 32, 92, 240, 188, 88, 70, 35,
    205, 18, 234, 94, 14, 226, 237, 77,
    164, 71, 76, 192, 111, 161, 157, 188,
    105, 107, 110, 50, 56, 199, 208, 174,
    43, 105, 77, 122, 127, 254, 146, 221,
    7, 92, 139, 87, 204, 239, 111, 200,
    0, 54, 49, 19, 64, 40, 218, 222,
    0, 0, 11, 120, 189, 135, 113, 62,
];

/// Table for `sigma = 271`
pub static SIGMA_271: CdtTable = CdtTable {
    sigma: 271,
    ell: 22,
    precision: 64,
    k_sigma: 320,
    k_sigma_bits: 9,
    rows: &SIGMA_271_ROWS,
};

/// Look up the 64-bit precision table for `sigma`.
pub fn lookup(sigma: u32, ell: u32, precision: u32) -> Option<&'static CdtTable> {
    let table = match sigma {
        100 => &SIGMA_100,
        107 => &SIGMA_107,
        215 => &SIGMA_215,
        250 => &SIGMA_250,
        271 => &SIGMA_271,
        _ => return None,
    };
    (table.ell == ell && table.precision == precision).then_some(table)
}
