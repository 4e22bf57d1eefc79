//! The Keccak-f[200] permutation.
//!
//! The 200-bit state is a 5×5 matrix of 8-bit lanes, stored row-major as
//! `state[x + 5y]`. Each round applies the five step mappings θ, ρ, π, χ
//! and ι of FIPS 202 §3.2.1-5:
//! <https://dx.doi.org/10.6028/NIST.FIPS.202>
//!
//! With 8-bit lanes the ρ rotation offsets are the standard Keccak offsets
//! reduced mod 8, and ι uses the low byte of each standard round constant.
//! Keccak-f[200] has 18 rounds in total; Delirium applies all of them.

/// ρ rotation offsets, indexed `x + 5y`, already reduced mod the lane width.
const ROT: [u32; 25] = [
    0, 1, 6, 4, 3, //
    4, 4, 6, 7, 4, //
    3, 2, 3, 1, 7, //
    1, 5, 7, 5, 0, //
    2, 2, 5, 0, 6,
];

/// ι round constants: the low byte of the standard Keccak constants, which
/// are themselves produced by an LFSR over x⁸ + x⁶ + x⁵ + x⁴ + 1 (the test
/// suite regenerates the table from that LFSR).
const RC: [u8; 18] = [
    0x01, 0x82, 0x8A, 0x00, 0x8B, 0x01, 0x81, 0x09, 0x8A, 0x88, 0x09, 0x0A, 0x8B, 0x8B, 0x89, 0x03,
    0x02, 0x80,
];

/// Apply `rounds` rounds of Keccak-f[200] to `state` in place.
///
/// `rounds` must not exceed 18, the full count used by Delirium.
pub fn permute_200(state: &mut [u8; 25], rounds: usize) {
    for r in 0..rounds {
        round(state, RC[r]);
    }
}

fn round(state: &mut [u8; 25], rc: u8) {
    // θ: XOR each lane with the parities of the two neighbouring columns.
    let mut c = [0u8; 5];
    for x in 0..5 {
        c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }

    // ρ and π combined: rotate each lane, then move it to (y, 2x + 3y).
    let mut b = [0u8; 25];
    for x in 0..5 {
        for y in 0..5 {
            b[y + 5 * ((2 * x + 3 * y) % 5)] = state[x + 5 * y].rotate_left(ROT[x + 5 * y]);
        }
    }

    // χ: the only non-linear step, applied along each row.
    for y in 0..5 {
        for x in 0..5 {
            state[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
        }
    }

    // ι
    state[0] ^= rc;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One step of the degree-8 LFSR behind the round constants; returns the
    /// output bit before stepping.
    fn lfsr86540(state: &mut u8) -> bool {
        let out = *state & 1 != 0;
        let high = *state & 0x80 != 0;
        *state <<= 1;
        if high {
            // Reduce by x⁸ = x⁶ + x⁵ + x⁴ + 1.
            *state ^= 0x71;
        }
        out
    }

    #[test]
    fn round_constants_match_generating_lfsr() {
        let mut lfsr = 0x01u8;
        let mut table = [0u8; 18];
        for rc in table.iter_mut() {
            // Seven LFSR outputs per round; for 8-bit lanes only the first
            // four land inside the lane, at bit positions 2^j - 1.
            for j in 0..7 {
                if lfsr86540(&mut lfsr) && j < 4 {
                    *rc |= 1 << ((1u8 << j) - 1);
                }
            }
        }
        assert_eq!(table, RC);
    }

    #[test]
    fn rotation_offsets_match_generating_walk() {
        // Offsets are the triangular numbers (t+1)(t+2)/2 laid down along
        // the walk (x, y) -> (y, 2x + 3y) starting from (1, 0); lane (0, 0)
        // is never visited and keeps offset 0.
        let mut table = [0u32; 25];
        let (mut x, mut y) = (1usize, 0usize);
        for t in 0..24u32 {
            table[x + 5 * y] = ((t + 1) * (t + 2) / 2) % 8;
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }
        assert_eq!(table, ROT);
    }

    #[test]
    fn first_round_on_zero_state_sets_only_the_first_round_constant() {
        // θ, ρ, π and χ all fix the all-zero state, so one round leaves
        // exactly ι's contribution.
        let mut state = [0u8; 25];
        permute_200(&mut state, 1);
        let mut expect = [0u8; 25];
        expect[0] = 0x01;
        assert_eq!(state, expect);
    }

    #[test]
    fn full_permutation_is_deterministic_and_nontrivial() {
        let mut a: [u8; 25] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let mut b = a;
        permute_200(&mut a, 18);
        permute_200(&mut b, 18);
        assert_eq!(a, b);
        assert_ne!(a, core::array::from_fn(|i| (i as u8).wrapping_mul(37)));
    }
}
